//! Fetches a resolved URL to a local file, optionally through a proxy.
//!
//! One plain GET per call: no retries, no resume, no reachability probing.
//! Everything that influences a transfer is carried by [`DownloadOptions`].

mod proxy;
mod transfer;

pub use proxy::{ProxyKind, ProxySettings};

use anyhow::Result;
use std::path::Path;

use crate::config::GeodlConfig;

/// Per-invocation transfer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Resolve and log only; never touch the network or the filesystem.
    pub no_download: bool,
    pub proxy: Option<ProxySettings>,
    pub connect_timeout_secs: u64,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            no_download: false,
            proxy: None,
            connect_timeout_secs: 30,
        }
    }
}

impl DownloadOptions {
    /// Options from config.toml; CLI flags are layered on top by the caller.
    pub fn from_config(cfg: &GeodlConfig) -> Result<Self> {
        let proxy = match &cfg.proxy {
            Some(p) => ProxySettings::from_config(p)?,
            None => None,
        };
        Ok(Self {
            no_download: false,
            proxy,
            connect_timeout_secs: cfg.connect_timeout_secs,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// `no_download` was set.
    Skipped,
    Completed { bytes: u64 },
}

/// Downloads `url` into `dest`.
///
/// On failure the partially written file is removed.
pub fn download_to_file(url: &str, dest: &Path, opts: &DownloadOptions) -> Result<DownloadOutcome> {
    url::Url::parse(url).map_err(|e| anyhow::anyhow!("invalid URL {}: {}", url, e))?;

    if opts.no_download {
        tracing::info!(url, dest = %dest.display(), "download skipped (no-download)");
        return Ok(DownloadOutcome::Skipped);
    }

    tracing::debug!(url, dest = %dest.display(), proxy = ?opts.proxy.as_ref().map(|p| p.url()), "downloading");
    match transfer::get_to_file(url, dest, opts) {
        Ok(bytes) => {
            tracing::info!(url, bytes, "download complete");
            Ok(DownloadOutcome::Completed { bytes })
        }
        Err(e) => {
            if let Err(rm) = std::fs::remove_file(dest) {
                if rm.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(dest = %dest.display(), "could not remove partial file: {}", rm);
                }
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProxyConfig;

    #[test]
    fn options_from_default_config() {
        let opts = DownloadOptions::from_config(&GeodlConfig::default()).unwrap();
        assert_eq!(opts, DownloadOptions::default());
    }

    #[test]
    fn options_pick_up_proxy_and_timeout() {
        let cfg = GeodlConfig {
            connect_timeout_secs: 7,
            proxy: Some(ProxyConfig {
                http: Some("proxy:8080".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let opts = DownloadOptions::from_config(&cfg).unwrap();
        assert_eq!(opts.connect_timeout_secs, 7);
        assert_eq!(opts.proxy.unwrap().url(), "http://proxy:8080");
    }

    #[test]
    fn no_download_skips_without_creating_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("france.osm.pbf");
        let opts = DownloadOptions {
            no_download: true,
            ..Default::default()
        };
        let outcome = download_to_file(
            "https://download.geofabrik.de/europe/france-latest.osm.pbf",
            &dest,
            &opts,
        )
        .unwrap();
        assert_eq!(outcome, DownloadOutcome::Skipped);
        assert!(!dest.exists());
    }

    #[test]
    fn invalid_url_rejected_before_anything_else() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("x");
        let opts = DownloadOptions {
            no_download: true,
            ..Default::default()
        };
        assert!(download_to_file("not a url", &dest, &opts).is_err());
    }
}
