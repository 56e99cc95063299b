//! CLI for geodl.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use geodl_core::config::{self, GeodlConfig, ProxyConfig};
use geodl_core::downloader::{DownloadOptions, ProxySettings};
use geodl_core::formats::DEFAULT_FORMAT;
use std::path::PathBuf;

use commands::{run_download, run_list, run_update};

/// Top-level CLI: download OpenStreetMap extracts by region name.
#[derive(Debug, Parser)]
#[command(name = "geodl")]
#[command(about = "A command-line tool for downloading OSM files", long_about = None)]
pub struct Cli {
    /// Catalog file (defaults to `catalog_path` from config.toml).
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Resolve URLs but do not download anything.
    #[arg(short = 'n', long = "nodownload", global = true)]
    pub no_download: bool,

    /// Be verbose.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub proxy: ProxyArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Proxy flags; each one overrides the matching `[proxy]` setting.
#[derive(Debug, Default, Clone, Args)]
pub struct ProxyArgs {
    /// Use an HTTP proxy, format: proxy_address:port.
    #[arg(
        long = "proxy-http",
        global = true,
        value_name = "ADDR",
        conflicts_with = "proxy_socks5"
    )]
    pub proxy_http: Option<String>,

    /// Use a SOCKS5 proxy, format: proxy_address:port.
    #[arg(long = "proxy-sock5", global = true, value_name = "ADDR")]
    pub proxy_socks5: Option<String>,

    /// Proxy user.
    #[arg(long = "proxy-user", global = true)]
    pub proxy_user: Option<String>,

    /// Proxy password.
    #[arg(long = "proxy-pass", global = true)]
    pub proxy_pass: Option<String>,
}

impl ProxyArgs {
    /// Flags win field by field. Naming a proxy on the command line replaces
    /// both proxy kinds from the config file.
    fn merge_into(&self, base: Option<ProxyConfig>) -> ProxyConfig {
        let mut merged = base.unwrap_or_default();
        if self.proxy_http.is_some() || self.proxy_socks5.is_some() {
            merged.http = self.proxy_http.clone();
            merged.socks5 = self.proxy_socks5.clone();
        }
        if self.proxy_user.is_some() {
            merged.user = self.proxy_user.clone();
        }
        if self.proxy_pass.is_some() {
            merged.pass = self.proxy_pass.clone();
        }
        merged
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show elements available.
    List {
        /// Generate the list in Markdown format.
        #[arg(long)]
        markdown: bool,
    },

    /// Download an element in one or more formats.
    Download {
        /// OSM element (see `list`).
        element: String,

        #[command(flatten)]
        formats: FormatSelection,
    },

    /// Update the catalog file from its upstream source.
    Update {
        /// URL of the catalog source (defaults to `update_url` from config.toml).
        #[arg(long)]
        url: Option<String>,
    },
}

/// Format selector flags for `download`.
#[derive(Debug, Default, Clone, Args)]
pub struct FormatSelection {
    /// Download osm.bz2 if available.
    #[arg(short = 'B', long = "osm.bz2")]
    pub osm_bz2: bool,
    /// Download shp.zip if available.
    #[arg(short = 'S', long = "shp.zip")]
    pub shp_zip: bool,
    /// Download osm.pbf (default).
    #[arg(short = 'P', long = "osm.pbf")]
    pub osm_pbf: bool,
    /// Download osh.pbf if available.
    #[arg(short = 'H', long = "osh.pbf")]
    pub osh_pbf: bool,
    /// Download state.txt file.
    #[arg(short = 's', long = "state")]
    pub state: bool,
    /// Download poly file.
    #[arg(short = 'p', long = "poly")]
    pub poly: bool,
}

impl FormatSelection {
    /// Selected format names; [`DEFAULT_FORMAT`] when nothing is selected.
    pub fn selected(&self) -> Vec<&'static str> {
        let flags = [
            (self.osm_pbf, "osm.pbf"),
            (self.osh_pbf, "osh.pbf"),
            (self.osm_bz2, "osm.bz2"),
            (self.shp_zip, "shp.zip"),
            (self.state, "state"),
            (self.poly, "poly"),
        ];
        let selected: Vec<&'static str> = flags
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .collect();
        if selected.is_empty() {
            vec![DEFAULT_FORMAT]
        } else {
            selected
        }
    }
}

impl Cli {
    fn catalog_path(&self, cfg: &GeodlConfig) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| cfg.catalog_path.clone())
    }

    fn download_options(&self, cfg: &GeodlConfig) -> Result<DownloadOptions> {
        let proxy = self.proxy.merge_into(cfg.proxy.clone());
        Ok(DownloadOptions {
            no_download: self.no_download,
            proxy: ProxySettings::from_config(&proxy)?,
            connect_timeout_secs: cfg.connect_timeout_secs,
        })
    }

    pub async fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let catalog_path = self.catalog_path(&cfg);

        match &self.command {
            CliCommand::List { markdown } => run_list(&catalog_path, *markdown)?,
            CliCommand::Download { element, formats } => {
                let opts = self.download_options(&cfg)?;
                let download_dir = std::env::current_dir()?;
                run_download(
                    &catalog_path,
                    element,
                    &formats.selected(),
                    &download_dir,
                    &opts,
                    self.verbose,
                )
                .await?;
            }
            CliCommand::Update { url } => {
                let opts = self.download_options(&cfg)?;
                let url = url.as_deref().unwrap_or(&cfg.update_url);
                run_update(url, &catalog_path, &opts, self.verbose).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
