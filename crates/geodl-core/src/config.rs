use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where `update` fetches the catalog from unless overridden.
pub const DEFAULT_UPDATE_URL: &str =
    "https://raw.githubusercontent.com/julien-noblet/download-geofabrik/master/geofabrik.yml";

/// Proxy section (optional `[proxy]` table in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// HTTP proxy as `host:port`.
    #[serde(default)]
    pub http: Option<String>,
    /// SOCKS5 proxy as `host:port`.
    #[serde(default)]
    pub socks5: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub pass: Option<String>,
}

/// Tool settings loaded from `~/.config/geodl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeodlConfig {
    /// Catalog document used by `list` and `download`, written by `update`.
    pub catalog_path: PathBuf,
    /// Source of the catalog for `update`.
    pub update_url: String,
    /// TCP connect timeout for downloads, in seconds.
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub proxy: Option<ProxyConfig>,
}

impl Default for GeodlConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("./geofabrik.yml"),
            update_url: DEFAULT_UPDATE_URL.to_string(),
            connect_timeout_secs: 30,
            proxy: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("geodl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GeodlConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<GeodlConfig> {
    if !path.exists() {
        let default_cfg = GeodlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: GeodlConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
