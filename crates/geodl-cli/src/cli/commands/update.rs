//! `geodl update` – refresh the catalog file from upstream.

use anyhow::{Context, Result};
use geodl_core::catalog::{self, Catalog};
use geodl_core::downloader::{self, DownloadOptions, DownloadOutcome};
use std::path::{Path, PathBuf};

/// Sibling path used while downloading (`geofabrik.yml` → `geofabrik.yml.part`).
fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Downloads the catalog to a temp file and only replaces `catalog_path`
/// once the new document parses.
pub async fn run_update(
    url: &str,
    catalog_path: &Path,
    opts: &DownloadOptions,
    verbose: bool,
) -> Result<()> {
    let part = temp_path(catalog_path);
    if verbose {
        println!(" Downloading {} to {}", url, catalog_path.display());
    }
    let outcome = tokio::task::spawn_blocking({
        let url = url.to_string();
        let part = part.clone();
        let opts = opts.clone();
        move || downloader::download_to_file(&url, &part, &opts)
    })
    .await
    .context("update task join")??;

    if outcome == DownloadOutcome::Skipped {
        println!("{}", url);
        return Ok(());
    }

    let parsed = std::fs::read_to_string(&part)
        .map_err(anyhow::Error::from)
        .and_then(|data| Catalog::from_yaml_str(&data));
    if let Err(e) = parsed {
        if let Err(rm) = std::fs::remove_file(&part) {
            tracing::warn!(part = %part.display(), "could not remove rejected catalog: {}", rm);
        }
        return Err(e).with_context(|| format!("downloaded catalog from {} is invalid", url));
    }
    std::fs::rename(&part, catalog_path)
        .with_context(|| format!("replace {}", catalog_path.display()))?;

    // Re-load through the regular path so structural issues get logged.
    let catalog = catalog::load(catalog_path)?;
    tracing::info!(regions = catalog.region_count(), "catalog updated from {}", url);
    println!(
        "Congratulation, you have the latest {}",
        catalog_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| catalog_path.display().to_string())
    );
    Ok(())
}
