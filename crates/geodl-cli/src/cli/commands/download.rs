//! `geodl download <element>` – resolve and fetch one or more formats.

use anyhow::{Context, Result};
use geodl_core::catalog;
use geodl_core::downloader::{self, DownloadOptions, DownloadOutcome};
use geodl_core::resolve::{resolve_target, ResolvedTarget};
use std::path::Path;

/// Resolves every requested format first, so an unavailable format aborts
/// before any transfer starts, then downloads them in order into `download_dir`.
pub async fn run_download(
    catalog_path: &Path,
    element: &str,
    formats: &[&str],
    download_dir: &Path,
    opts: &DownloadOptions,
    verbose: bool,
) -> Result<()> {
    let catalog = catalog::load(catalog_path)?;
    let targets: Vec<ResolvedTarget> = formats
        .iter()
        .map(|format| {
            resolve_target(&catalog, element, format)
                .with_context(|| format!("cannot download {} as {}", element, format))
        })
        .collect::<Result<_>>()?;

    for target in targets {
        let dest = download_dir.join(&target.file_name);
        if verbose {
            println!(" Downloading {} to {}", target.url, dest.display());
        }
        let outcome = tokio::task::spawn_blocking({
            let url = target.url.clone();
            let dest = dest.clone();
            let opts = opts.clone();
            move || downloader::download_to_file(&url, &dest, &opts)
        })
        .await
        .context("download task join")??;

        match outcome {
            DownloadOutcome::Skipped => println!("{}", target.url),
            DownloadOutcome::Completed { bytes } => {
                if verbose {
                    println!("  {} bytes downloaded.", bytes);
                }
            }
        }
    }
    Ok(())
}
