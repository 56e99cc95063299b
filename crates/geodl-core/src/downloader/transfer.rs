//! Single-stream HTTP GET into a local file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use super::DownloadOptions;

/// GETs `url` and writes the body to `dest` (created or truncated).
/// Returns the number of bytes written.
pub(super) fn get_to_file(url: &str, dest: &Path, opts: &DownloadOptions) -> Result<u64> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(opts.connect_timeout_secs))?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;
    match &opts.proxy {
        Some(proxy) => proxy.apply(&mut easy)?,
        // Ignore *_proxy environment variables.
        None => easy.proxy("")?,
    }

    let mut file =
        File::create(dest).with_context(|| format!("create {}", dest.display()))?;
    let mut written: u64 = 0;
    let mut write_error: Option<std::io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                write_error = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_error {
        return Err(e).with_context(|| format!("write {}", dest.display()));
    }
    performed.with_context(|| format!("GET {} failed", url))?;

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }
    file.flush()?;
    Ok(written)
}
