//! Reading the catalog document from disk.

use anyhow::{Context, Result};
use std::path::Path;

use super::Catalog;

/// Reads and parses the catalog at `path`, then logs any structural issues.
///
/// Issues are warnings only: regions unaffected by a broken parent link must
/// still resolve, and the affected ones fail at resolution time.
pub fn load(path: &Path) -> Result<Catalog> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read catalog: {}", path.display()))?;
    let catalog = Catalog::from_yaml_str(&data)
        .with_context(|| format!("parse catalog: {}", path.display()))?;

    for issue in catalog.validate() {
        tracing::warn!(path = %path.display(), "catalog issue: {}", issue);
    }
    tracing::debug!(
        regions = catalog.region_count(),
        formats = catalog.formats.len(),
        "loaded catalog from {}",
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_reads_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(
            b"baseURL: https://example.org\nformats:\n  poly: {ext: poly, loc: .poly}\nelements:\n  asia: {id: asia, files: [poly]}\n",
        )
        .unwrap();
        f.flush().unwrap();
        let c = load(f.path()).unwrap();
        assert_eq!(c.base_url, "https://example.org");
        assert!(c.regions["asia"].supports("poly"));
    }

    #[test]
    fn load_missing_file_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yml");
        let err = load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.yml"));
    }
}
