//! Structural checks over a loaded catalog.

use std::fmt;

use super::Catalog;

/// A problem that will make some resolutions fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Mapping key and the region's own `id` differ; lookups by key will fail.
    KeyMismatch { key: String, id: String },
    /// `parent` names a region that is not in the catalog.
    DanglingParent { region: String, parent: String },
    /// Region lists a format with no entry under `formats`.
    UndefinedFormat { region: String, format: String },
    /// Following parents from this region never reaches a root.
    Cycle { region: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::KeyMismatch { key, id } => {
                write!(f, "region stored under {} has id {}", key, id)
            }
            CatalogIssue::DanglingParent { region, parent } => {
                write!(f, "{} has unknown parent {}", region, parent)
            }
            CatalogIssue::UndefinedFormat { region, format } => {
                write!(f, "{} lists undefined format {}", region, format)
            }
            CatalogIssue::Cycle { region } => write!(f, "parent chain of {} is cyclic", region),
        }
    }
}

impl Catalog {
    /// Returns every issue found, in region-key order. Empty means well formed.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for (key, region) in &self.regions {
            if &region.id != key {
                issues.push(CatalogIssue::KeyMismatch {
                    key: key.clone(),
                    id: region.id.clone(),
                });
            }
            if let Some(parent) = region.parent_id.as_deref() {
                if !self.regions.contains_key(parent) {
                    issues.push(CatalogIssue::DanglingParent {
                        region: key.clone(),
                        parent: parent.to_string(),
                    });
                }
            }
            for format in &region.supported_formats {
                if !self.formats.contains_key(format) {
                    issues.push(CatalogIssue::UndefinedFormat {
                        region: key.clone(),
                        format: format.clone(),
                    });
                }
            }
            if self.chain_is_cyclic(key) {
                issues.push(CatalogIssue::Cycle {
                    region: key.clone(),
                });
            }
        }
        issues
    }

    fn chain_is_cyclic(&self, start: &str) -> bool {
        let mut current = start;
        for _ in 0..=self.regions.len() {
            match self
                .regions
                .get(current)
                .and_then(|r| r.parent_id.as_deref())
            {
                Some(parent) => current = parent,
                None => return false,
            }
        }
        true
    }
}
