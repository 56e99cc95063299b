//! In-memory catalog: regions arranged as a tree, formats as overridable
//! path templates, and the global base URL.
//!
//! The catalog is loaded once (see [`load`]) and never mutated afterwards, so
//! a shared `&Catalog` can serve any number of concurrent resolutions.

mod load;
mod validate;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub use load::load;
pub use validate::CatalogIssue;

/// A node of the geographic hierarchy (continent, country, sub-region...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Unique identifier; also the default URL path segment.
    #[serde(default)]
    pub id: String,
    /// Path segment used instead of `id` when set.
    #[serde(default, rename = "file", skip_serializing_if = "Option::is_none")]
    pub file_override: Option<String>,
    #[serde(default, rename = "name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Informational only.
    #[serde(default, rename = "meta")]
    pub is_meta: bool,
    #[serde(default, rename = "files")]
    pub supported_formats: BTreeSet<String>,
    #[serde(default, rename = "parent", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Region {
    pub fn has_parent(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Segment this region contributes to its own and its descendants' URLs.
    pub fn path_segment(&self) -> &str {
        self.file_override.as_deref().unwrap_or(&self.id)
    }

    pub fn supports(&self, format_name: &str) -> bool {
        self.supported_formats.contains(format_name)
    }

    /// Empty strings in the document mean "unset".
    fn normalize(&mut self, key: &str) {
        if self.id.is_empty() {
            self.id = key.to_string();
        }
        for field in [
            &mut self.file_override,
            &mut self.display_name,
            &mut self.parent_id,
        ] {
            if field.as_deref().is_some_and(str::is_empty) {
                *field = None;
            }
        }
    }
}

/// A downloadable artifact kind and where to find it relative to a region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    /// Local file extension.
    #[serde(default, rename = "ext")]
    pub extension: String,
    /// Appended after the region's pre-URL (e.g. `-latest.osm.pbf`).
    #[serde(default, rename = "loc")]
    pub location_suffix: String,
    #[serde(default, rename = "baseURL", skip_serializing_if = "Option::is_none")]
    pub base_url_override: Option<String>,
    #[serde(default, rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path_override: Option<String>,
}

impl Format {
    fn normalize(&mut self, name: &str) {
        if self.extension.is_empty() {
            self.extension = name.to_string();
        }
        for field in [&mut self.base_url_override, &mut self.base_path_override] {
            if field.as_deref().is_some_and(str::is_empty) {
                *field = None;
            }
        }
    }
}

/// Complete set of regions and formats plus the default root URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "baseURL")]
    pub base_url: String,
    #[serde(default)]
    pub formats: BTreeMap<String, Format>,
    #[serde(default, rename = "elements")]
    pub regions: BTreeMap<String, Region>,
}

impl Catalog {
    /// Parse a catalog document (YAML) and normalize it.
    pub fn from_yaml_str(data: &str) -> anyhow::Result<Self> {
        let mut catalog: Catalog = serde_yaml_ng::from_str(data)?;
        catalog.normalize();
        Ok(catalog)
    }

    fn normalize(&mut self) {
        for (key, region) in self.regions.iter_mut() {
            region.normalize(key);
        }
        for (name, format) in self.formats.iter_mut() {
            format.normalize(name);
        }
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}
