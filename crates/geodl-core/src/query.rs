//! Read-only lookups over a loaded catalog.

use crate::catalog::{Catalog, Region};
use crate::error::ResolveError;
use crate::formats::mini_formats;

/// One row of the region listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionListing {
    pub id: String,
    /// Display name of the immediate parent; empty for roots.
    pub parent_name: String,
    pub name: String,
    /// Compact format code, see [`mini_formats`].
    pub formats: String,
}

/// Looks up a region by identifier.
///
/// A region stored under a key different from its own `id` is treated as
/// missing, so keys and ids must agree for a region to be reachable.
pub fn find_region<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Region, ResolveError> {
    match catalog.regions.get(id) {
        Some(region) if region.id == id => Ok(region),
        _ => Err(ResolveError::UnknownRegion(id.to_string())),
    }
}

/// All regions sorted by identifier, annotated for display.
pub fn list_regions(catalog: &Catalog) -> Vec<RegionListing> {
    // BTreeMap iteration is already in key order.
    catalog
        .regions
        .iter()
        .map(|(id, region)| {
            let parent_name = region
                .parent_id
                .as_deref()
                .and_then(|p| catalog.regions.get(p))
                .and_then(|p| p.display_name.clone())
                .unwrap_or_default();
            RegionListing {
                id: id.clone(),
                parent_name,
                name: region.display_name.clone().unwrap_or_default(),
                formats: mini_formats(&region.supported_formats),
            }
        })
        .collect()
}
