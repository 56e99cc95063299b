//! Builds the hierarchical part of a region's URL by walking up to its root.

use crate::catalog::{Catalog, Region};
use crate::error::ResolveError;
use crate::query::find_region;

use super::format::Overrides;

/// Returns the pre-URL of `region`: the root part chosen by `overrides`,
/// followed by one `/segment` per descendant down to `region`.
///
/// Fails with `UnknownRegion` when an ancestor is missing and with
/// `CycleDetected` when the chain is longer than the catalog itself.
pub fn resolve_pre_url(
    catalog: &Catalog,
    region: &Region,
    overrides: Overrides<'_>,
) -> Result<String, ResolveError> {
    walk(catalog, region, overrides, 0)
}

fn walk(
    catalog: &Catalog,
    region: &Region,
    overrides: Overrides<'_>,
    depth: usize,
) -> Result<String, ResolveError> {
    // A chain through N regions has at most N - 1 parent hops.
    if depth > catalog.region_count() {
        return Err(ResolveError::CycleDetected(region.id.clone()));
    }

    let Some(parent_id) = region.parent_id.as_deref() else {
        return Ok(root_url(catalog, region, overrides));
    };

    let parent = find_region(catalog, parent_id)?;
    let mut url = walk(catalog, parent, overrides, depth + 1)?;
    url.push('/');
    url.push_str(region.path_segment());
    Ok(url)
}

fn root_url(catalog: &Catalog, root: &Region, overrides: Overrides<'_>) -> String {
    match overrides {
        Overrides::None => format!("{}/{}", catalog.base_url, root.id),
        Overrides::Path(path) => format!("{}/{}{}", catalog.base_url, path, root.id),
        Overrides::PathAndUrl { path, url } => format!("{}/{}{}", url, path, root.id),
    }
}
