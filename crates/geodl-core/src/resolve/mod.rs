//! Region + format → download URL.
//!
//! The format decides where the URL is rooted (see [`Overrides`]); the region's
//! ancestor chain decides the path below that root; the format's location
//! suffix closes it. Resolution is pure: no I/O, no caching, and the same
//! inputs always produce the same URL.

mod format;
mod path;

pub use format::{resolve_format, FormatResolution, Overrides};
pub use path::resolve_pre_url;

use crate::catalog::Catalog;
use crate::error::ResolveError;
use crate::query::find_region;

/// What the downloader needs for one region/format pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub url: String,
    /// Suggested local file name, `<region id>.<format extension>`.
    pub file_name: String,
}

/// Resolves the absolute URL of `format_name` for the region `region_id`.
///
/// The region is looked up first, so an unknown id always yields
/// `UnknownRegion` regardless of the format requested.
pub fn resolve_url(
    catalog: &Catalog,
    region_id: &str,
    format_name: &str,
) -> Result<String, ResolveError> {
    let region = find_region(catalog, region_id)?;
    let resolution = resolve_format(catalog, region, format_name)?;
    let mut url = resolve_pre_url(catalog, region, resolution.overrides)?;
    url.push_str(&resolution.format.location_suffix);
    Ok(url)
}

/// Like [`resolve_url`] but also derives the local file name.
pub fn resolve_target(
    catalog: &Catalog,
    region_id: &str,
    format_name: &str,
) -> Result<ResolvedTarget, ResolveError> {
    let url = resolve_url(catalog, region_id, format_name)?;
    let extension = catalog
        .formats
        .get(format_name)
        .map(|f| f.extension.as_str())
        .filter(|ext| !ext.is_empty())
        .unwrap_or(format_name);
    Ok(ResolvedTarget {
        url,
        file_name: format!("{}.{}", region_id, extension),
    })
}
