//! Checks a region/format pair and extracts the format's URL overrides.

use crate::catalog::{Catalog, Format, Region};
use crate::error::ResolveError;

/// Where the root of a region's URL comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overrides<'a> {
    /// `base_url + "/" + root id`.
    None,
    /// `base_url + "/" + path + root id`; `path` carries its own trailing slash.
    Path(&'a str),
    /// `url + "/" + path + root id`; `path` may be empty.
    PathAndUrl { path: &'a str, url: &'a str },
}

/// A validated format together with the overrides it imposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatResolution<'a> {
    pub name: &'a str,
    pub format: &'a Format,
    pub overrides: Overrides<'a>,
}

/// Fails with `FormatNotAvailable` unless `region` declares `format_name`.
pub fn resolve_format<'a>(
    catalog: &'a Catalog,
    region: &Region,
    format_name: &str,
) -> Result<FormatResolution<'a>, ResolveError> {
    if !region.supports(format_name) {
        return Err(ResolveError::FormatNotAvailable {
            region: region.id.clone(),
            format: format_name.to_string(),
        });
    }
    let (name, format) = catalog
        .formats
        .get_key_value(format_name)
        .ok_or_else(|| ResolveError::UndefinedFormat(format_name.to_string()))?;

    let overrides = match (
        format.base_path_override.as_deref(),
        format.base_url_override.as_deref(),
    ) {
        (None, None) => Overrides::None,
        (Some(path), None) => Overrides::Path(path),
        (path, Some(url)) => Overrides::PathAndUrl {
            path: path.unwrap_or(""),
            url,
        },
    };

    Ok(FormatResolution {
        name: name.as_str(),
        format,
        overrides,
    })
}
