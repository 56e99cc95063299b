//! Typed failures of the resolution engine.

use thiserror::Error;

/// Why a region/format pair could not be turned into a URL.
///
/// None of these are retried; the caller surfaces them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Requested or ancestor region is missing (or stored under a different key).
    #[error("{0} is not in the catalog, use the \"list\" command to see available regions")]
    UnknownRegion(String),

    /// The region does not declare the requested format.
    #[error("format {format} is not available for {region}")]
    FormatNotAvailable { region: String, format: String },

    /// The region declares the format but the catalog has no definition for it.
    #[error("format {0} is not defined in the catalog")]
    UndefinedFormat(String),

    /// The parent chain starting at this region does not reach a root.
    #[error("parent chain of {0} does not terminate (cycle in catalog)")]
    CycleDetected(String),
}
