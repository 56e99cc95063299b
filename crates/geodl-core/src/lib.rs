pub mod catalog;
pub mod config;
pub mod downloader;
pub mod error;
pub mod formats;
pub mod logging;
pub mod query;
pub mod resolve;

pub use catalog::{Catalog, Format, Region};
pub use error::ResolveError;
