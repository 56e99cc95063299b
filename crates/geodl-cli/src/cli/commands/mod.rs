//! CLI command handlers, one per file.

mod download;
mod list;
mod update;

pub use download::run_download;
pub use list::run_list;
pub use update::run_update;

#[cfg(test)]
pub(crate) use list::render_table;
