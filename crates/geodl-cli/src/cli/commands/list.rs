//! `geodl list` – show the regions of the catalog.

use anyhow::Result;
use geodl_core::catalog;
use geodl_core::query::{list_regions, RegionListing};
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub fn run_list(catalog_path: &Path, markdown: bool) -> Result<()> {
    let catalog = catalog::load(catalog_path)?;
    let rows = list_regions(&catalog);
    println!("{}", render_table(&rows, markdown));
    println!("Total elements: {}", rows.len());
    Ok(())
}

/// Table row for the region listing
#[derive(Tabled)]
struct RegionRow<'a> {
    #[tabled(rename = "ShortName")]
    id: &'a str,
    #[tabled(rename = "Is in")]
    parent_name: &'a str,
    #[tabled(rename = "Long Name")]
    name: &'a str,
    #[tabled(rename = "formats")]
    formats: &'a str,
}

/// Renders rows as a boxed ASCII table, or as a Markdown pipe table.
pub(crate) fn render_table(rows: &[RegionListing], markdown: bool) -> String {
    let table_rows: Vec<RegionRow<'_>> = rows
        .iter()
        .map(|r| RegionRow {
            id: &r.id,
            parent_name: &r.parent_name,
            name: &r.name,
            formats: &r.formats,
        })
        .collect();

    let mut table = Table::new(&table_rows);
    if markdown {
        table.with(Style::markdown());
    } else {
        table.with(Style::ascii());
    }
    table.to_string()
}
