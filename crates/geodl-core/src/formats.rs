//! Known format names and the compact availability code used by `list`.

use std::collections::BTreeSet;

/// Formats the CLI can select, in display order, with their mnemonic letter.
pub const KNOWN_FORMATS: [(&str, char); 6] = [
    ("state", 's'),
    ("osm.pbf", 'P'),
    ("osm.bz2", 'B'),
    ("osh.pbf", 'H'),
    ("poly", 'p'),
    ("shp.zip", 'S'),
];

/// Format downloaded when none is selected explicitly.
pub const DEFAULT_FORMAT: &str = "osm.pbf";

/// Renders `supported` as a fixed-width code, one slot per known format.
///
/// `["osm.pbf", "poly"]` becomes `" P  p "`. Unknown names are ignored.
pub fn mini_formats(supported: &BTreeSet<String>) -> String {
    KNOWN_FORMATS
        .iter()
        .map(|(name, letter)| {
            if supported.contains(*name) {
                *letter
            } else {
                ' '
            }
        })
        .collect()
}
