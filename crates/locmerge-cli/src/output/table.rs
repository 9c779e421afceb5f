//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use locmerge::StoreSnapshot;

/// Placeholder for an empty slot.
const MISSING: &str = "-";

/// Format a merged dictionary as an ASCII table, one row per key.
pub fn format_store_table(snapshot: &StoreSnapshot) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Key".to_string()];
    header.extend(snapshot.languages.iter().map(str::to_string));
    table.set_header(header);

    for (key, cells) in &snapshot.entries {
        let mut row = vec![key.clone()];
        row.extend(snapshot.languages.iter().map(|language| {
            cells
                .get(language)
                .cloned()
                .unwrap_or_else(|| MISSING.to_string())
        }));
        table.add_row(row);
    }

    table
}
