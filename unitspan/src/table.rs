//! Diagnostic table rendering
//!
//! Formats the store's cached conversions as a fixed-width grid, one
//! row and column per registered unit in declaration order. Cells
//! show the cached factor, `?` for a pair not yet derived, `-` on the
//! diagonal (self-pairs are never stored). Purely presentational.

use crate::converter::UnitConverter;

/// Render the conversion table as a fixed-width grid
pub fn render(converter: &UnitConverter) -> String {
    let registry = converter.registry();
    let store = converter.store();

    // cell texts, row-major, header row and column included
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(registry.len() + 1);

    let mut header = vec![String::new()];
    header.extend(registry.names().map(|n| n.to_string()));
    rows.push(header);

    for a in registry.ids() {
        let mut row = vec![registry.name(a).to_string()];
        for b in registry.ids() {
            let cell = if a == b {
                "-".to_string()
            } else {
                match store.get(a, b) {
                    Some(conversion) => format!("{}", conversion.factor),
                    None => "?".to_string(),
                }
            };
            row.push(cell);
        }
        rows.push(row);
    }

    let columns = registry.len() + 1;
    let mut widths = vec![0usize; columns];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut output = String::new();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                output.push_str("  ");
            }
            output.push_str(&format!("{:>width$}", cell, width = widths[i]));
        }
        output.push('\n');
    }
    output
}
