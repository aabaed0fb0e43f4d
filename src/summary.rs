//! Plain-text summary of a data directory, printed by `--summary`.

use crate::config::PriorityNames;
use crate::data::MapData;
use crate::util::format_number;
use std::fmt::Write;

/// Describe the loaded data: table sizes, priority groups and layers.
pub fn summarize(data: &MapData, names: &PriorityNames) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Data directory: {}", data.root.display());
    let _ = writeln!(out, "Categories: {}", format_number(data.categories.len()));
    let _ = writeln!(
        out,
        "Points of interest: {} ({} joined)",
        format_number(data.pois.len()),
        format_number(data.entries.len())
    );

    let _ = writeln!(out, "Priorities:");
    for &priority in &data.priorities {
        let _ = writeln!(
            out,
            "  {} ({}): {} markers",
            names.name(priority),
            priority,
            format_number(data.count_for(priority))
        );
    }

    let _ = writeln!(out, "Municipality layers: {}", data.municipalities.len());
    for layer in &data.municipalities {
        let _ = writeln!(
            out,
            "  {}: {} outlines, {} vertices",
            layer.name,
            layer.lines.0.len(),
            format_number(layer.vertex_count())
        );
    }
    let _ = writeln!(
        out,
        "Country outline: {} outlines, {} vertices",
        data.country.lines.0.len(),
        format_number(data.country.vertex_count())
    );
    out
}
