//! Text renderings of a list of person records.
//!
//! - [`render_table`]: aligned columns for terminals.
//! - [`render_json`]: raw dump as a pretty JSON array, every record with all
//!   four keys and explicit `null`s.

use anyhow::Result;

use nameparse_core::PersonRecord;

use crate::config::OutputFormat;

const HEADERS: [&str; 4] = ["TITLE", "FIRST NAME", "INITIALS", "LAST NAME"];
const ABSENT: &str = "-";

/// Render `people` in the requested format.
pub fn render(people: &[PersonRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(people)),
        OutputFormat::Json => render_json(people),
    }
}

pub fn render_table(people: &[PersonRecord]) -> String {
    if people.is_empty() {
        return "No people.".to_string();
    }

    let rows: Vec<[&str; 4]> = people
        .iter()
        .map(|p| {
            [
                p.title.as_str(),
                p.first_name.as_deref().unwrap_or(ABSENT),
                p.initials.as_deref().unwrap_or(ABSENT),
                p.last_name.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&HEADERS).chain(rows.iter()) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.pop();
    out
}

pub fn render_json(people: &[PersonRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(people)?)
}
