//! Header row location and label normalization.

use tracing::debug;

use banknorm_model::{CellValue, HeaderRule, RawRow};

use crate::error::{IngestError, Result};

/// Normalizes a header value: trims, drops a BOM, collapses inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell_label(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Text(text) => normalize_header(text),
        CellValue::Number(_) => cell.to_string(),
    }
}

/// Header labels of a row, one per cell; blank cells yield empty labels.
pub fn header_labels(row: &RawRow) -> Vec<String> {
    row.cells.iter().map(cell_label).collect()
}

/// Returns the zero-based index of the header row in `rows`.
///
/// Content rules pick the first qualifying row, never a later one.
pub fn locate_header(rows: &[RawRow], rule: &HeaderRule) -> Result<usize> {
    let index = match rule {
        HeaderRule::FixedOffset { skip } => {
            if rows.len() <= *skip {
                return Err(IngestError::HeaderNotFound {
                    reason: format!(
                        "document has {} rows, expected a header after skipping {skip}",
                        rows.len()
                    ),
                });
            }
            *skip
        }
        HeaderRule::Markers { tokens } => {
            let wanted: Vec<String> = tokens
                .iter()
                .map(|token| normalize_header(token).to_lowercase())
                .filter(|token| !token.is_empty())
                .collect();
            rows.iter()
                .position(|row| {
                    row.cells
                        .iter()
                        .any(|cell| wanted.contains(&cell_label(cell).to_lowercase()))
                })
                .ok_or_else(|| IngestError::HeaderNotFound {
                    reason: format!("no row contains any of [{}]", tokens.join(", ")),
                })?
        }
        HeaderRule::MinNonEmpty { cells } => rows
            .iter()
            .position(|row| row.non_empty_count() >= *cells)
            .ok_or_else(|| IngestError::HeaderNotFound {
                reason: format!("no row has at least {cells} non-empty cells"),
            })?,
    };
    debug!(
        header_index = index,
        line = rows[index].line,
        rule = %rule,
        "header row located"
    );
    Ok(index)
}
