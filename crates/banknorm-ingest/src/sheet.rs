//! Spreadsheet loading (xls, xlsx, xlsm, xlsb, ods) via calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use banknorm_model::{CellValue, DecimalConvention, RawRow};

use crate::error::{IngestError, Result};
use crate::loader::LoadOptions;

/// Text layout of spreadsheet date cells; matches the ISO timestamp candidate
/// used by the built-in profiles.
pub const SHEET_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a numeric cell as text with the given decimal separator.
///
/// No thousands separator is written, so the text parses back to the same
/// value under either convention.
pub fn number_text(value: f64, decimal: DecimalConvention) -> String {
    let text = value.to_string();
    match decimal {
        DecimalConvention::Dot => text,
        DecimalConvention::Comma => text.replace('.', ","),
    }
}

fn convert_cell(cell: &Data, options: &LoadOptions) -> CellValue {
    let value = match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) => CellValue::from(text.as_str()),
        Data::Float(number) => CellValue::Number(*number),
        Data::Int(number) => CellValue::Number(*number as f64),
        Data::Bool(flag) => CellValue::Text(flag.to_string()),
        Data::DateTime(datetime) => match datetime.as_datetime() {
            Some(timestamp) => CellValue::Text(timestamp.format(SHEET_DATETIME_FORMAT).to_string()),
            None => CellValue::Number(datetime.as_f64()),
        },
        Data::DateTimeIso(text) => CellValue::Text(text.replacen('T', " ", 1)),
        Data::DurationIso(text) => CellValue::Text(text.clone()),
    };
    match value {
        CellValue::Number(number) if options.all_text => {
            CellValue::Text(number_text(number, options.decimal))
        }
        other => other,
    }
}

/// Reads the first worksheet of a workbook into raw rows.
///
/// Rows and columns before the used range are padded back in, so row numbers
/// and fixed header offsets count from the top-left of the sheet.
pub fn read_sheet_rows(path: &Path, options: &LoadOptions) -> Result<Vec<RawRow>> {
    std::fs::metadata(path).map_err(|e| IngestError::read(path, e))?;
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::unreadable(path, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::unreadable(path, "workbook has no worksheets"))?
        .map_err(|e| IngestError::unreadable(path, e))?;

    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    let first_row = first_row as usize;
    let first_col = first_col as usize;

    let mut rows = Vec::with_capacity(first_row + range.height());
    for index in 0..first_row {
        rows.push(RawRow::new(index + 1, Vec::new()));
    }
    for (offset, cells) in range.rows().enumerate() {
        let mut values = vec![CellValue::Empty; first_col];
        values.extend(cells.iter().map(|cell| convert_cell(cell, options)));
        rows.push(RawRow::new(first_row + offset + 1, values));
    }
    rows.retain(|row| row.line > options.start_row);

    debug!(path = %path.display(), rows = rows.len(), "worksheet loaded");
    Ok(rows)
}
