//! Canonical CSV writer.

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use banknorm_model::CanonicalRecord;

use crate::error::ReportError;

/// Column header of every output file.
pub const OUTPUT_HEADER: [&str; 4] = ["Date", "Payee", "Notes", "Amount"];

const ESCAPE: char = '\\';

/// Backslash-escapes `\`, `,`, `"`, CR and LF so fields never need quoting.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '\\' | ',' | '"' | '\r' | '\n');
    if !value.contains(needs_escape) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if needs_escape(c) {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Writes the header and one line per record; returns the record count.
pub fn write_records<W: Write>(writer: W, records: &[CanonicalRecord]) -> Result<usize, ReportError> {
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);
    csv.write_record(OUTPUT_HEADER)?;
    for record in records {
        let date = record.date_text();
        let amount = record.amount_text();
        csv.write_record([
            escape_field(&date).as_ref(),
            escape_field(&record.payee).as_ref(),
            escape_field(&record.notes).as_ref(),
            escape_field(&amount).as_ref(),
        ])?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(records.len())
}

/// Renders the output file contents in memory.
pub fn render_records(records: &[CanonicalRecord]) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the output file; nothing is created if encoding fails.
pub fn write_records_to_path(path: &Path, records: &[CanonicalRecord]) -> Result<usize, ReportError> {
    let mut buffer = Vec::new();
    let count = write_records(&mut buffer, records)?;
    fs::write(path, buffer).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), records = count, "output written");
    Ok(count)
}
