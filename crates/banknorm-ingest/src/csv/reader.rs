//! Delimited-text loading into raw rows.

use std::borrow::Cow;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use banknorm_model::{CellValue, RawRow};

use crate::error::{IngestError, Result};
use crate::loader::LoadOptions;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const CANDIDATE_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];
const SNIFF_LINES: usize = 10;

/// Reject UTF-16 input, which the CSV loader does not decode.
fn validate_encoding(path: &Path, bytes: &[u8]) -> Result<()> {
    // UTF-16 LE BOM
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    // UTF-16 BE BOM
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }
    Ok(())
}

/// Decodes file bytes as UTF-8, falling back to Windows-1252.
///
/// Bank exports from Spanish-language portals are frequently Latin-1.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text
        }
    }
}

/// Picks the most frequent of `,`, `;` and tab over the first lines.
///
/// Ties resolve to the earlier candidate, so `,` wins when nothing is found.
pub fn sniff_delimiter(text: &str) -> u8 {
    let sample: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();
    let mut best = CANDIDATE_DELIMITERS[0];
    let mut best_count = 0usize;
    for delimiter in CANDIDATE_DELIMITERS {
        let count: usize = sample
            .iter()
            .map(|line| line.bytes().filter(|b| *b == delimiter).count())
            .sum();
        if count > best_count {
            best = delimiter;
            best_count = count;
        }
    }
    best
}

/// Physical line numbers of byte offsets, counted forward only.
struct LineCounter<'a> {
    bytes: &'a [u8],
    offset: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            offset: 0,
            line: 1,
        }
    }

    /// 1-based line of `offset`; offsets must not decrease between calls.
    fn line_at(&mut self, offset: usize) -> usize {
        let offset = offset.min(self.bytes.len()).max(self.offset);
        self.line += self.bytes[self.offset..offset]
            .iter()
            .filter(|b| **b == b'\n')
            .count();
        self.offset = offset;
        self.line
    }
}

fn is_line_break(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

/// Parses delimited text into rows.
///
/// The csv crate skips blank lines and reports a record's position from
/// before them, so each record's first line is recomputed from the text and
/// every skipped blank line becomes an empty row. Row `n` of the result is
/// then physical line `n + 1` (before `start_row` filtering), as for
/// spreadsheets.
pub fn parse_csv_text(text: &str, options: &LoadOptions) -> csv::Result<Vec<RawRow>> {
    let delimiter = options.delimiter.unwrap_or_else(|| sniff_delimiter(text));
    let bytes = text.as_bytes();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(bytes);
    let mut lines = LineCounter::new(bytes);
    let mut record = StringRecord::new();
    let mut rows = Vec::new();
    let mut next_line = 1;
    let push = |rows: &mut Vec<RawRow>, line: usize, cells: Vec<CellValue>| {
        if line > options.start_row {
            rows.push(RawRow::new(line, cells));
        }
    };
    while reader.read_record(&mut record)? {
        let mut start = record
            .position()
            .map_or(0, |position| position.byte() as usize);
        while start < bytes.len() && is_line_break(bytes[start]) {
            start += 1;
        }
        let line = lines.line_at(start);
        for blank in next_line..line {
            push(&mut rows, blank, Vec::new());
        }
        push(&mut rows, line, record.iter().map(CellValue::from).collect());

        let mut end = (reader.position().byte() as usize).min(bytes.len());
        while end > start && is_line_break(bytes[end - 1]) {
            end -= 1;
        }
        next_line = lines.line_at(end) + 1;
    }
    Ok(rows)
}

/// Reads a CSV file into raw rows.
pub fn read_csv_rows(path: &Path, options: &LoadOptions) -> Result<Vec<RawRow>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::read(path, e))?;
    validate_encoding(path, &bytes)?;
    let text = decode_text(&bytes);
    let rows = parse_csv_text(&text, options).map_err(|e| IngestError::unreadable(path, e))?;
    debug!(path = %path.display(), rows = rows.len(), "csv loaded");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use banknorm_model::HeaderRule;

    use super::*;
    use crate::header::locate_header;

    #[test]
    fn test_decode_text_strips_bom() {
        let bytes = b"\xEF\xBB\xBFDate,Amount";
        assert_eq!(decode_text(bytes), "Date,Amount");
    }

    #[test]
    fn test_decode_text_falls_back_to_windows_1252() {
        // "Descripción" in Latin-1
        let bytes = b"Descripci\xF3n";
        assert_eq!(decode_text(bytes), "Descripción");
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("a;b;c\n1;2;3"), b';');
        assert_eq!(sniff_delimiter("a\tb\n1\t2"), b'\t');
        assert_eq!(sniff_delimiter("a,b\n1,2"), b',');
        assert_eq!(sniff_delimiter("no separators here"), b',');
    }

    #[test]
    fn test_parse_csv_text_keeps_line_numbers() {
        let text = "Statement\n\nDate,Payee,Amount\n2024-01-01,Shop,1.50\n";
        let rows = parse_csv_text(text, &LoadOptions::default()).unwrap();
        let lines: Vec<usize> = rows.iter().map(|row| row.line).collect();
        assert_eq!(lines, [1, 2, 3, 4]);
        assert!(rows[1].cells.is_empty());
        assert_eq!(rows[3].cells.len(), 3);
    }

    #[test]
    fn test_parse_csv_text_blank_lines_count_for_fixed_offsets() {
        let text = "Account;ES12\r\n\r\n\r\nFecha;Concepto;Importe\r\n05/01/2024;Cafe;-2,10\r\n";
        let rows = parse_csv_text(text, &LoadOptions::default()).unwrap();
        let lines: Vec<usize> = rows.iter().map(|row| row.line).collect();
        assert_eq!(lines, [1, 2, 3, 4, 5]);
        let header = HeaderRule::FixedOffset { skip: 3 };
        let index = locate_header(&rows, &header).unwrap();
        assert_eq!(rows[index].cells[0], CellValue::text("Fecha"));
    }

    #[test]
    fn test_parse_csv_text_quoted_newlines_stay_in_one_row() {
        let text = "Date,Payee,Amount\n2024-01-01,\"Shop\nFloor 2\",1.50\n\n2024-01-02,Bar,2\n";
        let rows = parse_csv_text(text, &LoadOptions::default()).unwrap();
        let lines: Vec<usize> = rows.iter().map(|row| row.line).collect();
        assert_eq!(lines, [1, 2, 4, 5]);
        assert_eq!(rows[1].cells[1], CellValue::text("Shop\nFloor 2"));
        assert!(rows[2].cells.is_empty());
    }

    #[test]
    fn test_parse_csv_text_honours_start_row() {
        let text = "junk\nDate,Payee,Amount\n2024-01-01,Shop,1.50\n";
        let options = LoadOptions {
            start_row: 1,
            ..LoadOptions::default()
        };
        let rows = parse_csv_text(text, &options).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
    }

    #[test]
    fn test_parse_csv_text_empty_fields_become_empty_cells() {
        let rows = parse_csv_text("a,,c\n", &LoadOptions::default()).unwrap();
        assert_eq!(rows[0].cells[1], CellValue::Empty);
        assert_eq!(rows[0].cells[2], CellValue::text("c"));
    }
}
