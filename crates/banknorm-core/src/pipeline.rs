//! Header location, column mapping and record normalization over one document.

use std::collections::BTreeMap;

use tracing::{debug, info, info_span, warn};

use banknorm_ingest::{header_labels, locate_header};
use banknorm_map::{ColumnMapper, MappingError};
use banknorm_model::{CanonicalRecord, ColumnIndex, LayoutProfile, RawRow, SkipOutcome};
use banknorm_transform::RecordNormalizer;

use crate::error::ConvertError;

/// Result of converting one document with one profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Name of the profile that drove the conversion.
    pub profile: String,
    /// Index of the header row within the loaded rows.
    pub header_index: usize,
    /// 1-based source row number of the header.
    pub header_line: usize,
    /// Normalized header labels.
    pub labels: Vec<String>,
    pub columns: ColumnIndex,
    /// Canonical records in source order.
    pub records: Vec<CanonicalRecord>,
    /// Skipped data rows in source order.
    pub skipped: Vec<SkipOutcome>,
}

impl Conversion {
    /// Number of non-blank data rows seen after the header.
    pub fn data_rows(&self) -> usize {
        self.records.len() + self.skipped.len()
    }

    /// Skip counts per reason kind, sorted by kind.
    pub fn skip_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for skip in &self.skipped {
            *counts.entry(skip.reason.kind()).or_insert(0) += 1;
        }
        counts
    }
}

/// Converts loaded rows into canonical records.
///
/// Header and mapping failures abort the conversion. Every non-blank row
/// after the header then yields exactly one record or one skip outcome;
/// fully blank rows are ignored.
pub fn convert(rows: &[RawRow], profile: &LayoutProfile) -> Result<Conversion, ConvertError> {
    let span = info_span!("convert", profile = %profile.name, rows = rows.len());
    let _guard = span.enter();

    // Stage 1: header
    let header_index = locate_header(rows, &profile.header)?;
    let header_line = rows[header_index].line;
    let labels = header_labels(&rows[header_index]);
    debug!(header_line, labels = ?labels, "header located");

    // Stage 2: columns
    let mapper = ColumnMapper::new(&profile.aliases);
    let columns = match mapper.map(&labels) {
        Ok(columns) => columns,
        Err(err) => {
            log_near_misses(&mapper, &labels, &err);
            return Err(err.into());
        }
    };
    debug!(columns = ?columns, "columns mapped");

    // Stage 3: records
    let normalizer = RecordNormalizer::new(profile, columns);
    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for row in &rows[header_index + 1..] {
        if row.is_blank() {
            continue;
        }
        match normalizer.normalize(row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!(row = row.line, reason = %reason, "skipping row");
                skipped.push(SkipOutcome {
                    line: row.line,
                    reason,
                });
            }
        }
    }

    info!(
        records = records.len(),
        skipped = skipped.len(),
        header_line,
        "conversion complete"
    );

    Ok(Conversion {
        profile: profile.name.clone(),
        header_index,
        header_line,
        labels,
        columns,
        records,
        skipped,
    })
}

fn log_near_misses(mapper: &ColumnMapper, labels: &[String], err: &MappingError) {
    let MappingError::MissingColumn { roles } = err else {
        return;
    };
    for role in roles {
        if let Some(hint) = mapper.closest_column(*role, labels) {
            warn!(
                role = %role,
                column = hint.column,
                label = %hint.label,
                alias = %hint.alias,
                "no column matched; closest header label"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use banknorm_model::{DecimalConvention, HeaderRule, RoleAliases, SkipReason};

    use super::*;

    fn profile() -> LayoutProfile {
        LayoutProfile::new(
            "test",
            HeaderRule::default(),
            RoleAliases::new(&["date"], &["description"], &["amount"]),
        )
        .with_decimal(DecimalConvention::Comma)
        .with_date_formats(&["%d/%m/%Y"])
    }

    #[test]
    fn blank_rows_after_header_are_ignored() {
        let rows = vec![
            RawRow::from_strs(1, &["Date", "Description", "Amount"]),
            RawRow::from_strs(2, &["", "", ""]),
            RawRow::from_strs(3, &["01/02/2024", "Shop", "10,00"]),
            RawRow::from_strs(4, &[]),
        ];
        let conversion = convert(&rows, &profile()).unwrap();
        assert_eq!(conversion.records.len(), 1);
        assert!(conversion.skipped.is_empty());
        assert_eq!(conversion.data_rows(), 1);
    }

    #[test]
    fn skip_counts_group_by_kind() {
        let rows = vec![
            RawRow::from_strs(1, &["Date", "Description", "Amount"]),
            RawRow::from_strs(2, &["", "Shop", "1"]),
            RawRow::from_strs(3, &["bad", "Shop", "1"]),
            RawRow::from_strs(4, &["", "Shop", "2"]),
        ];
        let conversion = convert(&rows, &profile()).unwrap();
        let counts = conversion.skip_counts();
        assert_eq!(counts.get("MissingDate"), Some(&2));
        assert_eq!(counts.get("UnparsableDate"), Some(&1));
        assert_eq!(
            conversion.skipped[1].reason,
            SkipReason::UnparsableDate {
                value: "bad".to_string()
            }
        );
    }
}
