//! Mapped row to canonical record conversion.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use banknorm_model::{
    CanonicalRecord, CellValue, ColumnIndex, LayoutProfile, RawRow, Role, SkipReason,
};

use crate::cell::{cell_text, normalize_amount_text, sanitize_payee};
use crate::normalization::{number_to_amount, parse_amount, parse_date_with_formats, round_amount};

/// Converts data rows into canonical records using one profile and column index.
///
/// Each row yields either a record or the reason it was skipped. Nothing here
/// is fatal to the conversion as a whole.
#[derive(Debug, Clone, Copy)]
pub struct RecordNormalizer<'a> {
    profile: &'a LayoutProfile,
    columns: ColumnIndex,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(profile: &'a LayoutProfile, columns: ColumnIndex) -> Self {
        Self { profile, columns }
    }

    pub fn columns(&self) -> ColumnIndex {
        self.columns
    }

    /// Normalizes one data row.
    ///
    /// Date problems are reported before amount problems; the payee never
    /// causes a skip.
    pub fn normalize(&self, row: &RawRow) -> Result<CanonicalRecord, SkipReason> {
        let date = self.date(row)?;
        let amount = self.amount(row)?;
        let payee = self
            .cell(row, Role::Payee)
            .and_then(cell_text)
            .map(|text| sanitize_payee(&text))
            .unwrap_or_default();
        Ok(CanonicalRecord::new(date, payee, amount))
    }

    fn cell<'r>(&self, row: &'r RawRow, role: Role) -> Option<&'r CellValue> {
        row.get(self.columns.get(role))
    }

    fn date(&self, row: &RawRow) -> Result<NaiveDate, SkipReason> {
        let text = self
            .cell(row, Role::Date)
            .and_then(cell_text)
            .ok_or(SkipReason::MissingDate)?;
        parse_date_with_formats(&text, &self.profile.date_formats)
            .ok_or(SkipReason::UnparsableDate { value: text })
    }

    fn amount(&self, row: &RawRow) -> Result<Decimal, SkipReason> {
        match self.cell(row, Role::Amount) {
            Some(CellValue::Number(value)) => number_to_amount(*value)
                .map(round_amount)
                .ok_or_else(|| SkipReason::UnexpectedError {
                    message: format!("numeric amount {value} has no decimal representation"),
                }),
            cell => {
                let text = cell.and_then(cell_text).ok_or(SkipReason::MissingAmount)?;
                let normalized = normalize_amount_text(&text, self.profile.decimal);
                parse_amount(&normalized)
                    .map(round_amount)
                    .ok_or(SkipReason::UnparsableAmount { value: text })
            }
        }
    }
}
