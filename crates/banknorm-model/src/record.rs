//! Column index, canonical output records and per-row skip outcomes.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::profile::Role;

/// Output date format of canonical records (`DD/MM/YYYY`).
pub const CANONICAL_DATE_FORMAT: &str = "%d/%m/%Y";

/// Resolved zero-based source column for every role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    date: usize,
    payee: usize,
    amount: usize,
}

impl ColumnIndex {
    pub fn new(date: usize, payee: usize, amount: usize) -> Self {
        Self {
            date,
            payee,
            amount,
        }
    }

    pub fn get(&self, role: Role) -> usize {
        match role {
            Role::Date => self.date,
            Role::Payee => self.payee,
            Role::Amount => self.amount,
        }
    }
}

/// Normalized ledger row: Date, Payee, Notes, Amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord {
    pub date: NaiveDate,
    /// Payee text with `/`, `\` and `,` removed.
    pub payee: String,
    /// Reserved for downstream enrichment; always empty here.
    pub notes: String,
    /// Signed amount, rounded to two decimal places.
    pub amount: Decimal,
}

impl CanonicalRecord {
    pub fn new(date: NaiveDate, payee: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            payee: payee.into(),
            notes: String::new(),
            amount,
        }
    }

    /// Date rendered as `DD/MM/YYYY`.
    pub fn date_text(&self) -> String {
        self.date.format(CANONICAL_DATE_FORMAT).to_string()
    }

    /// Amount with two decimals, except that an exact `.00` is dropped.
    ///
    /// `12.5` renders as `12.50`, `-3` as `-3`.
    pub fn amount_text(&self) -> String {
        let amount = if self.amount.is_zero() {
            Decimal::ZERO
        } else {
            self.amount
        };
        let mut text = format!("{amount:.2}");
        if text.ends_with(".00") {
            text.truncate(text.len() - 3);
        }
        text
    }
}

/// Why a data row produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("missing date")]
    MissingDate,
    #[error("unparsable date '{value}'")]
    UnparsableDate { value: String },
    #[error("missing amount")]
    MissingAmount,
    #[error("unparsable amount '{value}'")]
    UnparsableAmount { value: String },
    #[error("unexpected error: {message}")]
    UnexpectedError { message: String },
}

impl SkipReason {
    /// Stable reason name used in summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingDate => "MissingDate",
            Self::UnparsableDate { .. } => "UnparsableDate",
            Self::MissingAmount => "MissingAmount",
            Self::UnparsableAmount { .. } => "UnparsableAmount",
            Self::UnexpectedError { .. } => "UnexpectedError",
        }
    }
}

/// A data row that was excluded from output, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipOutcome {
    /// 1-based source row number.
    pub line: usize,
    pub reason: SkipReason,
}

impl fmt::Display for SkipOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.line, self.reason)
    }
}
