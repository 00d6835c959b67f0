//! Layout profiles: per-bank configuration values driving one conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Default non-empty cell threshold for [`HeaderRule::MinNonEmpty`].
pub const DEFAULT_MIN_HEADER_CELLS: usize = 3;

/// Canonical column role located among the source columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Date,
    Payee,
    Amount,
}

impl Role {
    /// All roles, in canonical output order.
    pub const ALL: [Role; 3] = [Role::Date, Role::Payee, Role::Amount];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Payee => "Payee",
            Self::Amount => "Amount",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "payee" => Ok(Self::Payee),
            "amount" => Ok(Self::Amount),
            _ => Err(ModelError::UnknownRole(value.to_string())),
        }
    }
}

/// Decimal/thousands separator convention of monetary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalConvention {
    /// `1,234.56`
    #[default]
    Dot,
    /// `1.234,56`
    Comma,
}

impl DecimalConvention {
    pub fn decimal_separator(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Comma => ',',
        }
    }

    pub fn thousands_separator(self) -> char {
        match self {
            Self::Dot => ',',
            Self::Comma => '.',
        }
    }
}

impl FromStr for DecimalConvention {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dot" | "." => Ok(Self::Dot),
            "comma" | "," => Ok(Self::Comma),
            _ => Err(ModelError::UnknownDecimalConvention(value.to_string())),
        }
    }
}

/// How the header row is located in the raw row sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HeaderRule {
    /// Skip a fixed number of rows; the next row is the header.
    FixedOffset { skip: usize },
    /// First row containing a cell equal (case-insensitively) to a token.
    Markers { tokens: Vec<String> },
    /// First row with at least `cells` non-empty cells.
    MinNonEmpty {
        #[serde(default = "default_min_cells")]
        cells: usize,
    },
}

fn default_min_cells() -> usize {
    DEFAULT_MIN_HEADER_CELLS
}

impl Default for HeaderRule {
    fn default() -> Self {
        Self::MinNonEmpty {
            cells: DEFAULT_MIN_HEADER_CELLS,
        }
    }
}

impl fmt::Display for HeaderRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedOffset { skip } => write!(f, "fixed offset (skip {skip} rows)"),
            Self::Markers { tokens } => write!(f, "marker tokens [{}]", tokens.join(", ")),
            Self::MinNonEmpty { cells } => write!(f, "at least {cells} non-empty cells"),
        }
    }
}

/// Header label aliases for each role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleAliases {
    #[serde(default)]
    pub date: Vec<String>,
    #[serde(default)]
    pub payee: Vec<String>,
    #[serde(default)]
    pub amount: Vec<String>,
}

impl RoleAliases {
    pub fn new(date: &[&str], payee: &[&str], amount: &[&str]) -> Self {
        let owned = |values: &[&str]| values.iter().map(|v| (*v).to_string()).collect();
        Self {
            date: owned(date),
            payee: owned(payee),
            amount: owned(amount),
        }
    }

    pub fn for_role(&self, role: Role) -> &[String] {
        match role {
            Role::Date => &self.date,
            Role::Payee => &self.payee,
            Role::Amount => &self.amount,
        }
    }
}

/// Structural description of one bank export layout.
///
/// Profiles are plain values: a new bank format is a new profile, not new
/// control flow. They are built once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutProfile {
    /// Short identifier (e.g. `bankinter`).
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal separator convention of text amounts.
    #[serde(default)]
    pub decimal: DecimalConvention,
    /// chrono format strings, tried in order; first success wins.
    pub date_formats: Vec<String>,
    pub header: HeaderRule,
    pub aliases: RoleAliases,
}

impl LayoutProfile {
    pub fn new(name: impl Into<String>, header: HeaderRule, aliases: RoleAliases) -> Self {
        Self {
            name: name.into(),
            description: None,
            decimal: DecimalConvention::default(),
            date_formats: Vec::new(),
            header,
            aliases,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_decimal(mut self, decimal: DecimalConvention) -> Self {
        self.decimal = decimal;
        self
    }

    #[must_use]
    pub fn with_date_formats(mut self, formats: &[&str]) -> Self {
        self.date_formats = formats.iter().map(|f| (*f).to_string()).collect();
        self
    }
}
