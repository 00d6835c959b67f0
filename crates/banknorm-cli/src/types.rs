//! Result types shared by the CLI commands.

use std::path::PathBuf;

use banknorm_core::Conversion;

/// How the layout profile for a run is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileChoice {
    /// Try every built-in profile in order.
    Auto,
    /// Built-in profile or `<name>.toml` in the profile directory.
    Named(String),
    /// Explicit TOML profile file.
    File(PathBuf),
}

impl ProfileChoice {
    /// A profile file wins over `--bank`; `auto` (any case) means detection.
    pub fn from_args(bank: &str, profile: Option<PathBuf>) -> Self {
        match profile {
            Some(path) => Self::File(path),
            None if bank.trim().eq_ignore_ascii_case("auto") => Self::Auto,
            None => Self::Named(bank.trim().to_string()),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub input: PathBuf,
    /// Written file; `None` on dry runs.
    pub output: Option<PathBuf>,
    /// True when the profile was chosen by auto-detection.
    pub detected: bool,
    pub conversion: Conversion,
}

impl RunResult {
    pub fn records_written(&self) -> usize {
        if self.output.is_some() {
            self.conversion.records.len()
        } else {
            0
        }
    }
}
