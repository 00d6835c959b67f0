//! CLI argument definitions for the bank statement normalizer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use banknorm_model::{DecimalConvention, ModelError};

#[derive(Parser)]
#[command(
    name = "banknorm",
    version,
    about = "Normalize bank statement exports into Date,Payee,Notes,Amount CSV",
    long_about = "Normalize bank statement exports into one canonical CSV layout.\n\n\
                  Reads xls/xlsx/ods spreadsheets and delimited text, finds the header row,\n\
                  maps the date, payee and amount columns and writes <INPUT>_processed.csv."
)]
pub struct Cli {
    /// Statement file to convert.
    #[arg(value_name = "INPUT", required_unless_present = "list_profiles")]
    pub input: Option<PathBuf>,

    /// Bank layout profile name, or `auto` to detect it.
    #[arg(long = "bank", value_name = "NAME", default_value = "auto")]
    pub bank: String,

    /// TOML layout profile file (overrides --bank).
    #[arg(long = "profile", value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Output file (default: <INPUT stem>_processed.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of leading source rows to ignore before header detection.
    #[arg(long = "start-row", value_name = "N", default_value_t = 0)]
    pub start_row: usize,

    /// Read numeric spreadsheet cells as text.
    #[arg(long = "all-text")]
    pub all_text: bool,

    /// Field delimiter for text files (a single character, or `tab`).
    #[arg(long = "delimiter", value_name = "CHAR", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Override the profile's decimal separator (`dot` or `comma`).
    #[arg(long = "decimal", value_name = "CONVENTION", value_parser = parse_decimal)]
    pub decimal: Option<DecimalConvention>,

    /// Convert and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// List the known layout profiles and exit.
    #[arg(long = "list-profiles")]
    pub list_profiles: bool,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Parses `--delimiter`: one ASCII character, `tab` or `\t`.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    if matches!(value, "tab" | "\\t" | "\t") {
        return Ok(b'\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '"' => Ok(c as u8),
        _ => Err(format!(
            "expected a single ASCII character or `tab`, got '{value}'"
        )),
    }
}

pub fn parse_decimal(value: &str) -> Result<DecimalConvention, String> {
    value.parse().map_err(|error: ModelError| error.to_string())
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
