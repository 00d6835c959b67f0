//! Output path derivation.

use std::path::{Path, PathBuf};

/// Appended to the input file stem to name the output.
pub const OUTPUT_SUFFIX: &str = "_processed.csv";

/// Default output path: `statement.xls` becomes `statement_processed.csv`
/// in the same directory.
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}
