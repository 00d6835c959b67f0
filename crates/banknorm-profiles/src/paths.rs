//! Profile directory path resolution.

use std::path::{Path, PathBuf};

/// Environment variable naming a directory of `<name>.toml` profiles.
pub const PROFILE_DIR_ENV_VAR: &str = "BANKNORM_PROFILE_DIR";

/// Get the user profile directory, if configured.
///
/// # Example
///
/// ```rust,ignore
/// if let Some(dir) = banknorm_profiles::profile_dir() {
///     let santander = dir.join("santander.toml");
/// }
/// ```
pub fn profile_dir() -> Option<PathBuf> {
    std::env::var_os(PROFILE_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Path of the profile file for `name` inside `dir`.
pub fn profile_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.toml", name.trim().to_lowercase()))
}
