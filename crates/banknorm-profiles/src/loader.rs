//! TOML profile files.

use std::path::Path;

use tracing::debug;

use banknorm_model::{HeaderRule, LayoutProfile, Role};

use crate::error::ProfileError;

/// Loads and validates a profile from a TOML file.
///
/// ```toml
/// name = "santander"
/// decimal = "comma"
/// date_formats = ["%d/%m/%Y"]
///
/// [header]
/// mode = "markers"
/// tokens = ["fecha operación"]
///
/// [aliases]
/// date = ["fecha operación"]
/// payee = ["concepto"]
/// amount = ["importe"]
/// ```
pub fn load_profile(path: &Path) -> Result<LayoutProfile, ProfileError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ProfileError::io(path, e))?;
    let profile = parse_profile(&contents).map_err(|e| ProfileError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate_profile(&profile)?;
    debug!(path = %path.display(), profile = %profile.name, "loaded profile file");
    Ok(profile)
}

/// Parses profile TOML without validating it.
pub fn parse_profile(contents: &str) -> Result<LayoutProfile, toml::de::Error> {
    toml::from_str(contents)
}

/// Checks that a profile can drive a conversion.
pub fn validate_profile(profile: &LayoutProfile) -> Result<(), ProfileError> {
    let name = profile.name.trim();
    if name.is_empty() {
        return Err(ProfileError::invalid("", "name must not be empty"));
    }
    if profile.date_formats.iter().all(|format| format.trim().is_empty()) {
        return Err(ProfileError::invalid(name, "at least one date format is required"));
    }
    for role in Role::ALL {
        let aliases = profile.aliases.for_role(role);
        if aliases.iter().all(|alias| alias.trim().is_empty()) {
            return Err(ProfileError::invalid(
                name,
                format!("no aliases for the {role} column"),
            ));
        }
    }
    match &profile.header {
        HeaderRule::MinNonEmpty { cells } if *cells == 0 => Err(ProfileError::invalid(
            name,
            "header threshold must be at least 1 cell",
        )),
        HeaderRule::Markers { tokens } if tokens.iter().all(|t| t.trim().is_empty()) => {
            Err(ProfileError::invalid(name, "header markers must not be empty"))
        }
        _ => Ok(()),
    }
}
