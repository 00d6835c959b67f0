//! Run pipeline: profile selection, loading, conversion and output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use banknorm_core::{ConvertError, FatalKind, convert, detect_profile};
use banknorm_ingest::{LoadOptions, load_document};
use banknorm_model::{DecimalConvention, LayoutProfile, RawRow};
use banknorm_profiles::{ProfileRegistry, load_profile};
use banknorm_report::{output_path_for, write_records_to_path};

use crate::types::{ProfileChoice, RunResult};

/// Everything one conversion run needs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub profile: ProfileChoice,
    /// Overrides the selected profile's decimal convention.
    pub decimal: Option<DecimalConvention>,
    pub output: Option<PathBuf>,
    pub load: LoadOptions,
    pub dry_run: bool,
}

/// Resolves the profile choice; `None` means auto-detection.
pub fn select_profile(
    choice: &ProfileChoice,
    registry: &ProfileRegistry,
) -> Result<Option<LayoutProfile>> {
    match choice {
        ProfileChoice::Auto => Ok(None),
        ProfileChoice::Named(name) => registry
            .resolve(name)
            .map(Some)
            .with_context(|| format!("select profile '{name}'")),
        ProfileChoice::File(path) => load_profile(path)
            .map(Some)
            .with_context(|| format!("load profile {}", path.display())),
    }
}

/// Converts one document. On any error nothing is written.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let span = info_span!("run", input = %options.input.display());
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Profile selection
    // =========================================================================
    let registry = ProfileRegistry::builtin();
    let selected = select_profile(&options.profile, &registry)?
        .map(|profile| apply_decimal(profile, options.decimal));
    let candidates: Vec<LayoutProfile> = registry
        .iter()
        .cloned()
        .map(|profile| apply_decimal(profile, options.decimal))
        .collect();

    // =========================================================================
    // Stage 2: Load
    // =========================================================================
    let decimal = selected
        .as_ref()
        .map_or(options.decimal.unwrap_or_default(), |profile| profile.decimal);
    let mut rows = load_rows(options, decimal)?;

    // =========================================================================
    // Stage 3: Convert
    // =========================================================================
    let detected = selected.is_none();
    let profile = match selected {
        Some(profile) => profile,
        None => {
            let profile = detect_profile(&rows, &candidates)
                .cloned()
                .ok_or_else(|| ConvertError::NoMatchingProfile {
                    tried: candidates.iter().map(|p| p.name.clone()).collect(),
                })
                .with_context(|| format!("convert {}", options.input.display()))?;
            info!(profile = %profile.name, "detected profile");
            // Numbers rendered as text must use the detected convention.
            if options.load.all_text && profile.decimal != decimal {
                rows = load_rows(options, profile.decimal)?;
            }
            profile
        }
    };
    let conversion = convert(&rows, &profile)
        .with_context(|| format!("convert {}", options.input.display()))?;

    // =========================================================================
    // Stage 4: Output
    // =========================================================================
    let output = if options.dry_run {
        info!("dry run: no output written");
        None
    } else {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| output_path_for(&options.input));
        write_records_to_path(&path, &conversion.records)
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    Ok(RunResult {
        input: options.input.clone(),
        output,
        detected,
        conversion,
    })
}

fn load_rows(options: &RunOptions, decimal: DecimalConvention) -> Result<Vec<RawRow>> {
    let load = LoadOptions {
        decimal,
        ..options.load.clone()
    };
    load_document(&options.input, &load)
        .map_err(ConvertError::from)
        .with_context(|| format!("load {}", options.input.display()))
}

fn apply_decimal(mut profile: LayoutProfile, decimal: Option<DecimalConvention>) -> LayoutProfile {
    if let Some(decimal) = decimal {
        profile.decimal = decimal;
    }
    profile
}

/// Fatal error class behind an error chain, if it came from a conversion.
pub fn fatal_kind(error: &anyhow::Error) -> Option<FatalKind> {
    error.downcast_ref::<ConvertError>().map(ConvertError::kind)
}
