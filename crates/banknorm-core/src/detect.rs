//! Profile auto-detection.

use tracing::{debug, info};

use banknorm_ingest::{header_labels, locate_header};
use banknorm_map::ColumnMapper;
use banknorm_model::{LayoutProfile, RawRow};

use crate::error::ConvertError;
use crate::pipeline::{Conversion, convert};

/// Returns the first candidate whose header is found and whose columns map.
pub fn detect_profile<'p>(
    rows: &[RawRow],
    candidates: &'p [LayoutProfile],
) -> Option<&'p LayoutProfile> {
    candidates.iter().find(|profile| match accepts(rows, profile) {
        Ok(()) => true,
        Err(err) => {
            debug!(profile = %profile.name, reason = %err, "profile rejected");
            false
        }
    })
}

fn accepts(rows: &[RawRow], profile: &LayoutProfile) -> Result<(), ConvertError> {
    let header_index = locate_header(rows, &profile.header)?;
    let labels = header_labels(&rows[header_index]);
    ColumnMapper::new(&profile.aliases).map(&labels)?;
    Ok(())
}

/// Detects the profile and converts with it.
pub fn convert_auto(
    rows: &[RawRow],
    candidates: &[LayoutProfile],
) -> Result<Conversion, ConvertError> {
    let Some(profile) = detect_profile(rows, candidates) else {
        return Err(ConvertError::NoMatchingProfile {
            tried: candidates.iter().map(|p| p.name.clone()).collect(),
        });
    };
    info!(profile = %profile.name, "detected profile");
    convert(rows, profile)
}
