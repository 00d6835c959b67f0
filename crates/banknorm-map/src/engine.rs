//! Alias-driven column mapper.

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;
use tracing::debug;

use banknorm_model::{ColumnIndex, Role, RoleAliases};

use crate::error::MappingError;
use crate::utils::normalize_text;

/// Minimum similarity for a label to be offered as a "did you mean" hint.
const NEAR_MISS_MIN_SIMILARITY: f64 = 0.80;

/// How a header label satisfied an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Normalized label equals the alias.
    Exact,
    /// Normalized label contains the alias (e.g. `importe (€)` for `importe`).
    Substring,
}

/// A role resolved to a source column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMatch {
    pub role: Role,
    /// Zero-based column position.
    pub column: usize,
    /// Header label as it appears in the source.
    pub label: String,
    /// Normalized alias that matched.
    pub alias: String,
    pub kind: MatchKind,
}

/// The closest label to a role's aliases that did not match any of them.
#[derive(Debug, Clone, PartialEq)]
pub struct NearMiss {
    pub role: Role,
    pub column: usize,
    pub label: String,
    pub alias: String,
    pub similarity: f64,
}

/// Maps header labels to canonical roles using per-role alias lists.
///
/// Matching is case- and whitespace-insensitive. For each role the leftmost
/// column whose label equals an alias, or contains one, wins.
///
/// # Example
///
/// ```ignore
/// use banknorm_map::ColumnMapper;
///
/// let mapper = ColumnMapper::new(&profile.aliases);
/// let index = mapper.map(&["Fecha".into(), "Concepto".into(), "Importe".into()])?;
/// ```
#[derive(Debug, Clone)]
pub struct ColumnMapper {
    aliases: Vec<(Role, Vec<String>)>,
}

impl ColumnMapper {
    /// Builds a mapper; aliases are normalized and empty ones dropped.
    pub fn new(aliases: &RoleAliases) -> Self {
        let aliases = Role::ALL
            .iter()
            .map(|role| {
                let normalized = aliases
                    .for_role(*role)
                    .iter()
                    .map(|alias| normalize_text(alias))
                    .filter(|alias| !alias.is_empty())
                    .collect();
                (*role, normalized)
            })
            .collect();
        Self { aliases }
    }

    fn aliases_for(&self, role: Role) -> &[String] {
        self.aliases
            .iter()
            .find(|(candidate, _)| *candidate == role)
            .map_or(&[], |(_, aliases)| aliases.as_slice())
    }

    /// Finds the leftmost column matching one of the role's aliases.
    pub fn match_role(&self, role: Role, labels: &[String]) -> Option<ColumnMatch> {
        let aliases = self.aliases_for(role);
        for (column, label) in labels.iter().enumerate() {
            let normalized = normalize_text(label);
            if normalized.is_empty() {
                continue;
            }
            if let Some(alias) = aliases.iter().find(|alias| **alias == normalized) {
                return Some(ColumnMatch {
                    role,
                    column,
                    label: label.trim().to_string(),
                    alias: alias.clone(),
                    kind: MatchKind::Exact,
                });
            }
            if let Some(alias) = aliases
                .iter()
                .find(|alias| normalized.contains(alias.as_str()))
            {
                return Some(ColumnMatch {
                    role,
                    column,
                    label: label.trim().to_string(),
                    alias: alias.clone(),
                    kind: MatchKind::Substring,
                });
            }
        }
        None
    }

    /// Matches every role independently, in canonical role order.
    pub fn suggest(&self, labels: &[String]) -> Vec<ColumnMatch> {
        Role::ALL
            .iter()
            .filter_map(|role| self.match_role(*role, labels))
            .collect()
    }

    /// Builds the column index, failing on unmatched roles or shared columns.
    ///
    /// Unmatched roles are reported before column conflicts.
    pub fn map(&self, labels: &[String]) -> Result<ColumnIndex, MappingError> {
        let matches = self.suggest(labels);
        for found in &matches {
            debug!(
                role = %found.role,
                column = found.column,
                label = %found.label,
                alias = %found.alias,
                kind = ?found.kind,
                "column matched"
            );
        }

        let column_of = |role: Role| {
            matches
                .iter()
                .find(|found| found.role == role)
                .map(|found| found.column)
        };
        let (Some(date), Some(payee), Some(amount)) = (
            column_of(Role::Date),
            column_of(Role::Payee),
            column_of(Role::Amount),
        ) else {
            let roles = Role::ALL
                .iter()
                .copied()
                .filter(|role| column_of(*role).is_none())
                .collect();
            return Err(MappingError::MissingColumn { roles });
        };

        for (idx, first) in matches.iter().enumerate() {
            if let Some(second) = matches[idx + 1..]
                .iter()
                .find(|other| other.column == first.column)
            {
                return Err(MappingError::AmbiguousColumnMapping {
                    column: first.column,
                    label: first.label.clone(),
                    roles: (first.role, second.role),
                });
            }
        }

        Ok(ColumnIndex::new(date, payee, amount))
    }

    /// Returns the label most similar to one of the role's aliases, for hints
    /// when the role could not be matched.
    pub fn closest_column(&self, role: Role, labels: &[String]) -> Option<NearMiss> {
        let mut best: Option<NearMiss> = None;
        for alias in self.aliases_for(role) {
            for (column, label) in labels.iter().enumerate() {
                let normalized = normalize_text(label);
                if normalized.is_empty() {
                    continue;
                }
                let similarity = jaro_similarity(normalized.chars(), alias.chars());
                if similarity < NEAR_MISS_MIN_SIMILARITY {
                    continue;
                }
                if best.as_ref().is_none_or(|b| similarity > b.similarity) {
                    best = Some(NearMiss {
                        role,
                        column,
                        label: label.trim().to_string(),
                        alias: alias.clone(),
                        similarity,
                    });
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn english() -> ColumnMapper {
        ColumnMapper::new(&RoleAliases::new(
            &["date"],
            &["payee", "description"],
            &["amount"],
        ))
    }

    #[test]
    fn maps_exact_labels() {
        let index = english()
            .map(&labels(&["Date", "Description", "Amount"]))
            .unwrap();
        assert_eq!(index, ColumnIndex::new(0, 1, 2));
    }

    #[test]
    fn substring_tolerates_unit_suffix() {
        let mapper = ColumnMapper::new(&RoleAliases::new(
            &["fecha"],
            &["descripción"],
            &["importe"],
        ));
        let header = labels(&["Fecha", "Categoría", "Descripción", "Importe (€)", "Saldo (€)"]);
        let found = mapper.match_role(Role::Amount, &header).unwrap();
        assert_eq!(found.column, 3);
        assert_eq!(found.kind, MatchKind::Substring);
        assert_eq!(mapper.map(&header).unwrap(), ColumnIndex::new(0, 2, 3));
    }

    #[test]
    fn leftmost_column_wins() {
        let header = labels(&["Type", "Started Date", "Completed Date", "Description", "Amount"]);
        let found = english().match_role(Role::Date, &header).unwrap();
        assert_eq!(found.column, 1);
        assert_eq!(found.label, "Started Date");
    }

    #[test]
    fn missing_roles_are_all_named() {
        let err = english().map(&labels(&["Date", "Amount"])).unwrap_err();
        assert_eq!(
            err,
            MappingError::MissingColumn {
                roles: vec![Role::Payee]
            }
        );
        assert_eq!(err.to_string(), "missing required column(s): Payee");

        let err = english().map(&labels(&["Balance"])).unwrap_err();
        assert_eq!(
            err,
            MappingError::MissingColumn {
                roles: vec![Role::Date, Role::Payee, Role::Amount]
            }
        );
    }

    #[test]
    fn shared_column_is_ambiguous() {
        let mapper = ColumnMapper::new(&RoleAliases::new(&["date"], &["payee"], &["amount"]));
        let err = mapper
            .map(&labels(&["Payee date", "Amount"]))
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::AmbiguousColumnMapping {
                column: 0,
                label: "Payee date".to_string(),
                roles: (Role::Date, Role::Payee),
            }
        );
    }

    #[test]
    fn empty_aliases_and_labels_are_ignored() {
        let mapper = ColumnMapper::new(&RoleAliases::new(&["", "date"], &["payee"], &["amount"]));
        let index = mapper.map(&labels(&["", "Payee", "Date", "Amount"])).unwrap();
        assert_eq!(index, ColumnIndex::new(2, 1, 3));
    }

    #[test]
    fn closest_column_suggests_near_misses() {
        let header = labels(&["Date", "Descripton", "Amount"]);
        let miss = english().closest_column(Role::Payee, &header).unwrap();
        assert_eq!(miss.column, 1);
        assert_eq!(miss.alias, "description");
        assert!(english().closest_column(Role::Payee, &labels(&["Xyz"])).is_none());
    }
}
