use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::DimensionId;

/// How selected Tenner dimensions are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TennerMode {
    /// One concrete option per selected dimension.
    #[default]
    Single,
    /// Every combination of the selected dimensions' options.
    Batch,
}

impl TennerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TennerMode::Single => "single",
            TennerMode::Batch => "batch",
        }
    }

    pub fn from_name(name: &str) -> Option<TennerMode> {
        match name.trim().to_lowercase().as_str() {
            "single" => Some(TennerMode::Single),
            "batch" => Some(TennerMode::Batch),
            _ => None,
        }
    }
}

impl fmt::Display for TennerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a plan can proceed to composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PlanStatus {
    Complete { count: u128 },
    /// Single mode with dimensions still lacking a concrete option.
    Incomplete { missing: Vec<DimensionId> },
}

/// Result of permutation planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanResult {
    pub mode: TennerMode,
    pub dimensions: Vec<DimensionId>,
    #[serde(flatten)]
    pub status: PlanStatus,
}

impl PlanResult {
    pub fn is_complete(&self) -> bool {
        matches!(self.status, PlanStatus::Complete { .. })
    }

    /// Combination count; absent while the plan is incomplete.
    pub fn count(&self) -> Option<u128> {
        match self.status {
            PlanStatus::Complete { count } => Some(count),
            PlanStatus::Incomplete { .. } => None,
        }
    }

    /// One-line summary carried alongside (never inside) the prompt.
    pub fn metadata_line(&self) -> String {
        let dimensions = if self.dimensions.is_empty() {
            "none".to_string()
        } else {
            self.dimensions.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        };
        let count = match &self.status {
            PlanStatus::Complete { count } => count.to_string(),
            PlanStatus::Incomplete { missing } => {
                let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
                format!("incomplete (missing {})", missing.join(", "))
            }
        };
        format!("Tenner mode: {} | Dimensions: {} | Permutations: {}", self.mode, dimensions, count)
    }
}

/// `10^k`, saturating at `u128::MAX`.
pub fn permutation_count(k: usize) -> u128 {
    u32::try_from(k).ok().and_then(|k| 10u128.checked_pow(k)).unwrap_or(u128::MAX)
}

/// Plan the permutations for the selected dimensions.
///
/// Batch mode never needs concrete choices. Single mode is incomplete until
/// every selected dimension has one.
pub fn plan(
    dimensions: &[DimensionId],
    mode: TennerMode,
    choices: &BTreeMap<DimensionId, usize>,
) -> PlanResult {
    let status = match mode {
        TennerMode::Batch => PlanStatus::Complete { count: permutation_count(dimensions.len()) },
        TennerMode::Single => {
            let missing: Vec<DimensionId> =
                dimensions.iter().filter(|id| !choices.contains_key(id)).copied().collect();
            if missing.is_empty() {
                PlanStatus::Complete { count: 1 }
            } else {
                PlanStatus::Incomplete { missing }
            }
        }
    };
    tracing::debug!(mode = %mode, k = dimensions.len(), ?status, "planned permutations");
    PlanResult { mode, dimensions: dimensions.to_vec(), status }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[u8]) -> Vec<DimensionId> {
        list.iter().map(|n| DimensionId::new(*n).unwrap()).collect()
    }

    #[test]
    fn batch_counts_are_powers_of_ten() {
        let none = BTreeMap::new();
        assert_eq!(plan(&ids(&[1]), TennerMode::Batch, &none).count(), Some(10));
        assert_eq!(plan(&ids(&[1, 2]), TennerMode::Batch, &none).count(), Some(100));
        assert_eq!(plan(&ids(&[1, 2, 3]), TennerMode::Batch, &none).count(), Some(1000));
    }

    #[test]
    fn count_formula_generalizes() {
        assert_eq!(permutation_count(0), 1);
        assert_eq!(permutation_count(5), 100_000);
        assert_eq!(permutation_count(32), 10u128.pow(32));
        assert_eq!(permutation_count(64), u128::MAX);
    }

    #[test]
    fn single_mode_without_choices_is_incomplete() {
        let mut choices = BTreeMap::new();
        choices.insert(DimensionId::new(1).unwrap(), 3);
        let result = plan(&ids(&[1, 2]), TennerMode::Single, &choices);
        assert!(!result.is_complete());
        assert_eq!(result.count(), None);
        assert_eq!(result.status, PlanStatus::Incomplete { missing: ids(&[2]) });
    }

    #[test]
    fn single_mode_with_all_choices_yields_one() {
        let choices: BTreeMap<_, _> = ids(&[6, 7]).into_iter().map(|id| (id, 0)).collect();
        let result = plan(&ids(&[6, 7]), TennerMode::Single, &choices);
        assert_eq!(result.count(), Some(1));
    }

    #[test]
    fn planning_is_idempotent() {
        let choices = BTreeMap::new();
        let a = plan(&ids(&[3, 9]), TennerMode::Batch, &choices);
        let b = plan(&ids(&[3, 9]), TennerMode::Batch, &choices);
        assert_eq!(a, b);
    }

    #[test]
    fn metadata_line_describes_plan() {
        let result = plan(&ids(&[1, 2]), TennerMode::Batch, &BTreeMap::new());
        assert_eq!(
            result.metadata_line(),
            "Tenner mode: batch | Dimensions: T1, T2 | Permutations: 100"
        );
        let incomplete = plan(&ids(&[4]), TennerMode::Single, &BTreeMap::new());
        assert!(incomplete.metadata_line().ends_with("incomplete (missing T4)"));
    }

    #[test]
    fn mode_names_parse() {
        assert_eq!(TennerMode::from_name("Batch"), Some(TennerMode::Batch));
        assert_eq!(TennerMode::from_name("single"), Some(TennerMode::Single));
        assert_eq!(TennerMode::from_name("both"), None);
    }
}
