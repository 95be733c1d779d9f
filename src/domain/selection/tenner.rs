use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::identifiers::DimensionId;
use crate::domain::tenner::{OPTIONS_PER_DIMENSION, PlanResult, TennerMode, plan};

/// Most Tenner dimensions a selection may combine.
pub const MAX_TENNER_DIMENSIONS: usize = 3;

/// Tenner part of a selection: chosen dimensions in selection order, the
/// expansion mode, and concrete option indices for single mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TennerSelection {
    pub mode: TennerMode,
    pub dimensions: Vec<DimensionId>,
    pub choices: BTreeMap<DimensionId, usize>,
}

impl TennerSelection {
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    pub fn contains(&self, id: DimensionId) -> bool {
        self.dimensions.contains(&id)
    }

    pub fn choice(&self, id: DimensionId) -> Option<usize> {
        self.choices.get(&id).copied()
    }

    pub fn plan(&self) -> PlanResult {
        plan(&self.dimensions, self.mode, &self.choices)
    }

    /// Structural checks: dimension count, duplicates, option ranges, orphan choices.
    pub fn check(&self) -> Result<(), AppError> {
        if self.dimensions.len() > MAX_TENNER_DIMENSIONS {
            return Err(AppError::InvalidSelection(format!(
                "At most {} Tenner dimensions can be combined, found {}",
                MAX_TENNER_DIMENSIONS,
                self.dimensions.len()
            )));
        }

        let mut seen = BTreeSet::new();
        for id in &self.dimensions {
            if !seen.insert(*id) {
                return Err(AppError::InvalidSelection(format!("Tenner dimension {} selected twice", id)));
            }
        }

        for (id, index) in &self.choices {
            if *index >= OPTIONS_PER_DIMENSION {
                let dimension = id.to_string();
                return Err(AppError::InvalidOptionIndex { dimension, index: *index });
            }
            if !seen.contains(id) {
                return Err(AppError::InvalidSelection(format!(
                    "Option chosen for {} which is not a selected dimension",
                    id
                )));
            }
        }

        Ok(())
    }

    /// Concrete `(dimension, index)` pairs in selection order.
    pub fn concrete_choices(&self) -> impl Iterator<Item = (DimensionId, usize)> + '_ {
        self.dimensions.iter().filter_map(|id| self.choice(*id).map(|index| (*id, index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u8) -> DimensionId {
        DimensionId::new(n).unwrap()
    }

    #[test]
    fn parses_from_json_with_string_keys() {
        let json = r#"{"mode":"single","dimensions":["T4","T1"],"choices":{"T1":2,"T4":9}}"#;
        let tenner: TennerSelection = serde_json::from_str(json).unwrap();
        assert_eq!(tenner.dimensions, vec![id(4), id(1)]);
        assert_eq!(tenner.choice(id(1)), Some(2));
        assert!(tenner.check().is_ok());
        assert_eq!(tenner.concrete_choices().collect::<Vec<_>>(), vec![(id(4), 9), (id(1), 2)]);
    }

    #[test]
    fn rejects_duplicates_and_bad_indices() {
        let duplicate = TennerSelection { dimensions: vec![id(1), id(1)], ..Default::default() };
        assert!(matches!(duplicate.check(), Err(AppError::InvalidSelection(_))));

        let mut out_of_range = TennerSelection { dimensions: vec![id(1)], ..Default::default() };
        out_of_range.choices.insert(id(1), 10);
        let err = out_of_range.check();
        assert!(matches!(err, Err(AppError::InvalidOptionIndex { index: 10, .. })));
    }

    #[test]
    fn rejects_more_than_three_dimensions() {
        let tenner =
            TennerSelection { dimensions: vec![id(1), id(2), id(3), id(4)], ..Default::default() };
        assert!(tenner.check().is_err());
    }

    #[test]
    fn rejects_orphan_choices() {
        let mut tenner = TennerSelection { dimensions: vec![id(2)], ..Default::default() };
        tenner.choices.insert(id(3), 1);
        assert!(tenner.check().is_err());
    }
}
