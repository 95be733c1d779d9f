//! Tenner option store loaded from the tabular dataset.
//!
//! Row 0 of the dataset is a header mapping positional keys to dimension ids
//! (`T1`..`T32`); rows 1..=10 hold the option descriptors, so `row - 1` is the
//! option index. Header keys whose value is not a dimension id are ignored.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::AppError;
use crate::domain::identifiers::DimensionId;

use super::dimension::{Dimension, OPTIONS_PER_DIMENSION, TennerOption};

/// Whether the registry holds the dataset or the empty fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryStatus {
    Loaded,
    /// The source was missing or malformed; the registry is empty but usable.
    Degraded { reason: String },
}

/// Read-only store of Tenner dimensions.
#[derive(Debug, Clone)]
pub struct TennerRegistry {
    dimensions: BTreeMap<DimensionId, Dimension>,
    status: RegistryStatus,
}

impl TennerRegistry {
    /// An empty registry reporting the given degradation reason.
    pub fn degraded(reason: impl Into<String>) -> Self {
        let status = RegistryStatus::Degraded { reason: reason.into() };
        Self { dimensions: BTreeMap::new(), status }
    }

    /// A loaded registry over prebuilt dimensions.
    pub fn from_dimensions(dimensions: impl IntoIterator<Item = Dimension>) -> Self {
        let dimensions =
            dimensions.into_iter().map(|dimension| (dimension.id, dimension)).collect();
        Self { dimensions, status: RegistryStatus::Loaded }
    }

    /// Parse the dataset, failing on malformed input.
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let rows: Vec<Value> = serde_json::from_str(content)
            .map_err(|e| AppError::data_error(format!("Tenner dataset is not a JSON array: {}", e)))?;

        let header = rows
            .first()
            .and_then(Value::as_object)
            .ok_or_else(|| AppError::data_error("Tenner dataset has no header row"))?;

        let mut columns: Vec<(String, DimensionId)> = Vec::new();
        for (key, value) in header {
            let Some(label) = value.as_str() else { continue };
            let Ok(id) = label.parse::<DimensionId>() else { continue };
            if columns.iter().any(|(_, existing)| *existing == id) {
                return Err(AppError::data_error(format!("Duplicate header column for {}", id)));
            }
            columns.push((key.clone(), id));
        }

        if columns.is_empty() {
            return Err(AppError::data_error("Tenner dataset header maps no T{n} columns"));
        }

        let option_rows = &rows[1..rows.len().min(OPTIONS_PER_DIMENSION + 1)];
        let mut dimensions = BTreeMap::new();
        for (key, id) in columns {
            let mut descriptors = Vec::with_capacity(OPTIONS_PER_DIMENSION);
            for (offset, row) in option_rows.iter().enumerate() {
                let object = row.as_object().ok_or_else(|| {
                    AppError::data_error(format!("Tenner dataset row {} is not an object", offset + 1))
                })?;
                descriptors.push(cell_text(object.get(&key), id, offset)?);
            }
            dimensions.insert(id, Dimension::from_descriptors(id, descriptors));
        }

        Ok(Self { dimensions, status: RegistryStatus::Loaded })
    }

    /// Parse the dataset, degrading to an empty registry instead of failing.
    pub fn load_or_degrade(source: Result<String, AppError>) -> Self {
        match source.and_then(|content| Self::from_json(&content)) {
            Ok(registry) => {
                tracing::debug!(dimensions = registry.len(), "Tenner registry loaded");
                registry
            }
            Err(err) => {
                tracing::warn!(error = %err, "Tenner dataset unavailable; continuing with empty registry");
                Self::degraded(err.to_string())
            }
        }
    }

    pub fn status(&self) -> &RegistryStatus {
        &self.status
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.status, RegistryStatus::Degraded { .. })
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    pub fn dimension(&self, id: DimensionId) -> Option<&Dimension> {
        self.dimensions.get(&id)
    }

    /// The ten options of a dimension.
    pub fn options(&self, id: DimensionId) -> Result<&[TennerOption], AppError> {
        self.dimensions
            .get(&id)
            .map(|dim| dim.options.as_slice())
            .ok_or_else(|| AppError::UnknownDimension(id.to_string()))
    }

    /// A single option by index.
    pub fn option(&self, id: DimensionId, index: usize) -> Result<&TennerOption, AppError> {
        self.options(id)?
            .get(index)
            .ok_or_else(|| AppError::InvalidOptionIndex { dimension: id.to_string(), index })
    }
}

fn cell_text(cell: Option<&Value>, id: DimensionId, offset: usize) -> Result<String, AppError> {
    match cell {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.trim().to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")),
        Some(Value::Object(_)) => Err(AppError::data_error(format!(
            "Cell for {} option {} is an object, expected text",
            id, offset
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(n: u8) -> DimensionId {
        DimensionId::new(n).unwrap()
    }

    const SMALL: &str = r#"[
        {"option": "option", "c1": "T1", "c2": "T2"},
        {"option": 0, "c1": "a fox tailor", "c2": "a felt beret"},
        {"option": 1, "c1": "a badger baker", "c2": null},
        {"option": 2, "c1": ["an otter", "postmaster"]}
    ]"#;

    #[test]
    fn parses_header_and_option_rows() {
        let registry = TennerRegistry::from_json(SMALL).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.status(), &RegistryStatus::Loaded);

        let options = registry.options(t(1)).unwrap();
        assert_eq!(options.len(), 10);
        assert_eq!(options[0].descriptor, "a fox tailor");
        assert_eq!(options[0].id, "t1_00");
        assert_eq!(options[2].descriptor, "an otter postmaster");
    }

    #[test]
    fn missing_and_null_cells_become_empty() {
        let registry = TennerRegistry::from_json(SMALL).unwrap();
        let options = registry.options(t(2)).unwrap();
        assert_eq!(options[1].descriptor, "");
        assert_eq!(options[2].descriptor, "");
        assert_eq!(options[9].descriptor, "");
    }

    #[test]
    fn unknown_dimension_is_a_data_lookup_error() {
        let registry = TennerRegistry::from_json(SMALL).unwrap();
        let err = registry.options(t(7)).unwrap_err();
        assert!(matches!(err, AppError::UnknownDimension(ref id) if id == "T7"));
    }

    #[test]
    fn option_index_out_of_range_is_rejected() {
        let registry = TennerRegistry::from_json(SMALL).unwrap();
        assert!(matches!(
            registry.option(t(1), 10),
            Err(AppError::InvalidOptionIndex { index: 10, .. })
        ));
    }

    #[test]
    fn malformed_sources_are_errors() {
        assert!(TennerRegistry::from_json("{}").is_err());
        assert!(TennerRegistry::from_json("[]").is_err());
        assert!(TennerRegistry::from_json(r#"[{"a": "nope"}]"#).is_err());
        assert!(TennerRegistry::from_json(r#"[{"a": "T1", "b": "T1"}]"#).is_err());
        assert!(TennerRegistry::from_json(r#"[{"a": "T1"}, {"a": {"x": 1}}]"#).is_err());
    }

    #[test]
    fn load_or_degrade_falls_back_to_empty() {
        let registry = TennerRegistry::load_or_degrade(Ok("not json".to_string()));
        assert!(registry.is_degraded());
        assert!(registry.is_empty());
        assert!(registry.options(t(1)).is_err());

        let missing = TennerRegistry::load_or_degrade(Err(AppError::data_error("missing file")));
        assert!(matches!(
            missing.status(),
            RegistryStatus::Degraded { reason } if reason.contains("missing file")
        ));
    }

    #[test]
    fn rows_beyond_ten_are_ignored() {
        let mut rows = vec![r#"{"k": "T9"}"#.to_string()];
        for i in 0..12 {
            rows.push(format!(r#"{{"k": "pattern {}"}}"#, i));
        }
        let json = format!("[{}]", rows.join(","));
        let registry = TennerRegistry::from_json(&json).unwrap();
        let options = registry.options(t(9)).unwrap();
        assert_eq!(options[9].descriptor, "pattern 9");
    }
}
