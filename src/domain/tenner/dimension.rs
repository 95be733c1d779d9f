use serde::Serialize;

use crate::domain::identifiers::DimensionId;

/// Number of options carried by every Tenner dimension.
pub const OPTIONS_PER_DIMENSION: usize = 10;

/// Dimension whose concrete option names the subject of the prompt.
pub const CHARACTER_DIMENSION: DimensionId = DimensionId::from_table(1);

/// Category label for each dimension, indexed by `DimensionId::position`.
const CATEGORIES: [&str; 32] = [
    "character",
    "headwear",
    "garment",
    "accessory",
    "handheld prop",
    "facial expression",
    "gesture",
    "footwear",
    "fur pattern",
    "eye style",
    "ear shape",
    "body proportion",
    "material finish",
    "stitching detail",
    "background object",
    "weather",
    "time of day",
    "season",
    "companion creature",
    "vehicle",
    "food item",
    "musical instrument",
    "tool",
    "toy",
    "paper goods",
    "practical light",
    "floor surface",
    "wall decor",
    "mood",
    "lens effect",
    "color accent",
    "era",
];

/// Category label for a dimension id.
pub fn category_of(id: DimensionId) -> &'static str {
    CATEGORIES[id.position()]
}

/// One of the ten enumerated choices of a Tenner dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TennerOption {
    pub index: usize,
    pub id: String,
    pub descriptor: String,
}

/// A Tenner dimension with exactly ten options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub category: &'static str,
    pub options: [TennerOption; OPTIONS_PER_DIMENSION],
}

impl Dimension {
    /// Build a dimension from up to ten descriptors; missing slots become empty strings.
    pub fn from_descriptors<I>(id: DimensionId, descriptors: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut source = descriptors.into_iter();
        let options = std::array::from_fn(|index| TennerOption {
            index,
            id: id.option_id(index),
            descriptor: source.next().unwrap_or_default(),
        });
        Self { id, category: category_of(id), options }
    }

    pub fn option(&self, index: usize) -> Option<&TennerOption> {
        self.options.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_cover_every_dimension() {
        for id in DimensionId::all() {
            assert!(!category_of(id).is_empty());
        }
        assert_eq!(category_of(CHARACTER_DIMENSION), "character");
    }

    #[test]
    fn short_descriptor_lists_are_padded() {
        let id = DimensionId::new(3).unwrap();
        let dim = Dimension::from_descriptors(id, vec!["a tweed waistcoat".to_string()]);
        assert_eq!(dim.options.len(), OPTIONS_PER_DIMENSION);
        assert_eq!(dim.options[0].descriptor, "a tweed waistcoat");
        assert_eq!(dim.options[9].descriptor, "");
        assert_eq!(dim.options[9].id, "t3_09");
        assert_eq!(dim.category, "garment");
    }

    #[test]
    fn extra_descriptors_are_ignored() {
        let id = DimensionId::new(5).unwrap();
        let dim = Dimension::from_descriptors(id, (0..15).map(|i| format!("prop {i}")));
        assert_eq!(dim.options[9].descriptor, "prop 9");
        assert!(dim.option(10).is_none());
    }
}
