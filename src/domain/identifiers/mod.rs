mod dimension_id;
pub mod validation;

pub use dimension_id::{DimensionId, MAX_DIMENSION};
