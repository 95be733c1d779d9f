use crate::domain::AppError;

/// Port for reading the raw Tenner dataset.
pub trait TennerSource {
    /// Full dataset text (JSON rows).
    fn read_dataset(&self) -> Result<String, AppError>;

    /// Human-readable origin, used in logs and listings.
    fn describe(&self) -> String;
}
