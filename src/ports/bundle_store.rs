use crate::domain::{AppError, Bundle};

/// Port for persisting emitted bundles.
pub trait BundleStore {
    /// Write a bundle under `stem` and return where it was stored.
    fn write_bundle(&self, stem: &str, bundle: &Bundle) -> Result<String, AppError>;

    /// Read a previously written bundle by stem.
    fn read_bundle(&self, stem: &str) -> Result<Bundle, AppError>;
}
