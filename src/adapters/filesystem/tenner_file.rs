use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::TennerSource;

/// Tenner dataset read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FilesystemTennerSource {
    path: PathBuf,
}

impl FilesystemTennerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TennerSource for FilesystemTennerSource {
    fn read_dataset(&self) -> Result<String, AppError> {
        fs::read_to_string(&self.path).map_err(|e| {
            AppError::data_error(format!("Failed to read Tenner dataset {}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
