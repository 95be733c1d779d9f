use std::path::Path;

use crate::adapters::{EmbeddedTennerSource, FilesystemTennerSource};
use crate::domain::AppError;
use crate::ports::TennerSource;

/// Tenner source chosen at startup: a dataset file when one is configured,
/// otherwise the embedded dataset.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    Embedded(EmbeddedTennerSource),
    Filesystem(FilesystemTennerSource),
}

impl DatasetSource {
    pub fn resolve(path: Option<&Path>) -> Self {
        match path {
            Some(path) => DatasetSource::Filesystem(FilesystemTennerSource::new(path)),
            None => DatasetSource::Embedded(EmbeddedTennerSource::new()),
        }
    }
}

impl TennerSource for DatasetSource {
    fn read_dataset(&self) -> Result<String, AppError> {
        match self {
            DatasetSource::Embedded(source) => source.read_dataset(),
            DatasetSource::Filesystem(source) => source.read_dataset(),
        }
    }

    fn describe(&self) -> String {
        match self {
            DatasetSource::Embedded(source) => source.describe(),
            DatasetSource::Filesystem(source) => source.describe(),
        }
    }
}
