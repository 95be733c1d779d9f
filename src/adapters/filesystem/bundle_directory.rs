use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::identifiers::validation::validate_file_stem;
use crate::domain::{AppError, Bundle};
use crate::ports::BundleStore;

/// Writes bundles as pretty JSON files into one directory.
#[derive(Debug, Clone)]
pub struct FilesystemBundleStore {
    root: PathBuf,
}

impl FilesystemBundleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, stem: &str) -> Result<PathBuf, AppError> {
        if !validate_file_stem(stem) {
            return Err(AppError::InvalidSelection(format!("Invalid bundle file name '{}'", stem)));
        }
        Ok(self.root.join(format!("{}.json", stem)))
    }
}

impl BundleStore for FilesystemBundleStore {
    fn write_bundle(&self, stem: &str, bundle: &Bundle) -> Result<String, AppError> {
        let path = self.path_for(stem)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&path, bundle.to_json()?)?;
        tracing::info!(path = %path.display(), "bundle written");
        Ok(path.display().to_string())
    }

    fn read_bundle(&self, stem: &str) -> Result<Bundle, AppError> {
        let path = self.path_for(stem)?;
        Bundle::from_json(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssembleOptions, Assembler, Selection, TennerRegistry};
    use tempfile::TempDir;

    fn sample_bundle() -> Bundle {
        let assembler = Assembler::new(TennerRegistry::degraded("unused"));
        let selection = Selection { pose: "polite_bow".into(), ..Default::default() };
        let outcome = assembler.assemble(&selection, AssembleOptions::default()).unwrap();
        outcome.bundle().unwrap().clone()
    }

    #[test]
    fn writes_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemBundleStore::new(dir.path().join("out"));
        let bundle = sample_bundle();
        let location = store.write_bundle("CHUNK1_00001", &bundle).unwrap();
        assert!(location.ends_with("CHUNK1_00001.json"));
        assert_eq!(store.read_bundle("CHUNK1_00001").unwrap(), bundle);
    }

    #[test]
    fn rejects_path_traversal() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemBundleStore::new(dir.path());
        assert!(store.write_bundle("../escape", &sample_bundle()).is_err());
        assert!(store.write_bundle(".hidden", &sample_bundle()).is_err());
    }
}
