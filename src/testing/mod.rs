//! In-crate test doubles for the ports.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::adapters::EmbeddedTennerSource;
use crate::domain::{AppError, Bundle, TennerRegistry};
use crate::ports::{BundleStore, TennerSource};

/// Registry over the embedded 32-dimension dataset.
pub fn sample_registry() -> TennerRegistry {
    let content = EmbeddedTennerSource::new().read_dataset().expect("embedded dataset should be readable");
    TennerRegistry::from_json(&content).expect("embedded dataset should parse")
}

/// Tenner source backed by a string, or failing with a data error when empty.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct MemoryTennerSource {
    pub content: Option<String>,
}

#[allow(dead_code)]
impl MemoryTennerSource {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()) }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }

    /// The embedded dataset, served from memory.
    pub fn sample() -> Self {
        let dataset =
            EmbeddedTennerSource::new().read_dataset().expect("embedded dataset should be readable");
        Self::with_content(dataset)
    }
}

impl TennerSource for MemoryTennerSource {
    fn read_dataset(&self) -> Result<String, AppError> {
        self.content.clone().ok_or_else(|| AppError::data_error("memory dataset is empty"))
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Bundle store that keeps written bundles in a map keyed by stem.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MemoryBundleStore {
    pub bundles: RefCell<BTreeMap<String, Bundle>>,
}

#[allow(dead_code)]
impl MemoryBundleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stems(&self) -> Vec<String> {
        self.bundles.borrow().keys().cloned().collect()
    }
}

impl BundleStore for MemoryBundleStore {
    fn write_bundle(&self, stem: &str, bundle: &Bundle) -> Result<String, AppError> {
        self.bundles.borrow_mut().insert(stem.to_string(), bundle.clone());
        Ok(format!("memory://{}", stem))
    }

    fn read_bundle(&self, stem: &str) -> Result<Bundle, AppError> {
        self.bundles
            .borrow()
            .get(stem)
            .cloned()
            .ok_or_else(|| AppError::data_error(format!("No bundle stored under '{}'", stem)))
    }
}
