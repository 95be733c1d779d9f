//! anamalia: deterministic prompt assembly for stop-motion character stills.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::DatasetSource;
use app::commands::selection_file;
use ports::TennerSource;

pub use app::AnamaliaConfig;
pub use domain::{
    AppError, AssembleOptions, Assembler, Assembly, AssemblyOutcome, Bundle, BundleMetadata,
    DimensionId, Event, PlanResult, PlanStatus, RegistryStatus, Selection, TennerMode,
    TennerRegistry, reduce,
};

/// Load the Tenner registry from a dataset file, or the embedded dataset when
/// `dataset` is `None`. A missing or malformed file yields a degraded registry.
pub fn load_registry(dataset: Option<&Path>) -> TennerRegistry {
    TennerRegistry::load_or_degrade(DatasetSource::resolve(dataset).read_dataset())
}

/// Assemble a selection file against the embedded dataset. The returned
/// assembly carries the registry status.
pub fn assemble_file(path: &Path, options: AssembleOptions) -> Result<AssemblyOutcome, AppError> {
    let selection = selection_file::load_selection(path)?;
    Assembler::new(load_registry(None)).assemble(&selection, options)
}
