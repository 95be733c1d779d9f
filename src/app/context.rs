use crate::app::config::AnamaliaConfig;
use crate::domain::{AssembleOptions, Assembler, TennerRegistry};
use crate::ports::{BundleStore, TennerSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: TennerSource, B: BundleStore> {
    config: AnamaliaConfig,
    source: S,
    store: B,
}

impl<S: TennerSource, B: BundleStore> AppContext<S, B> {
    /// Create a new application context.
    pub fn new(config: AnamaliaConfig, source: S, store: B) -> Self {
        Self { config, source, store }
    }

    pub fn config(&self) -> &AnamaliaConfig {
        &self.config
    }

    /// Get a reference to the bundle store.
    pub fn store(&self) -> &B {
        &self.store
    }

    /// Load the registry, degrading to an empty one when the source fails.
    pub fn registry(&self) -> TennerRegistry {
        tracing::debug!(source = %self.source.describe(), "loading Tenner dataset");
        TennerRegistry::load_or_degrade(self.source.read_dataset())
    }

    pub fn assembler(&self) -> Assembler {
        Assembler::new(self.registry())
    }

    /// Assembly options from config, widened by a per-call preview flag.
    pub fn assemble_options(&self, preview: bool) -> AssembleOptions {
        AssembleOptions { allow_partial: preview || self.config.assemble.allow_partial }
    }
}
