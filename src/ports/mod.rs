mod bundle_store;
mod tenner_source;

pub use bundle_store::BundleStore;
pub use tenner_source::TennerSource;
