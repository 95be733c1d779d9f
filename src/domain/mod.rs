pub mod assembler;
pub mod bundle;
pub mod constraints;
pub mod error;
pub mod identifiers;
pub mod phrases;
pub mod prompt;
pub mod selection;
pub mod tenner;

pub use assembler::{AssembleOptions, Assembler, Assembly, AssemblyOutcome, expand};
pub use bundle::{BUNDLE_VERSION, Bundle, BundleMetadata, emit};
pub use constraints::{
    Advisory, AspectRatio, AspectSetting, Severity, Suggestion, TripodHeight, ValidationReport,
    validate,
};
pub use error::AppError;
pub use identifiers::DimensionId;
pub use prompt::{Composition, PromptFragment, compose};
pub use selection::{Event, PaletteSelection, Selection, TennerSelection, reduce};
pub use tenner::{
    CHUNKS, Chunk, ChunkMatch, Dimension, PlanResult, PlanStatus, RegistryStatus, TennerMode,
    TennerOption, TennerRegistry, classify, custom_chunk_id, plan,
};
