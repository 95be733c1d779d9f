//! Tenner dimensions, chunk classification and permutation planning.

pub mod chunk;
pub mod dimension;
pub mod plan;
pub mod registry;

pub use chunk::{CHUNKS, Chunk, ChunkMatch, classify, custom_chunk_id, find_chunk, resolve_chunk};
pub use dimension::{
    CHARACTER_DIMENSION, Dimension, OPTIONS_PER_DIMENSION, TennerOption, category_of,
};
pub use plan::{PlanResult, PlanStatus, TennerMode, permutation_count, plan};
pub use registry::{RegistryStatus, TennerRegistry};
