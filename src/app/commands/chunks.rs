use serde::Serialize;

use crate::domain::tenner::{category_of, find_chunk, permutation_count};
use crate::domain::{AppError, CHUNKS, Chunk, DimensionId};

/// One row of the chunk catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkSummary {
    pub id: &'static str,
    pub dimensions: Vec<DimensionId>,
    pub categories: Vec<&'static str>,
    pub batch_permutations: u128,
    pub skeleton: &'static str,
}

impl ChunkSummary {
    fn of(chunk: &'static Chunk) -> Self {
        ChunkSummary {
            id: chunk.id,
            dimensions: chunk.dimensions.to_vec(),
            categories: chunk.dimensions.iter().map(|id| category_of(*id)).collect(),
            batch_permutations: permutation_count(chunk.dimensions.len()),
            skeleton: chunk.skeleton,
        }
    }
}

/// Execute the chunks command: one chunk by id, or every predefined chunk in
/// declaration order.
pub fn execute(id: Option<&str>) -> Result<Vec<ChunkSummary>, AppError> {
    match id {
        Some(id) => {
            let chunk = find_chunk(id.trim())
                .ok_or_else(|| AppError::UnknownChunk(id.to_string()))?;
            Ok(vec![ChunkSummary::of(chunk)])
        }
        None => Ok(CHUNKS.iter().map(ChunkSummary::of).collect()),
    }
}
