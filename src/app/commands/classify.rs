use crate::domain::tenner::resolve_chunk;
use crate::domain::{AppError, ChunkMatch, DimensionId};

/// Execute the classify command. Returns `None` for an empty selection.
pub fn execute(args: &[String]) -> Result<Option<ChunkMatch>, AppError> {
    let ids = args.iter().map(|arg| arg.parse::<DimensionId>()).collect::<Result<Vec<_>, _>>()?;
    Ok(resolve_chunk(&ids))
}
