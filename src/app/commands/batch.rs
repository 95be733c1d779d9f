use chrono::Utc;

use crate::app::AppContext;
use crate::domain::{AppError, Selection};
use crate::ports::{BundleStore, TennerSource};

/// Result of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Locations reported by the store, in expansion order.
    pub written: Vec<String>,
}

/// File stem for the `index`-th bundle of a batch, e.g. `CHUNK3_00042`.
pub fn bundle_stem(chunk_id: Option<&str>, index: usize) -> String {
    format!("{}_{:05}", chunk_id.unwrap_or("FREEFORM"), index)
}

/// Execute the batch command: expand, assemble and store every permutation.
pub fn execute<S, B>(
    ctx: &AppContext<S, B>,
    selection: &Selection,
) -> Result<BatchOutcome, AppError>
where
    S: TennerSource,
    B: BundleStore,
{
    let limit = ctx.config().batch.max_permutations;
    let bundles = ctx.assembler().assemble_batch(selection, limit, Utc::now())?;

    let mut written = Vec::with_capacity(bundles.len());
    for (index, bundle) in bundles.iter().enumerate() {
        let stem = bundle_stem(bundle.chunk_id.as_deref(), index);
        let location = ctx.store().write_bundle(&stem, bundle)?;
        written.push(location);
    }
    tracing::info!(count = written.len(), "batch bundles written");
    Ok(BatchOutcome { written })
}
