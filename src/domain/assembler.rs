//! Single engine entry point: plan, validate, compose and emit.

use chrono::{DateTime, Utc};

use crate::domain::AppError;
use crate::domain::bundle::{Bundle, emit};
use crate::domain::constraints::{ValidationReport, validate};
use crate::domain::prompt::{Composition, compose, render_caption};
use crate::domain::selection::Selection;
use crate::domain::tenner::{
    ChunkMatch, OPTIONS_PER_DIMENSION, PlanResult, RegistryStatus, TennerMode, TennerRegistry,
    permutation_count, resolve_chunk,
};

/// Caller choices for one assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Compose even when the plan is incomplete (preview output).
    pub allow_partial: bool,
}

/// Everything produced for one complete (or previewed) selection.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub bundle: Bundle,
    pub plan: PlanResult,
    pub chunk: Option<ChunkMatch>,
    pub validation: ValidationReport,
    pub composition: Composition,
    /// Whether the Tenner dataset loaded, or the reason descriptors were skipped.
    pub registry_status: RegistryStatus,
}

/// Result of [`Assembler::assemble`]. An incomplete plan is a state, not an error.
#[derive(Debug, Clone)]
pub enum AssemblyOutcome {
    Ready(Box<Assembly>),
    Incomplete(PlanResult),
}

impl AssemblyOutcome {
    pub fn bundle(&self) -> Option<&Bundle> {
        match self {
            AssemblyOutcome::Ready(assembly) => Some(&assembly.bundle),
            AssemblyOutcome::Incomplete(_) => None,
        }
    }
}

/// Stateless engine over a read-only Tenner registry.
#[derive(Debug, Clone)]
pub struct Assembler {
    registry: TennerRegistry,
}

impl Assembler {
    pub fn new(registry: TennerRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TennerRegistry {
        &self.registry
    }

    /// Assemble a selection, stamping the bundle with the current time.
    pub fn assemble(
        &self,
        selection: &Selection,
        options: AssembleOptions,
    ) -> Result<AssemblyOutcome, AppError> {
        self.assemble_at(selection, options, Utc::now())
    }

    /// Assemble with an explicit timestamp. Identical inputs give identical bundles.
    pub fn assemble_at(
        &self,
        selection: &Selection,
        options: AssembleOptions,
        created_at: DateTime<Utc>,
    ) -> Result<AssemblyOutcome, AppError> {
        selection.check()?;
        let selection = selection.clone().synchronized();

        let plan = selection.tenner.plan();
        if !plan.is_complete() && !options.allow_partial {
            tracing::debug!(plan = %plan.metadata_line(), "plan incomplete; composition not run");
            return Ok(AssemblyOutcome::Incomplete(plan));
        }

        let chunk = resolve_chunk(&selection.tenner.dimensions);
        let validation = validate(&selection);
        let composition = compose(&selection, &self.registry);

        let caption = match chunk.as_ref().and_then(ChunkMatch::chunk) {
            Some(predefined) => {
                match render_caption(predefined, &selection.tenner, &self.registry) {
                    Ok(caption) => caption,
                    Err(err) => {
                        tracing::warn!(chunk = predefined.id, error = %err, "chunk caption skipped");
                        None
                    }
                }
            }
            None => None,
        };

        let bundle = emit(&composition.text, &selection, &plan, chunk.as_ref(), created_at)?;
        let bundle = bundle.annotated(
            caption,
            validation.advisories.clone(),
            composition.skipped.clone(),
        );

        let registry_status = self.registry.status().clone();
        Ok(AssemblyOutcome::Ready(Box::new(Assembly {
            bundle,
            plan,
            chunk,
            validation,
            composition,
            registry_status,
        })))
    }

    /// Every single-mode selection covered by a batch selection, in odometer
    /// order with the first selected dimension varying slowest.
    pub fn expand(&self, selection: &Selection, limit: u64) -> Result<Vec<Selection>, AppError> {
        expand(selection, limit)
    }

    /// Expand a batch selection and assemble every permutation.
    pub fn assemble_batch(
        &self,
        selection: &Selection,
        limit: u64,
        created_at: DateTime<Utc>,
    ) -> Result<Vec<Bundle>, AppError> {
        let mut bundles = Vec::new();
        for single in expand(selection, limit)? {
            let outcome = self.assemble_at(&single, AssembleOptions::default(), created_at)?;
            if let AssemblyOutcome::Ready(assembly) = outcome {
                bundles.push(assembly.bundle);
            }
        }
        Ok(bundles)
    }
}

/// Enumerate the permutations of a batch selection.
pub fn expand(selection: &Selection, limit: u64) -> Result<Vec<Selection>, AppError> {
    if selection.tenner.mode != TennerMode::Batch {
        return Err(AppError::NotBatchMode);
    }
    selection.check()?;

    let dimensions = selection.tenner.dimensions.clone();
    let count = permutation_count(dimensions.len());
    if count > u128::from(limit) {
        return Err(AppError::BatchTooLarge { count, limit });
    }

    // count <= limit, so it fits in u64 and usize on supported targets.
    let total = usize::try_from(count).map_err(|_| AppError::BatchTooLarge { count, limit })?;
    let mut expanded = Vec::with_capacity(total);
    let mut digits = vec![0usize; dimensions.len()];

    for _ in 0..total {
        let mut single = selection.clone();
        single.tenner.mode = TennerMode::Single;
        single.tenner.choices = dimensions.iter().copied().zip(digits.iter().copied()).collect();
        expanded.push(single);

        for digit in digits.iter_mut().rev() {
            *digit += 1;
            if *digit < OPTIONS_PER_DIMENSION {
                break;
            }
            *digit = 0;
        }
    }

    tracing::debug!(count = expanded.len(), "expanded batch selection");
    Ok(expanded)
}
