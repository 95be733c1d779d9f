//! The emitted artifact: prompt text plus provenance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::AppError;
use crate::domain::constraints::Advisory;
use crate::domain::identifiers::DimensionId;
use crate::domain::prompt::SkippedFragment;
use crate::domain::selection::Selection;
use crate::domain::tenner::{ChunkMatch, PlanResult, TennerMode};

/// Schema version written into every bundle.
pub const BUNDLE_VERSION: &str = "1.0.0";

/// Hex digits of the prompt hash kept as the seed.
const SEED_LENGTH: usize = 32;

/// Text statistics and provenance carried next to the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleMetadata {
    pub word_count: usize,
    pub char_count: usize,
    pub approx_token_count: usize,
    /// Tenner summary line: mode, dimensions and count.
    pub tenner: String,
    pub mode: TennerMode,
    pub dimensions: Vec<DimensionId>,
    pub complete: bool,
    pub seed: String,
    pub inputs_checksum: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_caption: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<Advisory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFragment>,
}

/// Immutable result of one assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,
    pub version: String,
    pub prompt: String,
    pub chunk_id: Option<String>,
    /// Absent only for previews of incomplete plans.
    pub permutation_count: Option<u128>,
    pub metadata: BundleMetadata,
    pub selection: Selection,
    pub created_at: DateTime<Utc>,
}

impl Bundle {
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Attach side-channel annotations produced alongside the prompt.
    pub fn annotated(
        mut self,
        chunk_caption: Option<String>,
        advisories: Vec<Advisory>,
        skipped: Vec<SkippedFragment>,
    ) -> Self {
        self.metadata.chunk_caption = chunk_caption;
        self.metadata.advisories = advisories;
        self.metadata.skipped = skipped;
        self
    }
}

/// Lowercase hex SHA-256 of the content.
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Whitespace-delimited token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Character count (Unicode scalar values).
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// `ceil(chars / 4)`.
pub fn approx_token_count(chars: usize) -> usize {
    chars.div_ceil(4)
}

/// Bundle id: chunk or composite id, then the chosen option ids or `batch`.
fn bundle_id(selection: &Selection, chunk: Option<&ChunkMatch>) -> String {
    let base = chunk.map(|c| c.id().to_string()).unwrap_or_else(|| "FREEFORM".to_string());
    let suffix: Vec<String> = match selection.tenner.mode {
        TennerMode::Batch => vec!["batch".to_string()],
        TennerMode::Single => {
            selection.tenner.concrete_choices().map(|(id, index)| id.option_id(index)).collect()
        }
    };
    if suffix.is_empty() { base } else { format!("{}_{}", base, suffix.join("_")) }
}

/// Package composed text with counts, identifiers and statistics. No I/O.
pub fn emit(
    prompt: &str,
    selection: &Selection,
    plan: &PlanResult,
    chunk: Option<&ChunkMatch>,
    created_at: DateTime<Utc>,
) -> Result<Bundle, AppError> {
    let chars = char_count(prompt);
    let prompt_hash = hash_content(prompt);
    let inputs_checksum = hash_content(&serde_json::to_string(selection)?);

    let metadata = BundleMetadata {
        word_count: word_count(prompt),
        char_count: chars,
        approx_token_count: approx_token_count(chars),
        tenner: plan.metadata_line(),
        mode: plan.mode,
        dimensions: plan.dimensions.clone(),
        complete: plan.is_complete(),
        seed: prompt_hash[..SEED_LENGTH].to_string(),
        inputs_checksum,
        chunk_caption: None,
        advisories: Vec::new(),
        skipped: Vec::new(),
    };

    Ok(Bundle {
        id: bundle_id(selection, chunk),
        version: BUNDLE_VERSION.to_string(),
        prompt: prompt.to_string(),
        chunk_id: chunk.map(|c| c.id().to_string()),
        permutation_count: plan.count(),
        metadata,
        selection: selection.clone(),
        created_at,
    })
}
