//! Predefined Chunks and the classifier that matches selections against them.

use std::collections::BTreeSet;

use crate::domain::identifiers::DimensionId;

const fn t(n: u8) -> DimensionId {
    DimensionId::from_table(n)
}

/// A named, predefined set of Tenner dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub id: &'static str,
    /// Member dimensions in declaration order.
    pub dimensions: &'static [DimensionId],
    /// Caption template with one `{{ Tn }}` placeholder per member.
    pub skeleton: &'static str,
}

impl Chunk {
    /// Members as a canonical (sorted) set.
    pub fn canonical(&self) -> BTreeSet<DimensionId> {
        self.dimensions.iter().copied().collect()
    }
}

/// The chunk table, in declaration order. Three chunks have a single member.
pub static CHUNKS: [Chunk; 20] = [
    Chunk {
        id: "CHUNK1",
        dimensions: &[t(1), t(2), t(4)],
        skeleton: "{{ T1 }} wearing {{ T2 }} and {{ T4 }}",
    },
    Chunk { id: "CHUNK2", dimensions: &[t(3), t(8)], skeleton: "dressed in {{ T3 }} with {{ T8 }}" },
    Chunk {
        id: "CHUNK3",
        dimensions: &[t(6), t(7)],
        skeleton: "with {{ T6 }}, caught mid {{ T7 }}",
    },
    Chunk {
        id: "CHUNK4",
        dimensions: &[t(9), t(10), t(11)],
        skeleton: "{{ T9 }} fur, {{ T10 }} eyes and {{ T11 }} ears",
    },
    Chunk { id: "CHUNK5", dimensions: &[t(12)], skeleton: "built with {{ T12 }} proportions" },
    Chunk {
        id: "CHUNK6",
        dimensions: &[t(13), t(14)],
        skeleton: "finished in {{ T13 }} with {{ T14 }}",
    },
    Chunk {
        id: "CHUNK7",
        dimensions: &[t(15), t(16), t(17)],
        skeleton: "{{ T15 }} behind, {{ T16 }} weather at {{ T17 }}",
    },
    Chunk {
        id: "CHUNK8",
        dimensions: &[t(18), t(19)],
        skeleton: "a {{ T18 }} day alongside {{ T19 }}",
    },
    Chunk { id: "CHUNK9", dimensions: &[t(20)], skeleton: "next to {{ T20 }}" },
    Chunk {
        id: "CHUNK10",
        dimensions: &[t(21), t(22)],
        skeleton: "sharing {{ T21 }} beside {{ T22 }}",
    },
    Chunk {
        id: "CHUNK11",
        dimensions: &[t(23), t(24), t(25)],
        skeleton: "surrounded by {{ T23 }}, {{ T24 }} and {{ T25 }}",
    },
    Chunk {
        id: "CHUNK12",
        dimensions: &[t(26), t(27)],
        skeleton: "lit by {{ T26 }} over {{ T27 }}",
    },
    Chunk { id: "CHUNK13", dimensions: &[t(28)], skeleton: "framed by {{ T28 }}" },
    Chunk {
        id: "CHUNK14",
        dimensions: &[t(29), t(30)],
        skeleton: "a {{ T29 }} mood seen through {{ T30 }}",
    },
    Chunk {
        id: "CHUNK15",
        dimensions: &[t(31), t(32)],
        skeleton: "{{ T31 }} accents evoking {{ T32 }}",
    },
    Chunk {
        id: "CHUNK16",
        dimensions: &[t(1), t(5)],
        skeleton: "{{ T1 }} holding {{ T5 }}",
    },
    Chunk {
        id: "CHUNK17",
        dimensions: &[t(2), t(3), t(8)],
        skeleton: "{{ T2 }} paired with {{ T3 }} and {{ T8 }}",
    },
    Chunk { id: "CHUNK18", dimensions: &[t(6), t(12)], skeleton: "{{ T6 }} on a {{ T12 }} frame" },
    Chunk { id: "CHUNK19", dimensions: &[t(9), t(13)], skeleton: "{{ T9 }} fur finished in {{ T13 }}" },
    Chunk {
        id: "CHUNK20",
        dimensions: &[t(1), t(6), t(7)],
        skeleton: "{{ T1 }} with {{ T6 }}, mid {{ T7 }}",
    },
];

/// Outcome of classification: a predefined chunk or a synthesized composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkMatch {
    Predefined(&'static Chunk),
    Custom(String),
}

impl ChunkMatch {
    pub fn id(&self) -> &str {
        match self {
            ChunkMatch::Predefined(chunk) => chunk.id,
            ChunkMatch::Custom(id) => id,
        }
    }

    pub fn chunk(&self) -> Option<&'static Chunk> {
        match self {
            ChunkMatch::Predefined(chunk) => Some(chunk),
            ChunkMatch::Custom(_) => None,
        }
    }
}

/// Find the first chunk, in declaration order, whose member set equals the selection.
///
/// Input order and duplicates do not affect the result. An empty selection
/// matches nothing.
pub fn classify<'a, I>(selected: I) -> Option<&'static Chunk>
where
    I: IntoIterator<Item = &'a DimensionId>,
{
    let canonical: BTreeSet<DimensionId> = selected.into_iter().copied().collect();
    if canonical.is_empty() {
        return None;
    }
    let found = CHUNKS.iter().find(|chunk| chunk.canonical() == canonical);
    tracing::debug!(selection = ?canonical, chunk = found.map(|c| c.id), "classified selection");
    found
}

/// `CUSTOM_` followed by the numerically sorted ids joined by underscores.
pub fn custom_chunk_id<'a, I>(selected: I) -> String
where
    I: IntoIterator<Item = &'a DimensionId>,
{
    let canonical: BTreeSet<DimensionId> = selected.into_iter().copied().collect();
    let ids: Vec<String> = canonical.iter().map(ToString::to_string).collect();
    format!("CUSTOM_{}", ids.join("_"))
}

/// Classify, falling back to a composite identifier. `None` for an empty selection.
pub fn resolve_chunk(selected: &[DimensionId]) -> Option<ChunkMatch> {
    if selected.is_empty() {
        return None;
    }
    Some(match classify(selected) {
        Some(chunk) => ChunkMatch::Predefined(chunk),
        None => ChunkMatch::Custom(custom_chunk_id(selected)),
    })
}

/// Look up a chunk by id, case-insensitively.
pub fn find_chunk(id: &str) -> Option<&'static Chunk> {
    CHUNKS.iter().find(|chunk| chunk.id.eq_ignore_ascii_case(id))
}
