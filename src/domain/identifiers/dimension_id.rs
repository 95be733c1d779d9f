use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;

/// Highest Tenner dimension number in the dataset.
pub const MAX_DIMENSION: u8 = 32;

/// A validated Tenner dimension identifier (`T1`..`T32`).
///
/// Ordering is numeric, so `T2 < T10`. Canonical sets and composite chunk
/// identifiers rely on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DimensionId(u8);

impl DimensionId {
    /// Create an id from its dimension number.
    pub fn new(number: u8) -> Result<Self, AppError> {
        if (1..=MAX_DIMENSION).contains(&number) {
            Ok(Self(number))
        } else {
            Err(AppError::InvalidDimensionId(format!("T{}", number)))
        }
    }

    /// Const constructor for static tables; callers guarantee the range.
    pub(crate) const fn from_table(number: u8) -> Self {
        Self(number)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Zero-based position in the 32-column dataset.
    pub fn position(&self) -> usize {
        usize::from(self.0) - 1
    }

    /// Derived option identifier, e.g. `t4_07`.
    pub fn option_id(&self, index: usize) -> String {
        format!("t{}_{:02}", self.0, index)
    }

    /// Every dimension id in numeric order.
    pub fn all() -> impl Iterator<Item = DimensionId> {
        (1..=MAX_DIMENSION).map(DimensionId)
    }
}

impl FromStr for DimensionId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('T')
            .or_else(|| trimmed.strip_prefix('t'))
            .ok_or_else(|| AppError::InvalidDimensionId(s.to_string()))?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::InvalidDimensionId(s.to_string()));
        }
        let number: u8 = digits.parse().map_err(|_| AppError::InvalidDimensionId(s.to_string()))?;
        DimensionId::new(number).map_err(|_| AppError::InvalidDimensionId(s.to_string()))
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

impl Serialize for DimensionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DimensionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
