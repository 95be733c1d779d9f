//! Aspect ratio and output size synchronization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;

/// Largest deviation between actual and expected ratio still treated as a match.
pub const RATIO_TOLERANCE: f64 = 0.05;

/// Enumerated width/height options offered for output size.
pub const DIMENSION_OPTIONS: [u32; 18] = [
    256, 384, 448, 512, 576, 640, 704, 768, 832, 896, 1024, 1152, 1216, 1280, 1344, 1536, 1792,
    2048,
];

/// Known aspect ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    Square,
    Standard,
    Widescreen,
    Classic,
    Ultrawide,
    Vertical,
}

impl AspectRatio {
    /// Candidates for inference, in tie-break order.
    pub const ALL: [AspectRatio; 6] = [
        AspectRatio::Square,
        AspectRatio::Standard,
        AspectRatio::Widescreen,
        AspectRatio::Classic,
        AspectRatio::Ultrawide,
        AspectRatio::Vertical,
    ];

    pub fn parts(&self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1, 1),
            AspectRatio::Standard => (4, 3),
            AspectRatio::Widescreen => (16, 9),
            AspectRatio::Classic => (3, 2),
            AspectRatio::Ultrawide => (21, 9),
            AspectRatio::Vertical => (9, 16),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Standard => "4:3",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Classic => "3:2",
            AspectRatio::Ultrawide => "21:9",
            AspectRatio::Vertical => "9:16",
        }
    }

    /// Width divided by height.
    pub fn value(&self) -> f64 {
        let (w, h) = self.parts();
        f64::from(w) / f64::from(h)
    }

    /// Whether the given size is within tolerance of this ratio.
    pub fn matches(&self, width: u32, height: u32) -> bool {
        actual_ratio(width, height)
            .is_some_and(|actual| (actual - self.value()).abs() <= RATIO_TOLERANCE)
    }

    pub fn from_label(label: &str) -> Option<AspectRatio> {
        AspectRatio::ALL.into_iter().find(|ratio| ratio.label() == label.trim())
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aspect field value: a known ratio or `custom` when nothing is close enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectSetting {
    Ratio(AspectRatio),
    Custom,
}

impl AspectSetting {
    pub fn label(&self) -> &'static str {
        match self {
            AspectSetting::Ratio(ratio) => ratio.label(),
            AspectSetting::Custom => "custom",
        }
    }

    pub fn ratio(&self) -> Option<AspectRatio> {
        match self {
            AspectSetting::Ratio(ratio) => Some(*ratio),
            AspectSetting::Custom => None,
        }
    }
}

impl Default for AspectSetting {
    fn default() -> Self {
        AspectSetting::Ratio(AspectRatio::Square)
    }
}

impl fmt::Display for AspectSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AspectSetting {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("custom") {
            return Ok(AspectSetting::Custom);
        }
        AspectRatio::from_label(s)
            .map(AspectSetting::Ratio)
            .ok_or_else(|| AppError::InvalidAspectRatio(s.to_string()))
    }
}

impl Serialize for AspectSetting {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for AspectSetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn actual_ratio(width: u32, height: u32) -> Option<f64> {
    if width == 0 || height == 0 {
        return None;
    }
    Some(f64::from(width) / f64::from(height))
}

/// Nearest known ratio for a size, or `Custom` when the best deviation exceeds the tolerance.
pub fn infer_ratio(width: u32, height: u32) -> AspectSetting {
    let Some(actual) = actual_ratio(width, height) else {
        return AspectSetting::Custom;
    };

    let mut best: Option<(AspectRatio, f64)> = None;
    for ratio in AspectRatio::ALL {
        let deviation = (actual - ratio.value()).abs();
        if best.is_none_or(|(_, current)| deviation < current) {
            best = Some((ratio, deviation));
        }
    }

    match best {
        Some((ratio, deviation)) if deviation <= RATIO_TOLERANCE => AspectSetting::Ratio(ratio),
        _ => AspectSetting::Custom,
    }
}

/// Enumerated size option closest to `target`; ties go to the smaller option.
pub fn nearest_dimension(target: f64) -> u32 {
    let mut best = DIMENSION_OPTIONS[0];
    let mut best_distance = f64::INFINITY;
    for option in DIMENSION_OPTIONS {
        let distance = (f64::from(option) - target).abs();
        if distance < best_distance {
            best = option;
            best_distance = distance;
        }
    }
    best
}

/// Height implied by a ratio at the given width, snapped to the enumerated options.
pub fn height_for_ratio(ratio: AspectRatio, width: u32) -> u32 {
    nearest_dimension(f64::from(width) / ratio.value())
}
