use serde::{Deserialize, Serialize};

use crate::domain::constraints::{AspectRatio, AspectSetting};

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Draft,
    #[default]
    Standard,
    High,
}

impl Quality {
    pub fn phrase(&self) -> &'static str {
        match self {
            Quality::Draft => "Draft quality render.",
            Quality::Standard => "Standard quality render.",
            Quality::High => "High quality render with maximum detail.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

impl OutputFormat {
    pub fn phrase(&self) -> &'static str {
        match self {
            OutputFormat::Png => "Delivered as a PNG image.",
            OutputFormat::Jpeg => "Delivered as a JPEG image.",
            OutputFormat::Webp => "Delivered as a WebP image.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    #[default]
    Srgb,
    AdobeRgb,
    DisplayP3,
}

impl ColorSpace {
    pub fn phrase(&self) -> &'static str {
        match self {
            ColorSpace::Srgb => "Graded in the sRGB color space.",
            ColorSpace::AdobeRgb => "Graded in the Adobe RGB color space.",
            ColorSpace::DisplayP3 => "Graded in the Display P3 color space.",
        }
    }
}

/// Output parameters. Defaults are never mentioned in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: AspectSetting,
    pub quality: Quality,
    pub format: OutputFormat,
    pub color_space: ColorSpace,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            aspect_ratio: AspectSetting::Ratio(AspectRatio::Square),
            quality: Quality::default(),
            format: OutputFormat::default(),
            color_space: ColorSpace::default(),
        }
    }
}

impl OutputSettings {
    pub fn has_default_size(&self) -> bool {
        self.width == DEFAULT_WIDTH && self.height == DEFAULT_HEIGHT
    }

    /// Declared ratio, only when it agrees with the actual size.
    pub fn consistent_ratio(&self) -> Option<AspectRatio> {
        self.aspect_ratio.ratio().filter(|ratio| ratio.matches(self.width, self.height))
    }
}
