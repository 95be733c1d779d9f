//! The immutable selection snapshot consumed by the engine.

mod output;
mod palette;
mod reducer;
mod tenner;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::constraints::{TripodHeight, tripod_height_for};
use crate::domain::phrases::Camera;

pub use output::{ColorSpace, DEFAULT_HEIGHT, DEFAULT_WIDTH, OutputFormat, OutputSettings, Quality};
pub use palette::{ColorChoice, PaletteSelection, parse_palette_json, parse_palette_text};
pub use reducer::{Event, reduce};
pub use tenner::{MAX_TENNER_DIMENSIONS, TennerSelection};

/// Field value that enables verbatim user text for pose and orientation.
pub const CUSTOM_FIELD: &str = "custom";

/// Field values that mean "leave this fragment out".
pub const OMIT_SENTINELS: [&str; 2] = ["all", "none"];

/// Whether a categorical field should produce no fragment.
pub fn is_omitted(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || OMIT_SENTINELS.iter().any(|sentinel| value.eq_ignore_ascii_case(sentinel))
}

/// Every field choice at one point in time.
///
/// Categorical fields hold dictionary ids. Empty strings and the `all`/`none`
/// sentinels mean unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selection {
    pub pose: String,
    pub custom_pose: String,
    pub orientation: String,
    pub custom_orientation: String,
    pub scene: String,
    /// Adds the placement-reference sentence to the technical backdrop.
    pub placement_reference: bool,
    pub lighting: String,
    pub film_type: String,
    pub texture: String,
    pub palette: Option<PaletteSelection>,
    pub film_stock: String,
    pub wardrobe: String,
    pub props: String,
    pub camera: String,
    /// Manual height; replaced by the canonical value whenever a known camera is set.
    pub tripod_height: Option<TripodHeight>,
    pub output: OutputSettings,
    pub tenner: TennerSelection,
}

impl Selection {
    /// Known camera rig, if the camera field names one.
    pub fn camera_rig(&self) -> Option<Camera> {
        Camera::from_id(&self.camera)
    }

    /// Height is auto-managed while a known camera is selected.
    pub fn height_locked(&self) -> bool {
        self.camera_rig().is_some()
    }

    /// Height the camera phrase will carry.
    pub fn effective_tripod_height(&self) -> Option<TripodHeight> {
        self.camera_rig().map(tripod_height_for).or(self.tripod_height)
    }

    pub fn check(&self) -> Result<(), AppError> {
        self.tenner.check()
    }

    /// Apply canonical syncs: camera fixes the tripod height, and option
    /// choices for dimensions that are not selected are dropped.
    pub fn synchronized(mut self) -> Self {
        if let Some(camera) = self.camera_rig() {
            self.tripod_height = Some(tripod_height_for(camera));
        }
        let dimensions = self.tenner.dimensions.clone();
        self.tenner.choices.retain(|id, _| dimensions.contains(id));
        self
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(content)?)
    }
}
