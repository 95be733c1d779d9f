//! Canonical syncs and advisory compatibility checks.

mod aspect;
mod compatibility;
mod tripod;

use serde::Serialize;

use crate::domain::phrases::FilmStock;
use crate::domain::selection::Selection;

pub use aspect::{
    AspectRatio, AspectSetting, DIMENSION_OPTIONS, RATIO_TOLERANCE, height_for_ratio, infer_ratio,
    nearest_dimension,
};
pub use compatibility::{
    Advisory, Emulsion, FAST_ISO_MIN, RigProfile, SLOW_ISO_MAX, Severity, StockProfile, Suggestion,
    check_pair, compatible_cameras, compatible_stocks, is_compatible, rig_profile, stock_profile,
    suggest,
};
pub use tripod::{TripodHeight, tripod_height_for, tripod_height_for_id};

/// Outcome of validating a selection. Advisories never block composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Height after canonical camera sync.
    pub tripod_height: Option<TripodHeight>,
    pub height_locked: bool,
    /// Ratio implied by the output size.
    pub inferred_aspect: AspectSetting,
    pub advisories: Vec<Advisory>,
    pub suggestions: Vec<Suggestion>,
}

impl ValidationReport {
    pub fn has_warnings(&self) -> bool {
        self.advisories.iter().any(|advisory| advisory.severity == Severity::Warning)
    }
}

/// Apply canonical syncs and collect advisories for a selection.
pub fn validate(selection: &Selection) -> ValidationReport {
    let stock = FilmStock::from_id(&selection.film_stock);
    let camera = selection.camera_rig();

    let mut advisories = match (stock, camera) {
        (Some(stock), Some(camera)) => check_pair(stock, camera),
        _ => Vec::new(),
    };

    let output = &selection.output;
    let inferred_aspect = infer_ratio(output.width, output.height);
    if let Some(declared) = output.aspect_ratio.ratio() {
        if !declared.matches(output.width, output.height) {
            advisories.push(Advisory::info(format!(
                "Aspect ratio {} does not match {}x{} (closest: {}); it will be left out of the prompt",
                declared, output.width, output.height, inferred_aspect
            )));
        }
    }

    let suggestions = suggest(stock, camera);
    tracing::debug!(advisories = advisories.len(), suggestions = suggestions.len(), "validated selection");

    ValidationReport {
        tripod_height: selection.effective_tripod_height(),
        height_locked: selection.height_locked(),
        inferred_aspect,
        advisories,
        suggestions,
    }
}
