//! Single-step selection updates.
//!
//! Every field change goes through [`reduce`], which applies the change and
//! its canonical syncs in one place. Recomputation (plan, validation,
//! composition) runs once on the returned snapshot.

use crate::domain::constraints::{
    AspectRatio, AspectSetting, TripodHeight, height_for_ratio, infer_ratio,
};
use crate::domain::identifiers::DimensionId;
use crate::domain::tenner::{OPTIONS_PER_DIMENSION, TennerMode};

use super::{ColorSpace, MAX_TENNER_DIMENSIONS, OutputFormat, PaletteSelection, Quality, Selection};

/// One user-driven change to a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetPose(String),
    SetCustomPose(String),
    SetOrientation(String),
    SetCustomOrientation(String),
    SetScene(String),
    SetPlacementReference(bool),
    SetLighting(String),
    SetFilmType(String),
    SetTexture(String),
    SetPalette(Option<PaletteSelection>),
    SetFilmStock(String),
    SetWardrobe(String),
    SetProps(String),
    SetCamera(String),
    ClearCamera,
    SetTripodHeight(TripodHeight),
    SetWidth(u32),
    SetHeight(u32),
    SetAspectRatio(AspectRatio),
    SetQuality(Quality),
    SetFormat(OutputFormat),
    SetColorSpace(ColorSpace),
    ToggleDimension(DimensionId),
    SetTennerMode(TennerMode),
    ChooseOption { dimension: DimensionId, index: usize },
    ClearOption(DimensionId),
}

/// Apply one event and its canonical syncs, returning the next snapshot.
pub fn reduce(selection: Selection, event: Event) -> Selection {
    let mut next = selection;
    match event {
        Event::SetPose(value) => next.pose = value,
        Event::SetCustomPose(value) => next.custom_pose = value,
        Event::SetOrientation(value) => next.orientation = value,
        Event::SetCustomOrientation(value) => next.custom_orientation = value,
        Event::SetScene(value) => next.scene = value,
        Event::SetPlacementReference(value) => next.placement_reference = value,
        Event::SetLighting(value) => next.lighting = value,
        Event::SetFilmType(value) => next.film_type = value,
        Event::SetTexture(value) => next.texture = value,
        Event::SetPalette(value) => next.palette = value,
        Event::SetFilmStock(value) => next.film_stock = value,
        Event::SetWardrobe(value) => next.wardrobe = value,
        Event::SetProps(value) => next.props = value,
        Event::SetCamera(value) => next.camera = value,
        Event::ClearCamera => next.camera.clear(),
        Event::SetTripodHeight(height) => {
            if next.height_locked() {
                tracing::debug!(
                    camera = %next.camera,
                    "tripod height is managed by the camera; ignoring manual value"
                );
            } else {
                next.tripod_height = Some(height);
            }
        }
        Event::SetWidth(width) => {
            next.output.width = width;
            next.output.aspect_ratio = infer_ratio(next.output.width, next.output.height);
        }
        Event::SetHeight(height) => {
            next.output.height = height;
            next.output.aspect_ratio = infer_ratio(next.output.width, next.output.height);
        }
        Event::SetAspectRatio(ratio) => {
            next.output.height = height_for_ratio(ratio, next.output.width);
            next.output.aspect_ratio = if ratio.matches(next.output.width, next.output.height) {
                AspectSetting::Ratio(ratio)
            } else {
                let width = next.output.width;
                tracing::debug!(%ratio, width, "no allowed height fits ratio; inferring");
                infer_ratio(next.output.width, next.output.height)
            };
        }
        Event::SetQuality(quality) => next.output.quality = quality,
        Event::SetFormat(format) => next.output.format = format,
        Event::SetColorSpace(color_space) => next.output.color_space = color_space,
        Event::ToggleDimension(id) => {
            let position = next.tenner.dimensions.iter().position(|existing| *existing == id);
            if let Some(position) = position {
                next.tenner.dimensions.remove(position);
                next.tenner.choices.remove(&id);
            } else if next.tenner.dimensions.len() < MAX_TENNER_DIMENSIONS {
                next.tenner.dimensions.push(id);
            } else {
                tracing::debug!(dimension = %id, "Tenner dimension limit reached; ignoring toggle");
            }
        }
        Event::SetTennerMode(mode) => next.tenner.mode = mode,
        Event::ChooseOption { dimension, index } => {
            if index < OPTIONS_PER_DIMENSION && next.tenner.contains(dimension) {
                next.tenner.choices.insert(dimension, index);
            } else {
                tracing::debug!(%dimension, index, "ignoring option choice outside the selection");
            }
        }
        Event::ClearOption(dimension) => {
            next.tenner.choices.remove(&dimension);
        }
    }
    next.synchronized()
}
