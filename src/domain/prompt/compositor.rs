//! Ordered resolver pipeline turning a selection into prompt text.
//!
//! Each resolver reads one field and returns its fragments. A resolver that
//! cannot produce text records a [`SkippedFragment`] instead of failing the
//! whole composition.

use serde::Serialize;

use crate::domain::constraints::AspectRatio;
use crate::domain::phrases::{
    Camera, FilmStock, FilmType, HEIGHT_TOKEN, Lighting, NamedPalette, Orientation,
    PLACEMENT_REFERENCE, Pose, Props, Scene, TECHNICAL_BACKDROP, TECHNICAL_BACKDROP_SCENE, Texture,
    Wardrobe, literalize,
};
use crate::domain::selection::{CUSTOM_FIELD, ColorChoice, PaletteSelection, Selection, is_omitted};
use crate::domain::tenner::{CHARACTER_DIMENSION, TennerMode, TennerRegistry};

use super::fragment::{
    FragmentKind, PromptFragment, SkippedFragment, Slot, capitalize, english_list, join_fragments,
};

/// Subject used when no concrete character option is selected.
pub const DEFAULT_SUBJECT: &str = "The Anamalia character";

/// Trailing style sentence, always last.
pub const STYLE_SUFFIX: &str =
    "Handcrafted miniature aesthetic with tactile materials, captured as a single high-detail still frame.";

/// Result of running the resolver pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composition {
    pub fragments: Vec<PromptFragment>,
    pub text: String,
    /// Mode, dimensions and count; carried next to the prompt, never inside it.
    pub tenner_metadata: String,
    pub skipped: Vec<SkippedFragment>,
}

/// Fragments and skips gathered by the resolvers.
#[derive(Debug, Default)]
struct Collector {
    fragments: Vec<PromptFragment>,
    skipped: Vec<SkippedFragment>,
}

impl Collector {
    fn push(&mut self, fragment: PromptFragment) {
        self.fragments.push(fragment);
    }

    fn extend(&mut self, fragments: impl IntoIterator<Item = PromptFragment>) {
        self.fragments.extend(fragments);
    }

    fn skip(&mut self, slot: Slot, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(?slot, %reason, "skipping prompt fragment");
        self.skipped.push(SkippedFragment { slot, reason });
    }
}

/// Compose the full prompt for a selection.
pub fn compose(selection: &Selection, registry: &TennerRegistry) -> Composition {
    let mut out = Collector::default();

    out.push(resolve_subject(selection, registry));
    resolve_pose(selection, &mut out);
    resolve_orientation(selection, &mut out);
    out.extend(resolve_scene(selection));
    out.extend(resolve_lighting(&selection.lighting));
    out.extend(resolve_film_type(&selection.film_type));
    out.extend(resolve_texture(&selection.texture));
    out.extend(resolve_palette(selection.palette.as_ref()));
    out.extend(resolve_film_stock(&selection.film_stock));
    out.extend(resolve_wardrobe(&selection.wardrobe));
    out.extend(resolve_props(&selection.props));
    out.extend(resolve_camera(selection));
    resolve_descriptors(selection, registry, &mut out);
    out.extend(resolve_output(selection));
    out.push(PromptFragment::sentence(Slot::StyleSuffix, STYLE_SUFFIX));

    let mut fragments = out.fragments;
    fragments.sort_by_key(|fragment| fragment.order);
    let text = join_fragments(&fragments);
    let tenner_metadata = selection.tenner.plan().metadata_line();

    Composition { fragments, text, tenner_metadata, skipped: out.skipped }
}

fn fallback(slot: Slot, id: &str) -> String {
    let literal = literalize(id);
    tracing::warn!(?slot, id, "unknown id; using literal form");
    literal
}

/// Descriptor of the concrete character option, if single mode selected one.
fn character_descriptor<'a>(
    selection: &Selection,
    registry: &'a TennerRegistry,
) -> Option<&'a str> {
    let tenner = &selection.tenner;
    if tenner.mode != TennerMode::Single || !tenner.contains(CHARACTER_DIMENSION) {
        return None;
    }
    let index = tenner.choice(CHARACTER_DIMENSION)?;
    let option = registry.option(CHARACTER_DIMENSION, index).ok()?;
    let descriptor = option.descriptor.trim();
    (!descriptor.is_empty()).then_some(descriptor)
}

pub fn resolve_subject(selection: &Selection, registry: &TennerRegistry) -> PromptFragment {
    let subject = character_descriptor(selection, registry).unwrap_or(DEFAULT_SUBJECT);
    PromptFragment::lead(Slot::Subject, capitalize(subject))
}

/// Shared two-mode resolution for pose and orientation.
fn resolve_posture<F>(slot: Slot, id: &str, custom_text: &str, lookup: F, out: &mut Collector)
where
    F: Fn(&str) -> Option<&'static str>,
{
    if is_omitted(id) {
        return;
    }
    if id.trim() == CUSTOM_FIELD {
        let text = custom_text.trim();
        if text.is_empty() {
            out.skip(slot, "custom value selected without text");
        } else {
            out.push(PromptFragment::clause(slot, text));
        }
        return;
    }
    let text = lookup(id).map(str::to_string).unwrap_or_else(|| fallback(slot, id));
    out.push(PromptFragment::clause(slot, text));
}

fn resolve_pose(selection: &Selection, out: &mut Collector) {
    resolve_posture(
        Slot::Pose,
        &selection.pose,
        &selection.custom_pose,
        |id| Pose::from_id(id).map(|p| p.phrase()),
        out,
    );
}

fn resolve_orientation(selection: &Selection, out: &mut Collector) {
    resolve_posture(
        Slot::Orientation,
        &selection.orientation,
        &selection.custom_orientation,
        |id| Orientation::from_id(id).map(|o| o.phrase()),
        out,
    );
}

pub fn resolve_scene(selection: &Selection) -> Vec<PromptFragment> {
    let id = selection.scene.trim();
    if is_omitted(id) {
        return Vec::new();
    }
    if id == TECHNICAL_BACKDROP_SCENE {
        let mut fragments: Vec<PromptFragment> = TECHNICAL_BACKDROP
            .iter()
            .zip(0u32..)
            .map(|(sentence, index)| {
                PromptFragment::new(Slot::Scene, index, FragmentKind::Sentence, *sentence)
            })
            .collect();
        if selection.placement_reference {
            let index = u32::try_from(fragments.len()).unwrap_or(9);
            let kind = FragmentKind::Sentence;
            fragments.push(PromptFragment::new(Slot::Scene, index, kind, PLACEMENT_REFERENCE));
        }
        return fragments;
    }
    let text = match Scene::from_id(id) {
        Some(scene) => scene.phrase().to_string(),
        None => format!("in a {} setting", fallback(Slot::Scene, id)),
    };
    vec![PromptFragment::clause(Slot::Scene, text)]
}

pub fn resolve_lighting(id: &str) -> Option<PromptFragment> {
    if is_omitted(id) {
        return None;
    }
    let text = match Lighting::from_id(id) {
        Some(lighting) => lighting.phrase().to_string(),
        None => format!("{} lighting.", capitalize(&fallback(Slot::Lighting, id))),
    };
    Some(PromptFragment::sentence(Slot::Lighting, text))
}

pub fn resolve_film_type(id: &str) -> Option<PromptFragment> {
    if is_omitted(id) {
        return None;
    }
    let text = match FilmType::from_id(id) {
        Some(film_type) => format!("Rendered {}.", film_type.phrase()),
        None => format!("Rendered in {} style.", fallback(Slot::FilmType, id)),
    };
    Some(PromptFragment::sentence(Slot::FilmType, text))
}

pub fn resolve_texture(id: &str) -> Option<PromptFragment> {
    if is_omitted(id) {
        return None;
    }
    let text = match Texture::from_id(id) {
        Some(texture) => texture.phrase().to_string(),
        None => format!("Surfaces have a {} texture.", fallback(Slot::Texture, id)),
    };
    Some(PromptFragment::sentence(Slot::Texture, text))
}

pub fn resolve_palette(palette: Option<&PaletteSelection>) -> Option<PromptFragment> {
    let text = match palette? {
        PaletteSelection::Named { palette, colors } => {
            if is_omitted(palette) {
                return None;
            }
            let named = NamedPalette::from_id(palette);
            let colors: Vec<String> = match (colors, named) {
                (ColorChoice::All, Some(named)) => {
                    named.colors().iter().map(|c| c.to_string()).collect()
                }
                (ColorChoice::All, None) => vec![fallback(Slot::Palette, palette)],
                (ColorChoice::Subset(subset), Some(named)) => {
                    let known = |color: &String| {
                        named.colors().iter().any(|name| name.eq_ignore_ascii_case(color))
                    };
                    non_empty(subset).into_iter().filter(known).collect()
                }
                (ColorChoice::Subset(subset), None) => non_empty(subset),
            };
            if colors.is_empty() {
                return None;
            }
            format!("Color palette: {}.", english_list(&colors))
        }
        PaletteSelection::Custom { colors, .. } => {
            let colors = non_empty(colors);
            if colors.is_empty() {
                return None;
            }
            format!("Custom color palette: {}.", english_list(&colors))
        }
        PaletteSelection::Single { color } => {
            let color = color.trim();
            if color.is_empty() {
                return None;
            }
            format!("Dominant color: {}.", color)
        }
    };
    Some(PromptFragment::sentence(Slot::Palette, text))
}

fn non_empty(colors: &[String]) -> Vec<String> {
    colors
        .iter()
        .map(|color| color.trim())
        .filter(|color| !color.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn resolve_film_stock(id: &str) -> Option<PromptFragment> {
    if is_omitted(id) {
        return None;
    }
    let text = match FilmStock::from_id(id) {
        Some(stock) => stock.phrase().to_string(),
        None => format!("Shot on {} film.", fallback(Slot::FilmStock, id)),
    };
    Some(PromptFragment::sentence(Slot::FilmStock, text))
}

pub fn resolve_wardrobe(id: &str) -> Option<PromptFragment> {
    if is_omitted(id) {
        return None;
    }
    let item = match Wardrobe::from_id(id) {
        Some(wardrobe) => wardrobe.phrase().to_string(),
        None => fallback(Slot::Wardrobe, id),
    };
    Some(PromptFragment::sentence(Slot::Wardrobe, format!("Wearing {}.", item)))
}

pub fn resolve_props(id: &str) -> Option<PromptFragment> {
    if is_omitted(id) {
        return None;
    }
    let item = match Props::from_id(id) {
        Some(props) => props.phrase().to_string(),
        None => fallback(Slot::Props, id),
    };
    Some(PromptFragment::sentence(Slot::Props, format!("Holding {}.", item)))
}

pub fn resolve_camera(selection: &Selection) -> Option<PromptFragment> {
    let id = selection.camera.trim();
    if is_omitted(id) {
        return None;
    }
    let text = match (Camera::from_id(id), selection.effective_tripod_height()) {
        (Some(camera), Some(height)) => camera.phrase().replace(HEIGHT_TOKEN, &height.phrase()),
        (Some(camera), None) => camera.phrase().to_string(),
        (None, _) => format!("Photographed with a {} camera setup.", fallback(Slot::Camera, id)),
    };
    Some(PromptFragment::sentence(Slot::Camera, text))
}

fn resolve_descriptors(selection: &Selection, registry: &TennerRegistry, out: &mut Collector) {
    if selection.tenner.mode != TennerMode::Single {
        return;
    }
    let subject_from_character = character_descriptor(selection, registry).is_some();

    for ((id, index), sub_index) in selection.tenner.concrete_choices().zip(0u32..) {
        if id == CHARACTER_DIMENSION && subject_from_character {
            continue;
        }
        match registry.option(id, index) {
            Ok(option) if !option.descriptor.trim().is_empty() => {
                out.push(PromptFragment::new(
                    Slot::TennerDescriptors,
                    sub_index,
                    FragmentKind::Sentence,
                    option.descriptor.clone(),
                ));
            }
            Ok(option) => out.skip(Slot::TennerDescriptors, format!("{} has an empty descriptor", option.id)),
            Err(err) => out.skip(Slot::TennerDescriptors, err.to_string()),
        }
    }
}

pub fn resolve_output(selection: &Selection) -> Vec<PromptFragment> {
    let output = &selection.output;
    let defaults = crate::domain::selection::OutputSettings::default();
    let mut texts = Vec::new();

    if !output.has_default_size() {
        texts.push(format!("Output resolution {}x{}.", output.width, output.height));
    }
    if let Some(ratio) = output.consistent_ratio() {
        if ratio != AspectRatio::Square {
            texts.push(format!("Aspect ratio {}.", ratio));
        }
    }
    if output.quality != defaults.quality {
        texts.push(output.quality.phrase().to_string());
    }
    if output.format != defaults.format {
        texts.push(output.format.phrase().to_string());
    }
    if output.color_space != defaults.color_space {
        texts.push(output.color_space.phrase().to_string());
    }

    texts
        .into_iter()
        .zip(0u32..)
        .map(|(text, index)| {
            PromptFragment::new(Slot::OutputParameters, index, FragmentKind::Sentence, text)
        })
        .collect()
}
