use std::collections::BTreeMap;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::AppError;
use crate::domain::selection::TennerSelection;
use crate::domain::tenner::{Chunk, TennerMode, TennerRegistry};

/// Render a chunk's sentence skeleton with the chosen option descriptors.
///
/// Returns `Ok(None)` unless the selection is in single mode with a choice
/// for every member. Missing descriptors fail under strict undefined handling.
pub fn render_caption(
    chunk: &Chunk,
    tenner: &TennerSelection,
    registry: &TennerRegistry,
) -> Result<Option<String>, AppError> {
    if tenner.mode != TennerMode::Single {
        return Ok(None);
    }

    let mut context: BTreeMap<String, String> = BTreeMap::new();
    for id in chunk.dimensions {
        let Some(index) = tenner.choice(*id) else {
            return Ok(None);
        };
        let option = registry.option(*id, index)?;
        if !option.descriptor.is_empty() {
            context.insert(id.to_string(), option.descriptor.clone());
        }
    }

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    let template_error = |e: minijinja::Error| AppError::Template {
        name: chunk.id.to_string(),
        reason: e.to_string(),
    };
    env.add_template(chunk.id, chunk.skeleton).map_err(template_error)?;
    let caption = env
        .get_template(chunk.id)
        .and_then(|template| template.render(&context))
        .map_err(template_error)?;

    Ok(Some(caption))
}
