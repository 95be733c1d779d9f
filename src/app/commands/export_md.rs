use std::fs;
use std::path::Path;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::adapters::bundle_markdown_template;
use crate::domain::{AppError, Bundle};

const TEMPLATE_NAME: &str = "bundle.md";

/// Render a bundle as a markdown summary.
pub fn render_markdown(bundle: &Bundle) -> Result<String, AppError> {
    let template_error = |e: minijinja::Error| AppError::Template {
        name: TEMPLATE_NAME.to_string(),
        reason: e.to_string(),
    };

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(TEMPLATE_NAME, bundle_markdown_template()?).map_err(template_error)?;

    let template = env.get_template(TEMPLATE_NAME).map_err(template_error)?;
    template.render(context! { bundle => bundle }).map_err(template_error)
}

/// Execute the export-md command on a bundle JSON file.
pub fn execute(bundle_path: &Path) -> Result<String, AppError> {
    let content = fs::read_to_string(bundle_path)?;
    render_markdown(&Bundle::from_json(&content)?)
}
