//! Selection documents on disk.

use std::fs;
use std::path::Path;

use crate::adapters::read_palette_file;
use crate::domain::{AppError, PaletteSelection, Selection};

/// Read a JSON or YAML selection and resolve any custom palette file it names.
///
/// A palette `source` is resolved relative to the selection file. An
/// unreadable or unsupported palette file leaves the palette empty.
pub fn load_selection(path: &Path) -> Result<Selection, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::InvalidSelection(format!("Failed to read {}: {}", path.display(), e)))?;

    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
    let mut selection = match extension.as_deref() {
        Some("json") => Selection::from_json(&content)?,
        Some("yaml") | Some("yml") => Selection::from_yaml(&content)?,
        _ => {
            return Err(AppError::InvalidSelection(format!(
                "Unsupported selection file {}: expected .json, .yaml or .yml",
                path.display()
            )));
        }
    };

    if let Some(PaletteSelection::Custom { colors, source: Some(source) }) =
        selection.palette.as_mut()
    {
        if colors.is_empty() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            match read_palette_file(&base.join(source.as_str())) {
                Ok(loaded) => *colors = loaded,
                Err(err) => tracing::warn!(source = %source, error = %err, "custom palette ignored"),
            }
        }
    }

    Ok(selection)
}
