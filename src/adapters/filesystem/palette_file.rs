use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::domain::selection::{parse_palette_json, parse_palette_text};

/// Load colors from a custom palette file.
///
/// `.json` files hold `{"colors": [...]}` or a bare array; `.txt` and
/// extensionless files hold one color per line. Anything else, images
/// included, is a data error.
pub fn read_palette_file(path: &Path) -> Result<Vec<String>, AppError> {
    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
    let parse_json = match extension.as_deref() {
        Some("json") => true,
        Some("txt") | None => false,
        Some(other) => {
            return Err(AppError::data_error(format!(
                "Unsupported palette file type '.{}' for {}",
                other,
                path.display()
            )));
        }
    };

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::data_error(format!("Failed to read palette file {}: {}", path.display(), e)))?;
    if parse_json { parse_palette_json(&content) } else { Ok(parse_palette_text(&content)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_json_and_text_palettes() {
        let dir = TempDir::new().unwrap();
        let json = dir.path().join("palette.json");
        fs::write(&json, r#"{"colors":["teal","rust"]}"#).unwrap();
        assert_eq!(read_palette_file(&json).unwrap(), vec!["teal", "rust"]);

        let text = dir.path().join("palette.txt");
        fs::write(&text, "cream\n# skip\nolive, ochre\n").unwrap();
        assert_eq!(read_palette_file(&text).unwrap(), vec!["cream", "olive", "ochre"]);
    }

    #[test]
    fn images_are_data_errors() {
        let dir = TempDir::new().unwrap();
        let image = dir.path().join("swatch.png");
        fs::write(&image, [0x89, 0x50, 0x4e, 0x47]).unwrap();
        assert!(matches!(read_palette_file(&image), Err(AppError::Data(_))));
    }

    #[test]
    fn missing_file_is_a_data_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(read_palette_file(&dir.path().join("none.json")), Err(AppError::Data(_))));
    }
}
