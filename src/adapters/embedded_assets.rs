use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::TennerSource;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

const TENNER_DATASET_PATH: &str = "tenner/tenner_32.json";
const BUNDLE_MARKDOWN_PATH: &str = "templates/bundle.md.j2";

fn asset_text(path: &str) -> Result<&'static str, AppError> {
    ASSETS_DIR
        .get_file(path)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::data_error(format!("Embedded asset '{}' is missing or not UTF-8", path)))
}

/// Tenner dataset compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTennerSource;

impl EmbeddedTennerSource {
    pub fn new() -> Self {
        Self
    }
}

impl TennerSource for EmbeddedTennerSource {
    fn read_dataset(&self) -> Result<String, AppError> {
        asset_text(TENNER_DATASET_PATH).map(str::to_string)
    }

    fn describe(&self) -> String {
        format!("embedded:{}", TENNER_DATASET_PATH)
    }
}

/// Markdown export template for bundles.
pub fn bundle_markdown_template() -> Result<&'static str, AppError> {
    asset_text(BUNDLE_MARKDOWN_PATH)
}
