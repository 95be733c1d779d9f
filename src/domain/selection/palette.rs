//! Color palette modes and custom palette file parsing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;

/// Which colors of a named palette are used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ColorChoice {
    #[default]
    All,
    Subset(Vec<String>),
}

impl Serialize for ColorChoice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ColorChoice::All => serializer.serialize_str("all"),
            ColorChoice::Subset(colors) => colors.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ColorChoice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            List(Vec<String>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) if text.trim().eq_ignore_ascii_case("all") => Ok(ColorChoice::All),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "expected \"all\" or a list of colors, found '{}'",
                text
            ))),
            Raw::List(colors) => Ok(ColorChoice::Subset(colors)),
        }
    }
}

/// Exactly one palette mode is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PaletteSelection {
    /// A palette from the named dictionary.
    Named {
        palette: String,
        #[serde(default)]
        colors: ColorChoice,
    },
    /// Colors supplied by the user, usually from a palette file.
    Custom {
        #[serde(default)]
        colors: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },
    /// One literal color name.
    Single { color: String },
}

/// Parse a JSON palette: `{"colors": [...]}` or a bare array of strings.
pub fn parse_palette_json(content: &str) -> Result<Vec<String>, AppError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Document {
        Wrapped { colors: Vec<String> },
        Bare(Vec<String>),
    }

    let document: Document = serde_json::from_str(content)
        .map_err(|err| AppError::data_error(format!("Invalid palette JSON: {}", err)))?;
    let colors = match document {
        Document::Wrapped { colors } | Document::Bare(colors) => colors,
    };
    Ok(clean_colors(colors))
}

/// Parse a text palette: one color per line, `#` starts a comment, commas also separate.
pub fn parse_palette_text(content: &str) -> Vec<String> {
    let colors = content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split(','))
        .map(str::to_string)
        .collect();
    clean_colors(colors)
}

fn clean_colors(colors: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(colors.len());
    for color in colors {
        let color = color.trim();
        if !color.is_empty() && !cleaned.iter().any(|existing| existing == color) {
            cleaned.push(color.to_string());
        }
    }
    cleaned
}
