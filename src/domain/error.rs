use std::io;

use thiserror::Error;

/// Library-wide error type for prompt assembly operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Tenner dataset or custom palette source is missing or malformed.
    #[error("Data error: {0}")]
    Data(String),

    /// Dimension id is well-formed but not present in the registry.
    #[error("Unknown Tenner dimension '{0}'")]
    UnknownDimension(String),

    /// Dimension id does not have the `T{{n}}` shape.
    #[error("Invalid Tenner dimension id '{0}': expected T1..T32")]
    InvalidDimensionId(String),

    /// Chunk id not present in the chunk table.
    #[error("Unknown chunk '{0}': expected CHUNK1..CHUNK20")]
    UnknownChunk(String),

    /// Option index outside 0..=9.
    #[error("Invalid option index {index} for dimension '{dimension}': expected 0..=9")]
    InvalidOptionIndex { dimension: String, index: usize },

    /// Selection is structurally inconsistent.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Aspect ratio label could not be parsed.
    #[error("Invalid aspect ratio '{0}': expected one of 1:1, 4:3, 16:9, 3:2, 21:9, 9:16 or 'custom'")]
    InvalidAspectRatio(String),

    /// Template registration or rendering failed.
    #[error("Template '{name}' failed: {reason}")]
    Template { name: String, reason: String },

    /// Batch expansion would exceed the configured limit.
    #[error("Batch of {count} permutations exceeds the configured limit of {limit}")]
    BatchTooLarge { count: u128, limit: u64 },

    /// Batch expansion requested for a selection that is not in batch mode.
    #[error("Selection is not in batch mode")]
    NotBatchMode,

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn data_error<S: Into<String>>(message: S) -> Self {
        AppError::Data(message.into())
    }
}
