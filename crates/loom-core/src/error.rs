//! Error types for promptloom

use thiserror::Error;

/// The main error type for loom operations
#[derive(Debug, Error)]
pub enum LoomError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Unknown option '{value}' for {facet}")]
    UnknownOption { facet: String, value: String },

    #[error("Translation error: {0}")]
    TranslationError(String),

    #[error("Generation error: {0}")]
    GenerationError(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("CSV error: {0}")]
    CsvError(String),
}

/// Result type alias for loom operations
pub type Result<T> = std::result::Result<T, LoomError>;

impl From<serde_json::Error> for LoomError {
    fn from(err: serde_json::Error) -> Self {
        LoomError::JsonParseError(err.to_string())
    }
}

impl From<toml::de::Error> for LoomError {
    fn from(err: toml::de::Error) -> Self {
        LoomError::TomlParseError(err.to_string())
    }
}
