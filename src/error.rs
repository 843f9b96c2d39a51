use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GardenLoginError {
    #[error("Could not determine the home directory of the current user")]
    HomeDirNotFound,

    #[error("Cannot expand path '{path}': {reason}")]
    ExpandPath { path: String, reason: String },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Unsupported config file format for {path} (expected one of: {expected})")]
    UnsupportedFormat { path: PathBuf, expected: String },

    #[error("Config file '{name}' not found in {searched:?}")]
    ConfigNotFound { name: String, searched: Vec<PathBuf> },

    #[error("Cannot bind key '{key}' to environment variable '{var}': {reason}")]
    InvalidBinding {
        key: String,
        var: String,
        reason: String,
    },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl GardenLoginError {
    /// Whether this error must stop the process before any command runs.
    ///
    /// Everything else degrades to "source unavailable".
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GardenLoginError::HomeDirNotFound | GardenLoginError::ExpandPath { .. }
        )
    }
}
