use std::path::PathBuf;
use thiserror::Error;

use crate::gemini::ApiError;

#[derive(Error, Debug)]
pub enum PromptforgeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Enhancement error: {0}")]
    Enhance(#[from] EnhanceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{name}' not set")]
    MissingApiKey { name: String },

    #[error("Environment variable '{name}' contains invalid UTF-8")]
    EnvVarNotUnicode { name: String },
}

/// Failures of a single generation attempt, one variant per stage.
///
/// The polling loop never retries: a failed status query is terminal for the
/// whole job, not a transient condition.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Job submission failed: {0}")]
    Submission(#[source] ApiError),

    #[error("Operation status query failed: {0}")]
    PollQuery(#[source] ApiError),

    #[error("Generation completed but no downloadable result was found")]
    MissingResult,

    #[error("Result download failed: {status}")]
    Download { status: String },
}

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("Enhancement request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Enhancement rejected by the API ({status}): {body}")]
    Api { status: String, body: String },

    #[error("Enhancement response contained no text candidate")]
    EmptyResponse,

    #[error("Enhancement response is not a valid prompt object: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No writable data directory available")]
    NoDataDirectory,
}

pub type Result<T> = std::result::Result<T, PromptforgeError>;
