//! Error types for descriptor file handling.

use std::path::PathBuf;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors that can occur while loading inputs or writing descriptors.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// Failed to read an input file.
    #[error("Failed to read file {path}: {message}")]
    ReadError { path: PathBuf, message: String },

    /// Failed to write the output file.
    #[error("Failed to write file {path}: {message}")]
    WriteError { path: PathBuf, message: String },

    /// Input file is not valid JSON for the expected shape.
    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to deserialize JSON from an in-memory source.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The composition engine rejected the input.
    #[error(transparent)]
    Core(#[from] pomforge_core::Error),
}
