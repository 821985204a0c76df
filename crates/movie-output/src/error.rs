//! Output error types.

use std::path::PathBuf;
use thiserror::Error;

/// Artifact writing error.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding error.
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Nested value could not be serialized.
    #[error("failed to encode nested value: {0}")]
    Json(#[from] serde_json::Error),

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("failed to publish {target_path} from {temp_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
