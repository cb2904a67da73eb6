//! Archive simulator error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an archive run.
#[derive(Debug, Error)]
pub enum PackError {
    /// A prerequisite of the source tree is missing or invalid.
    #[error(transparent)]
    Source(#[from] msapp_core::SourceError),

    /// A companion file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    ReadCompanion {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The archive file could not be created.
    #[error("failed to create archive {path}: {source}")]
    CreateArchive {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing a zip entry failed.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The compilation record could not be serialized.
    #[error("failed to serialize compilation record: {0}")]
    Record(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for archive operations.
pub type PackResult<T> = Result<T, PackError>;
