//! # Error Types
//!
//! Errors raised while locating and loading the source tree. Prerequisite
//! failures (missing source directory, missing manifest) abort a run;
//! per-file load failures are converted to report entries by the callers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading the canvas-app source tree.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source definition directory does not exist.
    #[error("source directory not found: {path}")]
    SourceDirMissing { path: PathBuf },

    /// The source directory exists but holds no matching files.
    #[error("no .{extension} files found in {path}")]
    NoSourceFiles { path: PathBuf, extension: String },

    /// The canvas manifest is absent.
    #[error("manifest not found: {path}")]
    ManifestMissing { path: PathBuf },

    /// The canvas manifest is not valid JSON.
    #[error("manifest {path} is not valid JSON: {source}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The canvas manifest parsed, but its top level is not an object.
    #[error("manifest {path} must be a JSON object")]
    ManifestNotObject { path: PathBuf },

    /// A file that was expected to exist was not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// YAML parsing failed.
    #[error("YAML syntax error in {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("JSON syntax error in {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document parsed to nothing (empty file or explicit null).
    #[error("document in {path} is empty")]
    EmptyDocument { path: PathBuf },

    /// The tool configuration file could not be parsed.
    #[error("invalid configuration at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for source-tree operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Map a read failure to [`SourceError::FileNotFound`] when the file is
/// absent, and to [`SourceError::Io`] otherwise.
pub(crate) fn read_error(path: &std::path::Path, err: std::io::Error) -> SourceError {
    if err.kind() == std::io::ErrorKind::NotFound {
        SourceError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        SourceError::Io(err)
    }
}
