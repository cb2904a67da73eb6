//! Source-file discovery.
//!
//! Finds the source definitions directly under the configured source
//! directory. The scan is not recursive and the result is sorted by file
//! name so repeated runs see the same order. Dot-prefixed names are listed
//! like any other file.

use std::path::{Path, PathBuf};

use crate::config::ToolConfig;
use crate::error::{SourceError, SourceResult};

/// A source definition file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name including extension, e.g. `Screen1.fx.yaml`.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

impl SourceFile {
    /// File name without its final extension, e.g. `Screen1.fx`.
    pub fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }
}

/// List the source files under `root`'s source directory.
///
/// Returns [`SourceError::SourceDirMissing`] when the directory is absent.
/// An existing directory with no matching files yields an empty list;
/// callers decide whether that is fatal.
pub fn discover_source_files(root: &Path, config: &ToolConfig) -> SourceResult<Vec<SourceFile>> {
    let dir = config.source_dir_in(root);
    if !dir.is_dir() {
        return Err(SourceError::SourceDirMissing { path: dir });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == config.source_extension);
        if matches {
            files.push(SourceFile {
                name: name.to_string(),
                path: path.clone(),
            });
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered source files");
    Ok(files)
}
