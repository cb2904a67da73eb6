//! # Tool Configuration
//!
//! Fixed names of the source-tree layout, overridable from a YAML file.
//! Every field has a default so an empty or partial config is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{read_error, SourceError, SourceResult};

/// Companion metadata files shipped next to the manifest, in archive order.
pub const DEFAULT_COMPANION_FILES: [&str; 5] = [
    "CanvasManifest.json",
    "ComponentReferences.json",
    "Connections.json",
    "ControlTemplates.json",
    "Entropy.json",
];

/// Configuration shared by the validator and the archive simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Directory holding the source definitions, relative to the project root.
    pub source_dir: PathBuf,
    /// Extension (without the dot) of source definition files.
    pub source_extension: String,
    /// Canvas manifest path, relative to the project root.
    pub manifest: PathBuf,
    /// Companion metadata files checked by the validator and bundled by the packer.
    pub companion_files: Vec<String>,
    /// Fixed application name used as the archive file name prefix.
    pub archive_name: String,
    /// File-name token identifying the startup screen.
    pub startup_screen: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("Src"),
            source_extension: "yaml".to_string(),
            manifest: PathBuf::from("CanvasManifest.json"),
            companion_files: DEFAULT_COMPANION_FILES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            archive_name: "ProjectManagementApp".to_string(),
            startup_screen: "Screen1".to_string(),
        }
    }
}

impl ToolConfig {
    /// Load a configuration file. Omitted fields take their defaults.
    pub fn load(path: &Path) -> SourceResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(&content).map_err(|source| SourceError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loaded tool configuration");
        Ok(config)
    }

    /// Absolute-or-root-relative path of the source directory.
    pub fn source_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    /// Absolute-or-root-relative path of the canvas manifest.
    pub fn manifest_in(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }
}
