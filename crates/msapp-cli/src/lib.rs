//! # msapp-cli — CLI Tool for Canvas-App Source Trees
//!
//! Provides the `msapp` command-line interface over the validator and the
//! archive simulator.
//!
//! ## Subcommands
//!
//! - `msapp validate` — Structural checks over `Src/*.yaml` and the companion JSON files.
//! - `msapp pack` — Mock `.msapp` archive with a generated compilation record.
//!
//! Both exit 0 on success (warnings allowed) and 1 on any error.
//!
//! ```bash
//! msapp validate
//! msapp --root ./MyApp pack --archive-name MyApp
//! msapp --config msapp.yaml --output-dir dist pack
//! ```

pub mod pack;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use msapp_core::ToolConfig;

/// Config file picked up from the project root when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "msapp.yaml";

/// Resolve a path that may be relative to the project root.
///
/// If the path is absolute, returns it as-is. If relative and the file
/// exists relative to `root`, uses that. Otherwise returns the path
/// relative to the current directory.
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let root_relative = root.join(path);
    if root_relative.exists() {
        root_relative
    } else {
        path.to_path_buf()
    }
}

/// Project root, output location and configuration for one invocation.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub config: ToolConfig,
}

impl ProjectContext {
    /// Build the context from the global CLI options.
    ///
    /// The root defaults to the current directory and the output directory
    /// to the root. An explicit config file must load; otherwise
    /// `msapp.yaml` in the root is used when present.
    pub fn new(
        root: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        config: Option<&Path>,
    ) -> Result<Self> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir().context("failed to read current directory")?,
        };
        let output_dir = output_dir.unwrap_or_else(|| root.clone());
        let config = load_config(config, &root)?;
        tracing::debug!(root = %root.display(), output_dir = %output_dir.display(), "project context");
        Ok(Self {
            root,
            output_dir,
            config,
        })
    }
}

/// Load the tool configuration for `root`.
pub fn load_config(explicit: Option<&Path>, root: &Path) -> Result<ToolConfig> {
    if let Some(path) = explicit {
        let resolved = resolve_path(path, root);
        return ToolConfig::load(&resolved)
            .with_context(|| format!("failed to load config {}", resolved.display()));
    }
    let implicit = root.join(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        return ToolConfig::load(&implicit)
            .with_context(|| format!("failed to load config {}", implicit.display()));
    }
    Ok(ToolConfig::default())
}
