//! Archive run over a project root.

use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local};
use msapp_core::{discover_source_files, CanvasManifest, SourceError, SourceFile, ToolConfig};

use crate::archive::{archive_file_name, write_archive, ArchiveEntry};
use crate::error::{PackError, PackResult};
use crate::heuristics::inspect_source;
use crate::record::CompilationRecord;

/// Result of a completed archive run.
#[derive(Debug, Clone)]
pub struct PackOutcome {
    /// File name of the written archive.
    pub archive_name: String,
    /// Full path of the written archive.
    pub archive_path: PathBuf,
    /// Record stored in the archive.
    pub record: CompilationRecord,
    /// `PublishInfo.AppName` as found in the manifest, without placeholder.
    pub manifest_app_name: Option<String>,
}

impl PackOutcome {
    /// True when no errors were recorded. Warnings do not block success.
    pub fn succeeded(&self) -> bool {
        self.record.succeeded()
    }
}

/// Build a mock archive for the project at `root`, writing it to
/// `output_dir`. `now` stamps both the record and the archive name.
///
/// Prerequisite failures return `Err` before anything is written. Per-file
/// problems are recorded and the archive is still produced.
pub fn simulate_pack(
    root: &Path,
    output_dir: &Path,
    config: &ToolConfig,
    now: DateTime<Local>,
) -> PackResult<PackOutcome> {
    let sources = discover_source_files(root, config)?;
    if sources.is_empty() {
        return Err(SourceError::NoSourceFiles {
            path: config.source_dir_in(root),
            extension: config.source_extension.clone(),
        }
        .into());
    }

    let manifest = CanvasManifest::load(&config.manifest_in(root))?;
    let manifest_app_name = manifest.app_name();
    tracing::info!(
        sources = sources.len(),
        app = manifest_app_name.as_deref().unwrap_or("Unknown"),
        "loaded source tree"
    );

    let mut record = CompilationRecord::new(
        now,
        sources.iter().map(|s| s.name.clone()).collect(),
        manifest.app_name(),
        manifest.app_id(),
        manifest.screens(),
    );

    let source_prefix = entry_prefix(&config.source_dir);
    let mut entries = Vec::with_capacity(sources.len() + config.companion_files.len());

    for source in &sources {
        let read = std::fs::read(&source.path);
        if let Some(entry) = source_entry(source, read, &source_prefix, config, &mut record) {
            entries.push(entry);
        }
    }

    for name in &config.companion_files {
        let path = root.join(name);
        if !path.is_file() {
            tracing::debug!(file = %name, "companion file not present, skipping");
            continue;
        }
        let bytes = std::fs::read(&path).map_err(|source| PackError::ReadCompanion {
            path: path.clone(),
            source,
        })?;
        entries.push(ArchiveEntry {
            name: name.clone(),
            bytes,
        });
    }

    let archive_name = archive_file_name(&config.archive_name, now);
    let archive_path = output_dir.join(&archive_name);
    write_archive(&archive_path, &entries, &record)?;

    Ok(PackOutcome {
        archive_name,
        archive_path,
        record,
        manifest_app_name,
    })
}

/// Archive directory for source entries, built from the plain components
/// of `source_dir` only. `./Src`, `Src/` and `/abs/Src` all map to `Src`.
fn entry_prefix(source_dir: &Path) -> String {
    source_dir
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Inspect one source file and turn it into an archive entry.
///
/// A failed read records an error and yields no entry. Bytes that are not
/// UTF-8 record an error but are still archived as-is.
fn source_entry(
    source: &SourceFile,
    read: std::io::Result<Vec<u8>>,
    prefix: &str,
    config: &ToolConfig,
    record: &mut CompilationRecord,
) -> Option<ArchiveEntry> {
    let bytes = match read {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(file = %source.name, error = %e, "source file left out of archive");
            record.add_error(format!("{}: Read error - {e}", source.name));
            return None;
        }
    };
    match std::str::from_utf8(&bytes) {
        Ok(text) => inspect_source(&source.name, text, &config.startup_screen, record),
        Err(e) => record.add_error(format!("{}: Read error - {e}", source.name)),
    }
    let name = if prefix.is_empty() {
        source.name.clone()
    } else {
        format!("{prefix}/{}", source.name)
    };
    Some(ArchiveEntry { name, bytes })
}
