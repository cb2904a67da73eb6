//! Validation run over a project root.

use std::path::Path;

use msapp_core::{
    discover_source_files, load_json_value, load_source_yaml, SourceFile, SourceResult,
    ToolConfig,
};

use crate::report::{CompanionReport, CompanionStatus, FileKind, FileReport, ValidationReport};
use crate::structure::{check_app_structure, check_screen_structure, Findings};

/// Validate every source file and companion file under `root`.
///
/// Fails only when the source directory is missing. Every other problem is
/// recorded in the returned report.
pub fn validate_tree(root: &Path, config: &ToolConfig) -> SourceResult<ValidationReport> {
    let sources = discover_source_files(root, config)?;
    tracing::info!(count = sources.len(), "validating source files");

    let mut report = ValidationReport::default();
    for source in &sources {
        report.files.push(check_source_file(source));
    }
    for name in &config.companion_files {
        report.companions.push(check_companion_file(root, name));
    }

    tracing::info!(
        errors = report.total_errors(),
        warnings = report.total_warnings(),
        "validation finished"
    );
    Ok(report)
}

/// Load one source file and run the check its name selects.
pub fn check_source_file(source: &SourceFile) -> FileReport {
    let kind = FileKind::classify(source);
    tracing::debug!(file = %source.name, ?kind, "checking source file");

    let data = match load_source_yaml(&source.path) {
        Ok(data) => data,
        Err(e) => {
            return FileReport {
                file_name: source.name.clone(),
                kind,
                load_error: Some(e.to_string()),
                errors: Vec::new(),
                warnings: Vec::new(),
                controls: Vec::new(),
            };
        }
    };

    let findings = match &kind {
        FileKind::Screen { screen_name } => check_screen_structure(&data, screen_name),
        FileKind::AppProperties => check_app_structure(&data),
        FileKind::Other => Findings::default(),
    };

    FileReport {
        file_name: source.name.clone(),
        kind,
        load_error: None,
        errors: findings.errors,
        warnings: findings.warnings,
        controls: findings.controls,
    }
}

/// Check that a companion metadata file, if present, parses as JSON.
pub fn check_companion_file(root: &Path, name: &str) -> CompanionReport {
    let path = root.join(name);
    let status = if !path.is_file() {
        tracing::debug!(file = name, "companion file not present");
        CompanionStatus::Missing
    } else {
        match load_json_value(&path) {
            Ok(_) => CompanionStatus::Valid,
            Err(e) => CompanionStatus::Invalid {
                detail: e.to_string(),
            },
        }
    };
    CompanionReport {
        file_name: name.to_string(),
        status,
    }
}
