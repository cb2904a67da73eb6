//! Validation results.
//!
//! Per-file findings are kept in discovery order and aggregated into
//! run-level totals by [`ValidationReport`].

use msapp_core::SourceFile;

/// How a source file is checked, decided by its file-name prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// `Screen*` or `App.fx*`: screen-structure check under the given name.
    Screen { screen_name: String },
    /// `App.pa*`: app-structure check.
    AppProperties,
    /// Anything else: no checks.
    Other,
}

impl FileKind {
    /// Classify a source file by name.
    ///
    /// Screen files are reported under their stem (`Screen1.fx.yaml` is
    /// `Screen1.fx`); the root app definition is always `App.fx`.
    pub fn classify(file: &SourceFile) -> Self {
        if file.name.starts_with("Screen") {
            FileKind::Screen {
                screen_name: file.stem().to_string(),
            }
        } else if file.name.starts_with("App.fx") {
            FileKind::Screen {
                screen_name: "App.fx".to_string(),
            }
        } else if file.name.starts_with("App.pa") {
            FileKind::AppProperties
        } else {
            FileKind::Other
        }
    }
}

/// A control found in a screen: a mapping node carrying an `As` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedControl {
    /// Key of the node in its parent mapping.
    pub name: String,
    /// `As` value up to its first `.`.
    pub control_type: String,
}

/// Result of checking one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub kind: FileKind,
    /// Set when the file could not be loaded; no structural checks ran.
    pub load_error: Option<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub controls: Vec<DetectedControl>,
}

impl FileReport {
    /// Number of errors this file contributes to the run. A load failure
    /// counts as exactly one.
    pub fn error_count(&self) -> usize {
        self.errors.len() + usize::from(self.load_error.is_some())
    }

    /// True when the file produced neither errors nor warnings.
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0 && self.warnings.is_empty()
    }
}

/// Outcome of checking one companion metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionStatus {
    Valid,
    Invalid { detail: String },
    /// Not on disk. Expected in many projects; not an error.
    Missing,
}

/// Companion-file result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionReport {
    pub file_name: String,
    pub status: CompanionStatus,
}

/// Aggregated result of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub files: Vec<FileReport>,
    pub companions: Vec<CompanionReport>,
}

impl ValidationReport {
    /// Errors across source files and companion files.
    pub fn total_errors(&self) -> usize {
        let file_errors: usize = self.files.iter().map(FileReport::error_count).sum();
        let companion_errors = self
            .companions
            .iter()
            .filter(|c| matches!(c.status, CompanionStatus::Invalid { .. }))
            .count();
        file_errors + companion_errors
    }

    /// Warnings across source files.
    pub fn total_warnings(&self) -> usize {
        self.files.iter().map(|f| f.warnings.len()).sum()
    }

    /// The run passes iff there are no errors. Warnings never fail a run.
    pub fn passed(&self) -> bool {
        self.total_errors() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn source(name: &str) -> SourceFile {
        SourceFile {
            name: name.to_string(),
            path: PathBuf::from("Src").join(name),
        }
    }

    fn file_report(errors: usize, warnings: usize, load_error: bool) -> FileReport {
        FileReport {
            file_name: "Screen1.yaml".to_string(),
            kind: FileKind::Other,
            load_error: load_error.then(|| "bad yaml".to_string()),
            errors: vec!["e".to_string(); errors],
            warnings: vec!["w".to_string(); warnings],
            controls: Vec::new(),
        }
    }

    #[test]
    fn classify_by_prefix() {
        assert_eq!(
            FileKind::classify(&source("Screen1.fx.yaml")),
            FileKind::Screen {
                screen_name: "Screen1.fx".to_string()
            }
        );
        assert_eq!(
            FileKind::classify(&source("App.fx.yaml")),
            FileKind::Screen {
                screen_name: "App.fx".to_string()
            }
        );
        assert_eq!(
            FileKind::classify(&source("App.pa.yaml")),
            FileKind::AppProperties
        );
        assert_eq!(FileKind::classify(&source("Themes.yaml")), FileKind::Other);
        assert_eq!(FileKind::classify(&source("MyScreen.yaml")), FileKind::Other);
    }

    #[test]
    fn load_error_counts_once() {
        let report = file_report(0, 0, true);
        assert_eq!(report.error_count(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn totals_sum_files_and_companions() {
        let report = ValidationReport {
            files: vec![file_report(2, 1, false), file_report(0, 3, true)],
            companions: vec![
                CompanionReport {
                    file_name: "Connections.json".to_string(),
                    status: CompanionStatus::Invalid {
                        detail: "trailing comma".to_string(),
                    },
                },
                CompanionReport {
                    file_name: "Entropy.json".to_string(),
                    status: CompanionStatus::Missing,
                },
                CompanionReport {
                    file_name: "CanvasManifest.json".to_string(),
                    status: CompanionStatus::Valid,
                },
            ],
        };
        assert_eq!(report.total_errors(), 4);
        assert_eq!(report.total_warnings(), 4);
        assert!(!report.passed());
    }

    #[test]
    fn warnings_alone_pass() {
        let report = ValidationReport {
            files: vec![file_report(0, 5, false)],
            companions: Vec::new(),
        };
        assert!(report.passed());
    }
}
