//! # Compilation Record
//!
//! In-memory summary of one archive run, serialized into the archive as
//! `compilation_info.json`. Field order is the wire order.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::PackResult;

/// Placeholder app name when the manifest has no `PublishInfo.AppName`.
pub const DEFAULT_APP_NAME: &str = "App";

/// Placeholder app id when the manifest has no `Properties.Id`.
pub const DEFAULT_APP_ID: &str = "Unknown";

/// Outcome of a run. Warnings never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilationStatus {
    Success,
    Failed,
}

/// Summary of an archive run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationRecord {
    /// Local time of the run, ISO-8601 with microseconds and no offset.
    pub compilation_time: String,
    pub source_files: Vec<String>,
    pub app_name: String,
    pub app_id: String,
    pub screens: Vec<String>,
    pub status: CompilationStatus,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl CompilationRecord {
    /// Start a record. Missing identity fields take their placeholders.
    pub fn new(
        started_at: DateTime<Local>,
        source_files: Vec<String>,
        app_name: Option<String>,
        app_id: Option<String>,
        screens: Vec<String>,
    ) -> Self {
        Self {
            compilation_time: started_at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            source_files,
            app_name: app_name.unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            app_id: app_id.unwrap_or_else(|| DEFAULT_APP_ID.to_string()),
            screens,
            status: CompilationStatus::Success,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Record an advisory finding.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Record an error. Marks the run failed.
    pub fn add_error(&mut self, error: String) {
        self.status = CompilationStatus::Failed;
        self.errors.push(error);
    }

    /// True when no errors were recorded.
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    /// Pretty-printed JSON for the archive entry.
    pub fn to_json_bytes(&self) -> PackResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn started_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn record() -> CompilationRecord {
        CompilationRecord::new(
            started_at(),
            vec!["Screen1.yaml".to_string()],
            Some("Demo".to_string()),
            None,
            vec!["Screen1".to_string()],
        )
    }

    #[test]
    fn placeholders_fill_missing_identity() {
        let r = CompilationRecord::new(started_at(), Vec::new(), None, None, Vec::new());
        assert_eq!(r.app_name, "App");
        assert_eq!(r.app_id, "Unknown");
    }

    #[test]
    fn compilation_time_is_iso_with_micros() {
        assert_eq!(record().compilation_time, "2024-03-09T14:05:07.000000");
    }

    #[test]
    fn warnings_keep_success() {
        let mut r = record();
        r.add_warning("Screen1.yaml: Navigate formulas detected".to_string());
        assert!(r.succeeded());
        assert_eq!(r.status, CompilationStatus::Success);
    }

    #[test]
    fn errors_mark_failure() {
        let mut r = record();
        r.add_error("Screen1.yaml: Missing Fill property".to_string());
        assert!(!r.succeeded());
        assert_eq!(r.status, CompilationStatus::Failed);
    }

    #[test]
    fn json_uses_wire_field_order() {
        let bytes = record().to_json_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let order = [
            "compilation_time",
            "source_files",
            "app_name",
            "app_id",
            "screens",
            "status",
            "warnings",
            "errors",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|field| text.find(&format!("\"{field}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("\"status\": \"success\""));
        assert!(text.contains("\"app_name\": \"Demo\""));
    }
}
