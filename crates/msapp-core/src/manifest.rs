//! # Canvas Manifest
//!
//! Read-only view over `CanvasManifest.json`. The manifest is kept as an
//! untyped JSON object; only three lookups are needed:
//!
//! - `PublishInfo.AppName` — display name of the app
//! - `Properties.Id` — app identifier
//! - `ScreenOrder` — ordered screen names

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{SourceError, SourceResult};

/// A parsed canvas manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasManifest {
    root: Map<String, Value>,
}

impl CanvasManifest {
    /// Load the manifest. Absence, invalid JSON, and a non-object top level
    /// are all prerequisite failures.
    pub fn load(path: &Path) -> SourceResult<Self> {
        if !path.is_file() {
            return Err(SourceError::ManifestMissing {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| SourceError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_value(value).ok_or_else(|| SourceError::ManifestNotObject {
            path: path.to_path_buf(),
        })
    }

    /// Wrap an already-parsed JSON value. Returns `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self { root }),
            _ => None,
        }
    }

    /// `PublishInfo.AppName`, if present.
    pub fn app_name(&self) -> Option<String> {
        self.lookup("PublishInfo", "AppName")
    }

    /// `Properties.Id`, if present.
    pub fn app_id(&self) -> Option<String> {
        self.lookup("Properties", "Id")
    }

    /// `ScreenOrder`, or an empty list when absent or not an array.
    pub fn screens(&self) -> Vec<String> {
        match self.root.get("ScreenOrder") {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        }
    }

    fn lookup(&self, section: &str, key: &str) -> Option<String> {
        self.root
            .get(section)
            .and_then(Value::as_object)
            .and_then(|s| s.get(key))
            .and_then(scalar_text)
    }
}

/// Render a scalar as text. Null and containers have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
