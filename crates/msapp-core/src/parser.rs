//! Shared YAML/JSON loading.
//!
//! Source definitions are parsed into an untyped `serde_yaml::Value` (an
//! ordered mapping of scalars, mappings and sequences) after the editor
//! banner is stripped. Companion files are parsed into `serde_json::Value`.
//! A document that parses to null counts as a load failure.

use std::path::Path;

use crate::banner::strip_banner;
use crate::error::{read_error, SourceError, SourceResult};

/// Load a source definition file as an untyped YAML tree.
pub fn load_source_yaml(path: &Path) -> SourceResult<serde_yaml::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    parse_source_yaml(&content, path)
}

/// Parse source definition text. `path` is used for error context only.
pub fn parse_source_yaml(content: &str, path: &Path) -> SourceResult<serde_yaml::Value> {
    let filtered = strip_banner(content);
    let value: serde_yaml::Value =
        serde_yaml::from_str(&filtered).map_err(|source| SourceError::YamlParse {
            path: path.to_path_buf(),
            source,
        })?;
    if value.is_null() {
        return Err(SourceError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }
    Ok(value)
}

/// Load a JSON file as an untyped value.
pub fn load_json_value(path: &Path) -> SourceResult<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| SourceError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    if value.is_null() {
        return Err(SourceError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }
    Ok(value)
}
