//! # msapp-core — Shared Source-Tree Model
//!
//! Foundational types for the canvas-app tooling. Both the structure
//! validator (`msapp-validate`) and the archive simulator (`msapp-pack`)
//! read the same on-disk layout; this crate owns that layout.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//!   Src/*.yaml                  source definitions (screens, App.fx, App.pa)
//!   CanvasManifest.json         app identity and screen order
//!   ComponentReferences.json    optional companion metadata
//!   Connections.json
//!   ControlTemplates.json
//!   Entropy.json
//! ```
//!
//! Every fixed name above is a defaulted field of [`ToolConfig`] so a
//! project can override it from a YAML config file.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `msapp-*` crates (this is the leaf of the DAG).
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Loaders return [`SourceError`] with the offending path attached.

pub mod banner;
pub mod config;
pub mod error;
pub mod manifest;
pub mod parser;
pub mod source;

// Re-export primary types for ergonomic imports.
pub use banner::strip_banner;
pub use config::ToolConfig;
pub use error::{SourceError, SourceResult};
pub use manifest::CanvasManifest;
pub use parser::{load_json_value, load_source_yaml};
pub use source::{discover_source_files, SourceFile};
