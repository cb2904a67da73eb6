//! # msapp-validate — Structure Validator
//!
//! Superficial shape checks over a canvas-app source tree. This is not a
//! schema validator and does not interpret formulas; it catches the
//! structural slips that break an unpack/pack round trip.
//!
//! ## Checks
//!
//! 1. **Screen files** (`Screen*`, `App.fx*`): the document is a mapping,
//!    carries a `Fill` property (or nests one under `App`), and every
//!    control declares a position.
//! 2. **App properties** (`App.pa*`): the document is a mapping and its
//!    `Properties` section names a `Theme`.
//! 3. **Companion files**: each present JSON file parses.
//!
//! Errors fail the run; warnings are advisory and never change the verdict.
//! See [`validate_tree`] for the entry point.

pub mod report;
pub mod structure;
pub mod validator;

pub use report::{
    CompanionReport, CompanionStatus, DetectedControl, FileKind, FileReport, ValidationReport,
};
pub use structure::{check_app_structure, check_screen_structure, Findings};
pub use validator::{check_companion_file, check_source_file, validate_tree};
