//! # msapp-pack — Archive Simulator
//!
//! Produces a mock `.msapp` archive from a canvas-app source tree. Nothing
//! is compiled: the archive is a deflated zip holding the source files
//! under `Src/`, the companion metadata files that exist, and a generated
//! `compilation_info.json` describing the run.
//!
//! ## Run Outline
//!
//! 1. Discover source files and load the manifest. Either failing aborts
//!    the run and no archive is written.
//! 2. Apply the content heuristics in [`heuristics`] to each file,
//!    accumulating warnings and errors into a [`CompilationRecord`].
//! 3. Write the archive, even when errors were recorded, so it can be
//!    inspected.
//!
//! The run succeeds iff the record holds no errors.

pub mod archive;
pub mod error;
pub mod heuristics;
pub mod record;
pub mod simulator;

pub use archive::{archive_file_name, ArchiveEntry, COMPILATION_INFO_ENTRY};
pub use error::{PackError, PackResult};
pub use record::{CompilationRecord, CompilationStatus};
pub use simulator::{simulate_pack, PackOutcome};
