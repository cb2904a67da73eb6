//! Content heuristics applied to each source file.
//!
//! Three independent substring checks. Each contributes at most one
//! finding per file no matter how often its token occurs, and several may
//! fire for the same file.

use crate::record::CompilationRecord;

/// Startup formula marker, only meaningful in the startup screen.
pub const STARTUP_FORMULA_TOKEN: &str = "OnStart:";

/// Navigation function call.
pub const NAVIGATE_TOKEN: &str = "Navigate(";

/// Background property every screen definition should set.
pub const FILL_TOKEN: &str = "Fill:";

/// File-name token marking a screen definition.
pub const SCREEN_NAME_TOKEN: &str = "Screen";

/// Inspect one source file's text and record findings.
pub fn inspect_source(
    file_name: &str,
    content: &str,
    startup_screen: &str,
    record: &mut CompilationRecord,
) {
    if file_name.contains(startup_screen) && content.contains(STARTUP_FORMULA_TOKEN) {
        record.add_warning(format!(
            "{file_name}: OnStart formula found - ensure proper syntax"
        ));
    }

    if content.contains(NAVIGATE_TOKEN) {
        record.add_warning(format!(
            "{file_name}: Navigate formulas detected - verify screen references"
        ));
    }

    if file_name.contains(SCREEN_NAME_TOKEN) && !content.contains(FILL_TOKEN) {
        record.add_error(format!("{file_name}: Missing Fill property"));
    }
}
