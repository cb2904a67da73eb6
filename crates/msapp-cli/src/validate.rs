//! # Validate Subcommand
//!
//! Runs the structure validator and prints a per-file report followed by
//! the error and warning totals.

use anyhow::Result;

use msapp_validate::{validate_tree, CompanionStatus, FileKind, ValidationReport};

use crate::ProjectContext;

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when no errors were found, 1 otherwise.
pub fn run_validate(ctx: &ProjectContext) -> Result<u8> {
    println!("Canvas app structure validator");
    println!();

    let report = match validate_tree(&ctx.root, &ctx.config) {
        Ok(report) => report,
        Err(e) => {
            println!("ERROR: {e}");
            return Ok(1);
        }
    };

    print_report(&report);

    if report.passed() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn print_report(report: &ValidationReport) {
    println!("Source files: {}", report.files.len());
    for file in &report.files {
        println!();
        println!("  {}", file.file_name);

        if let Some(err) = &file.load_error {
            println!("    ERROR: {err}");
            continue;
        }

        if let FileKind::Screen { screen_name } = &file.kind {
            println!(
                "    Screen {screen_name}: {} controls found",
                file.controls.len()
            );
            for control in &file.controls {
                println!("      - {} ({})", control.name, control.control_type);
            }
        }
        for error in &file.errors {
            println!("    ERROR: {error}");
        }
        for warning in &file.warnings {
            println!("    WARN: {warning}");
        }
        if file.is_clean() {
            println!("    OK: {} looks good", file.file_name);
        }
    }

    println!();
    println!("Companion files:");
    for companion in &report.companions {
        match &companion.status {
            CompanionStatus::Valid => println!("  OK: {} is valid JSON", companion.file_name),
            CompanionStatus::Invalid { detail } => {
                println!("  FAIL: {}: {detail}", companion.file_name)
            }
            CompanionStatus::Missing => println!(
                "  WARN: {} not found (this might be expected)",
                companion.file_name
            ),
        }
    }

    println!();
    println!("Validation summary");
    println!("  Total errors:   {}", report.total_errors());
    println!("  Total warnings: {}", report.total_warnings());
    println!();

    if report.passed() {
        println!("All files passed basic validation; the app structure is ready for packing.");
    } else {
        println!(
            "Found {} error(s) that need to be fixed.",
            report.total_errors()
        );
    }
}
