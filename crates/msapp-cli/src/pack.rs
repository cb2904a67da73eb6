//! # Pack Subcommand
//!
//! Builds a mock `.msapp` archive and prints the compilation results. The
//! archive is written even when errors are recorded; the exit code carries
//! the verdict.

use anyhow::Result;
use clap::Args;

use msapp_pack::{simulate_pack, PackError, PackOutcome};

use crate::ProjectContext;

/// Arguments for the `msapp pack` subcommand.
#[derive(Args, Debug)]
pub struct PackArgs {
    /// Archive name prefix, overriding the configured `archive_name`.
    #[arg(long)]
    pub archive_name: Option<String>,

    /// Do not print the follow-up instructions for the real packing tool.
    #[arg(long)]
    pub no_next_steps: bool,
}

/// Execute the pack subcommand.
///
/// Returns exit code: 0 when no errors were recorded, 1 otherwise.
pub fn run_pack(args: &PackArgs, ctx: &ProjectContext) -> Result<u8> {
    let mut config = ctx.config.clone();
    if let Some(name) = &args.archive_name {
        config.archive_name = name.clone();
    }

    println!("Canvas app mock packer");
    println!();

    let code = match simulate_pack(&ctx.root, &ctx.output_dir, &config, chrono::Local::now()) {
        Ok(outcome) => {
            print_outcome(&outcome);
            u8::from(!outcome.succeeded())
        }
        Err(PackError::Source(e)) => {
            println!("ERROR: {e}");
            1
        }
        Err(e) => return Err(e.into()),
    };

    if !args.no_next_steps {
        print_next_steps();
    }
    Ok(code)
}

fn print_outcome(outcome: &PackOutcome) {
    let record = &outcome.record;

    println!("Found {} source files:", record.source_files.len());
    for name in &record.source_files {
        println!("  - {name}");
    }
    println!(
        "Manifest is valid (app: {})",
        outcome.manifest_app_name.as_deref().unwrap_or("Unknown")
    );

    println!();
    println!("Compilation results");
    if record.errors.is_empty() {
        println!("  No critical errors found");
    } else {
        println!("  {} error(s):", record.errors.len());
        for error in &record.errors {
            println!("    - {error}");
        }
    }
    if record.warnings.is_empty() {
        println!("  No warnings generated");
    } else {
        println!("  {} warning(s):", record.warnings.len());
        for warning in &record.warnings {
            println!("    - {warning}");
        }
    }

    println!();
    println!("Generated: {}", outcome.archive_path.display());
    println!("App name:  {}", record.app_name);
    println!("App id:    {}", record.app_id);
    println!("Screens:   {}", record.screens.len());
    for screen in &record.screens {
        println!("  - {screen}");
    }
    println!();

    if !record.errors.is_empty() {
        println!(
            "App has {} critical error(s); fix them before importing.",
            record.errors.len()
        );
    } else if record.warnings.is_empty() {
        println!("App packed successfully and is ready for import.");
    } else {
        println!("App packed with warnings; it should still import.");
    }
}

fn print_next_steps() {
    println!();
    println!("Next steps");
    println!("  1. Install the Power Platform CLI to build a real package.");
    println!("  2. Pack with: pac canvas pack --sources ./Src --msapp YourApp.msapp");
    println!("  3. Import the .msapp file in Power Apps Studio and test it.");
}
