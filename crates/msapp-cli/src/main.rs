//! # msapp CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use msapp_cli::pack::{run_pack, PackArgs};
use msapp_cli::validate::run_validate;
use msapp_cli::ProjectContext;

/// Canvas-app source tree tooling.
///
/// Validates the structure of unpacked canvas-app sources and builds mock
/// `.msapp` archives for demonstration.
#[derive(Parser, Debug)]
#[command(name = "msapp", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (defaults to msapp.yaml in the project root).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Project root holding Src/ and the manifest (defaults to the current directory).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Output directory for generated archives (defaults to the project root).
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check source YAML structure and companion JSON files.
    Validate,

    /// Build a mock .msapp archive with a compilation record.
    Pack(PackArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("msapp CLI starting");

    let result = ProjectContext::new(cli.root, cli.output_dir, cli.config.as_deref()).and_then(
        |ctx| match &cli.command {
            Commands::Validate => run_validate(&ctx),
            Commands::Pack(args) => run_pack(args, &ctx),
        },
    );

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
