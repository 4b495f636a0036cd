//! Walrus CLI - documentation reader.
//!
//! Provides commands for:
//! - `render`: Navigate to a URL and write the resulting HTML document
//! - `check`: Validate the configuration and list every route
//! - `mode`: Persist the light/dark display mode

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ModeArgs, RenderArgs};
use output::Output;

/// Walrus - documentation reader.
#[derive(Parser)]
#[command(name = "walrus", version, about)]
struct Cli {
    /// Enable verbose output (navigation and fetch logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate to a URL and write the rendered page.
    Render(RenderArgs),
    /// Validate the configuration and list routes.
    Check(CheckArgs),
    /// Persist the display mode.
    Mode(ModeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Mode(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
