//! Screegen - localized multi-device app store screenshot toolkit
//!
//! The binary hosts the repository maintenance commands; the rendering and
//! routing functionality lives in the library and is embedded by consuming
//! projects (see `demos/example`).

use clap::{Parser, Subcommand};
use screegen::cli::{GenerateTemplatesArgs, UpdateVersionArgs};

/// Screegen - localized app store screenshot toolkit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate project scaffold templates from the example project
    GenerateTemplates(GenerateTemplatesArgs),
    /// Update the version across the repository's manifests
    UpdateVersion(UpdateVersionArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::GenerateTemplates(args) => args.execute(),
        Commands::UpdateVersion(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
