//! Template generation command.

use crate::cli::common::{CliError, CliResult};
use crate::generator;
use clap::Args;
use std::path::PathBuf;

/// Generate project scaffold templates from the example project
#[derive(Debug, Clone, Args)]
pub struct GenerateTemplatesArgs {
    /// Example project directory to read from
    #[arg(long, value_name = "DIR", default_value = "demos/example")]
    pub example_dir: PathBuf,

    /// Templates directory to write into
    #[arg(long, value_name = "DIR", default_value = "templates")]
    pub out: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateTemplatesArgs {
    /// Execute the generate-templates command.
    ///
    /// Per-file failures are reported but do not fail the command.
    pub fn execute(&self) -> CliResult<()> {
        let report = generator::generate_templates(&self.example_dir, &self.out)
            .map_err(|e| CliError::io(format!("Failed to generate templates: {e}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Generating templates from example project...\n");

        for (source, target) in &report.written {
            println!("✓ {source} → {target}");
        }
        for (source, error) in &report.failed {
            println!("✗ Failed to process {source}: {error}");
        }

        println!(
            "\nTemplates written: {} file(s), {} failure(s)",
            report.written.len(),
            report.failed.len()
        );
        println!("Templates directory: {}", self.out.display());

        Ok(())
    }
}
