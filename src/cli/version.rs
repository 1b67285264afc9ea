//! Version update command.

use crate::cli::common::{CliError, CliResult};
use crate::version;
use clap::Args;
use std::path::PathBuf;

/// Update the version across the repository's manifests
#[derive(Debug, Clone, Args)]
pub struct UpdateVersionArgs {
    /// New semantic version (e.g., 1.2.3 or 1.0.0-beta.1)
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Repository root containing the manifests
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl UpdateVersionArgs {
    /// Execute the update-version command.
    pub fn execute(&self) -> CliResult<()> {
        if !version::is_valid_version(&self.version) {
            return Err(CliError::validation(format!(
                "Invalid version format \"{}\"\n\
                 Expected format: major.minor.patch (e.g., 1.0.0, 1.0.0-beta.1)",
                self.version
            )));
        }

        let summary = version::update_manifests(&self.root, &self.version)
            .map_err(|e| CliError::io(format!("Failed to update manifests: {e}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Updating all packages to version {}\n", self.version);

        for missing in &summary.missing {
            println!("Warning: file not found: {missing}");
        }
        for update in &summary.updated {
            println!("✓ {}", update.path);
            for change in &update.changes {
                println!("   {change}");
            }
        }

        println!("\nUpdated {} file(s)", summary.updated.len());

        Ok(())
    }
}
