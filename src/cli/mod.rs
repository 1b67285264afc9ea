//! CLI command handlers for Screegen.
//!
//! This module provides scriptable access to the toolkit's maintenance
//! commands for automation, testing, and CI/CD integration.

pub mod common;
pub mod templates;
pub mod version;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use templates::GenerateTemplatesArgs;
pub use version::UpdateVersionArgs;
