//! Shared error and result types for CLI command handlers.

use std::fmt;

/// Result alias for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands, mapped to process exit codes.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Invalid input or arguments (exit code 1)
    Validation(String),
    /// File system or serialization failure (exit code 2)
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 1,
            Self::Io(_) => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad input").exit_code(), 1);
        assert_eq!(CliError::io("read failed").exit_code(), 2);
    }

    #[test]
    fn test_display_shows_message() {
        assert_eq!(CliError::validation("bad input").to_string(), "bad input");
    }
}
