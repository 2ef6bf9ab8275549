//! CLI-specific error types
//!
//! Every CLI error is fatal; main prints it and exits non-zero.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Clone, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Config error: {0}")]
    Config(String),

    /// Server failed to start or run
    #[error("Startup failed: {0}")]
    Startup(String),
}

impl CliError {
    /// Config error
    pub fn config(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    /// Startup error
    pub fn startup(msg: impl Into<String>) -> Self {
        CliError::Startup(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CliError::config("bad port").to_string(),
            "Config error: bad port"
        );
        assert_eq!(
            CliError::startup("bind failed").to_string(),
            "Startup failed: bind failed"
        );
    }
}
