//! Error types for the CLI

use calc_engine::error::{ConfigError, KeyError};
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable engine configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A key that is not on the keypad
    #[error("{0}")]
    Key(#[from] KeyError),

    /// JSON output failed
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_error_passes_through() {
        let err = CliError::from(KeyError::UnknownLabel("sin".into()));
        assert_eq!(err.to_string(), "Unknown key label: \"sin\"");
    }

    #[test]
    fn test_config_error_prefixed() {
        let err = CliError::from(ConfigError::InvalidInputLength(0));
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
