//! Error types for the Hodei CLI

use hodei_sdk_core::SdkError;
use thiserror::Error;

/// Input rejected before anything is sent to the server
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing execution id: required parameter 'execution-id' not set")]
    MissingExecutionId,

    #[error("missing reorder action: required parameter 'reorder-action' not set")]
    MissingReorderAction,

    #[error("invalid reorder action '{0}': required parameter 'reorder-action' must be UP or DOWN")]
    InvalidReorderAction(String),
}

/// Configuration error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}

/// Errors surfaced by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "encountered an error re-ordering execution with id {execution_id}, reorder-action {reorder_action}, status code: {status_code}"
    )]
    Operation {
        execution_id: String,
        reorder_action: String,
        status_code: u16,
    },

    #[error(transparent)]
    Transport(#[from] SdkError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Process exit code for this error: 2 for bad input, 1 for failed calls
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) | CliError::Config(_) => 2,
            CliError::Operation { .. } | CliError::Transport(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_error_names_execution_action_and_status() {
        let error = CliError::Operation {
            execution_id: "exec-123".to_string(),
            reorder_action: "DOWN".to_string(),
            status_code: 500,
        };
        let message = error.to_string();
        assert!(message.contains("exec-123"));
        assert!(message.contains("DOWN"));
        assert!(message.contains("500"));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_transport_error_is_passed_through() {
        let error = CliError::from(SdkError::ConnectionFailed("connection refused".to_string()));
        assert_eq!(error.to_string(), "Connection failed: connection refused");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_validation_errors_exit_with_usage_code() {
        let error = CliError::from(ValidationError::MissingExecutionId);
        assert!(error.to_string().contains("missing execution id"));
        assert_eq!(error.exit_code(), 2);

        let error = CliError::from(ConfigError::Invalid("HODEI_TIMEOUT_SECS".to_string()));
        assert_eq!(error.exit_code(), 2);
    }
}
