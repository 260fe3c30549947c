/// Error types for the SDK Core
use thiserror::Error;

/// Main error type for SDK operations
///
/// Every variant describes a request that could not be completed. A request
/// that reached the server and came back with a non-success status is not an
/// `SdkError`; callers receive the status code and interpret it themselves.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Timeout error
    #[error("Operation timed out")]
    Timeout,

    /// Request cannot be expressed on the wire
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Type alias for SDK results
pub type SdkResult<T> = Result<T, SdkError>;

impl SdkError {
    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SdkError::Timeout
        } else {
            SdkError::ConnectionFailed(e.to_string())
        }
    }
}
