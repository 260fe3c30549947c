/// Hodei SDK Core - Core framework for Hodei CI/CD platform SDK
///
/// This crate provides the HTTP plumbing and wire types shared by the
/// language-specific clients of the Hodei CI/CD platform.

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::{ClientConfig, HttpClient};
pub use error::{SdkError, SdkResult};
pub use types::{ReorderOutcome, ReorderRequest, STATUS_OK};
