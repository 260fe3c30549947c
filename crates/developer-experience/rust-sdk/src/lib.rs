/// Hodei Rust SDK - Idiomatic Rust SDK for Hodei CI/CD platform
///
/// This crate provides a Rust SDK for interacting with the Hodei CI/CD
/// platform, with async/await support and type-safe APIs.
///
/// # Example
/// ```no_run
/// use hodei_rust_sdk::CicdClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CicdClient::new("https://api.hodei.example.com")?;
///
///     let outcome = client.reorder_execution("exec-123", "UP").await?;
///     println!("Server answered {}", outcome.status_code);
///     Ok(())
/// }
/// ```

pub mod client;

// Re-export core types
pub use hodei_sdk_core::{
    ClientConfig, ReorderOutcome, ReorderRequest, SdkError, SdkResult, STATUS_OK,
};

// Re-export client
pub use client::CicdClient;
