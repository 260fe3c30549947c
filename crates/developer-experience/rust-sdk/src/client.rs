/// Rust SDK Client for Hodei CI/CD platform
use hodei_sdk_core::{
    ClientConfig, HttpClient, ReorderOutcome, ReorderRequest, SdkError, SdkResult,
};
use tracing::{debug, info};

/// Main client for interacting with Hodei CI/CD platform
#[derive(Clone)]
pub struct CicdClient {
    http_client: HttpClient,
}

impl CicdClient {
    /// Create a new CICD client without authentication
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API (e.g., "https://api.hodei.example.com")
    pub fn new(base_url: impl Into<String>) -> SdkResult<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Create a new CICD client with custom configuration
    ///
    /// # Example
    /// ```no_run
    /// use hodei_rust_sdk::{CicdClient, ClientConfig};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::new("https://api.hodei.example.com")
    ///     .with_token("your-token")
    ///     .with_timeout(Duration::from_secs(60));
    ///
    /// let client = CicdClient::with_config(config).expect("Failed to create client");
    /// ```
    pub fn with_config(config: ClientConfig) -> SdkResult<Self> {
        let http_client = HttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Move a waiting execution up or down in its queue
    ///
    /// `reorder_action` is forwarded exactly as given. The returned outcome
    /// carries the status the server answered with, whatever it was; an error
    /// means the request never completed.
    pub async fn reorder_execution(
        &self,
        execution_id: &str,
        reorder_action: &str,
    ) -> SdkResult<ReorderOutcome> {
        info!(
            "Reordering execution {} with action {}",
            execution_id, reorder_action
        );

        let path = format!("/api/v1/executions/{}/reorder", path_segment(execution_id)?);
        let status = self
            .http_client
            .put_for_status(&path, &ReorderRequest::new(reorder_action))
            .await?;

        debug!("Reorder of execution {} answered {}", execution_id, status);
        Ok(ReorderOutcome::new(status.as_u16()))
    }
}

/// Encode an id so it addresses exactly one path segment.
///
/// `.` and `..` (in any encoding) are resolved away by URL normalization, so
/// they cannot name a resource and are refused.
fn path_segment(id: &str) -> SdkResult<String> {
    if id == "." || id == ".." {
        return Err(SdkError::InvalidRequest(format!(
            "'{}' cannot be used as a path segment",
            id
        )));
    }
    Ok(urlencoding::encode(id).into_owned())
}
