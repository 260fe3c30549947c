/// HTTP client for API communication
use crate::error::{SdkError, SdkResult};
use reqwest::{header, Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API
    pub base_url: String,

    /// API authentication token, sent as a bearer token when present
    pub api_token: Option<String>,

    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API token
    pub fn with_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for making API requests
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    api_token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(SdkError::config_error("base url must not be empty"));
        }

        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SdkError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.filter(|token| !token.is_empty()),
        })
    }

    /// Make a PUT request and report the response status.
    ///
    /// Non-success statuses are returned as-is; only a request that could not
    /// be completed yields an error.
    pub async fn put_for_status<B>(&self, path: &str, body: &B) -> SdkResult<StatusCode>
    where
        B: Serialize,
    {
        self.send_for_status(Method::PUT, path, body).await
    }

    async fn send_for_status<B>(&self, method: Method, path: &str, body: &B) -> SdkResult<StatusCode>
    where
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let request = self
            .client
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(body);

        let response = self.add_auth_header(request).send().await.map_err(|e| {
            error!("Request failed: {}", e);
            SdkError::from(e)
        })?;

        let status = response.status();
        debug!("Request to {} answered with {}", url, status);
        Ok(status)
    }

    /// Add authentication header to request
    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }
}
