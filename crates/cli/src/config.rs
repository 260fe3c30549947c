//! Configuration management for the Hodei CLI

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use hodei_sdk_core::ClientConfig;

use crate::cli::GlobalArgs;
use crate::error::ConfigError;
use crate::ui::OutputFormat;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_API_URL: &str = "HODEI_API_URL";
const ENV_TOKEN: &str = "HODEI_TOKEN";
const ENV_TIMEOUT_SECS: &str = "HODEI_TIMEOUT_SECS";
const ENV_OUTPUT: &str = "HODEI_OUTPUT";

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Orchestration service endpoint
    pub api_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
    pub output: OutputFormat,
    pub quiet: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output: OutputFormat::Text,
            quiet: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables, then apply flags
    pub fn load(args: &GlobalArgs) -> Result<Self, ConfigError> {
        Self::load_from(env::vars().collect(), args)
    }

    fn load_from(mut vars: HashMap<String, String>, args: &GlobalArgs) -> Result<Self, ConfigError> {
        // Flags win, so the variables they replace are never parsed.
        if args.timeout.is_some() {
            vars.remove(ENV_TIMEOUT_SECS);
        }
        if args.output.is_some() {
            vars.remove(ENV_OUTPUT);
        }
        Self::from_vars(vars)?.with_overrides(args)
    }

    fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = CliConfig::default();

        if let Some(url) = vars.get(ENV_API_URL).filter(|v| !v.is_empty()) {
            config.api_url = url.clone();
        }

        config.api_token = vars.get(ENV_TOKEN).filter(|v| !v.is_empty()).cloned();

        if let Some(timeout) = vars.get(ENV_TIMEOUT_SECS) {
            config.timeout = parse_timeout(timeout, ENV_TIMEOUT_SECS)?;
        }

        if let Some(output) = vars.get(ENV_OUTPUT) {
            config.output = output
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("{}={}", ENV_OUTPUT, output)))?;
        }

        Ok(config)
    }

    /// Apply command line flags on top of the environment
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Result<Self, ConfigError> {
        if let Some(url) = &args.api_url {
            validate_api_url(url)?;
            self.api_url = url.clone();
        }
        if let Some(token) = &args.token {
            self.api_token = Some(token.clone()).filter(|t| !t.is_empty());
        }
        if let Some(secs) = args.timeout {
            if secs == 0 {
                return Err(ConfigError::Invalid("--timeout must be greater than 0".to_string()));
            }
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(output) = args.output {
            self.output = output;
        }
        self.quiet = self.quiet || args.quiet;
        Ok(self)
    }

    /// Settings for the SDK HTTP client
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone()).with_timeout(self.timeout);
        match &self.api_token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }
}

fn validate_api_url(url: &str) -> Result<(), ConfigError> {
    if url.trim().is_empty() {
        return Err(ConfigError::Invalid("--api-url must not be empty".to_string()));
    }
    Ok(())
}

fn parse_timeout(value: &str, name: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid(format!("{}={}", name, value))),
    }
}
