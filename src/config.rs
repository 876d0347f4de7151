//! Startup configuration: command line flags with environment fallback.

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_LOG_FILE};
use crate::error::{ClientError, Result};

/// Terminal client for a serverless user-management API
#[derive(Parser, Debug, Clone)]
#[command(name = "userdesk", version, about)]
pub struct Cli {
    /// Base URL of the user service (without the trailing /users)
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// File that receives the application log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

/// Resolved API location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        let url = raw.trim().trim_end_matches('/').to_string();

        if url.is_empty() {
            return Err(ClientError::Config("URL cannot be empty".into()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "URL must start with http:// or https:// (got {})",
                url
            )));
        }

        Ok(ApiConfig { base_url: url })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Self::new(cli.api_url.clone())?;
        if config.is_placeholder() {
            tracing::warn!(
                url = %config.base_url,
                "Using placeholder API URL; set --api-url or {}",
                API_URL_ENV
            );
        }
        Ok(config)
    }

    /// Full URL of the users collection
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn is_placeholder(&self) -> bool {
        self.base_url == DEFAULT_API_URL
    }
}
