//! HTTP client for the user service - the two remote operations

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::constants::CREATE_FAILED_MSG;
use crate::error::{ClientError, Result};
use crate::models::{ApiErrorBody, CreateUserRequest, User};

/// Remote operations against the user service.
///
/// Implementations never cache: every call goes to the network.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// `GET /users`. A missing or malformed body yields an empty list.
    async fn fetch_all(&self) -> Result<Vec<User>>;

    /// `POST /users` with `{name}`. Returns the created record.
    async fn create(&self, name: &str) -> Result<User>;
}

/// `UserApi` over HTTP with reqwest
#[derive(Clone)]
pub struct HttpUserClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpUserClient {
    pub fn new(config: ApiConfig) -> Self {
        HttpUserClient {
            http: create_client(),
            config,
        }
    }
}

#[async_trait]
impl UserApi for HttpUserClient {
    async fn fetch_all(&self) -> Result<Vec<User>> {
        let url = self.config.users_url();
        tracing::debug!(url = %url, "Fetching users");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Fetch(describe_transport_error(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Fetch(format!(
                "Server returned {}",
                status.as_u16()
            )));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ClientError::Fetch(format!("Error reading body: {}", e)))?;

        match envelope_body::<Vec<User>>(&text) {
            Some(users) => Ok(users),
            None => {
                tracing::warn!(status = status.as_u16(), "Users response has no usable body; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn create(&self, name: &str) -> Result<User> {
        let url = self.config.users_url();
        tracing::debug!(url = %url, name, "Creating user");

        let resp = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&CreateUserRequest { name })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %describe_transport_error(&e), "Create request failed");
                ClientError::Create(CREATE_FAILED_MSG.to_string())
            })?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| CREATE_FAILED_MSG.to_string());
            tracing::warn!(status = status.as_u16(), message = %message, "Create rejected");
            return Err(ClientError::Create(message));
        }

        envelope_body::<User>(&text).ok_or_else(|| {
            tracing::warn!(status = status.as_u16(), "Create response has no usable body");
            ClientError::Create(CREATE_FAILED_MSG.to_string())
        })
    }
}

/// Extract and decode the designated `body` field of a response envelope.
fn envelope_body<T: DeserializeOwned>(text: &str) -> Option<T> {
    let mut value: serde_json::Value = serde_json::from_str(text).ok()?;
    let body = value.get_mut("body")?.take();
    if body.is_null() {
        return None;
    }
    serde_json::from_value(body).ok()
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out (30s)".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(format!("userdesk/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
