//! Error types for the user client.

use thiserror::Error;

/// Every failure the UI can surface. None of them is fatal; each one
/// degrades to a visible message and a retry affordance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Name rejected locally, before any network call
    #[error("{0}")]
    Validation(String),

    /// Listing users failed (transport or non-2xx)
    #[error("{0}")]
    Fetch(String),

    /// Creating a user failed (transport, non-2xx or unusable body)
    #[error("{0}")]
    Create(String),

    /// Invalid startup configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The message as shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
