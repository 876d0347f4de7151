//! Network messages - communication between App and Network layers

use crate::error::ClientError;
use crate::models::User;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkCommand {
    /// List all users
    FetchUsers { id: u64 },
    /// Create a user with an already validated, trimmed name
    CreateUser { id: u64, name: String },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    UsersFetched {
        id: u64,
        result: Result<Vec<User>, ClientError>,
    },
    UserCreated {
        id: u64,
        result: Result<User, ClientError>,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::UsersFetched { id, .. } => *id,
            NetworkResponse::UserCreated { id, .. } => *id,
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            NetworkResponse::UsersFetched { result, .. } => result.is_ok(),
            NetworkResponse::UserCreated { result, .. } => result.is_ok(),
        }
    }
}
