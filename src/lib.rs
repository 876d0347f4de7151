//! # UserDesk TUI
//!
//! A terminal client for a serverless user-management API.
//!
//! ## Features
//! - List users, newest first
//! - Create users through a validated form
//! - Success/error feedback that clears itself after a few seconds
//! - Copy a user ID to the clipboard (OSC 52)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (view state machine)
//! - Network Layer (Tokio runtime, `UserApi`)

pub mod constants;
pub mod config;
pub mod error;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::{ApiConfig, Cli};
pub use error::ClientError;
pub use models::User;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor, ViewState};
pub use network::{HttpUserClient, NetworkActor, UserApi};
