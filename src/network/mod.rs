//! Network layer - user service calls
//!
//! The Network actor receives commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{HttpUserClient, UserApi};
