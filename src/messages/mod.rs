//! Message types for inter-layer communication in the actor-based architecture.
//!
//! UI events flow into the App actor, commands flow out to the Network actor,
//! responses come back, and render snapshots go to the UI loop.

pub mod ui_events;
pub mod network;
pub mod render;

pub use ui_events::UiEvent;
pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
