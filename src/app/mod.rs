//! App layer - central state management and command processing
//!
//! The App actor receives UI events, network responses and expired message
//! tokens, updates state, and emits network commands and render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod view_state;
pub mod form;
pub mod scheduler;
pub mod clipboard;

pub use state::AppState;
pub use actor::AppActor;
pub use view_state::ViewState;
pub use form::CreateForm;
pub use scheduler::{ClearToken, MessageKind, ScheduledClear, Scheduler, TokioScheduler};
pub use clipboard::{ClipboardWriter, Osc52Clipboard};
