//! View state - the user list plus its loading/error/success axes
//!
//! Transitions are synchronous and return the deferred clears they need;
//! the caller hands those to a `Scheduler`.

use crate::app::scheduler::{ClearToken, MessageKind, ScheduledClear};
use crate::constants::{
    EMPTY_NAME_MSG, ERROR_DISPLAY, FETCH_FAILED_MSG, LONG_NAME_MSG, MAX_NAME_LEN, MIN_NAME_LEN,
    SHORT_NAME_MSG, SUCCESS_DISPLAY,
};
use crate::error::{ClientError, Result};
use crate::models::User;

/// A message slot whose every write bumps a generation counter
#[derive(Debug, Default, Clone)]
pub struct MessageSlot {
    message: Option<String>,
    generation: u64,
}

impl MessageSlot {
    pub fn get(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set(&mut self, kind: MessageKind, message: String) -> ClearToken {
        self.generation += 1;
        self.message = Some(message);
        ClearToken { kind, generation: self.generation }
    }

    fn clear(&mut self) {
        self.generation += 1;
        self.message = None;
    }

    /// Clear only if `generation` still names the current message
    fn expire(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }
}

/// Outcome of a create, handed back to the form
pub type CreateResult = std::result::Result<User, String>;

/// Client-held state driving what the UI shows
#[derive(Debug, Clone)]
pub struct ViewState {
    users: Vec<User>,
    loading: bool,
    error: MessageSlot,
    success: MessageSlot,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// State at mount: empty list, a fetch about to start
    pub fn new() -> Self {
        ViewState {
            users: Vec::new(),
            loading: true,
            error: MessageSlot::default(),
            success: MessageSlot::default(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.get()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.get()
    }

    // ========================
    // Refresh
    // ========================

    /// A fetch-all is about to be issued. Re-entrant.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    /// Apply a fetch-all outcome. Last response wins.
    pub fn finish_refresh(&mut self, result: Result<Vec<User>>) -> Option<ScheduledClear> {
        self.loading = false;
        match result {
            Ok(users) => {
                self.users = users;
                None
            }
            Err(e) => {
                self.users.clear();
                let token = self
                    .error
                    .set(MessageKind::Error, format!("{} ({})", FETCH_FAILED_MSG, e));
                Some(ScheduledClear { token, after: ERROR_DISPLAY })
            }
        }
    }

    // ========================
    // Create
    // ========================

    /// Validate a candidate name and, when valid, clear both messages.
    /// Returns the trimmed name to send.
    pub fn begin_create(&mut self, candidate: &str) -> Result<String> {
        let name = validate_name(candidate)?;
        self.error.clear();
        self.success.clear();
        Ok(name)
    }

    /// Apply a create outcome. Returns the result for the form and the
    /// clear to schedule for the message it set.
    pub fn finish_create(&mut self, result: Result<User>) -> (CreateResult, ScheduledClear) {
        match result {
            Ok(user) => {
                let token = self.success.set(
                    MessageKind::Success,
                    format!("User \"{}\" created successfully!", user.name),
                );
                self.users.insert(0, user.clone());
                (Ok(user), ScheduledClear { token, after: SUCCESS_DISPLAY })
            }
            Err(e) => {
                let message = e.message();
                let token = self.error.set(MessageKind::Error, message.clone());
                (Err(message), ScheduledClear { token, after: ERROR_DISPLAY })
            }
        }
    }

    // ========================
    // Timed clears
    // ========================

    /// Apply an expired token. Returns true if a message was removed.
    pub fn expire(&mut self, token: ClearToken) -> bool {
        match token.kind {
            MessageKind::Error => self.error.expire(token.generation),
            MessageKind::Success => self.success.expire(token.generation),
        }
    }
}

/// Trim and check a user name
pub fn validate_name(candidate: &str) -> Result<String> {
    let name = candidate.trim();
    if name.is_empty() {
        return Err(ClientError::Validation(EMPTY_NAME_MSG.to_string()));
    }
    let len = name.chars().count();
    if len < MIN_NAME_LEN {
        return Err(ClientError::Validation(SHORT_NAME_MSG.to_string()));
    }
    if len > MAX_NAME_LEN {
        return Err(ClientError::Validation(LONG_NAME_MSG.to_string()));
    }
    Ok(name.to_string())
}
