//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_API_URL;
use crate::messages::ui_events::InputMode;
use crate::models::User;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // View state
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,

    // Create form
    pub input: String,
    pub cursor_position: usize,
    pub submitting: bool,
    pub local_error: Option<String>,
    pub input_mode: InputMode,

    // User list
    pub selected_user: usize,

    // Popups
    pub show_help: bool,

    // Footer
    pub api_url: String,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            users: Vec::new(),
            loading: true,
            error: None,
            success: None,
            input: String::new(),
            cursor_position: 0,
            submitting: false,
            local_error: None,
            input_mode: InputMode::Normal,
            selected_user: 0,
            show_help: false,
            api_url: String::from(DEFAULT_API_URL),
        }
    }
}

impl RenderState {
    /// Loaded and nothing to show
    pub fn is_empty_list(&self) -> bool {
        !self.loading && self.users.is_empty()
    }
}
