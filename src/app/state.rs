//! App state - pure data structure with no I/O logic

use crate::app::form::CreateForm;
use crate::app::view_state::ViewState;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;

/// Main application state - pure data, no I/O
pub struct AppState {
    pub view: ViewState,
    pub form: CreateForm,

    // UI state
    pub input_mode: InputMode,
    pub selected_user: usize,
    pub show_help: bool,

    pub api_url: String,
    pub next_request_id: u64,
}

impl AppState {
    pub fn new(api_url: impl Into<String>) -> Self {
        AppState {
            view: ViewState::new(),
            form: CreateForm::new(),
            input_mode: InputMode::Normal,
            selected_user: 0,
            show_help: false,
            api_url: api_url.into(),
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            users: self.view.users().to_vec(),
            loading: self.view.loading(),
            error: self.view.error().map(str::to_string),
            success: self.view.success().map(str::to_string),
            input: self.form.input.clone(),
            cursor_position: self.form.cursor,
            submitting: self.form.submitting,
            local_error: self.form.local_error.clone(),
            input_mode: self.input_mode,
            selected_user: self.selected_user,
            show_help: self.show_help,
            api_url: self.api_url.clone(),
        }
    }
}
