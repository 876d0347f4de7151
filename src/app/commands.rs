//! Command handlers - business logic for processing UI events and responses

use crate::app::scheduler::{ClearToken, ScheduledClear};
use crate::app::AppState;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // User list
    // ========================

    /// Refresh transition. No in-flight guard.
    pub fn refresh(&mut self) -> NetworkCommand {
        self.view.begin_refresh();
        NetworkCommand::FetchUsers { id: self.next_id() }
    }

    pub fn select_next(&mut self) {
        let len = self.view.users().len();
        if len > 0 {
            self.selected_user = (self.selected_user + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.view.users().len();
        if len > 0 {
            self.selected_user = self.selected_user.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn selected_user_id(&self) -> Option<String> {
        self.view.users().get(self.selected_user).map(|u| u.id.clone())
    }

    fn clamp_selection(&mut self) {
        let len = self.view.users().len();
        if self.selected_user >= len {
            self.selected_user = len.saturating_sub(1);
        }
    }

    // ========================
    // Create form
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.form.cursor = self.form.input.len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        self.form.enter_char(c);
    }

    pub fn delete_char(&mut self) {
        self.form.delete_char();
    }

    pub fn move_cursor_left(&mut self) {
        self.form.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.form.move_cursor_right();
    }

    pub fn clear_form(&mut self) {
        self.form.clear();
    }

    /// Create transition: the form validates first, then the view state.
    /// Returns the command to send only when both accept the name.
    pub fn submit_create(&mut self) -> Option<NetworkCommand> {
        let name = self.form.submit()?;
        match self.view.begin_create(&name) {
            Ok(name) => Some(NetworkCommand::CreateUser { id: self.next_id(), name }),
            Err(e) => {
                self.form.reject(e.message());
                None
            }
        }
    }

    // ========================
    // Network responses
    // ========================

    /// Apply a network response; returns the message clear to schedule, if any
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<ScheduledClear> {
        match response {
            NetworkResponse::UsersFetched { result, .. } => {
                let clear = self.view.finish_refresh(result);
                self.clamp_selection();
                clear
            }
            NetworkResponse::UserCreated { result, .. } => {
                let (outcome, clear) = self.view.finish_create(result);
                self.form.finish(&outcome);
                if outcome.is_ok() {
                    self.selected_user = 0;
                }
                Some(clear)
            }
        }
    }

    pub fn expire_message(&mut self, token: ClearToken) -> bool {
        self.view.expire(token)
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SHORT_NAME_MSG;
    use crate::error::ClientError;
    use crate::models::User;

    fn state_with(users: Vec<User>) -> AppState {
        let mut state = AppState::new("http://localhost:3000");
        let cmd = state.refresh();
        state.handle_response(NetworkResponse::UsersFetched { id: cmd_id(&cmd), result: Ok(users) });
        state
    }

    fn cmd_id(cmd: &NetworkCommand) -> u64 {
        match cmd {
            NetworkCommand::FetchUsers { id } | NetworkCommand::CreateUser { id, .. } => *id,
            NetworkCommand::Shutdown => 0,
        }
    }

    fn type_name(state: &mut AppState, name: &str) {
        state.start_editing();
        name.chars().for_each(|c| state.enter_char(c));
    }

    #[test]
    fn test_refresh_issues_fresh_ids() {
        let mut state = AppState::new("http://localhost:3000");
        let first = state.refresh();
        let second = state.refresh();
        assert_ne!(cmd_id(&first), cmd_id(&second));
        assert!(state.view.loading());
    }

    #[test]
    fn test_short_name_sends_nothing() {
        let mut state = state_with(vec![]);
        type_name(&mut state, "A");
        assert!(state.submit_create().is_none());
        assert_eq!(state.form.local_error.as_deref(), Some(SHORT_NAME_MSG));
        assert!(!state.form.submitting);
    }

    #[test]
    fn test_valid_name_sends_trimmed() {
        let mut state = state_with(vec![]);
        type_name(&mut state, "  Al ");
        match state.submit_create() {
            Some(NetworkCommand::CreateUser { name, .. }) => assert_eq!(name, "Al"),
            other => panic!("expected create command, got {:?}", other),
        }
        assert!(state.form.submitting);
    }

    #[test]
    fn test_create_response_resets_form_and_selects_new_user() {
        let mut state = state_with(vec![User::new("u0", "Bo", "2024-01-01T00:00:00Z")]);
        state.select_next();
        type_name(&mut state, "Al");
        let cmd = state.submit_create().unwrap();

        let clear = state.handle_response(NetworkResponse::UserCreated {
            id: cmd_id(&cmd),
            result: Ok(User::new("u1", "Al", "2024-01-02T00:00:00Z")),
        });

        assert!(clear.is_some());
        assert!(state.form.input.is_empty());
        assert_eq!(state.selected_user_id().as_deref(), Some("u1"));
        assert_eq!(state.view.users().len(), 2);
    }

    #[test]
    fn test_create_failure_shows_both_errors() {
        let mut state = state_with(vec![]);
        type_name(&mut state, "Al");
        let cmd = state.submit_create().unwrap();
        state.handle_response(NetworkResponse::UserCreated {
            id: cmd_id(&cmd),
            result: Err(ClientError::Create("Name already taken".into())),
        });

        assert_eq!(state.form.local_error.as_deref(), Some("Name already taken"));
        assert_eq!(state.view.error(), Some("Name already taken"));
        assert_eq!(state.form.input, "Al");
    }

    #[test]
    fn test_selection_wraps_and_clamps() {
        let users = vec![
            User::new("a", "Ann", "2024-01-03T00:00:00Z"),
            User::new("b", "Bob", "2024-01-02T00:00:00Z"),
        ];
        let mut state = state_with(users);
        state.select_prev();
        assert_eq!(state.selected_user, 1);
        state.select_next();
        assert_eq!(state.selected_user, 0);

        state.select_prev();
        let cmd = state.refresh();
        state.handle_response(NetworkResponse::UsersFetched {
            id: cmd_id(&cmd),
            result: Err(ClientError::Fetch("down".into())),
        });
        assert_eq!(state.selected_user, 0);
        assert!(state.selected_user_id().is_none());
    }
}
