//! Create-user form - ephemeral input state owned by the presentation side

use crate::app::view_state::{validate_name, CreateResult};
use crate::constants::MAX_NAME_LEN;

#[derive(Debug, Default, Clone)]
pub struct CreateForm {
    pub input: String,
    /// Byte offset into `input`, always on a char boundary
    pub cursor: usize,
    pub submitting: bool,
    pub local_error: Option<String>,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_char(&mut self, c: char) {
        if self.submitting || c.is_control() || self.input.chars().count() >= MAX_NAME_LEN {
            return;
        }
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.submitting || self.cursor == 0 {
            return;
        }
        let prev = self.input[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.input.remove(prev);
        self.cursor = prev;
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.input[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor = self.input[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.input.len());
        }
    }

    /// Empty the field and drop the local error. Ignored while submitting.
    pub fn clear(&mut self) {
        if self.submitting {
            return;
        }
        self.input.clear();
        self.cursor = 0;
        self.local_error = None;
    }

    /// Validate the current input. On success marks the form as submitting
    /// and returns the trimmed name; otherwise records the local error.
    /// A submit while one is outstanding is ignored.
    pub fn submit(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }
        match validate_name(&self.input) {
            Ok(name) => {
                self.local_error = None;
                self.submitting = true;
                Some(name)
            }
            Err(e) => {
                self.local_error = Some(e.message());
                None
            }
        }
    }

    /// Record a rejection that happened after `submit` (e.g. by the view state)
    pub fn reject(&mut self, message: String) {
        self.submitting = false;
        self.local_error = Some(message);
    }

    /// Apply the create outcome: reset on success, keep input on failure
    pub fn finish(&mut self, result: &CreateResult) {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.input.clear();
                self.cursor = 0;
                self.local_error = None;
            }
            Err(message) => self.local_error = Some(message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EMPTY_NAME_MSG, SHORT_NAME_MSG};
    use crate::models::User;

    fn typed(text: &str) -> CreateForm {
        let mut form = CreateForm::new();
        text.chars().for_each(|c| form.enter_char(c));
        form
    }

    #[test]
    fn test_submit_trims() {
        let mut form = typed("  Al ");
        assert_eq!(form.submit(), Some("Al".to_string()));
        assert!(form.submitting);
        assert!(form.local_error.is_none());
    }

    #[test]
    fn test_submit_rejects_short_and_empty() {
        let mut form = typed("A");
        assert_eq!(form.submit(), None);
        assert_eq!(form.local_error.as_deref(), Some(SHORT_NAME_MSG));
        assert!(!form.submitting);

        let mut form = typed("   ");
        assert_eq!(form.submit(), None);
        assert_eq!(form.local_error.as_deref(), Some(EMPTY_NAME_MSG));
    }

    #[test]
    fn test_double_submit_ignored() {
        let mut form = typed("Al");
        assert!(form.submit().is_some());
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_finish_success_resets() {
        let mut form = typed("Al");
        form.submit();
        form.finish(&Ok(User::new("u1", "Al", "2024-01-01T00:00:00Z")));
        assert!(form.input.is_empty());
        assert_eq!(form.cursor, 0);
        assert!(!form.submitting);
    }

    #[test]
    fn test_finish_failure_keeps_input() {
        let mut form = typed("Al");
        form.submit();
        form.finish(&Err("Name already taken".into()));
        assert_eq!(form.input, "Al");
        assert_eq!(form.local_error.as_deref(), Some("Name already taken"));
        assert!(!form.submitting);
    }

    #[test]
    fn test_input_capped() {
        let form = typed(&"x".repeat(MAX_NAME_LEN + 10));
        assert_eq!(form.input.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_cursor_editing_multibyte() {
        let mut form = typed("Zoë");
        form.move_cursor_left();
        form.enter_char('e');
        assert_eq!(form.input, "Zoeë");
        form.move_cursor_right();
        form.delete_char();
        assert_eq!(form.input, "Zoe");
        assert_eq!(form.cursor, form.input.len());
    }

    #[test]
    fn test_clear() {
        let mut form = typed("A");
        form.submit();
        form.clear();
        assert!(form.input.is_empty());
        assert!(form.local_error.is_none());
    }
}
