//! Terminal rendering of a `RenderState`

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION, MAX_NAME_LEN};
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::User;

/// Draw the whole screen
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let message_lines = state.error.iter().count() + state.success.iter().count();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                    // Title
            Constraint::Length(message_lines as u16), // Global messages
            Constraint::Length(4),                    // Create form
            Constraint::Length(1),                    // Statistics
            Constraint::Min(3),                       // User list
            Constraint::Length(1),                    // Footer
        ])
        .split(area);

    draw_title(f, chunks[0]);
    draw_messages(f, state, chunks[1]);
    draw_form(f, state, chunks[2]);
    draw_stats(f, state, chunks[3]);
    draw_user_list(f, state, chunks[4]);
    draw_footer(f, state, chunks[5]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::raw(format!(" v{}  Serverless User Management", APP_VERSION)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_messages(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut lines = Vec::new();
    if let Some(error) = &state.error {
        lines.push(Line::from(vec![
            Span::styled(" Error: ", Style::default().fg(Color::Red).bold()),
            Span::styled(error.as_str(), Style::default().fg(Color::Red)),
        ]));
    }
    if let Some(success) = &state.success {
        lines.push(Line::from(vec![
            Span::styled(" Success: ", Style::default().fg(Color::Green).bold()),
            Span::styled(success.as_str(), Style::default().fg(Color::Green)),
        ]));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let editing = state.input_mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let title = if state.submitting {
        " Create New User - Creating... ".to_string()
    } else {
        " Create New User (e:edit Enter:create c:clear) ".to_string()
    };

    let input_line = if state.input.is_empty() && !editing {
        Line::from(Span::styled(
            "Enter user name (e.g., John Doe)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(state.input.as_str())
    };

    let hint_line = match &state.local_error {
        Some(err) => Line::from(vec![
            Span::styled("Validation Error: ", Style::default().fg(Color::Red).bold()),
            Span::styled(err.as_str(), Style::default().fg(Color::Red)),
        ]),
        None => Line::from(Span::styled(
            format!("Enter a name between 2-{} characters", MAX_NAME_LEN),
            Style::default().fg(Color::DarkGray),
        )),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    f.render_widget(Paragraph::new(vec![input_line, hint_line]).block(block), area);

    if editing {
        let typed = state.input[..state.cursor_position.min(state.input.len())].chars().count() as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + typed + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_stats(f: &mut Frame, state: &RenderState, area: Rect) {
    let latest = state
        .users
        .first()
        .map(User::created_day)
        .unwrap_or_else(|| "N/A".to_string());
    let (api_mark, api_color) = if state.users.is_empty() {
        ("✗", Color::Red)
    } else {
        ("✓", Color::Green)
    };

    let line = Line::from(vec![
        Span::raw(format!(" Total Users: {}", state.users.len())),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("Latest User Date: {}", latest)),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::raw("API Status: "),
        Span::styled(api_mark, Style::default().fg(api_color).bold()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_user_list(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.loading {
        let block = Block::default().borders(Borders::ALL).title(" User List ");
        let loading = Paragraph::new("\n Loading users...")
            .style(Style::default().fg(Color::Cyan))
            .block(block);
        f.render_widget(loading, area);
        return;
    }

    if state.is_empty_list() {
        let block = Block::default().borders(Borders::ALL).title(" User List (r:refresh) ");
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No Users Found", Style::default().bold())),
            Line::from("Create your first user using the form above!"),
            Line::from(""),
            Line::from(Span::styled("Press 'r' to refresh the list", Style::default().fg(Color::Cyan))),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let count = state.users.len();
    let title = format!(
        " User List - Showing {} user{} (sorted by creation date, newest first) ",
        count,
        if count == 1 { "" } else { "s" }
    );

    let items: Vec<ListItem> = state
        .users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::Cyan)),
                    Span::styled(user.name.as_str(), Style::default().bold()),
                ]),
                Line::from(vec![
                    Span::styled("     ID: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(user.id.as_str()),
                    Span::styled("   Created: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(user.formatted_created_at()),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(Line::from(" ↑/↓:select  y:copy ID  r:refresh ").right_aligned()),
        )
        .highlight_style(Style::default().fg(Color::Yellow).bold());

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_user.min(count - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.input_mode == InputMode::Editing {
        " Enter:create | Esc:stop editing "
    } else {
        " r:refresh | e:edit name | ?:help | q:quit "
    };
    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" API URL: {}", state.api_url), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 USERDESK - Keyboard Shortcuts

 USERS
   r / F5             Refresh the user list
   ↑ / ↓              Select a user
   y                  Copy selected user ID

 CREATE
   e / i / Enter      Edit the name field
   Enter (editing)    Create user
   Esc                Stop editing
   c                  Clear the form

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded(users: Vec<User>) -> RenderState {
        RenderState {
            users,
            loading: false,
            ..RenderState::default()
        }
    }

    #[test]
    fn test_loading_view() {
        let screen = render(&RenderState::default());
        assert!(screen.contains("Loading users..."));
        assert!(!screen.contains("No Users Found"));
    }

    #[test]
    fn test_empty_state() {
        let screen = render(&loaded(vec![]));
        assert!(screen.contains("No Users Found"));
        assert!(screen.contains("Press 'r' to refresh the list"));
        assert!(screen.contains("Total Users: 0"));
        assert!(screen.contains("Latest User Date: N/A"));
    }

    #[test]
    fn test_user_rows() {
        let screen = render(&loaded(vec![
            User::new("u1", "Al", "2024-01-01T00:00:00Z"),
            User::new("u0", "Bo", "garbage"),
        ]));
        assert!(screen.contains("Showing 2 users"));
        assert!(screen.contains("1. Al"));
        assert!(screen.contains("ID: u1"));
        assert!(screen.contains("Created: Jan 1, 2024, 12:00:00 AM"));
        assert!(screen.contains("Created: Invalid Date"));
        assert!(screen.contains("Latest User Date: Jan 1"));
    }

    #[test]
    fn test_rows_decoded_with_non_string_dates() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id":"u1","name":"Al","createdAt":"2024-01-01T00:00:00Z"},
                {"id":"u2","name":"Bo","createdAt":null},
                {"id":"u3","name":"Cy","createdAt":1704067200000}]"#,
        )
        .unwrap();
        let screen = render(&loaded(users));
        assert!(screen.contains("Showing 3 users"));
        assert!(screen.contains("ID: u2"));
        assert!(screen.contains("ID: u3"));
        assert_eq!(screen.matches("Created: Invalid Date").count(), 2);
    }

    #[test]
    fn test_single_user_count_wording() {
        let screen = render(&loaded(vec![User::new("u1", "Al", "2024-01-01T00:00:00Z")]));
        assert!(screen.contains("Showing 1 user (sorted"));
    }

    #[test]
    fn test_messages_and_local_error() {
        let state = RenderState {
            error: Some("Name already taken".into()),
            success: Some("User \"Al\" created successfully!".into()),
            local_error: Some("Name must be at least 2 characters long".into()),
            ..loaded(vec![])
        };
        let screen = render(&state);
        assert!(screen.contains("Error: Name already taken"));
        assert!(screen.contains("Success: User \"Al\" created successfully!"));
        assert!(screen.contains("Validation Error: Name must be at least 2 characters long"));
    }

    #[test]
    fn test_footer_shows_api_url_and_help() {
        let state = RenderState {
            api_url: "http://localhost:3000".into(),
            show_help: true,
            ..loaded(vec![])
        };
        let screen = render(&state);
        assert!(screen.contains("API URL: http://localhost:3000"));
        assert!(screen.contains("Keyboard Shortcuts"));
    }
}
