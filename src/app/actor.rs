//! App actor - message loop processing UI events, network responses and
//! message expiry

use tokio::sync::mpsc;

use crate::app::clipboard::ClipboardWriter;
use crate::app::scheduler::{ClearToken, Scheduler};
use crate::app::state::AppState;
use crate::constants::CREATE_FAILED_MSG;
use crate::error::ClientError;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that owns the state and applies every transition in order
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
    scheduler: Box<dyn Scheduler>,
    clipboard: Box<dyn ClipboardWriter>,
}

impl AppActor {
    pub fn new(
        api_url: impl Into<String>,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
        scheduler: Box<dyn Scheduler>,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        AppActor {
            state: AppState::new(api_url),
            network_tx,
            render_tx,
            scheduler,
            clipboard,
        }
    }

    /// Run the actor message loop. Issues the initial fetch on start.
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
        mut expire_rx: mpsc::UnboundedReceiver<ClearToken>,
    ) {
        let cmd = self.state.refresh();
        self.dispatch(cmd);
        self.publish();

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    self.publish();
                }
                Some(response) = net_rx.recv() => {
                    tracing::debug!(id = response.id(), ok = response.is_success(), "Response received");
                    self.apply_response(response);
                    self.publish();
                }
                Some(token) = expire_rx.recv() => {
                    if self.state.expire_message(token) {
                        tracing::debug!(kind = ?token.kind, "Message expired");
                        self.publish();
                    }
                }
                else => break,
            }
        }
    }

    fn apply_response(&mut self, response: NetworkResponse) {
        if let Some(clear) = self.state.handle_response(response) {
            self.scheduler.schedule(clear);
        }
    }

    /// Hand a command to the network actor. If it is gone, the pending
    /// refresh or create is settled here as a failure.
    fn dispatch(&mut self, cmd: NetworkCommand) {
        let Err(mpsc::error::SendError(cmd)) = self.network_tx.send(cmd) else {
            return;
        };
        tracing::warn!(command = ?cmd, "Network actor unavailable");
        let response = match cmd {
            NetworkCommand::FetchUsers { id } => NetworkResponse::UsersFetched {
                id,
                result: Err(ClientError::Fetch("Network worker is not running".into())),
            },
            NetworkCommand::CreateUser { id, .. } => NetworkResponse::UserCreated {
                id,
                result: Err(ClientError::Create(CREATE_FAILED_MSG.to_string())),
            },
            NetworkCommand::Shutdown => return,
        };
        self.apply_response(response);
    }

    fn publish(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // User list
            UiEvent::Refresh => {
                let cmd = self.state.refresh();
                self.dispatch(cmd);
            }
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::CopySelectedId => {
                if let Some(id) = self.state.selected_user_id() {
                    // Best-effort
                    match self.clipboard.write_text(&id) {
                        Ok(()) => tracing::info!(user_id = %id, "Copied to clipboard"),
                        Err(e) => tracing::debug!(error = %e, "Clipboard write failed"),
                    }
                }
            }

            // Create form
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::ClearForm => self.state.clear_form(),
            UiEvent::SubmitCreate => {
                match self.state.submit_create() {
                    Some(cmd) => self.dispatch(cmd),
                    None => {
                        tracing::debug!(error = ?self.state.form.local_error, "Create not sent");
                    }
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
