//! UserDesk TUI - Actor-based client for the user service
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use userdesk_tui::app::{AppActor, ClearToken, Osc52Clipboard, TokioScheduler};
use userdesk_tui::config::{ApiConfig, Cli};
use userdesk_tui::messages::ui_events::key_to_ui_event;
use userdesk_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use userdesk_tui::network::{HttpUserClient, NetworkActor};
use userdesk_tui::ui::draw_ui;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging to file; the terminal belongs to the UI
    let dir = cli
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| ".".into());
    let file_name = cli
        .log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "userdesk.log".into());
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ApiConfig::from_cli(&cli)?;
    tracing::info!(url = %config.base_url, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();
    let (expire_tx, expire_rx) = mpsc::unbounded_channel::<ClearToken>();

    // Spawn network actor
    let api = Arc::new(HttpUserClient::new(config.clone()));
    let network_actor = NetworkActor::new(api, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(
        config.base_url.clone(),
        net_cmd_tx,
        render_tx,
        Box::new(TokioScheduler::new(expire_tx)),
        Box::new(Osc52Clipboard::stdout()),
    );
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx, expire_rx));

    // Run UI loop (synchronous with async polling)
    let initial = RenderState {
        api_url: config.base_url.clone(),
        ..RenderState::default()
    };
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx, initial).await?;

    tracing::info!("Shutting down");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
    initial: RenderState,
) -> anyhow::Result<()> {
    let mut current_state = initial;

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.input_mode, current_state.show_help) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }

        // Yield so the actors make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
