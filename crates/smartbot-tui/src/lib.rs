//! smartbot-tui: Terminal UI for the SmartBot demo assistant
//!
//! This crate provides the TUI layer for SmartBot, including:
//! - Welcome panel with capability and limitation cards
//! - Message list, suggestion chips and message input
//! - Headless mode for testing and automation

mod app;
mod controls;
mod event;
pub mod headless;
mod screens;
mod scroll;
#[cfg(test)]
pub mod test_utils;
mod text;
mod ui;

pub use app::{App, Focus};
pub use controls::Control;
pub use event::{Action, Event, EventHandler};
pub use smartbot_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use smartbot_engine::Config;
use std::io::{self, stdout};
use tokio::time::Instant;
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            ShowCursor
        );
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop until the user quits, tears the
/// conversation down and restores the terminal.
pub async fn run_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone());
    let mut events = EventHandler::new(config.tick_rate());

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    let dropped = app.shutdown();
    info!(
        session = app.conversation().session_id(),
        messages = app.state().messages().len(),
        dropped,
        "conversation closed"
    );

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            screens::draw(app, area, frame.buffer_mut());
        })?;

        if app.should_quit {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(Event::Key(key)) => app.handle_action(event::key_to_action(key)),
                Some(Event::Mouse(mouse)) => app.handle_action(event::mouse_to_action(mouse)),
                Some(Event::Paste(text)) => app.paste(&text),
                Some(Event::Tick) => app.tick(),
                // Terminal will handle resize automatically
                Some(Event::Resize(_, _)) => {}
                None => break,
            },
            () = reply_due(app.next_deadline()) => {}
        }

        app.deliver_due(Instant::now());
    }

    Ok(())
}

/// Resolve when the next reply is due. Never resolves with nothing pending.
async fn reply_due(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}


#[cfg(test)]
mod snapshot_tests {
    use super::*;
    use crate::screens::chat::ChatScreen;
    use crate::test_utils::*;
    use insta::assert_snapshot;
    use std::time::Duration;

    fn send(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_action_at(Action::Char(c), now);
        }
        app.handle_action_at(Action::Select, now);
    }

    #[test]
    fn test_snapshot_welcome_screen() {
        let app = create_test_app();
        let result = render_screen_to_string(&ChatScreen, &app);
        assert_snapshot!("welcome_screen", result);
    }

    #[test]
    fn test_snapshot_suggestion_chips() {
        let mut app = create_test_app();
        app.handle_action(Action::Back);
        let result = render_screen_to_string(&ChatScreen, &app);
        assert_snapshot!("suggestion_chips", result);
    }

    #[test]
    fn test_snapshot_reply_pending() {
        let mut app = create_test_app();
        send(&mut app, "hello", Instant::now());
        let result = render_screen_to_string(&ChatScreen, &app);
        assert_snapshot!("reply_pending", result);
    }

    #[test]
    fn test_snapshot_reply_delivered() {
        let mut app = create_test_app();
        let t0 = Instant::now();
        send(&mut app, "hello", t0);
        app.deliver_due(t0 + Duration::from_secs(1));
        let result = render_screen_to_string(&ChatScreen, &app);
        assert_snapshot!("reply_delivered", result);
    }

    #[test]
    fn test_snapshot_help_overlay() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        let mut terminal = create_test_terminal();
        terminal
            .draw(|frame| {
                let area = frame.area();
                screens::draw(&app, area, frame.buffer_mut());
            })
            .unwrap();
        let result = buffer_to_string(terminal.backend().buffer());
        assert_snapshot!("help_overlay", result);
    }
}
