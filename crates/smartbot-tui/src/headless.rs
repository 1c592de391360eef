//! Headless mode for the SmartBot TUI.
//!
//! Runs the TUI without a real terminal, for end-to-end tests and
//! automation. Actions are sent via channels and screen state is captured
//! after each render.

use crate::app::App;
use crate::event::Action;
use crate::screens;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use smartbot_engine::Config;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Number of messages in the conversation.
    pub message_count: usize,
    /// Whether the welcome panel is on screen.
    pub welcome_visible: bool,
    /// Replies scheduled but not yet delivered.
    pub pending_replies: usize,
    /// Whether the TUI should quit.
    pub should_quit: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
}

impl HeadlessState {
    fn capture(app: &App, screen_contents: String) -> Self {
        Self {
            screen_contents,
            message_count: app.state().messages().len(),
            welcome_visible: app.state().is_welcome_visible(),
            pending_replies: app.conversation().pending_replies(),
            should_quit: app.should_quit,
            show_help: app.show_help,
        }
    }
}

/// Handle to control a headless TUI instance.
pub struct HeadlessHandle {
    action_tx: mpsc::UnboundedSender<Action>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action to the TUI.
    ///
    /// Returns `true` if the action was sent successfully.
    pub fn send_action(&self, action: Action) -> bool {
        self.action_tx.send(action).is_ok()
    }

    /// Type `text` into the input, one character at a time.
    pub fn type_text(&self, text: &str) -> bool {
        text.chars().all(|c| self.send_action(Action::Char(c)))
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(&mut self, condition: F, timeout: Duration) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return None;
            }

            match tokio::time::timeout(remaining, self.state_rx.changed()).await {
                Ok(Ok(())) => {}
                // Timed out, or the TUI task ended.
                Ok(Err(_)) | Err(_) => return None,
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(&mut self, text: &str, timeout: Duration) -> Option<HeadlessState> {
        self.wait_for(|s| s.screen_contents.contains(text), timeout)
            .await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50,
        }
    }
}

/// Run the TUI in headless mode.
///
/// Returns a handle to control the TUI and a join handle for the background
/// task. The task resolves to the number of replies dropped at teardown.
///
/// ```ignore
/// let (mut handle, task) = run_tui_headless(Config::default(), HeadlessConfig::default());
/// handle.type_text("hello");
/// handle.send_action(Action::Select);
/// handle.wait_for_text("I'm processing your request", Duration::from_secs(2)).await;
/// handle.send_action(Action::Quit);
/// task.await.unwrap();
/// ```
pub fn run_tui_headless(
    config: Config,
    headless: HeadlessConfig,
) -> (HeadlessHandle, JoinHandle<Result<usize, String>>) {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let task = tokio::spawn(async move {
        run_headless_loop(config, headless, action_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle {
        action_tx,
        state_rx,
    };

    (handle, task)
}

async fn run_headless_loop(
    config: Config,
    headless: HeadlessConfig,
    mut action_rx: mpsc::UnboundedReceiver<Action>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    let backend = TestBackend::new(headless.width, headless.height);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let tick = Duration::from_millis(headless.tick_rate_ms.max(1));

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            screens::draw(&app, area, frame.buffer_mut());
        })?;

        let screen_contents = buffer_to_string(terminal.backend().buffer());
        let _ = state_tx.send(HeadlessState::capture(&app, screen_contents));

        if app.should_quit {
            break;
        }

        // Wait for an action, the next reply, or a tick.
        let wake = app
            .next_deadline()
            .map_or(Instant::now() + tick, |due| due.min(Instant::now() + tick));
        let action = tokio::select! {
            action = action_rx.recv() => match action {
                Some(action) => action,
                None => break,
            },
            () = tokio::time::sleep_until(wake) => {
                app.tick();
                Action::None
            }
        };

        app.handle_action(action);
        app.deliver_due(Instant::now());
    }

    Ok(app.shutdown())
}

/// Convert a terminal buffer to a string representation.
fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbot_engine::ACKNOWLEDGMENT;

    const WAIT: Duration = Duration::from_secs(5);

    fn fast_config() -> Config {
        Config {
            reply_delay_ms: 30,
            ..Config::default()
        }
    }

    fn wide() -> HeadlessConfig {
        HeadlessConfig {
            width: 120,
            height: 30,
            tick_rate_ms: 10,
        }
    }

    #[test]
    fn test_headless_state_default() {
        let state = HeadlessState::default();
        assert!(!state.should_quit);
        assert!(!state.show_help);
        assert_eq!(state.message_count, 0);
        assert!(state.screen_contents.is_empty());
    }

    #[test]
    fn test_headless_config_default() {
        let config = HeadlessConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.tick_rate_ms, 50);
    }

    #[tokio::test]
    async fn test_typed_message_gets_acknowledged() {
        let (mut handle, task) = run_tui_headless(fast_config(), wide());

        let state = handle
            .wait_for_text("Welcome to SmartBot", WAIT)
            .await
            .expect("welcome panel");
        assert!(state.welcome_visible);

        assert!(handle.type_text("hello"));
        handle.send_action(Action::Select);

        let state = handle
            .wait_for(|s| s.message_count == 2, WAIT)
            .await
            .expect("reply delivered");
        assert!(!state.welcome_visible);
        assert_eq!(state.pending_replies, 0);

        // Same fragment the `run_tui_headless` example waits for.
        let fragment = "I'm processing your request";
        assert!(ACKNOWLEDGMENT.starts_with(fragment));
        let state = handle
            .wait_for_text(fragment, WAIT)
            .await
            .expect("reply on screen");
        assert!(state.screen_contents.contains("hello"));

        handle.send_action(Action::Quit);
        assert_eq!(task.await.unwrap(), Ok(0));
    }

    #[tokio::test]
    async fn test_quit_with_pending_reply_drops_it() {
        let config = Config {
            reply_delay_ms: 60_000,
            ..Config::default()
        };
        let (mut handle, task) = run_tui_headless(config, wide());

        handle.send_action(Action::NextFocus);
        handle.send_action(Action::Select);
        handle
            .wait_for(|s| s.pending_replies == 1, WAIT)
            .await
            .expect("reply scheduled");

        handle.send_action(Action::Quit);
        assert_eq!(task.await.unwrap(), Ok(1));
        assert!(handle.has_quit());
    }

    #[tokio::test]
    async fn test_help_overlay_round_trip() {
        let (mut handle, task) = run_tui_headless(fast_config(), HeadlessConfig::default());

        handle.send_action(Action::Help);
        let state = handle
            .wait_for(|s| s.show_help, WAIT)
            .await
            .expect("help shown");
        assert!(state.screen_contents.contains("Toggle this help"));

        handle.send_action(Action::Help);
        handle
            .wait_for(|s| !s.show_help, WAIT)
            .await
            .expect("help hidden");

        handle.send_action(Action::Quit);
        task.await.unwrap().unwrap();
    }
}
