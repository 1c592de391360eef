//! Application state and update logic for the SmartBot TUI.

use crate::controls::{visible_controls, Control};
use crate::event::Action;
use crate::scroll::{TranscriptScroll, SCROLL_SPEED};
use crate::ui::widgets::TextInputState;
use smartbot_engine::{Config, Conversation, ConversationState};
use tokio::time::Instant;
use tracing::debug;

/// Which element receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The message input field.
    #[default]
    Input,
    /// A prompt button, by position in [`App::controls`].
    Control(usize),
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Tick counter for animations.
    pub tick: usize,

    /// Keyboard focus.
    pub focus: Focus,

    /// Cursor and history of the input field. Its content mirrors the draft.
    pub input: TextInputState,

    /// Scroll position of the message list.
    pub scroll: TranscriptScroll,

    config: Config,
    conversation: Conversation,
    /// Message count at the last follow check.
    seen_messages: usize,
}

impl App {
    /// Create a new app instance.
    pub fn new(config: Config) -> Self {
        let conversation = Conversation::from_config(&config);
        debug!(session = conversation.session_id(), "app created");
        Self {
            should_quit: false,
            show_help: false,
            tick: 0,
            focus: Focus::Input,
            input: TextInputState::new(),
            scroll: TranscriptScroll::new(),
            config,
            conversation,
            seen_messages: 0,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The conversation driven by this app.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Shortcut to the conversation state.
    pub fn state(&self) -> &ConversationState {
        self.conversation.state()
    }

    /// Prompt buttons currently on screen, in focus order.
    pub fn controls(&self) -> Vec<Control> {
        visible_controls(self.state())
    }

    /// The button with focus, if any.
    pub fn focused_control(&self) -> Option<Control> {
        match self.focus {
            Focus::Input => None,
            Focus::Control(i) => self.controls().get(i).copied(),
        }
    }

    /// Check if replies are pending.
    pub fn is_typing(&self) -> bool {
        self.conversation.pending_replies() > 0
    }

    /// Deadline of the next simulated reply.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.conversation.next_deadline()
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Append replies that are due. Returns how many arrived.
    pub fn deliver_due(&mut self, now: Instant) -> usize {
        let delivered = self.conversation.deliver_due(now);
        if delivered > 0 {
            self.after_conversation_change();
        }
        delivered
    }

    /// Tear the conversation down. Pending replies are dropped.
    pub fn shutdown(&mut self) -> usize {
        self.conversation.teardown()
    }

    /// Insert pasted text into the input. Line breaks become spaces.
    pub fn paste(&mut self, text: &str) {
        if self.show_help {
            return;
        }
        self.focus = Focus::Input;
        let text = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
        self.edit_draft(|input| input.insert_str(&text));
    }

    /// Handle an action at the current time.
    pub fn handle_action(&mut self, action: Action) {
        self.handle_action_at(action, Instant::now());
    }

    /// Handle an action as if it happened at `now`.
    pub fn handle_action_at(&mut self, action: Action, now: Instant) {
        // Global actions
        match action {
            Action::None => return,
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::ScrollUp => self.scroll.scroll_up(SCROLL_SPEED),
            Action::ScrollDown => self.scroll.scroll_down(SCROLL_SPEED),
            Action::PageUp => self.scroll.page_up(),
            Action::PageDown => self.scroll.page_down(),
            _ => match self.focus {
                Focus::Input => self.handle_input_action(action, now),
                Focus::Control(i) => self.handle_control_action(i, action, now),
            },
        }

        self.after_conversation_change();
    }

    fn handle_input_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Char(c) => self.edit_draft(|input| input.insert(c)),
            Action::Backspace => self.edit_draft(TextInputState::backspace),
            Action::Delete => self.edit_draft(TextInputState::delete),
            Action::Up => self.edit_draft(TextInputState::history_prev),
            Action::Down => self.edit_draft(TextInputState::history_next),
            Action::Left => self.input.move_left(),
            Action::Right => self.input.move_right(),
            Action::Home => self.input.move_home(),
            Action::End => self.input.move_end(),
            Action::Select => {
                if self.conversation.submit_draft(now).is_some() {
                    self.input.commit();
                }
            }
            Action::NextFocus => {
                if !self.controls().is_empty() {
                    self.focus = Focus::Control(0);
                }
            }
            Action::PrevFocus => {
                let count = self.controls().len();
                if count > 0 {
                    self.focus = Focus::Control(count - 1);
                }
            }
            Action::Back => {
                self.conversation.dismiss_welcome();
            }
            _ => {}
        }
    }

    fn handle_control_action(&mut self, index: usize, action: Action, now: Instant) {
        let count = self.controls().len();
        match action {
            Action::Select => {
                if let Some(control) = self.focused_control() {
                    self.conversation.select_suggestion(control.prompt(), now);
                }
                self.focus = Focus::Input;
            }
            Action::NextFocus => {
                self.focus = if index + 1 < count {
                    Focus::Control(index + 1)
                } else {
                    Focus::Input
                };
            }
            Action::PrevFocus => {
                self.focus = if index == 0 {
                    Focus::Input
                } else {
                    Focus::Control(index - 1)
                };
            }
            Action::Left => self.focus = Focus::Control(index.saturating_sub(1)),
            Action::Right => self.focus = Focus::Control((index + 1).min(count.saturating_sub(1))),
            Action::Back => self.focus = Focus::Input,
            Action::Char(c) => {
                // Typing while a button has focus goes to the input.
                self.focus = Focus::Input;
                self.edit_draft(|input| input.insert(c));
            }
            _ => {}
        }
    }

    /// Apply an edit to the input field and mirror the result into the draft.
    fn edit_draft(&mut self, edit: impl FnOnce(&mut TextInputState)) {
        edit(&mut self.input);
        if self.input.content() != self.state().draft() {
            self.conversation.update_draft(self.input.content());
        }
    }

    /// Keep focus valid and follow new messages.
    fn after_conversation_change(&mut self) {
        if let Focus::Control(i) = self.focus {
            if i >= self.controls().len() {
                self.focus = Focus::Input;
            }
        }

        let count = self.state().messages().len();
        if count != self.seen_messages {
            self.seen_messages = count;
            self.scroll.follow_latest();
        }
    }
}
