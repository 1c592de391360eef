//! Prompt buttons that can take focus.

use smartbot_engine::catalog::{SUGGESTIONS, WELCOME_CARDS};
use smartbot_engine::ConversationState;

/// A button that sends a canned prompt when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Button at the bottom of a welcome card.
    WelcomeCard(usize),
    /// One of the suggestion chips.
    Suggestion(usize),
}

impl Control {
    /// Prompt sent when the button is activated.
    pub fn prompt(self) -> &'static str {
        match self {
            Control::WelcomeCard(i) => WELCOME_CARDS[i].prompt,
            Control::Suggestion(i) => SUGGESTIONS[i],
        }
    }

    /// Text drawn on the button.
    pub fn label(self) -> &'static str {
        match self {
            Control::WelcomeCard(i) => WELCOME_CARDS[i].button_label,
            Control::Suggestion(i) => SUGGESTIONS[i],
        }
    }
}

/// Buttons currently on screen, in focus order.
pub fn visible_controls(state: &ConversationState) -> Vec<Control> {
    if state.is_welcome_visible() {
        (0..WELCOME_CARDS.len()).map(Control::WelcomeCard).collect()
    } else if state.shows_suggestions() {
        (0..SUGGESTIONS.len()).map(Control::Suggestion).collect()
    } else {
        Vec::new()
    }
}
