//! Chat screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Welcome panel (until the first message)     │
//! ├─────────────────────────────────────────────┤
//! │ Conversation                                │
//! ├─────────────────────────────────────────────┤
//! │ Try asking me: (empty conversation only)    │
//! ├─────────────────────────────────────────────┤
//! │ Message                                     │
//! ├─────────────────────────────────────────────┤
//! │ Status bar                                  │
//! └─────────────────────────────────────────────┘
//! ```

use super::Screen;
use crate::app::{App, Focus};
use crate::controls::Control;
use crate::ui::layout::chat_layout;
use crate::ui::theme::{spinner_frame, Styles};
use crate::ui::widgets::{KeyHint, MessageList, StatusBar, SuggestionChips, WelcomePanel};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};
use smartbot_engine::catalog::INPUT_PLACEHOLDER;

/// The single chat screen.
pub struct ChatScreen;

impl ChatScreen {
    fn hints(app: &App) -> Vec<KeyHint> {
        let enter = app.focused_control().map_or("Send", Control::label);
        let mut hints = vec![KeyHint::new("Enter", enter)];
        if !app.controls().is_empty() {
            hints.push(KeyHint::new("Tab", "Buttons"));
        }
        if app.state().is_welcome_visible() {
            hints.push(KeyHint::new("Esc", "Skip"));
        }
        hints.push(KeyHint::new("F1", "Help"));
        hints.push(KeyHint::new("^C", "Quit"));
        hints
    }
}

impl Screen for ChatScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let state = app.state();
        let name = app.config().assistant_name.as_str();
        let welcome_height = state
            .is_welcome_visible()
            .then(|| WelcomePanel::required_height(area.width));
        let layout = chat_layout(area, welcome_height, state.shows_suggestions());
        let focused = app.focused_control();

        if let Some(welcome_area) = layout.welcome {
            let card = match focused {
                Some(Control::WelcomeCard(i)) => Some(i),
                _ => None,
            };
            WelcomePanel::new()
                .focused_card(card)
                .render(welcome_area, buf);
        }

        let spinner = app.is_typing().then(|| spinner_frame(app.tick));
        MessageList::new(state.messages(), &app.scroll, name)
            .typing(spinner)
            .render(layout.messages, buf);

        if let Some(chips_area) = layout.suggestions {
            let chip = match focused {
                Some(Control::Suggestion(i)) => Some(i),
                _ => None,
            };
            SuggestionChips::new().focused(chip).render(chips_area, buf);
        }

        let input_focused = app.focus == Focus::Input;
        app.input
            .widget()
            .focused(input_focused)
            .placeholder(INPUT_PLACEHOLDER)
            .block(
                Block::default()
                    .title(" Message ")
                    .title_style(Styles::title())
                    .borders(Borders::ALL)
                    .border_style(Styles::border_for(input_focused))
                    .style(Styles::default()),
            )
            .render(layout.input, buf);

        let typing = spinner
            .map(|frame| format!("{name} is typing {frame}"))
            .unwrap_or_default();
        let mut status = StatusBar::new(name).hints(Self::hints(app));
        if !typing.is_empty() {
            status = status.right(&typing);
        }
        status.render(layout.status, buf);
    }
}
