//! Layout helpers for the SmartBot TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the suggestion panel.
pub const SUGGESTIONS_HEIGHT: u16 = 4;

/// Height of the input bar.
pub const INPUT_HEIGHT: u16 = 3;

/// Areas of the chat screen. Optional panels are `None` when hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub welcome: Option<Rect>,
    pub messages: Rect,
    pub suggestions: Option<Rect>,
    pub input: Rect,
    pub status: Rect,
}

/// Split the screen into the chat areas, top to bottom.
///
/// `welcome_height` is the height of the welcome panel, or `None` when it is
/// hidden.
pub fn chat_layout(area: Rect, welcome_height: Option<u16>, show_suggestions: bool) -> ChatLayout {
    let mut constraints = Vec::with_capacity(5);
    if let Some(height) = welcome_height {
        constraints.push(Constraint::Length(height));
    }
    constraints.push(Constraint::Min(1));
    if show_suggestions {
        constraints.push(Constraint::Length(SUGGESTIONS_HEIGHT));
    }
    constraints.push(Constraint::Length(INPUT_HEIGHT));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;
    let welcome = welcome_height.is_some().then(|| {
        idx += 1;
        chunks[idx - 1]
    });
    let messages = chunks[idx];
    idx += 1;
    let suggestions = show_suggestions.then(|| {
        idx += 1;
        chunks[idx - 1]
    });
    let input = chunks[idx];
    let status = chunks[idx + 1];

    ChatLayout {
        welcome,
        messages,
        suggestions,
        input,
        status,
    }
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_layout_with_welcome() {
        let layout = chat_layout(Rect::new(0, 0, 80, 24), Some(15), false);
        assert_eq!(layout.welcome.map(|r| r.height), Some(15));
        assert!(layout.suggestions.is_none());
        assert_eq!(layout.input.height, INPUT_HEIGHT);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.messages.height, 24 - 15 - INPUT_HEIGHT - 1);
    }

    #[test]
    fn test_chat_layout_with_suggestions() {
        let layout = chat_layout(Rect::new(0, 0, 80, 24), None, true);
        assert!(layout.welcome.is_none());
        assert_eq!(layout.suggestions.map(|r| r.height), Some(SUGGESTIONS_HEIGHT));
        assert_eq!(layout.messages.y, 0);
        assert_eq!(layout.input.y, 24 - 1 - INPUT_HEIGHT);
    }

    #[test]
    fn test_centered_fixed_clamps() {
        let rect = centered_fixed(100, 50, Rect::new(0, 0, 80, 24));
        assert_eq!(rect.width, 80);
        assert_eq!(rect.height, 24);
    }
}
