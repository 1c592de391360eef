//! Suggestion chips offered while the conversation is empty.

use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use smartbot_engine::catalog::SUGGESTIONS;

/// Row of quick-start prompt buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionChips {
    focused: Option<usize>,
}

impl SuggestionChips {
    /// Create the chip panel with no focused chip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which chip has focus.
    #[must_use]
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }
}

impl Widget for SuggestionChips {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Try asking me: ")
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border_for(self.focused.is_some()))
            .style(Styles::default());

        let mut spans = Vec::with_capacity(SUGGESTIONS.len() * 2);
        for (i, prompt) in SUGGESTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", Styles::default()));
            }
            spans.push(Span::styled(
                format!("[ {prompt} ]"),
                Styles::button(self.focused == Some(i)),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_renders_exactly_four_prompts() {
        let area = Rect::new(0, 0, 100, 4);
        let mut buf = Buffer::empty(area);
        SuggestionChips::new().render(area, &mut buf);
        let text = buffer_to_string(&buf);

        assert!(text.contains("Try asking me:"));
        for prompt in SUGGESTIONS {
            assert!(text.contains(&format!("[ {prompt} ]")), "missing {prompt}");
        }
        assert_eq!(text.matches("[ ").count(), 4);
    }

    #[test]
    fn test_narrow_area_wraps_chips() {
        let area = Rect::new(0, 0, 50, 4);
        let mut buf = Buffer::empty(area);
        SuggestionChips::new().focused(Some(2)).render(area, &mut buf);
        let text = buffer_to_string(&buf);
        assert!(text.contains("What can you do?"));
    }
}
