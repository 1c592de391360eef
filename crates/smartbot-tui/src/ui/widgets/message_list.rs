//! Scrolling list of conversation messages.

use crate::scroll::TranscriptScroll;
use crate::text::wrap_text;
use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use smartbot_engine::{Message, Sender};

/// Message list widget. Follows the scroll state it is given.
pub struct MessageList<'a> {
    messages: &'a [Message],
    scroll: &'a TranscriptScroll,
    assistant_name: &'a str,
    typing: Option<&'a str>,
}

impl<'a> MessageList<'a> {
    /// Create a message list.
    pub fn new(
        messages: &'a [Message],
        scroll: &'a TranscriptScroll,
        assistant_name: &'a str,
    ) -> Self {
        Self {
            messages,
            scroll,
            assistant_name,
            typing: None,
        }
    }

    /// Show a typing indicator with the given spinner frame.
    #[must_use]
    pub fn typing(mut self, spinner: Option<&'a str>) -> Self {
        self.typing = spinner;
        self
    }

    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        // Bubbles take three quarters of the width so the sides stay apart.
        let bubble_width = (width * 3 / 4).max(10).min(width);
        let mut lines = Vec::new();

        for message in self.messages {
            let sender = message.sender();
            let (label, alignment) = match sender {
                Sender::User => ("You".to_string(), Alignment::Right),
                Sender::Bot => (self.assistant_name.to_string(), Alignment::Left),
            };

            lines.push(
                Line::from(Span::styled(label, Styles::sender_label(sender))).alignment(alignment),
            );
            for text in wrap_text(message.text(), bubble_width) {
                lines.push(
                    Line::from(Span::styled(text, Styles::message_body(sender))).alignment(alignment),
                );
            }
            lines.push(Line::from(""));
        }

        if let Some(spinner) = self.typing {
            lines.push(Line::from(Span::styled(
                format!("{} is typing {spinner}", self.assistant_name),
                Styles::dim(),
            )));
        }

        lines
    }
}

impl Widget for MessageList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Conversation ")
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .style(Styles::default());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = self.build_lines(usize::from(inner.width));
        let viewport = usize::from(inner.height);
        let offset = self.scroll.resolve(lines.len(), viewport);
        let visible: Vec<Line<'static>> = lines.into_iter().skip(offset).take(viewport).collect();

        Paragraph::new(visible)
            .style(Styles::default())
            .render(inner, buf);
    }
}
