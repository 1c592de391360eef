//! Welcome panel shown before the first message.
//!
//! ```text
//!                      Welcome to SmartBot
//!   Your intelligent assistant for information, creativity, ...
//! ┌ Start Conversation ─────────┐┌ What I Can't Do Yet ────────┐
//! │Discover what I can do ...   ││Current limitations to be ...│
//! │* Natural language under...  ││* Cannot browse the inter... │
//! │            ...              ││            ...              │
//! │  [ Ask About Capabilities ] ││  [ Ask About Limitations ]  │
//! └─────────────────────────────┘└─────────────────────────────┘
//! ```

use crate::text::{truncate_to_width, wrap_text};
use crate::ui::theme::{Styles, Symbols};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use smartbot_engine::catalog::{WelcomeCard, WELCOME_CARDS, WELCOME_TAGLINE, WELCOME_TITLE};

/// Welcome panel with the two catalog cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct WelcomePanel {
    /// Index of the card whose button has focus.
    focused_card: Option<usize>,
}

impl WelcomePanel {
    /// Create a welcome panel with no focused button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which card's button has focus.
    #[must_use]
    pub fn focused_card(mut self, card: Option<usize>) -> Self {
        self.focused_card = card;
        self
    }

    /// Rows needed to show every item when the panel is `width` cells wide.
    ///
    /// Two heading rows, then each card: borders, intro, items, button.
    pub fn required_height(width: u16) -> u16 {
        let card_inner = usize::from(width / 2).saturating_sub(2);
        let items = WELCOME_CARDS
            .iter()
            .map(|card| item_lines(card, card_inner).len())
            .max()
            .unwrap_or(0);
        u16::try_from(items + 6).unwrap_or(u16::MAX)
    }
}

/// Item lines for a card whose inner area is `width` cells wide. Long
/// items wrap under their bullet.
fn item_lines(card: &WelcomeCard, width: usize) -> Vec<Line<'static>> {
    let indent = " ".repeat(Symbols::BULLET.len());
    let text_width = width.saturating_sub(Symbols::BULLET.len()).max(1);
    let mut lines = Vec::new();
    for item in card.items {
        for (i, part) in wrap_text(item, text_width).into_iter().enumerate() {
            let marker = if i == 0 {
                Span::styled(Symbols::BULLET, Styles::active())
            } else {
                Span::raw(indent.clone())
            };
            lines.push(Line::from(vec![marker, Span::styled(part, Styles::default())]));
        }
    }
    lines
}

fn render_card(card: &WelcomeCard, focused: bool, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(format!(" {} ", card.heading))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_for(focused))
        .style(Styles::default());
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let width = usize::from(inner.width);
    let [body_area, button_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .areas(inner);

    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(card.intro, width),
        Styles::dim(),
    ))];
    lines.extend(item_lines(card, width));
    Paragraph::new(lines).render(body_area, buf);

    let label = format!("[ {} ]", card.button_label);
    Paragraph::new(Line::from(Span::styled(label, Styles::button(focused))))
        .alignment(Alignment::Center)
        .render(button_area, buf);
}

impl Widget for WelcomePanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }

        let [heading_area, cards_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .areas(area);

        let heading = vec![
            Line::from(Span::styled(WELCOME_TITLE, Styles::highlight())),
            Line::from(Span::styled(
                truncate_to_width(WELCOME_TAGLINE, usize::from(area.width)),
                Styles::dim(),
            )),
        ];
        Paragraph::new(heading)
            .alignment(Alignment::Center)
            .style(Styles::default())
            .render(heading_area, buf);

        let card_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(cards_area);

        for (i, card) in WELCOME_CARDS.iter().enumerate() {
            render_card(card, self.focused_card == Some(i), card_areas[i], buf);
        }
    }
}
