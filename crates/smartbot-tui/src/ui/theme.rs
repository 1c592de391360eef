//! Theme and styling definitions for the SmartBot TUI.

use ratatui::style::{Color, Modifier, Style};
use smartbot_engine::Sender;

/// Color palette for the TUI.
pub struct Palette;

impl Palette {
    // Base colors
    pub const BG: Color = Color::Rgb(30, 30, 40);
    pub const FG: Color = Color::Rgb(220, 220, 230);
    pub const DIM: Color = Color::Rgb(140, 140, 160);

    // Accent colors
    pub const ACCENT: Color = Color::Rgb(130, 170, 255);

    // Status bar colors (high contrast)
    pub const STATUS_BG: Color = Color::Rgb(45, 45, 60);
    pub const STATUS_KEY_BG: Color = Color::Rgb(70, 90, 140);

    // Message colors
    pub const USER: Color = Color::Rgb(130, 220, 130);
    pub const BOT: Color = Color::Rgb(130, 170, 255);

    // Button colors
    pub const BUTTON_BG: Color = Color::Rgb(55, 55, 75);

    // Border colors
    pub const BORDER: Color = Color::Rgb(80, 80, 100);
    pub const BORDER_ACTIVE: Color = Color::Rgb(130, 170, 255);
}

/// Indicator symbols (ASCII only).
pub struct Symbols;

impl Symbols {
    pub const BULLET: &'static str = "* ";
    pub const SPINNER: [&'static str; 4] = ["|", "/", "-", "\\"];
}

/// Common styles used throughout the TUI.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::BG)
    }

    /// Dimmed text for secondary information.
    pub fn dim() -> Style {
        Style::default().fg(Palette::DIM).bg(Palette::BG)
    }

    /// Highlighted text.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active/focused element.
    pub fn active() -> Style {
        Style::default().fg(Palette::ACCENT).bg(Palette::BG)
    }

    /// Title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Name label above a message.
    pub fn sender_label(sender: Sender) -> Style {
        let color = match sender {
            Sender::User => Palette::USER,
            Sender::Bot => Palette::BOT,
        };
        Style::default()
            .fg(color)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Body of a message.
    pub fn message_body(sender: Sender) -> Style {
        match sender {
            Sender::User => Style::default().fg(Palette::FG).bg(Palette::BG),
            Sender::Bot => Style::default().fg(Palette::FG).bg(Palette::BG).add_modifier(Modifier::ITALIC),
        }
    }

    /// Prompt button, inverted when focused.
    pub fn button(focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Palette::BG)
                .bg(Palette::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Palette::FG).bg(Palette::BUTTON_BG)
        }
    }

    /// Key hint style (for status bar) - bright on dark for visibility.
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Palette::FG)
            .bg(Palette::STATUS_KEY_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style - readable on status bar background.
    pub fn key_label() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Status bar background style.
    pub fn status_bar() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Border style for inactive elements.
    pub fn border() -> Style {
        Style::default().fg(Palette::BORDER)
    }

    /// Border style for active/focused elements.
    pub fn border_active() -> Style {
        Style::default().fg(Palette::BORDER_ACTIVE)
    }

    /// Border style chosen by focus.
    pub fn border_for(focused: bool) -> Style {
        if focused {
            Self::border_active()
        } else {
            Self::border()
        }
    }
}

/// Spinner frame for a tick count.
pub fn spinner_frame(tick: usize) -> &'static str {
    Symbols::SPINNER[tick % Symbols::SPINNER.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_frame_cycles() {
        assert_eq!(spinner_frame(0), "|");
        assert_eq!(spinner_frame(3), "\\");
        assert_eq!(spinner_frame(4), "|");
    }

    #[test]
    fn test_sender_labels_differ() {
        assert_ne!(
            Styles::sender_label(Sender::User),
            Styles::sender_label(Sender::Bot)
        );
    }

    #[test]
    fn test_focused_button_is_distinct() {
        assert_ne!(Styles::button(true), Styles::button(false));
    }
}
