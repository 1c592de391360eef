//! Reusable widgets for the SmartBot TUI.

pub mod message_list;
pub mod status_bar;
pub mod suggestion_chips;
pub mod text_input;
pub mod welcome_panel;

pub use message_list::MessageList;
pub use status_bar::{KeyHint, StatusBar};
pub use suggestion_chips::SuggestionChips;
pub use text_input::{TextInput, TextInputState};
pub use welcome_panel::WelcomePanel;
