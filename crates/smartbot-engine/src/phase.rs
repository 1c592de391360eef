//! View phase of a conversation.

use serde::{Deserialize, Serialize};

/// Whether the welcome panel is still showing.
///
/// The only transition is `Welcome -> Conversing`; nothing moves back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    /// Nothing has been sent yet and the welcome panel is visible.
    #[default]
    Welcome,
    /// The welcome panel is gone for the rest of the session.
    Conversing,
}

impl ViewPhase {
    /// Leave the welcome phase. Returns `true` if this call made the transition.
    pub fn leave_welcome(&mut self) -> bool {
        match self {
            ViewPhase::Welcome => {
                *self = ViewPhase::Conversing;
                true
            }
            ViewPhase::Conversing => false,
        }
    }

    /// Check if the welcome panel is visible.
    pub fn is_welcome(self) -> bool {
        self == ViewPhase::Welcome
    }
}
