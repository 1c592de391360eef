//! Serializable snapshot of a conversation.

use serde::Serialize;

use crate::conversation::ConversationState;
use crate::message::{Message, Sender};
use crate::phase::ViewPhase;

/// Point-in-time copy of a conversation for printing or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub assistant_name: String,
    pub phase: ViewPhase,
    pub messages: Vec<Message>,
}

impl Transcript {
    /// Capture the current state.
    pub fn capture(state: &ConversationState, assistant_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
            phase: state.phase(),
            messages: state.messages().to_vec(),
        }
    }

    /// Render as `You: ...` / `<assistant>: ...` lines.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            let who = match message.sender() {
                Sender::User => "You",
                Sender::Bot => self.assistant_name.as_str(),
            };
            out.push_str(who);
            out.push_str(": ");
            out.push_str(message.text());
            out.push('\n');
        }
        out
    }
}
