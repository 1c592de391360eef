//! Simulated assistant replies.
//!
//! There is no model behind the assistant. Every utterance gets a canned
//! reply, due a fixed delay after the send.

use std::time::Duration;

use crate::message::Message;

/// Reply to anything typed into the input field.
pub const ACKNOWLEDGMENT: &str =
    "I'm processing your request. This is a simulated response in the demo interface.";

/// Default delay before a simulated reply is due.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// How a user message entered the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    /// Free text submitted from the input field.
    Typed(String),
    /// A canned prompt picked from a button.
    Suggestion(String),
}

impl Utterance {
    /// The text the user sent.
    pub fn text(&self) -> &str {
        match self {
            Utterance::Typed(text) | Utterance::Suggestion(text) => text,
        }
    }
}

/// Produces canned replies and the delay they are held back for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSimulator {
    delay: Duration,
}

impl Default for ResponseSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ResponseSimulator {
    /// Create a simulator with the given reply delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Delay between a send and its reply.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Build the reply for an utterance.
    pub fn reply_to(&self, utterance: &Utterance) -> Message {
        match utterance {
            Utterance::Typed(_) => Message::bot(ACKNOWLEDGMENT),
            Utterance::Suggestion(text) => Message::bot(format!(
                "You asked about \"{text}\". This is a simulated response in the demo interface."
            )),
        }
    }
}
