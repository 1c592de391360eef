//! Messages exchanged in a conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed or picked by the person using the view.
    User,
    /// Produced by the response simulator.
    Bot,
}

impl Sender {
    /// Check if this is the user side of the conversation.
    pub fn is_user(self) -> bool {
        matches!(self, Sender::User)
    }
}

/// A single message in the conversation log.
///
/// Messages are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    text: String,
    sender: Sender,
    sent_at: DateTime<Utc>,
}

impl Message {
    /// Create a new user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            sent_at: Utc::now(),
        }
    }

    /// Create a new bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            sent_at: Utc::now(),
        }
    }

    /// Message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Author of the message.
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Wall-clock time the message entered the log. Bot replies are stamped
    /// when delivered, not when scheduled.
    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }

    /// Replace the timestamp before the message is appended.
    pub(crate) fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.sent_at = at;
        self
    }
}
