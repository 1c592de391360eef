//! smartbot-engine: Headless conversation engine for the SmartBot demo assistant
//!
//! This crate provides everything the assistant does without a terminal:
//! - Conversation state (message log, draft, welcome/conversing phase)
//! - Simulated replies and their FIFO delivery schedule
//! - The fixed welcome and prompt catalog
//! - Configuration and transcript snapshots

pub mod catalog;
pub mod config;
pub mod conversation;
pub mod message;
pub mod phase;
pub mod scheduler;
pub mod simulator;
pub mod transcript;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use conversation::{Conversation, ConversationState};
pub use message::{Message, Sender};
pub use phase::ViewPhase;
pub use scheduler::{ReplyScheduler, ScheduledReply, SendId};
pub use simulator::{ResponseSimulator, Utterance, ACKNOWLEDGMENT};
pub use transcript::Transcript;

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
