//! Conversation state and the operations that drive it.
//!
//! `ConversationState` is plain data: the message log, the draft and the
//! view phase. `Conversation` owns a state together with the response
//! simulator and the reply scheduler, and is the only thing callers use to
//! apply user intents.

use chrono::Utc;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog;
use crate::config::Config;
use crate::message::Message;
use crate::phase::ViewPhase;
use crate::scheduler::{ReplyScheduler, SendId};
use crate::simulator::{ResponseSimulator, Utterance};

/// Everything the view renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    messages: Vec<Message>,
    draft: String,
    phase: ViewPhase,
}

impl ConversationState {
    /// Create an empty state showing the welcome panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current uncommitted input.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Current view phase.
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Check if the welcome panel is visible.
    pub fn is_welcome_visible(&self) -> bool {
        self.phase.is_welcome()
    }

    /// Check if the suggestion chips should be shown.
    pub fn shows_suggestions(&self) -> bool {
        self.messages.is_empty() && !self.phase.is_welcome()
    }

    /// Replace the draft.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Take the draft for sending, leaving it empty.
    ///
    /// Returns `None` and leaves the draft alone if it is blank.
    pub fn take_draft(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }

    /// Leave the welcome phase. Returns `true` if the phase changed.
    pub fn dismiss_welcome(&mut self) -> bool {
        self.phase.leave_welcome()
    }

    /// Append a message to the end of the log.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }
}

/// A running conversation: state plus pending simulated replies.
#[derive(Debug)]
pub struct Conversation {
    session_id: String,
    state: ConversationState,
    simulator: ResponseSimulator,
    scheduler: ReplyScheduler,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(ResponseSimulator::default())
    }
}

impl Conversation {
    /// Create a conversation with the given simulator.
    pub fn new(simulator: ResponseSimulator) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            state: ConversationState::new(),
            simulator,
            scheduler: ReplyScheduler::new(),
        }
    }

    /// Create a conversation using the reply delay from a config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ResponseSimulator::new(config.reply_delay()))
    }

    /// Identifier used to correlate log lines of one session.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Read-only view of the state.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Replace the draft text.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.state.update_draft(text);
        debug!(len = self.state.draft().len(), "draft updated");
    }

    /// Send the draft as a typed message.
    ///
    /// A blank draft is ignored and returns `None`.
    pub fn submit_draft(&mut self, now: Instant) -> Option<SendId> {
        let text = self.state.take_draft()?;
        Some(self.send(Utterance::Typed(text), now))
    }

    /// Send a canned prompt. The draft is not touched.
    pub fn select_suggestion(&mut self, text: impl Into<String>, now: Instant) -> SendId {
        let text = text.into();
        if !catalog::is_known_prompt(&text) {
            debug!(session = %self.session_id, "suggestion is not a catalog prompt");
        }
        self.send(Utterance::Suggestion(text), now)
    }

    /// Hide the welcome panel without sending anything.
    pub fn dismiss_welcome(&mut self) -> bool {
        let changed = self.state.dismiss_welcome();
        if changed {
            info!(session = %self.session_id, "welcome dismissed");
        }
        changed
    }

    fn send(&mut self, utterance: Utterance, now: Instant) -> SendId {
        self.state.dismiss_welcome();
        self.state.append(Message::user(utterance.text()));

        let reply = self.simulator.reply_to(&utterance);
        let id = self.scheduler.schedule(now + self.simulator.delay(), reply);
        info!(
            session = %self.session_id,
            send_id = %id,
            suggestion = matches!(utterance, Utterance::Suggestion(_)),
            "message sent"
        );
        id
    }

    /// Deadline of the next pending reply, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Append every reply that is due at `now`. Returns how many were appended.
    pub fn deliver_due(&mut self, now: Instant) -> usize {
        let due = self.scheduler.take_due(now);
        let count = due.len();
        for reply in due {
            info!(session = %self.session_id, send_id = %reply.id, "reply delivered");
            self.state.append(reply.message.stamped(Utc::now()));
        }
        count
    }

    /// Number of replies still waiting for their deadline.
    pub fn pending_replies(&self) -> usize {
        self.scheduler.pending()
    }

    /// Cancel the reply for one send.
    pub fn cancel_reply(&mut self, id: SendId) -> bool {
        self.scheduler.cancel(id)
    }

    /// Drop all pending replies. Called when the view goes away.
    pub fn teardown(&mut self) -> usize {
        let dropped = self.scheduler.cancel_all();
        info!(session = %self.session_id, dropped, "conversation torn down");
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CAPABILITIES_PROMPT, SUGGESTIONS};
    use crate::message::Sender;
    use crate::simulator::ACKNOWLEDGMENT;
    use std::time::Duration;

    const SECOND: Duration = Duration::from_millis(1000);

    fn texts(conversation: &Conversation) -> Vec<(Sender, String)> {
        conversation
            .state()
            .messages()
            .iter()
            .map(|m| (m.sender(), m.text().to_string()))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let conversation = Conversation::default();
        let state = conversation.state();
        assert!(state.messages().is_empty());
        assert!(state.draft().is_empty());
        assert!(state.is_welcome_visible());
        assert!(!state.shows_suggestions());
        assert_eq!(conversation.next_deadline(), None);
    }

    #[test]
    fn test_reply_stamped_at_delivery() {
        let mut conversation = Conversation::default();
        let t0 = Instant::now();
        conversation.update_draft("hello");
        conversation.submit_draft(t0);
        std::thread::sleep(Duration::from_millis(5));
        let before_delivery = Utc::now();

        assert_eq!(conversation.deliver_due(t0 + SECOND), 1);
        let messages = conversation.state().messages();
        assert!(messages[1].sent_at() >= before_delivery);
        assert!(messages[1].sent_at() > messages[0].sent_at());
    }

    #[test]
    fn test_unlisted_suggestion_still_sends() {
        let mut conversation = Conversation::default();
        conversation.select_suggestion("What is the weather?", Instant::now());
        assert_eq!(conversation.state().messages()[0].text(), "What is the weather?");
        assert_eq!(conversation.pending_replies(), 1);
    }

    #[test]
    fn test_ask_about_capabilities_scenario() {
        let mut conversation = Conversation::default();
        let t0 = Instant::now();

        conversation.select_suggestion(CAPABILITIES_PROMPT, t0);
        assert!(!conversation.state().is_welcome_visible());
        assert_eq!(
            texts(&conversation),
            vec![(Sender::User, "What can you do?".to_string())]
        );

        assert_eq!(conversation.deliver_due(t0 + Duration::from_millis(999)), 0);
        assert_eq!(conversation.deliver_due(t0 + SECOND), 1);
        assert_eq!(
            texts(&conversation)[1],
            (
                Sender::Bot,
                "You asked about \"What can you do?\". This is a simulated response in the demo interface."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_typed_send_scenario() {
        let mut conversation = Conversation::default();
        let t0 = Instant::now();

        conversation.update_draft("hello");
        let id = conversation.submit_draft(t0);
        assert!(id.is_some());
        assert_eq!(conversation.state().draft(), "");
        assert_eq!(
            texts(&conversation),
            vec![(Sender::User, "hello".to_string())]
        );

        conversation.deliver_due(t0 + SECOND);
        assert_eq!(
            texts(&conversation)[1],
            (Sender::Bot, ACKNOWLEDGMENT.to_string())
        );
    }

    #[test]
    fn test_typed_text_is_sent_untrimmed() {
        let mut conversation = Conversation::default();
        conversation.update_draft("  spaced out  ");
        conversation.submit_draft(Instant::now());
        assert_eq!(conversation.state().messages()[0].text(), "  spaced out  ");
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut conversation = Conversation::default();
        for draft in ["", "   ", "\t\n"] {
            conversation.update_draft(draft);
            assert_eq!(conversation.submit_draft(Instant::now()), None);
            assert!(conversation.state().messages().is_empty());
            assert!(conversation.state().is_welcome_visible());
            assert_eq!(conversation.state().draft(), draft);
        }
        assert_eq!(conversation.pending_replies(), 0);
    }

    #[test]
    fn test_suggestion_leaves_draft_alone() {
        let mut conversation = Conversation::default();
        conversation.update_draft("half typed");
        conversation.select_suggestion(SUGGESTIONS[3], Instant::now());
        assert_eq!(conversation.state().draft(), "half typed");
    }

    #[test]
    fn test_two_sends_100ms_apart_reply_in_order() {
        let mut conversation = Conversation::default();
        let t0 = Instant::now();

        conversation.update_draft("first");
        conversation.submit_draft(t0);
        conversation.select_suggestion(SUGGESTIONS[1], t0 + Duration::from_millis(100));

        assert_eq!(conversation.deliver_due(t0 + SECOND), 1);
        assert_eq!(
            conversation.deliver_due(t0 + SECOND + Duration::from_millis(100)),
            1
        );

        let senders: Vec<_> = texts(&conversation).into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::User, Sender::Bot, Sender::Bot]
        );
        assert_eq!(texts(&conversation)[2].1, ACKNOWLEDGMENT);
        assert!(texts(&conversation)[3].1.contains("How does this work?"));
    }

    #[test]
    fn test_sequential_sends_alternate() {
        let mut conversation = Conversation::default();
        let mut now = Instant::now();

        for i in 0..5 {
            if i % 2 == 0 {
                conversation.update_draft(format!("message {i}"));
                conversation.submit_draft(now);
            } else {
                conversation.select_suggestion(SUGGESTIONS[i % 4], now);
            }
            now += SECOND;
            conversation.deliver_due(now);
        }

        let messages = conversation.state().messages();
        assert_eq!(messages.len(), 10);
        for (i, message) in messages.iter().enumerate() {
            let expected = if i % 2 == 0 { Sender::User } else { Sender::Bot };
            assert_eq!(message.sender(), expected);
        }
    }

    #[test]
    fn test_dismiss_welcome_reveals_suggestions() {
        let mut conversation = Conversation::default();
        assert!(conversation.dismiss_welcome());
        assert!(!conversation.dismiss_welcome());
        assert!(conversation.state().shows_suggestions());

        conversation.select_suggestion(SUGGESTIONS[0], Instant::now());
        assert!(!conversation.state().shows_suggestions());
        assert!(!conversation.state().is_welcome_visible());
    }

    #[test]
    fn test_reply_appends_after_later_user_messages() {
        let mut conversation = Conversation::default();
        let t0 = Instant::now();
        conversation.select_suggestion("Tell me a joke", t0);
        conversation.update_draft("another");
        conversation.submit_draft(t0 + Duration::from_millis(500));

        conversation.deliver_due(t0 + SECOND);
        let last = conversation.state().messages().last().unwrap();
        assert_eq!(last.sender(), Sender::Bot);
        assert!(last.text().contains("Tell me a joke"));
    }

    #[test]
    fn test_teardown_cancels_pending_replies() {
        let mut conversation = Conversation::default();
        let t0 = Instant::now();
        conversation.select_suggestion("Explain AI to me", t0);
        conversation.select_suggestion("Tell me a joke", t0);

        assert_eq!(conversation.pending_replies(), 2);
        assert_eq!(conversation.teardown(), 2);
        assert_eq!(conversation.deliver_due(t0 + SECOND * 10), 0);
        assert_eq!(conversation.state().messages().len(), 2);
    }

    #[test]
    fn test_cancel_single_reply() {
        let mut conversation = Conversation::default();
        let t0 = Instant::now();
        let first = conversation.select_suggestion("What can you do?", t0);
        conversation.select_suggestion("Tell me a joke", t0);

        assert!(conversation.cancel_reply(first));
        assert_eq!(conversation.deliver_due(t0 + SECOND), 1);
        assert!(conversation
            .state()
            .messages()
            .last()
            .unwrap()
            .text()
            .contains("Tell me a joke"));
    }

    #[test]
    fn test_from_config_uses_reply_delay() {
        let config = Config {
            reply_delay_ms: 20,
            ..Config::default()
        };
        let mut conversation = Conversation::from_config(&config);
        let t0 = Instant::now();
        conversation.select_suggestion("What can you do?", t0);
        assert_eq!(
            conversation.next_deadline(),
            Some(t0 + Duration::from_millis(20))
        );
    }
}
