//! Scheduled delivery of simulated replies.
//!
//! Replies wait in a FIFO queue ordered by scheduling. Deadlines never
//! decrease along the queue, so replies are released in the order their
//! sends happened. The owner polls the queue from its event loop; nothing
//! here spawns tasks or sleeps.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::debug;

use crate::message::Message;

/// Identifier of one send and the reply scheduled for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SendId(u64);

impl SendId {
    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "send-{}", self.0)
    }
}

/// A reply waiting for its deadline.
#[derive(Debug, Clone)]
pub struct ScheduledReply {
    pub id: SendId,
    pub due: Instant,
    pub message: Message,
}

/// FIFO queue of pending replies.
#[derive(Debug)]
pub struct ReplyScheduler {
    queue: VecDeque<ScheduledReply>,
    next_id: u64,
}

impl Default for ReplyScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Queue a reply to be released at `due`.
    ///
    /// A deadline earlier than the last queued one is raised to it so a
    /// reply never overtakes one scheduled before it.
    pub fn schedule(&mut self, due: Instant, message: Message) -> SendId {
        let id = SendId(self.next_id);
        self.next_id += 1;

        let due = match self.queue.back() {
            Some(last) if last.due > due => last.due,
            _ => due,
        };
        self.queue.push_back(ScheduledReply { id, due, message });
        debug!(send_id = %id, pending = self.queue.len(), "reply scheduled");
        id
    }

    /// Deadline of the earliest pending reply.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.front().map(|reply| reply.due)
    }

    /// Remove and return every reply due at or before `now`, oldest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<ScheduledReply> {
        let mut due = Vec::new();
        while self.queue.front().is_some_and(|reply| reply.due <= now) {
            if let Some(reply) = self.queue.pop_front() {
                due.push(reply);
            }
        }
        due
    }

    /// Cancel a single pending reply. Returns `false` if it was not pending.
    pub fn cancel(&mut self, id: SendId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|reply| reply.id != id);
        let cancelled = self.queue.len() != before;
        if cancelled {
            debug!(send_id = %id, "reply cancelled");
        }
        cancelled
    }

    /// Cancel every pending reply, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    /// Number of replies still waiting.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Check if a reply is still waiting.
    pub fn is_pending(&self, id: SendId) -> bool {
        self.queue.iter().any(|reply| reply.id == id)
    }
}
