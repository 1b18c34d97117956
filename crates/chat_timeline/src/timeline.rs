//! Timeline - accumulated message set for streaming consumers
//!
//! The comparator has no incremental mode, so consumers of a live
//! event stream must re-sort the full accumulated set after every
//! arrival. `Timeline` packages that contract: push events as they
//! come in, take a sorted snapshot whenever the view refreshes.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::ordering::sort_messages;

/// Accumulator over the full message set of one workflow run.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Timeline {
    messages: Vec<Message>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event in arrival order.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append a batch of events in arrival order.
    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.messages.extend(messages);
    }

    /// Snapshot of the accumulated set in workflow order. Leaves the
    /// arrival-order buffer untouched.
    pub fn sorted(&self) -> Vec<Message> {
        sort_messages(&self.messages)
    }

    /// Accumulated events in arrival order.
    pub fn as_received(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<Message> for Timeline {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}
