// src/views/queue.rs
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueDecision {
    Accept,
    Decline,
}

impl QueueDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueDecision::Accept => "accepted",
            QueueDecision::Decline => "declined",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

pub const CONNECTIONS_CAUGHT_UP: EmptyState = EmptyState {
    title: "All caught up!",
    message: "You don't have any pending connection requests.",
};

pub const MENTORSHIP_CAUGHT_UP: EmptyState = EmptyState {
    title: "All caught up!",
    message: "You don't have any pending mentorship requests.",
};

/// Requests waiting for an accept/decline decision.
///
/// Both decisions drop the request; nothing keeps track of what was accepted.
#[derive(Debug, Clone)]
pub struct RequestQueue<T> {
    items: Vec<T>,
    empty_state: EmptyState,
}

impl<T: Identified> RequestQueue<T> {
    pub fn new(items: Vec<T>, empty_state: EmptyState) -> Self {
        Self { items, empty_state }
    }

    pub fn accept(&mut self, id: &str) -> Option<T> {
        self.resolve(id, QueueDecision::Accept)
    }

    pub fn decline(&mut self, id: &str) -> Option<T> {
        self.resolve(id, QueueDecision::Decline)
    }

    /// Removes the request with `id`. An unknown id leaves the queue untouched.
    pub fn resolve(&mut self, id: &str, decision: QueueDecision) -> Option<T> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        let item = self.items.remove(position);
        debug!("Request {} {}, {} left", id, decision.as_str(), self.items.len());
        Some(item)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The "all caught up" message, only once the queue has drained
    pub fn empty_state(&self) -> Option<EmptyState> {
        self.is_empty().then_some(self.empty_state)
    }
}
