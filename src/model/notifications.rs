use serde::{Deserialize, Serialize};

/// Pending spending-limit alerts, most recent first.
///
/// Only the most recent alert is ever surfaced to the user; dismissing clears the
/// whole backlog, not just the one displayed.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notifications {
    pending: Vec<String>,
}

impl Notifications {
    /// Queues a new alert in front of any older ones.
    pub fn push(&mut self, message: String) {
        self.pending.insert(0, message);
    }

    /// The alert that should be shown, if any.
    pub fn latest(&self) -> Option<&str> {
        self.pending.first().map(String::as_str)
    }

    /// Clears every pending alert.
    pub fn dismiss_all(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
