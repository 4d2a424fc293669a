//! Bounded FIFO of previously produced summary messages.

use std::collections::VecDeque;

use tracing::trace;

/// Rolling window of the most recent summary messages, oldest first.
///
/// Capacity is fixed at construction. A capacity of zero is clamped to one.
/// Storage grows with the entries pushed, not with the capacity.
#[derive(Debug, Clone)]
pub struct RollingHistory {
    capacity: usize,
    entries: VecDeque<String>,
}

impl RollingHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a message, evicting the oldest entries once over capacity.
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push_back(message.into());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            trace!(capacity = self.capacity, "Evicted oldest history entry");
        }
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}
