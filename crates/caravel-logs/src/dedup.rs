//! Bounded deduplication of already-displayed events.
//!
//! Poll windows overlap, so the same event id can come back on consecutive
//! fetches. [`SeenEventCache`] remembers displayed ids up to a fixed
//! capacity, evicting the least recently touched id once full. A long
//! follow session therefore trades perfect historical dedup for bounded
//! memory.

use std::collections::{HashSet, VecDeque};

/// Default number of event ids remembered before eviction begins.
pub const DEFAULT_SEEN_CAPACITY: usize = 10_000;

/// Capacity-bounded set of event ids with least-recently-used eviction.
#[derive(Debug)]
pub struct SeenEventCache {
    /// Maximum number of ids retained.
    capacity: usize,
    /// Membership set.
    ids: HashSet<String>,
    /// Recency order: front is the least recently touched id.
    order: VecDeque<String>,
}

impl SeenEventCache {
    /// Creates a cache holding at most `capacity` ids.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            ids: HashSet::new(),
            order: VecDeque::new(),
        }
    }

    /// Records the id as seen and reports whether it was already present.
    ///
    /// Returns `false` the first time an id is encountered (recording it),
    /// `true` on every subsequent call until the id is evicted. A hit
    /// refreshes the id's recency.
    pub fn seen(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            self.touch(id);
            return true;
        }

        if self.ids.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.ids.remove(&oldest);
            }
        }

        self.ids.insert(id.to_string());
        self.order.push_back(id.to_string());
        false
    }

    /// Moves an id to the back of the recency queue.
    fn touch(&mut self, id: &str) {
        if let Some(pos) = self.order.iter().position(|entry| entry == id) {
            if let Some(entry) = self.order.remove(pos) {
                self.order.push_back(entry);
            }
        }
    }

    /// Returns the number of ids currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no ids are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SeenEventCache {
    fn default() -> Self {
        Self::new(DEFAULT_SEEN_CAPACITY)
    }
}
