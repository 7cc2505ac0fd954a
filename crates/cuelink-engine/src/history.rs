//! Bounded, time-ordered event history.
//!
//! The matcher scans this buffer after every trigger. Capacity bounds
//! memory; age pruning before each match bounds matcher cost.

use cuelink_types::Event;
use std::collections::VecDeque;

/// Bounded FIFO log of recorded events.
///
/// # Invariants
///
/// - `len() <= capacity` at all times.
/// - Insertion order equals timestamp order, by caller contract: the
///   buffer does not reorder, and out-of-order appends make matching
///   behavior undefined (degrades to missed or extra matches, never a
///   panic).
///
/// Best-effort structure: no operation fails.
#[derive(Debug)]
pub struct EventHistoryBuffer {
    events: VecDeque<Event>,
    capacity: usize,
}

impl EventHistoryBuffer {
    /// Creates a buffer holding at most `capacity` events.
    ///
    /// A zero capacity is raised to 1 so `append` always retains the
    /// newest event.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Appends an event, evicting the oldest if at capacity.
    ///
    /// O(1) amortized.
    pub fn append(&mut self, event: Event) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Returns the last `n` events in insertion order, or fewer if
    /// the buffer holds fewer.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<&Event> {
        let skip = self.events.len().saturating_sub(n);
        self.events.iter().skip(skip).collect()
    }

    /// Drops events with `timestamp_ms < now_ms - horizon_ms`.
    ///
    /// Called before every match check. Relies on insertion order
    /// being timestamp order, so pruning stops at the first young
    /// enough event.
    pub fn prune_older_than(&mut self, now_ms: u64, horizon_ms: u64) {
        let cutoff = now_ms.saturating_sub(horizon_ms);
        while let Some(front) = self.events.front() {
            if front.timestamp_ms < cutoff {
                self.events.pop_front();
            } else {
                break;
            }
        }
    }

    /// Number of events currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the buffer holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates events oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Removes all events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
