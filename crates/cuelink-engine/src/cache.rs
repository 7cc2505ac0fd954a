//! Cue cache.
//!
//! A bounded, write-mostly recency cache of *base* cue templates,
//! keyed by event signature. Eviction is strict FIFO on insertion
//! order — deliberately not LRU: reuse never refreshes an entry's
//! position, so the cache tracks what was synthesized recently, not
//! what is used often.
//!
//! The synthesizer stores the pre-adaptation template here and
//! re-applies adaptation on every hit, so a cache hit skips base
//! resolution only.

use cuelink_types::CueTemplate;
use std::collections::HashMap;
use std::collections::VecDeque;

/// Cache key: event kind plus payload signature.
pub type CueKey = (String, u64);

/// Bounded FIFO cache of base cue templates.
///
/// Invariant: `len() <= capacity` at all times.
#[derive(Debug)]
pub struct CueCache {
    entries: HashMap<CueKey, CueTemplate>,
    insertion_order: VecDeque<CueKey>,
    capacity: usize,
}

impl CueCache {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A zero capacity is raised to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            insertion_order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Looks up the cached base template for a key.
    #[must_use]
    pub fn get(&self, key: &CueKey) -> Option<&CueTemplate> {
        self.entries.get(key)
    }

    /// Inserts a base template, evicting the single oldest-inserted
    /// entry first when at capacity.
    ///
    /// Re-inserting an existing key updates the value in place
    /// without touching its queue position.
    pub fn insert(&mut self, key: CueKey, template: CueTemplate) {
        if self.entries.contains_key(&key) {
            self.entries.insert(key, template);
            return;
        }

        if self.entries.len() == self.capacity {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
            }
        }

        self.insertion_order.push_back(key.clone());
        self.entries.insert(key, template);
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuelink_types::PatternTag;

    fn key(kind: &str, sig: u64) -> CueKey {
        (kind.to_string(), sig)
    }

    fn template(freq: f64) -> CueTemplate {
        CueTemplate::new(freq, 200, 0.5, PatternTag::Short)
    }

    #[test]
    fn get_after_insert() {
        let mut cache = CueCache::new(10);
        cache.insert(key("pop", 1), template(100.0));

        let hit = cache.get(&key("pop", 1)).unwrap();
        assert_eq!(hit.frequency_hz, 100.0);
        assert!(cache.get(&key("pop", 2)).is_none());
    }

    #[test]
    fn fifo_eviction_at_capacity() {
        let mut cache = CueCache::new(3);
        for i in 0..4 {
            cache.insert(key("e", i), template(100.0 + i as f64));
        }

        assert_eq!(cache.len(), 3);
        // First-inserted signature is gone, the rest remain.
        assert!(cache.get(&key("e", 0)).is_none());
        assert!(cache.get(&key("e", 1)).is_some());
        assert!(cache.get(&key("e", 3)).is_some());
    }

    #[test]
    fn reads_do_not_refresh_position() {
        let mut cache = CueCache::new(2);
        cache.insert(key("a", 0), template(100.0));
        cache.insert(key("b", 0), template(200.0));

        // Touch "a" repeatedly; FIFO still evicts it first.
        for _ in 0..5 {
            let _ = cache.get(&key("a", 0));
        }
        cache.insert(key("c", 0), template(300.0));

        assert!(cache.get(&key("a", 0)).is_none());
        assert!(cache.get(&key("b", 0)).is_some());
    }

    #[test]
    fn reinsert_updates_value_in_place() {
        let mut cache = CueCache::new(2);
        cache.insert(key("a", 0), template(100.0));
        cache.insert(key("b", 0), template(200.0));
        cache.insert(key("a", 0), template(150.0));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&key("a", 0)).unwrap().frequency_hz, 150.0);

        // "a" kept its original queue position, so it still evicts first.
        cache.insert(key("c", 0), template(300.0));
        assert!(cache.get(&key("a", 0)).is_none());
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = CueCache::new(5);
        cache.insert(key("a", 0), template(100.0));
        cache.clear();
        assert!(cache.is_empty());

        // Capacity intact after clear.
        for i in 0..6 {
            cache.insert(key("e", i), template(100.0));
        }
        assert_eq!(cache.len(), 5);
    }
}
