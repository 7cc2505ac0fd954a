//! Pattern matching over the event history.
//!
//! After each new event the matcher decides, per registered pattern,
//! whether the pattern's sequence is satisfied by the most recent
//! events. Matching is strict: exact suffix, order-sensitive, no gaps
//! or skips, inclusive time window.
//!
//! # Debounce
//!
//! Repeated matches of the same pattern are a normal occurrence
//! (e.g. every pop after the third re-completes a three-pop combo).
//! Each pattern carries a small state machine:
//!
//! ```text
//! Idle ──match──► Armed { deadline = now + debounce_ms }   (reported)
//! Armed ──match before deadline──► Armed { new deadline }  (suppressed)
//! Armed ──now >= deadline──► Idle
//! ```
//!
//! Re-arming replaces the prior deadline, which is the cancellable-
//! timer semantics without a timer thread; [`reset`]
//! (PatternMatcher::reset) clears all armed state on teardown.
//! Callers should still treat a reported match as a *candidate* and
//! apply their own policy where needed.

use crate::history::EventHistoryBuffer;
use crate::registry::PatternRegistry;
use cuelink_types::{Event, ResponseTag};
use std::collections::HashMap;
use tracing::debug;

/// A reported pattern match.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    /// Name of the matched pattern.
    pub name: String,
    /// Suggested host response, from the pattern definition.
    pub response: ResponseTag,
    /// The events that satisfied the sequence, oldest first.
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    Idle,
    Armed { deadline_ms: u64 },
}

/// Scans the history buffer against registered patterns.
///
/// Never errors: absent history, short history, or degenerate pattern
/// definitions all simply yield no match.
#[derive(Debug, Default)]
pub struct PatternMatcher {
    debounce_ms: u64,
    state: HashMap<String, DebounceState>,
}

impl PatternMatcher {
    /// Creates a matcher with the given debounce cooldown.
    #[must_use]
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            debounce_ms,
            state: HashMap::new(),
        }
    }

    /// Checks every registered pattern against the history suffix and
    /// returns the matches that survive debouncing.
    ///
    /// Multiple patterns may match on the same event; all are
    /// reported in one call, each debounced independently.
    pub fn check(
        &mut self,
        registry: &PatternRegistry,
        history: &EventHistoryBuffer,
        now_ms: u64,
    ) -> Vec<PatternMatch> {
        let mut matches = Vec::new();

        for pattern in registry.all() {
            let k = pattern.sequence.len();
            if k == 0 || history.len() < k {
                continue;
            }

            let recent = history.recent(k);
            let kinds_match = recent
                .iter()
                .zip(&pattern.sequence)
                .all(|(event, kind)| event.kind == *kind);
            if !kinds_match {
                continue;
            }

            // Inclusive window over the matched span. Saturating: an
            // out-of-order buffer (violated caller contract) degrades
            // to a zero span instead of panicking.
            let span = recent[k - 1]
                .timestamp_ms
                .saturating_sub(recent[0].timestamp_ms);
            if span > pattern.time_window_ms {
                continue;
            }

            if self.arm(&pattern.name, now_ms) {
                matches.push(PatternMatch {
                    name: pattern.name.clone(),
                    response: pattern.response,
                    events: recent.into_iter().cloned().collect(),
                });
            } else {
                debug!(pattern = %pattern.name, "match suppressed by debounce");
            }
        }

        matches
    }

    /// Transitions the pattern's debounce state on a match. Returns
    /// `true` if the match should be reported.
    ///
    /// A suppressed match still re-arms the deadline, superseding the
    /// previous one.
    fn arm(&mut self, name: &str, now_ms: u64) -> bool {
        let state = self
            .state
            .entry(name.to_string())
            .or_insert(DebounceState::Idle);

        let report = match *state {
            DebounceState::Idle => true,
            DebounceState::Armed { deadline_ms } => now_ms >= deadline_ms,
        };

        *state = DebounceState::Armed {
            deadline_ms: now_ms + self.debounce_ms,
        };
        report
    }

    /// Clears all debounce state (cancel-on-dispose).
    pub fn reset(&mut self) {
        self.state.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuelink_types::CuePattern;

    fn registry_with(patterns: Vec<CuePattern>) -> PatternRegistry {
        let mut registry = PatternRegistry::new();
        for pattern in patterns {
            registry.register(pattern).unwrap();
        }
        registry
    }

    fn history_with(events: &[(&str, u64)]) -> EventHistoryBuffer {
        let mut history = EventHistoryBuffer::new(50);
        for (kind, ts) in events {
            history.append(Event::bare(*kind, *ts));
        }
        history
    }

    // ── Exactness ────────────────────────────────────────────

    #[test]
    fn ordered_sequence_matches() {
        let registry = registry_with(vec![CuePattern::notify("aba", ["A", "B", "A"], 1_000)]);
        let history = history_with(&[("A", 0), ("B", 100), ("A", 200)]);
        let mut matcher = PatternMatcher::new(5_000);

        let matches = matcher.check(&registry, &history, 200);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "aba");
        assert_eq!(matches[0].events.len(), 3);
    }

    #[test]
    fn order_sensitive_no_match() {
        let registry = registry_with(vec![CuePattern::notify("aba", ["A", "B", "A"], 1_000)]);
        let history = history_with(&[("A", 0), ("A", 100), ("B", 200)]);
        let mut matcher = PatternMatcher::new(5_000);

        assert!(matcher.check(&registry, &history, 200).is_empty());
    }

    #[test]
    fn short_history_no_match() {
        let registry = registry_with(vec![CuePattern::notify("aba", ["A", "B", "A"], 1_000)]);
        let history = history_with(&[("B", 0), ("A", 100)]);
        let mut matcher = PatternMatcher::new(5_000);

        assert!(matcher.check(&registry, &history, 100).is_empty());
    }

    #[test]
    fn suffix_only_matching() {
        // Earlier non-matching events do not break a matching suffix.
        let registry = registry_with(vec![CuePattern::notify("ab", ["A", "B"], 1_000)]);
        let history = history_with(&[("X", 0), ("A", 100), ("B", 200)]);
        let mut matcher = PatternMatcher::new(5_000);

        assert_eq!(matcher.check(&registry, &history, 200).len(), 1);
    }

    // ── Time window ──────────────────────────────────────────

    #[test]
    fn window_boundary_inclusive() {
        let registry = registry_with(vec![CuePattern::notify("aba", ["A", "B", "A"], 1_000)]);
        let history = history_with(&[("A", 0), ("B", 500), ("A", 1_000)]);
        let mut matcher = PatternMatcher::new(5_000);

        assert_eq!(matcher.check(&registry, &history, 1_000).len(), 1);
    }

    #[test]
    fn window_exceeded_no_match() {
        let registry = registry_with(vec![CuePattern::notify("aba", ["A", "B", "A"], 1_000)]);
        let history = history_with(&[("A", 0), ("B", 500), ("A", 1_001)]);
        let mut matcher = PatternMatcher::new(5_000);

        assert!(matcher.check(&registry, &history, 1_001).is_empty());
    }

    // ── Overlap ──────────────────────────────────────────────

    #[test]
    fn multiple_patterns_reported_together() {
        let registry = registry_with(vec![
            CuePattern::notify("pair", ["A", "B"], 1_000),
            CuePattern::notify("triple", ["A", "A", "B"], 1_000),
        ]);
        let history = history_with(&[("A", 0), ("A", 100), ("B", 200)]);
        let mut matcher = PatternMatcher::new(5_000);

        let matches = matcher.check(&registry, &history, 200);
        let names: Vec<_> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["pair", "triple"]);
    }

    // ── Debounce ─────────────────────────────────────────────

    #[test]
    fn repeat_match_within_debounce_suppressed() {
        let registry = registry_with(vec![CuePattern::notify("pair", ["A", "A"], 10_000)]);
        let mut matcher = PatternMatcher::new(5_000);

        let history = history_with(&[("A", 0), ("A", 100)]);
        assert_eq!(matcher.check(&registry, &history, 100).len(), 1);

        let history = history_with(&[("A", 100), ("A", 200)]);
        assert!(matcher.check(&registry, &history, 200).is_empty());
    }

    #[test]
    fn match_after_deadline_reported_again() {
        let registry = registry_with(vec![CuePattern::notify("pair", ["A", "A"], 10_000)]);
        let mut matcher = PatternMatcher::new(5_000);

        let history = history_with(&[("A", 0), ("A", 100)]);
        assert_eq!(matcher.check(&registry, &history, 100).len(), 1);

        let history = history_with(&[("A", 6_000), ("A", 6_100)]);
        assert_eq!(matcher.check(&registry, &history, 6_100).len(), 1);
    }

    #[test]
    fn suppressed_match_rearms_deadline() {
        let registry = registry_with(vec![CuePattern::notify("pair", ["A", "A"], 60_000)]);
        let mut matcher = PatternMatcher::new(5_000);

        let history = history_with(&[("A", 0), ("A", 100)]);
        assert_eq!(matcher.check(&registry, &history, 100).len(), 1);

        // Suppressed at t=4000 but pushes the deadline to t=9000...
        let history = history_with(&[("A", 3_900), ("A", 4_000)]);
        assert!(matcher.check(&registry, &history, 4_000).is_empty());

        // ...so t=6000 (past the original deadline) is still suppressed.
        let history = history_with(&[("A", 5_900), ("A", 6_000)]);
        assert!(matcher.check(&registry, &history, 6_000).is_empty());
    }

    #[test]
    fn debounce_is_per_pattern() {
        let registry = registry_with(vec![
            CuePattern::notify("pair", ["A", "A"], 10_000),
            CuePattern::notify("ab", ["A", "B"], 10_000),
        ]);
        let mut matcher = PatternMatcher::new(5_000);

        let history = history_with(&[("A", 0), ("A", 100)]);
        assert_eq!(matcher.check(&registry, &history, 100).len(), 1);

        // "pair" is armed; "ab" is fresh and reports.
        let history = history_with(&[("A", 100), ("B", 200)]);
        let matches = matcher.check(&registry, &history, 200);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "ab");
    }

    #[test]
    fn reset_clears_armed_state() {
        let registry = registry_with(vec![CuePattern::notify("pair", ["A", "A"], 10_000)]);
        let mut matcher = PatternMatcher::new(5_000);

        let history = history_with(&[("A", 0), ("A", 100)]);
        assert_eq!(matcher.check(&registry, &history, 100).len(), 1);

        matcher.reset();
        assert_eq!(matcher.check(&registry, &history, 200).len(), 1);
    }

    // ── Degenerate patterns ──────────────────────────────────

    #[test]
    fn empty_sequence_never_matches() {
        let registry = registry_with(vec![CuePattern::notify("empty", Vec::<String>::new(), 1_000)]);
        let history = history_with(&[("A", 0)]);
        let mut matcher = PatternMatcher::new(5_000);

        assert!(matcher.check(&registry, &history, 0).is_empty());
    }

    #[test]
    fn empty_history_never_matches() {
        let registry = registry_with(vec![CuePattern::notify("a", ["A"], 1_000)]);
        let history = EventHistoryBuffer::new(10);
        let mut matcher = PatternMatcher::new(5_000);

        assert!(matcher.check(&registry, &history, 0).is_empty());
    }
}
