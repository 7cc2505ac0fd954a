//! Outbound callback traits.
//!
//! The engine's outputs flow through these seams: one cue per
//! trigger to the [`CueSink`], and pattern-match candidates to the
//! [`PatternObserver`]. Both are injected at construction; the
//! concrete implementations (visual rendering, narration) live in the
//! host.

use cuelink_types::{Cue, Event, ResponseTag};
use std::fmt::Debug;

/// Receives every synthesized cue, once per trigger.
pub trait CueSink: Debug {
    /// Called with the adapted cue and its encoded pulse sequence.
    fn on_cue(&mut self, cue: &Cue, pulse_sequence: &[u64]);
}

/// Receives debounced pattern-match notifications.
///
/// A reported match is a *candidate*: the engine has already applied
/// its per-pattern debounce, but hosts with stricter policies may
/// filter further.
pub trait PatternObserver: Debug {
    /// Called once per reported match with the matched events
    /// (oldest first) and the pattern's suggested response.
    fn on_pattern_match(&mut self, name: &str, events: &[Event], response: ResponseTag);
}
