//! Sequence patterns — named multi-event shapes the matcher watches for.
//!
//! A [`CuePattern`] is satisfied when the last `k` recorded events
//! match its `sequence` elementwise, in order, within
//! `time_window_ms` of each other. Patterns are registered at engine
//! construction and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// How the host should respond to a pattern match.
///
/// The engine reports the tag alongside the match; it does not act on
/// it itself (rendering and narration are host concerns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTag {
    /// Neutral notification.
    Notify,
    /// Positive reinforcement (combos, streaks).
    Celebrate,
    /// Attention-demanding (danger buildup).
    Warn,
    /// Match is tracked for statistics but not surfaced.
    Silent,
}

/// A named, ordered sequence of event kinds with a time window.
///
/// # Matching Semantics
///
/// - Exact suffix match: the *last* `sequence.len()` events must equal
///   the sequence elementwise — no gaps or skips.
/// - Inclusive window: `last.timestamp - first.timestamp <=
///   time_window_ms`.
///
/// # Example
///
/// ```
/// use cuelink_types::{CuePattern, ResponseTag};
///
/// let combo = CuePattern::new(
///     "combo_buildup",
///     ["bubblePop", "bubblePop", "bubblePop"],
///     2_000,
///     ResponseTag::Celebrate,
/// );
/// assert_eq!(combo.sequence.len(), 3);
/// assert_eq!(combo.time_window_ms, 2_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuePattern {
    /// Unique pattern name; duplicate registrations overwrite.
    pub name: String,
    /// Ordered event kinds, oldest first.
    pub sequence: Vec<String>,
    /// Maximum span between first and last matched event, inclusive.
    pub time_window_ms: u64,
    /// Suggested host response.
    pub response: ResponseTag,
}

impl CuePattern {
    /// Creates a pattern.
    #[must_use]
    pub fn new<I, S>(
        name: impl Into<String>,
        sequence: I,
        time_window_ms: u64,
        response: ResponseTag,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            sequence: sequence.into_iter().map(Into::into).collect(),
            time_window_ms,
            response,
        }
    }

    /// Creates a pattern with the [`Notify`](ResponseTag::Notify)
    /// response.
    #[must_use]
    pub fn notify<I, S>(name: impl Into<String>, sequence: I, time_window_ms: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, sequence, time_window_ms, ResponseTag::Notify)
    }

    /// Returns `true` if this pattern can never match: an empty
    /// sequence or a zero time window.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.sequence.is_empty() || (self.time_window_ms == 0 && self.sequence.len() > 1)
    }
}
