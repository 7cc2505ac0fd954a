//! Event types observed by the engine.
//!
//! An [`Event`] is a timestamped occurrence submitted by the host
//! (game logic, audio analysis, UI) via `trigger`. Events are
//! immutable once recorded and live in the engine's bounded history
//! buffer until evicted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Identifier for a recorded [`Event`].
///
/// UUID v4 based: globally unique without coordination, safe to
/// surface in logs and host-side diagnostics.
///
/// # Example
///
/// ```
/// use cuelink_types::EventId;
///
/// let a = EventId::new();
/// let b = EventId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random [`EventId`].
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A timestamped occurrence submitted to the engine.
///
/// # Fields
///
/// | Field | Meaning |
/// |-------|---------|
/// | `kind` | Dotted event kind, e.g. `"gameStateChange.warning"` |
/// | `timestamp_ms` | Milliseconds from the engine's injected clock |
/// | `payload` | Arbitrary host data used for cue-cache signatures |
///
/// # Ordering Contract
///
/// The engine requires callers to submit events with non-decreasing
/// timestamps; insertion order in the history buffer doubles as
/// timestamp order. Violating this does not panic, but pattern
/// matching over an out-of-order buffer may miss or over-report.
///
/// # Example
///
/// ```
/// use cuelink_types::Event;
/// use serde_json::json;
///
/// let mut payload = serde_json::Map::new();
/// payload.insert("comboLevel".into(), json!(3));
///
/// let event = Event::new("combo", payload, 1_500);
/// assert_eq!(event.kind, "combo");
/// assert_eq!(event.timestamp_ms, 1_500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier of this recorded occurrence.
    pub id: EventId,
    /// Dotted event kind (e.g. `"bubblePop"`, `"gameStateChange.warning"`).
    pub kind: String,
    /// Timestamp in milliseconds from the engine's clock.
    pub timestamp_ms: u64,
    /// Host-supplied payload.
    pub payload: Map<String, Value>,
}

impl Event {
    /// Creates a new event with a fresh [`EventId`].
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: Map<String, Value>, timestamp_ms: u64) -> Self {
        Self {
            id: EventId::new(),
            kind: kind.into(),
            timestamp_ms,
            payload,
        }
    }

    /// Creates an event with an empty payload.
    ///
    /// Convenience for hosts that only care about the kind, and for
    /// tests.
    #[must_use]
    pub fn bare(kind: impl Into<String>, timestamp_ms: u64) -> Self {
        Self::new(kind, Map::new(), timestamp_ms)
    }
}
