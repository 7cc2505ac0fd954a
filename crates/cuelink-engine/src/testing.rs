//! Testing harnesses for the engine.
//!
//! Deterministic doubles for the engine's injected capabilities:
//! a manually advanced clock, a recording haptic sink, and collecting
//! implementations of the outbound callbacks. All are cheaply
//! cloneable handles over shared state, so a test keeps one handle
//! and gives the engine another.
//!
//! # Example
//!
//! ```
//! use cuelink_engine::testing::{CollectingSink, ManualClock, RecordingHaptics};
//! use cuelink_engine::CueEngine;
//!
//! let clock = ManualClock::new();
//! let haptics = RecordingHaptics::new();
//! let sink = CollectingSink::new();
//!
//! let mut engine = CueEngine::builder()
//!     .clock(Box::new(clock.clone()))
//!     .haptics(Box::new(haptics.clone()))
//!     .cue_sink(Box::new(sink.clone()))
//!     .build();
//!
//! engine.trigger("bubblePop", serde_json::Map::new());
//! clock.advance(250);
//! engine.trigger("bubblePop", serde_json::Map::new());
//!
//! assert_eq!(sink.cues().len(), 2);
//! assert_eq!(haptics.sequences().len(), 2);
//! ```

use crate::clock::Clock;
use crate::encoder::HapticSink;
use crate::sink::{CueSink, PatternObserver};
use cuelink_types::{Cue, Event, ResponseTag};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// A [`Clock`] advanced explicitly by the test.
///
/// Starts at 0 ms. Clones share the same underlying time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock at t = 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock at the given time.
    #[must_use]
    pub fn at(now_ms: u64) -> Self {
        Self {
            now_ms: Arc::new(AtomicU64::new(now_ms)),
        }
    }

    /// Advances the clock by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }

    /// Sets the clock to an absolute time.
    pub fn set(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

/// A supported [`HapticSink`] that records every played sequence.
#[derive(Debug, Clone, Default)]
pub struct RecordingHaptics {
    sequences: Arc<Mutex<Vec<Vec<u64>>>>,
}

impl RecordingHaptics {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every sequence played so far, in order.
    #[must_use]
    pub fn sequences(&self) -> Vec<Vec<u64>> {
        self.sequences.lock().expect("recorder lock").clone()
    }
}

impl HapticSink for RecordingHaptics {
    fn supported(&self) -> bool {
        true
    }

    fn vibrate(&mut self, sequence: &[u64]) {
        self.sequences
            .lock()
            .expect("recorder lock")
            .push(sequence.to_vec());
    }
}

/// A [`CueSink`] collecting every cue and its pulse sequence.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    cues: Arc<Mutex<Vec<(Cue, Vec<u64>)>>>,
}

impl CollectingSink {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected cues, in trigger order.
    #[must_use]
    pub fn cues(&self) -> Vec<Cue> {
        self.cues
            .lock()
            .expect("sink lock")
            .iter()
            .map(|(cue, _)| cue.clone())
            .collect()
    }

    /// Returns cue/sequence pairs, in trigger order.
    #[must_use]
    pub fn cues_with_sequences(&self) -> Vec<(Cue, Vec<u64>)> {
        self.cues.lock().expect("sink lock").clone()
    }
}

impl CueSink for CollectingSink {
    fn on_cue(&mut self, cue: &Cue, pulse_sequence: &[u64]) {
        self.cues
            .lock()
            .expect("sink lock")
            .push((cue.clone(), pulse_sequence.to_vec()));
    }
}

/// A [`PatternObserver`] collecting every reported match.
#[derive(Debug, Clone, Default)]
pub struct CollectingObserver {
    matches: Arc<Mutex<Vec<(String, Vec<Event>, ResponseTag)>>>,
}

impl CollectingObserver {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns collected matches as `(name, events, response)`.
    #[must_use]
    pub fn matches(&self) -> Vec<(String, Vec<Event>, ResponseTag)> {
        self.matches.lock().expect("observer lock").clone()
    }

    /// Returns only the matched pattern names, in report order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.matches
            .lock()
            .expect("observer lock")
            .iter()
            .map(|(name, _, _)| name.clone())
            .collect()
    }
}

impl PatternObserver for CollectingObserver {
    fn on_pattern_match(&mut self, name: &str, events: &[Event], response: ResponseTag) {
        self.matches
            .lock()
            .expect("observer lock")
            .push((name.to_string(), events.to_vec(), response));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0);

        clock.advance(150);
        assert_eq!(clock.now_ms(), 150);

        clock.set(1_000);
        assert_eq!(clock.now_ms(), 1_000);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::at(10);
        let handle = clock.clone();
        clock.advance(5);
        assert_eq!(handle.now_ms(), 15);
    }

    #[test]
    fn recording_haptics_is_supported() {
        let mut haptics = RecordingHaptics::new();
        assert!(haptics.supported());

        haptics.vibrate(&[100, 50, 100]);
        assert_eq!(haptics.sequences(), vec![vec![100, 50, 100]]);
    }
}
