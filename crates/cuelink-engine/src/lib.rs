//! Event-to-haptic cue translation engine.
//!
//! Observes a stream of timestamped events, detects multi-event
//! sequences within bounded time windows, synthesizes a sensory cue
//! per event, and encodes cues into vibration pulse sequences for an
//! injected haptic sink.
//!
//! # Architecture
//!
//! ```text
//! trigger(kind, payload)
//!     │
//!     ▼
//! ┌─────────────────────── CueEngine ────────────────────────┐
//! │                                                          │
//! │  EventHistoryBuffer ──► PatternMatcher ──► observer      │
//! │        │                                                 │
//! │  CueSynthesizer ◄──► CueCache                            │
//! │        │                                                 │
//! │        ▼                                                 │
//! │  VibrationEncoder ──► HapticSink                         │
//! │        │                                                 │
//! │        └─────────────► CueSink                           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Concurrency
//!
//! Single-threaded and synchronous: every operation runs to
//! completion on the caller's thread. The debounce "timer" is a
//! per-pattern deadline checked against the injected [`Clock`], so no
//! background tasks exist to leak. Multi-threaded hosts must wrap the
//! whole engine behind one owner (queue or mutex); its buffers and
//! debounce state form a single unit of mutation.
//!
//! # Error Philosophy
//!
//! Graceful degradation over failure: this is an accessibility aid,
//! and a missed cue is preferable to a crashed frame. Nothing on the
//! trigger path returns an error; missing inputs fall back to
//! defaults, unknown kinds get a default cue, and an unsupported
//! haptic sink silently no-ops.
//!
//! # Example
//!
//! ```
//! use cuelink_engine::testing::{CollectingSink, ManualClock, RecordingHaptics};
//! use cuelink_engine::CueEngine;
//! use cuelink_types::CuePattern;
//!
//! let clock = ManualClock::new();
//! let sink = CollectingSink::new();
//!
//! let mut engine = CueEngine::builder()
//!     .clock(Box::new(clock.clone()))
//!     .haptics(Box::new(RecordingHaptics::new()))
//!     .cue_sink(Box::new(sink.clone()))
//!     .pattern(CuePattern::notify("double_pop", ["bubblePop"; 2], 1_000))
//!     .build();
//!
//! engine.trigger("bubblePop", serde_json::Map::new());
//! clock.advance(400);
//! engine.trigger("bubblePop", serde_json::Map::new());
//!
//! assert_eq!(sink.cues().len(), 2);
//! ```

mod cache;
mod clock;
mod config;
mod encoder;
mod engine;
mod error;
mod history;
mod matcher;
mod registry;
mod sink;
mod synth;

pub mod testing;

pub use cache::{CueCache, CueKey};
pub use clock::{Clock, SystemClock};
pub use config::EngineConfig;
pub use encoder::{HapticSink, NullHaptics, VibrationEncoder};
pub use engine::{CueEngine, CueEngineBuilder, EngineStatistics, PlayOptions};
pub use error::ConfigError;
pub use history::EventHistoryBuffer;
pub use matcher::{PatternMatch, PatternMatcher};
pub use registry::PatternRegistry;
pub use sink::{CueSink, PatternObserver};
pub use synth::{payload_signature, CueSynthesizer};
