//! Core types for the cuelink engine.
//!
//! This crate provides the data model shared between the engine and
//! its host: events, cues, sequence patterns, and signal-analysis
//! results.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       SDK Layer                              │
//! │  (External, SemVer stable, safe to depend on)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  cuelink-types  : Event, Cue, CuePattern, ErrorCode ◄── HERE │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Engine Layer                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  cuelink-engine : history, matcher, synthesizer, encoder    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! ```text
//! host event ──► Event ──► CueSynthesizer ──► Cue ──► pulse sequence
//!                  │                           │
//!                  ▼                           ▼
//!            history buffer               haptic sink
//!                  │
//!                  ▼
//!            pattern match (CuePattern)
//! ```
//!
//! # Example
//!
//! ```
//! use cuelink_types::{Cue, CuePattern, Event, PatternTag};
//!
//! let event = Event::new("bubblePop", serde_json::Map::new(), 1_000);
//! assert_eq!(event.kind, "bubblePop");
//!
//! let pattern = CuePattern::notify("combo_buildup", ["bubblePop"; 3], 2_000);
//! assert_eq!(pattern.sequence.len(), 3);
//!
//! let cue = Cue::new("bubblePop", 150.0, 80, 0.6, PatternTag::Short, 1_000);
//! assert!(cue.intensity <= 1.0);
//! ```

mod analysis;
mod cue;
mod error;
mod event;
mod pattern;

pub use analysis::AnalysisResult;
pub use cue::{Cue, CueTemplate, PatternTag, FREQUENCY_FLOOR_HZ};
pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use event::{Event, EventId};
pub use pattern::{CuePattern, ResponseTag};
