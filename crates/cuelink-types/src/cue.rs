//! Cue descriptors — the engine's output vocabulary.
//!
//! A [`Cue`] describes how an event should be *felt*: a frequency, a
//! duration, an intensity, and a vibration pattern tag, plus an
//! optional spatial hint. [`CueTemplate`] is the static base mapping
//! a cue is derived from before analysis-driven adaptation.

use serde::{Deserialize, Serialize};

/// Lowest frequency a cue may carry, in Hz.
///
/// Adaptation scales frequencies down for low-pitched sources; the
/// floor keeps the result in a tactile-perceivable range.
pub const FREQUENCY_FLOOR_HZ: f64 = 20.0;

/// Vibration pattern tag.
///
/// Names a pulse-sequence template in the vibration encoder. Tags
/// without a named template ([`Fade`](Self::Fade),
/// [`Ascending`](Self::Ascending)) encode via the single-pulse
/// fallback.
///
/// | Tag | Encoded sequence (ms) |
/// |-----|-----------------------|
/// | `Short` | `[duration]` |
/// | `Double` | `[duration/2, 100, duration/2]` |
/// | `Rapid` | `[50, 50, 50, 50, 50, 50]` |
/// | `Celebration` | `[100, 50, 150, 50, 100, 50, 200]` |
/// | `Urgent` | `[200, 100, 200, 100, 200]` |
/// | `Fade`, `Ascending` | `[duration]` (fallback) |
/// | `Custom(v)` | `v` verbatim |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternTag {
    /// One pulse of the cue's duration.
    Short,
    /// Two pulses split around a 100 ms gap.
    Double,
    /// Six quick 50 ms pulses.
    Rapid,
    /// Festive multi-pulse burst.
    Celebration,
    /// Insistent alternating pattern, duration-independent.
    Urgent,
    /// Tapering pattern (no named template; single-pulse fallback).
    Fade,
    /// Rising pattern (no named template; single-pulse fallback).
    Ascending,
    /// Explicit pulse sequence, passed to the encoder verbatim.
    Custom(Vec<u64>),
}

impl PatternTag {
    /// Returns `true` if this tag carries an explicit pulse sequence.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

/// Static base mapping for an event kind, before adaptation.
///
/// Templates live in the synthesizer's base-mapping table and in the
/// cue cache. They carry no timestamp or spatial data; those are
/// stamped per synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueTemplate {
    /// Base frequency in Hz.
    pub frequency_hz: f64,
    /// Base duration in milliseconds.
    pub duration_ms: u64,
    /// Base intensity in `[0, 1]`.
    pub intensity: f64,
    /// Vibration pattern tag.
    pub tag: PatternTag,
}

impl CueTemplate {
    /// Creates a template, clamping intensity to `[0, 1]` and
    /// frequency to the [`FREQUENCY_FLOOR_HZ`] floor.
    #[must_use]
    pub fn new(frequency_hz: f64, duration_ms: u64, intensity: f64, tag: PatternTag) -> Self {
        Self {
            frequency_hz: frequency_hz.max(FREQUENCY_FLOOR_HZ),
            duration_ms,
            intensity: intensity.clamp(0.0, 1.0),
            tag,
        }
    }
}

/// A synthesized sensory cue.
///
/// Produced by the synthesizer once per trigger, consumed immediately
/// by the vibration encoder and the host's cue sink.
///
/// # Invariants
///
/// - `intensity` is always in `[0, 1]`
/// - `frequency_hz` is always `>=` [`FREQUENCY_FLOOR_HZ`]
///
/// Both are enforced by [`Cue::new`] and by the synthesizer's
/// adaptation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Kind of the event this cue was synthesized for.
    pub source_kind: String,
    /// Frequency in Hz, `>=` [`FREQUENCY_FLOOR_HZ`].
    pub frequency_hz: f64,
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Intensity in `[0, 1]`.
    pub intensity: f64,
    /// Vibration pattern tag.
    pub tag: PatternTag,
    /// Optional spatial hint `(x, y)`, copied from analysis unchanged.
    pub spatial: Option<(f64, f64)>,
    /// Synthesis timestamp in milliseconds.
    pub timestamp_ms: u64,
}

impl Cue {
    /// Creates a cue, clamping intensity and frequency to their
    /// invariant ranges.
    #[must_use]
    pub fn new(
        source_kind: impl Into<String>,
        frequency_hz: f64,
        duration_ms: u64,
        intensity: f64,
        tag: PatternTag,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            source_kind: source_kind.into(),
            frequency_hz: frequency_hz.max(FREQUENCY_FLOOR_HZ),
            duration_ms,
            intensity: intensity.clamp(0.0, 1.0),
            tag,
            spatial: None,
            timestamp_ms,
        }
    }

    /// Builds a cue from a base template.
    #[must_use]
    pub fn from_template(
        source_kind: impl Into<String>,
        template: &CueTemplate,
        timestamp_ms: u64,
    ) -> Self {
        Self::new(
            source_kind,
            template.frequency_hz,
            template.duration_ms,
            template.intensity,
            template.tag.clone(),
            timestamp_ms,
        )
    }
}
