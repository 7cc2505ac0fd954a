//! Vibration encoding.
//!
//! Converts a [`Cue`] into a concrete pulse sequence (milliseconds,
//! alternating on/off) and hands it to the injected [`HapticSink`].
//! Two paths exist and both are kept, since call sites supply either
//! a structured cue or an ad-hoc duration/intensity pair:
//!
//! - [`encode`](VibrationEncoder::encode) — named template table
//!   keyed by [`PatternTag`].
//! - [`encode_raw`](VibrationEncoder::encode_raw) — generic
//!   single-pulse path scaling a clamped duration by a clamped
//!   intensity.
//!
//! Encoding is a pure function of its input; an unsupported sink
//! changes nothing about the computed sequence, only whether the
//! device buzzes.

use cuelink_types::{Cue, PatternTag};
use std::fmt::Debug;
use tracing::debug;

/// Injected haptic output capability.
///
/// Replaces ambient device detection: the host decides at
/// construction whether a real vibration device backs the engine,
/// which keeps tests deterministic.
pub trait HapticSink: Debug {
    /// Returns `true` if this sink can actually vibrate.
    fn supported(&self) -> bool;

    /// Plays a pulse sequence (ms, alternating on/off).
    ///
    /// Implementations for unsupported devices must no-op silently.
    fn vibrate(&mut self, sequence: &[u64]);
}

/// A [`HapticSink`] for hosts without haptic output. Always
/// unsupported; `vibrate` is a silent no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHaptics;

impl HapticSink for NullHaptics {
    fn supported(&self) -> bool {
        false
    }

    fn vibrate(&mut self, _sequence: &[u64]) {}
}

/// Encodes cues into pulse sequences and drives a [`HapticSink`].
#[derive(Debug)]
pub struct VibrationEncoder {
    sink: Box<dyn HapticSink>,
}

impl VibrationEncoder {
    /// Creates an encoder around the given sink.
    #[must_use]
    pub fn new(sink: Box<dyn HapticSink>) -> Self {
        Self { sink }
    }

    /// Returns `true` if the underlying sink can vibrate.
    #[must_use]
    pub fn supported(&self) -> bool {
        self.sink.supported()
    }

    /// Encodes a cue via the named template table.
    ///
    /// | Tag | Sequence (ms) |
    /// |-----|---------------|
    /// | `Short` | `[d]` |
    /// | `Double` | `[d/2, 100, d/2]` |
    /// | `Rapid` | `[50, 50, 50, 50, 50, 50]` |
    /// | `Celebration` | `[100, 50, 150, 50, 100, 50, 200]` |
    /// | `Urgent` | `[200, 100, 200, 100, 200]` |
    /// | `Custom(v)` | `v` verbatim |
    /// | `Fade`, `Ascending` | `[d]` fallback |
    ///
    /// `Rapid`, `Celebration` and `Urgent` are duration-independent
    /// by design.
    #[must_use]
    pub fn encode(cue: &Cue) -> Vec<u64> {
        let d = cue.duration_ms;
        match &cue.tag {
            PatternTag::Short => vec![d],
            PatternTag::Double => vec![d / 2, 100, d / 2],
            PatternTag::Rapid => vec![50; 6],
            PatternTag::Celebration => vec![100, 50, 150, 50, 100, 50, 200],
            PatternTag::Urgent => vec![200, 100, 200, 100, 200],
            PatternTag::Custom(sequence) => sequence.clone(),
            PatternTag::Fade | PatternTag::Ascending => vec![d],
        }
    }

    /// Generic encoder for ad-hoc duration/intensity pairs:
    /// `[round(clamp(duration, 50, 1000) * clamp(intensity, 0.1, 1.0))]`.
    #[must_use]
    pub fn encode_raw(duration_ms: u64, intensity: f64) -> Vec<u64> {
        let duration = duration_ms.clamp(50, 1_000) as f64;
        let intensity = intensity.clamp(0.1, 1.0);
        vec![(duration * intensity).round() as u64]
    }

    /// Encodes a cue and plays it on the sink.
    ///
    /// Always computes and returns the sequence; the sink call is a
    /// no-op when haptics are unsupported.
    pub fn play(&mut self, cue: &Cue) -> Vec<u64> {
        let sequence = Self::encode(cue);
        if self.sink.supported() {
            self.sink.vibrate(&sequence);
        } else {
            debug!(kind = %cue.source_kind, "haptics unsupported, sequence computed only");
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuelink_types::Cue;

    fn cue_with(tag: PatternTag, duration_ms: u64) -> Cue {
        Cue::new("test", 100.0, duration_ms, 0.5, tag, 0)
    }

    // ── Named templates ──────────────────────────────────────

    #[test]
    fn short_is_single_pulse_of_duration() {
        assert_eq!(VibrationEncoder::encode(&cue_with(PatternTag::Short, 240)), vec![240]);
    }

    #[test]
    fn double_splits_around_gap() {
        assert_eq!(
            VibrationEncoder::encode(&cue_with(PatternTag::Double, 300)),
            vec![150, 100, 150]
        );
    }

    #[test]
    fn rapid_is_duration_independent() {
        assert_eq!(
            VibrationEncoder::encode(&cue_with(PatternTag::Rapid, 9_999)),
            vec![50, 50, 50, 50, 50, 50]
        );
    }

    #[test]
    fn celebration_template() {
        assert_eq!(
            VibrationEncoder::encode(&cue_with(PatternTag::Celebration, 1)),
            vec![100, 50, 150, 50, 100, 50, 200]
        );
    }

    #[test]
    fn urgent_is_deterministic_regardless_of_duration() {
        for duration in [1, 200, 999] {
            assert_eq!(
                VibrationEncoder::encode(&cue_with(PatternTag::Urgent, duration)),
                vec![200, 100, 200, 100, 200]
            );
        }
    }

    #[test]
    fn custom_passes_verbatim() {
        let sequence = vec![7, 3, 7];
        assert_eq!(
            VibrationEncoder::encode(&cue_with(PatternTag::Custom(sequence.clone()), 500)),
            sequence
        );
    }

    #[test]
    fn unnamed_tags_fall_back_to_duration() {
        assert_eq!(VibrationEncoder::encode(&cue_with(PatternTag::Fade, 600)), vec![600]);
        assert_eq!(
            VibrationEncoder::encode(&cue_with(PatternTag::Ascending, 600)),
            vec![600]
        );
    }

    // ── Generic path ─────────────────────────────────────────

    #[test]
    fn raw_scales_duration_by_intensity() {
        assert_eq!(VibrationEncoder::encode_raw(200, 0.5), vec![100]);
    }

    #[test]
    fn raw_clamps_duration_range() {
        assert_eq!(VibrationEncoder::encode_raw(10, 1.0), vec![50]);
        assert_eq!(VibrationEncoder::encode_raw(10_000, 1.0), vec![1_000]);
    }

    #[test]
    fn raw_clamps_intensity_range() {
        assert_eq!(VibrationEncoder::encode_raw(100, 0.0), vec![10]);
        assert_eq!(VibrationEncoder::encode_raw(100, 7.0), vec![100]);
    }

    #[test]
    fn raw_rounds_result() {
        // 55 * 0.5 = 27.5 → 28
        assert_eq!(VibrationEncoder::encode_raw(55, 0.5), vec![28]);
    }

    // ── Sink behavior ────────────────────────────────────────

    #[test]
    fn unsupported_sink_still_computes_sequence() {
        let mut encoder = VibrationEncoder::new(Box::new(NullHaptics));
        let sequence = encoder.play(&cue_with(PatternTag::Urgent, 999));
        assert_eq!(sequence, vec![200, 100, 200, 100, 200]);
        assert!(!encoder.supported());
    }

    #[test]
    fn supported_sink_receives_sequence() {
        use crate::testing::RecordingHaptics;

        let recorder = RecordingHaptics::new();
        let mut encoder = VibrationEncoder::new(Box::new(recorder.clone()));
        encoder.play(&cue_with(PatternTag::Double, 200));

        let played = recorder.sequences();
        assert_eq!(played, vec![vec![100, 100, 100]]);
    }
}
