//! Signal-analysis results consumed by the synthesizer.
//!
//! Analysis is produced by an external collaborator (an audio or
//! game-signal analyzer); the engine only consumes it. Every field is
//! optional — a missing analysis, or a missing field, degrades to the
//! synthesizer's defaults rather than erroring.

use serde::{Deserialize, Serialize};

/// Optional measurements about the signal behind an event.
///
/// # Defaulting
///
/// | Field | Used for | Default when absent |
/// |-------|----------|---------------------|
/// | `frequency` | frequency adaptation, default cue | 100 Hz (default cue) |
/// | `amplitude` | intensity adaptation, default cue | 0.5 (default cue) |
/// | `duration_ms` | default cue duration | 200 ms |
/// | `spatial_position` | spatial passthrough | none |
///
/// # Example
///
/// ```
/// use cuelink_types::AnalysisResult;
///
/// let analysis = AnalysisResult::new()
///     .with_frequency(220.0)
///     .with_amplitude(0.8)
///     .with_spatial(0.25, 0.75);
///
/// assert_eq!(analysis.frequency, Some(220.0));
/// assert_eq!(analysis.spatial_position, Some((0.25, 0.75)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Dominant frequency of the source signal, in Hz.
    pub frequency: Option<f64>,
    /// Amplitude of the source signal, nominally in `[0, 1]`.
    pub amplitude: Option<f64>,
    /// Duration of the source signal, in milliseconds.
    pub duration_ms: Option<u64>,
    /// Spatial position hint `(x, y)`.
    pub spatial_position: Option<(f64, f64)>,
}

impl AnalysisResult {
    /// Creates an empty analysis (all fields absent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dominant frequency.
    #[must_use]
    pub fn with_frequency(mut self, hz: f64) -> Self {
        self.frequency = Some(hz);
        self
    }

    /// Sets the amplitude.
    #[must_use]
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = Some(amplitude);
        self
    }

    /// Sets the duration.
    #[must_use]
    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Sets the spatial position hint.
    #[must_use]
    pub fn with_spatial(mut self, x: f64, y: f64) -> Self {
        self.spatial_position = Some((x, y));
        self
    }
}
