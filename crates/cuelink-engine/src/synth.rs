//! Cue synthesis.
//!
//! Maps an event (kind + payload) and optional signal analysis into a
//! [`Cue`]. Resolution order:
//!
//! 1. Cache hit on `(kind, payload signature)` → reuse the cached
//!    *base* template, skip base resolution.
//! 2. Base-mapping table lookup keyed by the full dotted kind.
//! 3. Default cue built from analysis values (or fixed fallbacks).
//!
//! The freshly resolved base is stored in the cache; adaptation is
//! then applied in every case, so a hit and a miss both yield a cue
//! adapted to the *current* analysis.

use crate::cache::CueCache;
use cuelink_types::{AnalysisResult, Cue, CueTemplate, PatternTag, FREQUENCY_FLOOR_HZ};
use serde_json::{Map, Value};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Reference pitch for frequency adaptation (A4).
pub const REFERENCE_PITCH_HZ: f64 = 440.0;

const DEFAULT_FREQUENCY_HZ: f64 = 100.0;
const DEFAULT_DURATION_MS: u64 = 200;
const DEFAULT_INTENSITY: f64 = 0.5;

/// Derives the cache signature of an event payload.
///
/// Explicit and typed: scalar fields (strings, numbers, booleans) are
/// hashed in sorted key order; nested objects and arrays are ignored.
/// Sorting makes the signature independent of map insertion order, so
/// two payloads with the same scalar fields always collide — which is
/// the point: they describe "the same kind of event".
#[must_use]
pub fn payload_signature(payload: &Map<String, Value>) -> u64 {
    let mut scalars: Vec<(&String, &Value)> = payload
        .iter()
        .filter(|(_, v)| matches!(v, Value::String(_) | Value::Number(_) | Value::Bool(_)))
        .collect();
    scalars.sort_by_key(|(k, _)| *k);

    let mut hasher = DefaultHasher::new();
    for (key, value) in scalars {
        key.hash(&mut hasher);
        value.to_string().hash(&mut hasher);
    }
    hasher.finish()
}

/// Synthesizes cues from events and analysis.
///
/// Holds the static base-mapping table and the adaptation flags.
/// Never errors: every missing input degrades to a default.
#[derive(Debug)]
pub struct CueSynthesizer {
    base_mappings: HashMap<String, CueTemplate>,
    adapt_frequency: bool,
    adapt_intensity: bool,
    spatial_passthrough: bool,
}

impl CueSynthesizer {
    /// Creates a synthesizer with the built-in base-mapping table and
    /// the given adaptation flags.
    #[must_use]
    pub fn new(adapt_frequency: bool, adapt_intensity: bool, spatial_passthrough: bool) -> Self {
        Self {
            base_mappings: builtin_mappings(),
            adapt_frequency,
            adapt_intensity,
            spatial_passthrough,
        }
    }

    /// Adds or overrides a base mapping for a dotted event kind.
    pub fn set_mapping(&mut self, kind: impl Into<String>, template: CueTemplate) {
        self.base_mappings.insert(kind.into(), template);
    }

    /// Number of base mappings (built-in plus host-added).
    #[must_use]
    pub fn mapping_count(&self) -> usize {
        self.base_mappings.len()
    }

    /// Synthesizes a cue for an event.
    ///
    /// `cache` receives the resolved base template on a miss
    /// (insert-only-after-compute); adaptation always runs against
    /// the current `analysis`.
    pub fn synthesize(
        &self,
        kind: &str,
        payload: &Map<String, Value>,
        analysis: Option<&AnalysisResult>,
        now_ms: u64,
        cache: &mut CueCache,
    ) -> Cue {
        let key = (kind.to_string(), payload_signature(payload));

        let base = match cache.get(&key) {
            Some(template) => template.clone(),
            None => {
                let template = self.resolve_base(kind, analysis);
                cache.insert(key, template.clone());
                template
            }
        };

        self.adapt(kind, base, analysis, now_ms)
    }

    /// Resolves the base template: exact table lookup on the full
    /// dotted kind, falling through to the analysis-derived default.
    fn resolve_base(&self, kind: &str, analysis: Option<&AnalysisResult>) -> CueTemplate {
        if let Some(template) = self.base_mappings.get(kind) {
            return template.clone();
        }

        debug!(kind, "no base mapping, synthesizing default cue");
        let frequency = analysis
            .and_then(|a| a.frequency)
            .filter(|f| *f > 0.0)
            .unwrap_or(DEFAULT_FREQUENCY_HZ);
        let duration = analysis
            .and_then(|a| a.duration_ms)
            .unwrap_or(DEFAULT_DURATION_MS);
        let intensity = analysis
            .and_then(|a| a.amplitude)
            .filter(|a| *a > 0.0)
            .unwrap_or(DEFAULT_INTENSITY);

        CueTemplate::new(
            frequency,
            duration,
            intensity,
            PatternTag::Custom(vec![duration]),
        )
    }

    /// Applies the flag-gated adaptation rules and stamps the
    /// timestamp.
    fn adapt(
        &self,
        kind: &str,
        base: CueTemplate,
        analysis: Option<&AnalysisResult>,
        now_ms: u64,
    ) -> Cue {
        let mut cue = Cue::from_template(kind, &base, now_ms);

        let Some(analysis) = analysis else {
            return cue;
        };

        if self.adapt_frequency {
            if let Some(frequency) = analysis.frequency.filter(|f| *f > 0.0) {
                cue.frequency_hz =
                    (cue.frequency_hz * (frequency / REFERENCE_PITCH_HZ)).max(FREQUENCY_FLOOR_HZ);
            }
        }

        if self.adapt_intensity {
            if let Some(amplitude) = analysis.amplitude.filter(|a| *a > 0.0) {
                cue.intensity = (cue.intensity * amplitude).min(1.0);
            }
        }

        if self.spatial_passthrough {
            if let Some(position) = analysis.spatial_position {
                cue.spatial = Some(position);
            }
        }

        cue
    }
}

impl Default for CueSynthesizer {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

/// Built-in base-mapping table.
///
/// Keys are full dotted event kinds; a parent key is never consulted
/// for a child kind and vice versa (exact match only, misses fall to
/// the default cue).
fn builtin_mappings() -> HashMap<String, CueTemplate> {
    let t = CueTemplate::new;
    HashMap::from([
        ("bubblePop".into(), t(150.0, 80, 0.5, PatternTag::Short)),
        ("bubblePop.rainbow".into(), t(250.0, 120, 0.6, PatternTag::Double)),
        ("bubblePop.boss".into(), t(120.0, 250, 0.9, PatternTag::Double)),
        ("bubbleBurst".into(), t(180.0, 160, 0.6, PatternTag::Double)),
        ("combo".into(), t(300.0, 150, 0.7, PatternTag::Rapid)),
        ("levelUp".into(), t(440.0, 350, 0.8, PatternTag::Celebration)),
        (
            "achievement.unlocked".into(),
            t(500.0, 400, 0.8, PatternTag::Celebration),
        ),
        (
            "gameStateChange.warning".into(),
            t(400.0, 200, 0.7, PatternTag::Urgent),
        ),
        (
            "gameStateChange.danger".into(),
            t(450.0, 300, 0.9, PatternTag::Urgent),
        ),
        (
            "gameStateChange.gameOver".into(),
            t(80.0, 600, 1.0, PatternTag::Fade),
        ),
        ("uiInteraction.click".into(), t(200.0, 25, 0.3, PatternTag::Short)),
        ("uiInteraction.hover".into(), t(180.0, 15, 0.2, PatternTag::Short)),
        ("notification".into(), t(220.0, 100, 0.5, PatternTag::Double)),
        ("error".into(), t(100.0, 300, 0.8, PatternTag::Urgent)),
    ])
}
