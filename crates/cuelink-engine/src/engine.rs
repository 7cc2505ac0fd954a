//! Engine facade.
//!
//! [`CueEngine`] wires the leaf components together and exposes the
//! public contract: per incoming event it records history, synthesizes
//! and encodes a cue, drives the haptic sink and cue sink, and checks
//! for pattern matches.
//!
//! Construction goes through [`CueEngineBuilder`]; every capability
//! (clock, haptics, callbacks) is injected there, which keeps the
//! engine deterministic under test.

use crate::cache::CueCache;
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::encoder::{HapticSink, NullHaptics, VibrationEncoder};
use crate::error::ConfigError;
use crate::history::EventHistoryBuffer;
use crate::matcher::PatternMatcher;
use crate::registry::PatternRegistry;
use crate::sink::{CueSink, PatternObserver};
use crate::synth::CueSynthesizer;
use cuelink_types::{AnalysisResult, CuePattern, CueTemplate, Event};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::warn;

/// Options for [`CueEngine::play_cue`].
///
/// `play_cue(kind, options)` is trigger with the payload and analysis
/// spelled out; `PlayOptions::default()` makes it exactly
/// `trigger(kind, {})`.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Event payload.
    pub payload: Map<String, Value>,
    /// Signal analysis, if the host ran any.
    pub analysis: Option<AnalysisResult>,
}

/// Counters reported by [`CueEngine::statistics`].
///
/// `total_events` and `counts_by_kind` are all-time counters; they
/// keep counting events after history eviction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EngineStatistics {
    /// Events triggered since construction (or the last [`clear`]
    /// (CueEngine::clear)).
    pub total_events: u64,
    /// Per-kind trigger counts.
    pub counts_by_kind: HashMap<String, u64>,
    /// Current cue cache occupancy.
    pub cache_size: usize,
    /// Registered pattern count.
    pub patterns_registered: usize,
}

/// The event-to-cue translation engine.
///
/// Single-threaded and synchronous; see the crate docs for the
/// concurrency contract.
#[derive(Debug)]
pub struct CueEngine {
    config: EngineConfig,
    clock: Box<dyn Clock>,
    history: EventHistoryBuffer,
    registry: PatternRegistry,
    matcher: PatternMatcher,
    synthesizer: CueSynthesizer,
    cache: CueCache,
    encoder: VibrationEncoder,
    cue_sink: Option<Box<dyn CueSink>>,
    observer: Option<Box<dyn PatternObserver>>,
    total_events: u64,
    counts_by_kind: HashMap<String, u64>,
}

impl CueEngine {
    /// Starts building an engine.
    #[must_use]
    pub fn builder() -> CueEngineBuilder {
        CueEngineBuilder::new()
    }

    /// Records an event and runs the full pipeline, with no analysis.
    pub fn trigger(&mut self, kind: &str, payload: Map<String, Value>) {
        self.trigger_with_analysis(kind, payload, None);
    }

    /// Records an event and runs the full pipeline.
    ///
    /// Pipeline per trigger: append to history → synthesize (cache
    /// lookup + adaptation) → encode + haptic sink → cue sink →
    /// prune + pattern check → observer. Never errors; every failure
    /// mode is absorbed per the defaulting rules.
    pub fn trigger_with_analysis(
        &mut self,
        kind: &str,
        payload: Map<String, Value>,
        analysis: Option<&AnalysisResult>,
    ) {
        let now_ms = self.clock.now_ms();
        let event = Event::new(kind, payload, now_ms);

        self.total_events += 1;
        *self.counts_by_kind.entry(kind.to_string()).or_default() += 1;

        let cue = self
            .synthesizer
            .synthesize(kind, &event.payload, analysis, now_ms, &mut self.cache);
        let sequence = self.encoder.play(&cue);

        if let Some(sink) = &mut self.cue_sink {
            sink.on_cue(&cue, &sequence);
        }

        self.history.append(event);
        self.history
            .prune_older_than(now_ms, self.config.history_horizon_ms);

        let matches = self.matcher.check(&self.registry, &self.history, now_ms);
        if let Some(observer) = &mut self.observer {
            for matched in matches {
                observer.on_pattern_match(&matched.name, &matched.events, matched.response);
            }
        }
    }

    /// Convenience wrapper equivalent to [`trigger`](Self::trigger)
    /// with explicit payload and analysis.
    pub fn play_cue(&mut self, kind: &str, options: PlayOptions) {
        self.trigger_with_analysis(kind, options.payload, options.analysis.as_ref());
    }

    /// Returns the recorded history, oldest first, optionally limited
    /// to the last `limit` events.
    #[must_use]
    pub fn history(&self, limit: Option<usize>) -> Vec<Event> {
        match limit {
            Some(n) => self.history.recent(n).into_iter().cloned().collect(),
            None => self.history.iter().cloned().collect(),
        }
    }

    /// Returns the engine's counters.
    #[must_use]
    pub fn statistics(&self) -> EngineStatistics {
        EngineStatistics {
            total_events: self.total_events,
            counts_by_kind: self.counts_by_kind.clone(),
            cache_size: self.cache.len(),
            patterns_registered: self.registry.len(),
        }
    }

    /// Returns `true` if the injected haptic sink can vibrate.
    #[must_use]
    pub fn haptic_supported(&self) -> bool {
        self.encoder.supported()
    }

    /// Clears history, cache, counters and debounce state.
    ///
    /// The debounce reset is the cancel-on-dispose path: no armed
    /// deadline survives a clear.
    pub fn clear(&mut self) {
        self.history.clear();
        self.cache.clear();
        self.matcher.reset();
        self.total_events = 0;
        self.counts_by_kind.clear();
    }
}

/// Builder for [`CueEngine`].
///
/// # Example
///
/// ```
/// use cuelink_engine::{CueEngine, EngineConfig};
/// use cuelink_types::CuePattern;
///
/// let mut config = EngineConfig::new();
/// config.history_capacity = 20;
///
/// let engine = CueEngine::builder()
///     .config(config)
///     .pattern(CuePattern::notify("double_pop", ["bubblePop"; 2], 1_000))
///     .build();
///
/// assert_eq!(engine.statistics().patterns_registered, 1);
/// ```
#[derive(Debug)]
pub struct CueEngineBuilder {
    config: EngineConfig,
    clock: Box<dyn Clock>,
    haptics: Box<dyn HapticSink>,
    cue_sink: Option<Box<dyn CueSink>>,
    observer: Option<Box<dyn PatternObserver>>,
    patterns: Vec<CuePattern>,
    mappings: Vec<(String, CueTemplate)>,
}

impl CueEngineBuilder {
    /// Creates a builder with defaults: system clock, no haptics, no
    /// callbacks, default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            clock: Box::new(SystemClock),
            haptics: Box::new(NullHaptics),
            cue_sink: None,
            observer: None,
            patterns: Vec::new(),
            mappings: Vec::new(),
        }
    }

    /// Sets the engine configuration.
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Injects the clock.
    #[must_use]
    pub fn clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Injects the haptic sink capability.
    #[must_use]
    pub fn haptics(mut self, haptics: Box<dyn HapticSink>) -> Self {
        self.haptics = haptics;
        self
    }

    /// Injects the cue sink callback.
    #[must_use]
    pub fn cue_sink(mut self, sink: Box<dyn CueSink>) -> Self {
        self.cue_sink = Some(sink);
        self
    }

    /// Injects the pattern-match observer callback.
    #[must_use]
    pub fn observer(mut self, observer: Box<dyn PatternObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Adds a pattern to register at construction.
    #[must_use]
    pub fn pattern(mut self, pattern: CuePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Adds or overrides a base mapping for a dotted event kind.
    #[must_use]
    pub fn base_mapping(mut self, kind: impl Into<String>, template: CueTemplate) -> Self {
        self.mappings.push((kind.into(), template));
        self
    }

    /// Builds the engine, enforcing pattern validation per
    /// `strict_patterns`.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first [`ConfigError`] from a
    /// degenerate pattern definition.
    pub fn try_build(self) -> Result<CueEngine, ConfigError> {
        let mut registry = PatternRegistry::with_strictness(self.config.strict_patterns);
        for pattern in self.patterns {
            registry.register(pattern)?;
        }

        let mut synthesizer = CueSynthesizer::new(
            self.config.adapt_frequency,
            self.config.adapt_intensity,
            self.config.spatial_passthrough,
        );
        for (kind, template) in self.mappings {
            synthesizer.set_mapping(kind, template);
        }

        Ok(CueEngine {
            history: EventHistoryBuffer::new(self.config.history_capacity),
            matcher: PatternMatcher::new(self.config.debounce_ms),
            cache: CueCache::new(self.config.cache_capacity),
            encoder: VibrationEncoder::new(self.haptics),
            clock: self.clock,
            cue_sink: self.cue_sink,
            observer: self.observer,
            synthesizer,
            registry,
            config: self.config,
            total_events: 0,
            counts_by_kind: HashMap::new(),
        })
    }

    /// Builds the engine, skipping (with a warning) any pattern that
    /// strict validation would reject.
    ///
    /// Use [`try_build`](Self::try_build) to surface those as errors
    /// instead.
    #[must_use]
    pub fn build(mut self) -> CueEngine {
        if self.config.strict_patterns {
            self.patterns.retain(|pattern| {
                if pattern.is_degenerate() {
                    warn!(pattern = %pattern.name, "skipping degenerate pattern");
                    false
                } else {
                    true
                }
            });
        }
        // Degenerate patterns are either filtered above or accepted
        // leniently, so registration cannot fail here.
        match self.try_build() {
            Ok(engine) => engine,
            Err(_) => unreachable!("degenerate patterns filtered before registration"),
        }
    }
}

impl Default for CueEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
