//! Pattern registry.
//!
//! Holds the named sequence patterns the matcher scans for. Patterns
//! are registered at construction time and never mutated afterwards;
//! duplicate names overwrite silently (last-write-wins, documented,
//! not an error).

use crate::error::ConfigError;
use cuelink_types::CuePattern;
use tracing::warn;

/// Registry of named sequence patterns.
///
/// Registration order is preserved; a re-registered name keeps its
/// original position with the new definition.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    patterns: Vec<CuePattern>,
    strict: bool,
}

impl PatternRegistry {
    /// Creates an empty, lenient registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given strictness.
    ///
    /// Strict registries reject degenerate patterns (empty sequence,
    /// zero time window on a multi-event sequence) at registration;
    /// lenient ones accept them, and they simply never match.
    #[must_use]
    pub fn with_strictness(strict: bool) -> Self {
        Self {
            patterns: Vec::new(),
            strict,
        }
    }

    /// Registers a pattern. Duplicate names overwrite silently.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`ConfigError::EmptySequence`] or
    /// [`ConfigError::ZeroTimeWindow`] for degenerate definitions. In
    /// lenient mode, degenerate patterns are accepted with a warning.
    pub fn register(&mut self, pattern: CuePattern) -> Result<(), ConfigError> {
        if pattern.is_degenerate() {
            if self.strict {
                return Err(if pattern.sequence.is_empty() {
                    ConfigError::EmptySequence(pattern.name)
                } else {
                    ConfigError::ZeroTimeWindow(pattern.name)
                });
            }
            warn!(pattern = %pattern.name, "registered pattern can never match");
        }

        if let Some(existing) = self.patterns.iter_mut().find(|p| p.name == pattern.name) {
            *existing = pattern;
        } else {
            self.patterns.push(pattern);
        }
        Ok(())
    }

    /// Iterates registered patterns in registration order.
    pub fn all(&self) -> impl Iterator<Item = &CuePattern> {
        self.patterns.iter()
    }

    /// Number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if no patterns are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
