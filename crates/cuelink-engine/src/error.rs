//! Engine errors.
//!
//! Almost nothing in this engine errors: the trigger path absorbs
//! every failure mode (missing fields default, unknown kinds get a
//! default cue, unsupported sinks no-op). The exceptions are strict
//! pattern registration and config parsing.
//!
//! # Error Code Convention
//!
//! | Error | Code | Recoverable |
//! |-------|------|-------------|
//! | [`ConfigError::EmptySequence`] | `CUE_EMPTY_SEQUENCE` | No |
//! | [`ConfigError::ZeroTimeWindow`] | `CUE_ZERO_TIME_WINDOW` | No |
//! | [`ConfigError::Parse`] | `CUE_CONFIG_PARSE` | No |
//!
//! None are recoverable: a misconfigured pattern or config file will
//! not become valid on retry, only by fixing the definition.

use cuelink_types::ErrorCode;
use thiserror::Error;

/// Registration or configuration error.
///
/// Only produced in strict mode ([`EngineConfig::strict_patterns`]
/// (crate::EngineConfig::strict_patterns)) or when parsing a config
/// file; in lenient mode degenerate patterns are accepted and simply
/// never match.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A pattern was registered with an empty event sequence.
    #[error("pattern '{0}' has an empty sequence")]
    EmptySequence(String),

    /// A multi-event pattern was registered with a zero time window,
    /// so its events can never fall inside the window.
    #[error("pattern '{0}' has a zero time window")]
    ZeroTimeWindow(String),

    /// Failed to parse an engine config document.
    #[error("config parse error: {0}")]
    Parse(String),
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::EmptySequence(_) => "CUE_EMPTY_SEQUENCE",
            Self::ZeroTimeWindow(_) => "CUE_ZERO_TIME_WINDOW",
            Self::Parse(_) => "CUE_CONFIG_PARSE",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}
