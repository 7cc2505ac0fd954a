//! Unified error interface for cuelink.
//!
//! The engine itself favors graceful degradation — a missed cue beats
//! a crashed frame — so very few operations error at all. The ones
//! that do (strict pattern registration, config parsing) implement
//! [`ErrorCode`] so hosts get machine-readable codes and
//! recoverability info in one shape.
//!
//! # Code Convention
//!
//! All cuelink error codes are UPPER_SNAKE_CASE with the `CUE_`
//! prefix, e.g. `CUE_EMPTY_SEQUENCE`.
//!
//! # Example
//!
//! ```
//! use cuelink_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum HostError {
//!     SinkGone,
//! }
//!
//! impl ErrorCode for HostError {
//!     fn code(&self) -> &'static str {
//!         "CUE_SINK_GONE"
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         true
//!     }
//! }
//!
//! assert_eq!(HostError::SinkGone.code(), "CUE_SINK_GONE");
//! ```

/// Machine-readable error code interface.
///
/// # Recoverability
///
/// An error is recoverable if retrying, or a corrective action by the
/// host, can succeed. Misconfigured pattern definitions are not
/// recoverable (the definition itself must change); transient
/// conditions are.
pub trait ErrorCode {
    /// Returns a stable, UPPER_SNAKE_CASE, `CUE_`-prefixed code.
    fn code(&self) -> &'static str;

    /// Returns whether retry or host action can succeed.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error code follows cuelink conventions:
/// non-empty, prefixed, UPPER_SNAKE_CASE.
///
/// # Panics
///
/// Panics with a descriptive message if validation fails. Intended
/// for use in tests.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Asserts every variant of an error enum at once.
///
/// # Example
///
/// ```
/// use cuelink_types::{assert_error_codes, ErrorCode};
///
/// #[derive(Debug)]
/// enum E { A, B }
///
/// impl ErrorCode for E {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::A => "CUE_A",
///             Self::B => "CUE_B",
///         }
///     }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_codes(&[E::A, E::B], "CUE_");
/// ```
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
