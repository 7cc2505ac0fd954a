//! Clock abstraction.
//!
//! The engine never reads wall-clock time directly; every timestamp
//! comes from an injected [`Clock`]. Tests drive a manual clock (see
//! [`testing::ManualClock`](crate::testing::ManualClock)) to simulate
//! windows and debounce deadlines without real delays.

use std::fmt::Debug;
use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond time source.
///
/// Implementations must be monotonic-or-wallclock: values may only
/// move forward within one engine's lifetime, since history ordering
/// and debounce deadlines compare them directly.
pub trait Clock: Debug {
    /// Returns the current time in milliseconds.
    fn now_ms(&self) -> u64;
}

/// Wall-clock [`Clock`] backed by [`SystemTime`].
///
/// The production default. Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
