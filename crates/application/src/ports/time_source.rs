//! Time source port for wall-clock readings

use chrono::NaiveTime;

/// Port for reading the current time of day.
///
/// Implementations report the 24-hour local wall clock. This abstraction
/// allows testing time-dependent code by providing a fixed implementation.
pub trait TimeSource: Send + Sync {
    /// Returns the current local time of day.
    fn now(&self) -> NaiveTime;
}
