//! Stamp current time use case.

use clockshop_domain::{Clock, ClockCollection};

use crate::ports::TimeSource;

/// Use case for appending the current wall-clock time to a collection.
pub struct StampCurrentTime<T: TimeSource> {
    time: T,
}

impl<T: TimeSource> StampCurrentTime<T> {
    /// Creates a new `StampCurrentTime` use case.
    #[must_use]
    pub const fn new(time: T) -> Self {
        Self { time }
    }

    /// Reads the time source and appends the result. Returns the new clock.
    pub fn execute(&self, clocks: &mut ClockCollection) -> Clock {
        let clock = Clock::from(self.time.now());
        clocks.add(clock);
        tracing::debug!(%clock, "stamped current time");
        clock
    }
}
