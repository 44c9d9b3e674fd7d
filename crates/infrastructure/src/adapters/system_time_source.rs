//! System time source adapter

use chrono::{Local, NaiveTime};
use clockshop_application::ports::TimeSource;

/// Time source reading the local wall clock in 24-hour form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    /// Creates a new system time source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use clockshop_domain::Clock;

    #[test]
    fn test_system_time_source() {
        let now = SystemTimeSource::new().now();
        // Just verify the reading converts to a valid clock
        let clock = Clock::from(now);
        assert!(clock.hour() < 24);
        assert_eq!(u32::from(clock.minute()), now.minute());
    }
}
