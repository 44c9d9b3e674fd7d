//! Adapters for application ports.

mod system_time_source;

pub use system_time_source::SystemTimeSource;
