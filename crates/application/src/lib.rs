//! ClockShop Application - Use cases and ports
//!
//! This crate wires the clock domain to the outside world through ports:
//! loading clocks from a file, stamping the current time and writing
//! the collection back out.

pub mod error;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
#[allow(clippy::unwrap_used, missing_docs)]
mod test_support;

pub use error::{ApplicationError, ApplicationResult};
