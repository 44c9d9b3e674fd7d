//! ClockShop Domain - Core value types
//!
//! This crate defines the clock model for ClockShop: a validated time of
//! day, an ordered collection of them, and the flat text format both are
//! read from and written to. All types here are pure Rust with no I/O.

pub mod clock;
pub mod collection;
pub mod error;
pub mod text;

pub use clock::Clock;
pub use collection::ClockCollection;
pub use error::{DomainError, DomainResult, TimeField};
