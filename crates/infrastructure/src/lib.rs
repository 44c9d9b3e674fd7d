//! ClockShop Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;

pub use adapters::SystemTimeSource;
pub use persistence::StdFileSystem;
