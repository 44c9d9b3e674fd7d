//! Domain error types

use std::fmt;

use thiserror::Error;

/// Identifies one of the three fields of a [`Clock`](crate::Clock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    /// Hour of day (0-23).
    Hour,
    /// Minute of hour (0-59).
    Minute,
    /// Second of minute (0-59).
    Second,
}

impl TimeField {
    /// Returns the largest value the field accepts.
    #[must_use]
    pub const fn max(self) -> u8 {
        match self {
            Self::Hour => 23,
            Self::Minute | Self::Second => 59,
        }
    }

    /// Returns the field name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A clock field was set outside its valid range.
    #[error("{field} out of range (0-{max}): {value}", max = .field.max())]
    OutOfRange {
        /// The field that failed validation.
        field: TimeField,
        /// The rejected value.
        value: i64,
    },

    /// A clock was asked to advance by a negative amount.
    #[error("cannot advance {field} by a negative amount: {amount}")]
    NegativeAmount {
        /// The field being advanced.
        field: TimeField,
        /// The rejected amount.
        amount: i64,
    },

    /// A collection was indexed past its end.
    #[error("index {index} is out of range for a collection of {len} clocks")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The collection length at the time of the call.
        len: usize,
    },

    /// The clock text format could not be parsed.
    #[error("parse error at token {position}: {reason}")]
    Parse {
        /// 1-based index of the offending token in the token stream.
        position: usize,
        /// Human readable description of what went wrong.
        reason: String,
    },
}

impl DomainError {
    /// Creates an [`DomainError::OutOfRange`] error.
    #[must_use]
    pub fn out_of_range(field: TimeField, value: impl Into<i64>) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
        }
    }

    /// Creates a [`DomainError::Parse`] error.
    #[must_use]
    pub fn parse(position: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            position,
            reason: reason.into(),
        }
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
