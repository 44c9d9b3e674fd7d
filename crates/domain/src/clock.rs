//! Wall-clock time value.
//!
//! A [`Clock`] holds an hour, minute and second that are always within range.
//! Every mutation validates its input and leaves the value untouched on failure.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult, TimeField};
use crate::text;

const HOURS_IN_DAY: i64 = 24;
const MINUTES_IN_HOUR: i64 = 60;

/// A validated time of day (hour 0-23, minute 0-59, second 0-59).
///
/// Ordering and equality are lexicographic on `(hour, minute, second)`.
/// The default clock reads 23:58:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawClock")]
pub struct Clock {
    hour: u8,
    minute: u8,
    second: u8,
}

/// Unvalidated wire form used when deserializing.
#[derive(Deserialize)]
struct RawClock {
    hour: i32,
    minute: i32,
    second: i32,
}

impl TryFrom<RawClock> for Clock {
    type Error = DomainError;

    fn try_from(raw: RawClock) -> DomainResult<Self> {
        Self::new(raw.hour, raw.minute, raw.second)
    }
}

impl Clock {
    /// Creates a clock at the given time.
    ///
    /// Fields are checked in order hour, minute, second and the first
    /// invalid one is reported.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] if any field is outside its range.
    pub fn new(hour: i32, minute: i32, second: i32) -> DomainResult<Self> {
        Ok(Self {
            hour: validate(TimeField::Hour, hour)?,
            minute: validate(TimeField::Minute, minute)?,
            second: validate(TimeField::Second, second)?,
        })
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59).
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Sets the hour.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] if `hour` is not in 0-23.
    pub fn set_hour(&mut self, hour: i32) -> DomainResult<()> {
        self.hour = validate(TimeField::Hour, hour)?;
        Ok(())
    }

    /// Sets the minute.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] if `minute` is not in 0-59.
    pub fn set_minute(&mut self, minute: i32) -> DomainResult<()> {
        self.minute = validate(TimeField::Minute, minute)?;
        Ok(())
    }

    /// Sets the second.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] if `second` is not in 0-59.
    pub fn set_second(&mut self, second: i32) -> DomainResult<()> {
        self.second = validate(TimeField::Second, second)?;
        Ok(())
    }

    /// Advances the hour by `amount`, wrapping around midnight.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeAmount`] if `amount` is negative.
    pub fn advance_hour(&mut self, amount: i32) -> DomainResult<()> {
        let amount = non_negative(TimeField::Hour, amount)?;
        self.add_hours(amount);
        Ok(())
    }

    /// Advances the minute by `amount`.
    ///
    /// Overflow past 59 is carried into the hour in a single step, so
    /// `advance_minute(125)` on 10:30 moves the hour forward by two.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeAmount`] if `amount` is negative.
    pub fn advance_minute(&mut self, amount: i32) -> DomainResult<()> {
        let amount = non_negative(TimeField::Minute, amount)?;
        let total = i64::from(self.minute) + amount;
        let carry = total / MINUTES_IN_HOUR;
        self.minute = narrow(total % MINUTES_IN_HOUR);
        if carry > 0 {
            self.add_hours(carry);
        }
        Ok(())
    }

    /// Returns the additive hash `hour + minute + second`.
    ///
    /// Distinct clocks frequently share a value; the [`Hash`] impl feeds the
    /// same sum to the hasher so it stays consistent with [`Eq`].
    #[must_use]
    pub fn hash_code(&self) -> u32 {
        u32::from(self.hour) + u32::from(self.minute) + u32::from(self.second)
    }

    /// Compares with `other`, returning a negative, zero or positive number.
    ///
    /// Integer form of [`Ord::cmp`].
    #[must_use]
    pub fn compare_to(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    fn add_hours(&mut self, amount: i64) {
        self.hour = narrow((i64::from(self.hour) + amount) % HOURS_IN_DAY);
    }
}

fn validate(field: TimeField, value: i32) -> DomainResult<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= field.max())
        .ok_or_else(|| DomainError::out_of_range(field, value))
}

fn non_negative(field: TimeField, amount: i32) -> DomainResult<i64> {
    if amount < 0 {
        return Err(DomainError::NegativeAmount {
            field,
            amount: i64::from(amount),
        });
    }
    Ok(i64::from(amount))
}

// Callers reduce modulo 24 or 60 first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn narrow(value: i64) -> u8 {
    value as u8
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            hour: 23,
            minute: 58,
            second: 0,
        }
    }
}

impl Hash for Clock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hour, self.minute, self.second)
    }
}

impl FromStr for Clock {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let clocks = text::parse_clocks(s)?;
        match clocks.as_slice() {
            [clock] => Ok(*clock),
            [] => Err(DomainError::parse(1, "expected a clock, found nothing")),
            [_, extra @ ..] => Err(DomainError::parse(
                text::FIELDS_PER_CLOCK + 1,
                format!("expected a single clock, found {} more", extra.len()),
            )),
        }
    }
}

impl From<NaiveTime> for Clock {
    fn from(time: NaiveTime) -> Self {
        // chrono folds leap seconds into the nanosecond field, so second() <= 59.
        Self {
            hour: narrow(i64::from(time.hour())),
            minute: narrow(i64::from(time.minute())),
            second: narrow(i64::from(time.second())),
        }
    }
}
