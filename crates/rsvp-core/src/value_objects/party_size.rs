//! Party size - number of people covered by one confirmation

use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

use crate::error::{DomainError, GuestField};

/// Number of guests on an accepted RSVP, always within `1..=10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PartySize(i32);

impl PartySize {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 10;

    /// Validate an integral party size
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as i32))
        } else {
            Err(Self::out_of_range())
        }
    }

    /// Validate a raw JSON value; anything but an integral number is rejected
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        match value {
            Value::Number(number) => Self::from_number(number),
            _ => Err(Self::not_whole()),
        }
    }

    /// Validate a JSON number; fractional values are rejected
    pub fn from_number(number: &Number) -> Result<Self, DomainError> {
        if let Some(value) = number.as_i64() {
            return Self::new(value);
        }
        if number.as_u64().is_some() {
            return Err(Self::out_of_range());
        }
        // 3.0 counts as 3
        if let Some(value) = number.as_f64().filter(|v| v.is_finite() && v.fract().abs() < f64::EPSILON) {
            return Self::new(value as i64);
        }
        Err(Self::not_whole())
    }

    /// A missing party size on an accepted RSVP
    pub fn missing() -> DomainError {
        DomainError::invalid_field(GuestField::NumberOfGuests, "Number of guests is required")
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    fn not_whole() -> DomainError {
        DomainError::invalid_field(
            GuestField::NumberOfGuests,
            "Number of guests must be a whole number",
        )
    }

    fn out_of_range() -> DomainError {
        DomainError::invalid_field(
            GuestField::NumberOfGuests,
            format!("Number of guests must be between {} and {}", Self::MIN, Self::MAX),
        )
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PartySize> for i32 {
    fn from(size: PartySize) -> Self {
        size.0
    }
}
