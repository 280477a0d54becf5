//! Time units and unit-tagged quantities.
//!
//! Every unit is defined by its relationship to seconds; the converter never
//! converts between two non-second units directly.

use crate::error::ConvertError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MILLIS_PER_SECOND: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
pub const SECONDS_PER_MINUTE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
pub const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// Ordered from smallest to largest magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// Largest unit first, the order used by breakdowns.
    pub const DESCENDING: [TimeUnit; 4] = [
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
        TimeUnit::Milliseconds,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
        }
    }

    /// Express `value` (in this unit) as seconds. `None` on overflow.
    pub fn to_seconds(self, value: Decimal) -> Option<Decimal> {
        match self {
            TimeUnit::Milliseconds => value.checked_div(MILLIS_PER_SECOND),
            TimeUnit::Seconds => Some(value),
            TimeUnit::Minutes => value.checked_mul(SECONDS_PER_MINUTE),
            TimeUnit::Hours => value.checked_mul(SECONDS_PER_HOUR),
        }
    }

    /// Express `seconds` in this unit. `None` on overflow.
    pub fn from_seconds(self, seconds: Decimal) -> Option<Decimal> {
        match self {
            TimeUnit::Milliseconds => seconds.checked_mul(MILLIS_PER_SECOND),
            TimeUnit::Seconds => Some(seconds),
            TimeUnit::Minutes => seconds.checked_div(SECONDS_PER_MINUTE),
            TimeUnit::Hours => seconds.checked_div(SECONDS_PER_HOUR),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for TimeUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hours),
            _ => Err(ConvertError::UnsupportedUnit(s.to_string())),
        }
    }
}

/// A magnitude tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    pub magnitude: Decimal,
    pub unit: TimeUnit,
}

impl Quantity {
    pub fn new(magnitude: Decimal, unit: TimeUnit) -> Self {
        Self { magnitude, unit }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude.normalize(), self.unit.suffix())
    }
}

impl FromStr for Quantity {
    type Err = ConvertError;

    /// Parses `"1.5h"`, `"30 min"`, `"-2s"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .ok_or_else(|| ConvertError::InvalidQuantity(s.to_string()))?;
        let (number, unit) = trimmed.split_at(split);
        if number.is_empty() {
            return Err(ConvertError::InvalidQuantity(s.to_string()));
        }
        let magnitude =
            Decimal::from_str(number).map_err(|_| ConvertError::InvalidQuantity(s.to_string()))?;
        Ok(Self::new(magnitude, unit.parse()?))
    }
}
