//! The conversion core.
//!
//! Every operation normalizes its input to seconds first and derives the
//! requested representation from there. Arithmetic is exact decimal; rounding
//! happens at most once, on the final value, and only when asked for.

use crate::error::{ConvertError, Result};
use crate::locale::Locale;
use crate::rounding::RoundingMode;
use crate::units::{MILLIS_PER_SECOND, Quantity, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TimeUnit};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_FORMAT_PLACES: u32 = 2;
/// Fixed-point display rounding: ties move away from zero.
pub const DEFAULT_FORMAT_ROUNDING: RoundingMode = RoundingMode::HalfAwayFromZero;

fn ensure_non_negative(name: &'static str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ConvertError::negative(name, value));
    }
    Ok(())
}

fn check_places(decimal_places: Option<i32>) -> Result<Option<u32>> {
    match decimal_places {
        Some(places) if places < 0 => Err(ConvertError::negative("decimal_places", places)),
        Some(places) => Ok(Some(places.unsigned_abs())),
        None => Ok(None),
    }
}

/// Convert `time` from one unit to another, optionally rounding the result.
pub fn convert(
    time: Decimal,
    from: TimeUnit,
    to: TimeUnit,
    decimal_places: Option<i32>,
    mode: RoundingMode,
) -> Result<Decimal> {
    ensure_non_negative("time", time)?;
    let places = check_places(decimal_places)?;

    let seconds = from
        .to_seconds(time)
        .ok_or_else(|| ConvertError::overflow("convert"))?;
    let result = to
        .from_seconds(seconds)
        .ok_or_else(|| ConvertError::overflow("convert"))?;

    Ok(match places {
        Some(places) => result.round_dp_with_strategy(places, mode.strategy()),
        None => result,
    })
}

/// Sum heterogeneous quantities into `result_unit`, rounding once at the end.
pub fn sum_times(
    result_unit: TimeUnit,
    items: &[Quantity],
    decimal_places: Option<i32>,
    mode: RoundingMode,
) -> Result<Decimal> {
    check_places(decimal_places)?;
    if items.is_empty() {
        return Err(ConvertError::Validation {
            name: "items",
            value: "[]".to_string(),
            reason: "at least one time value is required",
        });
    }

    let mut total = Decimal::ZERO;
    for item in items {
        let seconds = convert(item.magnitude, item.unit, TimeUnit::Seconds, None, mode)?;
        total = total
            .checked_add(seconds)
            .ok_or_else(|| ConvertError::overflow("sum_times"))?;
    }

    convert(total, TimeUnit::Seconds, result_unit, decimal_places, mode)
}

/// Render `time` with exactly `decimal_places` fractional digits and the
/// unit suffix, e.g. `"1234.57 min"`.
///
/// Negative values are formatted as-is. When `locale` is `None` the
/// environment locale is used.
pub fn format_time(
    time: Decimal,
    unit: TimeUnit,
    decimal_places: u32,
    mode: RoundingMode,
    locale: Option<&Locale>,
) -> String {
    let current;
    let locale = match locale {
        Some(locale) => locale,
        None => {
            current = Locale::current();
            &current
        }
    };

    let rounded = time.round_dp_with_strategy(decimal_places, mode.strategy());
    let plain = format!("{:.*}", decimal_places as usize, rounded);
    format!("{} {}", locale.localize_number(&plain), unit.suffix())
}

/// Pick the largest unit in which `seconds` is at least one.
pub fn best_unit(seconds: Decimal) -> Result<Quantity> {
    ensure_non_negative("seconds", seconds)?;

    let quantity = if seconds >= SECONDS_PER_HOUR {
        Quantity::new(seconds / SECONDS_PER_HOUR, TimeUnit::Hours)
    } else if seconds >= SECONDS_PER_MINUTE {
        Quantity::new(seconds / SECONDS_PER_MINUTE, TimeUnit::Minutes)
    } else if seconds >= Decimal::ONE {
        Quantity::new(seconds, TimeUnit::Seconds)
    } else {
        Quantity::new(seconds * MILLIS_PER_SECOND, TimeUnit::Milliseconds)
    };
    Ok(quantity)
}

/// Convert to a [`Duration`] through `f64` seconds.
pub fn to_duration(time: Decimal, unit: TimeUnit) -> Result<Duration> {
    ensure_non_negative("time", time)?;
    let seconds = convert(time, unit, TimeUnit::Seconds, None, RoundingMode::default())?;
    let seconds = seconds
        .to_f64()
        .ok_or_else(|| ConvertError::overflow("to_duration"))?;
    Duration::try_from_secs_f64(seconds).map_err(|_| ConvertError::overflow("to_duration"))
}

/// A duration split across all four units.
///
/// Hours, minutes and seconds are whole numbers; milliseconds keeps whatever
/// precision is left over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub hours: Decimal,
    pub minutes: Decimal,
    pub seconds: Decimal,
    pub milliseconds: Decimal,
}

impl Breakdown {
    pub fn get(&self, unit: TimeUnit) -> Decimal {
        match unit {
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Seconds => self.seconds,
            TimeUnit::Milliseconds => self.milliseconds,
        }
    }

    /// Components, largest unit first.
    pub fn iter(&self) -> impl Iterator<Item = (TimeUnit, Decimal)> + '_ {
        TimeUnit::DESCENDING
            .into_iter()
            .map(move |unit| (unit, self.get(unit)))
    }

    pub fn to_map(&self) -> BTreeMap<TimeUnit, Decimal> {
        self.iter().collect()
    }

    /// The same components with trailing zeros dropped.
    pub fn normalize(&self) -> Breakdown {
        Breakdown {
            hours: self.hours.normalize(),
            minutes: self.minutes.normalize(),
            seconds: self.seconds.normalize(),
            milliseconds: self.milliseconds.normalize(),
        }
    }

    /// Weighted sum of the components in seconds.
    pub fn total_seconds(&self) -> Decimal {
        self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
            + self.milliseconds / MILLIS_PER_SECOND
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            (self.hours, "h"),
            (self.minutes, "m"),
            (self.seconds, "s"),
            (self.milliseconds, "ms"),
        ]
        .into_iter()
        .filter(|(value, _)| !value.is_zero())
        .map(|(value, suffix)| format!("{}{}", value.normalize(), suffix))
        .collect();

        if parts.is_empty() {
            f.write_str("0ms")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

/// Decompose `seconds` into hours, minutes, seconds and milliseconds.
pub fn breakdown(seconds: Decimal) -> Result<Breakdown> {
    ensure_non_negative("seconds", seconds)?;

    // Quotients are rounded to 28 digits; remainders are exact.
    let remainder = seconds % SECONDS_PER_HOUR;
    let hours = (seconds - remainder) / SECONDS_PER_HOUR;

    let rest = remainder % SECONDS_PER_MINUTE;
    let minutes = (remainder - rest) / SECONDS_PER_MINUTE;
    let remainder = rest;

    let whole_seconds = remainder.floor();
    let milliseconds = (remainder - whole_seconds) * MILLIS_PER_SECOND;

    Ok(Breakdown {
        hours,
        minutes,
        seconds: whole_seconds,
        milliseconds,
    })
}
