use crate::OutputFormat;
use crate::config::Config;
use crate::convert::{convert, sum_times};
use crate::rounding::RoundingMode;
use crate::units::{Quantity, TimeUnit};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::json;

/// Render a converted value, padding to `places` fractional digits when rounding was requested.
pub fn render_value(value: Decimal, places: Option<i32>) -> String {
    match places {
        Some(places) if places >= 0 => format!("{:.*}", places as usize, value),
        _ => value.normalize().to_string(),
    }
}

pub fn run_convert(
    config: &Config,
    time: Decimal,
    from: TimeUnit,
    to: TimeUnit,
    places: Option<i32>,
    rounding: Option<RoundingMode>,
    format: OutputFormat,
) -> Result<()> {
    let places = places.or(config.convert.decimal_places);
    let rounding = rounding.unwrap_or(config.convert.rounding);
    tracing::debug!(%time, %from, %to, ?places, ?rounding, "convert");

    let result = convert(time, from, to, places, rounding)
        .with_context(|| format!("Failed to convert {} {} to {}", time, from, to.name()))?;

    match format {
        OutputFormat::Text => println!("{} {}", render_value(result, places), to.suffix()),
        OutputFormat::Json => println!(
            "{}",
            json!({
                "input": Quantity::new(time, from),
                "result": { "magnitude": render_value(result, places), "unit": to },
                "decimal_places": places,
                "rounding": rounding,
            })
        ),
    }
    Ok(())
}

pub fn run_sum(
    config: &Config,
    to: TimeUnit,
    items: &[Quantity],
    places: Option<i32>,
    rounding: Option<RoundingMode>,
    format: OutputFormat,
) -> Result<()> {
    let places = places.or(config.convert.decimal_places);
    let rounding = rounding.unwrap_or(config.convert.rounding);
    tracing::debug!(count = items.len(), %to, ?places, ?rounding, "sum");

    let total = sum_times(to, items, places, rounding).context("Failed to sum time values")?;

    match format {
        OutputFormat::Text => println!("{} {}", render_value(total, places), to.suffix()),
        OutputFormat::Json => println!(
            "{}",
            json!({
                "items": items,
                "result": { "magnitude": render_value(total, places), "unit": to },
                "decimal_places": places,
                "rounding": rounding,
            })
        ),
    }
    Ok(())
}
