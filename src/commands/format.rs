use crate::OutputFormat;
use crate::config::Config;
use crate::convert::{best_unit, format_time};
use crate::locale::Locale;
use crate::rounding::RoundingMode;
use crate::units::TimeUnit;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::json;

#[allow(clippy::too_many_arguments)]
pub fn run_format(
    config: &Config,
    time: Decimal,
    unit: TimeUnit,
    places: Option<u32>,
    rounding: Option<RoundingMode>,
    locale: Option<String>,
    group: bool,
    format: OutputFormat,
) -> Result<()> {
    let places = places.unwrap_or(config.format.decimal_places);
    let rounding = rounding.unwrap_or(config.format.rounding);
    let locale = match locale {
        Some(tag) => Locale::from_tag(&tag).with_grouping(group || config.format.group_digits),
        None => {
            let locale = config.format.resolve_locale();
            let grouping = locale.grouping || group;
            locale.with_grouping(grouping)
        }
    };
    tracing::debug!(%time, %unit, places, ?rounding, locale = %locale.tag, "format");

    let text = format_time(time, unit, places, rounding, Some(&locale));

    match format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => println!(
            "{}",
            json!({
                "text": text,
                "locale": locale,
            })
        ),
    }
    Ok(())
}

pub fn run_best(seconds: Decimal, format: OutputFormat) -> Result<()> {
    let quantity =
        best_unit(seconds).with_context(|| format!("Failed to pick a unit for {}s", seconds))?;

    match format {
        OutputFormat::Text => println!("{}", quantity),
        OutputFormat::Json => println!("{}", json!(quantity)),
    }
    Ok(())
}
