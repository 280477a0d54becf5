use crate::OutputFormat;
use crate::convert::{breakdown, to_duration};
use crate::units::TimeUnit;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::json;

pub fn run_duration(time: Decimal, unit: TimeUnit, format: OutputFormat) -> Result<()> {
    let duration = to_duration(time, unit)
        .with_context(|| format!("Failed to build a duration from {} {}", time, unit))?;

    match format {
        OutputFormat::Text => println!("{:?}", duration),
        OutputFormat::Json => println!(
            "{}",
            json!({
                "secs": duration.as_secs(),
                "nanos": duration.subsec_nanos(),
                "seconds": duration.as_secs_f64(),
            })
        ),
    }
    Ok(())
}

pub fn run_breakdown(seconds: Decimal, format: OutputFormat) -> Result<()> {
    let parts =
        breakdown(seconds).with_context(|| format!("Failed to break down {}s", seconds))?;

    match format {
        OutputFormat::Text => {
            println!("{}", parts);
            for (unit, value) in parts.iter() {
                println!("  {:<14}{}", unit.name(), value.normalize());
            }
        }
        OutputFormat::Json => println!("{}", json!(parts.normalize())),
    }
    Ok(())
}
