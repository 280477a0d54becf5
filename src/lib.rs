pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod locale;
pub mod platform;
pub mod rounding;
pub mod units;

use clap::ValueEnum;
use serde::Serialize;

pub use convert::{Breakdown, best_unit, breakdown, convert, format_time, sum_times, to_duration};
pub use error::ConvertError;
pub use locale::Locale;
pub use rounding::RoundingMode;
pub use units::{Quantity, TimeUnit};

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
