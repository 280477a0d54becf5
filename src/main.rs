use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tempo_units::commands;
use tempo_units::config::{self, MAX_DECIMAL_PLACES};
use tempo_units::{OutputFormat, Quantity, RoundingMode, TimeUnit};

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "Convert, sum, format and break down time values")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Path to config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between units
    #[command(allow_negative_numbers = true)]
    Convert {
        #[arg(help = "Time value (decimal)")]
        time: Decimal,
        #[arg(long, help = "Source unit (ms, s, min, h)")]
        from: TimeUnit,
        #[arg(long, help = "Target unit (ms, s, min, h)")]
        to: TimeUnit,
        #[command(flatten)]
        rounding: RoundingArgs,
    },
    /// Sum values given in mixed units, e.g. `1.5h 30min 250ms`
    #[command(allow_negative_numbers = true)]
    Sum {
        #[arg(long, help = "Result unit")]
        to: TimeUnit,
        #[arg(required = true, allow_hyphen_values = true, help = "Values with units")]
        items: Vec<Quantity>,
        #[command(flatten)]
        rounding: RoundingArgs,
    },
    /// Format a value as a localized string
    #[command(allow_negative_numbers = true)]
    Format {
        #[arg(help = "Time value (decimal)")]
        time: Decimal,
        #[arg(long, help = "Unit of the value")]
        unit: TimeUnit,
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(..=MAX_DECIMAL_PLACES as i64),
            help = "Fractional digits (default from config, 2)"
        )]
        places: Option<u32>,
        #[arg(long, value_enum, help = "Rounding mode (default: half-away-from-zero)")]
        rounding: Option<RoundingMode>,
        #[arg(long, help = "Locale tag, e.g. de-DE (default: environment)")]
        locale: Option<String>,
        #[arg(long, help = "Group integer digits")]
        group: bool,
    },
    /// Express seconds in the largest fitting unit
    #[command(allow_negative_numbers = true)]
    Best {
        #[arg(help = "Seconds")]
        seconds: Decimal,
    },
    /// Convert a value to an elapsed-time duration
    #[command(allow_negative_numbers = true)]
    Duration {
        #[arg(help = "Time value (decimal)")]
        time: Decimal,
        #[arg(long, help = "Unit of the value")]
        unit: TimeUnit,
    },
    /// Split seconds into hours, minutes, seconds and milliseconds
    #[command(allow_negative_numbers = true)]
    Breakdown {
        #[arg(help = "Seconds")]
        seconds: Decimal,
    },
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct RoundingArgs {
    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(..=MAX_DECIMAL_PLACES as i64),
        help = "Round to this many fractional digits"
    )]
    places: Option<i32>,
    #[arg(long, value_enum, help = "Rounding mode (default: half-even)")]
    rounding: Option<RoundingMode>,
}

#[derive(Parser)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    Path,
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config_path = cli.config.as_deref();
    let config = config::load(config_path).unwrap_or_else(|e| {
        tracing::warn!(error = %format!("{:#}", e), "Invalid config, using defaults");
        config::Config::default()
    });

    match cli.command {
        Commands::Convert {
            time,
            from,
            to,
            rounding,
        } => {
            commands::convert::run_convert(
                &config,
                time,
                from,
                to,
                rounding.places,
                rounding.rounding,
                cli.format,
            )?;
        }
        Commands::Sum {
            to,
            items,
            rounding,
        } => {
            commands::convert::run_sum(
                &config,
                to,
                &items,
                rounding.places,
                rounding.rounding,
                cli.format,
            )?;
        }
        Commands::Format {
            time,
            unit,
            places,
            rounding,
            locale,
            group,
        } => {
            commands::format::run_format(
                &config, time, unit, places, rounding, locale, group, cli.format,
            )?;
        }
        Commands::Best { seconds } => {
            commands::format::run_best(seconds, cli.format)?;
        }
        Commands::Duration { time, unit } => {
            commands::breakdown::run_duration(time, unit, cli.format)?;
        }
        Commands::Breakdown { seconds } => {
            commands::breakdown::run_breakdown(seconds, cli.format)?;
        }
        Commands::Config(args) => match args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(&key, &config)?,
            ConfigAction::Path => commands::config::path(config_path)?,
        },
    }

    Ok(())
}
