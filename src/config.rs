use crate::convert::{DEFAULT_FORMAT_PLACES, DEFAULT_FORMAT_ROUNDING};
use crate::locale::Locale;
use crate::rounding::RoundingMode;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest number of fractional digits a decimal can carry.
pub const MAX_DECIMAL_PLACES: u32 = 28;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub convert: ConvertConfig,
    pub format: FormatConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConvertConfig {
    /// Absent means full precision
    pub decimal_places: Option<i32>,
    pub rounding: RoundingMode,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    pub decimal_places: u32,
    pub rounding: RoundingMode,
    /// BCP 47 or POSIX name; absent means the environment locale
    pub locale: Option<String>,
    pub group_digits: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_FORMAT_PLACES,
            rounding: DEFAULT_FORMAT_ROUNDING,
            locale: None,
            group_digits: false,
        }
    }
}

impl ConvertConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(places) = self.decimal_places
            && places < 0
        {
            anyhow::bail!("convert.decimal_places must not be negative (got {})", places);
        }
        Ok(())
    }
}

impl FormatConfig {
    pub fn validate(&self) -> Result<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            anyhow::bail!(
                "format.decimal_places must be at most {} (got {})",
                MAX_DECIMAL_PLACES,
                self.decimal_places
            );
        }
        Ok(())
    }

    /// The configured locale, or the environment's when none is set.
    pub fn resolve_locale(&self) -> Locale {
        let locale = match self.locale.as_deref() {
            Some(tag) => Locale::from_tag(tag),
            None => Locale::current(),
        };
        locale.with_grouping(self.group_digits)
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.convert.validate()?;
        self.format.validate()?;
        Ok(())
    }
}

fn build(path: &Path, with_env: bool) -> Result<Config> {
    let mut builder = ConfigBuilder::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(false));
    if with_env {
        builder = builder.add_source(
            Environment::with_prefix("TEMPO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
    }

    let loader = builder.build().context("Failed to build config loader")?;
    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

/// Load a config file without environment overrides. A missing file yields defaults.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    build(path.as_ref(), false)
}

/// Load the resolved config file merged with `TEMPO_*` environment variables.
pub fn load(override_path: Option<&Path>) -> Result<Config> {
    let path = crate::platform::config_path(override_path);
    tracing::debug!(path = %path.display(), "loading config");
    build(&path, true)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
