//! # CLI Configuration
//!
//! Defaults for new items, an optional standing market trend, and output
//! preferences.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority, applied in main)             │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     FIESTA_OUTPUT_FORMAT=json                                          │
//! │     FIESTA_DEMAND=140  FIESTA_SUPPLY=80                                │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/fiesta-price/fiesta-price.toml (Linux)                   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     level 1, basePrice 100, common weapon, +0, quality 50, no trend    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [defaults]
//! level = 1
//! base_price = 100
//! item_type = "weapon"
//! rarity = "common"
//! enhancement = 0
//! quality = 50.0
//!
//! # Omit this section to price without a market trend.
//! [market]
//! demand = 120.0
//! supply = 90.0
//! trend = "rising"
//!
//! [output]
//! format = "text"   # text | json
//! breakdown = false
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

use fiesta_core::validation::{
    validate_base_price, validate_enhancement, validate_level, validate_market_trend,
    validate_quality,
};
use fiesta_core::{Item, ItemType, MarketTrend, Rarity};

use crate::error::{CliError, CliResult};

const CONFIG_FILE_NAME: &str = "fiesta-price.toml";

// =============================================================================
// Output Settings
// =============================================================================

/// How the quote is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable result card.
    #[default]
    Text,
    /// The serialized `PriceQuote`.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print every pipeline stage under the price.
    #[serde(default)]
    pub breakdown: bool,
}

// =============================================================================
// Item Defaults
// =============================================================================

/// Field values of a fresh item before file or flag overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefaults {
    #[serde(default = "default_level")]
    pub level: u32,

    #[serde(default = "default_base_price")]
    pub base_price: u64,

    #[serde(default)]
    pub item_type: ItemType,

    #[serde(default)]
    pub rarity: Rarity,

    #[serde(default)]
    pub enhancement: u8,

    #[serde(default = "default_quality")]
    pub quality: f64,
}

fn default_level() -> u32 {
    1
}

fn default_base_price() -> u64 {
    100
}

fn default_quality() -> f64 {
    50.0
}

impl Default for ItemDefaults {
    fn default() -> Self {
        ItemDefaults {
            level: default_level(),
            base_price: default_base_price(),
            item_type: ItemType::default(),
            rarity: Rarity::default(),
            enhancement: 0,
            quality: default_quality(),
        }
    }
}

impl ItemDefaults {
    /// Builds the starting item.
    pub fn to_item(&self) -> Item {
        Item {
            level: self.level,
            base_price: self.base_price,
            item_type: self.item_type,
            rarity: self.rarity,
            enhancement: self.enhancement,
            quality: self.quality,
            ..Item::default()
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceCliConfig {
    #[serde(default)]
    pub defaults: ItemDefaults,

    /// Standing market trend applied when no trend flags are given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketTrend>,

    #[serde(default)]
    pub output: OutputSettings,
}

impl PriceCliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// file at the default location is not.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::InvalidConfig(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        Ok(toml::from_str(&contents)?)
    }

    /// Writes the configuration as TOML, creating parent directories.
    pub fn save(&self, config_path: Option<PathBuf>) -> CliResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CliError::InvalidConfig("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| CliError::io(&path, e))?;

        info!(?path, "Config saved");
        Ok(path)
    }

    /// Checks the defaults and market trend against the calculator's ranges.
    pub fn validate(&self) -> CliResult<()> {
        validate_level(self.defaults.level)?;
        validate_base_price(self.defaults.base_price)?;
        validate_enhancement(self.defaults.enhancement)?;
        validate_quality(self.defaults.quality)?;

        if let Some(ref market) = self.market {
            validate_market_trend(market)?;
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(format) = lookup("FIESTA_OUTPUT_FORMAT") {
            match format.parse() {
                Ok(parsed) => {
                    debug!(format = %format, "Overriding output format from environment");
                    self.output.format = parsed;
                }
                Err(e) => warn!(format = %format, error = %e, "Ignoring output format from environment"),
            }
        }

        if let Some(flag) = lookup("FIESTA_BREAKDOWN") {
            self.output.breakdown = matches!(flag.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Some(level) = parse_override(&lookup, "FIESTA_DEFAULT_LEVEL") {
            self.defaults.level = level;
        }

        if let Some(price) = parse_override(&lookup, "FIESTA_DEFAULT_BASE_PRICE") {
            self.defaults.base_price = price;
        }

        if let Some(demand) = parse_override::<f64>(&lookup, "FIESTA_DEMAND") {
            debug!(demand, "Overriding market demand from environment");
            self.market.get_or_insert_with(MarketTrend::balanced).demand = demand;
        }

        if let Some(supply) = parse_override::<f64>(&lookup, "FIESTA_SUPPLY") {
            debug!(supply, "Overriding market supply from environment");
            self.market.get_or_insert_with(MarketTrend::balanced).supply = supply;
        }

        if let Some(trend) = lookup("FIESTA_TREND") {
            match trend.parse() {
                Ok(direction) => {
                    self.market.get_or_insert_with(MarketTrend::balanced).direction = direction
                }
                Err(e) => warn!(trend = %trend, error = %e, "Ignoring trend from environment"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "fiesta", "fiesta-price")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

/// Parses an override value, warning and returning `None` when it is malformed.
fn parse_override<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(key, value = %value, error = %e, "Ignoring invalid environment override");
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
