//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use fiesta_core::{CharacterClass, Item, ItemType, MarketTrend, Rarity, TrendDirection};

use crate::config::OutputFormat;

/// Estimate the market price of a Fiesta item.
///
/// Fields come from the config defaults, then the optional JSON item file,
/// then the flags below.
#[derive(Debug, Parser)]
#[command(name = "fiesta-price", version, about)]
pub struct Cli {
    /// JSON item record (same shape as the web form's item)
    pub item: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    pub init_config: bool,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long = "type", value_name = "TYPE")]
    pub item_type: Option<ItemType>,

    #[arg(long)]
    pub level: Option<u32>,

    /// Vendor price in copper
    #[arg(long)]
    pub base_price: Option<u64>,

    #[arg(long)]
    pub rarity: Option<Rarity>,

    /// Class restriction (gladiator, joker, mage, hunter, crusader, priest)
    #[arg(long = "class", value_name = "CLASS")]
    pub class_restriction: Option<CharacterClass>,

    /// Enhancement tier, 0 to 9
    #[arg(long)]
    pub enhancement: Option<u8>,

    /// Stat quality in percent, 0 to 100
    #[arg(long)]
    pub quality: Option<f64>,

    /// Market demand in percent, 0 to 200
    #[arg(long)]
    pub demand: Option<f64>,

    /// Market supply in percent, 0 to 200
    #[arg(long)]
    pub supply: Option<f64>,

    /// Market direction (rising, falling, stable)
    #[arg(long)]
    pub trend: Option<TrendDirection>,

    /// Ignore any configured market trend
    #[arg(long, conflicts_with_all = ["demand", "supply", "trend"])]
    pub no_market: bool,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show every pricing stage
    #[arg(long)]
    pub breakdown: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Overwrites item fields that were given on the command line.
    pub fn apply_item_overrides(&self, item: &mut Item) {
        if let Some(ref name) = self.name {
            item.name = name.clone();
        }
        if let Some(item_type) = self.item_type {
            item.item_type = item_type;
        }
        if let Some(level) = self.level {
            item.level = level;
        }
        if let Some(base_price) = self.base_price {
            item.base_price = base_price;
        }
        if let Some(rarity) = self.rarity {
            item.rarity = rarity;
        }
        if let Some(class) = self.class_restriction {
            item.class_restriction = Some(class);
        }
        if let Some(enhancement) = self.enhancement {
            item.enhancement = enhancement;
        }
        if let Some(quality) = self.quality {
            item.quality = quality;
        }
    }

    /// Resolves the market trend from flags on top of the configured one.
    ///
    /// Any market flag starts from the configured trend, or a balanced
    /// market if none is configured.
    pub fn market_trend(&self, configured: Option<MarketTrend>) -> Option<MarketTrend> {
        if self.no_market {
            return None;
        }

        if self.demand.is_none() && self.supply.is_none() && self.trend.is_none() {
            return configured;
        }

        let mut trend = configured.unwrap_or_default();
        if let Some(demand) = self.demand {
            trend.demand = demand;
        }
        if let Some(supply) = self.supply {
            trend.supply = supply;
        }
        if let Some(direction) = self.trend {
            trend.direction = direction;
        }
        Some(trend)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
