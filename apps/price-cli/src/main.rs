//! # fiesta-price
//!
//! Command line front end for the Fiesta item price calculator.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           fiesta-price                                  │
//! │                                                                         │
//! │  config defaults ──► item JSON file ──► flags ──► validate_item        │
//! │                                                        │                │
//! │  config [market] ──► FIESTA_* env ──► flags ──► validate_market_trend  │
//! │                                                        │                │
//! │                                              fiesta_core::quote         │
//! │                                                        │                │
//! │                                         text card  or  JSON on stdout   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so JSON output stays machine-readable.

mod cli;
mod config;
mod error;
mod render;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fiesta_core::validation::{validate_item, validate_market_trend};
use fiesta_core::{quote, CoreError, Item};

use crate::cli::Cli;
use crate::config::{OutputFormat, PriceCliConfig};
use crate::error::{CliError, CliResult};
use crate::render::render_text;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.init_config {
        return init_config(&cli);
    }

    let config = PriceCliConfig::load(cli.config.clone()).context("Failed to load configuration")?;

    let item = load_item(&cli, &config)?;
    let trend = cli.market_trend(config.market);
    if let Some(ref trend) = trend {
        validate_market_trend(trend)?;
    }

    let quote = quote(&item, trend.as_ref());
    info!(
        item = %item.id,
        price = quote.price.amount(),
        tips = quote.tips.len(),
        "Item priced"
    );
    debug!(breakdown = ?quote.breakdown, "Pricing stages");

    let format = cli.format.unwrap_or(config.output.format);
    let show_breakdown = cli.breakdown || config.output.breakdown;

    match format {
        OutputFormat::Text => println!("{}", render_text(&item, &quote, show_breakdown)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&quote)?),
    }

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins over `-v`. Without either only warnings are shown.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Writes the effective configuration (or defaults, for a new file) and exits.
fn init_config(cli: &Cli) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(ref path) if !path.exists() => PriceCliConfig::default(),
        _ => PriceCliConfig::load(cli.config.clone())?,
    };

    let path = config.save(cli.config.clone())?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Builds the item from config defaults, the optional JSON file and flags.
fn load_item(cli: &Cli, config: &PriceCliConfig) -> CliResult<Item> {
    let mut item = config.defaults.to_item();

    if let Some(ref path) = cli.item {
        let contents = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        item = merge_item_json(item, &contents)?;
        debug!(?path, id = %item.id, "Loaded item record");
    }

    cli.apply_item_overrides(&mut item);
    validate_item(&item)?;

    Ok(item)
}

/// Overlays the fields present in a JSON item record onto `base`.
fn merge_item_json(base: Item, json: &str) -> CliResult<Item> {
    let overlay: Value = serde_json::from_str(json).map_err(CoreError::InvalidJson)?;
    let mut merged = serde_json::to_value(base).map_err(CoreError::InvalidJson)?;

    match (merged.as_object_mut(), overlay) {
        (Some(fields), Value::Object(record)) => fields.extend(record),
        (_, other) => {
            return Ok(serde_json::from_value(other).map_err(CoreError::InvalidJson)?);
        }
    }

    Ok(serde_json::from_value(merged).map_err(CoreError::InvalidJson)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fiesta_core::{CharacterClass, Rarity, Stat};

    #[test]
    fn test_merge_keeps_defaults_for_missing_fields() {
        let base = Item {
            level: 60,
            rarity: Rarity::Rare,
            ..Item::default()
        };

        let item = merge_item_json(
            base,
            r#"{"name": "Shadow Blade", "classRestriction": "joker", "stats": {"damage": 40}}"#,
        )
        .unwrap();

        assert_eq!(item.name, "Shadow Blade");
        assert_eq!(item.level, 60);
        assert_eq!(item.rarity, Rarity::Rare);
        assert_eq!(item.class_restriction, Some(CharacterClass::Joker));
        assert_eq!(item.stats.get(Stat::Damage), 40);
    }

    #[test]
    fn test_merge_rejects_bad_records() {
        assert!(merge_item_json(Item::default(), "{ not json").is_err());
        assert!(merge_item_json(Item::default(), r#"{"rarity": "mythic"}"#).is_err());
        assert!(merge_item_json(Item::default(), r#"{"stats": {"luck": -3}}"#).is_err());
        assert!(merge_item_json(Item::default(), "[1, 2]").is_err());
    }

    #[test]
    fn test_load_item_applies_flags_and_validates() {
        let config = PriceCliConfig::default();

        let cli = Cli::parse_from(["fiesta-price", "--level", "80", "--enhancement", "5"]);
        let item = load_item(&cli, &config).unwrap();
        assert_eq!(item.level, 80);
        assert_eq!(item.enhancement, 5);

        let cli = Cli::parse_from(["fiesta-price", "--quality", "120"]);
        assert!(load_item(&cli, &config).is_err());

        let cli = Cli::parse_from(["fiesta-price", "--base-price", "0"]);
        assert!(load_item(&cli, &config).is_err());
    }
}
