//! # Price Quote
//!
//! Runs price, currency and tips together, the way the front end refreshes
//! its result card every time a field changes.
//!
//! ```text
//! Item ──► PriceBreakdown::compute ──► price ──┬──► convert_currency ──► Currency
//!  │                                           └──► market_tips ──────► Vec<MarketTip>
//!  └──────► QualityTier::from_quality
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::{convert_currency, Copper, Currency};
use crate::pricing::PriceBreakdown;
use crate::tips::{market_tips, MarketTip};
use crate::types::{Item, MarketTrend, QualityTier};

/// Everything the result card shows for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub price: Copper,
    pub currency: Currency,
    pub quality_tier: QualityTier,
    pub tips: Vec<MarketTip>,
    pub breakdown: PriceBreakdown,
}

/// Prices an item and derives the coin breakdown and tips from that price.
///
/// ## Example
/// ```rust
/// use fiesta_core::{quote, Item};
///
/// let quote = quote(&Item::default(), None);
/// assert_eq!(quote.price.amount(), 101);
/// assert_eq!(quote.currency.silver, 1);
/// assert_eq!(quote.currency.copper, 1);
/// assert!(quote.tips.is_empty());
/// ```
pub fn quote(item: &Item, trend: Option<&MarketTrend>) -> PriceQuote {
    let breakdown = PriceBreakdown::compute(item, trend);
    let price = breakdown.price;

    PriceQuote {
        price,
        currency: convert_currency(price),
        quality_tier: item.quality_tier(),
        tips: market_tips(item, price),
        breakdown,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
