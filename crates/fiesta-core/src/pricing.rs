//! # Pricing Module
//!
//! Maps an [`Item`] (and optionally a [`MarketTrend`]) to a price in copper.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Multiplicative Price Pipeline                        │
//! │                                                                         │
//! │  base_price                                                             │
//! │     │ × (1 + level/100)              level premium                      │
//! │     │ × (1 + stats_bonus)            capped at ×3.0                     │
//! │     │ × enhancement multiplier       +0 → 1.0 ... +9 → 40.0             │
//! │     │ × rarity multiplier            common 1.0 ... legendary 4.0       │
//! │     │ × class demand factor          only with a class restriction      │
//! │     │ × quality bonus                piecewise, squared above 95%       │
//! │     │ × trend factor                 only with a market trend           │
//! │     ▼                                                                   │
//! │  round half-up ──► Copper                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stages run in exactly this order. Floating point multiplication is
//! not associative, so reordering them changes the rounded result for some
//! inputs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::Copper;
use crate::tables::{
    enhancement_multiplier, MAX_STATS_BONUS, MAX_TREND_FACTOR, MIN_TREND_FACTOR,
    UNKNOWN_STAT_WEIGHT,
};
use crate::types::{Item, ItemStats, MarketTrend};

// =============================================================================
// Stage Factors
// =============================================================================

/// Linear level premium: level 100 doubles the price.
#[inline]
pub fn level_factor(level: u32) -> f64 {
    1.0 + f64::from(level) / 100.0
}

/// Bonus fraction contributed by an item's stats.
///
/// Each stat adds `value / 100 × weight`; the sum is capped at
/// [`MAX_STATS_BONUS`].
///
/// ## Example
/// ```rust
/// use fiesta_core::pricing::stats_bonus;
/// use fiesta_core::{ItemStats, Stat};
///
/// let stats = ItemStats::default().with(Stat::Damage, 20);
/// assert!((stats_bonus(&stats) - 0.3).abs() < 1e-12);
///
/// let maxed = ItemStats::default().with(Stat::Damage, 1_000);
/// assert_eq!(stats_bonus(&maxed), 2.0);
/// ```
pub fn stats_bonus(stats: &ItemStats) -> f64 {
    let known: f64 = stats
        .iter()
        .map(|(stat, value)| (f64::from(value) / 100.0) * stat.weight())
        .sum();
    let extra: f64 = stats
        .extra_iter()
        .map(|(_, value)| (f64::from(value) / 100.0) * UNKNOWN_STAT_WEIGHT)
        .sum();
    let bonus = known + extra;

    bonus.min(MAX_STATS_BONUS)
}

/// Price factor for a quality percentage.
///
/// ## Curve
/// ```text
///  factor
///   5.0 ┤                                              ╭ q=100
///       │                                            ╭─╯
///   3.0 ┤                                     ╭──────╯  squared above 95
///       │                               ╭─────╯
///   1.5 ┤                      ╭────────╯ steep 80..95
///   1.0 ┤            ╭─────────╯ gentle 50..80
///   0.3 ┼────────────╯ penalty below 50
///       └────────────┬─────────┬──────────┬──────┬───── quality
///                    50        80         95    100
/// ```
/// Continuous at every boundary: 1.0 at 50, 1.5 at 80, 3.0 at 95.
pub fn quality_bonus(quality: f64) -> f64 {
    if quality <= 50.0 {
        0.3 + (quality / 50.0) * 0.7
    } else if quality <= 80.0 {
        1.0 + ((quality - 50.0) / 30.0) * 0.5
    } else if quality <= 95.0 {
        1.5 + ((quality - 80.0) / 15.0) * 1.5
    } else {
        let excess = (quality - 95.0) / 5.0;
        3.0 + excess * excess * 2.0
    }
}

/// Demand/supply ratio, clamped to `0.5..=3.0`.
///
/// Zero supply means unbounded demand and saturates at the upper clamp.
///
/// ## Example
/// ```rust
/// use fiesta_core::pricing::trend_factor;
/// use fiesta_core::{MarketTrend, TrendDirection};
///
/// assert_eq!(trend_factor(&MarketTrend::new(200.0, 1.0, TrendDirection::Rising)), 3.0);
/// assert_eq!(trend_factor(&MarketTrend::new(1.0, 200.0, TrendDirection::Falling)), 0.5);
/// assert_eq!(trend_factor(&MarketTrend::new(50.0, 0.0, TrendDirection::Stable)), 3.0);
/// ```
pub fn trend_factor(trend: &MarketTrend) -> f64 {
    if trend.supply <= 0.0 {
        return MAX_TREND_FACTOR;
    }

    let ratio = (trend.demand / 100.0) / (trend.supply / 100.0);
    ratio.clamp(MIN_TREND_FACTOR, MAX_TREND_FACTOR)
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Every factor that went into a price, in pipeline order.
///
/// `compute_price` is defined through this type, so a breakdown always
/// agrees with the price it explains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    #[ts(type = "number")]
    pub base_price: u64,
    pub level_factor: f64,
    /// Capped bonus fraction; the applied factor is `1 + stats_bonus`.
    pub stats_bonus: f64,
    pub enhancement_factor: f64,
    pub rarity_factor: f64,
    /// `None` when the item has no class restriction.
    pub class_factor: Option<f64>,
    pub quality_factor: f64,
    /// `None` when no market trend was supplied.
    pub trend_factor: Option<f64>,
    /// Price before rounding.
    pub unrounded: f64,
    pub price: Copper,
}

impl PriceBreakdown {
    /// Runs the pricing pipeline and records each stage.
    pub fn compute(item: &Item, trend: Option<&MarketTrend>) -> Self {
        let level = level_factor(item.level);
        let stats = stats_bonus(&item.stats);
        let enhancement = enhancement_multiplier(item.enhancement);
        let rarity = item.rarity.price_multiplier();
        let class = item.class_restriction.map(|class| class.demand_factor());
        let quality = quality_bonus(item.quality);
        let market = trend.map(trend_factor);

        let mut value = item.base_price as f64;
        value *= level;
        value *= 1.0 + stats;
        value *= enhancement;
        value *= rarity;
        if let Some(factor) = class {
            value *= factor;
        }
        value *= quality;
        if let Some(factor) = market {
            value *= factor;
        }

        PriceBreakdown {
            base_price: item.base_price,
            level_factor: level,
            stats_bonus: stats,
            enhancement_factor: enhancement,
            rarity_factor: rarity,
            class_factor: class,
            quality_factor: quality,
            trend_factor: market,
            unrounded: value,
            price: Copper::from_f64_rounded(value),
        }
    }

    /// Applied multipliers as `(label, factor)` pairs, skipping stages
    /// that did not run.
    pub fn stages(&self) -> Vec<(&'static str, f64)> {
        let mut stages = vec![
            ("level", self.level_factor),
            ("stats", 1.0 + self.stats_bonus),
            ("enhancement", self.enhancement_factor),
            ("rarity", self.rarity_factor),
        ];
        if let Some(factor) = self.class_factor {
            stages.push(("class", factor));
        }
        stages.push(("quality", self.quality_factor));
        if let Some(factor) = self.trend_factor {
            stages.push(("market", factor));
        }
        stages
    }
}

/// Computes the price of an item in copper.
///
/// ## Example
/// ```rust
/// use fiesta_core::{compute_price, Item};
///
/// // 100 × (1 + 1/100) = 101
/// let price = compute_price(&Item::default(), None);
/// assert_eq!(price.amount(), 101);
/// ```
#[inline]
pub fn compute_price(item: &Item, trend: Option<&MarketTrend>) -> Copper {
    PriceBreakdown::compute(item, trend).price
}

// =============================================================================
// Unit Tests
// =============================================================================
