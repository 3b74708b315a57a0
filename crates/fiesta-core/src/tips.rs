//! # Market Tips
//!
//! Advisory notes about an item's market position.
//!
//! ## Checklist
//! ```text
//! ┌────┬───────────────────────────────────────┬──────────────────────────┐
//! │ #  │ Predicate                             │ Tip                      │
//! ├────┼───────────────────────────────────────┼──────────────────────────┤
//! │ 1  │ enhancement >= 7                      │ HighEnhancement          │
//! │ 2  │ quality >= 95                         │ PremiumStats             │
//! │ 3  │ else quality >= 90                    │ NearPerfectStats         │
//! │ 4  │ class restriction is gladiator/joker  │ DpsClassDemand           │
//! │ 5  │ price > 1,000,000 copper              │ SellInGems               │
//! │ 6  │ level >= 100                          │ EndgameDemand            │
//! │ 7  │ quality >= 95 and enhancement >= 5    │ CollectorsItem           │
//! └────┴───────────────────────────────────────┴──────────────────────────┘
//! ```
//! Tips come out in checklist order. 2 and 3 are exclusive; 7 can appear
//! together with 2.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::currency::Copper;
use crate::tables::COPPER_PER_GEM;
use crate::types::Item;

const HIGH_ENHANCEMENT: u8 = 7;
const COLLECTOR_ENHANCEMENT: u8 = 5;
const BLUE_QUALITY: f64 = 95.0;
const NEAR_PERFECT_QUALITY: f64 = 90.0;
const ENDGAME_LEVEL: u32 = 100;

/// A single piece of market advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MarketTip {
    HighEnhancement,
    PremiumStats,
    NearPerfectStats,
    DpsClassDemand,
    SellInGems,
    EndgameDemand,
    CollectorsItem,
}

impl MarketTip {
    /// Text shown to the player.
    pub const fn message(&self) -> &'static str {
        match self {
            MarketTip::HighEnhancement => "Very high enhancement - top price possible!",
            MarketTip::PremiumStats => "Blue stats - extreme premium price!",
            MarketTip::NearPerfectStats => "Near-perfect stats - premium price justified",
            MarketTip::DpsClassDemand => "High demand from DPS classes",
            MarketTip::SellInGems => "High-end item - selling in gems recommended",
            MarketTip::EndgameDemand => "Endgame item - stable demand",
            MarketTip::CollectorsItem => {
                "Collector's item - can sell for 5-10x the standard price!"
            }
        }
    }
}

impl fmt::Display for MarketTip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Returns the tips that apply to an item sold at `price`.
///
/// ## Example
/// ```rust
/// use fiesta_core::{market_tips, Copper, Item, MarketTip};
///
/// let item = Item { enhancement: 7, ..Item::default() };
/// assert_eq!(market_tips(&item, Copper::new(5_000)), vec![MarketTip::HighEnhancement]);
/// ```
pub fn market_tips(item: &Item, price: Copper) -> Vec<MarketTip> {
    let mut tips = Vec::new();

    if item.enhancement >= HIGH_ENHANCEMENT {
        tips.push(MarketTip::HighEnhancement);
    }

    if item.quality >= BLUE_QUALITY {
        tips.push(MarketTip::PremiumStats);
    } else if item.quality >= NEAR_PERFECT_QUALITY {
        tips.push(MarketTip::NearPerfectStats);
    }

    if item.class_restriction.is_some_and(|class| class.is_dps()) {
        tips.push(MarketTip::DpsClassDemand);
    }

    if price.amount() > COPPER_PER_GEM {
        tips.push(MarketTip::SellInGems);
    }

    if item.level >= ENDGAME_LEVEL {
        tips.push(MarketTip::EndgameDemand);
    }

    if item.quality >= BLUE_QUALITY && item.enhancement >= COLLECTOR_ENHANCEMENT {
        tips.push(MarketTip::CollectorsItem);
    }

    tips
}

/// Same as [`market_tips`], rendered to strings.
pub fn tip_messages(item: &Item, price: Copper) -> Vec<String> {
    market_tips(item, price)
        .into_iter()
        .map(|tip| tip.message().to_string())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharacterClass;

    #[test]
    fn test_default_item_has_no_tips() {
        assert!(market_tips(&Item::default(), Copper::new(101)).is_empty());
    }

    #[test]
    fn test_all_tips_in_order() {
        let item = Item {
            enhancement: 8,
            quality: 97.0,
            level: 120,
            class_restriction: Some(CharacterClass::Joker),
            ..Item::default()
        };
        let tips = market_tips(&item, Copper::new(2_000_000));
        assert_eq!(
            tips,
            vec![
                MarketTip::HighEnhancement,
                MarketTip::PremiumStats,
                MarketTip::DpsClassDemand,
                MarketTip::SellInGems,
                MarketTip::EndgameDemand,
                MarketTip::CollectorsItem,
            ]
        );
    }

    #[test]
    fn test_quality_tips_exclusive() {
        let near = Item {
            quality: 92.0,
            ..Item::default()
        };
        assert_eq!(market_tips(&near, Copper::zero()), vec![MarketTip::NearPerfectStats]);

        let blue = Item {
            quality: 95.0,
            ..Item::default()
        };
        assert_eq!(market_tips(&blue, Copper::zero()), vec![MarketTip::PremiumStats]);
    }

    #[test]
    fn test_collectors_item_needs_enhancement() {
        let item = Item {
            quality: 99.0,
            enhancement: 4,
            ..Item::default()
        };
        assert!(!market_tips(&item, Copper::zero()).contains(&MarketTip::CollectorsItem));

        let item = Item {
            enhancement: 5,
            ..item
        };
        assert_eq!(
            market_tips(&item, Copper::zero()),
            vec![MarketTip::PremiumStats, MarketTip::CollectorsItem]
        );
    }

    #[test]
    fn test_price_threshold_is_strict() {
        let item = Item::default();
        assert!(market_tips(&item, Copper::new(1_000_000)).is_empty());
        assert_eq!(market_tips(&item, Copper::new(1_000_001)), vec![MarketTip::SellInGems]);
    }

    #[test]
    fn test_only_dps_classes_get_demand_tip() {
        for class in CharacterClass::ALL {
            let item = Item {
                class_restriction: Some(class),
                ..Item::default()
            };
            let has_tip = market_tips(&item, Copper::zero()).contains(&MarketTip::DpsClassDemand);
            assert_eq!(has_tip, class.is_dps(), "{}", class);
        }
    }

    #[test]
    fn test_tip_messages() {
        let item = Item {
            level: 100,
            ..Item::default()
        };
        assert_eq!(tip_messages(&item, Copper::zero()), vec!["Endgame item - stable demand".to_string()]);
    }
}
