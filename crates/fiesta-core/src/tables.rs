//! # Price Tables
//!
//! Every fixed number the price formula depends on.
//!
//! Multipliers keyed by an enumeration are `match` expressions on that
//! enumeration, so adding a rarity or class without a price entry is a
//! compile error instead of a silent `1.0`.
//!
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────────┐
//! │ Enhancement (+0 .. +9)   │ 1.0 1.2 1.5 2.0 2.8 4.0 6.5 11 20 40     │
//! │ Rarity                   │ common 1.0  rare 1.5  epic 2.5  leg. 4.0 │
//! │ Class demand             │ gla 1.3 jok 1.3 mag 1.2 hun 0.9          │
//! │                          │ cru 0.8 pri 0.7                          │
//! │ Stat weight              │ sta 1.0 dex 1.0 int 0.8 str 0.9          │
//! │                          │ con 0.8 dmg 1.5 def 1.2 mdef 1.1         │
//! └──────────────────────────┴──────────────────────────────────────────┘
//! ```

use crate::types::{CharacterClass, Rarity, Stat};

// =============================================================================
// Enhancement
// =============================================================================

/// Highest enhancement tier with a table entry.
pub const MAX_ENHANCEMENT: u8 = 9;

/// Price multiplier per enhancement tier, indexed by tier.
pub const ENHANCEMENT_MULTIPLIERS: [f64; MAX_ENHANCEMENT as usize + 1] =
    [1.0, 1.2, 1.5, 2.0, 2.8, 4.0, 6.5, 11.0, 20.0, 40.0];

/// Returns the multiplier for an enhancement tier.
///
/// Tiers outside the table count as unenhanced (1.0).
///
/// ## Example
/// ```rust
/// use fiesta_core::tables::enhancement_multiplier;
///
/// assert_eq!(enhancement_multiplier(7), 11.0);
/// assert_eq!(enhancement_multiplier(12), 1.0);
/// ```
#[inline]
pub fn enhancement_multiplier(tier: u8) -> f64 {
    ENHANCEMENT_MULTIPLIERS
        .get(usize::from(tier))
        .copied()
        .unwrap_or(1.0)
}

// =============================================================================
// Rarity / Class / Stat Weights
// =============================================================================

impl Rarity {
    /// Price multiplier for this rarity.
    pub const fn price_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.5,
            Rarity::Legendary => 4.0,
        }
    }
}

impl CharacterClass {
    /// Demand factor applied to items restricted to this class.
    pub const fn demand_factor(&self) -> f64 {
        match self {
            CharacterClass::Gladiator => 1.3,
            CharacterClass::Joker => 1.3,
            CharacterClass::Mage => 1.2,
            CharacterClass::Hunter => 0.9,
            CharacterClass::Crusader => 0.8,
            CharacterClass::Priest => 0.7,
        }
    }
}

impl Stat {
    /// Weight of one stat point relative to a plain stamina point.
    pub const fn weight(&self) -> f64 {
        match self {
            Stat::Stamina => 1.0,
            Stat::Dexterity => 1.0,
            Stat::Intelligence => 0.8,
            Stat::Strength => 0.9,
            Stat::Constitution => 0.8,
            Stat::Damage => 1.5,
            Stat::Defense => 1.2,
            Stat::MagicDefense => 1.1,
        }
    }
}

/// Weight of a stat outside the known set.
pub const UNKNOWN_STAT_WEIGHT: f64 = 1.0;

// =============================================================================
// Bounds
// =============================================================================

/// Upper bound on the stats bonus fraction (+200%).
pub const MAX_STATS_BONUS: f64 = 2.0;

/// Lower clamp of the market trend factor.
pub const MIN_TREND_FACTOR: f64 = 0.5;

/// Upper clamp of the market trend factor. Also used when supply is zero.
pub const MAX_TREND_FACTOR: f64 = 3.0;

/// Highest valid quality percentage.
pub const MAX_QUALITY: f64 = 100.0;

/// Highest valid demand or supply percentage.
pub const MAX_MARKET_PERCENTAGE: f64 = 200.0;

// =============================================================================
// Currency
// =============================================================================

/// Copper per silver coin.
pub const COPPER_PER_SILVER: u64 = 100;

/// Copper per gold coin (100 silver).
pub const COPPER_PER_GOLD: u64 = 10_000;

/// Copper per gem (100 gold).
pub const COPPER_PER_GEM: u64 = 1_000_000;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhancement_strictly_increasing() {
        for pair in ENHANCEMENT_MULTIPLIERS.windows(2) {
            assert!(pair[1] > pair[0], "{:?} is not increasing", pair);
        }
    }

    #[test]
    fn test_enhancement_out_of_table() {
        assert_eq!(enhancement_multiplier(0), 1.0);
        assert_eq!(enhancement_multiplier(9), 40.0);
        assert_eq!(enhancement_multiplier(10), 1.0);
        assert_eq!(enhancement_multiplier(u8::MAX), 1.0);
    }

    #[test]
    fn test_rarity_multipliers_ordered() {
        let multipliers: Vec<f64> = Rarity::ALL.iter().map(|r| r.price_multiplier()).collect();
        assert_eq!(multipliers, vec![1.0, 1.5, 2.5, 4.0]);
    }

    #[test]
    fn test_class_demand_factors() {
        assert_eq!(CharacterClass::Gladiator.demand_factor(), 1.3);
        assert_eq!(CharacterClass::Priest.demand_factor(), 0.7);
        for class in CharacterClass::ALL {
            if class.is_dps() {
                assert_eq!(class.demand_factor(), 1.3);
            }
        }
    }

    #[test]
    fn test_damage_is_heaviest_stat() {
        let heaviest = Stat::ALL
            .into_iter()
            .max_by(|a, b| a.weight().total_cmp(&b.weight()))
            .unwrap();
        assert_eq!(heaviest, Stat::Damage);
    }

    #[test]
    fn test_currency_radix() {
        assert_eq!(COPPER_PER_GOLD, COPPER_PER_SILVER * 100);
        assert_eq!(COPPER_PER_GEM, COPPER_PER_GOLD * 100);
    }
}
