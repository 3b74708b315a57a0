//! # Domain Types
//!
//! Core domain types used throughout the price calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │   ItemStats     │   │  MarketTrend    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, name       │   │  stamina        │   │  demand (%)     │       │
//! │  │  type, rarity   │──►│  dexterity ...  │   │  supply (%)     │       │
//! │  │  level          │   │  magic_defense  │   │  direction      │       │
//! │  │  base_price     │   └─────────────────┘   └─────────────────┘       │
//! │  │  enhancement    │                                                    │
//! │  │  quality        │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  class_restr.   │──►│ CharacterClass  │   │  QualityTier    │       │
//! │  └─────────────────┘   │  Gladiator ...  │   │  Poor .. Blue   │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Field names are camelCase and enumerations are lowercase strings, so the
//! JSON the front end already produces deserializes without adapters:
//! ```json
//! { "type": "weapon", "rarity": "epic", "basePrice": 500,
//!   "classRestriction": "joker", "stats": { "magicDefense": 40 } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::validation::validate_item;

/// Builds the `NotAllowed` error shared by every `FromStr` impl below.
fn not_allowed(field: &str, allowed: &[&str]) -> ValidationError {
    ValidationError::NotAllowed {
        field: field.to_string(),
        allowed: allowed.iter().map(|s| s.to_string()).collect(),
    }
}

// =============================================================================
// Item Type
// =============================================================================

/// Equipment slot category. Does not affect price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Weapon,
    Armor,
    Shield,
    Accessory,
}

impl ItemType {
    /// Every item type, in display order.
    pub const ALL: [ItemType; 4] = [
        ItemType::Weapon,
        ItemType::Armor,
        ItemType::Shield,
        ItemType::Accessory,
    ];

    /// Lowercase wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemType::Weapon => "weapon",
            ItemType::Armor => "armor",
            ItemType::Shield => "shield",
            ItemType::Accessory => "accessory",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weapon" => Ok(ItemType::Weapon),
            "armor" | "armour" => Ok(ItemType::Armor),
            "shield" => Ok(ItemType::Shield),
            "accessory" => Ok(ItemType::Accessory),
            _ => Err(not_allowed(
                "type",
                &ItemType::ALL.map(|t| t.as_str()),
            )),
        }
    }
}

// =============================================================================
// Rarity
// =============================================================================

/// Item rarity. Each tier carries a fixed price multiplier
/// (see [`Rarity::price_multiplier`](crate::tables)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Every rarity, from most to least common.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Lowercase wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "epic" => Ok(Rarity::Epic),
            "legendary" => Ok(Rarity::Legendary),
            _ => Err(not_allowed("rarity", &Rarity::ALL.map(|r| r.as_str()))),
        }
    }
}

// =============================================================================
// Character Class
// =============================================================================

/// The six playable classes an item can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Gladiator,
    Joker,
    Mage,
    Hunter,
    Crusader,
    Priest,
}

impl CharacterClass {
    /// Every class, highest market demand first.
    pub const ALL: [CharacterClass; 6] = [
        CharacterClass::Gladiator,
        CharacterClass::Joker,
        CharacterClass::Mage,
        CharacterClass::Hunter,
        CharacterClass::Crusader,
        CharacterClass::Priest,
    ];

    /// Lowercase wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Gladiator => "gladiator",
            CharacterClass::Joker => "joker",
            CharacterClass::Mage => "mage",
            CharacterClass::Hunter => "hunter",
            CharacterClass::Crusader => "crusader",
            CharacterClass::Priest => "priest",
        }
    }

    /// Damage-dealing classes whose gear sells fastest.
    pub const fn is_dps(&self) -> bool {
        matches!(self, CharacterClass::Gladiator | CharacterClass::Joker)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gladiator" => Ok(CharacterClass::Gladiator),
            "joker" => Ok(CharacterClass::Joker),
            "mage" => Ok(CharacterClass::Mage),
            "hunter" => Ok(CharacterClass::Hunter),
            "crusader" => Ok(CharacterClass::Crusader),
            "priest" => Ok(CharacterClass::Priest),
            _ => Err(not_allowed(
                "classRestriction",
                &CharacterClass::ALL.map(|c| c.as_str()),
            )),
        }
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Identifier for one of the recognized item stats.
///
/// Iterating [`Stat::ALL`] replaces reflecting over arbitrary record keys:
/// the set of stats is closed and the order is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Stamina,
    Dexterity,
    Intelligence,
    Strength,
    Constitution,
    Damage,
    Defense,
    MagicDefense,
}

impl Stat {
    /// Every recognized stat, in summation order.
    pub const ALL: [Stat; 8] = [
        Stat::Stamina,
        Stat::Dexterity,
        Stat::Intelligence,
        Stat::Strength,
        Stat::Constitution,
        Stat::Damage,
        Stat::Defense,
        Stat::MagicDefense,
    ];

    /// camelCase wire name (matches the `ItemStats` JSON keys).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Stat::Stamina => "stamina",
            Stat::Dexterity => "dexterity",
            Stat::Intelligence => "intelligence",
            Stat::Strength => "strength",
            Stat::Constitution => "constitution",
            Stat::Damage => "damage",
            Stat::Defense => "defense",
            Stat::MagicDefense => "magicDefense",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .into_iter()
            .find(|stat| stat.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| not_allowed("stat", &Stat::ALL.map(|s| s.as_str())))
    }
}

/// Stat bundle of an item. Absent stats are zero.
///
/// The eight known stats are fields with their own weight in
/// [`crate::tables`]. Any other key in a record lands in `extra` and is
/// priced at [`UNKNOWN_STAT_WEIGHT`](crate::tables::UNKNOWN_STAT_WEIGHT).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemStats {
    pub stamina: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub strength: u32,
    pub constitution: u32,
    pub damage: u32,
    pub defense: u32,
    pub magic_defense: u32,

    /// Stats outside the known set, by their wire name.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: BTreeMap<String, u32>,
}

impl ItemStats {
    /// Returns the magnitude of a single stat.
    pub const fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Stamina => self.stamina,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Strength => self.strength,
            Stat::Constitution => self.constitution,
            Stat::Damage => self.damage,
            Stat::Defense => self.defense,
            Stat::MagicDefense => self.magic_defense,
        }
    }

    /// Sets the magnitude of a single stat.
    pub fn set(&mut self, stat: Stat, value: u32) {
        let slot = match stat {
            Stat::Stamina => &mut self.stamina,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Strength => &mut self.strength,
            Stat::Constitution => &mut self.constitution,
            Stat::Damage => &mut self.damage,
            Stat::Defense => &mut self.defense,
            Stat::MagicDefense => &mut self.magic_defense,
        };
        *slot = value;
    }

    /// Builder-style variant of [`ItemStats::set`].
    pub fn with(mut self, stat: Stat, value: u32) -> Self {
        self.set(stat, value);
        self
    }

    /// Iterates over stats with a non-zero value, in [`Stat::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::ALL
            .into_iter()
            .map(move |stat| (stat, self.get(stat)))
            .filter(|&(_, value)| value > 0)
    }

    /// Iterates over unrecognized stats with a non-zero value, by name.
    pub fn extra_iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.extra
            .iter()
            .map(|(name, &value)| (name.as_str(), value))
            .filter(|&(_, value)| value > 0)
    }

    /// Checks if every stat is zero.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none() && self.extra_iter().next().is_none()
    }
}

// =============================================================================
// Item
// =============================================================================

/// An item offered for sale.
///
/// ## Invariants
/// - `level >= 1`
/// - `base_price > 0`
/// - `enhancement` in `0..=9`
/// - `quality` in `0.0..=100.0`
///
/// These are checked by [`validate_item`], not by the pricing functions.
/// Pricing an out-of-range item never panics, but the number it produces
/// has no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Opaque identifier chosen by the caller.
    pub id: String,

    /// Display name (may be empty while the user is still typing).
    pub name: String,

    /// Equipment slot.
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Required character level.
    pub level: u32,

    /// Vendor price in copper (smallest currency unit).
    #[ts(type = "number")]
    pub base_price: u64,

    pub rarity: Rarity,

    /// Class that can equip the item, if restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_restriction: Option<CharacterClass>,

    pub stats: ItemStats,

    /// Enhancement tier, +0 to +9.
    pub enhancement: u8,

    /// Stat roll quality in percent. 95 and above is "blue".
    pub quality: f64,
}

/// Starting values of a fresh item form in the front end.
impl Default for Item {
    fn default() -> Self {
        Item {
            id: "custom".to_string(),
            name: String::new(),
            item_type: ItemType::Weapon,
            level: 1,
            base_price: 100,
            rarity: Rarity::Common,
            class_restriction: None,
            stats: ItemStats::default(),
            enhancement: 0,
            quality: 50.0,
        }
    }
}

impl Item {
    /// Parses an item record from JSON and validates it.
    ///
    /// Missing fields take the values of [`Item::default`].
    ///
    /// ## Example
    /// ```rust
    /// use fiesta_core::{Item, Rarity};
    ///
    /// let item = Item::from_json(r#"{ "rarity": "epic", "level": 80 }"#).unwrap();
    /// assert_eq!(item.rarity, Rarity::Epic);
    /// assert_eq!(item.base_price, 100);
    ///
    /// assert!(Item::from_json(r#"{ "enhancement": 12 }"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let item: Item = serde_json::from_str(json)?;
        validate_item(&item)?;
        Ok(item)
    }

    /// Returns the quality tier label for this item.
    #[inline]
    pub fn quality_tier(&self) -> QualityTier {
        QualityTier::from_quality(self.quality)
    }
}

// =============================================================================
// Quality Tier
// =============================================================================

/// Coarse label for a quality percentage, as shown next to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Below 50%.
    Poor,
    /// 50% up to 80%.
    Normal,
    /// 80% up to 95%.
    Good,
    /// 95% and above ("blue stats").
    Blue,
}

impl QualityTier {
    pub fn from_quality(quality: f64) -> Self {
        if quality >= 95.0 {
            QualityTier::Blue
        } else if quality >= 80.0 {
            QualityTier::Good
        } else if quality >= 50.0 {
            QualityTier::Normal
        } else {
            QualityTier::Poor
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            QualityTier::Poor => "Poor stats",
            QualityTier::Normal => "Normal stats",
            QualityTier::Good => "Good stats",
            QualityTier::Blue => "Blue stats - premium!",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Market Trend
// =============================================================================

/// Direction of recent price movement. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl TrendDirection {
    pub const ALL: [TrendDirection; 3] = [
        TrendDirection::Rising,
        TrendDirection::Falling,
        TrendDirection::Stable,
    ];

    /// Lowercase wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Falling => "falling",
            TrendDirection::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rising" | "up" => Ok(TrendDirection::Rising),
            "falling" | "down" => Ok(TrendDirection::Falling),
            "stable" | "flat" => Ok(TrendDirection::Stable),
            _ => Err(not_allowed(
                "trend",
                &TrendDirection::ALL.map(|t| t.as_str()),
            )),
        }
    }
}

/// Demand/supply signal that scales a price within a bounded range.
///
/// Both percentages are expected in `0.0..=200.0`, where 100 is a
/// balanced market. Not stored with the item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MarketTrend {
    /// Buyer interest in percent.
    pub demand: f64,

    /// Listings on the market in percent.
    pub supply: f64,

    #[serde(rename = "trend", default)]
    pub direction: TrendDirection,
}

impl MarketTrend {
    pub const fn new(demand: f64, supply: f64, direction: TrendDirection) -> Self {
        MarketTrend {
            demand,
            supply,
            direction,
        }
    }

    /// A balanced market (100% demand, 100% supply).
    pub const fn balanced() -> Self {
        MarketTrend::new(100.0, 100.0, TrendDirection::Stable)
    }
}

impl Default for MarketTrend {
    fn default() -> Self {
        MarketTrend::balanced()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_default_matches_form() {
        let item = Item::default();
        assert_eq!(item.id, "custom");
        assert_eq!(item.item_type, ItemType::Weapon);
        assert_eq!(item.rarity, Rarity::Common);
        assert_eq!(item.level, 1);
        assert_eq!(item.base_price, 100);
        assert_eq!(item.enhancement, 0);
        assert_eq!(item.quality, 50.0);
        assert!(item.class_restriction.is_none());
        assert!(item.stats.is_empty());
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!("EPIC".parse::<Rarity>().unwrap(), Rarity::Epic);
        assert_eq!(" joker ".parse::<CharacterClass>().unwrap(), CharacterClass::Joker);
        assert_eq!("armour".parse::<ItemType>().unwrap(), ItemType::Armor);
        assert_eq!("magicdefense".parse::<Stat>().unwrap(), Stat::MagicDefense);
        assert_eq!("up".parse::<TrendDirection>().unwrap(), TrendDirection::Rising);

        let err = "mythic".parse::<Rarity>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { ref field, .. } if field == "rarity"));
    }

    #[test]
    fn test_enum_display_roundtrip() {
        for class in CharacterClass::ALL {
            assert_eq!(class.to_string().parse::<CharacterClass>().unwrap(), class);
        }
        for rarity in Rarity::ALL {
            assert_eq!(rarity.to_string().parse::<Rarity>().unwrap(), rarity);
        }
    }

    #[test]
    fn test_dps_classes() {
        let dps: Vec<_> = CharacterClass::ALL.into_iter().filter(|c| c.is_dps()).collect();
        assert_eq!(dps, vec![CharacterClass::Gladiator, CharacterClass::Joker]);
    }

    #[test]
    fn test_stats_get_set_iter() {
        let stats = ItemStats::default()
            .with(Stat::Damage, 30)
            .with(Stat::Stamina, 10);

        assert_eq!(stats.get(Stat::Damage), 30);
        assert_eq!(stats.get(Stat::Defense), 0);

        let present: Vec<_> = stats.iter().collect();
        assert_eq!(present, vec![(Stat::Stamina, 10), (Stat::Damage, 30)]);
    }

    #[test]
    fn test_item_json_uses_front_end_names() {
        let mut item = Item::default();
        item.class_restriction = Some(CharacterClass::Mage);
        item.stats.magic_defense = 12;

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "weapon");
        assert_eq!(json["basePrice"], 100);
        assert_eq!(json["classRestriction"], "mage");
        assert_eq!(json["stats"]["magicDefense"], 12);
    }

    #[test]
    fn test_item_json_partial_record_uses_defaults() {
        let item: Item = serde_json::from_str(r#"{ "name": "Dragon Sword", "quality": 97 }"#).unwrap();
        assert_eq!(item.name, "Dragon Sword");
        assert_eq!(item.quality, 97.0);
        assert_eq!(item.level, 1);
        assert_eq!(item.base_price, 100);
    }

    #[test]
    fn test_unknown_stat_kept_as_extra() {
        let item: Item =
            serde_json::from_str(r#"{ "stats": { "damage": 10, "luck": 5, "charm": 0 } }"#).unwrap();
        assert_eq!(item.stats.damage, 10);
        assert_eq!(item.stats.extra.get("luck"), Some(&5));
        assert_eq!(item.stats.extra_iter().collect::<Vec<_>>(), vec![("luck", 5)]);
        assert!(!item.stats.is_empty());

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["stats"]["luck"], 5);
        assert_eq!(json["stats"]["damage"], 10);
    }

    #[test]
    fn test_market_trend_json() {
        let trend: MarketTrend =
            serde_json::from_str(r#"{ "demand": 150, "supply": 50, "trend": "rising" }"#).unwrap();
        assert_eq!(trend, MarketTrend::new(150.0, 50.0, TrendDirection::Rising));
    }

    #[test]
    fn test_quality_tier_boundaries() {
        assert_eq!(QualityTier::from_quality(0.0), QualityTier::Poor);
        assert_eq!(QualityTier::from_quality(49.9), QualityTier::Poor);
        assert_eq!(QualityTier::from_quality(50.0), QualityTier::Normal);
        assert_eq!(QualityTier::from_quality(80.0), QualityTier::Good);
        assert_eq!(QualityTier::from_quality(94.9), QualityTier::Good);
        assert_eq!(QualityTier::from_quality(95.0), QualityTier::Blue);
    }
}
