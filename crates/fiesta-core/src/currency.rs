//! # Currency Module
//!
//! Provides the `Copper` type for prices and the `Currency` coin breakdown.
//!
//! ## Denominations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1 gem    = 100 gold                                                    │
//! │  1 gold   = 100 silver                                                  │
//! │  1 silver = 100 copper                                                  │
//! │                                                                         │
//! │  1,234,567 copper                                                       │
//! │     │                                                                   │
//! │     ├── / 1,000,000 ──► 1 gem        remainder 234,567                 │
//! │     ├── /    10,000 ──► 23 gold      remainder   4,567                 │
//! │     ├── /       100 ──► 45 silver    remainder      67                 │
//! │     └──────────────────► 67 copper                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Integer Copper?
//! Prices are computed with floating point but leave the calculator as a
//! whole number of copper. Everything after that point (coin breakdown,
//! tips, display) is exact integer arithmetic.
//!
//! ## Usage
//! ```rust
//! use fiesta_core::currency::{convert_currency, Copper};
//!
//! let coins = convert_currency(Copper::new(1_234_567));
//! assert_eq!((coins.gems, coins.gold, coins.silver, coins.copper), (1, 23, 45, 67));
//! assert_eq!(coins.total_copper(), Copper::new(1_234_567));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thousands::Separable;
use ts_rs::TS;

use crate::tables::{COPPER_PER_GEM, COPPER_PER_GOLD, COPPER_PER_SILVER};

// =============================================================================
// Copper Type
// =============================================================================

/// An amount of money in copper, the smallest denomination.
///
/// Unsigned: a price can be zero but never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Copper(#[ts(type = "number")] u64);

impl Copper {
    /// Creates an amount from a raw copper count.
    #[inline]
    pub const fn new(amount: u64) -> Self {
        Copper(amount)
    }

    /// Returns the raw copper count.
    #[inline]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Copper(0)
    }

    /// Rounds a computed price to whole copper, half up.
    ///
    /// Negative and NaN inputs become zero, values beyond `u64::MAX`
    /// saturate.
    ///
    /// ## Example
    /// ```rust
    /// use fiesta_core::currency::Copper;
    ///
    /// assert_eq!(Copper::from_f64_rounded(100.5).amount(), 101);
    /// assert_eq!(Copper::from_f64_rounded(100.49).amount(), 100);
    /// assert_eq!(Copper::from_f64_rounded(-3.0).amount(), 0);
    /// ```
    #[inline]
    pub fn from_f64_rounded(value: f64) -> Self {
        // f64::round is half-away-from-zero, which is half-up for the
        // non-negative values that reach this point. `as` saturates.
        Copper(value.round() as u64)
    }
}

impl fmt::Display for Copper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} copper", self.0.separate_with_commas())
    }
}

// =============================================================================
// Currency Breakdown
// =============================================================================

/// One of the four coin types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    Gems,
    Gold,
    Silver,
    Copper,
}

impl Denomination {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Denomination::Gems => "gems",
            Denomination::Gold => "gold",
            Denomination::Silver => "silver",
            Denomination::Copper => "copper",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A copper amount decomposed into coins.
///
/// `copper`, `silver` and `gold` are always below 100; `gems` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Currency {
    #[ts(type = "number")]
    pub gems: u64,
    pub gold: u32,
    pub silver: u32,
    pub copper: u32,
}

impl Currency {
    /// Reassembles the coins into a single copper amount.
    pub fn total_copper(&self) -> Copper {
        Copper(
            self.gems * COPPER_PER_GEM
                + u64::from(self.gold) * COPPER_PER_GOLD
                + u64::from(self.silver) * COPPER_PER_SILVER
                + u64::from(self.copper),
        )
    }

    /// Non-zero denominations, largest first.
    pub fn denominations(&self) -> impl Iterator<Item = (Denomination, u64)> {
        [
            (Denomination::Gems, self.gems),
            (Denomination::Gold, u64::from(self.gold)),
            (Denomination::Silver, u64::from(self.silver)),
            (Denomination::Copper, u64::from(self.copper)),
        ]
        .into_iter()
        .filter(|&(_, amount)| amount > 0)
    }
}

/// Shows only the coins that are present, e.g. `1 gems 23 gold 67 copper`.
impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (denomination, amount) in self.denominations() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", amount.separate_with_commas(), denomination)?;
            first = false;
        }
        if first {
            f.write_str("0 copper")?;
        }
        Ok(())
    }
}

/// Decomposes a copper amount into gems, gold, silver and copper.
///
/// ## Example
/// ```rust
/// use fiesta_core::currency::{convert_currency, Copper};
///
/// let coins = convert_currency(Copper::new(10_050));
/// assert_eq!(coins.gold, 1);
/// assert_eq!(coins.silver, 0);
/// assert_eq!(coins.copper, 50);
/// ```
pub fn convert_currency(amount: Copper) -> Currency {
    let total = amount.amount();

    let gems = total / COPPER_PER_GEM;
    let remaining = total % COPPER_PER_GEM;

    let gold = remaining / COPPER_PER_GOLD;
    let remaining = remaining % COPPER_PER_GOLD;

    let silver = remaining / COPPER_PER_SILVER;
    let copper = remaining % COPPER_PER_SILVER;

    // Each remainder is below 100 by construction.
    Currency {
        gems,
        gold: gold as u32,
        silver: silver as u32,
        copper: copper as u32,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_example() {
        let coins = convert_currency(Copper::new(1_234_567));
        assert_eq!(
            coins,
            Currency {
                gems: 1,
                gold: 23,
                silver: 45,
                copper: 67
            }
        );
    }

    #[test]
    fn test_convert_zero() {
        assert_eq!(convert_currency(Copper::zero()), Currency::default());
    }

    #[test]
    fn test_convert_boundaries() {
        let coins = convert_currency(Copper::new(999_999));
        assert_eq!((coins.gems, coins.gold, coins.silver, coins.copper), (0, 99, 99, 99));

        let coins = convert_currency(Copper::new(1_000_000));
        assert_eq!((coins.gems, coins.gold, coins.silver, coins.copper), (1, 0, 0, 0));
    }

    #[test]
    fn test_total_copper_reconstructs() {
        for amount in [0, 1, 99, 100, 101, 9_999, 10_000, 123_456_789, u64::MAX] {
            let coins = convert_currency(Copper::new(amount));
            assert_eq!(coins.total_copper().amount(), amount);
            assert!(coins.gold < 100 && coins.silver < 100 && coins.copper < 100);
        }
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(convert_currency(Copper::new(1_234_567)).to_string(), "1 gems 23 gold 45 silver 67 copper");
        assert_eq!(convert_currency(Copper::new(10_050)).to_string(), "1 gold 50 copper");
        assert_eq!(convert_currency(Copper::new(2_500_000_000)).to_string(), "2,500 gems");
        assert_eq!(convert_currency(Copper::zero()).to_string(), "0 copper");
    }

    #[test]
    fn test_copper_display_groups_digits() {
        assert_eq!(Copper::new(0).to_string(), "0 copper");
        assert_eq!(Copper::new(999).to_string(), "999 copper");
        assert_eq!(Copper::new(1_000).to_string(), "1,000 copper");
        assert_eq!(Copper::new(1_234_567).to_string(), "1,234,567 copper");
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(Copper::from_f64_rounded(0.5).amount(), 1);
        assert_eq!(Copper::from_f64_rounded(2.5).amount(), 3);
        assert_eq!(Copper::from_f64_rounded(2.4999).amount(), 2);
        assert_eq!(Copper::from_f64_rounded(f64::NAN).amount(), 0);
        assert_eq!(Copper::from_f64_rounded(f64::INFINITY).amount(), u64::MAX);
    }

    #[test]
    fn test_denominations_skip_zero() {
        let coins = convert_currency(Copper::new(1_000_005));
        let parts: Vec<_> = coins.denominations().collect();
        assert_eq!(parts, vec![(Denomination::Gems, 1), (Denomination::Copper, 5)]);
    }
}
