//! # fiesta-core: Pure Price Calculator
//!
//! Estimates what an in-game item is worth. All logic is pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Fiesta Price Calculator                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (price-cli / web form)                │   │
//! │  │      item fields ──► result card: price, coins, tips            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Item, MarketTrend                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fiesta-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │ currency  │  │   tips    │  │   │
//! │  │   │   Item    │  │ compute_  │  │  Copper   │  │ MarketTip │  │   │
//! │  │   │   Trend   │  │  price    │  │ Currency  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │        tables ─── constant multipliers    validation ─ ranges   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, ItemStats, MarketTrend, enums)
//! - [`tables`] - Fixed multipliers and bounds
//! - [`pricing`] - The price pipeline and its breakdown
//! - [`currency`] - Copper amounts and coin breakdown
//! - [`tips`] - Market advice
//! - [`quote`] - All of the above in one call
//! - [`validation`] - Range checks for untrusted input
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use fiesta_core::{compute_price, convert_currency, market_tips, CharacterClass, Item, MarketTip};
//!
//! let item = Item {
//!     enhancement: 8,
//!     quality: 97.0,
//!     level: 120,
//!     class_restriction: Some(CharacterClass::Joker),
//!     ..Item::default()
//! };
//!
//! let price = compute_price(&item, None);
//! let coins = convert_currency(price);
//! assert_eq!(coins.total_copper(), price);
//!
//! let tips = market_tips(&item, price);
//! assert_eq!(tips.first(), Some(&MarketTip::HighEnhancement));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod pricing;
pub mod quote;
pub mod tables;
pub mod tips;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use currency::{convert_currency, Copper, Currency, Denomination};
pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::{compute_price, PriceBreakdown};
pub use quote::{quote, PriceQuote};
pub use tips::{market_tips, tip_messages, MarketTip};
pub use types::*;
