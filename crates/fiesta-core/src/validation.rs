//! # Validation Module
//!
//! Input validation for item and market records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end / CLI flags                                        │
//! │  ├── Widget limits (slider 0..9, 0..100)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Deserialization (serde)                                      │
//! │  ├── Type checks, enum names                                           │
//! │  └── Unsigned fields reject negative numbers                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  └── Range invariants (level, price, enhancement, quality, market %)  │
//! │                                                                         │
//! │  The pricing functions run after these layers and never re-check.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fiesta_core::validation::{validate_enhancement, validate_quality};
//!
//! validate_enhancement(9).unwrap();
//! assert!(validate_quality(100.5).is_err());
//! ```

use crate::error::ValidationError;
use crate::tables::{MAX_ENHANCEMENT, MAX_MARKET_PERCENTAGE, MAX_QUALITY};
use crate::types::{Item, MarketTrend};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted item id.
pub const MAX_ID_LEN: usize = 64;

/// Longest accepted item name.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item id.
///
/// The id is opaque to the calculator; only its length is bounded.
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().chars().count() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Validates an item name.
///
/// ## Rules
/// - May be empty (the form starts blank)
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use fiesta_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Dragon Sword").is_ok());
/// assert!(validate_item_name("").is_ok());
/// assert!(validate_item_name(&"A".repeat(201)).is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item level (must be at least 1).
pub fn validate_level(level: u32) -> ValidationResult<()> {
    if level == 0 {
        return Err(ValidationError::MustBePositive {
            field: "level".to_string(),
        });
    }

    Ok(())
}

/// Validates a base price in copper (must be positive).
pub fn validate_base_price(base_price: u64) -> ValidationResult<()> {
    if base_price == 0 {
        return Err(ValidationError::MustBePositive {
            field: "basePrice".to_string(),
        });
    }

    Ok(())
}

/// Validates an enhancement tier (0 to 9).
pub fn validate_enhancement(enhancement: u8) -> ValidationResult<()> {
    if enhancement > MAX_ENHANCEMENT {
        return Err(ValidationError::OutOfRange {
            field: "enhancement".to_string(),
            min: 0,
            max: i64::from(MAX_ENHANCEMENT),
        });
    }

    Ok(())
}

/// Checks that `value` is finite and inside `0.0..=max`.
fn validate_bounded(field: &str, value: f64, max: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if !(0.0..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: max as i64,
        });
    }

    Ok(())
}

/// Validates a quality percentage (0 to 100).
pub fn validate_quality(quality: f64) -> ValidationResult<()> {
    validate_bounded("quality", quality, MAX_QUALITY)
}

/// Validates a demand or supply percentage (0 to 200).
pub fn validate_percentage(field: &str, value: f64) -> ValidationResult<()> {
    validate_bounded(field, value, MAX_MARKET_PERCENTAGE)
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every invariant of an item, returning the first violation.
///
/// ## Example
/// ```rust
/// use fiesta_core::validation::validate_item;
/// use fiesta_core::Item;
///
/// assert!(validate_item(&Item::default()).is_ok());
///
/// let item = Item { level: 0, ..Item::default() };
/// assert!(validate_item(&item).is_err());
/// ```
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_item_id(&item.id)?;
    validate_item_name(&item.name)?;
    validate_level(item.level)?;
    validate_base_price(item.base_price)?;
    validate_enhancement(item.enhancement)?;
    validate_quality(item.quality)?;
    Ok(())
}

/// Validates demand and supply of a market trend.
///
/// Zero supply is accepted; pricing saturates it at the upper clamp.
pub fn validate_market_trend(trend: &MarketTrend) -> ValidationResult<()> {
    validate_percentage("demand", trend.demand)?;
    validate_percentage("supply", trend.supply)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
