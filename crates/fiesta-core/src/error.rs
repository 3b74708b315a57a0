//! # Error Types
//!
//! Domain-specific error types for fiesta-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fiesta-core errors (this file)                                        │
//! │  ├── CoreError        - Parsing and validation of item records         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  price-cli errors (separate crate)                                     │
//! │  └── CliError         - Config, file and output failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note
//! The pricing functions never return errors. `compute_price`,
//! `convert_currency` and `market_tips` are total over their input types.
//! Errors only appear at the boundary where untrusted input becomes an
//! [`Item`](crate::Item).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning external input into domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item or trend record is not valid JSON or has the wrong shape.
    ///
    /// ## When This Occurs
    /// - Malformed JSON from the front end
    /// - Stat value that is not a non-negative integer
    /// - Enum value outside the known set (e.g. `"rarity": "mythic"`)
    #[error("Invalid item record: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Returned by the [`validation`](crate::validation) module and by the
/// `FromStr` implementations of the item enumerations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "enhancement".to_string(),
            min: 0,
            max: 9,
        };
        assert_eq!(err.to_string(), "enhancement must be between 0 and 9");

        let err = ValidationError::MustBePositive {
            field: "basePrice".to_string(),
        };
        assert_eq!(err.to_string(), "basePrice must be positive");

        let err = ValidationError::NotAllowed {
            field: "rarity".to_string(),
            allowed: vec!["common".to_string(), "rare".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "rarity must be one of: [\"common\", \"rare\"]"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "level".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: level must be positive");
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::InvalidJson(_)));
    }
}
