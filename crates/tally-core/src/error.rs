//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Cart and submission rule violations            │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── CatalogError     - Unusable product catalog input                 │
//! │                                                                         │
//! │  register app errors (separate crate)                                  │
//! │  └── ApiError         - What the page sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → user-visible alert     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant here is recoverable: a failed command leaves the cart
//! exactly as it was before the command.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and submission errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Add-to-cart was pressed with no product selected.
    #[error("No product selected")]
    MissingSelection,

    /// Quantity is zero, negative or not a number.
    #[error("Quantity must be a whole number of at least 1")]
    InvalidQuantity,

    /// Requested quantity plus what is already queued exceeds stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart already holds 3 × Rice 1kg, stock is 5
    ///      │
    ///      ▼
    /// Add 4 more
    ///      │
    ///      ▼
    /// InsufficientStock { available: 5, in_cart: 3, requested: 4 }
    ///      │
    ///      ▼
    /// Alert: "cannot add more than the available quantity"
    /// ```
    #[error(
        "Insufficient stock for {product}: available {available}, already in cart {in_cart}, requested {requested}"
    )]
    InsufficientStock {
        product: String,
        available: u32,
        in_cart: u32,
        requested: u32,
    },

    /// Submit was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// No line item at the given position.
    #[error("No cart item at position {index} (cart has {len} items)")]
    ItemNotFound { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Cart payload could not be encoded.
    #[error("Failed to serialize cart: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a profit percentage that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two catalog records with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors raised while reading the product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog text is not a JSON array of product records.
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record breaks a catalog rule.
    #[error("Invalid catalog record: {0}")]
    Validation(#[from] ValidationError),
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
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product: "Rice 1kg".to_string(),
            available: 5,
            in_cart: 3,
            requested: 4,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Rice 1kg: available 5, already in cart 3, requested 4"
        );

        let err = CoreError::InvalidQuantity;
        assert_eq!(err.to_string(), "Quantity must be a whole number of at least 1");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "product id".to_string(),
            value: "7".to_string(),
        };
        assert_eq!(err.to_string(), "product id '7' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
