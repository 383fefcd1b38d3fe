//! # Validation Module
//!
//! Input normalization and business-rule checks for the cart widget.
//!
//! ## Quantity Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quantity Handling                                  │
//! │                                                                         │
//! │  Typing (every keystroke)                                              │
//! │  ├── parse_quantity("3")    → 3                                        │
//! │  ├── parse_quantity("0")    → 0   (computed as 0, input left alone)    │
//! │  ├── parse_quantity("-2")   → 0                                        │
//! │  └── parse_quantity("abc")  → 0                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Add to cart                                                           │
//! │  └── validate_quantity(0)   → InvalidQuantity (must be ≥ 1)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{ProductId, ProfitSelection};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Normalization
// =============================================================================

/// Reads the integer prefix of `raw` the way a quantity box is read.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit (`"12kg"` is 12, `"2.7"` is 2). Returns `None` when there are
/// no leading digits at all.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Absurdly long inputs saturate instead of failing
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Normalizes a typed quantity for computation.
///
/// Anything that is not a positive integer counts as 0; the add step then
/// rejects it. Values beyond `u32::MAX` saturate.
pub fn parse_quantity(raw: &str) -> u32 {
    match parse_int_prefix(raw) {
        Some(q) if q > 0 => u32::try_from(q).unwrap_or(u32::MAX),
        _ => 0,
    }
}

// =============================================================================
// Add-to-cart Rules
// =============================================================================

/// A product must be selected before anything can be added.
pub fn validate_selection(product_id: ProductId) -> CoreResult<()> {
    if product_id.is_none() {
        return Err(CoreError::MissingSelection);
    }
    Ok(())
}

/// Quantity must be at least 1 to be added.
pub fn validate_quantity(quantity: u32) -> CoreResult<()> {
    if quantity == 0 {
        return Err(CoreError::InvalidQuantity);
    }
    Ok(())
}

/// A profit percentage must be chosen and numeric; returns its value.
pub fn validate_profit(selection: &ProfitSelection) -> ValidationResult<f64> {
    if selection.as_str().trim().is_empty() {
        return Err(ValidationError::Required {
            field: "profit percentage".to_string(),
        });
    }

    selection
        .percent()
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "profit percentage".to_string(),
            reason: format!("'{}' is not a number", selection),
        })
}

/// Already-queued plus requested units must fit in the available stock.
pub fn validate_stock(
    product: &str,
    available: u32,
    in_cart: u32,
    requested: u32,
) -> CoreResult<()> {
    if u64::from(in_cart) + u64::from(requested) > u64::from(available) {
        return Err(CoreError::InsufficientStock {
            product: product.to_string(),
            available,
            in_cart,
            requested,
        });
    }
    Ok(())
}

// =============================================================================
// Catalog Rules
// =============================================================================

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 100 {
        return Err(ValidationError::OutOfRange {
            field: "name length".to_string(),
            min: 1,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a unit price: finite and not negative.
pub fn validate_price(field: &str, price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
