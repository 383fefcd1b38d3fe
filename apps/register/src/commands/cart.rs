//! # Cart Commands
//!
//! Viewing, adding to and removing from the pending cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Submitted│                        │
//! │  │  Cart    │     │          │     │   Form   │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart       submit_cart                         │
//! │       │           remove_from_cart  (submit.rs)                         │
//! │       │                                  │                              │
//! │       └──────────────────────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tally_core::{CartRow, CartSummary, LineItem, SummaryDisplay};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Cart contents with totals and the cash-payable amount.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub rows: Vec<CartRow>,
    pub summary: CartSummary,
    pub totals: SummaryDisplay,
    pub payable: i64,
    pub payable_display: String,
}

fn cart_response(session: &SessionState, config: &ConfigState) -> CartResponse {
    session.with_controller(|c| {
        let summary = c.summary();
        let payable = c.payable();
        CartResponse {
            items: c.cart().items().to_vec(),
            rows: c.rows(),
            summary,
            totals: summary.display(),
            payable,
            payable_display: config.format_secondary(payable as f64),
        }
    })
}

/// Gets the current cart contents.
///
/// ## Returns
/// Lines in insertion order, their table rows, totals and the payable amount
pub fn get_cart(session: &SessionState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart_response(session, config)
}

/// Adds the current entry form to the cart.
///
/// ## Behavior
/// - Same product already in cart: quantity and totals grow, the line keeps
///   its first profit percentage
/// - Otherwise a new line is appended
/// - The entry form resets either way
///
/// ## Errors
/// `MISSING_SELECTION`, `INVALID_QUANTITY`, `VALIDATION_ERROR` (profit) or
/// `INSUFFICIENT_STOCK`; the cart is untouched on error.
pub fn add_to_cart(session: &mut SessionState, config: &ConfigState) -> Result<CartResponse, ApiError> {
    let form = session.with_controller(|c| c.form().clone());
    debug!(
        product = %form.product_name,
        quantity = %form.quantity,
        profit = %form.profit,
        "add_to_cart command"
    );

    session
        .with_controller_mut(|c| c.add_item().map(|_| ()))
        .map_err(|e| {
            warn!(product = %form.product_name, error = %e, "Add to cart rejected");
            ApiError::from(e)
        })?;

    Ok(cart_response(session, config))
}

/// Removes the line at `index` (0-based, table order).
pub fn remove_from_cart(
    session: &mut SessionState,
    config: &ConfigState,
    index: usize,
) -> Result<CartResponse, ApiError> {
    debug!(index = %index, "remove_from_cart command");

    let removed = session.with_controller_mut(|c| c.remove_item(index))?;
    debug!(product = %removed.product_name, "Removed cart line");

    Ok(cart_response(session, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::entry;
    use crate::commands::tests_support::session;
    use crate::error::ErrorCode;

    fn enter(s: &mut SessionState, name: &str, qty: &str, profit: &str) {
        entry::select_product(s, name);
        entry::set_quantity(s, qty);
        entry::set_profit(s, profit);
    }

    #[test]
    fn test_add_to_cart_and_payable() {
        let mut s = session();
        let config = ConfigState::default();

        enter(&mut s, "Rice 1kg", "3", "15");
        let cart = add_to_cart(&mut s, &config).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.rows[0].profit_percentage, "15%");
        assert_eq!(cart.totals.total_price, "4.14");
        assert_eq!(cart.totals.total_secondary_price, "53,820");
        assert_eq!(cart.payable, 54_000);
        assert_eq!(cart.payable_display, "54,000 SYP");

        // Form was reset
        let prices = entry::get_prices(&s);
        assert_eq!(prices.form.product_name, "");
        assert_eq!(prices.form.quantity, "1");
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut s = session();
        let config = ConfigState::default();

        enter(&mut s, "Rice 1kg", "2", "15");
        add_to_cart(&mut s, &config).unwrap();
        enter(&mut s, "Rice 1kg", "1", "20");
        let cart = add_to_cart(&mut s, &config).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.items[0].profit_percentage.as_str(), "15");
        assert_eq!(cart.summary.total_quantity, 3);
    }

    #[test]
    fn test_add_rejections() {
        let mut s = session();
        let config = ConfigState::default();

        let err = add_to_cart(&mut s, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingSelection);

        enter(&mut s, "Sugar 1kg", "0", "10");
        let err = add_to_cart(&mut s, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);

        // Negative input gets the same message as zero
        enter(&mut s, "Sugar 1kg", "-3", "10");
        let err = add_to_cart(&mut s, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(err.message, "Quantity must be a whole number of at least 1");

        enter(&mut s, "Sugar 1kg", "1", "");
        let err = add_to_cart(&mut s, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        enter(&mut s, "Sugar 1kg", "2", "10");
        add_to_cart(&mut s, &config).unwrap();
        enter(&mut s, "Sugar 1kg", "1", "10");
        let err = add_to_cart(&mut s, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        // Inactive products never resolve
        enter(&mut s, "Old Tea", "1", "10");
        let err = add_to_cart(&mut s, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingSelection);

        let cart = get_cart(&s, &config);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_remove_from_cart() {
        let mut s = session();
        let config = ConfigState::default();

        enter(&mut s, "Rice 1kg", "1", "15");
        add_to_cart(&mut s, &config).unwrap();
        enter(&mut s, "Sugar 1kg", "1", "10");
        add_to_cart(&mut s, &config).unwrap();

        let cart = remove_from_cart(&mut s, &config, 0).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_name, "Sugar 1kg");
        assert_eq!(cart.rows[0].index, 0);

        let err = remove_from_cart(&mut s, &config, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_empty_cart_view() {
        let s = session();
        let cart = get_cart(&s, &ConfigState::default());
        assert!(cart.items.is_empty());
        assert_eq!(cart.payable, 0);
        assert_eq!(cart.totals.total_price, "0.00");
        assert_eq!(cart.payable_display, "0 SYP");
    }
}
