//! # Submit Command
//!
//! Hands the pending cart to the sale backend.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ Sell ]                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  cart empty? ──yes──► EMPTY_CART alert, nothing changes                 │
//! │     │ no                                                                │
//! │     ▼                                                                   │
//! │  { cart_data: "[{...line...}]", payablePrice: "54000" }                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  cart cleared, entry form reset                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tally_core::SubmissionForm;
use tracing::info;

use crate::error::ApiError;
use crate::state::SessionState;

/// Serializes the cart into the sale form fields and starts a new sale.
pub fn submit_cart(session: &mut SessionState) -> Result<SubmissionForm, ApiError> {
    let items = session.with_controller(|c| c.cart().item_count());
    let form = session.with_controller_mut(|c| c.submit())?;

    info!(items = items, payable = %form.payable_price, "Cart submitted");
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests_support::session;
    use crate::commands::{cart, entry};
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

    #[test]
    fn test_submit_empty_cart() {
        let mut s = session();
        let err = submit_cart(&mut s).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn test_submit_clears_cart() {
        let mut s = session();
        let config = ConfigState::default();

        entry::select_product(&mut s, "Rice 1kg");
        entry::set_quantity(&mut s, "3");
        entry::set_profit(&mut s, "15");
        cart::add_to_cart(&mut s, &config).unwrap();

        let form = submit_cart(&mut s).unwrap();
        assert_eq!(form.payable_price, "54000");

        let lines = form.line_items().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_name, "Rice 1kg");
        assert_eq!(lines[0].quantity, 3);

        assert!(cart::get_cart(&s, &config).items.is_empty());
    }
}
