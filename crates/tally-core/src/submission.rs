//! # Submission
//!
//! Builds the two hidden form fields the sale backend reads.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart_data      [{"productId":4,"quantity":2,"profitPercentage":"15",  │
//! │                   ...,"totalSypPrice":59800.0}, ...]                   │
//! │  payablePrice   "60000"                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, LineItem};
use crate::error::{CoreError, CoreResult};
use crate::summary::{CartSummary, PayableRounding};

/// Field values handed to the form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionForm {
    /// Every line item as a JSON array.
    pub cart_data: String,

    /// Rounded payable secondary amount, as an integer string.
    #[serde(rename = "payablePrice")]
    pub payable_price: String,
}

impl SubmissionForm {
    /// Serializes `cart` for submission.
    ///
    /// An empty cart is rejected and produces no fields at all.
    pub fn build(cart: &Cart, rounding: &PayableRounding) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let cart_data = serde_json::to_string(cart.items())?;
        let payable = rounding.round(CartSummary::from(cart).total_secondary_price);

        Ok(SubmissionForm {
            cart_data,
            payable_price: payable.to_string(),
        })
    }

    /// Reads the line items back out of `cart_data`.
    pub fn line_items(&self) -> CoreResult<Vec<LineItem>> {
        Ok(serde_json::from_str(&self.cart_data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculate;
    use crate::types::{ProductId, ProductRef, ProfitSelection};

    fn sugar() -> ProductRef {
        ProductRef {
            id: ProductId::new(11),
            name: "Sugar 1kg".to_string(),
            price: 1.0,
            secondary_price: 13_000.0,
            available_quantity: 50,
            retail_percent: Some(15),
            wholesale_percent: Some(7),
            is_active: true,
        }
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let result = SubmissionForm::build(&Cart::new(), &PayableRounding::default());
        assert!(matches!(result, Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_build_serializes_items_and_payable() {
        let mut cart = Cart::new();
        cart.add_item(&calculate(Some(&sugar()), &ProfitSelection::from("15"), "4"))
            .unwrap();

        let form = SubmissionForm::build(&cart, &PayableRounding::default()).unwrap();

        // 13,000 × 1.15 × 4 = 59,800 → remainder 300 ≥ 250 → 60,000
        assert_eq!(form.payable_price, "60000");

        let items = form.line_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, ProductId::new(11));
        assert_eq!(items[0].quantity, 4);
        assert_eq!(items[0].profit_percentage.as_str(), "15");
    }

    #[test]
    fn test_payload_is_a_json_array_with_wire_names() {
        let mut cart = Cart::new();
        cart.add_item(&calculate(Some(&sugar()), &ProfitSelection::from("15"), "1"))
            .unwrap();

        let form = SubmissionForm::build(&cart, &PayableRounding::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&form.cart_data).unwrap();

        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["productId"], 11);
        assert_eq!(first["productName"], "Sugar 1kg");
        assert!(first.get("totalSypPrice").is_some());
    }
}
