//! # Cart
//!
//! Ordered line items, one per product.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Widget Action           Method                Cart Change              │
//! │  ─────────────           ──────                ───────────              │
//! │                                                                         │
//! │  Add (new product) ────► add_item() ─────────► items.push(line)        │
//! │                                                                         │
//! │  Add (same product) ───► add_item() ─────────► line.qty += q           │
//! │                                                 line.totals += totals   │
//! │                                                                         │
//! │  Click Remove ─────────► remove_item(i) ─────► items.remove(i)         │
//! │                                                                         │
//! │  Render table ─────────► rows() ─────────────► (read only)             │
//! │                                                                         │
//! │  Every add is fully validated before the cart is touched.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::format::{format_percent, format_primary, format_secondary};
use crate::pricing::PriceBreakdown;
use crate::types::{ProductId, ProfitSelection};
use crate::validation::{validate_profit, validate_quantity, validate_selection, validate_stock};

/// One cart row holding every queued unit of a product.
///
/// Wire names match the sale form backend; secondary-currency fields
/// serialize as `syp*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,

    /// Percentage as selected on the first add; merges keep it.
    pub profit_percentage: ProfitSelection,

    pub original_price: f64,
    #[serde(rename = "sypPrice")]
    pub secondary_price: f64,

    pub profit_price: f64,
    #[serde(rename = "sypProfitPrice")]
    pub secondary_profit_price: f64,

    pub total_price: f64,
    #[serde(rename = "totalSypPrice")]
    pub total_secondary_price: f64,

    /// Stock seen when the line was first added.
    pub available_quantity: u32,
}

impl LineItem {
    /// Freezes a breakdown into a line item.
    ///
    /// Fails when the profit percentage is missing, not a number, or so
    /// large that a price stops being finite.
    pub fn from_breakdown(breakdown: &PriceBreakdown) -> CoreResult<Self> {
        let percent = validate_profit(&breakdown.profit_percentage)?;
        let multiplier = 1.0 + percent / 100.0;
        let quantity = f64::from(breakdown.quantity);

        let profit_price = breakdown.original_price * multiplier;
        let secondary_profit_price = breakdown.secondary_price * multiplier;
        let total_price = profit_price * quantity;
        let total_secondary_price = secondary_profit_price * quantity;

        if ![total_price, total_secondary_price].iter().all(|p| p.is_finite()) {
            return Err(ValidationError::InvalidFormat {
                field: "profit percentage".to_string(),
                reason: format!("'{}' is too large", breakdown.profit_percentage),
            }
            .into());
        }

        Ok(LineItem {
            product_id: breakdown.product_id,
            product_name: breakdown.product_name.clone(),
            quantity: breakdown.quantity,
            profit_percentage: breakdown.profit_percentage.clone(),
            original_price: breakdown.original_price,
            secondary_price: breakdown.secondary_price,
            profit_price,
            secondary_profit_price,
            total_price,
            total_secondary_price,
            available_quantity: breakdown.available_quantity,
        })
    }

    /// Profit earned on this line in the primary currency.
    pub fn profit(&self) -> f64 {
        f64::from(self.quantity) * (self.profit_price - self.original_price)
    }

    /// Profit earned on this line in the secondary currency.
    pub fn secondary_profit(&self) -> f64 {
        f64::from(self.quantity) * (self.secondary_profit_price - self.secondary_price)
    }

    /// Folds another add of the same product into this line.
    ///
    /// Only the quantity and the two totals move. Unit prices and the
    /// profit selection stay as they were on the first add, even when the
    /// new add used a different percentage.
    fn absorb(&mut self, other: &LineItem) {
        self.quantity = self.quantity.saturating_add(other.quantity);
        self.total_price += other.total_price;
        self.total_secondary_price += other.total_secondary_price;
    }
}

/// The cart being assembled for one sale.
///
/// ## Invariants
/// - At most one line per product id (adding again merges)
/// - Every line has quantity ≥ 1
/// - Queued quantity per product never exceeds the stock seen at add time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,

    /// When the cart was created/last discarded
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds the breakdown to the cart or merges it into the existing line.
    ///
    /// ## Checks (in order, nothing is changed on failure)
    /// 1. a product is selected
    /// 2. quantity is at least 1
    /// 3. the profit percentage is a number
    /// 4. queued + requested units fit in the available stock
    pub fn add_item(&mut self, breakdown: &PriceBreakdown) -> CoreResult<()> {
        validate_selection(breakdown.product_id)?;
        validate_quantity(breakdown.quantity)?;
        let line = LineItem::from_breakdown(breakdown)?;

        validate_stock(
            &breakdown.product_name,
            breakdown.available_quantity,
            self.quantity_of(breakdown.product_id),
            breakdown.quantity,
        )?;

        match self
            .items
            .iter_mut()
            .find(|i| i.product_id == breakdown.product_id)
        {
            Some(existing) => existing.absorb(&line),
            None => self.items.push(line),
        }
        Ok(())
    }

    /// Removes the line at `index`; later lines shift up by one.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<LineItem> {
        if index >= self.items.len() {
            return Err(CoreError::ItemNotFound {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Drops every line and restarts the cart clock.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Units of `product_id` already queued.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|i| i.product_id == product_id)
            .map_or(0, |i| i.quantity)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the number of lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity over all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Table rows for the cart view, in cart order.
    pub fn rows(&self) -> Vec<CartRow> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| CartRow {
                index,
                product_name: item.product_name.clone(),
                quantity: item.quantity,
                profit_percentage: format_percent(item.profit_percentage.as_str()),
                total_price: format_primary(Some(item.total_price)),
                total_secondary_price: format_secondary(Some(item.total_secondary_price)),
            })
            .collect()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A rendered cart table row; `index` is the handle passed back to remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartRow {
    pub index: usize,
    pub product_name: String,
    pub quantity: u32,
    pub profit_percentage: String,
    pub total_price: String,
    pub total_secondary_price: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculate;
    use crate::types::ProductRef;

    const EPS: f64 = 1e-9;

    fn test_product(id: u32, price: f64, stock: u32) -> ProductRef {
        ProductRef {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price,
            secondary_price: price * 13_000.0,
            available_quantity: stock,
            retail_percent: Some(10),
            wholesale_percent: Some(5),
            is_active: true,
        }
    }

    fn breakdown(product: &ProductRef, profit: &str, qty: &str) -> PriceBreakdown {
        calculate(Some(product), &ProfitSelection::from(profit), qty)
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product(1, 4.0, 10);

        cart.add_item(&breakdown(&product, "25", "3")).unwrap();

        assert_eq!(cart.item_count(), 1);
        let line = &cart.items()[0];
        assert_eq!(line.quantity, 3);
        assert!((line.profit_price - 5.0).abs() < EPS);
        assert!((line.total_price - 4.0 * 1.25 * 3.0).abs() < EPS);
        assert!((line.total_secondary_price - 52_000.0 * 1.25 * 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_cart_add_same_product_merges() {
        let mut cart = Cart::new();
        let product = test_product(1, 4.0, 10);
        let first = breakdown(&product, "25", "2");
        let second = breakdown(&product, "25", "5");

        cart.add_item(&first).unwrap();
        cart.add_item(&second).unwrap();

        assert_eq!(cart.item_count(), 1);
        let line = &cart.items()[0];
        assert_eq!(line.quantity, 7);
        let expected = first.total_price.unwrap() + second.total_price.unwrap();
        assert!((line.total_price - expected).abs() < EPS);
        let expected_secondary =
            first.total_secondary_price.unwrap() + second.total_secondary_price.unwrap();
        assert!((line.total_secondary_price - expected_secondary).abs() < 1e-6);
    }

    #[test]
    fn test_merge_keeps_first_profit_selection() {
        let mut cart = Cart::new();
        let product = test_product(1, 10.0, 10);

        cart.add_item(&breakdown(&product, "10", "1")).unwrap();
        cart.add_item(&breakdown(&product, "20", "1")).unwrap();

        let line = &cart.items()[0];
        assert_eq!(line.profit_percentage.as_str(), "10");
        assert!((line.profit_price - 11.0).abs() < EPS);
        // 11 + 12: totals are purely additive
        assert!((line.total_price - 23.0).abs() < EPS);
    }

    #[test]
    fn test_add_rejects_missing_selection() {
        let mut cart = Cart::new();
        let b = calculate(None, &ProfitSelection::from("10"), "1");

        assert!(matches!(cart.add_item(&b), Err(CoreError::MissingSelection)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 1.0, 10);

        for raw in ["0", "-2", "", "abc"] {
            let result = cart.add_item(&breakdown(&product, "10", raw));
            assert!(matches!(result, Err(CoreError::InvalidQuantity)));
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_missing_profit() {
        let mut cart = Cart::new();
        let product = test_product(1, 1.0, 10);

        let result = cart.add_item(&breakdown(&product, "", "1"));
        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_profit_that_overflows_prices() {
        let mut cart = Cart::new();
        let product = test_product(1, 1.0, 10);

        let result = cart.add_item(&breakdown(&product, "1e308", "1"));
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_over_stock_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        let product = test_product(1, 2.0, 5);

        cart.add_item(&breakdown(&product, "10", "3")).unwrap();
        let before = cart.items().to_vec();

        let result = cart.add_item(&breakdown(&product, "10", "3"));
        assert!(matches!(
            result,
            Err(CoreError::InsufficientStock {
                available: 5,
                in_cart: 3,
                requested: 3,
                ..
            })
        ));
        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn test_add_exactly_to_stock_is_allowed() {
        let mut cart = Cart::new();
        let product = test_product(1, 2.0, 5);

        cart.add_item(&breakdown(&product, "10", "2")).unwrap();
        cart.add_item(&breakdown(&product, "10", "3")).unwrap();
        assert_eq!(cart.quantity_of(product.id), 5);
    }

    #[test]
    fn test_remove_item_keeps_order() {
        let mut cart = Cart::new();
        for id in 1..=4 {
            cart.add_item(&breakdown(&test_product(id, 1.0, 10), "10", "1"))
                .unwrap();
        }

        let removed = cart.remove_item(1).unwrap();
        assert_eq!(removed.product_id, ProductId::new(2));

        let ids: Vec<u32> = cart.items().iter().map(|i| i.product_id.value()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut cart = Cart::new();
        cart.add_item(&breakdown(&test_product(1, 1.0, 10), "10", "1"))
            .unwrap();

        assert!(matches!(
            cart.remove_item(1),
            Err(CoreError::ItemNotFound { index: 1, len: 1 })
        ));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_rows() {
        let mut cart = Cart::new();
        cart.add_item(&breakdown(&test_product(1, 1.0, 10), "10", "2"))
            .unwrap();

        let rows = cart.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].product_name, "Product 1");
        assert_eq!(rows[0].profit_percentage, "10%");
        assert_eq!(rows[0].total_price, "2.20");
        assert_eq!(rows[0].total_secondary_price, "28,600");
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&breakdown(&test_product(1, 1.0, 10), "10", "2"))
            .unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_line_item_wire_names() {
        let line = LineItem::from_breakdown(&breakdown(&test_product(1, 1.0, 10), "10", "1"))
            .unwrap();
        let json = serde_json::to_value(&line).unwrap();

        for key in [
            "productId",
            "productName",
            "quantity",
            "profitPercentage",
            "originalPrice",
            "sypPrice",
            "profitPrice",
            "sypProfitPrice",
            "totalPrice",
            "totalSypPrice",
            "availableQuantity",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["profitPercentage"], "10");
    }
}
