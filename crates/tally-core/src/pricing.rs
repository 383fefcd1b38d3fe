//! # Price Calculator
//!
//! Derives unit, profit-inclusive and total prices for whatever is currently
//! in the entry form. Nothing here touches the cart.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  profit_price            = price            × (1 + p / 100)            │
//! │  secondary_profit_price  = secondary_price  × (1 + p / 100)            │
//! │  total_price             = profit_price           × quantity           │
//! │  total_secondary_price   = secondary_profit_price × quantity           │
//! │                                                                         │
//! │  p missing or not a number → every derived price is None               │
//! │  no product selected       → id 0, all prices 0                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::format::{format_primary, format_secondary};
use crate::types::{ProductId, ProductRef, ProfitSelection, SaleMode};
use crate::validation::parse_quantity;
use crate::{PLACEHOLDER, SUGGESTED_SUFFIX};

/// Prices for the current selection, quantity and profit percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceBreakdown {
    /// `ProductId::NONE` when nothing matches the typed name.
    pub product_id: ProductId,
    pub product_name: String,

    /// Normalized quantity; 0 when the typed value is not a positive integer.
    pub quantity: u32,

    pub profit_percentage: ProfitSelection,

    pub original_price: f64,
    pub secondary_price: f64,

    pub profit_price: Option<f64>,
    pub secondary_profit_price: Option<f64>,
    pub total_price: Option<f64>,
    pub total_secondary_price: Option<f64>,

    pub available_quantity: u32,
    pub retail_percent: Option<u32>,
    pub wholesale_percent: Option<u32>,
}

/// Computes the breakdown for the given entry values.
///
/// ## Example
/// ```rust
/// use tally_core::pricing::calculate;
/// use tally_core::{ProductId, ProductRef, ProfitSelection};
///
/// let flour = ProductRef {
///     id: ProductId::new(9),
///     name: "Flour 5kg".to_string(),
///     price: 10.0,
///     secondary_price: 130_000.0,
///     available_quantity: 20,
///     retail_percent: Some(10),
///     wholesale_percent: Some(5),
///     is_active: true,
/// };
///
/// let b = calculate(Some(&flour), &ProfitSelection::from("10"), "3");
/// assert!((b.total_price.unwrap() - 33.0).abs() < 1e-9);
/// assert!((b.total_secondary_price.unwrap() - 429_000.0).abs() < 1e-6);
/// ```
pub fn calculate(
    product: Option<&ProductRef>,
    profit: &ProfitSelection,
    quantity_raw: &str,
) -> PriceBreakdown {
    let quantity = parse_quantity(quantity_raw);
    let multiplier = profit.multiplier();

    let (product_id, product_name, original_price, secondary_price, available_quantity) =
        match product {
            Some(p) => (
                p.id,
                p.name.clone(),
                p.price,
                p.secondary_price,
                p.available_quantity,
            ),
            None => (ProductId::NONE, String::new(), 0.0, 0.0, 0),
        };

    let profit_price = multiplier.map(|m| original_price * m);
    let secondary_profit_price = multiplier.map(|m| secondary_price * m);

    PriceBreakdown {
        product_id,
        product_name,
        quantity,
        profit_percentage: profit.clone(),
        original_price,
        secondary_price,
        profit_price,
        secondary_profit_price,
        total_price: profit_price.map(|p| p * f64::from(quantity)),
        total_secondary_price: secondary_profit_price.map(|p| p * f64::from(quantity)),
        available_quantity,
        retail_percent: product.and_then(|p| p.retail_percent),
        wholesale_percent: product.and_then(|p| p.wholesale_percent),
    }
}

impl PriceBreakdown {
    /// Display strings for the entry panel.
    pub fn display(&self, mode: SaleMode) -> PriceDisplay {
        PriceDisplay {
            original_price: format_primary(Some(self.original_price)),
            secondary_price: format_secondary(Some(self.secondary_price)),
            profit_price: format_primary(self.profit_price),
            secondary_profit_price: format_secondary(self.secondary_profit_price),
            total_price: format_primary(self.total_price),
            total_secondary_price: format_secondary(self.total_secondary_price),
            available_quantity: self.available_quantity.to_string(),
            retail_label: suggested_label(self.retail_percent, mode == SaleMode::Retail),
            wholesale_label: suggested_label(self.wholesale_percent, mode == SaleMode::Wholesale),
        }
    }
}

/// Formatted values shown beside the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceDisplay {
    pub original_price: String,
    pub secondary_price: String,
    pub profit_price: String,
    pub secondary_profit_price: String,
    pub total_price: String,
    pub total_secondary_price: String,
    /// Stock mirrored next to the quantity box.
    pub available_quantity: String,
    pub retail_label: String,
    pub wholesale_label: String,
}

fn suggested_label(percent: Option<u32>, suggested: bool) -> String {
    let value = percent.map_or_else(|| PLACEHOLDER.to_string(), |p| p.to_string());
    if suggested {
        format!("{} % {}", value, SUGGESTED_SUFFIX)
    } else {
        format!("{} %", value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
