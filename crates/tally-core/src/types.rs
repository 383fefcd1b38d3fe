//! # Domain Types
//!
//! Core domain types shared by the calculator, the cart and the app layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    ProductRef       │   │  ProfitSelection│   │    SaleMode     │   │
//! │  │  ─────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (ProductId)     │   │  raw text       │   │  Retail         │   │
//! │  │  name               │   │  "15" → 15.0    │   │  Wholesale      │   │
//! │  │  price / secondary  │   │  ""   → None    │   └─────────────────┘   │
//! │  │  available_quantity │   └─────────────────┘                         │
//! │  │  retail / wholesale │                                               │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product records are read-only here: the page-rendering side owns them
//! and prices are already converted into both currencies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog identifier of a product.
///
/// `0` is reserved as the "nothing selected" sentinel; real products always
/// carry a positive id.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    /// The sentinel for "no product selected".
    pub const NONE: ProductId = ProductId(0);

    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// True for the "no product selected" sentinel.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product Reference
// =============================================================================

fn default_active() -> bool {
    true
}

/// A product offered by the page, with prices precomputed in both currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductRef {
    pub id: ProductId,

    /// Display name, also the value typed into the product search box.
    pub name: String,

    /// Unit price in the primary currency.
    pub price: f64,

    /// Unit price in the secondary currency.
    pub secondary_price: f64,

    /// Units currently in stock.
    pub available_quantity: u32,

    /// Suggested profit percentage for retail sales.
    #[serde(default)]
    pub retail_percent: Option<u32>,

    /// Suggested profit percentage for wholesale sales.
    #[serde(default)]
    pub wholesale_percent: Option<u32>,

    /// Discontinued products stay in the catalog but cannot be selected.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl ProductRef {
    /// Suggested profit percentage for the given sale mode.
    pub fn suggested_percent(&self, mode: SaleMode) -> Option<u32> {
        match mode {
            SaleMode::Retail => self.retail_percent,
            SaleMode::Wholesale => self.wholesale_percent,
        }
    }
}

// =============================================================================
// Profit Selection
// =============================================================================

/// The profit percentage exactly as it was selected.
///
/// The raw text travels unchanged into the cart payload (the backend parses
/// it again), so it is kept as text and only interpreted on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfitSelection(String);

impl ProfitSelection {
    pub fn new(raw: impl Into<String>) -> Self {
        ProfitSelection(raw.into())
    }

    /// Nothing chosen yet.
    pub fn none() -> Self {
        ProfitSelection(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric percentage, if the selection is a finite number.
    pub fn percent(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
    }

    /// Price multiplier `1 + p / 100`.
    pub fn multiplier(&self) -> Option<f64> {
        self.percent().map(|p| 1.0 + p / 100.0)
    }
}

impl fmt::Display for ProfitSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfitSelection {
    fn from(raw: &str) -> Self {
        ProfitSelection::new(raw)
    }
}

// =============================================================================
// Sale Mode
// =============================================================================

/// Retail or wholesale sale.
///
/// Only decides which suggested percentage is highlighted; the totals are
/// always driven by the percentage the cashier picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SaleMode {
    #[default]
    Retail,
    Wholesale,
}

impl FromStr for SaleMode {
    type Err = ValidationError;

    /// Accepts the mode names and the select codes used by the sale form
    /// (`"0"` retail, `"1"` wholesale).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retail" | "0" => Ok(SaleMode::Retail),
            "wholesale" | "1" => Ok(SaleMode::Wholesale),
            _ => Err(ValidationError::InvalidFormat {
                field: "sale mode".to_string(),
                reason: format!("unknown mode '{}'", s),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_sentinel() {
        assert!(ProductId::NONE.is_none());
        assert!(ProductId::default().is_none());
        assert!(!ProductId::new(12).is_none());
        assert_eq!(ProductId::new(12).to_string(), "12");
    }

    #[test]
    fn test_profit_selection_percent() {
        assert_eq!(ProfitSelection::from("15").percent(), Some(15.0));
        assert_eq!(ProfitSelection::from(" 7.5 ").percent(), Some(7.5));
        assert_eq!(ProfitSelection::none().percent(), None);
        assert_eq!(ProfitSelection::from("abc").percent(), None);
        assert_eq!(ProfitSelection::from("NaN").percent(), None);
        assert_eq!(ProfitSelection::from("inf").percent(), None);
    }

    #[test]
    fn test_profit_selection_multiplier() {
        let m = ProfitSelection::from("20").multiplier().unwrap();
        assert!((m - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_profit_selection_serializes_raw_text() {
        let json = serde_json::to_string(&ProfitSelection::from("10")).unwrap();
        assert_eq!(json, "\"10\"");
        let back: ProfitSelection = serde_json::from_str("\"7.5\"").unwrap();
        assert_eq!(back.as_str(), "7.5");
    }

    #[test]
    fn test_product_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ProductId::new(12)).unwrap(), "12");
        let id: ProductId = serde_json::from_str("12").unwrap();
        assert_eq!(id, ProductId::new(12));
    }

    #[test]
    fn test_sale_mode_parsing() {
        assert_eq!("retail".parse::<SaleMode>().unwrap(), SaleMode::Retail);
        assert_eq!("0".parse::<SaleMode>().unwrap(), SaleMode::Retail);
        assert_eq!("Wholesale".parse::<SaleMode>().unwrap(), SaleMode::Wholesale);
        assert_eq!("1".parse::<SaleMode>().unwrap(), SaleMode::Wholesale);
        assert!("bulk".parse::<SaleMode>().is_err());
        assert_eq!(SaleMode::default(), SaleMode::Retail);
    }

    #[test]
    fn test_product_ref_deserializes_with_defaults() {
        let json = r#"{
            "id": 3,
            "name": "Olive Oil 1L",
            "price": 4.5,
            "secondaryPrice": 58500,
            "availableQuantity": 12
        }"#;
        let product: ProductRef = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert!(product.is_active);
        assert_eq!(product.retail_percent, None);
        assert_eq!(product.suggested_percent(SaleMode::Wholesale), None);
    }
}
