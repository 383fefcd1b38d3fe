//! # Cart Controller
//!
//! The single owner of the widget state. Every interaction arrives as one
//! command method and runs to completion before the next one.
//!
//! ## Interaction Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartController                                       │
//! │                                                                         │
//! │  select_product / set_quantity / set_profit / set_sale_mode            │
//! │        │   (entry form only, cart untouched)                            │
//! │        ▼                                                                │
//! │  calculate() ──► PriceBreakdown ──► price_display()                     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  add_item() ──► Cart::add_item ──► entry form reset                     │
//! │  remove_item(i)                                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  summary() / rows() / payable()      (recomputed every time)            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  submit() ──► SubmissionForm ──► cart discarded                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartRow, LineItem};
use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::pricing::{calculate, PriceBreakdown, PriceDisplay};
use crate::submission::SubmissionForm;
use crate::summary::{CartSummary, PayableRounding};
use crate::types::{ProductRef, ProfitSelection, SaleMode};

/// What is currently typed or selected in the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EntryForm {
    pub product_name: String,
    /// Raw quantity text; never rewritten by the controller.
    pub quantity: String,
    pub profit: ProfitSelection,
    pub sale_mode: SaleMode,
}

impl Default for EntryForm {
    fn default() -> Self {
        EntryForm {
            product_name: String::new(),
            quantity: "1".to_string(),
            profit: ProfitSelection::none(),
            sale_mode: SaleMode::Retail,
        }
    }
}

/// Owns the catalog, the entry form and the cart for one sale session.
#[derive(Debug, Clone)]
pub struct CartController {
    catalog: Catalog,
    form: EntryForm,
    cart: Cart,
    rounding: PayableRounding,
}

impl CartController {
    pub fn new(catalog: Catalog, rounding: PayableRounding) -> Self {
        CartController {
            catalog,
            form: EntryForm::default(),
            cart: Cart::new(),
            rounding,
        }
    }

    // -------------------------------------------------------------------------
    // Entry form
    // -------------------------------------------------------------------------

    pub fn select_product(&mut self, name: &str) {
        self.form.product_name = name.to_string();
    }

    pub fn set_quantity(&mut self, raw: &str) {
        self.form.quantity = raw.to_string();
    }

    pub fn set_profit(&mut self, raw: &str) {
        self.form.profit = ProfitSelection::new(raw);
    }

    pub fn set_sale_mode(&mut self, mode: SaleMode) {
        self.form.sale_mode = mode;
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    /// The active catalog product matching the typed name, if any.
    pub fn selected_product(&self) -> Option<&ProductRef> {
        self.catalog.find_by_name(&self.form.product_name)
    }

    /// Prices for the current entry form. Does not touch the cart.
    pub fn calculate(&self) -> PriceBreakdown {
        calculate(
            self.selected_product(),
            &self.form.profit,
            &self.form.quantity,
        )
    }

    pub fn price_display(&self) -> PriceDisplay {
        self.calculate().display(self.form.sale_mode)
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Adds the current entry to the cart.
    ///
    /// The entry form is reset whether or not the add succeeds.
    pub fn add_item(&mut self) -> CoreResult<&Cart> {
        let breakdown = self.calculate();
        self.form = EntryForm::default();
        self.cart.add_item(&breakdown)?;
        Ok(&self.cart)
    }

    pub fn remove_item(&mut self, index: usize) -> CoreResult<LineItem> {
        self.cart.remove_item(index)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rounding(&self) -> PayableRounding {
        self.rounding
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from(&self.cart)
    }

    /// Cash-payable secondary amount for the current cart.
    pub fn payable(&self) -> i64 {
        self.rounding.round(self.summary().total_secondary_price)
    }

    pub fn rows(&self) -> Vec<CartRow> {
        self.cart.rows()
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Serializes the cart for the sale form and starts a fresh sale.
    ///
    /// On failure (empty cart) nothing changes.
    pub fn submit(&mut self) -> CoreResult<SubmissionForm> {
        let form = SubmissionForm::build(&self.cart, &self.rounding)?;
        self.cart.clear();
        self.form = EntryForm::default();
        Ok(form)
    }
}
