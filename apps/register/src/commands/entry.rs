//! # Entry Form Commands
//!
//! Every change to the entry form answers with fresh prices, the way the
//! widget recalculates on each keystroke.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product  [Rice 1kg        ]   Stock: 40                                │
//! │  Mode     (•) Retail  ( ) Wholesale                                     │
//! │  Profit   [15 % (suggested)]   [8 %]                                    │
//! │  Quantity [3]                                                           │
//! │  ───────────────────────────────────────────────────────────────────    │
//! │  Unit 1.20 / 15,600   Profit unit 1.38 / 17,940   Total 4.14 / 53,820  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tally_core::{EntryForm, PriceBreakdown, PriceDisplay, SaleMode};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// Prices for the current entry form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricesResponse {
    pub form: EntryForm,
    pub breakdown: PriceBreakdown,
    pub display: PriceDisplay,
}

fn prices(session: &SessionState) -> PricesResponse {
    session.with_controller(|c| PricesResponse {
        form: c.form().clone(),
        breakdown: c.calculate(),
        display: c.price_display(),
    })
}

/// Sets the typed product name.
///
/// A name that matches no active product leaves the selection empty; the
/// prices then read zero.
pub fn select_product(session: &mut SessionState, name: &str) -> PricesResponse {
    debug!(name = %name, "select_product command");
    session.with_controller_mut(|c| c.select_product(name));
    prices(session)
}

/// Sets the raw quantity text.
pub fn set_quantity(session: &mut SessionState, quantity: &str) -> PricesResponse {
    debug!(quantity = %quantity, "set_quantity command");
    session.with_controller_mut(|c| c.set_quantity(quantity));
    prices(session)
}

/// Sets the selected profit percentage.
pub fn set_profit(session: &mut SessionState, profit: &str) -> PricesResponse {
    debug!(profit = %profit, "set_profit command");
    session.with_controller_mut(|c| c.set_profit(profit));
    prices(session)
}

/// Switches between retail and wholesale.
///
/// Accepts `retail`/`wholesale` or the form codes `0`/`1`.
pub fn set_sale_mode(session: &mut SessionState, mode: &str) -> Result<PricesResponse, ApiError> {
    debug!(mode = %mode, "set_sale_mode command");
    let mode: SaleMode = mode
        .parse()
        .map_err(|e: tally_core::ValidationError| ApiError::validation(e.to_string()))?;
    session.with_controller_mut(|c| c.set_sale_mode(mode));
    Ok(prices(session))
}

/// Returns prices without changing anything.
pub fn get_prices(session: &SessionState) -> PricesResponse {
    debug!("get_prices command");
    prices(session)
}
