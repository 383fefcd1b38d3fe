//! # Cart Summary & Payable Rounding
//!
//! Totals under the cart table, plus the cash-friendly amount the customer
//! actually hands over.
//!
//! ## Payable Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  step = 500, breakpoint = 250                                           │
//! │                                                                         │
//! │  total 1240 → remainder 240 <  250 → round down → 1000                 │
//! │  total 1250 → remainder 250 >= 250 → round up   → 1500                 │
//! │  total 1260 → remainder 260 >= 250 → round up   → 1500                 │
//! │                                                                         │
//! │  Exact totals carry profit fractions no note can pay; the payable      │
//! │  amount is what goes into the till.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::ValidationError;
use crate::format::{format_primary, format_secondary};
use crate::{DEFAULT_BREAKPOINT, DEFAULT_DENOMINATION};

// =============================================================================
// Cart Summary
// =============================================================================

/// Totals over every line currently in the cart.
///
/// Always recomputed from scratch; carts hold tens of lines at most.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub total_price: f64,
    pub total_secondary_price: f64,
    pub total_profit: f64,
    pub total_secondary_profit: f64,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        let items = cart.items();
        CartSummary {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_price: items.iter().map(|i| i.total_price).sum(),
            total_secondary_price: items.iter().map(|i| i.total_secondary_price).sum(),
            total_profit: items.iter().map(|i| i.profit()).sum(),
            total_secondary_profit: items.iter().map(|i| i.secondary_profit()).sum(),
        }
    }
}

impl CartSummary {
    /// Display strings for the totals row.
    pub fn display(&self) -> SummaryDisplay {
        SummaryDisplay {
            total_price: format_primary(Some(self.total_price)),
            total_secondary_price: format_secondary(Some(self.total_secondary_price)),
            total_profit: format_primary(Some(self.total_profit)),
            total_secondary_profit: format_secondary(Some(self.total_secondary_profit)),
        }
    }
}

/// Formatted cart totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SummaryDisplay {
    pub total_price: String,
    pub total_secondary_price: String,
    pub total_profit: String,
    pub total_secondary_profit: String,
}

// =============================================================================
// Payable Rounding
// =============================================================================

/// Rounds secondary-currency totals to the nearest cash denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PayableRounding {
    step: i64,
    breakpoint: i64,
}

impl PayableRounding {
    /// ## Rules
    /// - `step` must be positive
    /// - `breakpoint` must lie in `1..=step`
    pub fn new(step: i64, breakpoint: i64) -> Result<Self, ValidationError> {
        if step <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "denomination".to_string(),
            });
        }
        if breakpoint <= 0 || breakpoint > step {
            return Err(ValidationError::OutOfRange {
                field: "breakpoint".to_string(),
                min: 1,
                max: step,
            });
        }
        Ok(PayableRounding { step, breakpoint })
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn breakpoint(&self) -> i64 {
        self.breakpoint
    }

    /// Rounds `total` to a multiple of the step.
    ///
    /// Non-finite totals pay nothing.
    pub fn round(&self, total: f64) -> i64 {
        round_to_step(total, self.step as f64, self.breakpoint as f64)
    }
}

impl Default for PayableRounding {
    fn default() -> Self {
        PayableRounding {
            step: DEFAULT_DENOMINATION,
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

/// Rounds `total` with the default 500 step and the given breakpoint.
///
/// ## Example
/// ```rust
/// use tally_core::summary::approximate;
///
/// assert_eq!(approximate(1240.0, 250.0), 1000);
/// assert_eq!(approximate(1260.0, 250.0), 1500);
/// assert_eq!(approximate(1250.0, 250.0), 1500);
/// ```
pub fn approximate(total: f64, breakpoint: f64) -> i64 {
    round_to_step(total, DEFAULT_DENOMINATION as f64, breakpoint)
}

fn round_to_step(total: f64, step: f64, breakpoint: f64) -> i64 {
    if !total.is_finite() {
        return 0;
    }

    // Round to whole units first so the remainder matches the shown total
    let total = total.round();
    let remainder = total.rem_euclid(step);
    let base = total - remainder;
    let rounded = if remainder >= breakpoint { base + step } else { base };
    rounded.round() as i64
}

// =============================================================================
// Unit Tests
// =============================================================================
