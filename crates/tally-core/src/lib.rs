//! # tally-core: Pure Business Logic for the Tally cart widget
//!
//! Everything the point-of-sale cart widget computes lives here as plain
//! functions over owned values. The register app only forwards commands.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Page script / register shell (stdin JSON)           │   │
//! │  │   select product ──► quantity / profit ──► add ──► submit       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ pricing  │ │   cart   │ │ summary  │ │   submission     │  │   │
//! │  │   │Breakdown │ │ LineItem │ │ Totals   │ │ cart_data JSON   │  │   │
//! │  │   │ Display  │ │  merge   │ │ Payable  │ │ payable_price    │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │          controller: CartController owns all of the above       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • SINGLE-THREADED • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog records, product ids, profit selections, sale mode
//! - [`catalog`] - Product lookup by display name
//! - [`pricing`] - Unit, profit and total prices for the current entry
//! - [`cart`] - Line items, merge-on-add, remove by position
//! - [`summary`] - Cart totals and cash-payable rounding
//! - [`submission`] - Serialized form fields handed to the backend
//! - [`controller`] - Single owner of catalog, entry form and cart
//! - [`format`] - Two-currency display formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::summary::approximate;
//!
//! // Secondary totals are rounded to the nearest 500 for cash payment
//! assert_eq!(approximate(1240.0, 250.0), 1000);
//! assert_eq!(approximate(1250.0, 250.0), 1500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod format;
pub mod pricing;
pub mod submission;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartRow, LineItem};
pub use catalog::Catalog;
pub use controller::{CartController, EntryForm};
pub use error::{CatalogError, CoreError, CoreResult, ValidationError};
pub use pricing::{PriceBreakdown, PriceDisplay};
pub use submission::SubmissionForm;
pub use summary::{CartSummary, PayableRounding, SummaryDisplay};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest cash note accepted at the counter, in secondary currency units.
pub const DEFAULT_DENOMINATION: i64 = 500;

/// Remainder at which a payable amount rounds up instead of down.
pub const DEFAULT_BREAKPOINT: i64 = DEFAULT_DENOMINATION / 2;

/// Shown in place of any amount that is not a finite number.
pub const PLACEHOLDER: &str = "--";

/// Label suffix for the suggested profit percentage of the current sale mode.
pub const SUGGESTED_SUFFIX: &str = "(suggested)";
