//! # Product Commands
//!
//! Names the page offers in its product picker.

use tally_core::ProductRef;
use tracing::debug;

use crate::state::SessionState;

/// Lists every product that can be selected, in catalog order.
pub fn list_products(session: &SessionState) -> Vec<ProductRef> {
    debug!("list_products command");
    session.with_controller(|c| c.catalog().active().cloned().collect())
}
