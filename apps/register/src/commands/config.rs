//! # Config Commands
//!
//! Retrieval of the register configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current register configuration.
///
/// ## When Used
/// - Page startup (currency markers, store name)
/// - Showing the cash rounding rule next to the payable amount
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
