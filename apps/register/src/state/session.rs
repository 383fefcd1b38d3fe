//! # Session State
//!
//! The one cart controller of a running register.
//!
//! Commands are handled strictly one at a time, in the order the lines
//! arrive, so the controller is owned outright and needs no lock.

use tally_core::{CartController, Catalog, PayableRounding};

/// Owns the cart controller for the session.
#[derive(Debug)]
pub struct SessionState {
    controller: CartController,
}

impl SessionState {
    pub fn new(catalog: Catalog, rounding: PayableRounding) -> Self {
        SessionState {
            controller: CartController::new(catalog, rounding),
        }
    }

    /// Executes a function with read access to the controller.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = session.with_controller(|c| c.summary());
    /// ```
    pub fn with_controller<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartController) -> R,
    {
        f(&self.controller)
    }

    /// Executes a function with write access to the controller.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_controller_mut(|c| c.remove_item(2))?;
    /// ```
    pub fn with_controller_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut CartController) -> R,
    {
        f(&mut self.controller)
    }
}
