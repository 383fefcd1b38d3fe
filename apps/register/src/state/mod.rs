//! # State Module
//!
//! Register state, split by concern like the command layer expects it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      SessionState        │        │       ConfigState        │      │
//! │  │                          │        │                          │      │
//! │  │  CartController          │        │  store name              │      │
//! │  │  (catalog, entry form,   │        │  currency markers        │      │
//! │  │   cart, rounding)        │        │  denomination/breakpoint │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  SessionState: mutated by commands, one at a time                      │
//! │  ConfigState:  read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
mod config;
mod session;

pub use config::{ConfigError, ConfigState};
pub use session::SessionState;
