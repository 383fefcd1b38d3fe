//! # Commands Module
//!
//! Every command the page (or any other driver) can send to the register.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (request type, dispatch)
//! ├── entry.rs    ◄─── Entry form: product, quantity, profit, sale mode
//! ├── product.rs  ◄─── Selectable products
//! ├── cart.rs     ◄─── Cart view, add, remove
//! ├── submit.rs   ◄─── Cart submission
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin:  {"command":"set_quantity","quantity":"3"}                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  serde ──► Request::SetQuantity { quantity: "3" }                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch() ──► entry::set_quantity(session, "3")                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout: {"ok":true,"data":{"breakdown":{...},"display":{...}}}         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod config;
pub mod entry;
pub mod product;
pub mod submit;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// A single request line.
///
/// Free-text inputs (`quantity`, `profit`, `mode`) accept either a JSON
/// string or a number; they are handled exactly as typed text.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    SelectProduct { name: String },
    SetQuantity { quantity: Value },
    SetProfit { profit: Value },
    SetSaleMode { mode: Value },
    GetPrices,
    ListProducts,
    GetCart,
    AddToCart,
    RemoveFromCart { index: usize },
    SubmitCart,
    GetConfig,
}

impl Request {
    /// Command name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Request::SelectProduct { .. } => "select_product",
            Request::SetQuantity { .. } => "set_quantity",
            Request::SetProfit { .. } => "set_profit",
            Request::SetSaleMode { .. } => "set_sale_mode",
            Request::GetPrices => "get_prices",
            Request::ListProducts => "list_products",
            Request::GetCart => "get_cart",
            Request::AddToCart => "add_to_cart",
            Request::RemoveFromCart { .. } => "remove_from_cart",
            Request::SubmitCart => "submit_cart",
            Request::GetConfig => "get_config",
        }
    }
}

/// One response line.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn ok(data: Value) -> Self {
        Response {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: ApiError) -> Self {
        Response {
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Runs `request` against the session and returns its JSON result.
pub fn dispatch(
    session: &mut SessionState,
    config: &ConfigState,
    request: Request,
) -> Result<Value, ApiError> {
    match request {
        Request::SelectProduct { name } => to_json(entry::select_product(session, &name)),
        Request::SetQuantity { quantity } => {
            to_json(entry::set_quantity(session, &input_text(&quantity)?))
        }
        Request::SetProfit { profit } => to_json(entry::set_profit(session, &input_text(&profit)?)),
        Request::SetSaleMode { mode } => to_json(entry::set_sale_mode(session, &input_text(&mode)?)?),
        Request::GetPrices => to_json(entry::get_prices(session)),
        Request::ListProducts => to_json(product::list_products(session)),
        Request::GetCart => to_json(cart::get_cart(session, config)),
        Request::AddToCart => to_json(cart::add_to_cart(session, config)?),
        Request::RemoveFromCart { index } => to_json(cart::remove_from_cart(session, config, index)?),
        Request::SubmitCart => to_json(submit::submit_cart(session)?),
        Request::GetConfig => to_json(self::config::get_config(config)),
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| {
        tracing::error!("Failed to encode response: {}", e);
        ApiError::internal("Failed to encode response")
    })
}

/// Text of a free-text input sent as a string or a number.
fn input_text(value: &Value) -> Result<String, ApiError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(ApiError::bad_request(format!(
            "Expected text or a number, got {}",
            other
        ))),
    }
}
