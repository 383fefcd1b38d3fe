//! # API Error Type
//!
//! Unified error type for register commands, plus the startup error.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tally POS                              │
//! │                                                                         │
//! │  {"command":"add_to_cart"}                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  → Result<T, ApiError>                         │  │
//! │  │         │                                                        │  │
//! │  │  CoreError::InsufficientStock ──► ApiError { INSUFFICIENT_STOCK }│  │
//! │  │  CoreError::EmptyCart         ──► ApiError { EMPTY_CART }        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  {"ok":false,"error":{"code":"INSUFFICIENT_STOCK","message":"..."}}    │
//! │                                                                         │
//! │  The page shows `message` as a blocking alert.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tally_core::{CatalogError, CoreError};

use crate::state::ConfigError;

/// API error returned from register commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "MISSING_SELECTION",
///   "message": "Please select a product first"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Add-to-cart without a selected product
    MissingSelection,

    /// Quantity zero, negative or not a number
    InvalidQuantity,

    /// Queued + requested quantity exceeds stock
    InsufficientStock,

    /// Submit with nothing in the cart
    EmptyCart,

    /// No cart line / product for the given handle
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Request line could not be understood
    BadRequest,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingSelection => {
                ApiError::new(ErrorCode::MissingSelection, "Please select a product first")
            }
            CoreError::InvalidQuantity => ApiError::new(
                ErrorCode::InvalidQuantity,
                "Quantity must be a whole number of at least 1",
            ),
            CoreError::InsufficientStock {
                product,
                available,
                in_cart,
                requested,
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Cannot add more than the available quantity of {}: {} available, {} already in cart, {} requested",
                    product, available, in_cart, requested
                ),
            ),
            CoreError::EmptyCart => ApiError::new(
                ErrorCode::EmptyCart,
                "Please add items to the invoice before selling",
            ),
            CoreError::ItemNotFound { index, len } => ApiError::new(
                ErrorCode::NotFound,
                format!("Cart item not found: {} (cart has {} items)", index, len),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::Serialization(e) => {
                tracing::error!("Cart serialization failed: {}", e);
                ApiError::internal("Failed to prepare the cart for submission")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Error
// =============================================================================

/// Errors that stop the register before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not load catalog from {path}: {source}")]
    Catalog {
        path: String,
        #[source]
        source: CatalogError,
    },

    #[error("Could not determine app data directory")]
    NoDataDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write response: {0}")]
    Encode(#[from] serde_json::Error),
}
