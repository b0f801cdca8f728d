//! Unified error types for the storefront client.
//!
//! Every failure that reaches a view-state holder is one of these variants. Holders only
//! keep the rendered message, so the variants exist for logging and for callers that
//! want to branch before the message is surfaced.

use thiserror::Error;

/// Errors produced by configuration, the remote client, and checkout validation.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Request failed: {status} - {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Status reason or backend message
        message: String,
    },

    /// The backend answered 2xx but without a usable body
    #[error("Empty response from server while trying to {operation}")]
    EmptyBody {
        /// The operation that was attempted
        operation: &'static str,
    },

    /// A response body did not have the expected JSON shape
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// Purchase quantity outside `[1, stock]`
    #[error("Invalid quantity {requested}: must be between 1 and {stock}")]
    InvalidQuantity {
        /// Quantity the user asked for
        requested: i64,
        /// Stock available at the time of the request
        stock: i64,
    },

    /// The product has no stock left
    #[error("Product {product_id} is out of stock")]
    OutOfStock {
        /// Product that was requested
        product_id: i64,
    },

    /// A price computation overflowed or produced a negative amount
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// Offending amount, as far as it could be computed
        amount: i64,
    },

    /// A refresh failure already recorded in view state, re-raised by a caller
    #[error("{message}")]
    Backend {
        /// Message stored in the view state
        message: String,
    },

    /// A category filter id that is neither 0 (all) nor a known game
    #[error("Unknown category id {id}")]
    UnknownCategory {
        /// Requested filter id
        id: i64,
    },

    /// No product with this id is in the current catalog
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// Requested product id
        id: i64,
    },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
