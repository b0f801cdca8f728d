//! Transaction entity - A completed purchase as reported by the backend.
//!
//! `product_id` is not checked against the catalog; the product may have been removed
//! since. `total_price` is whatever the backend stored and is never recomputed.
use chrono::NaiveDateTime;
use serde::Serialize;

/// Purchase record
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Unique identifier from the backend
    pub id: i64,
    /// Product that was bought
    pub product_id: i64,
    /// Units bought
    pub quantity: i64,
    /// Amount charged in whole Rupiah
    pub total_price: i64,
    /// Local wall-clock time of the purchase
    pub timestamp: NaiveDateTime,
}
