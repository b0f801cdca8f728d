//! Transaction normalization, history ordering and receipts.
//!
//! Timestamps arrive as `yyyy-MM-dd HH:mm:ss` local-time strings without a zone. A value
//! that fails to parse is replaced by the current time so one bad record never hides
//! the rest of the history.

use super::product;
use crate::{
    api::ApiTransaction,
    entities::{Product, Transaction},
};
use chrono::{Local, NaiveDateTime};
use tracing::warn;

/// Wire format of `tanggal`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a backend timestamp, substituting the current local time on failure.
pub fn parse_timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).unwrap_or_else(|e| {
        warn!("Unparseable transaction timestamp {:?} ({}), using now", raw, e);
        Local::now().naive_local()
    })
}

/// Converts one raw record into a transaction.
pub fn normalize(raw: ApiTransaction) -> Transaction {
    Transaction {
        id: raw.id,
        product_id: raw.product_id,
        quantity: raw.qty,
        total_price: raw.total_harga,
        timestamp: parse_timestamp(&raw.tanggal),
    }
}

/// Converts a whole `transaksi.php` payload, preserving fetch order.
pub fn normalize_all(raw: Vec<ApiTransaction>) -> Vec<Transaction> {
    raw.into_iter().map(normalize).collect()
}

/// History order: the fetch order reversed, most recent insertion first.
///
/// Timestamps are deliberately not consulted; ties and out-of-order server clocks
/// pass through unchanged.
pub fn history(transactions: &[Transaction]) -> Vec<&Transaction> {
    transactions.iter().rev().collect()
}

/// Finds a transaction by id.
pub fn find(transactions: &[Transaction], id: i64) -> Option<&Transaction> {
    transactions.iter().find(|transaction| transaction.id == id)
}

/// A transaction joined with its product, as shown on the detail screen
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    /// The purchase
    pub transaction: &'a Transaction,
    /// The product, if it is still in the catalog
    pub product: Option<&'a Product>,
}

impl<'a> Receipt<'a> {
    /// Joins `transaction` with its product from `products`.
    pub fn new(transaction: &'a Transaction, products: &'a [Product]) -> Self {
        Self {
            transaction,
            product: product::find(products, transaction.product_id),
        }
    }

    /// Current catalog price, or the average paid per unit when the product is gone.
    pub fn unit_price(&self) -> i64 {
        self.product.map_or_else(
            || {
                self.transaction
                    .total_price
                    .checked_div(self.transaction.quantity)
                    .unwrap_or(self.transaction.total_price)
            },
            |product| product.price,
        )
    }

    /// Product name, or a placeholder naming the dangling id.
    pub fn product_name(&self) -> String {
        self.product.map_or_else(
            || format!("Produk #{}", self.transaction.product_id),
            |product| product.name.clone(),
        )
    }
}
