//! Remote client layer - the backend contract and its HTTP implementation.
//!
//! State holders depend on [`StoreApi`] rather than on [`HttpStoreApi`] directly, so
//! tests can swap in a mock.

pub mod client;
pub mod records;

pub use client::HttpStoreApi;
pub use records::{ApiProduct, ApiTransaction, CreateTransactionRequest, UpdateTransactionRequest};

use crate::errors::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Operations the storefront backend offers.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// `GET produk.php`
    async fn list_products(&self) -> Result<Vec<ApiProduct>>;

    /// `GET transaksi.php`
    async fn list_transactions(&self) -> Result<Vec<ApiTransaction>>;

    /// `POST transaksi.php`; returns the stored record.
    async fn create_transaction(&self, request: CreateTransactionRequest)
    -> Result<ApiTransaction>;

    /// `PUT transaksi.php?id=<id>`
    async fn update_transaction(&self, id: i64, request: UpdateTransactionRequest) -> Result<()>;

    /// `DELETE transaksi.php?id=<id>`
    async fn delete_transaction(&self, id: i64) -> Result<()>;
}
