//! Shared test utilities for the storefront client.
//!
//! This module provides raw backend records and display-ready entities with sensible
//! defaults, a backend whose list calls block until released, and a tracing initialiser
//! that writes through the test harness.

use crate::{
    api::{
        ApiProduct, ApiTransaction, CreateTransactionRequest, StoreApi, UpdateTransactionRequest,
    },
    entities::{Category, ImageSource, Product, Transaction},
    errors::{Error, Result},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

/// Base URL used by tests that resolve relative image paths.
pub const TEST_BASE_URL: &str = "http://localhost/diamond_api/";

/// Routes `tracing` output through the test writer. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates a raw product record with sensible defaults.
///
/// # Defaults
/// * `category_id`: 1 (Mobile Legends)
/// * `stok`: 100
/// * `harga`: 25000
/// * `gambar`: an absolute URL
pub fn api_product(id: i64, name: &str) -> ApiProduct {
    ApiProduct {
        id,
        kategori: None,
        category_id: Some(1),
        nama_produk: name.to_string(),
        stok: 100,
        harga: 25_000,
        deskripsi: format!("Beli {name}"),
        gambar: Some(format!("https://cdn.example.com/{id}.png")),
    }
}

/// Creates a raw transaction record with a well-formed timestamp.
pub fn api_transaction(id: i64, product_id: i64, qty: i64, total: i64) -> ApiTransaction {
    ApiTransaction {
        id,
        product_id,
        qty,
        total_harga: total,
        tanggal: "2024-06-01 12:30:00".to_string(),
    }
}

/// Creates a display-ready product with custom stock and price.
pub fn product(id: i64, stock: i64, price: i64) -> Product {
    Product {
        id,
        category: Category::MobileLegends,
        name: format!("{id}00 Diamonds"),
        stock,
        price,
        description: String::new(),
        image: ImageSource::Asset(Category::MobileLegends.asset()),
    }
}

/// Creates a display-ready transaction at a fixed timestamp.
pub fn transaction(id: i64, product_id: i64, quantity: i64, total_price: i64) -> Transaction {
    Transaction {
        id,
        product_id,
        quantity,
        total_price,
        timestamp: NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 0))
            .unwrap_or_default(),
    }
}

/// Backend whose list calls signal `started`, then hold until `release` is notified.
///
/// Lets a test observe a holder while its refresh is in flight. Mutations always fail.
#[derive(Default)]
pub struct GatedStoreApi {
    /// Notified once a list call has been entered
    pub started: Notify,
    /// Notify to let the pending list call return
    pub release: Notify,
    /// Returned by `list_products`
    pub products: Vec<ApiProduct>,
    /// Returned by `list_transactions`
    pub transactions: Vec<ApiTransaction>,
}

impl GatedStoreApi {
    async fn gate(&self) {
        self.started.notify_one();
        self.release.notified().await;
    }
}

fn unsupported(operation: &str) -> Error {
    Error::Backend {
        message: format!("{operation} is not available on the gated backend"),
    }
}

#[async_trait]
impl StoreApi for GatedStoreApi {
    async fn list_products(&self) -> Result<Vec<ApiProduct>> {
        self.gate().await;
        Ok(self.products.clone())
    }

    async fn list_transactions(&self) -> Result<Vec<ApiTransaction>> {
        self.gate().await;
        Ok(self.transactions.clone())
    }

    async fn create_transaction(
        &self,
        _request: CreateTransactionRequest,
    ) -> Result<ApiTransaction> {
        Err(unsupported("create transaction"))
    }

    async fn update_transaction(&self, _id: i64, _request: UpdateTransactionRequest) -> Result<()> {
        Err(unsupported("update transaction"))
    }

    async fn delete_transaction(&self, _id: i64) -> Result<()> {
        Err(unsupported("delete transaction"))
    }
}
