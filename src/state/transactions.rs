//! Purchase history view state and the purchase/edit/delete actions.
//!
//! Every successful mutation is followed by a full refresh rather than a local patch of
//! the list. A failed mutation only sets the error message.

use super::{SharedState, ViewState, begin_refresh, finish_refresh, record_error};
use crate::{
    api::{StoreApi, UpdateTransactionRequest},
    core::{checkout::Order, transaction},
    entities::{Product, Transaction},
    errors::Result,
};
use std::sync::Arc;
use tracing::{error, info};

/// Holds the purchase history and performs purchases
#[derive(Clone)]
pub struct TransactionsState {
    api: Arc<dyn StoreApi>,
    state: SharedState<Transaction>,
}

impl TransactionsState {
    /// Creates an empty holder.
    pub fn new(api: Arc<dyn StoreApi>) -> Self {
        Self {
            api,
            state: Arc::default(),
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> ViewState<Transaction> {
        self.state.read().await.clone()
    }

    /// Current transactions, most recent insertion first.
    pub async fn history(&self) -> Vec<Transaction> {
        transaction::history(&self.state.read().await.items)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Looks up a transaction in the current list.
    pub async fn find(&self, id: i64) -> Option<Transaction> {
        transaction::find(&self.state.read().await.items, id).cloned()
    }

    /// Refetches the whole history and replaces the list.
    ///
    /// Failures are recorded in [`ViewState::error`]; the previous list stays visible.
    pub async fn refresh(&self) {
        info!("Refreshing transactions...");
        begin_refresh(&self.state).await;

        let outcome = match self.api.list_transactions().await {
            Ok(raw) => {
                let transactions = transaction::normalize_all(raw);
                info!("Transactions refreshed with {} items.", transactions.len());
                Ok(transactions)
            }
            Err(e) => {
                error!("Failed to load transactions: {}", e);
                Err(e.to_string())
            }
        };

        finish_refresh(&self.state, outcome).await;
    }

    /// Places a validated order, then resynchronises the history.
    ///
    /// # Errors
    /// Returns the client error; its message is also stored in [`ViewState::error`].
    pub async fn create(&self, order: &Order) -> Result<Transaction> {
        match self.api.create_transaction(order.to_request()).await {
            Ok(created) => {
                info!(
                    "Transaction {} created for product {}",
                    created.id, created.product_id
                );
                let created = transaction::normalize(created);
                self.refresh().await;
                Ok(created)
            }
            Err(e) => self.fail("create transaction", e).await,
        }
    }

    /// Validates `quantity` against `product` and places the order.
    ///
    /// Invalid quantities are rejected before any request is made and do not touch state.
    ///
    /// # Errors
    /// Validation errors from [`Order::new`], or the client error from [`Self::create`].
    pub async fn purchase(&self, product: &Product, quantity: i64) -> Result<Transaction> {
        let order = Order::new(product, quantity)?;
        self.create(&order).await
    }

    /// Edits a transaction, then resynchronises the history.
    ///
    /// # Errors
    /// Returns the client error; its message is also stored in [`ViewState::error`].
    pub async fn update(
        &self,
        id: i64,
        product_id: i64,
        quantity: i64,
        total_price: i64,
    ) -> Result<()> {
        let request = UpdateTransactionRequest {
            id,
            product_id,
            qty: quantity,
            total_harga: total_price,
        };

        match self.api.update_transaction(id, request).await {
            Ok(()) => {
                info!("Transaction {} updated", id);
                self.refresh().await;
                Ok(())
            }
            Err(e) => self.fail("update transaction", e).await,
        }
    }

    /// Deletes a transaction, then resynchronises the history.
    ///
    /// # Errors
    /// Returns the client error; its message is also stored in [`ViewState::error`].
    pub async fn delete(&self, id: i64) -> Result<()> {
        match self.api.delete_transaction(id).await {
            Ok(()) => {
                info!("Transaction {} deleted", id);
                self.refresh().await;
                Ok(())
            }
            Err(e) => self.fail("delete transaction", e).await,
        }
    }

    async fn fail<T>(&self, action: &str, e: crate::errors::Error) -> Result<T> {
        error!("Failed to {}: {}", action, e);
        record_error(&self.state, e.to_string()).await;
        Err(e)
    }
}
