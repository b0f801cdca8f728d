//! View-state holders for the catalog and purchase history.
//!
//! Each holder owns a [`ViewState`] behind an async `RwLock` and an injected
//! [`StoreApi`](crate::api::StoreApi). The lock is released while a request is in
//! flight, so overlapping refreshes race and the last response to arrive wins.

pub mod products;
pub mod transactions;

pub use products::ProductsState;
pub use transactions::TransactionsState;

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Latest fetched list plus request status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState<T> {
    /// Last successfully fetched list
    pub items: Vec<T>,
    /// A refresh is in flight
    pub is_loading: bool,
    /// Message of the most recent failure, cleared when a refresh starts
    pub error: Option<String>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

pub(crate) type SharedState<T> = Arc<RwLock<ViewState<T>>>;

/// Marks the start of a refresh.
async fn begin_refresh<T>(state: &SharedState<T>) {
    let mut guard = state.write().await;
    guard.is_loading = true;
    guard.error = None;
}

/// Stores a refresh outcome. Failures keep the previous items.
async fn finish_refresh<T>(state: &SharedState<T>, outcome: Result<Vec<T>, String>) {
    let mut guard = state.write().await;
    guard.is_loading = false;
    match outcome {
        Ok(items) => guard.items = items,
        Err(message) => guard.error = Some(message),
    }
}

/// Records a failed mutation without touching items or the loading flag.
async fn record_error<T>(state: &SharedState<T>, message: String) {
    state.write().await.error = Some(message);
}
