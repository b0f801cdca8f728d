//! Catalog view state.

use super::{SharedState, ViewState, begin_refresh, finish_refresh};
use crate::{
    api::StoreApi,
    core::product,
    entities::{Category, Product},
};
use std::sync::Arc;
use tracing::{error, info};

/// Holds the product catalog for the home and detail screens
#[derive(Clone)]
pub struct ProductsState {
    api: Arc<dyn StoreApi>,
    base_url: String,
    state: SharedState<Product>,
}

impl ProductsState {
    /// Creates an empty holder. `base_url` is used to resolve relative image paths.
    pub fn new(api: Arc<dyn StoreApi>, base_url: impl Into<String>) -> Self {
        Self {
            api,
            base_url: base_url.into(),
            state: Arc::default(),
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> ViewState<Product> {
        self.state.read().await.clone()
    }

    /// Refetches the whole catalog and replaces the list.
    ///
    /// Failures are recorded in [`ViewState::error`]; the previous list stays visible.
    pub async fn refresh(&self) {
        info!("Refreshing product catalog...");
        begin_refresh(&self.state).await;

        let outcome = match self.api.list_products().await {
            Ok(raw) => {
                let products = product::normalize_all(raw, &self.base_url);
                info!("Product catalog refreshed with {} items.", products.len());
                Ok(products)
            }
            Err(e) => {
                error!("Failed to load products: {}", e);
                Err(e.to_string())
            }
        };

        finish_refresh(&self.state, outcome).await;
    }

    /// Looks up a product in the current list.
    pub async fn find(&self, id: i64) -> Option<Product> {
        product::find(&self.state.read().await.items, id).cloned()
    }

    /// Current products in `category`.
    pub async fn in_category(&self, category: Category) -> Vec<Product> {
        product::in_category(&self.state.read().await.items, category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Current products matching `query`.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        product::search(&self.state.read().await.items, query)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::api::MockStoreApi;
    use crate::errors::Error;
    use crate::test_utils::{GatedStoreApi, TEST_BASE_URL, api_product, init_test_tracing};

    fn holder(mock: MockStoreApi) -> ProductsState {
        ProductsState::new(Arc::new(mock), TEST_BASE_URL)
    }

    #[tokio::test]
    async fn test_initial_state_is_empty() {
        let state = holder(MockStoreApi::new()).snapshot().await;
        assert_eq!(state, ViewState::default());
    }

    #[tokio::test]
    async fn test_refresh_replaces_items() {
        init_test_tracing();
        let mut mock = MockStoreApi::new();
        mock.expect_list_products()
            .times(1)
            .returning(|| Ok(vec![api_product(1, "100 Diamonds"), api_product(2, "250 Diamonds")]));

        let products = holder(mock);
        products.refresh().await;

        let state = products.snapshot().await;
        assert_eq!(state.items.len(), 2);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(products.find(2).await.map(|p| p.name), Some("250 Diamonds".to_string()));
        assert_eq!(products.search("250").await.len(), 1);
        assert_eq!(products.in_category(Category::MobileLegends).await.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_stale_items() {
        init_test_tracing();
        let mut mock = MockStoreApi::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_products()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![api_product(1, "100 Diamonds")]));
        mock.expect_list_products()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Err(Error::Http {
                    status: 502,
                    message: "Bad Gateway".to_string(),
                })
            });

        let products = holder(mock);
        products.refresh().await;
        products.refresh().await;

        let state = products.snapshot().await;
        assert_eq!(state.items.len(), 1);
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Request failed: 502 - Bad Gateway"));
    }

    #[tokio::test]
    async fn test_successful_refresh_clears_previous_error() {
        let mut mock = MockStoreApi::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_products()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(Error::EmptyBody { operation: "fetch products" }));
        mock.expect_list_products()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(Vec::new()));

        let products = holder(mock);
        products.refresh().await;
        assert!(products.snapshot().await.error.is_some());

        products.refresh().await;
        let state = products.snapshot().await;
        assert!(state.error.is_none());
        assert!(state.items.is_empty());
    }

    #[tokio::test]
    async fn test_is_loading_while_refresh_in_flight() {
        init_test_tracing();
        let api = Arc::new(GatedStoreApi {
            products: vec![api_product(1, "100 Diamonds")],
            ..GatedStoreApi::default()
        });
        let products = ProductsState::new(Arc::clone(&api) as Arc<dyn StoreApi>, TEST_BASE_URL);

        let pending = tokio::spawn({
            let products = products.clone();
            async move { products.refresh().await }
        });
        api.started.notified().await;

        let state = products.snapshot().await;
        assert!(state.is_loading);
        assert!(state.items.is_empty());

        api.release.notify_one();
        pending.await.unwrap();

        let state = products.snapshot().await;
        assert!(!state.is_loading);
        assert_eq!(state.items.len(), 1);
    }
}
