//! HTTP client for the storefront backend.
//!
//! One request per call. No retries, no idempotency key: a create that is retried by the
//! user can create a duplicate transaction on the server.

use super::{
    StoreApi,
    records::{
        ApiProduct, ApiResponse, ApiTransaction, CreateTransactionRequest,
        UpdateTransactionRequest,
    },
};
use crate::{
    config::ApiConfig,
    errors::{Error, Result},
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

const PRODUCTS_ENDPOINT: &str = "produk.php";
const TRANSACTIONS_ENDPOINT: &str = "transaksi.php";

/// reqwest-backed [`StoreApi`]
#[derive(Debug, Clone)]
pub struct HttpStoreApi {
    http: Client,
    base_url: String,
}

impl HttpStoreApi {
    /// Builds a client from configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed
    /// (for example, the TLS backend fails to initialise).
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.normalized_base_url(),
        })
    }

    /// Base URL requests are resolved against, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl StoreApi for HttpStoreApi {
    async fn list_products(&self) -> Result<Vec<ApiProduct>> {
        let response = self.http.get(self.endpoint(PRODUCTS_ENDPOINT)).send().await?;
        let (status, body) = read_response(response).await?;
        decode_list(status, &body, "fetch products")
    }

    async fn list_transactions(&self) -> Result<Vec<ApiTransaction>> {
        let response = self
            .http
            .get(self.endpoint(TRANSACTIONS_ENDPOINT))
            .send()
            .await?;
        let (status, body) = read_response(response).await?;
        decode_list(status, &body, "fetch transactions")
    }

    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<ApiTransaction> {
        debug!(
            "Creating transaction: product {} x{} for {}",
            request.product_id, request.qty, request.total_harga
        );
        let response = self
            .http
            .post(self.endpoint(TRANSACTIONS_ENDPOINT))
            .json(&request)
            .send()
            .await?;
        let (status, body) = read_response(response).await?;
        decode_created(status, &body)
    }

    async fn update_transaction(&self, id: i64, request: UpdateTransactionRequest) -> Result<()> {
        let response = self
            .http
            .put(self.endpoint(TRANSACTIONS_ENDPOINT))
            .query(&[("id", id)])
            .json(&request)
            .send()
            .await?;
        let (status, body) = read_response(response).await?;
        decode_acknowledgement(status, &body, "update transaction")
    }

    async fn delete_transaction(&self, id: i64) -> Result<()> {
        let response = self
            .http
            .delete(self.endpoint(TRANSACTIONS_ENDPOINT))
            .query(&[("id", id)])
            .send()
            .await?;
        let (status, body) = read_response(response).await?;
        decode_acknowledgement(status, &body, "delete transaction")
    }
}

async fn read_response(response: Response) -> Result<(StatusCode, String)> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

fn ensure_success(status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    let message = status.canonical_reason().unwrap_or("Unknown status").to_string();
    error!("Backend responded with {}: {}", status.as_u16(), message);
    Err(Error::Http {
        status: status.as_u16(),
        message,
    })
}

/// Parses a 2xx body into its envelope. Empty bodies and a bare `null` count as missing.
fn parse_envelope<T: DeserializeOwned>(
    body: &str,
    operation: &'static str,
) -> Result<ApiResponse<T>> {
    if body.trim().is_empty() {
        return Err(Error::EmptyBody { operation });
    }

    serde_json::from_str::<Option<ApiResponse<T>>>(body)?.ok_or(Error::EmptyBody { operation })
}

/// List endpoints: a missing `data` payload is an empty list, not an error.
pub(crate) fn decode_list<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    operation: &'static str,
) -> Result<Vec<T>> {
    ensure_success(status)?;
    let envelope: ApiResponse<Vec<T>> = parse_envelope(body, operation)?;
    Ok(envelope.data.unwrap_or_default())
}

/// Create endpoint: success needs both a 2xx status and a transaction in `data`.
pub(crate) fn decode_created(status: StatusCode, body: &str) -> Result<ApiTransaction> {
    const OPERATION: &str = "create transaction";
    ensure_success(status)?;
    let envelope: ApiResponse<ApiTransaction> = parse_envelope(body, OPERATION)?;
    envelope.data.ok_or(Error::EmptyBody {
        operation: OPERATION,
    })
}

/// Update/delete endpoints: any JSON body on a 2xx status is an acknowledgement.
pub(crate) fn decode_acknowledgement(
    status: StatusCode,
    body: &str,
    operation: &'static str,
) -> Result<()> {
    ensure_success(status)?;
    parse_envelope::<serde_json::Value>(body, operation).map(|_| ())
}
