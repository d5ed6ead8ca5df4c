//! Account state endpoints
//!
//! These endpoints require authentication. All of them are GETs; the
//! signature covers the empty body, and query parameters ride on the URL
//! only.

use crate::endpoints::read_envelope;
use crate::error::{RestError, RestResult};
use crate::types::{AccountMargin, Asset, Execution, List, Order, PaginatedList};
use gmocoin_auth::{RequestSigner, API_KEY_HEADER, API_SIGN_HEADER, API_TIMESTAMP_HEADER};
use gmocoin_types::Symbol;
use reqwest::Client;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Account state endpoints
pub struct AccountEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
    api_key: &'a str,
    secret_key: &'a SecretString,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(
        client: &'a Client,
        base_url: &'a str,
        api_key: &'a str,
        secret_key: &'a SecretString,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            secret_key,
        }
    }

    /// Make an authenticated GET request
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> RestResult<T> {
        let signer = RequestSigner::from_parts(self.api_key, self.secret_key, "GET", path);
        let headers = signer.headers("");
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &headers.api_key)
            .header(API_TIMESTAMP_HEADER, &headers.timestamp)
            .header(API_SIGN_HEADER, &headers.sign);
        if !query.is_empty() {
            request = request.query(query);
        }

        read_envelope(request.send().await?).await?.into_result()
    }

    /// Get trading capacity
    #[instrument(skip(self))]
    pub async fn get_margin(&self) -> RestResult<AccountMargin> {
        debug!("Fetching account margin");
        self.get("/v1/account/margin", &[]).await
    }

    /// Get asset balances
    #[instrument(skip(self))]
    pub async fn get_assets(&self) -> RestResult<Vec<Asset>> {
        debug!("Fetching account assets");
        self.get("/v1/account/assets", &[]).await
    }

    /// Get one order by id
    ///
    /// Covers spot and margin orders alike.
    #[instrument(skip(self))]
    pub async fn get_orders(&self, order_id: u64) -> RestResult<List<Order>> {
        let query = [("orderId", order_id.to_string())];

        debug!("Fetching order {}", order_id);
        self.get("/v1/orders", &query).await
    }

    /// Get active orders for an instrument
    ///
    /// # Arguments
    /// * `symbol` - Instrument
    /// * `page` - Page number (optional, 1-based)
    /// * `count` - Entries per page (optional, max 100)
    #[instrument(skip(self))]
    pub async fn get_active_orders(
        &self,
        symbol: Symbol,
        page: Option<u32>,
        count: Option<u32>,
    ) -> RestResult<PaginatedList<Order>> {
        let mut query: Vec<(&str, String)> = vec![("symbol", symbol.as_str().to_string())];
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(count) = count {
            query.push(("count", count.to_string()));
        }

        debug!("Fetching active orders for {}", symbol);
        self.get("/v1/activeOrders", &query).await
    }

    /// Get fills by order id or execution id
    ///
    /// Exactly one of the two ids selects the fills; passing neither is
    /// rejected before any network I/O.
    #[instrument(skip(self))]
    pub async fn get_executions(
        &self,
        order_id: Option<u64>,
        execution_id: Option<u64>,
    ) -> RestResult<List<Execution>> {
        if order_id.is_none() && execution_id.is_none() {
            return Err(RestError::InvalidParameter(
                "Either orderId or executionId is required".to_string(),
            ));
        }

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(order_id) = order_id {
            query.push(("orderId", order_id.to_string()));
        }
        if let Some(execution_id) = execution_id {
            query.push(("executionId", execution_id.to_string()));
        }

        debug!("Fetching executions");
        self.get("/v1/executions", &query).await
    }

    /// Get the latest fills for an instrument
    ///
    /// # Arguments
    /// * `symbol` - Instrument
    /// * `page` - Page number (optional, 1-based)
    /// * `count` - Entries per page (optional, max 100)
    #[instrument(skip(self))]
    pub async fn get_latest_executions(
        &self,
        symbol: Symbol,
        page: Option<u32>,
        count: Option<u32>,
    ) -> RestResult<PaginatedList<Execution>> {
        let mut query: Vec<(&str, String)> = vec![("symbol", symbol.as_str().to_string())];
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(count) = count {
            query.push(("count", count.to_string()));
        }

        debug!("Fetching latest executions for {}", symbol);
        self.get("/v1/latestExecutions", &query).await
    }
}
