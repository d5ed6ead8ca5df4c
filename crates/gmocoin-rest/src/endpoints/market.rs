//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::endpoints::read_envelope;
use crate::error::RestResult;
use crate::types::{ExchangeStatus, OrderBooks, PaginatedList, Ticker, Trade};
use gmocoin_types::{ServiceStatus, Symbol};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Make a public GET request
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> RestResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        read_envelope(request.send().await?).await?.into_result()
    }

    /// Get the exchange service status
    #[instrument(skip(self))]
    pub async fn get_status(&self) -> RestResult<ServiceStatus> {
        debug!("Fetching service status");

        let status: ExchangeStatus = self.get("/v1/status", &[]).await?;
        Ok(status.status)
    }

    /// Get the latest rates
    ///
    /// # Arguments
    /// * `symbol` - Instrument to quote; `None` returns every symbol
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, symbol: Option<Symbol>) -> RestResult<Vec<Ticker>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(symbol) = symbol {
            query.push(("symbol", symbol.as_str().to_string()));
        }

        debug!("Fetching ticker");
        self.get("/v1/ticker", &query).await
    }

    /// Get an order book snapshot
    ///
    /// # Arguments
    /// * `symbol` - Instrument
    #[instrument(skip(self))]
    pub async fn get_order_books(&self, symbol: Symbol) -> RestResult<OrderBooks> {
        let query = [("symbol", symbol.as_str().to_string())];

        debug!("Fetching order books for {}", symbol);
        self.get("/v1/orderbooks", &query).await
    }

    /// Get the public trade history
    ///
    /// # Arguments
    /// * `symbol` - Instrument
    /// * `page` - Page number (optional, 1-based)
    /// * `count` - Entries per page (optional, max 100)
    #[instrument(skip(self))]
    pub async fn get_trades(
        &self,
        symbol: Symbol,
        page: Option<u32>,
        count: Option<u32>,
    ) -> RestResult<PaginatedList<Trade>> {
        let mut query: Vec<(&str, String)> = vec![("symbol", symbol.as_str().to_string())];
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(count) = count {
            query.push(("count", count.to_string()));
        }

        debug!("Fetching trades for {}", symbol);
        self.get("/v1/trades", &query).await
    }
}
