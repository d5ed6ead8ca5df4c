//! Position management endpoints for margin trading
//!
//! These endpoints require authentication and only exist for leverage
//! instruments.

use crate::endpoints::read_envelope;
use crate::error::{RestError, RestResult};
use crate::types::{
    ApiResponse, ChangeLosscutPriceRequest, CloseBulkOrderRequest, CloseOrderRequest, List,
    PaginatedList, Position, PositionSummary,
};
use gmocoin_auth::{RequestSigner, API_KEY_HEADER, API_SIGN_HEADER, API_TIMESTAMP_HEADER};
use gmocoin_types::LeverageSymbol;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use rust_decimal::Decimal;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

/// Position management endpoints
pub struct MarginEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
    api_key: &'a str,
    secret_key: &'a SecretString,
}

impl<'a> MarginEndpoints<'a> {
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

    /// Make an authenticated POST request, returning the raw envelope
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> RestResult<ApiResponse<T>> {
        let body_json = serde_json::to_string(body)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;

        let signer = RequestSigner::from_parts(self.api_key, self.secret_key, "POST", path);
        let headers = signer.headers(&body_json);
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &headers.api_key)
            .header(API_TIMESTAMP_HEADER, &headers.timestamp)
            .header(API_SIGN_HEADER, &headers.sign)
            .header(CONTENT_TYPE, "application/json")
            .body(body_json)
            .send()
            .await?;

        read_envelope(response).await
    }

    /// Get open positions for an instrument
    ///
    /// # Arguments
    /// * `symbol` - Leverage instrument
    /// * `page` - Page number (optional, 1-based)
    /// * `count` - Entries per page (optional, max 100)
    #[instrument(skip(self))]
    pub async fn get_open_positions(
        &self,
        symbol: LeverageSymbol,
        page: Option<u32>,
        count: Option<u32>,
    ) -> RestResult<PaginatedList<Position>> {
        let mut query: Vec<(&str, String)> = vec![("symbol", symbol.as_str().to_string())];
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(count) = count {
            query.push(("count", count.to_string()));
        }

        debug!("Fetching open positions for {}", symbol);
        self.get("/v1/openPositions", &query).await
    }

    /// Get the per-side position summary for an instrument
    ///
    /// # Arguments
    /// * `symbol` - Leverage instrument
    #[instrument(skip(self))]
    pub async fn get_position_summary(
        &self,
        symbol: LeverageSymbol,
    ) -> RestResult<List<PositionSummary>> {
        let query = [("symbol", symbol.as_str().to_string())];

        debug!("Fetching position summary for {}", symbol);
        self.get("/v1/positionSummary", &query).await
    }

    /// Close specific positions
    ///
    /// # Arguments
    /// * `request` - Close order naming the positions to settle
    ///
    /// # Returns
    /// The close order's id
    #[instrument(skip(self, request), fields(symbol = %request.symbol, side = ?request.side))]
    pub async fn close_order(&self, request: &CloseOrderRequest) -> RestResult<String> {
        debug!(
            "Placing close order for {} positions on {}",
            request.settle_position.len(),
            request.symbol
        );

        self.post("/v1/closeOrder", request).await?.into_result()
    }

    /// Close a whole side in one order
    ///
    /// # Arguments
    /// * `request` - Bulk close order
    ///
    /// # Returns
    /// The close order's id
    #[instrument(skip(self, request), fields(symbol = %request.symbol, side = ?request.side))]
    pub async fn close_bulk_order(&self, request: &CloseBulkOrderRequest) -> RestResult<String> {
        debug!("Placing bulk close order on {}", request.symbol);

        self.post("/v1/closeBulkOrder", request)
            .await?
            .into_result()
    }

    /// Move a position's losscut trigger price
    ///
    /// # Arguments
    /// * `position_id` - Position to adjust
    /// * `losscut_price` - New trigger price
    #[instrument(skip(self))]
    pub async fn change_losscut_price(
        &self,
        position_id: u64,
        losscut_price: Decimal,
    ) -> RestResult<()> {
        debug!("Changing losscut price of position {}", position_id);

        let request = ChangeLosscutPriceRequest {
            position_id,
            losscut_price,
        };
        self.post::<_, serde_json::Value>("/v1/changeLosscutPrice", &request)
            .await?
            .into_unit()
    }
}
