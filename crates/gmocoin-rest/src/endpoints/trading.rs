//! Order management endpoints for spot and margin trading
//!
//! These endpoints require authentication. They are all POSTs; the JSON
//! body is serialized once and that exact string is both signed and sent,
//! so the signature can never drift from the payload.

use crate::endpoints::read_envelope;
use crate::error::{RestError, RestResult};
use crate::types::{
    ApiResponse, CancelOrderRequest, CancelOrdersRequest, CancelOrdersResult, ChangeOrderRequest,
    OrderRequest,
};
use gmocoin_auth::{RequestSigner, API_KEY_HEADER, API_SIGN_HEADER, API_TIMESTAMP_HEADER};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

/// Order management endpoints
pub struct TradingEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
    api_key: &'a str,
    secret_key: &'a SecretString,
}

impl<'a> TradingEndpoints<'a> {
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

    /// Place a new order
    ///
    /// # Arguments
    /// * `order` - Order request with all parameters
    ///
    /// # Returns
    /// The new order's id
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = ?order.side, execution_type = ?order.execution_type))]
    pub async fn post_order(&self, order: &OrderRequest) -> RestResult<String> {
        debug!(
            "Placing {} {} order for {} {}",
            order.side,
            order.execution_type.as_str(),
            order.size,
            order.symbol
        );

        self.post("/v1/order", order).await?.into_result()
    }

    /// Amend an order's price
    ///
    /// # Arguments
    /// * `request` - Order id plus the new price(s)
    #[instrument(skip(self, request), fields(order_id = request.order_id))]
    pub async fn change_order(&self, request: &ChangeOrderRequest) -> RestResult<()> {
        debug!("Changing order {}", request.order_id);

        self.post::<_, serde_json::Value>("/v1/changeOrder", request)
            .await?
            .into_unit()
    }

    /// Cancel an order
    ///
    /// # Arguments
    /// * `order_id` - Order to cancel
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: u64) -> RestResult<()> {
        debug!("Cancelling order {}", order_id);

        let request = CancelOrderRequest { order_id };
        self.post::<_, serde_json::Value>("/v1/cancelOrder", &request)
            .await?
            .into_unit()
    }

    /// Cancel a batch of orders
    ///
    /// Unlike [`cancel_order`](Self::cancel_order), partial failure is not
    /// an envelope error; the per-order outcomes come back in the result.
    ///
    /// # Arguments
    /// * `order_ids` - Orders to cancel (at most 10 per call)
    #[instrument(skip(self), fields(count = order_ids.len()))]
    pub async fn cancel_orders(&self, order_ids: &[u64]) -> RestResult<CancelOrdersResult> {
        if order_ids.is_empty() {
            return Err(RestError::InvalidParameter(
                "Empty order id list".to_string(),
            ));
        }

        debug!("Cancelling {} orders", order_ids.len());

        let request = CancelOrdersRequest {
            order_ids: order_ids.to_vec(),
        };
        self.post("/v1/cancelOrders", &request).await?.into_result()
    }
}
