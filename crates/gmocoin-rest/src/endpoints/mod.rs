//! Endpoint groups for the GMO Coin REST API
//!
//! Public market data lives in [`MarketEndpoints`]; everything else
//! requires signed headers and is split the way GMO Coin's documentation
//! splits it: account state, spot/margin order management, and
//! margin-only position management.

pub mod account;
pub mod margin;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use margin::MarginEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

use crate::error::{RestError, RestResult};
use crate::types::ApiResponse;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Read an HTTP response into the standard envelope.
///
/// A non-2xx status never reaches envelope interpretation; it surfaces as
/// a transport-level `Status` error with the raw body attached.
pub(crate) async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> RestResult<ApiResponse<T>> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(RestError::Status {
            code: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body)
        .map_err(|e| RestError::Parse(format!("Invalid response envelope: {}", e)))
}
