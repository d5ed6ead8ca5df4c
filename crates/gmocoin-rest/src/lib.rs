//! REST API client for the GMO Coin cryptocurrency exchange
//!
//! This crate provides a typed client for GMO Coin's REST API, covering
//! market data, account state, order management, and margin positions.
//!
//! # Features
//!
//! - **Market Data**: service status, ticker, order books, trade history
//! - **Account**: margin capacity, asset balances, orders, executions
//! - **Trading**: place, change, and cancel orders
//! - **Margin**: open positions, position summary, close orders, losscut
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each request carries an
//! `API-KEY` / `API-TIMESTAMP` / `API-SIGN` header triple, where the
//! signature is an HMAC-SHA256 hex digest of
//! `timestamp + method + path + body` as specified by GMO Coin's API
//! documentation.
//!
//! # Example
//!
//! ```no_run
//! use gmocoin_rest::{Credentials, GmoRestClient};
//! use gmocoin_types::SpotSymbol;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = GmoRestClient::new();
//!     let tickers = client.get_ticker(Some(SpotSymbol::Btc.into())).await?;
//!     println!("BTC: {:?}", tickers.first());
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = GmoRestClient::with_credentials(creds);
//!     let assets = auth_client.get_account_assets().await?;
//!     println!("Assets: {:?}", assets);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error handling
//!
//! [`RestError`] keeps three failure families apart so callers can branch
//! on them: configuration (missing key/secret, raised before any I/O),
//! application (the exchange rejected the request; the first envelope
//! message is surfaced), and transport (timeout, connection failure, or a
//! non-2xx status).
//!
//! No retries, no backoff: every call is attempted exactly once.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, Endpoints, GmoRestClient};
pub use error::{RestError, RestResult};
pub use gmocoin_auth::Credentials;

// Re-export endpoint-specific types
pub use types::{
    // Envelope
    ApiMessage, ApiResponse, List, PaginatedList, Pagination,
    // Market data
    Book, ExchangeStatus, OrderBooks, Ticker, Trade,
    // Account
    AccountMargin, Asset, Execution, Order, Position, PositionSummary,
    // Requests
    CancelFailure, CancelOrdersRequest, CancelOrdersResult, ChangeLosscutPriceRequest,
    ChangeOrderRequest,
    CloseBulkOrderRequest, CloseOrderRequest, OrderRequest, SettlePosition,
};

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
