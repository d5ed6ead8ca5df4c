//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarginEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::{
    AccountMargin, Asset, CancelOrdersResult, ChangeOrderRequest, CloseBulkOrderRequest,
    CloseOrderRequest, Execution, List, Order, OrderBooks, OrderRequest, PaginatedList, Position,
    PositionSummary, Ticker, Trade,
};
use gmocoin_auth::Credentials;
use gmocoin_types::{LeverageSymbol, ServiceStatus, Symbol};
use reqwest::Client;
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::info;

/// Public API base URL
const PUBLIC_ENDPOINT: &str = "https://api.coin.z.com/public";
/// Private API base URL
const PRIVATE_ENDPOINT: &str = "https://api.coin.z.com/private";

/// Default request timeout in milliseconds
const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// GMO Coin REST API client
///
/// Provides access to both public and private endpoints. The client holds
/// no mutable state; concurrent calls against one instance share nothing
/// but the connection pool.
///
/// # Example
///
/// ```no_run
/// use gmocoin_rest::{Credentials, GmoRestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = GmoRestClient::new();
///     let status = client.get_status().await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = GmoRestClient::with_credentials(creds);
///     let margin = auth_client.get_account_margin().await?;
///
///     Ok(())
/// }
/// ```
pub struct GmoRestClient {
    http_client: Client,
    endpoints: Endpoints,
    api_key: Option<String>,
    secret_key: Option<SecretString>,
}

impl GmoRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        let (api_key, secret_key) = credentials.into_parts();
        let config = ClientConfig::default()
            .with_api_key(api_key)
            .with_secret_key_secret(secret_key);
        Self::with_config(config)
    }

    /// Create a new client with credentials from the environment
    ///
    /// Reads `GMO_API_KEY` and `GMO_API_SECRET`.
    pub fn from_env() -> RestResult<Self> {
        Ok(Self::with_credentials(Credentials::from_env()?))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_deref().unwrap_or("gmocoin-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        info!("Created GMO Coin REST client");

        Self {
            http_client,
            endpoints: config.endpoints,
            api_key: config.api_key,
            secret_key: config.secret_key,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.secret_key.is_some()
    }

    /// Resolve the key/secret pair, naming exactly what is missing
    ///
    /// Runs before any network I/O so a misconfigured client fails the
    /// same way with or without connectivity.
    fn keys(&self) -> RestResult<(&str, &SecretString)> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(RestError::MissingApiKey)?;
        let secret_key = self
            .secret_key
            .as_ref()
            .filter(|secret| !secret.expose_secret().is_empty())
            .ok_or(RestError::MissingApiSecret)?;

        Ok((api_key, secret_key))
    }

    // ========================================================================
    // Endpoint Groups
    // ========================================================================

    /// Get public market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client, &self.endpoints.public)
    }

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        let (api_key, secret_key) = self.keys()?;
        Ok(AccountEndpoints::new(
            &self.http_client,
            &self.endpoints.private,
            api_key,
            secret_key,
        ))
    }

    /// Get order management endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        let (api_key, secret_key) = self.keys()?;
        Ok(TradingEndpoints::new(
            &self.http_client,
            &self.endpoints.private,
            api_key,
            secret_key,
        ))
    }

    /// Get position management endpoints (requires credentials)
    pub fn margin(&self) -> RestResult<MarginEndpoints<'_>> {
        let (api_key, secret_key) = self.keys()?;
        Ok(MarginEndpoints::new(
            &self.http_client,
            &self.endpoints.private,
            api_key,
            secret_key,
        ))
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get the exchange service status
    pub async fn get_status(&self) -> RestResult<ServiceStatus> {
        self.market().get_status().await
    }

    /// Get the latest rates
    ///
    /// # Arguments
    /// * `symbol` - Instrument to quote; `None` returns every symbol
    pub async fn get_ticker(&self, symbol: Option<Symbol>) -> RestResult<Vec<Ticker>> {
        self.market().get_ticker(symbol).await
    }

    /// Get an order book snapshot
    pub async fn get_order_books(&self, symbol: Symbol) -> RestResult<OrderBooks> {
        self.market().get_order_books(symbol).await
    }

    /// Get the public trade history
    pub async fn get_trades(
        &self,
        symbol: Symbol,
        page: Option<u32>,
        count: Option<u32>,
    ) -> RestResult<PaginatedList<Trade>> {
        self.market().get_trades(symbol, page, count).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get trading capacity
    pub async fn get_account_margin(&self) -> RestResult<AccountMargin> {
        self.account()?.get_margin().await
    }

    /// Get asset balances
    pub async fn get_account_assets(&self) -> RestResult<Vec<Asset>> {
        self.account()?.get_assets().await
    }

    /// Get one order by id
    pub async fn get_orders(&self, order_id: u64) -> RestResult<List<Order>> {
        self.account()?.get_orders(order_id).await
    }

    /// Get active orders for an instrument
    pub async fn get_active_orders(
        &self,
        symbol: Symbol,
        page: Option<u32>,
        count: Option<u32>,
    ) -> RestResult<PaginatedList<Order>> {
        self.account()?.get_active_orders(symbol, page, count).await
    }

    /// Get fills by order id or execution id
    pub async fn get_executions(
        &self,
        order_id: Option<u64>,
        execution_id: Option<u64>,
    ) -> RestResult<List<Execution>> {
        self.account()?.get_executions(order_id, execution_id).await
    }

    /// Get the latest fills for an instrument
    pub async fn get_latest_executions(
        &self,
        symbol: Symbol,
        page: Option<u32>,
        count: Option<u32>,
    ) -> RestResult<PaginatedList<Execution>> {
        self.account()?
            .get_latest_executions(symbol, page, count)
            .await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Place a new order, returning its id
    pub async fn post_order(&self, order: &OrderRequest) -> RestResult<String> {
        self.trading()?.post_order(order).await
    }

    /// Amend an order's price
    pub async fn change_order(&self, request: &ChangeOrderRequest) -> RestResult<()> {
        self.trading()?.change_order(request).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, order_id: u64) -> RestResult<()> {
        self.trading()?.cancel_order(order_id).await
    }

    /// Cancel a batch of orders
    pub async fn cancel_orders(&self, order_ids: &[u64]) -> RestResult<CancelOrdersResult> {
        self.trading()?.cancel_orders(order_ids).await
    }

    // ========================================================================
    // Private Margin Endpoints
    // ========================================================================

    /// Get open positions for an instrument
    pub async fn get_open_positions(
        &self,
        symbol: LeverageSymbol,
        page: Option<u32>,
        count: Option<u32>,
    ) -> RestResult<PaginatedList<Position>> {
        self.margin()?.get_open_positions(symbol, page, count).await
    }

    /// Get the per-side position summary for an instrument
    pub async fn get_position_summary(
        &self,
        symbol: LeverageSymbol,
    ) -> RestResult<List<PositionSummary>> {
        self.margin()?.get_position_summary(symbol).await
    }

    /// Close specific positions, returning the close order's id
    pub async fn close_order(&self, request: &CloseOrderRequest) -> RestResult<String> {
        self.margin()?.close_order(request).await
    }

    /// Close a whole side in one order, returning the close order's id
    pub async fn close_bulk_order(&self, request: &CloseBulkOrderRequest) -> RestResult<String> {
        self.margin()?.close_bulk_order(request).await
    }

    /// Move a position's losscut trigger price
    pub async fn change_losscut_price(
        &self,
        position_id: u64,
        losscut_price: Decimal,
    ) -> RestResult<()> {
        self.margin()?
            .change_losscut_price(position_id, losscut_price)
            .await
    }
}

impl Default for GmoRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for GmoRestClient {
    fn clone(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            endpoints: self.endpoints.clone(),
            api_key: self.api_key.clone(),
            secret_key: self
                .secret_key
                .as_ref()
                .map(|secret| SecretString::from(secret.expose_secret().to_owned())),
        }
    }
}

impl std::fmt::Debug for GmoRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GmoRestClient")
            .field("endpoints", &self.endpoints)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// The public and private API base URLs
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Base URL for public market data
    pub public: String,
    /// Base URL for private endpoints
    pub private: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            public: PUBLIC_ENDPOINT.to_string(),
            private: PRIVATE_ENDPOINT.to_string(),
        }
    }
}

/// Client configuration
///
/// The API key and secret are tracked separately so a private call can
/// report exactly which one is missing.
pub struct ClientConfig {
    /// API base URLs
    pub endpoints: Endpoints,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// API key (optional)
    pub api_key: Option<String>,
    /// API secret (optional)
    pub secret_key: Option<SecretString>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: None,
            api_key: None,
            secret_key: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URLs
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set the request timeout in milliseconds
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set a custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the API secret
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(SecretString::from(secret_key.into()));
        self
    }

    /// Set the API secret from an already-protected value
    pub fn with_secret_key_secret(mut self, secret_key: SecretString) -> Self {
        self.secret_key = Some(secret_key);
        self
    }
}

impl Clone for ClientConfig {
    fn clone(&self) -> Self {
        Self {
            endpoints: self.endpoints.clone(),
            timeout_ms: self.timeout_ms,
            user_agent: self.user_agent.clone(),
            api_key: self.api_key.clone(),
            secret_key: self
                .secret_key
                .as_ref()
                .map(|secret| SecretString::from(secret.expose_secret().to_owned())),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoints", &self.endpoints)
            .field("timeout_ms", &self.timeout_ms)
            .field("user_agent", &self.user_agent)
            .field("api_key", &self.api_key.as_deref().map(|_| "..."))
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = GmoRestClient::new();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_ms, 3000);
        assert_eq!(config.endpoints.public, "https://api.coin.z.com/public");
        assert_eq!(config.endpoints.private, "https://api.coin.z.com/private");
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .with_timeout_ms(10_000)
            .with_user_agent("test-agent");

        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_private_call_without_key_fails_fast() {
        let client = GmoRestClient::new();

        assert!(matches!(client.account(), Err(RestError::MissingApiKey)));
        assert!(matches!(client.trading(), Err(RestError::MissingApiKey)));
        assert!(matches!(client.margin(), Err(RestError::MissingApiKey)));
    }

    #[test]
    fn test_private_call_without_secret_names_the_secret() {
        let config = ClientConfig::new().with_api_key("xxxxxxxx");
        let client = GmoRestClient::with_config(config);

        assert!(matches!(
            client.account(),
            Err(RestError::MissingApiSecret)
        ));
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let config = ClientConfig::new()
            .with_api_key("")
            .with_secret_key("yyyyyyyy");
        let client = GmoRestClient::with_config(config);

        assert!(matches!(client.trading(), Err(RestError::MissingApiKey)));
    }

    #[test]
    fn test_client_with_credentials() {
        let creds = Credentials::new("xxxxxxxx", "yyyyyyyy").unwrap();
        let client = GmoRestClient::with_credentials(creds);

        assert!(client.has_credentials());
        assert!(client.account().is_ok());
        assert!(client.trading().is_ok());
        assert!(client.margin().is_ok());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let creds = Credentials::new("real_api_key", "real_api_secret").unwrap();
        let client = GmoRestClient::with_credentials(creds);
        let debug = format!("{:?}", client);

        assert!(!debug.contains("real_api_key"));
        assert!(!debug.contains("real_api_secret"));
    }
}
