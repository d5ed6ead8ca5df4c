//! Types for GMO Coin REST API requests and responses
//!
//! Prices and sizes stay `String` on the wire to avoid floating-point
//! loss; accessor helpers parse into `rust_decimal::Decimal` on demand.
//! Request types serialize numeric fields as strings for the same reason.

use crate::error::{RestError, RestResult};
use gmocoin_types::{
    CancelType, ExecutionType, LeverageSymbol, OrderSide, OrderStatus, OrderType, ServiceStatus,
    SettleType, SpotSymbol, Symbol, TimeInForce,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// API Response Envelope
// ============================================================================

/// One error entry from the response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    /// GMO Coin message code (e.g., "ERR-5106")
    pub message_code: String,
    /// Human-readable message text
    pub message_string: String,
}

/// Standard GMO Coin API response wrapper
///
/// Every endpoint answers with this envelope: `status` 0 on success and 1
/// on failure, `data` present iff successful, `messages` listing what went
/// wrong otherwise.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// 0 = success, 1 = failure
    pub status: i64,
    /// Result data (present if successful)
    pub data: Option<T>,
    /// Error messages (non-empty if failed)
    pub messages: Option<Vec<ApiMessage>>,
    /// Server-side processing timestamp
    pub responsetime: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.status == 0 && self.messages.as_ref().map_or(true, Vec::is_empty)
    }

    /// Get the data, failing on any envelope message
    ///
    /// A non-empty message list means failure regardless of the numeric
    /// `status` field.
    pub fn into_result(self) -> RestResult<T> {
        if let Some(messages) = self.messages {
            if !messages.is_empty() {
                return Err(RestError::from_api_messages(messages));
            }
        }

        self.data
            .ok_or_else(|| RestError::Parse("Missing data in success response".to_string()))
    }

    /// Discard the data, failing on any envelope message
    ///
    /// For endpoints that acknowledge with an empty envelope (change
    /// order, cancel order, change losscut price).
    pub fn into_unit(self) -> RestResult<()> {
        if let Some(messages) = self.messages {
            if !messages.is_empty() {
                return Err(RestError::from_api_messages(messages));
            }
        }

        Ok(())
    }
}

/// A bare list payload
#[derive(Debug, Clone, Deserialize)]
pub struct List<T> {
    /// The entries
    pub list: Vec<T>,
}

/// A paginated list payload
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedList<T> {
    /// Which page this is
    pub pagination: Pagination,
    /// The entries on this page
    pub list: Vec<T>,
}

/// Pagination cursor attached to list responses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based)
    pub current_page: u32,
    /// Entries per page
    pub count: u32,
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Exchange availability payload from `/v1/status`
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeStatus {
    /// Current service status
    pub status: ServiceStatus,
}

/// Latest rates for one instrument
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Best ask price
    pub ask: String,
    /// Best bid price
    pub bid: String,
    /// 24h high
    pub high: String,
    /// Last traded price
    pub last: String,
    /// 24h low
    pub low: String,
    /// Instrument
    pub symbol: Symbol,
    /// Quote timestamp (ISO 8601)
    pub timestamp: String,
    /// 24h traded volume
    pub volume: String,
}

impl Ticker {
    /// Get the current ask price
    pub fn ask_price(&self) -> Option<Decimal> {
        self.ask.parse().ok()
    }

    /// Get the current bid price
    pub fn bid_price(&self) -> Option<Decimal> {
        self.bid.parse().ok()
    }

    /// Get the last trade price
    pub fn last_price(&self) -> Option<Decimal> {
        self.last.parse().ok()
    }

    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        let ask = self.ask_price()?;
        let bid = self.bid_price()?;
        Some((ask + bid) / Decimal::TWO)
    }
}

/// One price level of the order book
#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    /// Level price
    pub price: String,
    /// Resting size at this price
    pub size: String,
}

/// Order book snapshot from `/v1/orderbooks`
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBooks {
    /// Ask levels, best first
    pub asks: Vec<Book>,
    /// Bid levels, best first
    pub bids: Vec<Book>,
    /// Instrument
    pub symbol: Symbol,
}

impl OrderBooks {
    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().and_then(|level| level.price.parse().ok())
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().and_then(|level| level.price.parse().ok())
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// One public trade
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    /// Trade price
    pub price: String,
    /// Aggressor side
    pub side: OrderSide,
    /// Trade size
    pub size: String,
    /// Execution timestamp (ISO 8601)
    pub timestamp: String,
}

// ============================================================================
// Account Types
// ============================================================================

/// Trading capacity from `/v1/account/margin`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMargin {
    /// Realized profit and loss
    pub actual_profit_loss: String,
    /// Amount available for new orders
    pub available_amount: String,
    /// Margin currently tied up
    pub margin: String,
    /// Unrealized profit and loss
    pub profit_loss: String,
}

/// One asset balance from `/v1/account/assets`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Total amount held
    pub amount: String,
    /// Amount not locked in orders
    pub available: String,
    /// JPY conversion rate
    pub conversion_rate: String,
    /// Asset code
    pub symbol: SpotSymbol,
}

/// One order from `/v1/orders` or `/v1/activeOrders`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Root order id (stable across amendments)
    pub root_order_id: u64,
    /// Order id
    pub order_id: u64,
    /// Instrument
    pub symbol: Symbol,
    /// Side
    pub side: OrderSide,
    /// NORMAL or LOSSCUT
    pub order_type: OrderType,
    /// MARKET, LIMIT, or STOP
    pub execution_type: ExecutionType,
    /// Opens or settles a position
    pub settle_type: SettleType,
    /// Ordered size
    pub size: String,
    /// Size filled so far
    pub executed_size: String,
    /// Order price ("0" for market orders)
    pub price: String,
    /// Lifecycle status
    pub status: OrderStatus,
    /// Why the order was cancelled, if it was
    pub cancel_type: Option<CancelType>,
    /// Time-in-force policy
    pub time_in_force: TimeInForce,
    /// Placement timestamp (ISO 8601)
    pub timestamp: String,
}

/// One fill from `/v1/executions` or `/v1/latestExecutions`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Execution id
    pub execution_id: u64,
    /// Parent order id
    pub order_id: u64,
    /// Instrument
    pub symbol: Symbol,
    /// Side
    pub side: OrderSide,
    /// Opens or settles a position
    pub settle_type: SettleType,
    /// Filled size
    pub size: String,
    /// Fill price
    pub price: String,
    /// Realized profit and loss
    pub loss_gain: String,
    /// Trading fee
    pub fee: String,
    /// Fill timestamp (ISO 8601)
    pub timestamp: String,
}

/// One open position from `/v1/openPositions`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Position id
    pub position_id: u64,
    /// Instrument
    pub symbol: LeverageSymbol,
    /// Side
    pub side: OrderSide,
    /// Position size
    pub size: String,
    /// Size already committed to close orders
    // "orderdSize" is the actual wire spelling
    #[serde(rename = "orderdSize")]
    pub ordered_size: String,
    /// Entry price
    pub price: String,
    /// Unrealized profit and loss
    pub loss_gain: String,
    /// Losscut (margin call) trigger price
    pub losscut_price: String,
    /// Open timestamp (ISO 8601)
    pub timestamp: String,
}

/// Per-side aggregate from `/v1/positionSummary`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSummary {
    /// Average entry rate
    pub average_position_rate: String,
    /// Unrealized profit and loss
    pub position_loss_gain: String,
    /// Side
    pub side: OrderSide,
    /// Size committed to close orders
    pub sum_order_quantity: String,
    /// Total open size
    pub sum_position_quantity: String,
    /// Instrument
    pub symbol: String,
}

// ============================================================================
// Trading Request Types
// ============================================================================

/// Request to place a new order via `/v1/order`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Instrument
    pub symbol: Symbol,
    /// Side
    pub side: OrderSide,
    /// MARKET, LIMIT, or STOP
    pub execution_type: ExecutionType,
    /// Time-in-force policy (exchange default applies when omitted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Order price (required for LIMIT and STOP)
    #[serde(with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Losscut trigger price (leverage orders only)
    #[serde(with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    pub losscut_price: Option<Decimal>,
    /// Order size
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
    /// Cancel resting orders that would cross this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_before: Option<bool>,
}

impl OrderRequest {
    /// Create a market order
    pub fn market(symbol: impl Into<Symbol>, side: OrderSide, size: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            execution_type: ExecutionType::Market,
            time_in_force: None,
            price: None,
            losscut_price: None,
            size,
            cancel_before: None,
        }
    }

    /// Create a limit order
    pub fn limit(symbol: impl Into<Symbol>, side: OrderSide, size: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            execution_type: ExecutionType::Limit,
            time_in_force: None,
            price: Some(price),
            losscut_price: None,
            size,
            cancel_before: None,
        }
    }

    /// Create a stop order
    pub fn stop(symbol: impl Into<Symbol>, side: OrderSide, size: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            execution_type: ExecutionType::Stop,
            time_in_force: None,
            price: Some(price),
            losscut_price: None,
            size,
            cancel_before: None,
        }
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Set the losscut trigger price (leverage orders)
    pub fn with_losscut_price(mut self, price: Decimal) -> Self {
        self.losscut_price = Some(price);
        self
    }

    /// Cancel crossing resting orders before placing this one
    pub fn cancel_before(mut self) -> Self {
        self.cancel_before = Some(true);
        self
    }
}

/// Request to amend an order via `/v1/changeOrder`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeOrderRequest {
    /// Order to amend
    pub order_id: u64,
    /// New price
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// New losscut trigger price (leverage orders only)
    #[serde(with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    pub losscut_price: Option<Decimal>,
}

/// Request to cancel one order via `/v1/cancelOrder`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Order to cancel
    pub order_id: u64,
}

/// Request to cancel a batch of orders via `/v1/cancelOrders`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrdersRequest {
    /// Orders to cancel (at most 10 per call)
    pub order_ids: Vec<u64>,
}

/// Per-order outcome of a batch cancel
#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrdersResult {
    /// Orders the exchange refused to cancel
    #[serde(default)]
    pub failed: Vec<CancelFailure>,
    /// Order ids accepted for cancellation
    #[serde(default)]
    pub success: Vec<u64>,
}

/// One refused entry in a batch cancel
#[derive(Debug, Clone, Deserialize)]
pub struct CancelFailure {
    /// GMO Coin message code
    pub message_code: String,
    /// Human-readable message text
    pub message_string: String,
    /// The order that could not be cancelled
    #[serde(rename = "orderId")]
    pub order_id: u64,
}

// ============================================================================
// Margin Trading Request Types
// ============================================================================

/// One position slice settled by a close order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlePosition {
    /// Position to settle
    pub position_id: u64,
    /// Size to close
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
}

/// Request to close specific positions via `/v1/closeOrder`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseOrderRequest {
    /// Instrument
    pub symbol: Symbol,
    /// Side of the CLOSE order (opposite of the position)
    pub side: OrderSide,
    /// MARKET, LIMIT, or STOP
    pub execution_type: ExecutionType,
    /// Time-in-force policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Order price (required for LIMIT and STOP)
    #[serde(with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Positions to settle
    pub settle_position: Vec<SettlePosition>,
    /// Cancel crossing resting orders first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_before: Option<bool>,
}

/// Request to close a whole side via `/v1/closeBulkOrder`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseBulkOrderRequest {
    /// Instrument
    pub symbol: Symbol,
    /// Side of the CLOSE order (opposite of the positions)
    pub side: OrderSide,
    /// MARKET, LIMIT, or STOP
    pub execution_type: ExecutionType,
    /// Order price (required for LIMIT and STOP)
    #[serde(with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

/// Request to move a position's losscut trigger via `/v1/changeLosscutPrice`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLosscutPriceRequest {
    /// Position to adjust
    pub position_id: u64,
    /// New losscut trigger price
    #[serde(with = "rust_decimal::serde::str")]
    pub losscut_price: Decimal,
}
