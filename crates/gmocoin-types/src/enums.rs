//! Order, execution, and service status enums

use serde::{Deserialize, Serialize};

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Returns the side as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an order was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Placed by the account holder
    Normal,
    /// Forced liquidation by the exchange
    Losscut,
}

/// Execution style of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExecutionType {
    /// Execute immediately at the best available price
    Market,
    /// Execute at the specified price or better
    Limit,
    /// Trigger at the specified price
    Stop,
}

impl ExecutionType {
    /// Returns the execution type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::Stop => "STOP",
        }
    }
}

/// Whether an order opens or closes a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SettleType {
    /// Opens a new position
    Open,
    /// Settles an existing position
    Close,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Accepted, not yet on the book
    Waiting,
    /// Resting on the book
    Ordered,
    /// Amendment in flight
    Modifying,
    /// Cancellation in flight
    Cancelling,
    /// Cancelled
    Canceled,
    /// Fully executed
    Executed,
    /// Expired without executing
    Expired,
}

/// Why an order was cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancelType {
    /// Cancelled by the account holder
    User,
    /// Position losscut
    PositionLosscut,
    /// Insufficient balance
    InsufficientBalance,
    /// Insufficient margin
    InsufficientMargin,
    /// Account-level losscut
    AccountLosscut,
    /// Fill-and-kill order expired
    ExpiredFak,
    /// Fill-or-kill order expired
    ExpiredFok,
    /// Stop-or-kill order expired
    ExpiredSok,
}

/// Time-in-force policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Fill and kill - execute what is immediately fillable, cancel the rest
    Fak,
    /// Fill and store - rest on the book until filled or cancelled
    Fas,
    /// Fill or kill - execute fully and immediately or not at all
    Fok,
    /// Stop or kill - stop order variant of FOK
    Sok,
}

impl TimeInForce {
    /// Returns the policy as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fak => "FAK",
            Self::Fas => "FAS",
            Self::Fok => "FOK",
            Self::Sok => "SOK",
        }
    }
}

/// Exchange availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceStatus {
    /// The exchange is down for maintenance
    Maintenance,
    /// Maintenance finished, trading not yet open
    Preopen,
    /// Trading is open
    Open,
}

impl ServiceStatus {
    /// Returns true if orders can currently be placed
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}
