//! Instrument symbols for spot and leverage trading
//!
//! GMO Coin keeps two disjoint identifier sets: bare currency codes for
//! spot trading ("BTC") and `_JPY`-suffixed pairs for leverage trading
//! ("ETH_JPY"). Endpoints that only exist for margin accounts take a
//! [`LeverageSymbol`]; everything else takes a [`Symbol`].

use serde::{Deserialize, Serialize};

/// Spot trading instruments (actual delivery)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpotSymbol {
    /// Bitcoin
    Btc,
    /// Ethereum
    Eth,
    /// Bitcoin Cash
    Bch,
    /// Litecoin
    Ltc,
    /// Ripple
    Xrp,
}

impl SpotSymbol {
    /// Returns the symbol as used in API requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Eth => "ETH",
            Self::Bch => "BCH",
            Self::Ltc => "LTC",
            Self::Xrp => "XRP",
        }
    }
}

impl std::fmt::Display for SpotSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leverage trading instruments (margin, JPY-settled)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeverageSymbol {
    /// Ethereum / Japanese Yen
    EthJpy,
    /// Bitcoin Cash / Japanese Yen
    BchJpy,
    /// Litecoin / Japanese Yen
    LtcJpy,
    /// Ripple / Japanese Yen
    XrpJpy,
}

impl LeverageSymbol {
    /// Returns the symbol as used in API requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EthJpy => "ETH_JPY",
            Self::BchJpy => "BCH_JPY",
            Self::LtcJpy => "LTC_JPY",
            Self::XrpJpy => "XRP_JPY",
        }
    }
}

impl std::fmt::Display for LeverageSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any tradable instrument, spot or leverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Symbol {
    /// Spot instrument
    Spot(SpotSymbol),
    /// Leverage instrument
    Leverage(LeverageSymbol),
}

impl Symbol {
    /// Returns the symbol as used in API requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot(s) => s.as_str(),
            Self::Leverage(s) => s.as_str(),
        }
    }

    /// Returns true if this is a leverage (margin) instrument
    pub fn is_leverage(&self) -> bool {
        matches!(self, Self::Leverage(_))
    }
}

impl From<SpotSymbol> for Symbol {
    fn from(symbol: SpotSymbol) -> Self {
        Self::Spot(symbol)
    }
}

impl From<LeverageSymbol> for Symbol {
    fn from(symbol: LeverageSymbol) -> Self {
        Self::Leverage(symbol)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
