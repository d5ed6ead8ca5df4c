//! Shared fixtures for envelope tests
//!
//! Response bodies as GMO Coin actually sends them, trimmed to one or two
//! entries each.

use gmocoin_rest::ApiResponse;
use serde::de::DeserializeOwned;

pub fn parse<T: DeserializeOwned>(json: &str) -> ApiResponse<T> {
    serde_json::from_str(json).expect("fixture should parse")
}

pub const STATUS_OPEN: &str = r#"{
  "status": 0,
  "data": {"status": "OPEN"},
  "responsetime": "2019-03-19T02:15:06.001Z"
}"#;

pub const STATUS_MAINTENANCE: &str = r#"{
  "status": 0,
  "data": {"status": "MAINTENANCE"},
  "responsetime": "2019-03-19T02:15:06.001Z"
}"#;

pub const ERROR_TWO_MESSAGES: &str = r#"{
  "status": 1,
  "messages": [
    {"message_code": "ERR-1", "message_string": "bad param"},
    {"message_code": "ERR-2", "message_string": "other"}
  ],
  "responsetime": "2019-03-19T02:15:06.001Z"
}"#;

pub const UNIT_ACK: &str = r#"{
  "status": 0,
  "responsetime": "2019-03-19T01:07:24.557Z"
}"#;

pub const ORDER_ID: &str = r#"{
  "status": 0,
  "data": "637000",
  "responsetime": "2019-03-19T02:15:06.108Z"
}"#;

pub const TICKER: &str = r#"{
  "status": 0,
  "data": [
    {
      "ask": "750760",
      "bid": "750600",
      "high": "762302",
      "last": "756662",
      "low": "704874",
      "symbol": "BTC",
      "timestamp": "2018-03-30T12:34:56.789Z",
      "volume": "194785.8484"
    }
  ],
  "responsetime": "2019-03-19T02:15:06.014Z"
}"#;

pub const ORDERBOOKS: &str = r#"{
  "status": 0,
  "data": {
    "asks": [
      {"price": "455659", "size": "0.1"},
      {"price": "455665", "size": "0.3"}
    ],
    "bids": [
      {"price": "455629", "size": "0.2"},
      {"price": "455621", "size": "0.4"}
    ],
    "symbol": "BTC"
  },
  "responsetime": "2019-03-19T02:15:06.026Z"
}"#;

pub const TRADES: &str = r#"{
  "status": 0,
  "data": {
    "pagination": {"currentPage": 1, "count": 30},
    "list": [
      {"price": "750760", "side": "BUY", "size": "0.1", "timestamp": "2018-03-30T12:34:56.789Z"},
      {"price": "750750", "side": "SELL", "size": "0.05", "timestamp": "2018-03-30T12:34:55.123Z"}
    ]
  },
  "responsetime": "2019-03-28T09:28:07.980Z"
}"#;

pub const ACCOUNT_MARGIN: &str = r#"{
  "status": 0,
  "data": {
    "actualProfitLoss": "5204923",
    "availableAmount": "5189523",
    "margin": "7298",
    "profitLoss": "8019"
  },
  "responsetime": "2019-03-19T02:15:06.051Z"
}"#;

pub const ACCOUNT_ASSETS: &str = r#"{
  "status": 0,
  "data": [
    {
      "amount": "993982448",
      "available": "993982448",
      "conversionRate": "1",
      "symbol": "BTC"
    },
    {
      "amount": "4.0002",
      "available": "4.0002",
      "conversionRate": "859614",
      "symbol": "ETH"
    }
  ],
  "responsetime": "2019-03-19T02:15:06.055Z"
}"#;

pub const ORDERS: &str = r#"{
  "status": 0,
  "data": {
    "list": [
      {
        "rootOrderId": 123456789,
        "orderId": 123456789,
        "symbol": "BTC",
        "side": "BUY",
        "orderType": "NORMAL",
        "executionType": "LIMIT",
        "settleType": "OPEN",
        "size": "1",
        "executedSize": "0.2",
        "price": "840000",
        "status": "CANCELED",
        "cancelType": "USER",
        "timeInForce": "FAS",
        "timestamp": "2019-03-19T02:15:06.059Z"
      },
      {
        "rootOrderId": 123456790,
        "orderId": 123456790,
        "symbol": "ETH_JPY",
        "side": "SELL",
        "orderType": "NORMAL",
        "executionType": "MARKET",
        "settleType": "OPEN",
        "size": "0.7",
        "executedSize": "0.7",
        "price": "0",
        "status": "EXECUTED",
        "timeInForce": "FAK",
        "timestamp": "2019-03-19T02:15:06.059Z"
      }
    ]
  },
  "responsetime": "2019-03-19T02:15:06.059Z"
}"#;

pub const EXECUTIONS: &str = r#"{
  "status": 0,
  "data": {
    "list": [
      {
        "executionId": 72123911,
        "orderId": 123456789,
        "symbol": "BTC",
        "side": "BUY",
        "settleType": "OPEN",
        "size": "0.7361",
        "price": "877404",
        "lossGain": "0",
        "fee": "323",
        "timestamp": "2019-03-19T02:15:06.081Z"
      }
    ]
  },
  "responsetime": "2019-03-19T02:15:06.082Z"
}"#;

pub const OPEN_POSITIONS: &str = r#"{
  "status": 0,
  "data": {
    "pagination": {"currentPage": 1, "count": 30},
    "list": [
      {
        "positionId": 1234567,
        "symbol": "ETH_JPY",
        "side": "BUY",
        "size": "0.22",
        "orderdSize": "0",
        "price": "876045",
        "lossGain": "14",
        "losscutPrice": "766540",
        "timestamp": "2019-03-19T02:15:06.094Z"
      }
    ]
  },
  "responsetime": "2019-03-19T02:15:06.095Z"
}"#;

pub const POSITION_SUMMARY: &str = r#"{
  "status": 0,
  "data": {
    "list": [
      {
        "averagePositionRate": "715656",
        "positionLossGain": "250675",
        "side": "BUY",
        "sumOrderQuantity": "2",
        "sumPositionQuantity": "11.6999",
        "symbol": "ETH_JPY"
      }
    ]
  },
  "responsetime": "2019-03-19T02:15:06.102Z"
}"#;

pub const CANCEL_ORDERS: &str = r#"{
  "status": 0,
  "data": {
    "failed": [
      {
        "message_code": "ERR-5122",
        "message_string": "The request is invalid due to the status of the specified order.",
        "orderId": 1
      }
    ],
    "success": [2, 3]
  },
  "responsetime": "2019-03-19T01:07:24.557Z"
}"#;
