//! Envelope and payload decoding tests
//!
//! Runs every response shape the client decodes through the same
//! `ApiResponse` path the dispatcher uses, against captured wire fixtures.

mod common;

use common::*;
use gmocoin_rest::{
    AccountMargin, Asset, CancelOrdersResult, Execution, ExchangeStatus, List, Order, OrderBooks,
    PaginatedList, Position, PositionSummary, RestError, Ticker, Trade,
};
use gmocoin_types::{
    CancelType, ExecutionType, LeverageSymbol, OrderSide, OrderStatus, ServiceStatus, SpotSymbol,
    Symbol, TimeInForce,
};
use rust_decimal_macros::dec;

// =============================================================================
// Envelope Semantics
// =============================================================================

#[test]
fn test_status_open() {
    let data: ExchangeStatus = parse(STATUS_OPEN).into_result().unwrap();
    assert_eq!(data.status, ServiceStatus::Open);
    assert!(data.status.is_open());
}

#[test]
fn test_status_maintenance() {
    let data: ExchangeStatus = parse(STATUS_MAINTENANCE).into_result().unwrap();
    assert_eq!(data.status, ServiceStatus::Maintenance);
}

#[test]
fn test_error_surfaces_first_message_only() {
    let result = parse::<ExchangeStatus>(ERROR_TWO_MESSAGES).into_result();

    match result {
        Err(RestError::Api { code, message }) => {
            assert_eq!(code, "ERR-1");
            assert_eq!(message, "bad param");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[test]
fn test_error_is_application_not_transport() {
    let err = parse::<ExchangeStatus>(ERROR_TWO_MESSAGES)
        .into_result()
        .unwrap_err();
    assert!(!err.is_transport());
    assert!(!err.is_configuration());
}

#[test]
fn test_unit_acknowledgement() {
    let response = parse::<serde_json::Value>(UNIT_ACK);
    assert!(response.is_success());
    assert!(response.into_unit().is_ok());
}

#[test]
fn test_unit_endpoint_still_fails_on_messages() {
    let result = parse::<serde_json::Value>(ERROR_TWO_MESSAGES).into_unit();
    assert!(matches!(result, Err(RestError::Api { .. })));
}

#[test]
fn test_order_id_payload_is_a_string() {
    let order_id: String = parse(ORDER_ID).into_result().unwrap();
    assert_eq!(order_id, "637000");
}

// =============================================================================
// Market Data Payloads
// =============================================================================

#[test]
fn test_ticker_payload() {
    let tickers: Vec<Ticker> = parse(TICKER).into_result().unwrap();
    assert_eq!(tickers.len(), 1);

    let ticker = &tickers[0];
    assert_eq!(ticker.symbol, Symbol::Spot(SpotSymbol::Btc));
    assert_eq!(ticker.ask_price(), Some(dec!(750760)));
    assert_eq!(ticker.bid_price(), Some(dec!(750600)));
    assert_eq!(ticker.mid_price(), Some(dec!(750680)));
}

#[test]
fn test_orderbooks_payload() {
    let books: OrderBooks = parse(ORDERBOOKS).into_result().unwrap();

    assert_eq!(books.asks.len(), 2);
    assert_eq!(books.bids.len(), 2);
    assert_eq!(books.best_ask(), Some(dec!(455659)));
    assert_eq!(books.best_bid(), Some(dec!(455629)));
    assert_eq!(books.spread(), Some(dec!(30)));
}

#[test]
fn test_trades_pagination() {
    let trades: PaginatedList<Trade> = parse(TRADES).into_result().unwrap();

    assert_eq!(trades.pagination.current_page, 1);
    assert_eq!(trades.pagination.count, 30);
    assert_eq!(trades.list.len(), 2);
    assert_eq!(trades.list[0].side, OrderSide::Buy);
    assert_eq!(trades.list[1].side, OrderSide::Sell);
}

// =============================================================================
// Account Payloads
// =============================================================================

#[test]
fn test_account_margin_payload() {
    let margin: AccountMargin = parse(ACCOUNT_MARGIN).into_result().unwrap();

    assert_eq!(margin.actual_profit_loss, "5204923");
    assert_eq!(margin.available_amount, "5189523");
    assert_eq!(margin.margin, "7298");
    assert_eq!(margin.profit_loss, "8019");
}

#[test]
fn test_account_assets_payload() {
    let assets: Vec<Asset> = parse(ACCOUNT_ASSETS).into_result().unwrap();

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].symbol, SpotSymbol::Btc);
    assert_eq!(assets[1].symbol, SpotSymbol::Eth);
    assert_eq!(assets[1].conversion_rate, "859614");
}

#[test]
fn test_orders_payload() {
    let orders: List<Order> = parse(ORDERS).into_result().unwrap();
    assert_eq!(orders.list.len(), 2);

    let cancelled = &orders.list[0];
    assert_eq!(cancelled.symbol, Symbol::Spot(SpotSymbol::Btc));
    assert_eq!(cancelled.status, OrderStatus::Canceled);
    assert_eq!(cancelled.cancel_type, Some(CancelType::User));
    assert_eq!(cancelled.time_in_force, TimeInForce::Fas);

    let executed = &orders.list[1];
    assert_eq!(executed.symbol, Symbol::Leverage(LeverageSymbol::EthJpy));
    assert_eq!(executed.execution_type, ExecutionType::Market);
    assert_eq!(executed.status, OrderStatus::Executed);
    assert_eq!(executed.cancel_type, None);
}

#[test]
fn test_executions_payload() {
    let executions: List<Execution> = parse(EXECUTIONS).into_result().unwrap();

    let execution = &executions.list[0];
    assert_eq!(execution.execution_id, 72123911);
    assert_eq!(execution.order_id, 123456789);
    assert_eq!(execution.fee, "323");
}

// =============================================================================
// Margin Payloads
// =============================================================================

#[test]
fn test_open_positions_payload() {
    let positions: PaginatedList<Position> = parse(OPEN_POSITIONS).into_result().unwrap();

    let position = &positions.list[0];
    assert_eq!(position.position_id, 1234567);
    assert_eq!(position.symbol, LeverageSymbol::EthJpy);
    // Maps the "orderdSize" wire spelling
    assert_eq!(position.ordered_size, "0");
    assert_eq!(position.losscut_price, "766540");
}

#[test]
fn test_position_summary_payload() {
    let summary: List<PositionSummary> = parse(POSITION_SUMMARY).into_result().unwrap();

    let entry = &summary.list[0];
    assert_eq!(entry.side, OrderSide::Buy);
    assert_eq!(entry.sum_position_quantity, "11.6999");
    assert_eq!(entry.symbol, "ETH_JPY");
}

#[test]
fn test_cancel_orders_partial_failure() {
    let result: CancelOrdersResult = parse(CANCEL_ORDERS).into_result().unwrap();

    assert_eq!(result.success, vec![2, 3]);
    assert_eq!(result.failed.len(), 1);
    assert_eq!(result.failed[0].order_id, 1);
    assert_eq!(result.failed[0].message_code, "ERR-5122");
}
