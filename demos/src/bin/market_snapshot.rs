//! Demo 2: Market Snapshot
//!
//! Showcases: ticker rates, order book depth, and recent trades for one
//! instrument, with decimal accessors doing the price math.
//!
//! Run: cargo run --bin market_snapshot

use colored::*;
use gmocoin_rest::GmoRestClient;
use gmocoin_types::SpotSymbol;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let symbol = SpotSymbol::Btc;

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  MARKET SNAPSHOT - {}", symbol).cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = GmoRestClient::new();

    // Ticker
    let tickers = client.get_ticker(Some(symbol.into())).await?;
    if let Some(ticker) = tickers.first() {
        println!("{}", "--- Ticker ---".yellow());
        println!("  Last: ¥{}", ticker.last);
        println!("  Bid:  ¥{}", ticker.bid);
        println!("  Ask:  ¥{}", ticker.ask);
        if let Some(mid) = ticker.mid_price() {
            println!("  Mid:  ¥{}", mid);
        }
        println!("  24h volume: {}", ticker.volume);
        println!();
    }

    // Order book
    let books = client.get_order_books(symbol.into()).await?;
    println!("{}", "--- Order Book ---".yellow());
    println!("  Top Asks:");
    for level in books.asks.iter().take(3) {
        println!("    ¥{} x {}", level.price, level.size);
    }
    println!("  Top Bids:");
    for level in books.bids.iter().take(3) {
        println!("    ¥{} x {}", level.price, level.size);
    }
    if let Some(spread) = books.spread() {
        println!("  Spread: ¥{}", spread);
    }
    println!();

    // Recent trades
    let trades = client.get_trades(symbol.into(), None, Some(5)).await?;
    println!("{}", "--- Recent Trades ---".yellow());
    for trade in &trades.list {
        let side = match trade.side {
            gmocoin_types::OrderSide::Buy => "BUY ".green(),
            gmocoin_types::OrderSide::Sell => "SELL".red(),
        };
        println!("  {} ¥{} x {} at {}", side, trade.price, trade.size, trade.timestamp);
    }

    Ok(())
}
