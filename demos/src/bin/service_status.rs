//! Demo 1: Service Status
//!
//! Showcases: the simplest possible public call
//!
//! Run: cargo run --bin service_status

use colored::*;
use gmocoin_rest::GmoRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  GMO COIN SERVICE STATUS".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = GmoRestClient::new();
    let status = client.get_status().await?;

    if status.is_open() {
        println!("{} Exchange is {}", "✓".green(), "OPEN".green().bold());
    } else {
        println!("{} Exchange is {:?}", "✗".yellow(), status);
    }

    Ok(())
}
