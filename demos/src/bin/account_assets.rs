//! Demo 3: Account Assets
//!
//! Showcases: a signed private call. Requires GMO_API_KEY and
//! GMO_API_SECRET in the environment.
//!
//! Run: cargo run --bin account_assets

use colored::*;
use gmocoin_rest::{GmoRestClient, RestError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT ASSETS".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = match GmoRestClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!();
            println!("Set GMO_API_KEY and GMO_API_SECRET to run this demo:");
            println!("  export GMO_API_KEY='your-api-key'");
            println!("  export GMO_API_SECRET='your-api-secret'");
            return Ok(());
        }
    };

    match client.get_account_assets().await {
        Ok(assets) => {
            println!("{} {} assets", "✓".green(), assets.len());
            for asset in &assets {
                println!(
                    "  {}: {} (available {})",
                    asset.symbol.as_str().bold(),
                    asset.amount,
                    asset.available
                );
            }
        }
        Err(err) if err.is_transport() => {
            println!("{} Network problem, try again: {}", "✗".red(), err);
        }
        Err(RestError::Api { code, message }) => {
            println!("{} Exchange rejected the call: {} ({})", "✗".red(), message, code);
        }
        Err(err) => {
            println!("{} {}", "✗".red(), err);
        }
    }

    Ok(())
}
