//! Demo 2: Account Overview
//!
//! Showcases: Private endpoints, credentials from the environment
//!
//! Run: NICEHASH_API_ID=... NICEHASH_API_KEY=... cargo run --bin my_orders

use colored::*;
use nicehash_rest::{Algorithm, ApiResponse, Balance, Credentials, Location, NiceHashClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  NICEHASH ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = NiceHashClient::with_credentials(Credentials::from_env()?)?;
    if !client.has_credentials() {
        println!("{} API id or key is empty", "✗".red());
        return Ok(());
    }

    let body = client.get_my_balance().await?;
    match ApiResponse::<Balance>::from_value(body.clone()) {
        Ok(response) => {
            let balance = response.into_result();
            println!("{} Confirmed: {} BTC", "✓".green(), balance.balance_confirmed);
            println!("{} Pending:   {} BTC", "✓".green(), balance.balance_pending);
        }
        Err(_) => println!("{} Unexpected balance response: {}", "✗".red(), body),
    }

    println!();
    for location in Location::ALL {
        for algo in [Algorithm::Sha256, Algorithm::DaggerHashimoto, Algorithm::Equihash] {
            let body = client.get_my_orders(location.code(), algo.code()).await?;
            let orders = body["result"]["orders"].as_array().map_or(0, Vec::len);
            println!("  {:<8} {:<18} {:>4} orders", location.name(), algo.to_string().cyan(), orders);
        }
    }

    Ok(())
}
