//! Demo 1: Global Marketplace Stats
//!
//! Showcases: Public endpoints, algorithm registry lookups
//!
//! Run: cargo run --bin global_stats

use colored::*;
use nicehash_rest::{algorithm_name, location_name, Algorithm, Location, NiceHashClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  NICEHASH GLOBAL STATS".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let version = NiceHashClient::get_api_version().await?;
    println!(
        "{} API version {}",
        "✓".green(),
        version["result"]["api_version"].as_str().unwrap_or("?")
    );

    let client = NiceHashClient::new()?;

    for location in Location::ALL {
        let body = client.get_global_current_stats(Some(location.code())).await?;
        let stats = body["result"]["stats"].as_array().cloned().unwrap_or_default();

        println!();
        println!(
            "  {} ({} algorithms)",
            location_name(location.code()).unwrap_or("?").white().bold(),
            stats.len()
        );
        println!("  {:<18} {:>14} {:>14}", "ALGORITHM", "SPEED", "PRICE");
        println!("  {}", "─".repeat(48));

        for entry in stats {
            let name = entry["algo"]
                .as_u64()
                .and_then(|code| u8::try_from(code).ok())
                .and_then(algorithm_name)
                .unwrap_or("unknown");
            println!(
                "  {:<18} {:>14} {:>14}",
                name.cyan(),
                entry["speed"].as_str().unwrap_or("-"),
                entry["price"].as_str().unwrap_or("-")
            );
        }
    }

    let orders = client
        .get_orders(Location::Europe.code(), Algorithm::DaggerHashimoto.code())
        .await?;
    let count = orders["result"]["orders"].as_array().map_or(0, Vec::len);
    println!();
    println!(
        "{} {} open {} orders in europe",
        "✓".green(),
        count,
        Algorithm::DaggerHashimoto
    );

    Ok(())
}
