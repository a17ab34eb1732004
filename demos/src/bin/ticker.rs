//! Demo 1: Market Ticker
//!
//! Showcases: Public market data without credentials
//!
//! Run: cargo run --bin ticker [PAIR...]

use colored::*;
use poloniex_sdk::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut pairs: Vec<String> = std::env::args().skip(1).map(|p| p.to_uppercase()).collect();
    if pairs.is_empty() {
        pairs = vec!["USDT_BTC".into(), "BTC_ETH".into(), "BTC_LTC".into(), "BTC_XMR".into()];
    }

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  POLONIEX TICKER".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = Poloniex::builder().build()?;
    let ticker = client.public().ticker().await?;

    println!(
        "  {:<12} {:>16} {:>16} {:>10}",
        "PAIR".bold(),
        "LAST".bold(),
        "24H VOLUME".bold(),
        "CHANGE".bold()
    );

    for pair in &pairs {
        let Some(entry) = ticker.get(pair) else {
            println!("  {:<12} {}", pair, "not listed".red());
            continue;
        };

        let last = entry["last"].as_str().unwrap_or("-");
        let volume = entry["baseVolume"].as_str().unwrap_or("-");
        let change: f64 = entry["percentChange"]
            .as_str()
            .and_then(|c| c.parse().ok())
            .unwrap_or_default();

        let change = format!("{:+.2}%", change * 100.0);
        let change = if change.starts_with('-') {
            change.red()
        } else {
            change.green()
        };

        println!("  {:<12} {:>16} {:>16} {:>10}", pair, last, volume, change);
    }

    println!();
    Ok(())
}
