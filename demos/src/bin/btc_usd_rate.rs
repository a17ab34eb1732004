//! Demo 2: BTC/USD Rate
//!
//! Showcases: Rates derived from the ticker and from the order book
//!
//! Run: cargo run --bin btc_usd_rate

use colored::*;
use poloniex_sdk::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const SAMPLES: usize = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  BTC/USD RATE".cyan().bold());
    println!("{}", "  Ticker vs. order book estimate".cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = Poloniex::builder().build()?;

    for _ in 0..SAMPLES {
        let ticker = client.ticker_btc_rate().await?;
        let estimate = client.estimated_btc_rate().await?;

        let time = chrono::Local::now().format("%H:%M:%S");
        match ticker {
            Some(last) => {
                let diff = estimate - last;
                println!(
                    "  [{}] {} ${:.2}  {} ${:.2}  {} {:.2}",
                    time,
                    "TICKER:".yellow(),
                    last,
                    "BOOK:".yellow(),
                    estimate,
                    "DIFF:".green(),
                    diff
                );
            }
            None => println!(
                "  [{}] {} {}  {} ${:.2}",
                time,
                "TICKER:".yellow(),
                "unavailable".red(),
                "BOOK:".yellow(),
                estimate
            ),
        }

        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    println!();
    Ok(())
}
