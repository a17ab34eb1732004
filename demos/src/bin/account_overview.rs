//! Demo 3: Account Overview
//!
//! Showcases: Authenticated requests, cached balances, open orders
//!
//! Requires POLONIEX_API_KEY and POLONIEX_API_SECRET.
//!
//! Run: cargo run --bin account_overview

use colored::*;
use poloniex_sdk::prelude::*;
use rust_decimal::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = match Poloniex::builder().credentials_from_env() {
        Ok(builder) => builder.build()?,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("  Set POLONIEX_API_KEY and POLONIEX_API_SECRET to run this demo.");
            return Ok(());
        }
    };
    println!("{} Credentials loaded", "✓".green());

    // Non-zero exchange balances
    let balances = client.balances(false).await?;
    println!("\n  {}", "BALANCES".bold());
    if let Some(balances) = balances.as_object() {
        for (currency, amount) in balances {
            let amount = amount
                .as_str()
                .and_then(|a| Decimal::from_str(a).ok())
                .unwrap_or_default();
            if !amount.is_zero() {
                println!("  {:<8} {:>20}", currency, amount);
            }
        }
    }

    // Total BTC value across every account
    let complete = client.complete_balances(Some(Account::All), false).await?;
    let btc_total: Decimal = complete
        .as_object()
        .map(|entries| {
            entries
                .values()
                .filter_map(|e| e["btcValue"].as_str())
                .filter_map(|v| Decimal::from_str(v).ok())
                .sum()
        })
        .unwrap_or_default();

    let rate = client.ticker_btc_rate().await?.unwrap_or_default();
    println!(
        "\n  {} {} BTC (~${:.2})",
        "TOTAL:".yellow(),
        btc_total.round_dp(8),
        btc_total * rate
    );

    // Open orders
    let orders = client.open_orders().await?;
    println!("\n  {}", "OPEN ORDERS".bold());
    if orders.is_empty() {
        println!("  none");
    }
    for (pair, list) in &orders {
        for order in list {
            println!(
                "  {:<10} {:<5} {} @ {}",
                pair,
                order["type"].as_str().unwrap_or("?"),
                order["amount"].as_str().unwrap_or("?"),
                order["rate"].as_str().unwrap_or("?")
            );
        }
    }

    println!();
    Ok(())
}
