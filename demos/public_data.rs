//! Example: Fetching public price data from Coinbase.
//!
//! No access token is needed for these endpoints.
//!
//! Run with: cargo run --example public_data

use coinbase_api_client::rest::CoinbaseClient;
use coinbase_api_client::rest::public::PriceKind;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = CoinbaseClient::new();

    println!("=== Server Time ===");
    let time = client.get_time().await?;
    println!("ISO: {}", time.iso);
    println!("Epoch: {}", time.epoch);

    println!("\n=== Prices ===");
    for kind in [PriceKind::Buy, PriceKind::Sell, PriceKind::Spot] {
        let price = client.get_price(kind, "BTC", "USD", None).await?;
        println!("{}: {} {}", kind.as_str(), price.amount, price.currency);
    }

    println!("\n=== Exchange Rates (BTC) ===");
    let rates = client.get_exchange_rates(Some("BTC")).await?;
    for code in ["USD", "EUR", "GBP"] {
        if let Some(rate) = rates.rates.get(code) {
            println!("{}: {}", code, rate);
        }
    }

    println!("\n=== Currencies ===");
    let currencies = client.get_currencies().await?;
    for currency in currencies.iter().take(5) {
        println!("{} ({}), min size {}", currency.id, currency.name, currency.min_size);
    }

    Ok(())
}
