//! Types for public REST API endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;

/// Server time response.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeInfo {
    /// ISO 8601 timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub iso: OffsetDateTime,
    /// Unix timestamp in seconds.
    pub epoch: f64,
}

/// A currency supported by Coinbase.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyInfo {
    /// Currency code (e.g. "USD").
    pub id: String,
    /// Currency name.
    pub name: String,
    /// Minimum amount that can be transferred.
    pub min_size: Decimal,
}

/// Exchange rates for a base currency.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRates {
    /// Base currency.
    pub currency: String,
    /// Rate per currency code.
    pub rates: HashMap<String, Decimal>,
}

/// A buy, sell or spot price.
#[derive(Debug, Clone, Deserialize)]
pub struct Price {
    /// Base (crypto) currency.
    pub base: String,
    /// Price amount.
    pub amount: Decimal,
    /// Quote (fiat) currency.
    pub currency: String,
}

/// Price kinds served under `/prices/{base}-{fiat}/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceKind {
    /// Total price to buy one unit, including fees.
    Buy,
    /// Total price to sell one unit, including fees.
    Sell,
    /// Current market price.
    Spot,
}

impl PriceKind {
    /// Path segment of the price kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceKind::Buy => "buy",
            PriceKind::Sell => "sell",
            PriceKind::Spot => "spot",
        }
    }
}
