//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::CoinbaseError;
use crate::rest::endpoints::public;
use crate::rest::{ApiRequest, CoinbaseClient};

impl CoinbaseClient {
    /// Get the API server time.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinbase_api_client::rest::CoinbaseClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinbaseClient::new();
    ///     let time = client.get_time().await?;
    ///     println!("Server time: {} ({})", time.iso, time.epoch);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_time(&self) -> Result<TimeInfo, CoinbaseError> {
        self.fetch(ApiRequest::get(public::TIME).public()).await
    }

    /// List known currencies.
    pub async fn get_currencies(&self) -> Result<Vec<CurrencyInfo>, CoinbaseError> {
        self.fetch(ApiRequest::get(public::CURRENCIES).public()).await
    }

    /// Get current exchange rates.
    ///
    /// # Arguments
    ///
    /// * `currency` - Base currency (defaults to USD on the server).
    pub async fn get_exchange_rates(
        &self,
        currency: Option<&str>,
    ) -> Result<ExchangeRates, CoinbaseError> {
        let mut request = ApiRequest::get(public::EXCHANGE_RATES).public();
        if let Some(currency) = currency {
            request = request.query("currency", currency);
        }
        self.fetch(request).await
    }

    /// Get the price of one unit of `base` in `fiat`.
    pub async fn get_price(
        &self,
        kind: PriceKind,
        base: &str,
        fiat: &str,
        date: Option<time::Date>,
    ) -> Result<Price, CoinbaseError> {
        let mut request = ApiRequest::get(public::price(base, fiat, kind.as_str())).public();
        if let Some(date) = date {
            request = request.query("date", date.to_string());
        }
        self.fetch(request).await
    }

    /// Get the total price to buy one unit of `base`.
    pub async fn get_buy_price(&self, base: &str, fiat: &str) -> Result<Price, CoinbaseError> {
        self.get_price(PriceKind::Buy, base, fiat, None).await
    }

    /// Get the total price to sell one unit of `base`.
    pub async fn get_sell_price(&self, base: &str, fiat: &str) -> Result<Price, CoinbaseError> {
        self.get_price(PriceKind::Sell, base, fiat, None).await
    }

    /// Get the spot price of `base`, optionally on a past `date`.
    pub async fn get_spot_price(
        &self,
        base: &str,
        fiat: &str,
        date: Option<time::Date>,
    ) -> Result<Price, CoinbaseError> {
        self.get_price(PriceKind::Spot, base, fiat, date).await
    }

    /// Get spot prices of all supported crypto currencies in `fiat`.
    pub async fn get_spot_prices(
        &self,
        fiat: &str,
        date: Option<time::Date>,
    ) -> Result<Vec<Price>, CoinbaseError> {
        let mut request = ApiRequest::get(public::spot_for(fiat)).public();
        if let Some(date) = date {
            request = request.query("date", date.to_string());
        }
        self.fetch(request).await
    }
}
