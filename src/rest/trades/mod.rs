//! Buys, sells, deposits and withdrawals.
//!
//! The four resources share one set of generic methods; the trade type
//! selects the collection:
//!
//! ```rust,no_run
//! use coinbase_api_client::rest::CoinbaseClient;
//! use coinbase_api_client::rest::trades::{Buy, BuySellParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinbaseClient::builder().access_token("access_token").build();
//!
//!     // Create a pending buy and commit it
//!     let params = BuySellParams::amount("0.01", "BTC").commit(false);
//!     let buy = client.place_trade::<Buy>("account_id", &params, &[]).await?;
//!     if let Some(id) = &buy.base.id {
//!         let buy = client.commit_trade::<Buy>("account_id", id, &[]).await?;
//!         println!("Committed: {:?}", buy.base.status);
//!     }
//!     Ok(())
//! }
//! ```

mod types;

pub use types::*;

use crate::error::CoinbaseError;
use crate::rest::endpoints::private;
use crate::rest::{ApiRequest, CoinbaseClient};
use crate::types::{PaginationParameters, ResponseModel};

impl CoinbaseClient {
    /// List trades of kind `T` on an account.
    pub async fn list_trades<T: Trade>(
        &self,
        account_id: &str,
        expand: &[TradeExpandOption],
        page: &PaginationParameters,
    ) -> Result<ResponseModel<Vec<T>>, CoinbaseError> {
        let request = ApiRequest::get(private::trades(account_id, T::KIND.as_str()))
            .expand(expand)
            .page(page);
        self.fetch_page(request).await
    }

    /// Get a trade of kind `T`.
    pub async fn get_trade<T: Trade>(
        &self,
        account_id: &str,
        trade_id: &str,
        expand: &[TradeExpandOption],
    ) -> Result<T, CoinbaseError> {
        let request =
            ApiRequest::get(private::trade(account_id, T::KIND.as_str(), trade_id)).expand(expand);
        self.fetch(request).await
    }

    /// Place a trade of kind `T`.
    pub async fn place_trade<T: Trade>(
        &self,
        account_id: &str,
        params: &T::Params,
        expand: &[TradeExpandOption],
    ) -> Result<T, CoinbaseError> {
        let request = ApiRequest::post(private::trades(account_id, T::KIND.as_str()))
            .expand(expand)
            .json(params)?;
        self.fetch(request).await
    }

    /// Commit a pending trade of kind `T`.
    pub async fn commit_trade<T: Trade>(
        &self,
        account_id: &str,
        trade_id: &str,
        expand: &[TradeExpandOption],
    ) -> Result<T, CoinbaseError> {
        let path = format!(
            "{}/commit",
            private::trade(account_id, T::KIND.as_str(), trade_id)
        );
        self.fetch(ApiRequest::post(path).expand(expand)).await
    }
}
