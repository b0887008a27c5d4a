//! Coinbase wallet REST API client.
//!
//! Requests are described by [`ApiRequest`] and issued by a
//! [`RequestExecutor`]. The [`CoinbaseClient`] stacks the executors:
//!
//! ```text
//! CoinbaseClient -> TokenRefreshInterceptor -> HttpExecutor -> reqwest-middleware
//! ```
//!
//! Typed resource methods live on [`CoinbaseClient`], grouped by resource:
//! [`public`] (no token), [`private`] (users, accounts, transactions,
//! addresses, payment methods), [`trades`] (buys, sells, deposits,
//! withdrawals) and [`oauth`] (token exchange and revocation).

mod client;
pub mod endpoints;
mod executor;
pub mod oauth;
pub mod private;
pub mod public;
mod request;
pub mod trades;

pub use client::{CoinbaseClient, CoinbaseClientBuilder};
pub use executor::{HttpExecutor, RawResponse, RequestExecutor};
pub use request::{ApiFamily, ApiRequest, ErrorFormat};
