//! # Coinbase API Client
//!
//! An async Rust client library for the Coinbase wallet REST API (v2).
//!
//! ## Features
//!
//! - Users, accounts, transactions, addresses, payment methods and trades
//! - OAuth2 code exchange, revocation and transparent token refresh
//! - A single shared refresh when many requests expire at once
//! - Cursor pagination and `expand[]` support
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinbase_api_client::rest::CoinbaseClient;
//! use coinbase_api_client::types::PaginationParameters;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinbaseClient::builder().access_token("access_token").build();
//!
//!     let accounts = client.list_accounts(&PaginationParameters::default()).await?;
//!     for account in &accounts.data {
//!         println!("{}: {:?}", account.id, account.balance);
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::CoinbaseError;
pub use rest::CoinbaseClient;

/// Result type alias using CoinbaseError
pub type Result<T> = std::result::Result<T, CoinbaseError>;
