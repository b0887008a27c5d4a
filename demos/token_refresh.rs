//! Example: Automatic access token refresh.
//!
//! Requests failing with 401 refresh the token pair once and are retried.
//! The listener receives the new pair so it can be persisted.
//!
//! Run with:
//! COINBASE_CLIENT_ID=... COINBASE_CLIENT_SECRET=... COINBASE_ACCESS_TOKEN=... \
//! COINBASE_REFRESH_TOKEN=... RUST_LOG=coinbase_api_client=debug cargo run --example token_refresh

use std::sync::Arc;

use coinbase_api_client::auth::{
    ClientCredentials, InMemoryTokenStore, TokenEvent, TokenRefreshStrategy,
};
use coinbase_api_client::rest::CoinbaseClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match ClientCredentials::try_from_env() {
        Some(credentials) => credentials,
        None => {
            println!("Set COINBASE_CLIENT_ID and COINBASE_CLIENT_SECRET to run this example.");
            return Ok(());
        }
    };
    let (access_token, refresh_token) = match (
        std::env::var("COINBASE_ACCESS_TOKEN"),
        std::env::var("COINBASE_REFRESH_TOKEN"),
    ) {
        (Ok(access), Ok(refresh)) => (access, refresh),
        _ => {
            println!("Set COINBASE_ACCESS_TOKEN and COINBASE_REFRESH_TOKEN to run this example.");
            return Ok(());
        }
    };

    let store = InMemoryTokenStore::new().with_listener(|event| match event {
        TokenEvent::Updated(token) => {
            println!("New tokens issued, expire in {}s", token.expires_in)
        }
        TokenEvent::Cleared => println!("Tokens cleared"),
    });

    let client = CoinbaseClient::builder()
        .token_store(Arc::new(store))
        .access_token(access_token)
        .refresh_strategy(TokenRefreshStrategy::refresh(credentials, refresh_token))
        .build();

    // Concurrent requests with an expired token share a single refresh.
    let (user, auth) = tokio::join!(client.get_current_user(), client.get_auth_info());
    println!("User: {}", user?.id);
    println!("Scopes: {}", auth?.scopes.join(", "));

    Ok(())
}
