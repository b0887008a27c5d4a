//! Authentication module for the Coinbase API.
//!
//! This module provides:
//! - OAuth2 client credentials with secure secret storage
//! - Token types and the token store holding the current access/refresh pair
//! - Transparent access token refresh for expired tokens

mod credentials;
mod refresh;
mod token;
mod token_store;

pub use credentials::ClientCredentials;
pub use refresh::TokenRefreshInterceptor;
pub use token::{TokenRefreshStrategy, UserToken};
pub use token_store::{InMemoryTokenStore, TokenEvent, TokenListener, TokenStore};
