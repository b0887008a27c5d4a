//! OAuth2 token endpoints: code exchange, refresh and revocation.
//!
//! Token endpoints live outside `/v2`, answer without the response envelope
//! and report errors in the OAuth format. They are never retried by the
//! refresh interceptor.

mod types;

pub use types::*;

use crate::auth::{TokenStore, UserToken};
use crate::error::CoinbaseError;
use crate::rest::endpoints::oauth;
use crate::rest::{ApiRequest, CoinbaseClient};

impl CoinbaseClient {
    /// Exchange an authorization code for tokens and store them.
    ///
    /// Requires client credentials from the refresh strategy.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<UserToken, CoinbaseError> {
        let credentials = self
            .credentials()
            .ok_or(CoinbaseError::MissingCredentials)?;

        let request = ApiRequest::token_endpoint(oauth::TOKEN).json(&AuthorizationCodeParams {
            grant_type: "authorization_code",
            code,
            client_id: &credentials.client_id,
            client_secret: credentials.expose_secret(),
            redirect_uri,
        })?;
        let token: UserToken = self.fetch_raw(request).await?;

        self.token_store().update(&token);
        tracing::info!("Authorization code exchanged, scopes: {:?}", token.scope);
        Ok(token)
    }

    /// Refresh the access token now.
    ///
    /// Joins a refresh already in flight. The new tokens are written to the
    /// token store.
    pub async fn refresh_tokens(&self) -> Result<(), CoinbaseError> {
        self.interceptor().refresh_now().await
    }

    /// Revoke the current access token and clear the token store.
    pub async fn revoke_token(&self) -> Result<(), CoinbaseError> {
        let access_token = self.access_token().unwrap_or_default();
        if access_token.is_empty() {
            return Err(CoinbaseError::EmptyAccessToken {
                path: oauth::REVOKE.to_string(),
            });
        }

        let request = ApiRequest::token_endpoint(oauth::REVOKE).json(&RevokeParams {
            token: &access_token,
        })?;
        self.send_empty(request).await?;

        self.token_store().clear();
        tracing::info!("Access token revoked");
        Ok(())
    }
}
