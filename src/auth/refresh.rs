//! Transparent access token refresh.
//!
//! [`TokenRefreshInterceptor`] wraps any [`RequestExecutor`]. When a request
//! fails with HTTP 401 it refreshes the access token and retries the request
//! once. Concurrent requests that fail together share a single refresh:
//!
//! - the refresh token is read from the store before each request is sent;
//! - the first request to see a 401 spawns the refresh and records it as
//!   pending, keyed by the refresh token it observed;
//! - later requests join the pending refresh, or skip straight to their
//!   retry when the store already holds a newer refresh token;
//! - the refresh runs as its own task, so a caller giving up does not
//!   cancel it for everyone else.
//!
//! A failed refresh is reported to every waiting request and is not retried.

use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::auth::{ClientCredentials, TokenStore, UserToken};
use crate::error::CoinbaseError;
use crate::rest::endpoints::oauth;
use crate::rest::{ApiRequest, RawResponse, RequestExecutor};

type RefreshOutcome = Result<(), Arc<CoinbaseError>>;

struct PendingRefresh {
    /// Refresh token the refresh was started with.
    observed: String,
    outcome: Shared<BoxFuture<'static, RefreshOutcome>>,
}

#[derive(Serialize)]
struct RefreshTokenParams<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
}

/// Build the token endpoint request exchanging `refresh_token` for new tokens.
pub(crate) fn refresh_request(
    credentials: &ClientCredentials,
    refresh_token: &str,
) -> Result<ApiRequest, CoinbaseError> {
    ApiRequest::token_endpoint(oauth::TOKEN).json(&RefreshTokenParams {
        grant_type: "refresh_token",
        client_id: &credentials.client_id,
        client_secret: credentials.expose_secret(),
        refresh_token,
    })
}

async fn request_token<E: RequestExecutor>(
    executor: &E,
    credentials: &ClientCredentials,
    refresh_token: &str,
) -> Result<UserToken, CoinbaseError> {
    let request = refresh_request(credentials, refresh_token)?;
    executor.execute(&request).await?.json()
}

/// Executor decorator that refreshes expired access tokens.
///
/// Without credentials the interceptor passes every outcome through
/// unchanged.
pub struct TokenRefreshInterceptor<E> {
    inner: Arc<E>,
    tokens: Arc<dyn TokenStore>,
    credentials: Option<ClientCredentials>,
    pending: Arc<Mutex<Option<PendingRefresh>>>,
}

impl<E: RequestExecutor> TokenRefreshInterceptor<E> {
    /// Wrap `inner`, refreshing tokens held in `tokens` with `credentials`.
    pub fn new(
        inner: E,
        tokens: Arc<dyn TokenStore>,
        credentials: Option<ClientCredentials>,
    ) -> Self {
        Self {
            inner: Arc::new(inner),
            tokens,
            credentials,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Get a reference to the inner executor.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Get the token store.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Whether refresh credentials are configured.
    pub fn can_refresh(&self) -> bool {
        self.credentials.is_some()
    }

    /// Refresh the tokens now, sharing any refresh already in flight.
    pub async fn refresh_now(&self) -> Result<(), CoinbaseError> {
        let observed = self.tokens.refresh_token();
        self.refresh(observed).await
    }

    fn should_refresh(&self, request: &ApiRequest, error: &CoinbaseError) -> bool {
        error.is_unauthorized() && !request.is_token_endpoint() && self.credentials.is_some()
    }

    /// Ensure the refresh token `observed` has been exchanged.
    ///
    /// Returns once a refresh started with `observed` has completed, or
    /// immediately if the store no longer holds `observed`.
    async fn refresh(&self, observed: Option<String>) -> Result<(), CoinbaseError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(CoinbaseError::MissingCredentials)?;

        let observed = match observed {
            Some(token) if !token.is_empty() => token,
            _ => {
                tracing::warn!("Token refresh failed: {}", CoinbaseError::EmptyRefreshToken);
                return Err(CoinbaseError::EmptyRefreshToken);
            }
        };

        let outcome = {
            let mut slot = self.pending.lock().await;
            match slot.as_ref() {
                Some(pending) => {
                    tracing::debug!("Joining token refresh in flight");
                    pending.outcome.clone()
                }
                None if self.tokens.refresh_token().as_deref() != Some(observed.as_str()) => {
                    tracing::debug!("Refresh token already rotated, skipping refresh");
                    return Ok(());
                }
                None => {
                    let outcome = self.spawn_refresh(credentials.clone(), observed.clone());
                    *slot = Some(PendingRefresh {
                        observed,
                        outcome: outcome.clone(),
                    });
                    outcome
                }
            }
        };

        outcome.await.map_err(CoinbaseError::RefreshFailed)
    }

    /// Start the refresh task. Must be called with the pending slot locked.
    fn spawn_refresh(
        &self,
        credentials: ClientCredentials,
        observed: String,
    ) -> Shared<BoxFuture<'static, RefreshOutcome>> {
        let inner = Arc::clone(&self.inner);
        let tokens = Arc::clone(&self.tokens);
        let pending = Arc::clone(&self.pending);
        let slot_key = observed.clone();

        let task = tokio::spawn(async move {
            tracing::info!("Refreshing access token");

            let token = request_token(&*inner, &credentials, &observed).await?;
            tokens.update(&token);
            tracing::info!("Access token refreshed, expires in {}s", token.expires_in);
            Ok::<(), CoinbaseError>(())
        });

        // Clears the slot however the refresh task ends, panics included.
        let supervisor = tokio::spawn(async move {
            let outcome = match task.await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(Arc::new(e)),
                Err(e) => Err(Arc::new(CoinbaseError::Task(e))),
            };
            if let Err(e) = &outcome {
                tracing::warn!("Token refresh failed: {}", e);
            }

            let mut slot = pending.lock().await;
            if slot.as_ref().is_some_and(|p| p.observed == slot_key) {
                *slot = None;
            }
            outcome
        });

        async move {
            supervisor
                .await
                .unwrap_or_else(|e| Err(Arc::new(CoinbaseError::Task(e))))
        }
        .boxed()
        .shared()
    }
}

impl<E: RequestExecutor> RequestExecutor for TokenRefreshInterceptor<E> {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, CoinbaseError> {
        let observed = self.tokens.refresh_token();

        match self.inner.execute(request).await {
            Err(e) if self.should_refresh(request, &e) => {
                tracing::debug!("{} {} unauthorized: {}", request.method(), request.path(), e);
                self.refresh(observed).await?;
                self.inner.execute(request).await
            }
            outcome => outcome,
        }
    }
}

impl<E> Clone for TokenRefreshInterceptor<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            tokens: Arc::clone(&self.tokens),
            credentials: self.credentials.clone(),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for TokenRefreshInterceptor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRefreshInterceptor")
            .field("inner", &self.inner)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}
