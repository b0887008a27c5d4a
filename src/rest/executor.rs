//! Request execution.
//!
//! [`RequestExecutor`] is the seam between the typed resource methods and
//! the network. [`HttpExecutor`] is the production implementation; the token
//! refresh interceptor wraps any executor and is one itself.

use std::future::Future;
use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest_middleware::ClientWithMiddleware;

use crate::auth::TokenStore;
use crate::error::{ApiError, CoinbaseError, OAuthError};
use crate::rest::request::{ApiFamily, ApiRequest, ErrorFormat};

/// A validated response: status plus the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body (may be empty when the request allows it)
    pub body: String,
}

impl RawResponse {
    /// Deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, CoinbaseError> {
        serde_json::from_str(&self.body).map_err(|e| {
            CoinbaseError::InvalidResponse(format!(
                "Failed to parse response: {}. Body: {}",
                e, self.body
            ))
        })
    }
}

/// Issues requests described by [`ApiRequest`].
///
/// Implementations must be safe to call concurrently. A non-success
/// response is returned as an error classified by the request's
/// [`ErrorFormat`]; a 401 with a general error body is
/// [`CoinbaseError::Api`] with status 401.
pub trait RequestExecutor: Send + Sync + 'static {
    /// Execute the request once.
    fn execute(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, CoinbaseError>> + Send;
}

/// Executor backed by a `reqwest` client with middleware.
#[derive(Clone)]
pub struct HttpExecutor {
    http_client: ClientWithMiddleware,
    api_url: String,
    oauth_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpExecutor {
    /// Create an executor.
    ///
    /// `api_url` is the wallet API base (including `/v2`), `oauth_url` the
    /// host serving `/oauth/*`. Default headers are expected to be configured
    /// on `http_client`.
    pub fn new(
        http_client: ClientWithMiddleware,
        api_url: impl Into<String>,
        oauth_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            http_client,
            api_url: api_url.into(),
            oauth_url: oauth_url.into(),
            tokens,
        }
    }

    /// Resolve the full URL of a request, including query and `expand[]` items.
    pub(crate) fn build_url(&self, request: &ApiRequest) -> Result<url::Url, CoinbaseError> {
        let base = match request.family() {
            ApiFamily::V2 => &self.api_url,
            ApiFamily::OAuth => &self.oauth_url,
        };

        let invalid = || CoinbaseError::InvalidBaseUrl(base.to_string());
        let mut url = url::Url::parse(base).map_err(|_| invalid())?;

        // Segments are percent-encoded, so ids can't leak into the query.
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(request.path().split('/').filter(|s| !s.is_empty()));

        let mut pairs: Vec<(&str, &str)> = request
            .query_pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.extend(request.expand_items().iter().map(|e| ("expand[]", e.as_str())));

        if !pairs.is_empty() {
            let query = serde_urlencoded::to_string(&pairs)?;
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    fn bearer(&self, request: &ApiRequest) -> Result<Option<String>, CoinbaseError> {
        if !request.requires_auth() {
            return Ok(None);
        }
        match self.tokens.access_token() {
            Some(token) if !token.is_empty() => Ok(Some(format!("Bearer {}", token))),
            _ => Err(CoinbaseError::EmptyAccessToken {
                path: request.path().to_string(),
            }),
        }
    }
}

impl RequestExecutor for HttpExecutor {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, CoinbaseError> {
        let bearer = self.bearer(request)?;
        let url = self.build_url(request)?;

        tracing::debug!("{} {}", request.method(), url.path());

        let mut builder = self.http_client.request(request.method().clone(), url);
        if let Some(bearer) = bearer {
            builder = builder.header(AUTHORIZATION, bearer);
        }
        for (key, value) in request.headers() {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_string(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("{} {} -> {}", request.method(), request.path(), status);

        validate_response(request, status, body)
    }
}

impl std::fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("api_url", &self.api_url)
            .field("oauth_url", &self.oauth_url)
            .finish()
    }
}

/// Classify a response.
///
/// The status is checked before the body: an error status with an empty body
/// reports the status, not an empty response.
pub(crate) fn validate_response(
    request: &ApiRequest,
    status: StatusCode,
    body: String,
) -> Result<RawResponse, CoinbaseError> {
    let code = status.as_u16();

    if !status.is_success() {
        let parsed = match request.error_format() {
            ErrorFormat::General => ApiError::from_body(code, &body).map(CoinbaseError::Api),
            ErrorFormat::OAuth => OAuthError::from_body(code, &body).map(CoinbaseError::OAuth),
        };
        return Err(parsed.unwrap_or(CoinbaseError::UnacceptableStatusCode(code)));
    }

    let empty = body.trim().is_empty()
        || status == StatusCode::NO_CONTENT
        || status == StatusCode::RESET_CONTENT;
    if empty && !request.allows_empty() {
        return Err(CoinbaseError::EmptyResponse);
    }

    Ok(RawResponse { status: code, body })
}
