//! Coinbase REST API client implementation.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;

use crate::auth::{
    ClientCredentials, InMemoryTokenStore, TokenRefreshInterceptor, TokenRefreshStrategy,
    TokenStore,
};
use crate::error::CoinbaseError;
use crate::rest::endpoints::{
    CB_VERSION, COINBASE_API_URL, COINBASE_OAUTH_URL, headers as header_names,
};
use crate::rest::executor::{HttpExecutor, RawResponse, RequestExecutor};
use crate::rest::request::ApiRequest;
use crate::types::ResponseModel;

/// The Coinbase wallet REST API client.
///
/// Every request runs through a [`TokenRefreshInterceptor`]: with a refresh
/// strategy configured, an expired access token is refreshed once and the
/// request retried, even when many requests expire at the same time.
///
/// # Example
///
/// ```rust,no_run
/// use coinbase_api_client::rest::CoinbaseClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints need no token
///     let client = CoinbaseClient::new();
///     let price = client.get_spot_price("BTC", "USD", None).await?;
///     println!("BTC spot: {} {}", price.amount, price.currency);
///     Ok(())
/// }
/// ```
///
/// With OAuth tokens and automatic refresh:
///
/// ```rust,no_run
/// use coinbase_api_client::auth::{ClientCredentials, TokenRefreshStrategy};
/// use coinbase_api_client::rest::CoinbaseClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = ClientCredentials::new("client_id", "client_secret");
///     let client = CoinbaseClient::builder()
///         .access_token("access_token")
///         .refresh_strategy(TokenRefreshStrategy::refresh(credentials, "refresh_token"))
///         .build();
///
///     let user = client.get_current_user().await?;
///     println!("Hello {:?}", user.name);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinbaseClient {
    executor: TokenRefreshInterceptor<HttpExecutor>,
    tokens: Arc<dyn TokenStore>,
    credentials: Option<ClientCredentials>,
}

impl CoinbaseClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints until an access token
    /// is set with [`CoinbaseClient::set_access_token`].
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinbaseClientBuilder {
        CoinbaseClientBuilder::new()
    }

    /// Current access token.
    pub fn access_token(&self) -> Option<String> {
        self.tokens.access_token()
    }

    /// Replace the access token used for authenticated requests.
    pub fn set_access_token(&self, access_token: Option<String>) {
        self.tokens.set_access_token(access_token);
    }

    /// The token store backing this client.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Client credentials used for token exchange and refresh.
    pub fn credentials(&self) -> Option<&ClientCredentials> {
        self.credentials.as_ref()
    }

    /// Execute an arbitrary request through the refresh-aware pipeline.
    ///
    /// Useful for endpoints without a typed method.
    pub async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, CoinbaseError> {
        self.executor.execute(request).await
    }

    /// Execute a request and deserialize the `{data, pagination, warnings}` envelope.
    pub async fn request<T>(&self, request: &ApiRequest) -> Result<ResponseModel<T>, CoinbaseError>
    where
        T: DeserializeOwned,
    {
        self.execute(request).await?.json()
    }

    pub(crate) fn interceptor(&self) -> &TokenRefreshInterceptor<HttpExecutor> {
        &self.executor
    }

    /// Execute a request and return the envelope's `data`.
    pub(crate) async fn fetch<T>(&self, request: ApiRequest) -> Result<T, CoinbaseError>
    where
        T: DeserializeOwned,
    {
        Ok(self.request::<T>(&request).await?.data)
    }

    /// Execute a list request and return the full envelope.
    pub(crate) async fn fetch_page<T>(
        &self,
        request: ApiRequest,
    ) -> Result<ResponseModel<Vec<T>>, CoinbaseError>
    where
        T: DeserializeOwned,
    {
        self.request(&request).await
    }

    /// Execute a request whose body is not wrapped in an envelope.
    pub(crate) async fn fetch_raw<T>(&self, request: ApiRequest) -> Result<T, CoinbaseError>
    where
        T: DeserializeOwned,
    {
        self.execute(&request).await?.json()
    }

    /// Execute a request that answers with an empty body.
    pub(crate) async fn send_empty(&self, request: ApiRequest) -> Result<(), CoinbaseError> {
        self.execute(&request.allow_empty()).await.map(|_| ())
    }
}

impl Default for CoinbaseClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinbaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseClient")
            .field("executor", self.executor.inner())
            .field("has_access_token", &self.tokens.access_token().is_some())
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`CoinbaseClient`].
pub struct CoinbaseClientBuilder {
    api_url: String,
    oauth_url: String,
    access_token: Option<String>,
    refresh_strategy: TokenRefreshStrategy,
    token_store: Option<Arc<dyn TokenStore>>,
    user_agent: Option<String>,
    headers: Vec<(String, String)>,
    max_retries: u32,
}

impl CoinbaseClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_url: COINBASE_API_URL.to_string(),
            oauth_url: COINBASE_OAUTH_URL.to_string(),
            access_token: None,
            refresh_strategy: TokenRefreshStrategy::None,
            token_store: None,
            user_agent: None,
            headers: Vec::new(),
            max_retries: 0,
        }
    }

    /// Point both the wallet API and the OAuth endpoints at `host`
    /// (useful for testing with a mock server).
    ///
    /// The wallet API is served under `{host}/v2`, token endpoints under
    /// `{host}/oauth`.
    pub fn base_url(mut self, host: impl Into<String>) -> Self {
        let host = host.into();
        let host = host.trim_end_matches('/');
        self.api_url = format!("{}/v2", host);
        self.oauth_url = host.to_string();
        self
    }

    /// Set the wallet API base URL (including the version path).
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the OAuth base URL.
    pub fn oauth_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_url = url.into();
        self
    }

    /// Set the initial access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set how expired access tokens are handled.
    pub fn refresh_strategy(mut self, strategy: TokenRefreshStrategy) -> Self {
        self.refresh_strategy = strategy;
        self
    }

    /// Use a custom token store.
    ///
    /// Tokens passed to [`access_token`](Self::access_token) and the refresh
    /// strategy are written into it on build.
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a header sent with every request.
    ///
    /// SDK defaults (`User-Agent`, `Accept`, `Content-Type`, `CB-VERSION`)
    /// take precedence over headers with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the maximum number of retries for transient failures.
    ///
    /// Disabled by default: wallet POSTs such as sends are not idempotent.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinbaseClient {
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("coinbase-api-client/{}", env!("CARGO_PKG_VERSION")));
        let headers = default_headers(&self.headers, &user_agent);

        // Build the HTTP client with middleware.
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let mut client = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            client = client.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }
        let http_client: ClientWithMiddleware = client.build();

        let tokens = self
            .token_store
            .unwrap_or_else(|| Arc::new(InMemoryTokenStore::new()));
        if let Some(access_token) = self.access_token {
            tokens.set_access_token(Some(access_token));
        }
        let credentials = match self.refresh_strategy {
            TokenRefreshStrategy::None => None,
            TokenRefreshStrategy::Refresh {
                credentials,
                refresh_token,
            } => {
                tokens.set_refresh_token(Some(refresh_token));
                Some(credentials)
            }
        };

        let executor = HttpExecutor::new(
            http_client,
            self.api_url,
            self.oauth_url,
            Arc::clone(&tokens),
        );

        CoinbaseClient {
            executor: TokenRefreshInterceptor::new(
                executor,
                Arc::clone(&tokens),
                credentials.clone(),
            ),
            tokens,
            credentials,
        }
    }
}

impl Default for CoinbaseClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Session headers overlaid with the SDK defaults.
fn default_headers(session: &[(String, String)], user_agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in session {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!("Ignoring invalid header: {}", name),
        }
    }

    let user_agent = HeaderValue::from_str(user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("coinbase-api-client"));
    headers.insert(USER_AGENT, user_agent);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(header_names::CB_VERSION),
        HeaderValue::from_static(CB_VERSION),
    );
    headers
}
