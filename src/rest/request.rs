//! Endpoint descriptors.
//!
//! An [`ApiRequest`] carries everything the executor needs to issue a call:
//! method, API family, path, query, body, headers and the validation rules
//! for the response. Resource methods build one and hand it to the executor
//! stack; the refresh interceptor keeps it around to retry the call.

use reqwest::Method;
use serde::Serialize;

use crate::error::CoinbaseError;
use crate::types::{ExpandOption, PaginationParameters, expand_values};

/// Which base URL a request is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    /// Wallet API (`https://api.coinbase.com/v2`).
    V2,
    /// OAuth token endpoints (`https://api.coinbase.com`).
    OAuth,
}

/// Shape of the error body returned by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorFormat {
    /// `{"errors": [{"id", "message", "url"}]}`
    #[default]
    General,
    /// `{"error", "error_description"}`
    OAuth,
}

/// A fully described API call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) family: ApiFamily,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) expand: Vec<String>,
    pub(crate) requires_auth: bool,
    pub(crate) error_format: ErrorFormat,
    pub(crate) allow_empty: bool,
    pub(crate) token_endpoint: bool,
}

impl ApiRequest {
    /// Create a request against the wallet API. Authentication is required by default.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            family: ApiFamily::V2,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            expand: Vec::new(),
            requires_auth: true,
            error_format: ErrorFormat::General,
            allow_empty: false,
            token_endpoint: false,
        }
    }

    /// GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// A POST to an OAuth token endpoint.
    ///
    /// Token endpoints are unauthenticated, use the OAuth error format and
    /// are never intercepted for token refresh.
    pub fn token_endpoint(path: impl Into<String>) -> Self {
        Self {
            family: ApiFamily::OAuth,
            requires_auth: false,
            error_format: ErrorFormat::OAuth,
            token_endpoint: true,
            ..Self::post(path)
        }
    }

    /// Mark the request as not requiring an access token.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    /// Accept a successful response with an empty body.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add pagination parameters to the query.
    pub fn page(mut self, page: &PaginationParameters) -> Self {
        self.query.extend(page.to_query());
        self
    }

    /// Set `expand[]` items.
    pub fn expand<E: ExpandOption>(mut self, options: &[E]) -> Self {
        self.expand = expand_values(options);
        self
    }

    /// Add a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, CoinbaseError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// API family.
    pub fn family(&self) -> ApiFamily {
        self.family
    }

    /// Path relative to the family's base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON body, if any.
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Request-specific headers.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// `expand[]` items.
    pub fn expand_items(&self) -> &[String] {
        &self.expand
    }

    /// Whether an access token must be attached.
    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    /// Error body format.
    pub fn error_format(&self) -> ErrorFormat {
        self.error_format
    }

    /// Whether an empty success body is accepted.
    pub fn allows_empty(&self) -> bool {
        self.allow_empty
    }

    /// Whether this is an OAuth token endpoint.
    pub fn is_token_endpoint(&self) -> bool {
        self.token_endpoint
    }
}
