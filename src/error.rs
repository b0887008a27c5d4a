//! Error types for the Coinbase client library.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all Coinbase client operations.
#[derive(Error, Debug)]
pub enum CoinbaseError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query string serialization error
    #[error("Query serialization error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The configured base URL cannot carry a path.
    #[error("Invalid base URL: \"{0}\"")]
    InvalidBaseUrl(String),

    /// Request requires authentication but no access token is set.
    #[error("Access token is empty. Request requires authentication: {path}")]
    EmptyAccessToken {
        /// Path of the rejected request
        path: String,
    },

    /// A token refresh was needed but no refresh token is available.
    #[error("Refresh token is empty in attempt to perform token refresh")]
    EmptyRefreshToken,

    /// Missing client credentials for token refresh
    #[error("Missing credentials: client ID and secret required for token refresh")]
    MissingCredentials,

    /// Coinbase API returned a structured error
    #[error("Coinbase API error: {0}")]
    Api(ApiError),

    /// OAuth endpoint returned a structured error
    #[error("OAuth error: {0}")]
    OAuth(OAuthError),

    /// Non-success status without a parseable error body
    #[error("Response status code is not acceptable: {0}")]
    UnacceptableStatusCode(u16),

    /// Response body was required but empty
    #[error("Response could not be serialized, input data is empty")]
    EmptyResponse,

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A background task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Token refresh failed; shared by every request waiting on that refresh.
    #[error("Token refresh failed: {0}")]
    RefreshFailed(Arc<CoinbaseError>),
}

impl CoinbaseError {
    /// Check if this is an authentication failure (HTTP 401 with an error body).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CoinbaseError::Api(e) if e.is_unauthorized())
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            CoinbaseError::Api(e) => e.is_rate_limited(),
            CoinbaseError::UnacceptableStatusCode(status) => *status == 429,
            _ => false,
        }
    }

    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            CoinbaseError::Api(e) => Some(e.status),
            CoinbaseError::OAuth(e) => Some(e.status),
            CoinbaseError::UnacceptableStatusCode(status) => Some(*status),
            CoinbaseError::RefreshFailed(e) => e.status(),
            _ => None,
        }
    }
}

/// A single error entry returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorModel {
    /// Error identifier (see [`error_ids`])
    pub id: String,
    /// Human-readable message
    pub message: String,
    /// Link to the documentation
    #[serde(default)]
    pub url: Option<String>,
}

/// Structured API error: the HTTP status plus the `errors` array of the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Errors reported by the server
    pub errors: Vec<ErrorModel>,
}

#[derive(Deserialize)]
pub(crate) struct ErrorResponse {
    pub(crate) errors: Vec<ErrorModel>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.errors.first() {
            Some(first) => write!(f, "{} {}: {}", self.status, first.id, first.message),
            None => write!(f, "{}", self.status),
        }
    }
}

impl ApiError {
    /// Create a new API error from a status and error entries.
    pub fn new(status: u16, errors: Vec<ErrorModel>) -> Self {
        Self { status, errors }
    }

    /// Parse an API error from a general error body.
    ///
    /// Returns `None` if the body does not follow the `{"errors": [...]}` shape.
    pub fn from_body(status: u16, body: &str) -> Option<Self> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|response| Self::new(status, response.errors))
    }

    /// Check whether any of the errors has the given id.
    pub fn has_error_id(&self, id: &str) -> bool {
        self.errors.iter().any(|e| e.id == id)
    }

    /// Check if this is an authentication failure.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Check if this is an expired token error.
    pub fn is_expired_token(&self) -> bool {
        self.is_unauthorized() && self.has_error_id(error_ids::EXPIRED_TOKEN)
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429 || self.has_error_id(error_ids::RATE_LIMIT_EXCEEDED)
    }

    /// Check if this is a validation error (4xx other than auth and rate limit).
    pub fn is_validation_error(&self) -> bool {
        (400..500).contains(&self.status) && !self.is_unauthorized() && !self.is_rate_limited()
    }

    /// Check if the server failed internally.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// Error returned by the OAuth endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthError {
    /// HTTP status code
    pub status: u16,
    /// OAuth error code
    pub error: String,
    /// Human-readable description
    pub error_description: String,
}

#[derive(Deserialize)]
struct OAuthErrorResponse {
    error: String,
    error_description: String,
}

impl std::fmt::Display for OAuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} \"{}\": {}",
            self.status, self.error, self.error_description
        )
    }
}

impl OAuthError {
    /// Parse an OAuth error body (`{"error": ..., "error_description": ...}`).
    pub fn from_body(status: u16, body: &str) -> Option<Self> {
        serde_json::from_str::<OAuthErrorResponse>(body)
            .ok()
            .map(|response| Self {
                status,
                error: response.error,
                error_description: response.error_description,
            })
    }
}

/// Known Coinbase error ids.
pub mod error_ids {
    /// Sending over the 2FA limit (402).
    pub const TWO_FACTOR_REQUIRED: &str = "two_factor_required";
    /// Missing parameter (400).
    pub const PARAM_REQUIRED: &str = "param_required";
    /// Unable to validate POST/PUT (400).
    pub const VALIDATION_ERROR: &str = "validation_error";
    /// Invalid request (400).
    pub const INVALID_REQUEST: &str = "invalid_request";
    /// Personal details required (400).
    pub const PERSONAL_DETAILS_REQUIRED: &str = "personal_details_required";
    /// Identity verification required (400).
    pub const IDENTITY_VERIFICATION_REQUIRED: &str = "identity_verification_required";
    /// Document verification required (400).
    pub const JUMIO_VERIFICATION_REQUIRED: &str = "jumio_verification_required";
    /// Document verification with face match required (400).
    pub const JUMIO_FACE_MATCH_VERIFICATION_REQUIRED: &str =
        "jumio_face_match_verification_required";
    /// User has not verified their email (400).
    pub const UNVERIFIED_EMAIL: &str = "unverified_email";

    /// Invalid auth, generic (401).
    pub const AUTHENTICATION_ERROR: &str = "authentication_error";
    /// Invalid OAuth token (401).
    pub const INVALID_TOKEN: &str = "invalid_token";
    /// Revoked OAuth token (401).
    pub const REVOKED_TOKEN: &str = "revoked_token";
    /// Expired OAuth token (401).
    pub const EXPIRED_TOKEN: &str = "expired_token";

    /// Missing scope (403).
    pub const INVALID_SCOPE: &str = "invalid_scope";
    /// Resource not found (404).
    pub const NOT_FOUND: &str = "not_found";
    /// Rate limit exceeded (429).
    pub const RATE_LIMIT_EXCEEDED: &str = "rate_limit_exceeded";
    /// Internal server error (500).
    pub const INTERNAL_SERVER_ERROR: &str = "internal_server_error";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_body() {
        let body = r#"{"errors":[{"id":"expired_token","message":"The access token expired"}]}"#;
        let error = ApiError::from_body(401, body).unwrap();
        assert_eq!(error.errors.len(), 1);
        assert_eq!(error.errors[0].id, "expired_token");
        assert!(error.errors[0].url.is_none());
        assert!(error.is_unauthorized());
        assert!(error.is_expired_token());
        assert!(!error.is_validation_error());
    }

    #[test]
    fn test_api_error_rejects_foreign_body() {
        assert!(ApiError::from_body(500, "<html>oops</html>").is_none());
        assert!(ApiError::from_body(400, r#"{"error":"invalid_request"}"#).is_none());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(
            400,
            vec![ErrorModel {
                id: "validation_error".to_string(),
                message: "Amount is too small".to_string(),
                url: None,
            }],
        );
        assert_eq!(error.to_string(), "400 validation_error: Amount is too small");
        assert!(error.is_validation_error());
    }

    #[test]
    fn test_rate_limit_classification() {
        let error = CoinbaseError::Api(ApiError::new(429, vec![]));
        assert!(error.is_rate_limited());
        assert!(!error.is_unauthorized());
        assert!(CoinbaseError::UnacceptableStatusCode(429).is_rate_limited());
    }

    #[test]
    fn test_oauth_error_from_body() {
        let body = r#"{"error":"invalid_request","error_description":"The refresh token is invalid"}"#;
        let error = OAuthError::from_body(401, body).unwrap();
        assert_eq!(error.error, "invalid_request");
        assert_eq!(
            error.to_string(),
            "401 \"invalid_request\": The refresh token is invalid"
        );
    }

    #[test]
    fn test_refresh_failed_exposes_inner_status() {
        let inner = CoinbaseError::OAuth(OAuthError {
            status: 401,
            error: "invalid_grant".to_string(),
            error_description: "revoked".to_string(),
        });
        let error = CoinbaseError::RefreshFailed(Arc::new(inner));
        assert_eq!(error.status(), Some(401));
        assert!(!error.is_unauthorized());
    }
}
