//! OAuth2 token types.

use serde::Deserialize;

use crate::auth::ClientCredentials;
use crate::types::serde_helpers::space_separated;

/// Tokens returned by the OAuth token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserToken {
    /// Access token used to authenticate requests.
    pub access_token: String,
    /// Token type (always `bearer`).
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
    /// Token used to obtain a new access token once this one expires.
    pub refresh_token: String,
    /// Granted permission scopes.
    #[serde(with = "space_separated")]
    pub scope: Vec<String>,
}

/// How the client reacts to expired access tokens.
#[derive(Debug, Clone, Default)]
pub enum TokenRefreshStrategy {
    /// Surface authentication failures to the caller.
    #[default]
    None,
    /// Refresh the access token with these credentials and retry once.
    Refresh {
        /// Application credentials sent to the token endpoint.
        credentials: ClientCredentials,
        /// Initial refresh token.
        refresh_token: String,
    },
}

impl TokenRefreshStrategy {
    /// Refresh with the given client credentials and initial refresh token.
    pub fn refresh(credentials: ClientCredentials, refresh_token: impl Into<String>) -> Self {
        TokenRefreshStrategy::Refresh {
            credentials,
            refresh_token: refresh_token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_token_deserialize() {
        let json = r#"{
            "access_token": "at_new",
            "token_type": "bearer",
            "expires_in": 7200,
            "refresh_token": "rt_new",
            "scope": "wallet:user:read wallet:accounts:read"
        }"#;
        let token: UserToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "at_new");
        assert_eq!(token.refresh_token, "rt_new");
        assert_eq!(token.expires_in, 7200);
        assert_eq!(token.scope, vec!["wallet:user:read", "wallet:accounts:read"]);
    }
}
