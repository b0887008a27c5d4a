//! OAuth2 client credentials for token exchange and refresh.

use secrecy::{ExposeSecret, SecretString};

/// OAuth2 client credentials received after registering an application.
#[derive(Clone)]
pub struct ClientCredentials {
    /// The client ID (public identifier)
    pub client_id: String,
    /// The client secret
    client_secret: SecretString,
}

impl ClientCredentials {
    /// Create new credentials from a client ID and secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// Get the client secret.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }

    /// Read credentials from `COINBASE_CLIENT_ID` and `COINBASE_CLIENT_SECRET`.
    ///
    /// Returns `None` if either variable is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars("COINBASE_CLIENT_ID", "COINBASE_CLIENT_SECRET")
    }

    /// Read credentials from custom environment variable names.
    ///
    /// Returns `None` if either variable is not set.
    pub fn try_from_env_vars(id_var: &str, secret_var: &str) -> Option<Self> {
        let client_id = std::env::var(id_var).ok()?;
        let client_secret = std::env::var(secret_var).ok()?;
        Some(Self::new(client_id, client_secret))
    }
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}
