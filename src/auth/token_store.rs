//! Storage for the current access/refresh token pair.
//!
//! The store is the single source of truth for tokens: the HTTP executor reads
//! the access token from it for every authenticated request, and the refresh
//! interceptor compares and rotates the refresh token through it.

use std::sync::Arc;

use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};

use crate::auth::UserToken;

/// Notification emitted whenever the stored tokens change.
#[derive(Debug, Clone, Copy)]
pub enum TokenEvent<'a> {
    /// New tokens were stored (code exchange or refresh).
    Updated(&'a UserToken),
    /// Tokens were removed (revocation).
    Cleared,
}

/// Callback invoked on every token change.
pub type TokenListener = Arc<dyn Fn(TokenEvent<'_>) + Send + Sync>;

/// Thread-safe holder of the current token pair.
///
/// Implement this trait to persist tokens elsewhere, for example in an OS
/// keychain. Readers must never observe a partially updated pair.
pub trait TokenStore: Send + Sync {
    /// Current access token, if any.
    fn access_token(&self) -> Option<String>;

    /// Current refresh token, if any.
    fn refresh_token(&self) -> Option<String>;

    /// Replace the access token only.
    fn set_access_token(&self, access_token: Option<String>);

    /// Replace the refresh token only.
    fn set_refresh_token(&self, refresh_token: Option<String>);

    /// Replace both tokens with a freshly issued pair.
    fn update(&self, token: &UserToken);

    /// Remove both tokens.
    fn clear(&self);
}

#[derive(Default)]
struct TokenPair {
    access_token: Option<SecretString>,
    refresh_token: Option<SecretString>,
}

/// In-memory token store guarded by a read/write lock.
#[derive(Default)]
pub struct InMemoryTokenStore {
    tokens: RwLock<TokenPair>,
    listener: Option<TokenListener>,
}

impl InMemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding an initial access and refresh token.
    pub fn with_tokens(access_token: Option<String>, refresh_token: Option<String>) -> Self {
        Self {
            tokens: RwLock::new(TokenPair {
                access_token: access_token.map(SecretString::from),
                refresh_token: refresh_token.map(SecretString::from),
            }),
            listener: None,
        }
    }

    /// Register a listener called after every update or clear.
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(TokenEvent<'_>) + Send + Sync + 'static,
    {
        self.listener = Some(Arc::new(listener));
        self
    }

    fn notify(&self, event: TokenEvent<'_>) {
        if let Some(listener) = &self.listener {
            listener(event);
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .access_token
            .as_ref()
            .map(|t| t.expose_secret().to_string())
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens
            .read()
            .refresh_token
            .as_ref()
            .map(|t| t.expose_secret().to_string())
    }

    fn set_access_token(&self, access_token: Option<String>) {
        self.tokens.write().access_token = access_token.map(SecretString::from);
    }

    fn set_refresh_token(&self, refresh_token: Option<String>) {
        self.tokens.write().refresh_token = refresh_token.map(SecretString::from);
    }

    fn update(&self, token: &UserToken) {
        {
            let mut tokens = self.tokens.write();
            tokens.access_token = Some(SecretString::from(token.access_token.clone()));
            tokens.refresh_token = Some(SecretString::from(token.refresh_token.clone()));
        }
        self.notify(TokenEvent::Updated(token));
    }

    fn clear(&self) {
        {
            let mut tokens = self.tokens.write();
            tokens.access_token = None;
            tokens.refresh_token = None;
        }
        self.notify(TokenEvent::Cleared);
    }
}

impl std::fmt::Debug for InMemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tokens = self.tokens.read();
        f.debug_struct("InMemoryTokenStore")
            .field("has_access_token", &tokens.access_token.is_some())
            .field("has_refresh_token", &tokens.refresh_token.is_some())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
