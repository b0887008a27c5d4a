//! Types for the OAuth2 authorization flow.

use serde::Serialize;
use url::Url;

use crate::error::CoinbaseError;

/// Coinbase authorization page users are sent to.
pub const AUTHORIZE_URL: &str = "https://www.coinbase.com/oauth/authorize";

/// Which wallet accounts the application may access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountAccess {
    /// All of the user's accounts.
    All,
    /// A single account chosen by the user.
    Select,
    /// A single account of one of the listed currencies.
    SelectFromCurrency(Vec<String>),
}

impl AccountAccess {
    fn as_str(&self) -> &'static str {
        match self {
            AccountAccess::All => "all",
            AccountAccess::Select | AccountAccess::SelectFromCurrency(_) => "select",
        }
    }
}

/// Builder for the URL starting the authorization code flow.
///
/// ```rust
/// use coinbase_api_client::rest::oauth::AuthorizationUrl;
///
/// let url = AuthorizationUrl::new("client_id", "myapp://oauth")
///     .scope(["wallet:user:read", "wallet:accounts:read"])
///     .state("af0ifjsldkj")
///     .build()
///     .unwrap();
/// assert!(url.as_str().contains("scope=wallet%3Auser%3Aread%2Cwallet%3Aaccounts%3Aread"));
/// ```
#[derive(Debug, Clone)]
pub struct AuthorizationUrl {
    base: String,
    client_id: String,
    redirect_uri: String,
    layout: Option<String>,
    scope: Vec<String>,
    state: Option<String>,
    account: Option<AccountAccess>,
    meta: Vec<(String, String)>,
}

impl AuthorizationUrl {
    /// Start an authorization URL for `client_id` returning to `redirect_uri`.
    pub fn new(client_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            base: AUTHORIZE_URL.to_string(),
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            layout: None,
            scope: Vec::new(),
            state: None,
            account: None,
            meta: Vec::new(),
        }
    }

    /// Use another authorization page.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Page layout, e.g. `signup`.
    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Requested permissions.
    pub fn scope<I, S>(mut self, scope: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = scope.into_iter().map(Into::into).collect();
        self
    }

    /// Opaque value echoed back to the redirect URI.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Account access requested.
    pub fn account(mut self, account: AccountAccess) -> Self {
        self.account = Some(account);
        self
    }

    /// Add a `meta[name]` parameter, e.g. `send_limit_amount`.
    pub fn meta(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.push((name.into(), value.into()));
        self
    }

    /// Build the URL.
    pub fn build(&self) -> Result<Url, CoinbaseError> {
        let mut url = Url::parse(&self.base)?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("response_type", "code")
                .append_pair("client_id", &self.client_id)
                .append_pair("redirect_uri", &self.redirect_uri);
            if let Some(layout) = &self.layout {
                query.append_pair("layout", layout);
            }
            if !self.scope.is_empty() {
                query.append_pair("scope", &self.scope.join(","));
            }
            if let Some(state) = &self.state {
                query.append_pair("state", state);
            }
            if let Some(account) = &self.account {
                query.append_pair("account", account.as_str());
                if let AccountAccess::SelectFromCurrency(currencies) = account {
                    query.append_pair("account_currency", &currencies.join(","));
                }
            }
            for (name, value) in &self.meta {
                query.append_pair(&format!("meta[{}]", name), value);
            }
        }
        Ok(url)
    }
}

#[derive(Serialize)]
pub(super) struct AuthorizationCodeParams<'a> {
    pub grant_type: &'static str,
    pub code: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub redirect_uri: &'a str,
}

#[derive(Serialize)]
pub(super) struct RevokeParams<'a> {
    pub token: &'a str,
}
