//! Coinbase REST API endpoint constants.

/// Base URL for the wallet API.
pub const COINBASE_API_URL: &str = "https://api.coinbase.com/v2";

/// Base URL for the OAuth token endpoints.
pub const COINBASE_OAUTH_URL: &str = "https://api.coinbase.com";

/// API version sent in the `CB-VERSION` header.
pub const CB_VERSION: &str = "2018-02-08";

/// Header names.
pub mod headers {
    /// API version header.
    pub const CB_VERSION: &str = "cb-version";
    /// Two-factor token header for sends over the 2FA limit.
    pub const CB_2FA_TOKEN: &str = "CB-2FA-Token";
}

/// Public endpoints (no authentication required).
pub mod public {
    /// Server time.
    pub const TIME: &str = "/time";
    /// Supported currencies.
    pub const CURRENCIES: &str = "/currencies";
    /// Exchange rates.
    pub const EXCHANGE_RATES: &str = "/exchange-rates";

    /// Price of `base` in `fiat` of the given kind (`buy`, `sell` or `spot`).
    pub fn price(base: &str, fiat: &str, kind: &str) -> String {
        format!("/prices/{base}-{fiat}/{kind}")
    }

    /// Spot prices of all currencies in `fiat`.
    pub fn spot_for(fiat: &str) -> String {
        format!("/prices/{fiat}/spot")
    }
}

/// Authenticated wallet endpoints.
pub mod private {
    /// Current user.
    pub const USER: &str = "/user";
    /// Authorization information of the current token.
    pub const USER_AUTH: &str = "/user/auth";
    /// Accounts.
    pub const ACCOUNTS: &str = "/accounts";
    /// Payment methods.
    pub const PAYMENT_METHODS: &str = "/payment-methods";

    /// A user by ID.
    pub fn user(id: &str) -> String {
        format!("/users/{id}")
    }

    /// An account by ID.
    pub fn account(id: &str) -> String {
        format!("{ACCOUNTS}/{id}")
    }

    /// Make an account primary.
    pub fn account_primary(id: &str) -> String {
        format!("{ACCOUNTS}/{id}/primary")
    }

    /// Transactions of an account.
    pub fn transactions(account_id: &str) -> String {
        format!("{ACCOUNTS}/{account_id}/transactions")
    }

    /// A transaction of an account.
    pub fn transaction(account_id: &str, transaction_id: &str) -> String {
        format!("{ACCOUNTS}/{account_id}/transactions/{transaction_id}")
    }

    /// Addresses of an account.
    pub fn addresses(account_id: &str) -> String {
        format!("{ACCOUNTS}/{account_id}/addresses")
    }

    /// An address of an account.
    pub fn address(account_id: &str, address_id: &str) -> String {
        format!("{ACCOUNTS}/{account_id}/addresses/{address_id}")
    }

    /// Transactions received on an address.
    pub fn address_transactions(account_id: &str, address_id: &str) -> String {
        format!("{ACCOUNTS}/{account_id}/addresses/{address_id}/transactions")
    }

    /// A payment method by ID.
    pub fn payment_method(id: &str) -> String {
        format!("{PAYMENT_METHODS}/{id}")
    }

    /// Trades of the given kind (`buys`, `sells`, `deposits`, `withdrawals`).
    pub fn trades(account_id: &str, kind: &str) -> String {
        format!("{ACCOUNTS}/{account_id}/{kind}")
    }

    /// A trade of the given kind.
    pub fn trade(account_id: &str, kind: &str, trade_id: &str) -> String {
        format!("{ACCOUNTS}/{account_id}/{kind}/{trade_id}")
    }
}

/// OAuth token endpoints.
pub mod oauth {
    /// Token exchange and refresh.
    pub const TOKEN: &str = "/oauth/token";
    /// Token revocation.
    pub const REVOKE: &str = "/oauth/revoke";
}
