//! Types for buys, sells, deposits and withdrawals.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::rest::private::Transaction;
use crate::types::serde_helpers::optional_display_fromstr;
use crate::types::{ExpandOption, MoneyHash, ResourceReference};

/// The four trade resources of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeKind {
    /// `/accounts/{id}/buys`
    Buys,
    /// `/accounts/{id}/sells`
    Sells,
    /// `/accounts/{id}/deposits`
    Deposits,
    /// `/accounts/{id}/withdrawals`
    Withdrawals,
}

impl TradeKind {
    /// Path segment of the trade kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeKind::Buys => "buys",
            TradeKind::Sells => "sells",
            TradeKind::Deposits => "deposits",
            TradeKind::Withdrawals => "withdrawals",
        }
    }
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every trade kind.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeBase {
    /// Trade ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Resource kind (`buy`, `sell`, `deposit`, `withdrawal`).
    pub resource: String,
    /// API path of the trade.
    #[serde(default)]
    pub resource_path: Option<String>,
    /// Status (`created`, `completed`, `canceled`).
    #[serde(default)]
    pub status: Option<String>,
    /// Related transaction. Inlined with [`TradeExpandOption::Transaction`].
    #[serde(default)]
    pub transaction: Option<Box<Transaction>>,
    /// Payment method used.
    #[serde(default)]
    pub payment_method: Option<ResourceReference>,
    /// Reference shown to the user.
    #[serde(default)]
    pub user_reference: Option<String>,
    /// Creation time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Whether the trade has been committed.
    #[serde(default)]
    pub committed: Option<bool>,
    /// When the funds will arrive.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub payout_at: Option<OffsetDateTime>,
    /// Fee charged.
    #[serde(default)]
    pub fee: Option<MoneyHash>,
    /// Amount in the account currency.
    #[serde(default)]
    pub amount: Option<MoneyHash>,
    /// Amount before fees.
    #[serde(default)]
    pub subtotal: Option<MoneyHash>,
    /// Fee of the payment method.
    #[serde(default)]
    pub payment_method_fee: Option<MoneyHash>,
    /// Days the funds are held.
    #[serde(default)]
    pub hold_days: Option<u32>,
    /// End of the hold.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub hold_until: Option<OffsetDateTime>,
}

/// A buy of crypto with a payment method.
#[derive(Debug, Clone, Deserialize)]
pub struct Buy {
    /// Shared trade fields.
    #[serde(flatten)]
    pub base: TradeBase,
    /// Whether the buy is instant.
    #[serde(default)]
    pub instant: Option<bool>,
    /// Total including fees.
    #[serde(default)]
    pub total: Option<MoneyHash>,
    /// Whether a completion step is pending.
    #[serde(default)]
    pub requires_completion_step: Option<bool>,
    /// Whether this is the user's first buy.
    #[serde(default)]
    pub is_first_buy: Option<bool>,
}

/// A sell of crypto into a payment method.
#[derive(Debug, Clone, Deserialize)]
pub struct Sell {
    /// Shared trade fields.
    #[serde(flatten)]
    pub base: TradeBase,
    /// Whether the sell is instant.
    #[serde(default)]
    pub instant: Option<bool>,
    /// Total after fees.
    #[serde(default)]
    pub total: Option<MoneyHash>,
}

/// A fiat deposit from a payment method.
#[derive(Debug, Clone, Deserialize)]
pub struct Deposit {
    /// Shared trade fields.
    #[serde(flatten)]
    pub base: TradeBase,
    /// Whether the deposit is instant.
    #[serde(default)]
    pub instant: Option<bool>,
}

/// A fiat withdrawal to a payment method.
#[derive(Debug, Clone, Deserialize)]
pub struct Withdrawal {
    /// Shared trade fields.
    #[serde(flatten)]
    pub base: TradeBase,
}

/// A trade resource served under `/accounts/{id}/{kind}`.
pub trait Trade: DeserializeOwned + Send + 'static {
    /// Resource collection of the trade.
    const KIND: TradeKind;

    /// Body used to place the trade.
    type Params: Serialize + Send + Sync;

    /// Shared trade fields.
    fn base(&self) -> &TradeBase;
}

impl Trade for Buy {
    const KIND: TradeKind = TradeKind::Buys;
    type Params = BuySellParams;

    fn base(&self) -> &TradeBase {
        &self.base
    }
}

impl Trade for Sell {
    const KIND: TradeKind = TradeKind::Sells;
    type Params = BuySellParams;

    fn base(&self) -> &TradeBase {
        &self.base
    }
}

impl Trade for Deposit {
    const KIND: TradeKind = TradeKind::Deposits;
    type Params = DepositWithdrawalParams;

    fn base(&self) -> &TradeBase {
        &self.base
    }
}

impl Trade for Withdrawal {
    const KIND: TradeKind = TradeKind::Withdrawals;
    type Params = DepositWithdrawalParams;

    fn base(&self) -> &TradeBase {
        &self.base
    }
}

/// Related resources a trade response can inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeExpandOption {
    /// Related transaction.
    Transaction,
    /// Payment method.
    PaymentMethod,
    /// Everything.
    All,
}

impl ExpandOption for TradeExpandOption {
    fn as_str(&self) -> &'static str {
        match self {
            TradeExpandOption::Transaction => "transaction",
            TradeExpandOption::PaymentMethod => "payment_method",
            TradeExpandOption::All => "all",
        }
    }
}

/// Parameters to place a buy or sell.
///
/// Set either `amount` (in crypto) or `total` (in fiat, including fees).
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuySellParams {
    /// Crypto amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Fiat total including fees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    /// Currency of `amount` or `total`.
    pub currency: String,
    /// Payment method ID. Defaults to the primary method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Accept a changed crypto amount if the price moves.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "optional_display_fromstr"
    )]
    pub agree_btc_amount_varies: Option<bool>,
    /// Commit immediately instead of creating a pending trade.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "optional_display_fromstr"
    )]
    pub commit: Option<bool>,
    /// Only return a quote without creating the trade.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "optional_display_fromstr"
    )]
    pub quote: Option<bool>,
}

impl BuySellParams {
    /// Trade `amount` of the crypto `currency`.
    pub fn amount(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(amount.into()),
            currency: currency.into(),
            ..Self::default()
        }
    }

    /// Trade for a fiat `total` in `currency`.
    pub fn total(total: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            total: Some(total.into()),
            currency: currency.into(),
            ..Self::default()
        }
    }

    /// Use a specific payment method.
    pub fn payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = Some(payment_method.into());
        self
    }

    /// Set whether the trade is committed immediately.
    pub fn commit(mut self, commit: bool) -> Self {
        self.commit = Some(commit);
        self
    }

    /// Request a quote only.
    pub fn quote(mut self, quote: bool) -> Self {
        self.quote = Some(quote);
        self
    }
}

/// Parameters to place a fiat deposit or withdrawal.
#[derive(Debug, Clone, Serialize)]
pub struct DepositWithdrawalParams {
    /// Fiat amount.
    pub amount: String,
    /// Fiat currency.
    pub currency: String,
    /// Payment method ID.
    pub payment_method: String,
    /// Commit immediately instead of creating a pending trade.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "optional_display_fromstr"
    )]
    pub commit: Option<bool>,
}

impl DepositWithdrawalParams {
    /// Move `amount` of `currency` through `payment_method`.
    pub fn new(
        amount: impl Into<String>,
        currency: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
            payment_method: payment_method.into(),
            commit: None,
        }
    }

    /// Set whether the trade is committed immediately.
    pub fn commit(mut self, commit: bool) -> Self {
        self.commit = Some(commit);
        self
    }
}
