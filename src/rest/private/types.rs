//! Types for authenticated wallet endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, de};
use time::OffsetDateTime;

use crate::rest::trades::{Buy, Deposit, Sell, Withdrawal};
use crate::types::serde_helpers::{default_on_error, empty_string_as_none};
use crate::types::{ExpandOption, MoneyHash};

// ========== Users ==========

/// A Coinbase user.
///
/// Other users are returned with public fields only.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// User ID.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Username.
    #[serde(default)]
    pub username: Option<String>,
    /// Profile location.
    #[serde(default)]
    pub profile_location: Option<String>,
    /// Profile bio.
    #[serde(default)]
    pub profile_bio: Option<String>,
    /// Public profile URL.
    #[serde(default)]
    pub profile_url: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Resource kind (`user`).
    pub resource: String,
    /// API path of the user.
    pub resource_path: String,
    /// Email (current user with `wallet:user:email`).
    #[serde(default)]
    pub email: Option<String>,
    /// Time zone.
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Native currency.
    #[serde(default)]
    pub native_currency: Option<String>,
    /// Preferred bitcoin unit.
    #[serde(default)]
    pub bitcoin_unit: Option<String>,
    /// State or region.
    #[serde(default)]
    pub state: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<Country>,
    /// Creation time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Whether sends are disabled for this user.
    #[serde(default)]
    pub sends_disabled: Option<bool>,
}

/// Country of a user.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    /// ISO code.
    #[serde(default)]
    pub code: Option<String>,
    /// Country name.
    pub name: String,
    /// Whether the country is in Europe.
    #[serde(default)]
    pub is_in_europe: bool,
}

/// Authorization information of the current token.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizationInfo {
    /// Authentication method (e.g. `oauth`).
    pub method: String,
    /// Granted scopes.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// OAuth metadata (e.g. send limits).
    #[serde(default)]
    pub oauth_meta: HashMap<String, serde_json::Value>,
}

/// Fields to change on the current user. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// New native currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_currency: Option<String>,
}

// ========== Accounts ==========

/// Account types.
pub mod account_type {
    /// Crypto wallet.
    pub const WALLET: &str = "wallet";
    /// Fiat account.
    pub const FIAT: &str = "fiat";
    /// Vault.
    pub const VAULT: &str = "vault";
}

/// A wallet or fiat account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: String,
    /// User-defined name.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether this is the primary account.
    #[serde(default)]
    pub primary: Option<bool>,
    /// Account type (see [`account_type`]).
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    /// Account currency.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Balance in the account currency.
    #[serde(default)]
    pub balance: Option<MoneyHash>,
    /// Creation time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Resource kind (`account`).
    pub resource: String,
    /// API path of the account.
    pub resource_path: String,
}

/// A currency as embedded in an account.
///
/// Older API versions send only the currency code; newer ones an object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "CurrencyRepr")]
pub struct Currency {
    /// Currency code.
    pub code: String,
    /// Currency name.
    pub name: Option<String>,
    /// Display color.
    pub color: Option<String>,
    /// Number of decimal places.
    pub exponent: Option<u32>,
    /// `crypto` or `fiat`.
    pub currency_type: Option<String>,
    /// Regex validating deposit addresses.
    pub address_regex: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CurrencyRepr {
    Code(String),
    Details(CurrencyDetails),
}

#[derive(Deserialize)]
struct CurrencyDetails {
    code: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    exponent: Option<u32>,
    #[serde(rename = "type", default)]
    currency_type: Option<String>,
    #[serde(default)]
    address_regex: Option<String>,
}

impl From<CurrencyRepr> for Currency {
    fn from(repr: CurrencyRepr) -> Self {
        match repr {
            CurrencyRepr::Code(code) => Currency {
                code,
                name: None,
                color: None,
                exponent: None,
                currency_type: None,
                address_regex: None,
            },
            CurrencyRepr::Details(d) => Currency {
                code: d.code,
                name: d.name,
                color: d.color,
                exponent: d.exponent,
                currency_type: d.currency_type,
                address_regex: d.address_regex,
            },
        }
    }
}

// ========== Transactions ==========

/// Transaction types.
pub mod transaction_type {
    /// Sent money.
    pub const SEND: &str = "send";
    /// Money request.
    pub const REQUEST: &str = "request";
    /// Transfer between own accounts.
    pub const TRANSFER: &str = "transfer";
    /// Buy.
    pub const BUY: &str = "buy";
    /// Sell.
    pub const SELL: &str = "sell";
    /// Fiat deposit.
    pub const FIAT_DEPOSIT: &str = "fiat_deposit";
    /// Fiat withdrawal.
    pub const FIAT_WITHDRAWAL: &str = "fiat_withdrawal";
}

/// Transaction statuses.
pub mod transaction_status {
    /// Pending.
    pub const PENDING: &str = "pending";
    /// Completed.
    pub const COMPLETED: &str = "completed";
    /// Failed.
    pub const FAILED: &str = "failed";
    /// Expired.
    pub const EXPIRED: &str = "expired";
    /// Canceled.
    pub const CANCELED: &str = "canceled";
}

/// A transaction on an account.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: String,
    /// Transaction type (see [`transaction_type`]).
    #[serde(rename = "type", default)]
    pub transaction_type: Option<String>,
    /// Status (see [`transaction_status`]).
    #[serde(default)]
    pub status: Option<String>,
    /// Amount in the account currency.
    #[serde(default)]
    pub amount: Option<MoneyHash>,
    /// Amount in the user's native currency.
    #[serde(default)]
    pub native_amount: Option<MoneyHash>,
    /// User-defined description.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub description: Option<String>,
    /// Whether the transaction was instant.
    #[serde(default)]
    pub instant_exchange: Option<bool>,
    /// Creation time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Resource kind (`transaction`).
    pub resource: String,
    /// API path of the transaction.
    pub resource_path: String,
    /// Presentation details.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub details: Option<TransactionDetails>,
    /// On-chain information.
    #[serde(default)]
    pub network: Option<TransactionNetwork>,
    /// Recipient.
    #[serde(default)]
    pub to: Option<TransactionParty>,
    /// Sender.
    #[serde(default)]
    pub from: Option<TransactionParty>,
    /// Related buy.
    #[serde(default)]
    pub buy: Option<Buy>,
    /// Related sell.
    #[serde(default)]
    pub sell: Option<Sell>,
    /// Related fiat deposit.
    #[serde(default)]
    pub fiat_deposit: Option<Deposit>,
    /// Related fiat withdrawal.
    #[serde(default)]
    pub fiat_withdrawal: Option<Withdrawal>,
    /// Receiving address.
    #[serde(default)]
    pub address: Option<Address>,
    /// Idempotency token of a send.
    #[serde(default)]
    pub idem: Option<String>,
    /// Application that created the transaction.
    #[serde(default)]
    pub application: Option<Application>,
}

/// Human-readable transaction summary.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionDetails {
    /// Title.
    pub title: String,
    /// Subtitle.
    pub subtitle: String,
    /// Payment method name.
    #[serde(default)]
    pub payment_method_name: Option<String>,
}

/// On-chain status of a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionNetwork {
    /// Network status.
    pub status: String,
    /// Number of confirmations.
    #[serde(default)]
    pub confirmations: Option<u64>,
    /// Transaction hash.
    #[serde(default)]
    pub hash: Option<String>,
    /// Network fee.
    #[serde(default)]
    pub transaction_fee: Option<MoneyHash>,
    /// Amount sent on-chain.
    #[serde(default)]
    pub transaction_amount: Option<MoneyHash>,
}

/// Counterparty of a transaction, selected by its `resource` field.
#[derive(Debug, Clone)]
pub enum TransactionParty {
    /// Email recipient.
    Email(EmailParty),
    /// Coinbase user.
    User(Box<User>),
    /// Own account.
    Account(Box<Account>),
    /// Crypto address (`bitcoin_address`, `ethereum_network`, ...).
    CryptoAddress(CryptoAddress),
}

impl<'de> Deserialize<'de> for TransactionParty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let resource = value
            .get("resource")
            .and_then(|r| r.as_str())
            .ok_or_else(|| de::Error::missing_field("resource"))?
            .to_string();

        let party = match resource.as_str() {
            "email" => serde_json::from_value(value).map(TransactionParty::Email),
            "user" => serde_json::from_value(value).map(|u| TransactionParty::User(Box::new(u))),
            "account" => {
                serde_json::from_value(value).map(|a| TransactionParty::Account(Box::new(a)))
            }
            r if r.ends_with("address") || r.ends_with("network") => {
                serde_json::from_value(value).map(TransactionParty::CryptoAddress)
            }
            other => {
                return Err(de::Error::custom(format!(
                    "unknown transaction party resource: {other}"
                )));
            }
        };
        party.map_err(de::Error::custom)
    }
}

/// Email counterparty.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailParty {
    /// Resource kind (`email`).
    pub resource: String,
    /// Email address.
    pub email: String,
}

/// Crypto address counterparty.
#[derive(Debug, Clone, Deserialize)]
pub struct CryptoAddress {
    /// Resource kind (e.g. `bitcoin_address`).
    pub resource: String,
    /// Address, when disclosed.
    #[serde(default)]
    pub address_info: Option<AddressInfo>,
}

/// Address and optional destination tag.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressInfo {
    /// Address.
    pub address: String,
    /// Destination tag or memo.
    #[serde(default)]
    pub destination_tag: Option<String>,
}

/// OAuth application.
#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    /// Application ID.
    pub id: String,
    /// Resource kind (`application`).
    pub resource: String,
    /// API path of the application.
    pub resource_path: String,
    /// Name.
    #[serde(default)]
    pub name: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Related resources a transaction response can inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionExpandOption {
    /// Sender.
    From,
    /// Recipient.
    To,
    /// Related buy.
    Buy,
    /// Related sell.
    Sell,
    /// Related fiat deposit.
    FiatDeposit,
    /// Related fiat withdrawal.
    FiatWithdrawal,
    /// Creating application.
    Application,
    /// Receiving address.
    Address,
    /// Everything.
    All,
}

impl ExpandOption for TransactionExpandOption {
    fn as_str(&self) -> &'static str {
        match self {
            TransactionExpandOption::From => "from",
            TransactionExpandOption::To => "to",
            TransactionExpandOption::Buy => "buy",
            TransactionExpandOption::Sell => "sell",
            TransactionExpandOption::FiatDeposit => "fiat_deposit",
            TransactionExpandOption::FiatWithdrawal => "fiat_withdrawal",
            TransactionExpandOption::Application => "application",
            TransactionExpandOption::Address => "address",
            TransactionExpandOption::All => "all",
        }
    }
}

/// Send funds to an email or crypto address.
#[derive(Debug, Clone, Serialize)]
pub struct SendMoneyRequest {
    #[serde(rename = "type")]
    transaction_type: &'static str,
    /// Email or crypto address of the recipient.
    pub to: String,
    /// Amount to send.
    pub amount: String,
    /// Currency of `amount`.
    pub currency: String,
    /// Note shown to the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Don't send notification emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_notifications: Option<bool>,
    /// Network fee override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idem: Option<String>,
    /// Whether the recipient is a financial institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_financial_institution: Option<bool>,
    /// Website of the receiving institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_institution_website: Option<String>,
}

impl SendMoneyRequest {
    /// Send `amount` of `currency` to `to`.
    pub fn new(to: impl Into<String>, amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            transaction_type: transaction_type::SEND,
            to: to.into(),
            amount: amount.into(),
            currency: currency.into(),
            description: None,
            skip_notifications: None,
            fee: None,
            idem: None,
            to_financial_institution: None,
            financial_institution_website: None,
        }
    }

    /// Set the idempotency token.
    pub fn idem(mut self, idem: impl Into<String>) -> Self {
        self.idem = Some(idem.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request money from an email address.
#[derive(Debug, Clone, Serialize)]
pub struct RequestMoneyRequest {
    #[serde(rename = "type")]
    transaction_type: &'static str,
    /// Email of the payer.
    pub to: String,
    /// Amount requested.
    pub amount: String,
    /// Currency of `amount`.
    pub currency: String,
    /// Note shown to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RequestMoneyRequest {
    /// Request `amount` of `currency` from `to`.
    pub fn new(to: impl Into<String>, amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            transaction_type: transaction_type::REQUEST,
            to: to.into(),
            amount: amount.into(),
            currency: currency.into(),
            description: None,
        }
    }
}

// ========== Addresses ==========

/// A receive address of an account.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    /// Address ID.
    pub id: String,
    /// The address itself.
    #[serde(default)]
    pub address: Option<String>,
    /// User-defined label.
    #[serde(default)]
    pub name: Option<String>,
    /// Network name.
    #[serde(default)]
    pub network: Option<String>,
    /// Creation time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Resource kind (`address`).
    pub resource: String,
    /// API path of the address.
    pub resource_path: String,
    /// URI scheme (e.g. `bitcoin`).
    #[serde(default)]
    pub uri_scheme: Option<String>,
    /// Warning title to show with the address.
    #[serde(default)]
    pub warning_title: Option<String>,
    /// Warning details to show with the address.
    #[serde(default)]
    pub warning_details: Option<String>,
    /// Legacy address format.
    #[serde(default)]
    pub legacy_address: Option<String>,
    /// Callback URL for incoming transactions.
    #[serde(default)]
    pub callback_url: Option<String>,
    /// Address and destination tag.
    #[serde(default)]
    pub address_info: Option<AddressInfo>,
}

// ========== Payment methods ==========

/// A payment method linked to the user.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethod {
    /// Payment method ID.
    pub id: String,
    /// Type (e.g. `ach_bank_account`, `fiat_account`).
    #[serde(rename = "type", default)]
    pub method_type: Option<String>,
    /// Name.
    #[serde(default)]
    pub name: Option<String>,
    /// Currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Primary method for buys.
    #[serde(default)]
    pub primary_buy: Option<bool>,
    /// Primary method for sells.
    #[serde(default)]
    pub primary_sell: Option<bool>,
    /// Usable for buys.
    #[serde(default)]
    pub allow_buy: Option<bool>,
    /// Usable for sells.
    #[serde(default)]
    pub allow_sell: Option<bool>,
    /// Usable for deposits.
    #[serde(default)]
    pub allow_deposit: Option<bool>,
    /// Usable for withdrawals.
    #[serde(default)]
    pub allow_withdraw: Option<bool>,
    /// Instant buys.
    #[serde(default)]
    pub instant_buy: Option<bool>,
    /// Instant sells.
    #[serde(default)]
    pub instant_sell: Option<bool>,
    /// Creation time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Resource kind (`payment_method`).
    pub resource: String,
    /// API path of the payment method.
    pub resource_path: String,
    /// Linked fiat account.
    #[serde(default)]
    pub fiat_account: Option<Account>,
    /// Limits.
    #[serde(default)]
    pub limits: Option<PaymentMethodLimits>,
    /// Whether the method is verified.
    #[serde(default)]
    pub verified: Option<bool>,
}

/// Limits of a payment method.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethodLimits {
    /// Limit type (e.g. `bank`, `card`).
    #[serde(rename = "type")]
    pub limit_type: String,
    /// Name.
    pub name: String,
    /// Buy limits.
    #[serde(default)]
    pub buy: Option<Vec<PaymentMethodLimit>>,
    /// Instant buy limits.
    #[serde(default)]
    pub instant_buy: Option<Vec<PaymentMethodLimit>>,
    /// Sell limits.
    #[serde(default)]
    pub sell: Option<Vec<PaymentMethodLimit>>,
    /// Deposit limits.
    #[serde(default)]
    pub deposit: Option<Vec<PaymentMethodLimit>>,
}

/// A single limit window.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethodLimit {
    /// Window length in days.
    #[serde(default)]
    pub period_in_days: Option<u32>,
    /// Total allowed.
    #[serde(default)]
    pub total: Option<MoneyHash>,
    /// Remaining.
    #[serde(default)]
    pub remaining: Option<MoneyHash>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Label.
    #[serde(default)]
    pub label: Option<String>,
    /// Requirement to raise the limit.
    #[serde(default)]
    pub next_requirement: Option<NextRequirement>,
}

/// Requirement to unlock a higher limit.
#[derive(Debug, Clone, Deserialize)]
pub struct NextRequirement {
    /// Requirement type (e.g. `identity_verification`).
    #[serde(rename = "type", default)]
    pub requirement_type: Option<String>,
    /// Required volume.
    #[serde(default)]
    pub volume: Option<MoneyHash>,
    /// Volume still missing.
    #[serde(default)]
    pub amount_remaining: Option<MoneyHash>,
    /// Seconds after starting.
    #[serde(default)]
    pub time_after_starting: Option<u64>,
}

/// Related resources a payment method response can inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethodExpandOption {
    /// Linked fiat account.
    FiatAccount,
    /// Everything.
    All,
}

impl ExpandOption for PaymentMethodExpandOption {
    fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodExpandOption::FiatAccount => "fiat_account",
            PaymentMethodExpandOption::All => "all",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_from_code_or_object() {
        let account: Account = serde_json::from_str(
            r#"{"id":"a1","currency":"BTC","resource":"account","resource_path":"/v2/accounts/a1"}"#,
        )
        .unwrap();
        assert_eq!(account.currency.unwrap().code, "BTC");

        let account: Account = serde_json::from_str(
            r#"{
                "id": "a2",
                "name": "ETH Wallet",
                "primary": false,
                "type": "wallet",
                "currency": {"code": "ETH", "name": "Ethereum", "exponent": 8, "type": "crypto"},
                "balance": {"amount": "0.50000000", "currency": "ETH"},
                "created_at": "2015-01-31T20:49:02Z",
                "resource": "account",
                "resource_path": "/v2/accounts/a2"
            }"#,
        )
        .unwrap();
        let currency = account.currency.unwrap();
        assert_eq!(currency.code, "ETH");
        assert_eq!(currency.exponent, Some(8));
        assert_eq!(currency.currency_type.as_deref(), Some("crypto"));
        assert_eq!(account.account_type.as_deref(), Some(account_type::WALLET));
        assert!(account.created_at.is_some());
    }

    #[test]
    fn test_transaction_parties() {
        let json = r#"{
            "id": "tx1",
            "type": "send",
            "status": "completed",
            "amount": {"amount": "-0.10000000", "currency": "BTC"},
            "description": "",
            "resource": "transaction",
            "resource_path": "/v2/accounts/a1/transactions/tx1",
            "details": "unexpected",
            "to": {"resource": "bitcoin_address", "address_info": {"address": "1AUJ8z5RuHRTqD1eikyfUUetzGmdWLGkpT"}},
            "from": {"id": "u1", "resource": "user", "resource_path": "/v2/users/u1"},
            "buy": {"id": "b1", "resource": "buy", "resource_path": "/v2/accounts/a1/buys/b1"}
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();

        assert!(tx.description.is_none());
        assert!(tx.details.is_none());
        match tx.to.unwrap() {
            TransactionParty::CryptoAddress(address) => assert_eq!(
                address.address_info.unwrap().address,
                "1AUJ8z5RuHRTqD1eikyfUUetzGmdWLGkpT"
            ),
            other => panic!("unexpected party: {:?}", other),
        }
        assert!(matches!(tx.from, Some(TransactionParty::User(ref u)) if u.id == "u1"));
        assert_eq!(tx.buy.unwrap().base.id.as_deref(), Some("b1"));
    }

    #[test]
    fn test_unknown_party_is_an_error() {
        let result: Result<TransactionParty, _> =
            serde_json::from_str(r#"{"resource":"spaceship"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_send_request_serialization() {
        let request = SendMoneyRequest::new("user@example.com", "0.1", "BTC").idem("9316dd16");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "send");
        assert_eq!(json["idem"], "9316dd16");
        assert!(json.get("fee").is_none());
    }
}
