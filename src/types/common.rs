//! Common domain types shared by the Coinbase resources.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Pagination;

/// An amount of money in a given currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyHash {
    /// Amount (decimal string on the wire)
    pub amount: Decimal,
    /// Currency code (e.g. "BTC", "USD")
    pub currency: String,
}

/// A warning attached to a response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Warning {
    /// Warning identifier
    pub id: String,
    /// Human-readable message
    pub message: String,
    /// Link to the documentation
    #[serde(default)]
    pub url: Option<String>,
}

/// The standard response envelope: `{data, pagination?, warnings?}`.
///
/// List endpoints return the full envelope so the caller can reach the
/// pagination cursors. Single-item endpoints unwrap `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseModel<T> {
    /// Response payload
    pub data: T,
    /// Cursor information for list responses
    #[serde(default)]
    pub pagination: Option<Pagination>,
    /// Warnings reported by the server
    #[serde(default)]
    pub warnings: Option<Vec<Warning>>,
}

impl<T> ResponseModel<T> {
    /// Consume the envelope and return the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Sort order of list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Oldest first
    Asc,
    /// Newest first (server default)
    Desc,
}

impl ListOrder {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListOrder::Asc => "asc",
            ListOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for ListOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(ListOrder::Asc),
            "desc" => Ok(ListOrder::Desc),
            other => Err(format!("unknown list order: {other}")),
        }
    }
}

/// Minimal reference to another resource (`{id, resource, resource_path}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceReference {
    /// Resource ID
    #[serde(default)]
    pub id: Option<String>,
    /// Resource kind (e.g. "user", "account")
    pub resource: String,
    /// API path of the resource
    #[serde(default)]
    pub resource_path: Option<String>,
}

/// Values that can be passed as `expand[]` query items.
pub trait ExpandOption: Copy {
    /// Wire representation.
    fn as_str(&self) -> &'static str;
}

/// Convert expand options to their wire names.
pub(crate) fn expand_values<E: ExpandOption>(options: &[E]) -> Vec<String> {
    options.iter().map(|o| o.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_money_hash_deserialize() {
        let money: MoneyHash =
            serde_json::from_str(r#"{"amount":"39.59000000","currency":"BTC"}"#).unwrap();
        assert_eq!(money.amount, Decimal::from_str("39.59").unwrap());
        assert_eq!(money.currency, "BTC");
    }

    #[test]
    fn test_response_model_without_pagination() {
        let json = r#"{"data":{"amount":"1.00","currency":"USD"}}"#;
        let model: ResponseModel<MoneyHash> = serde_json::from_str(json).unwrap();
        assert!(model.pagination.is_none());
        assert!(model.warnings.is_none());
        assert_eq!(model.into_data().currency, "USD");
    }

    #[test]
    fn test_response_model_with_warnings() {
        let json = r#"{
            "data": [],
            "warnings": [{"id": "missing_version", "message": "Please supply API version"}]
        }"#;
        let model: ResponseModel<Vec<MoneyHash>> = serde_json::from_str(json).unwrap();
        let warnings = model.warnings.unwrap();
        assert_eq!(warnings[0].id, "missing_version");
        assert!(warnings[0].url.is_none());
    }

    #[test]
    fn test_list_order_parse() {
        assert_eq!(ListOrder::from_str("asc").unwrap(), ListOrder::Asc);
        assert!(ListOrder::from_str("up").is_err());
        assert_eq!(ListOrder::Desc.to_string(), "desc");
    }
}
