//! Custom serde helpers for Coinbase's serialization formats.
//!
//! The wallet API mixes a few non-standard encodings: OAuth scopes arrive as
//! a single space-separated string, and trade parameters expect booleans as
//! `"true"`/`"false"` strings. These modules provide reusable serde helpers.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer, de};

/// Serialize/deserialize a `Vec<String>` as a space-separated string.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use coinbase_api_client::types::serde_helpers::space_separated;
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Grant {
///     #[serde(with = "space_separated")]
///     scope: Vec<String>,
/// }
///
/// let grant: Grant = serde_json::from_str(r#"{"scope":"wallet:user:read wallet:accounts:read"}"#).unwrap();
/// assert_eq!(grant.scope, vec!["wallet:user:read", "wallet:accounts:read"]);
/// assert_eq!(
///     serde_json::to_string(&grant).unwrap(),
///     r#"{"scope":"wallet:user:read wallet:accounts:read"}"#
/// );
/// ```
pub mod space_separated {
    use super::*;

    /// Serialize a list as a space-separated string.
    pub fn serialize<S>(items: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&items.join(" "))
    }

    /// Deserialize a space-separated string into a list, skipping empty parts.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.split_whitespace().map(str::to_string).collect())
    }
}

/// Serialize/deserialize a type using its Display/FromStr implementations.
///
/// Coinbase wants some trade flags as strings (e.g. `"commit": "false"`).
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use coinbase_api_client::types::serde_helpers::display_fromstr;
///
/// #[derive(Serialize)]
/// struct Params {
///     #[serde(with = "display_fromstr")]
///     commit: bool,
/// }
///
/// let json = serde_json::to_string(&Params { commit: false }).unwrap();
/// assert_eq!(json, r#"{"commit":"false"}"#);
/// ```
pub mod display_fromstr {
    use super::*;

    /// Serialize using Display trait.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    /// Deserialize using FromStr trait.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Optional variant of [`display_fromstr`].
///
/// Pair with `skip_serializing_if = "Option::is_none"` so unset flags are
/// left out of the request body.
pub mod optional_display_fromstr {
    use super::*;

    /// Serialize `Some(value)` using Display, `None` as null.
    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(value) => display_fromstr::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional string using FromStr.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        opt.map(|s| s.parse().map_err(de::Error::custom)).transpose()
    }
}

/// Deserialize to `None` instead of failing on invalid/unexpected data.
///
/// Used for loosely specified nested objects the API sometimes returns in a
/// different shape than documented.
pub mod default_on_error {
    use super::*;

    /// Deserialize a value, returning None if deserialization fails.
    ///
    /// The input is buffered first so a mismatched object is skipped whole.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: serde::de::DeserializeOwned,
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }
}

/// Deserialize an empty string as `None`.
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
