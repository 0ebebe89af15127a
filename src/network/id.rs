//!
//! The network identifier matcher.
//!

use serde::Serialize;
use serde::Serializer;

use crate::error::Error;

///
/// The network identifier matcher.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Id {
    /// Matches any chain or network identifier.
    Any,
    /// Matches the exact identifier.
    Exact(String),
}

impl Id {
    /// The wildcard literal.
    pub const WILDCARD: &'static str = "*";

    ///
    /// Validates the declared value.
    ///
    /// Both strings and non-negative integers are accepted, the latter stored in decimal.
    ///
    pub fn try_from_value(field: String, value: serde_json::Value) -> Result<Self, Error> {
        match value {
            serde_json::Value::String(id) if id == Self::WILDCARD => Ok(Self::Any),
            serde_json::Value::String(id) if id.is_empty() => {
                Err(Error::malformed(field, "the identifier is empty"))
            }
            serde_json::Value::String(id) => Ok(Self::Exact(id)),
            serde_json::Value::Number(number) => match number.as_u64() {
                Some(id) => Ok(Self::Exact(id.to_string())),
                None => Err(Error::malformed(
                    field,
                    format!("expected a non-negative integer, found `{}`", number),
                )),
            },
            value => Err(Error::malformed(
                field,
                format!(
                    "expected a string, a non-negative integer or `{}`, found `{}`",
                    Self::WILDCARD,
                    value
                ),
            )),
        }
    }

    ///
    /// Whether the identifier of a running chain is matched.
    ///
    pub fn matches(&self, chain_id: u64) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(id) => id.as_str() == chain_id.to_string(),
        }
    }

    ///
    /// The declared representation.
    ///
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => Self::WILDCARD,
            Self::Exact(id) => id.as_str(),
        }
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Id;

    fn parse(value: serde_json::Value) -> Result<Id, crate::error::Error> {
        Id::try_from_value("networks.development.network_id".to_owned(), value)
    }

    #[test]
    fn wildcard() {
        let id = parse(serde_json::json!("*")).expect("Always valid");
        assert_eq!(id, Id::Any);
        assert!(id.matches(1));
        assert!(id.matches(1337));
    }

    #[test]
    fn exact_string() {
        let id = parse(serde_json::json!("5777")).expect("Always valid");
        assert_eq!(id, Id::Exact("5777".to_owned()));
        assert!(id.matches(5777));
        assert!(!id.matches(1));
    }

    #[test]
    fn exact_integer() {
        let id = parse(serde_json::json!(1337)).expect("Always valid");
        assert_eq!(id, Id::Exact("1337".to_owned()));
        assert_eq!(id.to_string(), "1337");
    }

    #[test]
    fn error_empty() {
        let error = parse(serde_json::json!("")).expect_err("Empty identifier");
        assert_eq!(error.field(), Some("networks.development.network_id"));
    }

    #[test]
    fn error_negative() {
        assert!(parse(serde_json::json!(-1)).is_err());
    }

    #[test]
    fn error_type() {
        assert!(parse(serde_json::json!(true)).is_err());
    }
}
