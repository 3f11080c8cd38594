//! Core types for the tree index: identifiers and input records.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier: integer or string, used for both `id` and `parent`.
///
/// `Int(7)` and `Str("7")` are distinct identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Int(i64),
    Str(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Int(n) => write!(f, "{}", n),
            Identifier::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Parses as an integer when possible, otherwise keeps the raw string.
impl FromStr for Identifier {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => Identifier::Int(n),
            Err(_) => Identifier::Str(s.to_string()),
        })
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Int(value)
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Identifier::Int(value.into())
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Str(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Str(value)
    }
}

/// Record: one input item pointing at its parent.
///
/// `kind` keeps the difference between a missing `type` key (`None`) and an
/// explicit `"type": null` (`Some(None)`), so serialized output matches input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Identifier,
    pub parent: Identifier,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub kind: Option<Option<String>>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Record {
    /// Record without a `type` key.
    pub fn new(id: impl Into<Identifier>, parent: impl Into<Identifier>) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            kind: None,
        }
    }

    /// Set the `type` key; `None` writes an explicit null.
    pub fn with_kind(mut self, kind: Option<&str>) -> Self {
        self.kind = Some(kind.map(str::to_string));
        self
    }
}
