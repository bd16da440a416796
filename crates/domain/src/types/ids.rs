//! Identifier types
//!
//! Forum user ids arrive as either JSON numbers or numeric strings depending
//! on the upstream session layer. [`Uid`] normalizes both so that ownership
//! checks compare values, not representations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Forum user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Uid(pub i64);

impl Uid {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Uid {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for Uid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self).map_err(|e| format!("Invalid uid '{s}': {e}"))
    }
}

impl<'de> Deserialize<'de> for Uid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawUid {
            Number(i64),
            Text(String),
        }

        match RawUid::deserialize(deserializer)? {
            RawUid::Number(n) => Ok(Self(n)),
            RawUid::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Flag identifier, opaque to the facade.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagId(pub String);

impl FlagId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FlagId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// The acting user of a request, supplied by the upstream request context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub uid: Uid,
}

impl Caller {
    pub const fn new(uid: Uid) -> Self {
        Self { uid }
    }
}
