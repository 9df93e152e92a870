//! Type definitions for channels and communities

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Slug of the community's default channel, always listed first when
/// channels are ordered by slug
pub const GENERAL_CHANNEL_SLUG: &str = "general";

/// Opaque identifier for a Channel
///
/// The query layer hands out string ids, but numeric ids are accepted too
/// and kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct ChannelId(String);

impl ChannelId {
    /// Create a ChannelId from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        ChannelId(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        ChannelId(id.to_string())
    }
}

impl From<u64> for ChannelId {
    fn from(id: u64) -> Self {
        ChannelId(id.to_string())
    }
}

impl From<ChannelId> for String {
    fn from(id: ChannelId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for ChannelId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => ChannelId(text),
            RawId::Number(number) => ChannelId(number.to_string()),
        }
    }
}

/// Deserialize a nullable field, treating `null` like an absent value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
