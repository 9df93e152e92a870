//! Channel connection query results
//!
//! The query itself runs elsewhere; this module decodes the GraphQL response
//! it produced and pairs it with the network layer's loading flag.

use crate::channel_list::Community;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors decoding a query response
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to decode query response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Query returned errors: {0}")]
    Query(String),
}

/// What the data-fetching layer currently knows about a community's channels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelQueryState {
    /// A request is in flight and no result should be shown yet
    pub loading: bool,

    /// Resolved community, if the query found one
    pub community: Option<Community>,
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    data: Option<ResponseData>,

    /// Some callers hand over `data` already unwrapped
    #[serde(default)]
    community: Option<Community>,

    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(default)]
    community: Option<Community>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl ChannelQueryState {
    /// A request still in flight
    pub fn loading() -> Self {
        ChannelQueryState {
            loading: true,
            community: None,
        }
    }

    /// A finished request
    pub fn ready(community: Option<Community>) -> Self {
        ChannelQueryState {
            loading: false,
            community,
        }
    }

    /// Decode a GraphQL response body
    ///
    /// Accepts either the full `{"data": {"community": ...}}` envelope or the
    /// unwrapped `{"community": ...}` payload. Any entry in `errors` fails the
    /// decode, with all messages joined.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let envelope: ResponseEnvelope = serde_json::from_str(json)?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
            return Err(SnapshotError::Query(messages.join("; ")));
        }

        let community = envelope
            .data
            .and_then(|data| data.community)
            .or(envelope.community);

        debug!(
            community = ?community.as_ref().map(|c| c.slug.as_str()),
            "Decoded channel query response"
        );

        Ok(ChannelQueryState::ready(community))
    }

    /// Mark the state as loading, keeping any previous result
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}
