//! Channel list error types

use super::types::ChannelId;
use thiserror::Error;

/// A channel record the query layer returned in a shape the list cannot
/// safely interpret
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedChannelError {
    /// Without the viewer's permission facet there is no way to tell
    /// whether a private or blocked channel may be shown
    #[error("Channel {0} has no channelPermissions for the current viewer")]
    MissingPermissions(ChannelId),
}

impl MalformedChannelError {
    /// Id of the offending channel
    pub fn channel_id(&self) -> &ChannelId {
        match self {
            MalformedChannelError::MissingPermissions(id) => id,
        }
    }
}
