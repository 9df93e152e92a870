//! Visibility filtering of a community's channel edges
//!
//! A channel is shown to the viewer only when it is not archived, the viewer
//! is not blocked from it, and it is either public or the viewer is a member.
//! Holes in the connection (null edges, null nodes) are skipped silently.

use super::errors::MalformedChannelError;
use super::model::{Channel, ChannelEdge, ChannelPermissions};
use super::types::ChannelId;
use crate::metrics::CHANNELS_HIDDEN;
use metrics::counter;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Resolves the current viewer's standing in a channel
pub trait ViewerContext {
    /// Permission facet for `channel`, or `None` if it cannot be determined
    fn permissions_for(&self, channel: &Channel) -> Option<ChannelPermissions>;
}

/// Viewer context that trusts the facet the query attached to each channel
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPermissions;

impl ViewerContext for EmbeddedPermissions {
    fn permissions_for(&self, channel: &Channel) -> Option<ChannelPermissions> {
        channel.channel_permissions
    }
}

/// Why a channel was left out of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HiddenReason {
    Archived,
    /// Private channel the viewer has not joined
    PrivateNonMember,
    Blocked,
    /// Same id as a channel earlier in the connection
    Duplicate,
}

impl HiddenReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            HiddenReason::Archived => "archived",
            HiddenReason::PrivateNonMember => "private_non_member",
            HiddenReason::Blocked => "blocked",
            HiddenReason::Duplicate => "duplicate",
        }
    }
}

/// Decide whether a single channel is hidden from the viewer
///
/// Returns `Ok(None)` for a visible channel. Archived channels are hidden
/// before permissions are consulted, so an archived record without a
/// permission facet is not an error.
pub fn hidden_reason<V: ViewerContext + ?Sized>(
    channel: &Channel,
    viewer: &V,
) -> Result<Option<HiddenReason>, MalformedChannelError> {
    if channel.is_archived {
        return Ok(Some(HiddenReason::Archived));
    }

    let permissions = viewer
        .permissions_for(channel)
        .ok_or_else(|| MalformedChannelError::MissingPermissions(channel.id.clone()))?;

    if channel.is_private && !permissions.is_member {
        return Ok(Some(HiddenReason::PrivateNonMember));
    }

    if permissions.is_blocked {
        return Ok(Some(HiddenReason::Blocked));
    }

    Ok(None)
}

/// Produce the channels the viewer may see, in connection order
///
/// Fails fast on the first present channel whose permissions cannot be
/// resolved; guessing there could expose a private channel.
pub fn filter_visible_channels<V: ViewerContext + ?Sized>(
    edges: &[Option<ChannelEdge>],
    viewer: &V,
) -> Result<Vec<Channel>, MalformedChannelError> {
    let mut seen: HashSet<&ChannelId> = HashSet::new();
    let mut visible = Vec::new();

    let nodes = edges
        .iter()
        .filter_map(|edge| edge.as_ref())
        .filter_map(|edge| edge.node.as_ref());

    for channel in nodes {
        let reason = match hidden_reason(channel, viewer) {
            Ok(reason) => reason,
            Err(e) => {
                warn!(channel_id = %channel.id, "Rejecting channel list: {}", e);
                return Err(e);
            }
        };

        let reason = reason.or_else(|| {
            if seen.insert(&channel.id) {
                None
            } else {
                warn!(channel_id = %channel.id, "Duplicate channel in connection");
                Some(HiddenReason::Duplicate)
            }
        });

        match reason {
            Some(reason) => {
                trace!(channel_id = %channel.id, reason = reason.as_str(), "Hiding channel");
                counter!(CHANNELS_HIDDEN, "reason" => reason.as_str()).increment(1);
            }
            None => visible.push(channel.clone()),
        }
    }

    debug!(
        edges = edges.len(),
        visible = visible.len(),
        "Filtered channel connection"
    );

    Ok(visible)
}
