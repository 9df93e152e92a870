//! Channel and community records as delivered by the channel connection query
//!
//! Field names follow the query's camelCase wire shape. Nullable booleans
//! decode as `false` and nullable lists as empty; the two nullable levels a
//! connection may legitimately contain (edges and nodes) stay `Option`.

use super::types::{null_as_default, ChannelId, GENERAL_CHANNEL_SLUG};
use serde::{Deserialize, Serialize};

/// A Channel inside a community (read-only to the list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Unique identifier, also the render key of the channel's list entry
    pub id: ChannelId,

    /// Short identifier, unique within the community
    pub slug: String,

    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Optional description/topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Manual position set by a community owner, if any
    #[serde(default)]
    pub order_rank: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_archived: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_private: bool,

    /// The current viewer's standing in this channel
    #[serde(default)]
    pub channel_permissions: Option<ChannelPermissions>,
}

impl Channel {
    /// Create a public, unarchived, unranked channel the viewer belongs to
    pub fn new(id: impl Into<ChannelId>, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Channel {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            description: None,
            order_rank: None,
            is_archived: false,
            is_private: false,
            channel_permissions: Some(ChannelPermissions::member()),
        }
    }

    /// Whether this is the community's default channel
    pub fn is_general(&self) -> bool {
        self.slug == GENERAL_CHANNEL_SLUG
    }

    /// Whether an owner has placed this channel manually
    pub fn has_order_rank(&self) -> bool {
        self.order_rank.is_some()
    }

    /// Name shown in the list, falling back to the slug for unnamed channels
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.slug
        } else {
            &self.name
        }
    }
}

/// Viewer-relative permission facet of a channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPermissions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_member: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_blocked: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_owner: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_moderator: bool,

    /// Join request awaiting approval
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_pending: bool,
}

impl ChannelPermissions {
    /// Plain membership
    pub fn member() -> Self {
        ChannelPermissions {
            is_member: true,
            ..Default::default()
        }
    }

    /// Not a member, not blocked
    pub fn outsider() -> Self {
        ChannelPermissions::default()
    }

    /// Blocked from the channel
    pub fn blocked() -> Self {
        ChannelPermissions {
            is_blocked: true,
            ..Default::default()
        }
    }
}

/// Connection edge; either the edge or its node may be a hole in the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    #[serde(default)]
    pub node: Option<Channel>,
}

impl ChannelEdge {
    /// Wrap a channel in an edge without a cursor
    pub fn new(node: Channel) -> Self {
        ChannelEdge {
            cursor: None,
            node: Some(node),
        }
    }

    /// An edge whose node is missing
    pub fn empty() -> Self {
        ChannelEdge {
            cursor: None,
            node: None,
        }
    }
}

/// Ordered page of channel edges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelConnection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<Option<ChannelEdge>>,
}

impl ChannelConnection {
    /// Build a connection with one present edge per channel
    pub fn from_channels(channels: impl IntoIterator<Item = Channel>) -> Self {
        ChannelConnection {
            edges: channels
                .into_iter()
                .map(|channel| Some(ChannelEdge::new(channel)))
                .collect(),
        }
    }
}

/// Viewer-relative permission facet of a community
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPermissions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_owner: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_moderator: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_member: bool,
}

/// A community (like a Discord server) and its channel connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,

    pub slug: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub community_permissions: CommunityPermissions,

    /// Absent when the query did not resolve the connection
    #[serde(default)]
    pub channel_connection: Option<ChannelConnection>,
}

impl Community {
    /// Whether the current viewer owns the community
    pub fn is_owner(&self) -> bool {
        self.community_permissions.is_owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_channel() {
        let channel = Channel::new("c1", "general", "General");

        assert_eq!(channel.id, ChannelId::new("c1"));
        assert!(channel.is_general());
        assert!(!channel.has_order_rank());
        assert!(!channel.is_archived);
        assert!(!channel.is_private);
        assert_eq!(channel.channel_permissions, Some(ChannelPermissions::member()));
    }

    #[test]
    fn test_display_name_falls_back_to_slug() {
        let mut channel = Channel::new("c1", "design", "");
        assert_eq!(channel.display_name(), "design");

        channel.name = "Design".to_string();
        assert_eq!(channel.display_name(), "Design");
    }

    #[test]
    fn test_decode_channel_with_nulls() {
        let json = r#"{
            "id": "c1",
            "slug": "random",
            "name": null,
            "orderRank": null,
            "isArchived": null,
            "isPrivate": true,
            "channelPermissions": { "isMember": true, "isBlocked": null }
        }"#;

        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.name, "");
        assert_eq!(channel.order_rank, None);
        assert!(!channel.is_archived);
        assert!(channel.is_private);

        let permissions = channel.channel_permissions.unwrap();
        assert!(permissions.is_member);
        assert!(!permissions.is_blocked);
    }

    #[test]
    fn test_decode_channel_without_permissions() {
        let json = r#"{ "id": 3, "slug": "design", "orderRank": 2 }"#;

        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.id, ChannelId::from(3u64));
        assert_eq!(channel.order_rank, Some(2.0));
        assert!(channel.channel_permissions.is_none());
    }

    #[test]
    fn test_decode_connection_with_holes() {
        let json = r#"{
            "edges": [
                null,
                { "node": null },
                { "cursor": "abc", "node": { "id": "1", "slug": "general" } }
            ]
        }"#;

        let connection: ChannelConnection = serde_json::from_str(json).unwrap();
        assert_eq!(connection.edges.len(), 3);
        assert!(connection.edges[0].is_none());
        assert_eq!(connection.edges[1], Some(ChannelEdge::empty()));

        let edge = connection.edges[2].as_ref().unwrap();
        assert_eq!(edge.cursor.as_deref(), Some("abc"));
        assert_eq!(edge.node.as_ref().unwrap().slug, "general");
    }

    #[test]
    fn test_decode_community_defaults() {
        let json = r#"{ "id": "x", "slug": "rust", "communityPermissions": null }"#;

        let community: Community = serde_json::from_str(json).unwrap();
        assert!(!community.is_owner());
        assert!(community.channel_connection.is_none());
    }
}
