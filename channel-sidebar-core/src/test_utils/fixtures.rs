//! Test fixtures for creating common test objects

use crate::channel_list::{
    Channel, ChannelConnection, ChannelEdge, ChannelPermissions, Community, CommunityPermissions,
};

/// Builder for creating test channels
///
/// Defaults to a public, unarchived, unranked channel named after its slug
/// that the viewer is a member of.
pub struct TestChannelBuilder {
    channel: Channel,
}

impl TestChannelBuilder {
    pub fn new(id: u64, slug: &str) -> Self {
        Self {
            channel: Channel::new(id, slug, slug),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.channel.name = name.into();
        self
    }

    pub fn order_rank(mut self, rank: f64) -> Self {
        self.channel.order_rank = Some(rank);
        self
    }

    pub fn archived(mut self) -> Self {
        self.channel.is_archived = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.channel.is_private = true;
        self
    }

    /// Viewer is neither member nor blocked
    pub fn outsider(self) -> Self {
        self.permissions(ChannelPermissions::outsider())
    }

    pub fn blocked(self) -> Self {
        self.permissions(ChannelPermissions::blocked())
    }

    pub fn permissions(mut self, permissions: ChannelPermissions) -> Self {
        self.channel.channel_permissions = Some(permissions);
        self
    }

    pub fn without_permissions(mut self) -> Self {
        self.channel.channel_permissions = None;
        self
    }

    pub fn build(self) -> Channel {
        self.channel
    }
}

/// Builder for creating test communities
pub struct TestCommunityBuilder {
    slug: String,
    permissions: CommunityPermissions,
    edges: Option<Vec<Option<ChannelEdge>>>,
}

impl TestCommunityBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            permissions: CommunityPermissions {
                is_member: true,
                ..Default::default()
            },
            edges: Some(Vec::new()),
        }
    }

    pub fn owner(mut self) -> Self {
        self.permissions.is_owner = true;
        self
    }

    pub fn channel(self, channel: Channel) -> Self {
        self.edge(Some(ChannelEdge::new(channel)))
    }

    /// Append a raw edge, including holes
    pub fn edge(mut self, edge: Option<ChannelEdge>) -> Self {
        self.edges.get_or_insert_with(Vec::new).push(edge);
        self
    }

    pub fn without_connection(mut self) -> Self {
        self.edges = None;
        self
    }

    pub fn build(self) -> Community {
        Community {
            id: format!("community-{}", self.slug),
            name: self.slug.clone(),
            slug: self.slug,
            community_permissions: self.permissions,
            channel_connection: self.edges.map(|edges| ChannelConnection { edges }),
        }
    }
}
