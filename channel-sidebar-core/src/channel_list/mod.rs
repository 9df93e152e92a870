//! Community Channel List
//!
//! Turns a community's channel connection into the ordered list shown in the
//! sidebar.
//!
//! ## Pipeline
//!
//! 1. Drop holes in the connection (null edges and null nodes)
//! 2. Hide archived, private-without-membership and blocked channels
//! 3. Drop repeated ids so every entry keeps a unique render key
//! 4. Sort by `orderRank`, or by slug with `general` first
//!
//! Both stages are pure functions over an already-fetched snapshot.

pub mod errors;
pub mod filter;
pub mod model;
pub mod sort;
pub mod types;

pub use errors::MalformedChannelError;
pub use filter::{
    filter_visible_channels, hidden_reason, EmbeddedPermissions, HiddenReason, ViewerContext,
};
pub use model::{
    Channel, ChannelConnection, ChannelEdge, ChannelPermissions, Community, CommunityPermissions,
};
pub use sort::{
    compare_order_rank, compare_slug, general_first, sort_by_order_rank, sort_by_slug,
    sort_channels, SortStrategy,
};
pub use types::{ChannelId, GENERAL_CHANNEL_SLUG};

/// Filter then sort a connection in one step
pub fn visible_channels<V: ViewerContext + ?Sized>(
    edges: &[Option<ChannelEdge>],
    viewer: &V,
) -> Result<Vec<Channel>, MalformedChannelError> {
    filter_visible_channels(edges, viewer).map(sort_channels)
}
