//! Community channel sidebar
//!
//! Filters and orders a community's channels for the current viewer and
//! builds the sidebar section that lists them.
//!
//! ```
//! use channel_sidebar_core::{
//!     build_sidebar, ChannelQueryState, EmbeddedPermissions, SidebarConfig,
//! };
//!
//! let json = r#"{"data": {"community": {
//!     "id": "c", "slug": "rust",
//!     "channelConnection": {"edges": [
//!         {"node": {"id": "2", "slug": "help", "channelPermissions": {"isMember": true}}},
//!         {"node": {"id": "1", "slug": "general", "channelPermissions": {"isMember": true}}}
//!     ]}
//! }}}"#;
//!
//! let query = ChannelQueryState::from_json(json).unwrap();
//! let view = build_sidebar(&query, &EmbeddedPermissions, &SidebarConfig::default())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(view.channels()[0].slug, "general");
//! ```

pub mod channel_list;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod query;
pub mod sidebar;
pub mod test_utils;

pub use channel_list::{
    filter_visible_channels, sort_channels, Channel, ChannelEdge, ChannelId, ChannelPermissions,
    Community, EmbeddedPermissions, MalformedChannelError, ViewerContext,
};
pub use config::{Config, SidebarConfig};
pub use logging::{init_logging, LogLevel};
pub use query::{ChannelQueryState, SnapshotError};
pub use sidebar::{build_sidebar, render_text, SidebarBody, SidebarView};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _ = LogLevel::Info;
        assert!(sort_channels(Vec::new()).is_empty());
    }
}
