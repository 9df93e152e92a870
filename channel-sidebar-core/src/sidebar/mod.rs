//! Channel sidebar section
//!
//! Builds the view model of a community's channel list from the current
//! query state: a loading placeholder while the request is in flight, the
//! filtered and sorted channels once it resolves, and a manage affordance
//! for community owners.

pub mod render;

pub use render::{
    render_entries, render_text, ChannelItemRenderer, RenderError, RenderedEntry, TextRenderer,
};

use crate::channel_list::{visible_channels, Channel, MalformedChannelError, ViewerContext};
use crate::config::SidebarConfig;
use crate::metrics::{Timer, BUILD_DURATION_MS};
use crate::query::ChannelQueryState;
use serde::Serialize;
use tracing::debug;

/// Owner-only link to the community's channel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManageAffordance {
    pub tooltip: String,
    pub glyph: String,
    pub href: String,
}

/// Content below the section header
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "channels", rename_all = "snake_case")]
pub enum SidebarBody {
    /// Placeholder shown while the query is in flight
    Loading,
    /// Visible channels in display order
    Channels(Vec<Channel>),
}

/// Everything the channel section of the sidebar displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarView {
    pub heading: String,
    pub manage: Option<ManageAffordance>,
    pub body: SidebarBody,
}

impl SidebarView {
    /// Channels to list, empty while loading
    pub fn channels(&self) -> &[Channel] {
        match &self.body {
            SidebarBody::Loading => &[],
            SidebarBody::Channels(channels) => channels,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.body, SidebarBody::Loading)
    }
}

/// Build the channel section for the current query state
///
/// Returns `Ok(None)` when there is nothing to show: the query finished but
/// resolved no community, or the community has no channel connection.
pub fn build_sidebar<V: ViewerContext + ?Sized>(
    query: &ChannelQueryState,
    viewer: &V,
    settings: &SidebarConfig,
) -> Result<Option<SidebarView>, MalformedChannelError> {
    if query.loading {
        return Ok(Some(SidebarView {
            heading: settings.heading.clone(),
            manage: None,
            body: SidebarBody::Loading,
        }));
    }

    let Some(community) = query.community.as_ref() else {
        debug!("No community in query result");
        return Ok(None);
    };
    let Some(connection) = community.channel_connection.as_ref() else {
        debug!(community = %community.slug, "Community has no channel connection");
        return Ok(None);
    };

    let timer = Timer::start(BUILD_DURATION_MS);
    let channels = visible_channels(&connection.edges, viewer)?;
    timer.stop();

    let manage = community.is_owner().then(|| ManageAffordance {
        tooltip: settings.manage_tooltip.clone(),
        glyph: settings.manage_glyph.clone(),
        href: settings.settings_href(&community.slug),
    });

    debug!(
        community = %community.slug,
        channels = channels.len(),
        owner = manage.is_some(),
        "Built channel sidebar"
    );

    Ok(Some(SidebarView {
        heading: settings.heading.clone(),
        manage,
        body: SidebarBody::Channels(channels),
    }))
}
