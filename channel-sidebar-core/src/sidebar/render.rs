//! Per-entry rendering with failure isolation

use super::SidebarView;
use crate::channel_list::{Channel, ChannelId};
use crate::metrics::{ENTRIES_FAILED, ENTRIES_RENDERED};
use metrics::counter;
use thiserror::Error;
use tracing::warn;

/// Failure to render a single list entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Channel {0} has neither a name nor a slug")]
    Unnamed(ChannelId),

    #[error("Failed to render channel {id}: {reason}")]
    Failed { id: ChannelId, reason: String },
}

/// Renders one channel as a list entry
pub trait ChannelItemRenderer {
    type Output;

    fn render_item(&mut self, channel: &Channel) -> Result<Self::Output, RenderError>;
}

/// Outcome of rendering one entry, keyed by channel id
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEntry<T> {
    pub key: ChannelId,
    pub outcome: Result<T, RenderError>,
}

impl<T> RenderedEntry<T> {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn output(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }
}

/// Render every channel, keeping one failed entry from affecting the others
pub fn render_entries<R: ChannelItemRenderer + ?Sized>(
    channels: &[Channel],
    renderer: &mut R,
) -> Vec<RenderedEntry<R::Output>> {
    channels
        .iter()
        .map(|channel| {
            let outcome = renderer.render_item(channel);
            match &outcome {
                Ok(_) => counter!(ENTRIES_RENDERED).increment(1),
                Err(e) => {
                    warn!(channel_id = %channel.id, "Channel entry failed to render: {}", e);
                    counter!(ENTRIES_FAILED).increment(1);
                }
            }
            RenderedEntry {
                key: channel.id.clone(),
                outcome,
            }
        })
        .collect()
}

/// Plain-text entry renderer: `# name`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ChannelItemRenderer for TextRenderer {
    type Output = String;

    fn render_item(&mut self, channel: &Channel) -> Result<String, RenderError> {
        let name = channel.display_name();
        if name.trim().is_empty() {
            return Err(RenderError::Unnamed(channel.id.clone()));
        }

        let mut line = format!("# {}", name);
        if channel.is_private {
            line.push_str(" (private)");
        }
        Ok(line)
    }
}

/// Render a whole sidebar section for a terminal
pub fn render_text(view: &SidebarView) -> String {
    let mut out = view.heading.clone();
    if let Some(manage) = &view.manage {
        out.push_str(&format!("  [{}: {}]", manage.tooltip, manage.href));
    }
    out.push('\n');

    if view.is_loading() {
        out.push_str("  Loading...\n");
        return out;
    }

    for entry in render_entries(view.channels(), &mut TextRenderer) {
        let line = match entry.outcome {
            Ok(line) => line,
            Err(_) => format!("! channel {} unavailable", entry.key),
        };
        out.push_str(&format!("  {}\n", line));
    }

    out
}
