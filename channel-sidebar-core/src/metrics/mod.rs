//! Metric names and descriptions for the channel list
//!
//! Recording goes through the `metrics` facade; the embedding application
//! decides whether a recorder is installed.

use metrics::{describe_counter, describe_histogram, histogram};
use std::time::Instant;

/// Channels left out of the list, labelled by `reason`
pub const CHANNELS_HIDDEN: &str = "channel_list.hidden";

/// List entries rendered successfully
pub const ENTRIES_RENDERED: &str = "channel_list.rendered";

/// List entries whose renderer failed
pub const ENTRIES_FAILED: &str = "channel_list.render_failed";

/// Time spent building a sidebar from a query state
pub const BUILD_DURATION_MS: &str = "channel_list.build.duration_ms";

/// Initialize metrics with descriptions
pub fn init_metrics() {
    describe_counter!(CHANNELS_HIDDEN, "Channels hidden from the viewer");
    describe_counter!(ENTRIES_RENDERED, "Channel list entries rendered");
    describe_counter!(ENTRIES_FAILED, "Channel list entries that failed to render");
    describe_histogram!(BUILD_DURATION_MS, "Sidebar build duration in milliseconds");
}

/// Timer for measuring operation duration
pub struct Timer {
    name: &'static str,
    start: Instant,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Stop the timer and record the duration
    pub fn stop(self) {
        let duration = self.start.elapsed();
        histogram!(self.name).record(duration.as_secs_f64() * 1000.0);
    }
}
