//! Custom assertions for channel lists

use crate::channel_list::{Channel, ChannelId};

/// Assert the exact slug order of a channel list
pub fn assert_slug_order(channels: &[Channel], expected: &[&str]) {
    let actual: Vec<&str> = channels.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(actual, expected, "unexpected channel order");
}

/// Assert that two lists hold the same channels, ignoring order
pub fn assert_same_channels(a: &[Channel], b: &[Channel]) {
    let mut a_ids: Vec<&ChannelId> = a.iter().map(|c| &c.id).collect();
    let mut b_ids: Vec<&ChannelId> = b.iter().map(|c| &c.id).collect();
    a_ids.sort();
    b_ids.sort();
    assert_eq!(a_ids, b_ids, "channel lists differ");
}
