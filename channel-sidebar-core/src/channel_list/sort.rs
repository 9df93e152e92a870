//! Display ordering of visible channels
//!
//! Once any channel carries an `orderRank` the owner's manual order wins and
//! unranked channels trail behind. Otherwise channels are listed by slug with
//! `general` pulled to the top.

use super::model::Channel;
use std::cmp::Ordering;
use tracing::debug;

/// How a set of channels will be ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Ascending `orderRank`, unranked last
    OrderRank,
    /// Lexicographic slug, `general` first
    Slug,
}

impl SortStrategy {
    /// Pick the strategy for a set of channels
    pub fn for_channels(channels: &[Channel]) -> Self {
        if channels.iter().any(Channel::has_order_rank) {
            SortStrategy::OrderRank
        } else {
            SortStrategy::Slug
        }
    }
}

/// Total order on `orderRank` with absent ranks after every present one
pub fn compare_order_rank(a: &Channel, b: &Channel) -> Ordering {
    match (a.order_rank, b.order_rank) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Byte-wise comparison of slugs
///
/// This is code point order; it differs from UTF-16 code unit order only
/// for non-BMP characters against characters in U+E000..=U+FFFF.
pub fn compare_slug(a: &Channel, b: &Channel) -> Ordering {
    a.slug.cmp(&b.slug)
}

/// Stable sort by `orderRank`; equal ranks and unranked channels keep their
/// relative input order
pub fn sort_by_order_rank(mut channels: Vec<Channel>) -> Vec<Channel> {
    channels.sort_by(compare_order_rank);
    channels
}

/// Sort by slug, then move `general` to the front
pub fn sort_by_slug(mut channels: Vec<Channel>) -> Vec<Channel> {
    channels.sort_by(compare_slug);
    general_first(channels)
}

/// Move every `general` channel to the front, leaving the rest in place
pub fn general_first(channels: Vec<Channel>) -> Vec<Channel> {
    let (mut general, rest): (Vec<_>, Vec<_>) =
        channels.into_iter().partition(Channel::is_general);
    general.extend(rest);
    general
}

/// Order visible channels for display
pub fn sort_channels(channels: Vec<Channel>) -> Vec<Channel> {
    if channels.is_empty() {
        return channels;
    }

    let strategy = SortStrategy::for_channels(&channels);
    debug!(count = channels.len(), ?strategy, "Sorting channels");

    match strategy {
        SortStrategy::OrderRank => sort_by_order_rank(channels),
        SortStrategy::Slug => sort_by_slug(channels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_slug_order, TestChannelBuilder};

    fn ranked(id: u64, slug: &str, rank: Option<f64>) -> Channel {
        let builder = TestChannelBuilder::new(id, slug);
        match rank {
            Some(rank) => builder.order_rank(rank).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn test_rank_ordering_puts_unranked_last() {
        let channels = vec![
            ranked(1, "b", Some(2.0)),
            ranked(2, "a", Some(1.0)),
            ranked(3, "c", None),
        ];

        assert_eq!(SortStrategy::for_channels(&channels), SortStrategy::OrderRank);
        assert_slug_order(&sort_channels(channels), &["a", "b", "c"]);
    }

    #[test]
    fn test_slug_ordering_with_general_first() {
        let channels = vec![
            ranked(1, "design", None),
            ranked(2, "general", None),
            ranked(3, "announcements", None),
        ];

        assert_eq!(SortStrategy::for_channels(&channels), SortStrategy::Slug);
        assert_slug_order(&sort_channels(channels), &["general", "announcements", "design"]);
    }

    #[test]
    fn test_slug_ordering_without_general() {
        let channels = vec![ranked(1, "zeta", None), ranked(2, "alpha", None)];
        assert_slug_order(&sort_channels(channels), &["alpha", "zeta"]);
    }

    #[test]
    fn test_rank_ordering_ignores_general() {
        let channels = vec![
            ranked(1, "general", Some(5.0)),
            ranked(2, "random", Some(1.0)),
        ];
        assert_slug_order(&sort_channels(channels), &["random", "general"]);
    }

    #[test]
    fn test_rank_ordering_unranked_general_goes_last() {
        let channels = vec![
            ranked(1, "general", None),
            ranked(2, "random", Some(2.0)),
            ranked(3, "help", Some(1.0)),
        ];
        assert_slug_order(&sort_channels(channels), &["help", "random", "general"]);
    }

    #[test]
    fn test_compare_slug_uses_code_point_order() {
        let private_use = ranked(1, "\u{E000}", None);
        let emoji = ranked(2, "\u{1F600}", None);
        assert_eq!(compare_slug(&private_use, &emoji), Ordering::Less);
    }

    #[test]
    fn test_rank_ties_and_unranked_are_stable() {
        let channels = vec![
            ranked(1, "u1", None),
            ranked(2, "t1", Some(1.0)),
            ranked(3, "u2", None),
            ranked(4, "t2", Some(1.0)),
            ranked(5, "u3", None),
            ranked(6, "first", Some(0.0)),
        ];

        assert_slug_order(&sort_channels(channels), &["first", "t1", "t2", "u1", "u2", "u3"]);
    }

    #[test]
    fn test_negative_and_fractional_ranks() {
        let channels = vec![
            ranked(1, "b", Some(0.5)),
            ranked(2, "a", Some(-3.0)),
            ranked(3, "c", Some(10.0)),
        ];
        assert_slug_order(&sort_channels(channels), &["a", "b", "c"]);
    }

    #[test]
    fn test_general_first_keeps_duplicates() {
        let channels = vec![
            ranked(1, "alpha", None),
            ranked(2, "general", None),
            ranked(3, "beta", None),
            ranked(4, "general", None),
        ];

        let sorted = general_first(channels);
        let ids: Vec<_> = sorted.iter().map(|c| c.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_compare_order_rank_is_total() {
        let a = ranked(1, "a", Some(1.0));
        let b = ranked(2, "b", None);
        let c = ranked(3, "c", None);

        assert_eq!(compare_order_rank(&a, &b), Ordering::Less);
        assert_eq!(compare_order_rank(&b, &a), Ordering::Greater);
        assert_eq!(compare_order_rank(&b, &c), Ordering::Equal);
        assert_eq!(compare_order_rank(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_channels(Vec::new()).is_empty());
        assert!(sort_by_slug(Vec::new()).is_empty());
        assert!(sort_by_order_rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_sort_is_idempotent() {
        let channels = vec![
            ranked(1, "design", None),
            ranked(2, "general", None),
            ranked(3, "announcements", None),
        ];

        let once = sort_channels(channels);
        let twice = sort_channels(once.clone());
        assert_eq!(once, twice);
    }
}
