//! Badge sub-records from the `badges` and `badge-info` tags.

use crate::wire::BadgeKind;

/// One chat badge: its classification plus the version string.
///
/// Versions stay strings; Twitch uses them for subscriber tenure, bits
/// thresholds, and other badge-specific meanings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Badge {
    /// Badge classification; unknown names map to [`BadgeKind::Other`].
    pub kind: BadgeKind,
    /// Badge version, verbatim.
    pub version: String,
}

impl Badge {
    /// Parse one `name/version` pair. Pairs without a `/` are rejected.
    pub fn parse(pair: &str) -> Option<Badge> {
        let (name, version) = pair.split_once('/')?;
        if name.is_empty() {
            return None;
        }
        Some(Badge {
            kind: BadgeKind::from_wire(name),
            version: version.to_string(),
        })
    }
}

/// Parse a comma-separated badge list.
///
/// One bad pair is skipped without invalidating the rest.
pub(crate) fn parse_badges(value: &str) -> Vec<Badge> {
    value.split(',').filter_map(Badge::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_badge_list() {
        let badges = parse_badges("broadcaster/1,subscriber/12,bits/1000");
        assert_eq!(badges.len(), 3);
        assert_eq!(badges[0].kind, BadgeKind::Broadcaster);
        assert_eq!(badges[1].kind, BadgeKind::Subscriber);
        assert_eq!(badges[1].version, "12");
        assert_eq!(badges[2].kind, BadgeKind::Bits);
        assert_eq!(badges[2].version, "1000");
    }

    #[test]
    fn test_unknown_badge_maps_to_other() {
        let badges = parse_badges("glhf-pledge/1");
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].kind, BadgeKind::Other);
        assert_eq!(badges[0].version, "1");
    }

    #[test]
    fn test_bad_pair_does_not_invalidate_list() {
        let badges = parse_badges("moderator/1,broken,subscriber/6");
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0].kind, BadgeKind::Moderator);
        assert_eq!(badges[1].kind, BadgeKind::Subscriber);
    }

    #[test]
    fn test_empty_value_yields_no_badges() {
        assert!(parse_badges("").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let badges = parse_badges("vip/1,partner/1");
        assert_eq!(badges[0].kind, BadgeKind::Vip);
        assert_eq!(badges[1].kind, BadgeKind::Partner);
    }
}
