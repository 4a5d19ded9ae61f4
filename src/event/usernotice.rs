//! USERNOTICE payloads and secondary classification via `msg-id`.
//!
//! Every USERNOTICE yields the generic [`UserNoticeEvent`]; a recognized
//! `msg-id` adds one specific event whose payload layers its `msg-param-*`
//! extension on the common tag set.

use crate::channel::Channel;
use crate::tags::records::{RaidTags, RitualTags, SubGiftTags, SubTags, UserNoticeTags};
use crate::tags::TagMap;
use crate::wire::UserNoticeKind;

use super::Event;

/// The generic USERNOTICE event, raised for every USERNOTICE.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserNoticeEvent {
    /// Where the notice was sent.
    pub channel: Channel,
    /// The user's own message, empty when they wrote none.
    pub message: String,
    /// Decoded common tag set.
    pub tags: UserNoticeTags,
}

/// A new subscription (`msg-id=sub`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionEvent {
    /// Where the notice was sent.
    pub channel: Channel,
    /// The subscriber's own message, empty when they wrote none.
    pub message: String,
    /// Common tag set.
    pub base: UserNoticeTags,
    /// Subscription details.
    pub sub: SubTags,
}

/// A continued subscription (`msg-id=resub`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResubscriptionEvent {
    /// Where the notice was sent.
    pub channel: Channel,
    /// The subscriber's own message, empty when they wrote none.
    pub message: String,
    /// Common tag set.
    pub base: UserNoticeTags,
    /// Subscription details.
    pub sub: SubTags,
}

/// A gifted subscription (`msg-id=subgift`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubGiftEvent {
    /// Where the notice was sent.
    pub channel: Channel,
    /// Common tag set; the gifter's identity.
    pub base: UserNoticeTags,
    /// Recipient identity and plan.
    pub gift: SubGiftTags,
}

/// An incoming raid (`msg-id=raid`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaidEvent {
    /// Where the notice was sent.
    pub channel: Channel,
    /// Common tag set.
    pub base: UserNoticeTags,
    /// Raider identity and viewer count.
    pub raid: RaidTags,
}

/// A channel ritual (`msg-id=ritual`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RitualEvent {
    /// Where the notice was sent.
    pub channel: Channel,
    /// The user's own message, empty when they wrote none.
    pub message: String,
    /// Common tag set.
    pub base: UserNoticeTags,
    /// Ritual classification.
    pub ritual: RitualTags,
}

/// Build the specific event for one USERNOTICE, if its `msg-id` is known.
pub(crate) fn classify(channel: &Channel, tags: &TagMap, message: &str) -> Option<Event> {
    let base = UserNoticeTags::from_tags(tags);
    let channel = channel.clone();
    match base.kind {
        UserNoticeKind::Sub => Some(Event::Subscription(SubscriptionEvent {
            channel,
            message: message.to_string(),
            sub: SubTags::from_tags(tags),
            base,
        })),
        UserNoticeKind::Resub => Some(Event::Resubscription(ResubscriptionEvent {
            channel,
            message: message.to_string(),
            sub: SubTags::from_tags(tags),
            base,
        })),
        UserNoticeKind::SubGift => Some(Event::SubGift(SubGiftEvent {
            channel,
            gift: SubGiftTags::from_tags(tags),
            base,
        })),
        UserNoticeKind::Raid => Some(Event::Raid(RaidEvent {
            channel,
            raid: RaidTags::from_tags(tags),
            base,
        })),
        UserNoticeKind::Ritual => Some(Event::Ritual(RitualEvent {
            channel,
            message: message.to_string(),
            ritual: RitualTags::from_tags(tags),
            base,
        })),
        _ => None,
    }
}
