//! Typed tag records, one per tag-bearing command.
//!
//! Each record's `from_tags` constructor is an explicit field-by-field
//! decode table over the tag map. Decoding is total: every field falls back
//! to its type default, and one field's failure never touches its siblings.
//! The `presence` field records whether the line carried a tag section at
//! all; per-key presence stays queryable on the originating [`TagMap`].

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::{Badge, Emote, TagMap, TagPresence};
use crate::color::Color;
use crate::wire::{Flags, RitualKind, RoomStates, SubPlan, UserNoticeKind, UserType};

/// Tags on a PRIVMSG chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatMessageTags {
    /// Whether the line carried tags at all.
    pub presence: TagPresence,
    /// `badges`
    pub badges: Vec<Badge>,
    /// `badge-info` — badge metadata pairs, e.g. exact subscriber tenure.
    pub badge_info: Vec<Badge>,
    /// `bits` — cheered bits, `0` when the message carried none.
    pub bits: u64,
    /// `color`
    pub color: Color,
    /// `display-name`
    pub display_name: String,
    /// `emotes`
    pub emotes: Vec<Emote>,
    /// `id` — server-assigned message id.
    pub id: String,
    /// `mod`
    pub moderator: bool,
    /// `room-id`
    pub room_id: String,
    /// `subscriber`
    pub subscriber: bool,
    /// `tmi-sent-ts`
    pub sent_at: DateTime<Utc>,
    /// `turbo`
    pub turbo: bool,
    /// `user-id`
    pub user_id: String,
    /// `user-type`
    pub user_type: UserType,
}

impl ChatMessageTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> ChatMessageTags {
        ChatMessageTags {
            presence: tags.record_presence(),
            badges: tags.badges("badges"),
            badge_info: tags.badges("badge-info"),
            bits: tags.unsigned("bits"),
            color: tags.color("color"),
            display_name: tags.string("display-name"),
            emotes: tags.emotes("emotes"),
            id: tags.string("id"),
            moderator: tags.boolean("mod"),
            room_id: tags.string("room-id"),
            subscriber: tags.boolean("subscriber"),
            sent_at: tags.timestamp("tmi-sent-ts"),
            turbo: tags.boolean("turbo"),
            user_id: tags.string("user-id"),
            user_type: tags.wire("user-type"),
        }
    }
}

/// Tags on a WHISPER message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhisperTags {
    /// Whether the line carried tags at all.
    pub presence: TagPresence,
    /// `badges`
    pub badges: Vec<Badge>,
    /// `color`
    pub color: Color,
    /// `display-name`
    pub display_name: String,
    /// `emotes`
    pub emotes: Vec<Emote>,
    /// `message-id` — per-thread sequence number.
    pub message_id: String,
    /// `thread-id`
    pub thread_id: String,
    /// `turbo`
    pub turbo: bool,
    /// `user-id`
    pub user_id: String,
    /// `user-type`
    pub user_type: UserType,
}

impl WhisperTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> WhisperTags {
        WhisperTags {
            presence: tags.record_presence(),
            badges: tags.badges("badges"),
            color: tags.color("color"),
            display_name: tags.string("display-name"),
            emotes: tags.emotes("emotes"),
            message_id: tags.string("message-id"),
            thread_id: tags.string("thread-id"),
            turbo: tags.boolean("turbo"),
            user_id: tags.string("user-id"),
            user_type: tags.wire("user-type"),
        }
    }
}

/// Tags on a CLEARCHAT ban, timeout, or chat clear.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearChatTags {
    /// Whether the line carried tags at all.
    pub presence: TagPresence,
    /// `ban-duration` — zero for permanent bans; distinguish via
    /// [`TagMap::presence`] on the key.
    pub ban_duration: Duration,
    /// `ban-reason`
    pub ban_reason: String,
    /// `room-id`
    pub room_id: String,
    /// `target-user-id`
    pub target_user_id: String,
    /// `tmi-sent-ts`
    pub sent_at: DateTime<Utc>,
}

impl ClearChatTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> ClearChatTags {
        ClearChatTags {
            presence: tags.record_presence(),
            ban_duration: tags.seconds("ban-duration"),
            ban_reason: tags.string("ban-reason"),
            room_id: tags.string("room-id"),
            target_user_id: tags.string("target-user-id"),
            sent_at: tags.timestamp("tmi-sent-ts"),
        }
    }
}

/// Tags on GLOBALUSERSTATE, sent once after login.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalUserStateTags {
    /// Whether the line carried tags at all.
    pub presence: TagPresence,
    /// `badges`
    pub badges: Vec<Badge>,
    /// `color`
    pub color: Color,
    /// `display-name`
    pub display_name: String,
    /// `emote-sets`
    pub emote_sets: Vec<String>,
    /// `user-id`
    pub user_id: String,
    /// `user-type`
    pub user_type: UserType,
}

impl GlobalUserStateTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> GlobalUserStateTags {
        GlobalUserStateTags {
            presence: tags.record_presence(),
            badges: tags.badges("badges"),
            color: tags.color("color"),
            display_name: tags.string("display-name"),
            emote_sets: tags.list("emote-sets", ','),
            user_id: tags.string("user-id"),
            user_type: tags.wire("user-type"),
        }
    }
}

/// Tags on USERSTATE, sent after joining or sending to a channel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserStateTags {
    /// Whether the line carried tags at all.
    pub presence: TagPresence,
    /// `badges`
    pub badges: Vec<Badge>,
    /// `color`
    pub color: Color,
    /// `display-name`
    pub display_name: String,
    /// `emote-sets`
    pub emote_sets: Vec<String>,
    /// `mod`
    pub moderator: bool,
    /// `subscriber`
    pub subscriber: bool,
    /// `user-type`
    pub user_type: UserType,
}

impl UserStateTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> UserStateTags {
        UserStateTags {
            presence: tags.record_presence(),
            badges: tags.badges("badges"),
            color: tags.color("color"),
            display_name: tags.string("display-name"),
            emote_sets: tags.list("emote-sets", ','),
            moderator: tags.boolean("mod"),
            subscriber: tags.boolean("subscriber"),
            user_type: tags.wire("user-type"),
        }
    }
}

/// Room settings shared by stream-chat and chat-room ROOMSTATE records.
///
/// ROOMSTATE messages are partial diffs: `changed` marks which settings this
/// particular message carried, and is never empty when any setting field was
/// populated from a real tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSettings {
    /// `emote-only`
    pub emote_only: bool,
    /// `r9k`
    pub r9k: bool,
    /// `slow` — minimum seconds between messages.
    pub slow: Duration,
    /// `followers-only` — minutes of required followage; `-1` disabled,
    /// `0` all followers.
    pub followers_only: i64,
    /// `subs-only`
    pub subs_only: bool,
    /// Which settings this message actually carried.
    pub changed: Flags<RoomStates>,
}

impl RoomSettings {
    fn from_tags(tags: &TagMap) -> RoomSettings {
        let mut changed = Flags::empty();
        if tags.presence("emote-only") == TagPresence::Present {
            changed.insert(RoomStates::EmoteOnly);
        }
        if tags.presence("r9k") == TagPresence::Present {
            changed.insert(RoomStates::R9k);
        }
        if tags.presence("slow") == TagPresence::Present {
            changed.insert(RoomStates::Slow);
        }
        if tags.presence("followers-only") == TagPresence::Present {
            changed.insert(RoomStates::FollowersOnly);
        }
        if tags.presence("subs-only") == TagPresence::Present {
            changed.insert(RoomStates::SubsOnly);
        }
        RoomSettings {
            emote_only: tags.boolean("emote-only"),
            r9k: tags.boolean("r9k"),
            slow: tags.seconds("slow"),
            followers_only: tags
                .raw("followers-only")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(-1),
            subs_only: tags.boolean("subs-only"),
            changed,
        }
    }
}

/// Tags on a stream-chat ROOMSTATE.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomStateTags {
    /// Whether the line carried tags at all.
    pub presence: TagPresence,
    /// Shared settings diff.
    pub settings: RoomSettings,
    /// `broadcaster-lang` — stream chat only.
    pub broadcaster_lang: String,
    /// `room-id`
    pub room_id: String,
}

impl RoomStateTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> RoomStateTags {
        let mut settings = RoomSettings::from_tags(tags);
        if tags.presence("broadcaster-lang") == TagPresence::Present {
            settings.changed.insert(RoomStates::BroadcasterLang);
        }
        RoomStateTags {
            presence: tags.record_presence(),
            settings,
            broadcaster_lang: tags.string("broadcaster-lang"),
            room_id: tags.string("room-id"),
        }
    }
}

/// Tags on a chat-room ROOMSTATE.
///
/// Chat rooms have no broadcaster language; the room identity arrives in
/// the channel parameter, not the tags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatRoomStateTags {
    /// Whether the line carried tags at all.
    pub presence: TagPresence,
    /// Shared settings diff.
    pub settings: RoomSettings,
}

impl ChatRoomStateTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> ChatRoomStateTags {
        ChatRoomStateTags {
            presence: tags.record_presence(),
            settings: RoomSettings::from_tags(tags),
        }
    }
}

/// The tag set every USERNOTICE shares, whatever its `msg-id`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserNoticeTags {
    /// Whether the line carried tags at all.
    pub presence: TagPresence,
    /// `badges`
    pub badges: Vec<Badge>,
    /// `badge-info`
    pub badge_info: Vec<Badge>,
    /// `color`
    pub color: Color,
    /// `display-name`
    pub display_name: String,
    /// `emotes`
    pub emotes: Vec<Emote>,
    /// `id` — server-assigned message id.
    pub id: String,
    /// `login`
    pub login: String,
    /// `mod`
    pub moderator: bool,
    /// `msg-id` — secondary classification.
    pub kind: UserNoticeKind,
    /// `room-id`
    pub room_id: String,
    /// `subscriber`
    pub subscriber: bool,
    /// `system-msg` — Twitch's rendered description.
    pub system_msg: String,
    /// `tmi-sent-ts`
    pub sent_at: DateTime<Utc>,
    /// `turbo`
    pub turbo: bool,
    /// `user-id`
    pub user_id: String,
    /// `user-type`
    pub user_type: UserType,
}

impl UserNoticeTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> UserNoticeTags {
        UserNoticeTags {
            presence: tags.record_presence(),
            badges: tags.badges("badges"),
            badge_info: tags.badges("badge-info"),
            color: tags.color("color"),
            display_name: tags.string("display-name"),
            emotes: tags.emotes("emotes"),
            id: tags.string("id"),
            login: tags.string("login"),
            moderator: tags.boolean("mod"),
            kind: tags.wire("msg-id"),
            room_id: tags.string("room-id"),
            subscriber: tags.boolean("subscriber"),
            system_msg: tags.string("system-msg"),
            sent_at: tags.timestamp("tmi-sent-ts"),
            turbo: tags.boolean("turbo"),
            user_id: tags.string("user-id"),
            user_type: tags.wire("user-type"),
        }
    }
}

/// `msg-param-*` extension for `sub` and `resub` notices.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubTags {
    /// `msg-param-cumulative-months`
    pub cumulative_months: u64,
    /// `msg-param-should-share-streak`
    pub should_share_streak: bool,
    /// `msg-param-streak-months`
    pub streak_months: u64,
    /// `msg-param-sub-plan`
    pub plan: SubPlan,
    /// `msg-param-sub-plan-name`
    pub plan_name: String,
}

impl SubTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> SubTags {
        SubTags {
            cumulative_months: tags.unsigned("msg-param-cumulative-months"),
            should_share_streak: tags.boolean("msg-param-should-share-streak"),
            streak_months: tags.unsigned("msg-param-streak-months"),
            plan: tags.wire("msg-param-sub-plan"),
            plan_name: tags.string("msg-param-sub-plan-name"),
        }
    }
}

/// `msg-param-*` extension for `subgift` notices.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubGiftTags {
    /// `msg-param-months`
    pub months: u64,
    /// `msg-param-recipient-display-name`
    pub recipient_display_name: String,
    /// `msg-param-recipient-id`
    pub recipient_id: String,
    /// `msg-param-recipient-user-name`
    pub recipient_user_name: String,
    /// `msg-param-sub-plan`
    pub plan: SubPlan,
    /// `msg-param-sub-plan-name`
    pub plan_name: String,
}

impl SubGiftTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> SubGiftTags {
        SubGiftTags {
            months: tags.unsigned("msg-param-months"),
            recipient_display_name: tags.string("msg-param-recipient-display-name"),
            recipient_id: tags.string("msg-param-recipient-id"),
            recipient_user_name: tags.string("msg-param-recipient-user-name"),
            plan: tags.wire("msg-param-sub-plan"),
            plan_name: tags.string("msg-param-sub-plan-name"),
        }
    }
}

/// `msg-param-*` extension for `raid` notices.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaidTags {
    /// `msg-param-displayName`
    pub display_name: String,
    /// `msg-param-login`
    pub login: String,
    /// `msg-param-viewerCount`
    pub viewer_count: u64,
}

impl RaidTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> RaidTags {
        RaidTags {
            display_name: tags.string("msg-param-displayName"),
            login: tags.string("msg-param-login"),
            viewer_count: tags.unsigned("msg-param-viewerCount"),
        }
    }
}

/// `msg-param-*` extension for `ritual` notices.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RitualTags {
    /// `msg-param-ritual-name`
    pub ritual: RitualKind,
}

impl RitualTags {
    /// Decode from a tag map.
    pub fn from_tags(tags: &TagMap) -> RitualTags {
        RitualTags {
            ritual: tags.wire("msg-param-ritual-name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::BadgeKind;

    #[test]
    fn test_chat_message_tags() {
        let tags = TagMap::parse(
            "badges=moderator/1,subscriber/12;bits=100;color=#1E90FF;\
             display-name=Somebody;emotes=25:0-4;id=abc-123;mod=1;\
             room-id=1337;subscriber=1;tmi-sent-ts=1507246572675;turbo=0;\
             user-id=42;user-type=mod",
        );
        let decoded = ChatMessageTags::from_tags(&tags);
        assert_eq!(decoded.presence, TagPresence::Present);
        assert_eq!(decoded.badges.len(), 2);
        assert_eq!(decoded.badges[0].kind, BadgeKind::Moderator);
        assert_eq!(decoded.bits, 100);
        assert_eq!(decoded.color.rgb(), Some((30, 144, 255)));
        assert_eq!(decoded.display_name, "Somebody");
        assert_eq!(decoded.emotes.len(), 1);
        assert!(decoded.moderator);
        assert!(decoded.subscriber);
        assert!(!decoded.turbo);
        assert_eq!(decoded.sent_at.timestamp_millis(), 1507246572675);
        assert_eq!(decoded.user_type, UserType::Moderator);
    }

    #[test]
    fn test_record_from_empty_map() {
        let tags = TagMap::default();
        let decoded = ChatMessageTags::from_tags(&tags);
        assert_eq!(decoded.presence, TagPresence::NotNegotiated);
        assert!(decoded.badges.is_empty());
        assert_eq!(decoded.bits, 0);
        assert!(decoded.color.is_empty());
        assert_eq!(decoded.user_type, UserType::Viewer);
        assert_eq!(decoded.sent_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_one_bad_field_leaves_siblings() {
        let tags = TagMap::parse("bits=oops;display-name=Fine;mod=1");
        let decoded = ChatMessageTags::from_tags(&tags);
        assert_eq!(decoded.bits, 0);
        assert_eq!(decoded.display_name, "Fine");
        assert!(decoded.moderator);
    }

    #[test]
    fn test_room_state_partial_diff() {
        let tags = TagMap::parse("slow=120;room-id=1337");
        let decoded = RoomStateTags::from_tags(&tags);
        assert_eq!(decoded.settings.slow, Duration::from_secs(120));
        assert!(decoded.settings.changed.contains(RoomStates::Slow));
        assert!(!decoded.settings.changed.contains(RoomStates::EmoteOnly));
        assert!(!decoded.settings.changed.is_empty());
        assert_eq!(decoded.settings.changed.names().as_deref(), Ok("Slow"));
    }

    #[test]
    fn test_room_state_full_snapshot() {
        let tags = TagMap::parse(
            "broadcaster-lang=en;emote-only=0;followers-only=-1;r9k=0;\
             room-id=1337;slow=0;subs-only=0",
        );
        let decoded = RoomStateTags::from_tags(&tags);
        assert_eq!(decoded.settings.changed.bits(), 63);
        assert_eq!(decoded.broadcaster_lang, "en");
        assert_eq!(decoded.settings.followers_only, -1);
    }

    #[test]
    fn test_room_state_no_tags_changes_nothing() {
        let decoded = RoomStateTags::from_tags(&TagMap::default());
        assert!(decoded.settings.changed.is_empty());
        assert_eq!(decoded.presence, TagPresence::NotNegotiated);
    }

    #[test]
    fn test_followers_only_values() {
        let on = RoomStateTags::from_tags(&TagMap::parse("followers-only=30"));
        assert_eq!(on.settings.followers_only, 30);
        let all = RoomStateTags::from_tags(&TagMap::parse("followers-only=0"));
        assert_eq!(all.settings.followers_only, 0);
        // Missing or unparsable degrades to disabled.
        let off = RoomStateTags::from_tags(&TagMap::parse("slow=5"));
        assert_eq!(off.settings.followers_only, -1);
    }

    #[test]
    fn test_chat_room_state_has_no_lang() {
        let tags = TagMap::parse("emote-only=1;r9k=1");
        let decoded = ChatRoomStateTags::from_tags(&tags);
        assert!(decoded.settings.emote_only);
        assert!(decoded.settings.r9k);
        assert!(decoded.settings.changed.contains(RoomStates::EmoteOnly));
        assert!(decoded.settings.changed.contains(RoomStates::R9k));
    }

    #[test]
    fn test_user_notice_common_set() {
        let tags = TagMap::parse(
            "badges=subscriber/6;color=#008000;display-name=Ronni;\
             emotes=;id=db25007f;login=ronni;mod=0;msg-id=resub;\
             msg-param-cumulative-months=6;msg-param-sub-plan=Prime;\
             msg-param-sub-plan-name=Prime;room-id=1337;subscriber=1;\
             system-msg=ronni\\shas\\ssubscribed\\sfor\\s6\\smonths!;\
             tmi-sent-ts=1507246572675;turbo=1;user-id=87654321;user-type=",
        );
        let base = UserNoticeTags::from_tags(&tags);
        assert_eq!(base.kind, UserNoticeKind::Resub);
        assert_eq!(base.login, "ronni");
        assert_eq!(base.system_msg, "ronni has subscribed for 6 months!");
        assert_eq!(base.user_type, UserType::Viewer);

        let sub = SubTags::from_tags(&tags);
        assert_eq!(sub.cumulative_months, 6);
        assert_eq!(sub.plan, SubPlan::Prime);
    }

    #[test]
    fn test_sub_gift_recipient_identity() {
        let tags = TagMap::parse(
            "msg-id=subgift;msg-param-months=3;\
             msg-param-recipient-display-name=Lucky;\
             msg-param-recipient-id=55554444;\
             msg-param-recipient-user-name=lucky;msg-param-sub-plan=1000;\
             msg-param-sub-plan-name=Channel\\sSub",
        );
        let gift = SubGiftTags::from_tags(&tags);
        assert_eq!(gift.months, 3);
        assert_eq!(gift.recipient_user_name, "lucky");
        assert_eq!(gift.recipient_id, "55554444");
        assert_eq!(gift.plan, SubPlan::Tier1);
        assert_eq!(gift.plan_name, "Channel Sub");
    }

    #[test]
    fn test_raid_extension() {
        let tags = TagMap::parse(
            "msg-id=raid;msg-param-displayName=TestChannel;\
             msg-param-login=testchannel;msg-param-viewerCount=15",
        );
        let raid = RaidTags::from_tags(&tags);
        assert_eq!(raid.login, "testchannel");
        assert_eq!(raid.viewer_count, 15);
    }

    #[test]
    fn test_ritual_extension() {
        let tags = TagMap::parse("msg-id=ritual;msg-param-ritual-name=new_chatter");
        assert_eq!(RitualTags::from_tags(&tags).ritual, RitualKind::NewChatter);
        let unknown = TagMap::parse("msg-id=ritual;msg-param-ritual-name=dance");
        assert_eq!(RitualTags::from_tags(&unknown).ritual, RitualKind::Other);
    }

    #[test]
    fn test_clear_chat_tags() {
        let tags = TagMap::parse(
            "ban-duration=600;ban-reason=Spamming;room-id=1337;\
             target-user-id=99;tmi-sent-ts=1507246572675",
        );
        let decoded = ClearChatTags::from_tags(&tags);
        assert_eq!(decoded.ban_duration, Duration::from_secs(600));
        assert_eq!(decoded.ban_reason, "Spamming");
        assert_eq!(decoded.target_user_id, "99");
    }

    #[test]
    fn test_global_user_state_tags() {
        let tags = TagMap::parse(
            "badges=staff/1;color=#8A2BE2;display-name=Staffer;\
             emote-sets=0,33,50;user-id=12345;user-type=staff",
        );
        let decoded = GlobalUserStateTags::from_tags(&tags);
        assert_eq!(decoded.emote_sets, vec!["0", "33", "50"]);
        assert_eq!(decoded.user_type, UserType::Staff);
    }

    #[test]
    fn test_whisper_tags() {
        let tags = TagMap::parse(
            "badges=;color=#00FF7F;display-name=Sender;emotes=;\
             message-id=3;thread-id=11_22;turbo=0;user-id=11;user-type=",
        );
        let decoded = WhisperTags::from_tags(&tags);
        assert_eq!(decoded.message_id, "3");
        assert_eq!(decoded.thread_id, "11_22");
        assert!(decoded.badges.is_empty());
    }
}
