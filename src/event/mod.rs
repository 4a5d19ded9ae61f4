//! Typed domain events produced by the dispatcher.
//!
//! One event shape per (command, source, msg-id) combination. Variants are
//! mutually exclusive; a single line yields at most one primary event plus
//! one secondary (NOTICE/USERNOTICE) event.

pub mod notice;
pub mod usernotice;

pub use notice::{
    ChatRoomCommandsAvailable, ChatRoomModsList, ChatRoomNotice, ChatRoomUserNotice,
    CommandsAvailable, HostsRemaining, ModsList, Notice, StreamNotice, StreamUserNotice,
};
pub use usernotice::{
    RaidEvent, ResubscriptionEvent, RitualEvent, SubGiftEvent, SubscriptionEvent,
    UserNoticeEvent,
};

use std::time::Duration;

use crate::channel::{Channel, ChatRoomId};
use crate::tags::records::{
    ChatMessageTags, ChatRoomStateTags, GlobalUserStateTags, RoomStateTags, UserStateTags,
    WhisperTags,
};

/// A chat message from a channel or chat room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatMessage {
    /// Where the message was sent.
    pub channel: Channel,
    /// Sender's login name, from the prefix.
    pub sender: String,
    /// Message text, with any ACTION wrapping stripped.
    pub text: String,
    /// Whether the message was a `/me` action.
    pub is_action: bool,
    /// Decoded tags.
    pub tags: ChatMessageTags,
}

/// A whisper (direct message).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Whisper {
    /// Sender's login name, from the prefix.
    pub sender: String,
    /// Recipient login name.
    pub target: String,
    /// Message text.
    pub text: String,
    /// Decoded tags.
    pub tags: WhisperTags,
}

/// A permanent ban, from CLEARCHAT with a target but no duration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserBan {
    /// Where the ban happened.
    pub channel: Channel,
    /// Banned user's login.
    pub user_login: String,
    /// `ban-reason`, empty when none was given.
    pub reason: String,
    /// `target-user-id`
    pub target_user_id: String,
}

/// A timeout, from CLEARCHAT with a target and a `ban-duration`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserTimeout {
    /// Where the timeout happened.
    pub channel: Channel,
    /// Timed-out user's login.
    pub user_login: String,
    /// Timeout length.
    pub duration: Duration,
    /// `ban-reason`, empty when none was given.
    pub reason: String,
    /// `target-user-id`
    pub target_user_id: String,
}

/// The whole chat was cleared (CLEARCHAT without a target).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatCleared {
    /// Which chat was cleared.
    pub channel: Channel,
}

/// Own state within one channel (USERSTATE).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserStateEvent {
    /// The channel the state applies to.
    pub channel: Channel,
    /// Decoded tags.
    pub tags: UserStateTags,
}

/// Stream-chat room settings diff (ROOMSTATE).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomStateEvent {
    /// Channel name.
    pub channel: String,
    /// Decoded tags, with the changed-settings bitfield.
    pub tags: RoomStateTags,
}

/// Chat-room settings diff (ROOMSTATE on a `#chatrooms:` locator).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatRoomStateEvent {
    /// Room identity from the channel parameter.
    pub room: ChatRoomId,
    /// Decoded tags.
    pub tags: ChatRoomStateTags,
}

/// Hosting another channel has started (HOSTTARGET).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostingStarted {
    /// The hosting channel.
    pub channel: String,
    /// The hosted channel's name.
    pub target: String,
    /// Viewers brought along; `0` when not reported.
    pub viewers: u64,
}

/// Hosting has stopped (HOSTTARGET with a `-` target).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostingStopped {
    /// The channel that stopped hosting.
    pub channel: String,
    /// Viewers at the time; `0` when not reported.
    pub viewers: u64,
}

/// A user entered or left, or gained or lost moderator status.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Membership {
    /// The channel concerned.
    pub channel: Channel,
    /// The user's login.
    pub user: String,
}

/// One 353 reply line; aggregation across lines is the caller's business.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamesReply {
    /// Channel name.
    pub channel: String,
    /// Logins listed on this line.
    pub users: Vec<String>,
}

/// End of a NAMES listing (366).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndOfNames {
    /// Channel name.
    pub channel: String,
}

/// Every event the dispatcher can produce.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Event {
    // --- messaging ---
    /// PRIVMSG.
    Message(ChatMessage),
    /// WHISPER.
    Whisper(Whisper),

    // --- moderation (CLEARCHAT) ---
    /// Permanent ban.
    UserBanned(UserBan),
    /// Timeout.
    UserTimedOut(UserTimeout),
    /// Full chat clear.
    ChatCleared(ChatCleared),

    // --- state ---
    /// GLOBALUSERSTATE after login.
    GlobalUserState(GlobalUserStateTags),
    /// USERSTATE for one channel.
    UserState(UserStateEvent),
    /// Stream-chat ROOMSTATE.
    RoomState(RoomStateEvent),
    /// Chat-room ROOMSTATE.
    ChatRoomState(ChatRoomStateEvent),

    // --- USERNOTICE ---
    /// Generic USERNOTICE; always raised when the command arrives.
    UserNotice(UserNoticeEvent),
    /// `msg-id=sub`
    Subscription(SubscriptionEvent),
    /// `msg-id=resub`
    Resubscription(ResubscriptionEvent),
    /// `msg-id=subgift`
    SubGift(SubGiftEvent),
    /// `msg-id=raid`
    Raid(RaidEvent),
    /// `msg-id=ritual`
    Ritual(RitualEvent),

    // --- hosting ---
    /// HOSTTARGET with a real target.
    HostingStarted(HostingStarted),
    /// HOSTTARGET with `-`.
    HostingStopped(HostingStopped),

    // --- connection ---
    /// Server asked the client to reconnect.
    Reconnect,
    /// PING with its payload.
    Ping(String),
    /// PONG with its payload.
    Pong(String),

    // --- membership ---
    /// JOIN.
    UserJoined(Membership),
    /// PART.
    UserParted(Membership),
    /// MODE +o.
    ModeratorAdded(Membership),
    /// MODE -o.
    ModeratorRemoved(Membership),
    /// One 353 line.
    NamesReply(NamesReply),
    /// 366.
    EndOfNames(EndOfNames),

    // --- NOTICE: generic plus the closed msg-id taxonomy ---
    /// Generic NOTICE; always raised when the command arrives.
    Notice(Notice),
    /// `already_banned` in stream chat.
    AlreadyBanned(StreamUserNotice),
    /// `already_banned` in a chat room.
    ChatRoomAlreadyBanned(ChatRoomUserNotice),
    /// `bad_host_hosting` (stream chat only).
    BadHostHosting(StreamNotice),
    /// `bad_host_rate_exceeded` (stream chat only).
    BadHostRateExceeded(StreamNotice),
    /// `bad_mod_mod` in stream chat.
    BadModMod(StreamUserNotice),
    /// `bad_mod_mod` in a chat room.
    ChatRoomBadModMod(ChatRoomUserNotice),
    /// `bad_unban_no_ban` in stream chat.
    BadUnbanNoBan(StreamUserNotice),
    /// `bad_unban_no_ban` in a chat room.
    ChatRoomBadUnbanNoBan(ChatRoomUserNotice),
    /// `bad_unmod_mod` in stream chat.
    BadUnmodMod(StreamUserNotice),
    /// `bad_unmod_mod` in a chat room.
    ChatRoomBadUnmodMod(ChatRoomUserNotice),
    /// `msg_channel_suspended` (stream chat only).
    ChannelSuspended(StreamNotice),
    /// `cmds_available` in stream chat.
    CmdsAvailable(CommandsAvailable),
    /// `cmds_available` in a chat room.
    ChatRoomCmdsAvailable(ChatRoomCommandsAvailable),
    /// `hosts_remaining` (stream chat only).
    HostsRemaining(HostsRemaining),
    /// `invalid_user` in stream chat.
    InvalidUser(StreamUserNotice),
    /// `invalid_user` in a chat room.
    ChatRoomInvalidUser(ChatRoomUserNotice),
    /// `no_permission` in stream chat.
    NoPermission(StreamNotice),
    /// `no_permission` in a chat room.
    ChatRoomNoPermission(ChatRoomNotice),
    /// `room_mods` in stream chat.
    RoomMods(ModsList),
    /// `room_mods` in a chat room.
    ChatRoomRoomMods(ChatRoomModsList),
    /// `unban_success` in stream chat.
    UnbanSuccess(StreamUserNotice),
    /// `unban_success` in a chat room.
    ChatRoomUnbanSuccess(ChatRoomUserNotice),
    /// `unsupported_chatrooms_cmd` (chat rooms only).
    UnsupportedChatRoomsCmd(ChatRoomNotice),
}
