//! NOTICE payloads and secondary classification via `msg-id`.
//!
//! A NOTICE always yields the generic [`Notice`] event. When its `msg-id`
//! falls inside the known taxonomy, classification adds one specific event
//! whose shape depends on the source: stream-chat payloads carry the channel
//! name, chat-room payloads carry the room identity instead and omit
//! stream-chat-only fields. Kinds that cannot occur at a source produce no
//! specific event there.

use crate::channel::{Channel, ChatRoomId};
use crate::wire::NoticeKind;

use super::Event;

/// The generic NOTICE event, raised for every NOTICE regardless of msg-id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notice {
    /// Where the notice was sent.
    pub channel: Channel,
    /// Classified `msg-id`; [`NoticeKind::Other`] when unknown.
    pub kind: NoticeKind,
    /// Raw `msg-id` value, kept for unknown ids.
    pub msg_id: String,
    /// Notice body.
    pub message: String,
}

/// A stream-chat notice carrying only the body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamNotice {
    /// Channel name.
    pub channel: String,
    /// Notice body.
    pub message: String,
}

/// A chat-room notice carrying only the body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatRoomNotice {
    /// Room identity.
    pub room: ChatRoomId,
    /// Notice body.
    pub message: String,
}

/// A stream-chat notice about one user.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamUserNotice {
    /// Channel name.
    pub channel: String,
    /// The user the notice is about.
    pub user_nick: String,
}

/// A chat-room notice about one user.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatRoomUserNotice {
    /// Room identity.
    pub room: ChatRoomId,
    /// The user the notice is about.
    pub user_nick: String,
}

/// Reply to `/mods` in stream chat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModsList {
    /// Channel name.
    pub channel: String,
    /// Moderator logins.
    pub moderators: Vec<String>,
}

/// Reply to `/mods` in a chat room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatRoomModsList {
    /// Room identity.
    pub room: ChatRoomId,
    /// Moderator logins.
    pub moderators: Vec<String>,
}

/// Reply to `/help` in stream chat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandsAvailable {
    /// Channel name.
    pub channel: String,
    /// Command names, without the leading `/`.
    pub commands: Vec<String>,
}

/// Reply to `/help` in a chat room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatRoomCommandsAvailable {
    /// Room identity.
    pub room: ChatRoomId,
    /// Command names, without the leading `/`.
    pub commands: Vec<String>,
}

/// `hosts_remaining`: how many host commands are left this window.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostsRemaining {
    /// Channel name.
    pub channel: String,
    /// Remaining host commands; `0` when the body didn't lead with a count.
    pub remaining: u64,
}

/// The text before the first space of a notice body.
fn first_word(message: &str) -> String {
    message.split(' ').next().unwrap_or("").to_string()
}

/// The last whitespace-delimited token, for `Invalid username: X` bodies.
fn last_word(message: &str) -> String {
    message
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches('.')
        .to_string()
}

/// Comma-separated names after the first `:`, for `/mods` replies.
fn names_after_colon(message: &str) -> Vec<String> {
    match message.split_once(':') {
        Some((_, list)) => list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Slash-commands after the last `:`, for `/help` replies.
fn commands_after_colon(message: &str) -> Vec<String> {
    match message.rfind(':') {
        Some(idx) => message[idx + 1..]
            .split_whitespace()
            .map(|token| token.trim_start_matches('/').to_string())
            .filter(|token| !token.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// Build the specific event for one classified notice, if its kind applies
/// at this source.
pub(crate) fn classify(kind: NoticeKind, channel: &Channel, message: &str) -> Option<Event> {
    match channel {
        Channel::Stream(name) => classify_stream(kind, name, message),
        Channel::ChatRoom(room) => classify_chat_room(kind, room, message),
    }
}

fn classify_stream(kind: NoticeKind, channel: &str, message: &str) -> Option<Event> {
    let channel = channel.to_string();
    match kind {
        NoticeKind::AlreadyBanned => Some(Event::AlreadyBanned(StreamUserNotice {
            channel,
            user_nick: first_word(message),
        })),
        NoticeKind::BadHostHosting => Some(Event::BadHostHosting(StreamNotice {
            channel,
            message: message.to_string(),
        })),
        NoticeKind::BadHostRateExceeded => Some(Event::BadHostRateExceeded(StreamNotice {
            channel,
            message: message.to_string(),
        })),
        NoticeKind::BadModMod => Some(Event::BadModMod(StreamUserNotice {
            channel,
            user_nick: first_word(message),
        })),
        NoticeKind::BadUnbanNoBan => Some(Event::BadUnbanNoBan(StreamUserNotice {
            channel,
            user_nick: first_word(message),
        })),
        NoticeKind::BadUnmodMod => Some(Event::BadUnmodMod(StreamUserNotice {
            channel,
            user_nick: first_word(message),
        })),
        NoticeKind::ChannelSuspended => Some(Event::ChannelSuspended(StreamNotice {
            channel,
            message: message.to_string(),
        })),
        NoticeKind::CmdsAvailable => Some(Event::CmdsAvailable(CommandsAvailable {
            channel,
            commands: commands_after_colon(message),
        })),
        NoticeKind::HostsRemaining => Some(Event::HostsRemaining(HostsRemaining {
            channel,
            remaining: first_word(message).parse().unwrap_or(0),
        })),
        NoticeKind::InvalidUser => Some(Event::InvalidUser(StreamUserNotice {
            channel,
            user_nick: last_word(message),
        })),
        NoticeKind::NoPermission => Some(Event::NoPermission(StreamNotice {
            channel,
            message: message.to_string(),
        })),
        NoticeKind::RoomMods => Some(Event::RoomMods(ModsList {
            channel,
            moderators: names_after_colon(message),
        })),
        NoticeKind::UnbanSuccess => Some(Event::UnbanSuccess(StreamUserNotice {
            channel,
            user_nick: first_word(message),
        })),
        // Only ever sent inside chat rooms.
        NoticeKind::UnsupportedChatRoomsCmd => None,
        _ => None,
    }
}

fn classify_chat_room(kind: NoticeKind, room: &ChatRoomId, message: &str) -> Option<Event> {
    let room = room.clone();
    match kind {
        NoticeKind::AlreadyBanned => Some(Event::ChatRoomAlreadyBanned(ChatRoomUserNotice {
            room,
            user_nick: first_word(message),
        })),
        NoticeKind::BadModMod => Some(Event::ChatRoomBadModMod(ChatRoomUserNotice {
            room,
            user_nick: first_word(message),
        })),
        NoticeKind::BadUnbanNoBan => Some(Event::ChatRoomBadUnbanNoBan(ChatRoomUserNotice {
            room,
            user_nick: first_word(message),
        })),
        NoticeKind::BadUnmodMod => Some(Event::ChatRoomBadUnmodMod(ChatRoomUserNotice {
            room,
            user_nick: first_word(message),
        })),
        NoticeKind::CmdsAvailable => {
            Some(Event::ChatRoomCmdsAvailable(ChatRoomCommandsAvailable {
                room,
                commands: commands_after_colon(message),
            }))
        }
        NoticeKind::InvalidUser => Some(Event::ChatRoomInvalidUser(ChatRoomUserNotice {
            room,
            user_nick: last_word(message),
        })),
        NoticeKind::NoPermission => Some(Event::ChatRoomNoPermission(ChatRoomNotice {
            room,
            message: message.to_string(),
        })),
        NoticeKind::RoomMods => Some(Event::ChatRoomRoomMods(ChatRoomModsList {
            room,
            moderators: names_after_colon(message),
        })),
        NoticeKind::UnbanSuccess => Some(Event::ChatRoomUnbanSuccess(ChatRoomUserNotice {
            room,
            user_nick: first_word(message),
        })),
        NoticeKind::UnsupportedChatRoomsCmd => {
            Some(Event::UnsupportedChatRoomsCmd(ChatRoomNotice {
                room,
                message: message.to_string(),
            }))
        }
        // Hosting and suspension never happen inside chat rooms.
        _ => None,
    }
}
