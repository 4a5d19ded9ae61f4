//! Command routing: one parsed message in, zero to two typed events out.
//!
//! The [`Dispatcher`] owns the command registry. Dispatch is a pure
//! function of (registry, message); the registry changes only through the
//! explicit administrative calls, never during dispatch, so one writer and
//! any number of readers coexist under ordinary borrow rules. Unknown
//! commands and malformed input never error; the absence of an event is the
//! only signal.

use std::collections::HashMap;

use crate::channel::Channel;
use crate::event::{
    notice, usernotice, ChatCleared, ChatMessage, ChatRoomStateEvent, EndOfNames, Event,
    HostingStarted, HostingStopped, Membership, NamesReply, Notice, RoomStateEvent, UserBan,
    UserStateEvent, UserTimeout, Whisper,
};
use crate::message::ParsedMessage;
use crate::tags::records::{
    ChatMessageTags, ChatRoomStateTags, ClearChatTags, GlobalUserStateTags, RoomStateTags,
    UserNoticeTags, UserStateTags, WhisperTags,
};
use crate::tags::TagPresence;
use crate::wire::NoticeKind;

/// A command handler: builds this command's events from one message.
///
/// `channel` is the pre-classified source, when the message had a
/// channel-shaped parameter.
pub type Handler = fn(&ParsedMessage, Option<&Channel>) -> Vec<Event>;

/// Routes parsed messages to typed events through a command registry.
///
/// Each client instance owns its dispatcher, so instances with different
/// handler overrides coexist.
#[derive(Clone)]
pub struct Dispatcher {
    registry: HashMap<String, Handler>,
}

impl Dispatcher {
    /// A dispatcher with the built-in handler set.
    pub fn new() -> Dispatcher {
        let mut dispatcher = Dispatcher {
            registry: HashMap::new(),
        };
        dispatcher.reset_registry();
        dispatcher
    }

    /// Restore the built-in handler set, dropping every override. Idempotent.
    pub fn reset_registry(&mut self) {
        self.registry.clear();
        for (command, handler) in DEFAULT_HANDLERS {
            self.registry.insert(command.to_string(), *handler);
        }
    }

    /// Install or replace the handler for one command token.
    pub fn set_handler(&mut self, command: &str, handler: Handler) {
        self.registry.insert(command.to_string(), handler);
    }

    /// Remove the handler for one command token.
    pub fn remove_handler(&mut self, command: &str) -> bool {
        self.registry.remove(command).is_some()
    }

    /// Whether a handler is registered for the command token.
    pub fn handles(&self, command: &str) -> bool {
        self.registry.contains_key(command)
    }

    /// Route one message. Returns zero, one, or two events.
    pub fn dispatch(&self, msg: &ParsedMessage) -> Vec<Event> {
        let Some(handler) = self.registry.get(msg.command.as_str()) else {
            tracing::debug!(command = %msg.command, "ignoring unregistered command");
            return Vec::new();
        };
        let channel = msg.channel_param().map(Channel::parse);
        handler(msg, channel.as_ref())
    }

    /// Route one message, delivering events through a callback.
    ///
    /// Returns the number of events delivered.
    pub fn dispatch_with<F: FnMut(Event)>(&self, msg: &ParsedMessage, mut sink: F) -> usize {
        let events = self.dispatch(msg);
        let delivered = events.len();
        for event in events {
            sink(event);
        }
        delivered
    }
}

impl Default for Dispatcher {
    fn default() -> Dispatcher {
        Dispatcher::new()
    }
}

/// Built-in command set: the Twitch commands plus the native IRC ones this
/// core understands.
const DEFAULT_HANDLERS: &[(&str, Handler)] = &[
    ("WHISPER", handle_whisper),
    ("CLEARCHAT", handle_clearchat),
    ("GLOBALUSERSTATE", handle_globaluserstate),
    ("ROOMSTATE", handle_roomstate),
    ("USERNOTICE", handle_usernotice),
    ("USERSTATE", handle_userstate),
    ("HOSTTARGET", handle_hosttarget),
    ("RECONNECT", handle_reconnect),
    ("NOTICE", handle_notice),
    ("PRIVMSG", handle_privmsg),
    ("JOIN", handle_join),
    ("PART", handle_part),
    ("MODE", handle_mode),
    ("PING", handle_ping),
    ("PONG", handle_pong),
    ("353", handle_names_reply),
    ("366", handle_end_of_names),
];

fn channel_or_default(channel: Option<&Channel>) -> Channel {
    channel
        .cloned()
        .unwrap_or_else(|| Channel::Stream(String::new()))
}

/// Strip `/me` ACTION framing, reporting whether it was there.
fn strip_action(text: &str) -> (String, bool) {
    match text.strip_prefix("\u{1}ACTION ") {
        Some(body) => (body.trim_end_matches('\u{1}').to_string(), true),
        None => (text.to_string(), false),
    }
}

fn handle_privmsg(msg: &ParsedMessage, channel: Option<&Channel>) -> Vec<Event> {
    let (text, is_action) = strip_action(msg.param(1));
    vec![Event::Message(ChatMessage {
        channel: channel_or_default(channel),
        sender: msg.prefix_nick().to_string(),
        text,
        is_action,
        tags: ChatMessageTags::from_tags(&msg.tags),
    })]
}

fn handle_whisper(msg: &ParsedMessage, _channel: Option<&Channel>) -> Vec<Event> {
    vec![Event::Whisper(Whisper {
        sender: msg.prefix_nick().to_string(),
        target: msg.param(0).to_string(),
        text: msg.param(1).to_string(),
        tags: WhisperTags::from_tags(&msg.tags),
    })]
}

fn handle_clearchat(msg: &ParsedMessage, channel: Option<&Channel>) -> Vec<Event> {
    let channel = channel_or_default(channel);
    let target = msg.param(1);
    if target.is_empty() {
        return vec![Event::ChatCleared(ChatCleared { channel })];
    }
    let tags = ClearChatTags::from_tags(&msg.tags);
    if msg.tags.presence("ban-duration") == TagPresence::Present {
        vec![Event::UserTimedOut(UserTimeout {
            channel,
            user_login: target.to_string(),
            duration: tags.ban_duration,
            reason: tags.ban_reason,
            target_user_id: tags.target_user_id,
        })]
    } else {
        vec![Event::UserBanned(UserBan {
            channel,
            user_login: target.to_string(),
            reason: tags.ban_reason,
            target_user_id: tags.target_user_id,
        })]
    }
}

fn handle_globaluserstate(msg: &ParsedMessage, _channel: Option<&Channel>) -> Vec<Event> {
    vec![Event::GlobalUserState(GlobalUserStateTags::from_tags(
        &msg.tags,
    ))]
}

fn handle_roomstate(msg: &ParsedMessage, channel: Option<&Channel>) -> Vec<Event> {
    match channel_or_default(channel) {
        Channel::Stream(channel) => vec![Event::RoomState(RoomStateEvent {
            channel,
            tags: RoomStateTags::from_tags(&msg.tags),
        })],
        Channel::ChatRoom(room) => vec![Event::ChatRoomState(ChatRoomStateEvent {
            room,
            tags: ChatRoomStateTags::from_tags(&msg.tags),
        })],
    }
}

fn handle_usernotice(msg: &ParsedMessage, channel: Option<&Channel>) -> Vec<Event> {
    let channel = channel_or_default(channel);
    let message = msg.param(1);
    let mut events = vec![Event::UserNotice(usernotice::UserNoticeEvent {
        channel: channel.clone(),
        message: message.to_string(),
        tags: UserNoticeTags::from_tags(&msg.tags),
    })];
    if let Some(specific) = usernotice::classify(&channel, &msg.tags, message) {
        events.push(specific);
    }
    events
}

fn handle_userstate(msg: &ParsedMessage, channel: Option<&Channel>) -> Vec<Event> {
    vec![Event::UserState(UserStateEvent {
        channel: channel_or_default(channel),
        tags: UserStateTags::from_tags(&msg.tags),
    })]
}

fn handle_hosttarget(msg: &ParsedMessage, _channel: Option<&Channel>) -> Vec<Event> {
    let channel = msg.param(0).to_string();
    let spec = msg.param(1);
    let mut words = spec.split_whitespace();
    let target = words.next().unwrap_or("");
    let viewers = words.next().and_then(|n| n.parse().ok()).unwrap_or(0);
    if target == "-" {
        vec![Event::HostingStopped(HostingStopped { channel, viewers })]
    } else {
        vec![Event::HostingStarted(HostingStarted {
            channel,
            target: target.to_string(),
            viewers,
        })]
    }
}

fn handle_reconnect(_msg: &ParsedMessage, _channel: Option<&Channel>) -> Vec<Event> {
    vec![Event::Reconnect]
}

fn handle_notice(msg: &ParsedMessage, channel: Option<&Channel>) -> Vec<Event> {
    let channel = channel_or_default(channel);
    let msg_id = msg.tags.string("msg-id");
    let kind: NoticeKind = msg.tags.wire("msg-id");
    let message = msg.param(1);
    let mut events = vec![Event::Notice(Notice {
        channel: channel.clone(),
        kind,
        msg_id,
        message: message.to_string(),
    })];
    if let Some(specific) = notice::classify(kind, &channel, message) {
        events.push(specific);
    }
    events
}

fn handle_join(msg: &ParsedMessage, channel: Option<&Channel>) -> Vec<Event> {
    vec![Event::UserJoined(Membership {
        channel: channel_or_default(channel),
        user: msg.prefix_nick().to_string(),
    })]
}

fn handle_part(msg: &ParsedMessage, channel: Option<&Channel>) -> Vec<Event> {
    vec![Event::UserParted(Membership {
        channel: channel_or_default(channel),
        user: msg.prefix_nick().to_string(),
    })]
}

fn handle_mode(msg: &ParsedMessage, channel: Option<&Channel>) -> Vec<Event> {
    let membership = Membership {
        channel: channel_or_default(channel),
        user: msg.param(2).to_string(),
    };
    match msg.param(1) {
        "+o" => vec![Event::ModeratorAdded(membership)],
        "-o" => vec![Event::ModeratorRemoved(membership)],
        _ => Vec::new(),
    }
}

fn handle_ping(msg: &ParsedMessage, _channel: Option<&Channel>) -> Vec<Event> {
    vec![Event::Ping(msg.param(0).to_string())]
}

fn handle_pong(msg: &ParsedMessage, _channel: Option<&Channel>) -> Vec<Event> {
    let payload = msg.params.last().cloned().unwrap_or_default();
    vec![Event::Pong(payload)]
}

fn handle_names_reply(msg: &ParsedMessage, _channel: Option<&Channel>) -> Vec<Event> {
    vec![Event::NamesReply(NamesReply {
        channel: msg.param(2).to_string(),
        users: msg
            .param(3)
            .split_whitespace()
            .map(str::to_string)
            .collect(),
    })]
}

fn handle_end_of_names(msg: &ParsedMessage, _channel: Option<&Channel>) -> Vec<Event> {
    vec![Event::EndOfNames(EndOfNames {
        channel: msg.param(1).to_string(),
    })]
}
