//! Channel locators: stream chat vs. chat-room sub-channels.
//!
//! Twitch addresses ordinary stream chat with a plain `#channel` name, and
//! chat rooms with a `#chatrooms:<owner_user_id>:<uuid>` triple. The triple
//! form is only recognized when the text before the first `:` is exactly
//! `#chatrooms`; everything else is taken verbatim as a stream channel.

use std::fmt;

/// Parameter prefix that marks a chat-room locator.
pub const CHATROOMS_PREFIX: &str = "#chatrooms";

/// Identity of a chat room: the owning user plus the room's UUID.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatRoomId {
    /// User id of the channel that owns the room.
    pub owner_user_id: String,
    /// The room's UUID.
    pub uuid: String,
}

/// Where a message originated: a named stream-chat channel or a chat room.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// An ordinary channel, kept verbatim including the leading `#`.
    Stream(String),
    /// A `#chatrooms:<owner>:<uuid>` sub-channel.
    ChatRoom(ChatRoomId),
}

impl Channel {
    /// Classify one channel-shaped parameter.
    ///
    /// Missing segments of a chat-room triple degrade to empty strings; this
    /// never fails.
    pub fn parse(param: &str) -> Channel {
        let head = param.split(':').next().unwrap_or(param);
        if head == CHATROOMS_PREFIX {
            let mut segments = param.splitn(3, ':').skip(1);
            let owner_user_id = segments.next().unwrap_or("").to_string();
            let uuid = segments.next().unwrap_or("").to_string();
            return Channel::ChatRoom(ChatRoomId {
                owner_user_id,
                uuid,
            });
        }
        Channel::Stream(param.to_string())
    }

    /// Whether this locator is a chat room.
    pub fn is_chat_room(&self) -> bool {
        matches!(self, Channel::ChatRoom(_))
    }

    /// The stream channel name, if this is stream chat.
    pub fn name(&self) -> Option<&str> {
        match self {
            Channel::Stream(name) => Some(name),
            Channel::ChatRoom(_) => None,
        }
    }

    /// The chat-room identity, if this is a chat room.
    pub fn chat_room(&self) -> Option<&ChatRoomId> {
        match self {
            Channel::Stream(_) => None,
            Channel::ChatRoom(id) => Some(id),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Stream(name) => f.write_str(name),
            Channel::ChatRoom(id) => {
                write!(f, "{}:{}:{}", CHATROOMS_PREFIX, id.owner_user_id, id.uuid)
            }
        }
    }
}
