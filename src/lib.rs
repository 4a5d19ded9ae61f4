//! # tmi-proto
//!
//! A Rust library for parsing Twitch's IRC-based chat protocol (TMI):
//! classic IRC extended with IRCv3 message tags and Twitch-specific
//! commands.
//!
//! ## Features
//!
//! - Line parsing into tags, prefix, command, and parameters
//! - Typed tag decoding: booleans, integers, timestamps, colors, badges,
//!   emotes, and wire enums, all with fault-tolerant defaults
//! - Bidirectional wire-string ↔ enum resolution, including bitfield
//!   composition and decomposition
//! - Event classification: command routing plus secondary `msg-id` routing
//!   for NOTICE and USERNOTICE, stream-chat and chat-room aware
//! - An overridable per-instance command registry
//!
//! Wire data never raises errors here; malformed input degrades to typed
//! defaults and sentinels. Transport, authentication, and outbound command
//! formatting live outside this crate.

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Dispatching raw lines into events
//!
//! ```rust
//! use tmi_proto::{Dispatcher, Event, ParsedMessage};
//!
//! let dispatcher = Dispatcher::new();
//! let line = "@badges=moderator/1;color=#1E90FF;display-name=Ronni;mod=1 \
//!             :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #somechannel :Hello chat!";
//! let events = dispatcher.dispatch(&ParsedMessage::parse(line));
//!
//! match &events[0] {
//!     Event::Message(msg) => {
//!         assert_eq!(msg.sender, "ronni");
//!         assert_eq!(msg.text, "Hello chat!");
//!         assert!(msg.tags.moderator);
//!         assert_eq!(msg.tags.color.rgb(), Some((30, 144, 255)));
//!     }
//!     other => panic!("unexpected event: {:?}", other),
//! }
//! ```
//!
//! ### Decoding tags directly
//!
//! ```rust
//! use tmi_proto::tags::TagMap;
//! use tmi_proto::BadgeKind;
//!
//! let tags = TagMap::parse("badges=broadcaster/1;color=#1E90FF;ban-duration=600");
//! assert_eq!(tags.badges("badges")[0].kind, BadgeKind::Broadcaster);
//! assert_eq!(tags.seconds("ban-duration").as_secs(), 600);
//! // Missing and malformed values both degrade to defaults.
//! assert_eq!(tags.unsigned("bits"), 0);
//! ```

pub mod channel;
pub mod color;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod message;
pub mod tags;
pub mod wire;

pub use self::channel::{Channel, ChatRoomId};
pub use self::color::Color;
pub use self::dispatch::{Dispatcher, Handler};
pub use self::error::EnumCodecError;
pub use self::event::Event;
pub use self::message::ParsedMessage;
pub use self::tags::{Badge, Emote, EmoteRange, TagMap, TagPresence};
pub use self::wire::{
    BadgeKind, Flags, NoticeKind, RitualKind, RoomStates, SubPlan, UserNoticeKind, UserType,
    WireEnum,
};
