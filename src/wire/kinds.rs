//! Wire enums for Twitch tag values.
//!
//! Wire names are the exact tokens Twitch sends; variants without an
//! override resolve under their symbolic name.

use super::wire_enum;

wire_enum! {
    /// Badge classification from the `badges` tag.
    pub enum BadgeKind: fallback = Other {
        /// Twitch administrator.
        Admin = 0 => "admin",
        /// Bits donor.
        Bits = 1 => "bits",
        /// The channel owner.
        Broadcaster = 2 => "broadcaster",
        /// Global moderator.
        GlobalMod = 3 => "global_mod",
        /// Channel moderator.
        Moderator = 4 => "moderator",
        /// Channel subscriber.
        Subscriber = 5 => "subscriber",
        /// Twitch staff.
        Staff = 6 => "staff",
        /// Turbo subscriber.
        Turbo = 7 => "turbo",
        /// Twitch Prime.
        Premium = 8 => "premium",
        /// Partnered channel (verified).
        Partner = 9 => "partner",
        /// Channel VIP.
        Vip = 10 => "vip",
        /// Bits leaderboard position.
        BitsLeader = 11 => "bits-leader",
        /// Gifted-subscription leader.
        SubGifter = 12 => "sub-gifter",
        /// Any badge this library does not know.
        Other = 99,
    }
}

wire_enum! {
    /// The `user-type` tag: Twitch-side role of the sender.
    ///
    /// Ordinary viewers carry an empty value on the wire.
    pub enum UserType: fallback = Viewer {
        /// No special role.
        Viewer = 0 => "",
        /// Channel moderator.
        Moderator = 1 => "mod",
        /// Global moderator.
        GlobalModerator = 2 => "global_mod",
        /// Twitch administrator.
        Admin = 3 => "admin",
        /// Twitch staff.
        Staff = 4 => "staff",
    }
}

wire_enum! {
    /// Subscription tier from `msg-param-sub-plan`.
    ///
    /// Paid tiers are named by their numeric wire token, so both the name
    /// match and the numeric fallback resolve them.
    pub enum SubPlan: fallback = NotSet {
        /// Tag missing or unrecognized.
        NotSet = 0 => "",
        /// Twitch Prime subscription.
        Prime = 1 => "Prime",
        /// Tier 1 ($4.99).
        Tier1 = 1000 => "1000",
        /// Tier 2 ($9.99).
        Tier2 = 2000 => "2000",
        /// Tier 3 ($24.99).
        Tier3 = 3000 => "3000",
    }
}

wire_enum! {
    /// Ritual classification from `msg-param-ritual-name`.
    pub enum RitualKind: fallback = Other {
        /// A user's first message in the channel.
        NewChatter = 0 => "new_chatter",
        /// Any ritual this library does not know.
        Other = 99,
    }
}

wire_enum! {
    /// Secondary classification of USERNOTICE via its `msg-id` tag.
    pub enum UserNoticeKind: fallback = Other {
        /// New subscription.
        Sub = 0 => "sub",
        /// Continued subscription.
        Resub = 1 => "resub",
        /// Gifted subscription.
        SubGift = 2 => "subgift",
        /// Incoming raid.
        Raid = 3 => "raid",
        /// Channel ritual.
        Ritual = 4 => "ritual",
        /// Unknown or absent msg-id.
        Other = 99,
    }
}

wire_enum! {
    /// Secondary classification of NOTICE via its `msg-id` tag.
    pub enum NoticeKind: fallback = Other {
        /// Ban target is already banned.
        AlreadyBanned = 0 => "already_banned",
        /// Host target is already being hosted.
        BadHostHosting = 1 => "bad_host_hosting",
        /// Too many host commands in the window.
        BadHostRateExceeded = 2 => "bad_host_rate_exceeded",
        /// Mod target is already a moderator.
        BadModMod = 3 => "bad_mod_mod",
        /// Unban target is not banned.
        BadUnbanNoBan = 4 => "bad_unban_no_ban",
        /// Unmod target is not a moderator.
        BadUnmodMod = 5 => "bad_unmod_mod",
        /// The channel has been suspended.
        ChannelSuspended = 6 => "msg_channel_suspended",
        /// Reply to `/help`: available commands.
        CmdsAvailable = 7 => "cmds_available",
        /// Host commands remaining in the window.
        HostsRemaining = 8 => "hosts_remaining",
        /// Command target does not exist.
        InvalidUser = 9 => "invalid_user",
        /// Sender lacks permission for the command.
        NoPermission = 10 => "no_permission",
        /// Reply to `/mods`: the moderator list.
        RoomMods = 11 => "room_mods",
        /// Unban completed.
        UnbanSuccess = 12 => "unban_success",
        /// Command not available inside chat rooms.
        UnsupportedChatRoomsCmd = 13 => "unsupported_chatrooms_cmd",
        /// Any msg-id this library does not know.
        Other = 99,
    }
}

wire_enum! {
    /// Room settings a ROOMSTATE message can change, as a bitfield.
    ///
    /// Twitch sends partial diffs; the set of flags on a decoded room-state
    /// record marks which settings that particular message carried.
    pub enum RoomStates: fallback = None, composable = true {
        /// No change.
        None = 0,
        /// Emote-only mode.
        EmoteOnly = 1,
        /// Unique-chat (r9k) mode.
        R9k = 2,
        /// Slow mode.
        Slow = 4,
        /// Followers-only mode.
        FollowersOnly = 8,
        /// Subscribers-only mode.
        SubsOnly = 16,
        /// Broadcaster language restriction.
        BroadcasterLang = 32,
    }
}
