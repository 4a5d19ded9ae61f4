//! Emote sub-records from the `emotes` tag.
//!
//! Wire form: `/`-separated groups of `id:start-end,start-end,...`, where
//! each range indexes codepoints of the message body.

/// One occurrence range of an emote within the message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmoteRange {
    /// First codepoint index, `-1` when the bound was unparsable.
    pub start: i32,
    /// Last codepoint index (inclusive), `-1` when unparsable.
    pub end: i32,
}

/// One emote with every place it occurs in the message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Emote {
    /// Emote id, verbatim.
    pub id: String,
    /// Occurrence ranges in wire order.
    pub ranges: Vec<EmoteRange>,
}

fn parse_range(range: &str) -> EmoteRange {
    let Some((start, end)) = range.split_once('-') else {
        return EmoteRange { start: -1, end: -1 };
    };
    EmoteRange {
        start: start.parse().unwrap_or(-1),
        end: end.parse().unwrap_or(-1),
    }
}

fn parse_group(group: &str) -> Option<Emote> {
    let (id, ranges) = group.split_once(':')?;
    if id.is_empty() {
        return None;
    }
    Some(Emote {
        id: id.to_string(),
        ranges: ranges.split(',').map(parse_range).collect(),
    })
}

/// Parse the full `emotes` tag value.
///
/// A group without an `id:` head is skipped; a bad range inside a group
/// defaults only that range's bounds to `-1`.
pub(crate) fn parse_emotes(value: &str) -> Vec<Emote> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split('/').filter_map(parse_group).collect()
}
