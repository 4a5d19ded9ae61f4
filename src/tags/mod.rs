//! IRCv3 message tags: the map, presence tracking, and typed decoding.
//!
//! Every accessor here is total. A missing key and an unparsable value both
//! degrade to the same type-appropriate default; callers that need to tell
//! the two apart ask [`TagMap::presence`] instead of inspecting the decoded
//! value.

mod badge;
mod emote;
pub mod records;

pub use badge::Badge;
pub use emote::{Emote, EmoteRange};

use std::collections::HashMap;
use std::fmt::{Result as FmtResult, Write};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::color::Color;
use crate::wire::{self, WireEnum};

/// Presence of tag data, per key or per tag section.
///
/// The protocol distinguishes three states that a plain boolean collapses:
/// the tags capability was never negotiated, the section existed but the
/// key was missing, or the key was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagPresence {
    /// The line carried no tag section at all.
    NotNegotiated,
    /// The tag section was present but did not contain the key.
    Absent,
    /// The key was found.
    Present,
}

/// The tag section of one line, with values unescaped.
///
/// Always constructed, never optional: a line without a tag section yields
/// an empty map whose [`negotiated`](TagMap::negotiated) flag is `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagMap {
    entries: HashMap<String, String>,
    negotiated: bool,
}

impl TagMap {
    /// Parse a tag section (the text between `@` and the first space).
    ///
    /// Pairs are split on `;`, then on the first `=`. Elements without any
    /// `=` are silently dropped; `key=` keeps an empty value. Every value
    /// is unescaped per the IRCv3 table.
    pub fn parse(section: &str) -> TagMap {
        let mut entries = HashMap::new();
        for pair in section.split(';') {
            let Some((key, value)) = pair.split_once('=') else {
                if !pair.is_empty() {
                    tracing::debug!(pair, "dropping tag without '='");
                }
                continue;
            };
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), unescape_tag_value(value));
        }
        TagMap {
            entries,
            negotiated: true,
        }
    }

    /// Whether the line carried a tag section at all.
    pub fn negotiated(&self) -> bool {
        self.negotiated
    }

    /// Three-state presence for one key.
    pub fn presence(&self, key: &str) -> TagPresence {
        if !self.negotiated {
            TagPresence::NotNegotiated
        } else if self.entries.contains_key(key) {
            TagPresence::Present
        } else {
            TagPresence::Absent
        }
    }

    /// Record-level presence: [`TagPresence::Present`] when a tag section
    /// existed, [`TagPresence::NotNegotiated`] otherwise.
    pub fn record_presence(&self) -> TagPresence {
        if self.negotiated {
            TagPresence::Present
        } else {
            TagPresence::NotNegotiated
        }
    }

    /// The raw (unescaped) value for a key.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no tags.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // --- typed accessors -------------------------------------------------

    /// String value; `""` when missing.
    pub fn string(&self, key: &str) -> String {
        self.raw(key).unwrap_or("").to_string()
    }

    /// Boolean from the exact literal `"1"`; anything else is `false`.
    pub fn boolean(&self, key: &str) -> bool {
        matches!(self.raw(key), Some("1"))
    }

    /// Unsigned integer; `0` when missing or unparsable.
    pub fn unsigned(&self, key: &str) -> u64 {
        self.raw(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Signed integer; `0` when missing or unparsable.
    pub fn signed(&self, key: &str) -> i64 {
        self.raw(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Delimited list of non-empty elements; empty when missing.
    pub fn list(&self, key: &str, delimiter: char) -> Vec<String> {
        self.raw(key)
            .map(|v| {
                v.split(delimiter)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Duration from whole seconds; zero when missing or unparsable.
    pub fn seconds(&self, key: &str) -> Duration {
        Duration::from_secs(self.unsigned(key))
    }

    /// Timestamp from Unix-epoch milliseconds; the epoch itself when
    /// missing or unparsable.
    pub fn timestamp(&self, key: &str) -> DateTime<Utc> {
        self.raw(key)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Color from strict `#RRGGBB`; [`Color::Empty`] otherwise.
    pub fn color(&self, key: &str) -> Color {
        Color::parse(self.raw(key).unwrap_or(""))
    }

    /// Wire enum value; the type's fallback variant on no match.
    pub fn wire<T: WireEnum>(&self, key: &str) -> T {
        wire::resolve(self.raw(key).unwrap_or(""))
    }

    /// Badge list from comma-separated `name/version` pairs.
    ///
    /// A bad pair is skipped; it does not invalidate the list.
    pub fn badges(&self, key: &str) -> Vec<Badge> {
        badge::parse_badges(self.raw(key).unwrap_or(""))
    }

    /// Emote list from `/`-separated `id:start-end,start-end` groups.
    ///
    /// A bad range defaults only that range's bounds to `-1`.
    pub fn emotes(&self, key: &str) -> Vec<Emote> {
        emote::parse_emotes(self.raw(key).unwrap_or(""))
    }
}

/// Escape a tag value for serialization, per the IRCv3 message-tags spec.
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match c {
            ';' => f.write_str("\\:")?,
            ' ' => f.write_str("\\s")?,
            '\\' => f.write_str("\\\\")?,
            '\r' => f.write_str("\\r")?,
            '\n' => f.write_str("\\n")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Unescape a tag value from wire format.
///
/// Reverses [`escape_tag_value`]. Unknown escapes drop the backslash; a
/// trailing backslash is dropped entirely.
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::UserType;

    #[test]
    fn test_parse_tag_section() {
        let tags = TagMap::parse("badges=admin/1;color=#1E90FF;mod=1");
        assert_eq!(tags.len(), 3);
        assert_eq!(tags.raw("color"), Some("#1E90FF"));
        assert!(tags.negotiated());
    }

    #[test]
    fn test_pairs_without_equals_dropped() {
        let tags = TagMap::parse("orphan;mod=1;=anon");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.presence("orphan"), TagPresence::Absent);
    }

    #[test]
    fn test_bare_flag_keeps_empty_value() {
        let tags = TagMap::parse("subscriber=;mod=1");
        assert_eq!(tags.raw("subscriber"), Some(""));
        assert_eq!(tags.presence("subscriber"), TagPresence::Present);
    }

    #[test]
    fn test_values_are_unescaped_uniformly() {
        let tags = TagMap::parse(
            "system-msg=5\\sviewers\\sresubscribed!;ban-reason=a\\:b;login=plain",
        );
        assert_eq!(tags.raw("system-msg"), Some("5 viewers resubscribed!"));
        assert_eq!(tags.raw("ban-reason"), Some("a;b"));
        assert_eq!(tags.raw("login"), Some("plain"));
    }

    #[test]
    fn test_unescape_table() {
        assert_eq!(unescape_tag_value("a\\:b\\sc\\\\d\\re\\nf"), "a;b c\\d\re\nf");
        assert_eq!(unescape_tag_value("test\\"), "test");
        assert_eq!(unescape_tag_value("a\\xb"), "axb");
    }

    #[test]
    fn test_escape_roundtrip() {
        for original in ["simple", "with space", "with;semi", "with\\back", "a\r\nb"] {
            let mut escaped = String::new();
            escape_tag_value(&mut escaped, original).unwrap();
            assert_eq!(unescape_tag_value(&escaped), original);
        }
    }

    #[test]
    fn test_boolean_exact_literals() {
        let tags = TagMap::parse("a=1;b=0;c=true;d=2;e=");
        assert!(tags.boolean("a"));
        assert!(!tags.boolean("b"));
        assert!(!tags.boolean("c"));
        assert!(!tags.boolean("d"));
        assert!(!tags.boolean("e"));
        assert!(!tags.boolean("missing"));
    }

    #[test]
    fn test_numeric_degrades_to_zero() {
        let tags = TagMap::parse("bits=100;bad=xyz;neg=-5");
        assert_eq!(tags.unsigned("bits"), 100);
        assert_eq!(tags.unsigned("bad"), 0);
        assert_eq!(tags.unsigned("missing"), 0);
        assert_eq!(tags.signed("neg"), -5);
        assert_eq!(tags.unsigned("neg"), 0);
    }

    #[test]
    fn test_list_accessor() {
        let tags = TagMap::parse("emote-sets=0,33,50;empty=");
        assert_eq!(tags.list("emote-sets", ','), vec!["0", "33", "50"]);
        assert!(tags.list("empty", ',').is_empty());
        assert!(tags.list("missing", ',').is_empty());
    }

    #[test]
    fn test_seconds_and_timestamp() {
        let tags = TagMap::parse("ban-duration=600;tmi-sent-ts=1507246572675;bad-ts=zzz");
        assert_eq!(tags.seconds("ban-duration"), Duration::from_secs(600));
        assert_eq!(tags.timestamp("tmi-sent-ts").timestamp_millis(), 1507246572675);
        assert_eq!(tags.timestamp("bad-ts"), DateTime::UNIX_EPOCH);
        assert_eq!(tags.timestamp("missing"), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_color_accessor() {
        let tags = TagMap::parse("color=#1E90FF;badcolor=1E90FF");
        assert_eq!(tags.color("color").rgb(), Some((30, 144, 255)));
        assert!(tags.color("badcolor").is_empty());
        assert!(tags.color("missing").is_empty());
    }

    #[test]
    fn test_wire_enum_accessor() {
        let tags = TagMap::parse("user-type=mod");
        assert_eq!(tags.wire::<UserType>("user-type"), UserType::Moderator);
        // Missing user-type resolves through the empty string to Viewer.
        assert_eq!(tags.wire::<UserType>("missing"), UserType::Viewer);
    }

    #[test]
    fn test_absent_and_malformed_decode_alike() {
        // Callers cannot tell the two apart from the value; only presence
        // distinguishes them.
        let tags = TagMap::parse("bits=oops");
        assert_eq!(tags.unsigned("bits"), tags.unsigned("missing"));
        assert_eq!(tags.presence("bits"), TagPresence::Present);
        assert_eq!(tags.presence("missing"), TagPresence::Absent);
    }
}
