//! Raw line parsing into [`ParsedMessage`].

mod parser;

use crate::tags::TagMap;

/// One parsed protocol line: tags, prefix, command, parameters.
///
/// Immutable once constructed; one instance per received line. The tag map
/// is always there, and remembers whether the line carried a tag section at
/// all (see [`crate::tags::TagPresence`]).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedMessage {
    /// Decoded tag section.
    pub tags: TagMap,
    /// Message prefix without the leading `:`; empty when absent.
    pub prefix: String,
    /// The command token; empty for an empty line.
    pub command: String,
    /// Parameters in order, the trailing parameter last.
    pub params: Vec<String>,
}

impl ParsedMessage {
    /// Parse one raw line. Trailing CR/LF is tolerated and stripped.
    ///
    /// Total: any input, including the empty string and malformed tag
    /// sections, yields a message. A malformed line just yields fewer
    /// pieces; it is the dispatcher's job to ignore what it cannot route.
    pub fn parse(line: &str) -> ParsedMessage {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        let raw = parser::parse_line(trimmed);
        tracing::trace!(command = raw.command, params = raw.params.len(), "parsed line");
        ParsedMessage {
            tags: raw.tags.map(TagMap::parse).unwrap_or_default(),
            prefix: raw.prefix.unwrap_or("").to_string(),
            command: raw.command.to_string(),
            params: raw.params.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// The parameter at `index`, or `""` when out of range.
    pub fn param(&self, index: usize) -> &str {
        self.params.get(index).map(String::as_str).unwrap_or("")
    }

    /// The nick part of the prefix (`nick!user@host` → `nick`).
    ///
    /// On Twitch this is the sender's login name.
    pub fn prefix_nick(&self) -> &str {
        self.prefix.split('!').next().unwrap_or("")
    }

    /// The first channel-shaped (`#`-led) parameter, if any.
    pub fn channel_param(&self) -> Option<&str> {
        self.params
            .iter()
            .map(String::as_str)
            .find(|p| p.starts_with('#'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagPresence;

    #[test]
    fn test_parse_owned_message() {
        let msg = ParsedMessage::parse(
            ":somebody!somebody@somebody.tmi.twitch.tv PRIVMSG #somechannel :Hello chat!\r\n",
        );
        assert_eq!(msg.command, "PRIVMSG");
        assert_eq!(msg.prefix, "somebody!somebody@somebody.tmi.twitch.tv");
        assert_eq!(msg.prefix_nick(), "somebody");
        assert_eq!(msg.params, vec!["#somechannel", "Hello chat!"]);
        assert_eq!(msg.channel_param(), Some("#somechannel"));
    }

    #[test]
    fn test_empty_line_degrades() {
        let msg = ParsedMessage::parse("");
        assert_eq!(msg.command, "");
        assert!(msg.params.is_empty());
        assert_eq!(msg.param(0), "");
        assert!(!msg.tags.negotiated());
    }

    #[test]
    fn test_tag_section_marks_negotiated() {
        let msg = ParsedMessage::parse("@mod=1 :x PRIVMSG #c :hi");
        assert!(msg.tags.negotiated());
        assert_eq!(msg.tags.presence("mod"), TagPresence::Present);
        assert_eq!(msg.tags.presence("color"), TagPresence::Absent);

        let bare = ParsedMessage::parse(":x PRIVMSG #c :hi");
        assert!(!bare.tags.negotiated());
        assert_eq!(bare.tags.presence("mod"), TagPresence::NotNegotiated);
    }

    #[test]
    fn test_param_accessor_defaults() {
        let msg = ParsedMessage::parse("HOSTTARGET #chan :target 5");
        assert_eq!(msg.param(0), "#chan");
        assert_eq!(msg.param(1), "target 5");
        assert_eq!(msg.param(2), "");
    }

    #[test]
    fn test_decoding_is_stateless() {
        let line = "@color=#1E90FF;mod=1 :u PRIVMSG #c :x";
        assert_eq!(ParsedMessage::parse(line), ParsedMessage::parse(line));
    }
}
