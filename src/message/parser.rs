//! Nom-based splitting of one raw TMI line.
//!
//! Sequential stripping: optional `@tags `, optional `:prefix `, command
//! token, then parameters, where a `:`-led token swallows the rest of the
//! line as the single trailing parameter. This layer is deliberately
//! tolerant; any input yields a result, a malformed line just yields fewer
//! pieces.

use nom::{
    bytes::complete::take_till,
    character::complete::{char, space0},
    combinator::opt,
    sequence::preceded,
    IResult,
};

/// Borrowed pieces of one line, before owned construction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawMessage<'a> {
    /// Tag section without the leading `@`, if the line carried one.
    pub tags: Option<&'a str>,
    /// Prefix without the leading `:`, if present.
    pub prefix: Option<&'a str>,
    /// The command token; empty for an empty line.
    pub command: &'a str,
    /// Parameters, trailing last.
    pub params: Vec<&'a str>,
}

fn tag_section(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_till(|c| c == ' '))(input)
}

fn prefix_section(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_till(|c| c == ' '))(input)
}

fn command_token(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == ' ')(input)
}

fn message(input: &str) -> IResult<&str, RawMessage<'_>> {
    let (input, tags) = opt(tag_section)(input)?;
    let (input, _) = space0(input)?;
    let (input, prefix) = opt(prefix_section)(input)?;
    let (input, _) = space0(input)?;
    let (input, command) = command_token(input)?;

    let mut params: Vec<&str> = Vec::new();
    let mut rest = input;
    while let Some(b' ') = rest.as_bytes().first().copied() {
        rest = &rest[1..];
        if let Some(b':') = rest.as_bytes().first().copied() {
            // Trailing parameter: the rest of the line, spaces included.
            params.push(&rest[1..]);
            rest = "";
            break;
        }
        let end = rest.find(' ').unwrap_or(rest.len());
        let param = &rest[..end];
        if !param.is_empty() {
            params.push(param);
        }
        rest = &rest[end..];
    }

    Ok((
        rest,
        RawMessage {
            tags,
            prefix,
            command,
            params,
        },
    ))
}

/// Split one line (no CRLF) into its raw pieces. Total; never fails.
pub(crate) fn parse_line(input: &str) -> RawMessage<'_> {
    match message(input) {
        Ok((_, raw)) => raw,
        // Unreachable with the combinators above, but the contract is total.
        Err(_) => RawMessage {
            tags: None,
            prefix: None,
            command: "",
            params: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_command() {
        let raw = parse_line("PING");
        assert_eq!(raw.command, "PING");
        assert!(raw.tags.is_none());
        assert!(raw.prefix.is_none());
        assert!(raw.params.is_empty());
    }

    #[test]
    fn test_parse_command_with_params() {
        let raw = parse_line("PRIVMSG #channel :Hello, world!");
        assert_eq!(raw.command, "PRIVMSG");
        assert_eq!(raw.params, vec!["#channel", "Hello, world!"]);
    }

    #[test]
    fn test_parse_with_prefix() {
        let raw = parse_line(":nick!user@host PRIVMSG #channel :Hello");
        assert_eq!(raw.prefix, Some("nick!user@host"));
        assert_eq!(raw.command, "PRIVMSG");
        assert_eq!(raw.params, vec!["#channel", "Hello"]);
    }

    #[test]
    fn test_parse_with_tags() {
        let raw = parse_line("@badges=admin/1;color=#1E90FF :nick PRIVMSG #ch :Hi");
        assert_eq!(raw.tags, Some("badges=admin/1;color=#1E90FF"));
        assert_eq!(raw.prefix, Some("nick"));
        assert_eq!(raw.command, "PRIVMSG");
        assert_eq!(raw.params, vec!["#ch", "Hi"]);
    }

    #[test]
    fn test_parse_multiple_middles() {
        let raw = parse_line("COMMAND a b :trailing with spaces");
        assert_eq!(raw.params, vec!["a", "b", "trailing with spaces"]);
    }

    #[test]
    fn test_parse_only_trailing() {
        let raw = parse_line("COMMAND :only trailing");
        assert_eq!(raw.params, vec!["only trailing"]);
    }

    #[test]
    fn test_parse_empty_line() {
        let raw = parse_line("");
        assert_eq!(raw.command, "");
        assert!(raw.params.is_empty());
    }

    #[test]
    fn test_parse_empty_trailing() {
        let raw = parse_line("CLEARCHAT #channel :");
        assert_eq!(raw.params, vec!["#channel", ""]);
    }

    #[test]
    fn test_trailing_keeps_embedded_colons() {
        let raw = parse_line("PRIVMSG #ch :see: this stays");
        assert_eq!(raw.params, vec!["#ch", "see: this stays"]);
    }

    #[test]
    fn test_double_spaces_between_params() {
        let raw = parse_line("COMMAND a  b");
        assert_eq!(raw.params, vec!["a", "b"]);
    }

    #[test]
    fn test_tags_without_body() {
        let raw = parse_line("@badges=admin/1");
        assert_eq!(raw.tags, Some("badges=admin/1"));
        assert_eq!(raw.command, "");
    }

    #[test]
    fn test_numeric_command() {
        let raw = parse_line(":tmi.twitch.tv 366 nick #channel :End of /NAMES list");
        assert_eq!(raw.command, "366");
        assert_eq!(raw.params, vec!["nick", "#channel", "End of /NAMES list"]);
    }
}
