//! Error types for the TMI protocol library.
//!
//! Wire-level problems (malformed lines, absent tags, non-numeric numeric
//! tags) are never surfaced as errors; they degrade to typed defaults at the
//! decoding site. The types here cover the remaining class of failures:
//! misusing the enum codec from calling code.

use thiserror::Error;

/// Errors raised by the wire-enum codec.
///
/// These indicate programmer errors or lossy flag data, not tolerated wire
/// noise. Plain enum resolution ([`crate::wire::resolve`]) never returns
/// these; only flag composition and decomposition do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnumCodecError {
    /// Flag composition or decomposition was requested on an enum type that
    /// is not declared composable.
    #[error("{type_name} is not a composable flags type")]
    NotComposable {
        /// Name of the offending enum type.
        type_name: &'static str,
    },

    /// A numeric flag value contained bits that match no known flag.
    #[error("value {value} has bits not covered by {type_name}")]
    UnmatchedBits {
        /// Name of the enum type.
        type_name: &'static str,
        /// The value that failed to decompose.
        value: u32,
    },

    /// A flag name in a composed string matched no known flag.
    #[error("unknown {type_name} flag: {name}")]
    UnknownFlag {
        /// Name of the enum type.
        type_name: &'static str,
        /// The unmatched flag name.
        name: String,
    },
}
