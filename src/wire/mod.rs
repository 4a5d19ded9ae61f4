//! Bidirectional wire-string ↔ enum resolution.
//!
//! Twitch tags carry enum-like values either as wire names (`"admin"`,
//! `"sub"`) or as raw numbers, and a few as composable bitfields. Each enum
//! declares its variant table once through [`wire_enum!`]; the sorted lookup
//! table is built lazily behind a `OnceLock` and is immutable afterwards, so
//! concurrent readers need no synchronization.
//!
//! Resolution of unknown wire strings never fails; it falls back to the
//! type's designated fallback variant. Flag composition and decomposition
//! are the strict exceptions: misuse and lossy values are reported as
//! [`EnumCodecError`].

mod kinds;

pub use kinds::{
    BadgeKind, NoticeKind, RitualKind, RoomStates, SubPlan, UserNoticeKind, UserType,
};

use std::fmt;
use std::marker::PhantomData;

use crate::error::EnumCodecError;

/// One variant's wire mapping: numeric value plus resolved name.
///
/// The resolved name is the explicit override when the declaration carries
/// one, else the symbolic variant name.
#[derive(Debug, Clone, Copy)]
pub struct WireEntry {
    /// Numeric value of the variant.
    pub value: u32,
    /// Resolved wire name.
    pub name: &'static str,
}

/// An enum type with a declared wire table.
///
/// Implemented through [`wire_enum!`]; not intended for manual impls.
pub trait WireEnum: Copy + Sized + 'static {
    /// Type name, used in codec error reports.
    const TYPE_NAME: &'static str;
    /// Whether the type is a composable bitfield.
    const COMPOSABLE: bool;
    /// Declared variant table, in declaration order.
    const ENTRIES: &'static [WireEntry];

    /// The variant unknown wire strings resolve to.
    fn fallback() -> Self;
    /// The variant's numeric value.
    fn value(self) -> u32;
    /// The variant for a numeric value, if any.
    fn from_value(value: u32) -> Option<Self>;
    /// The type's cached lookup table.
    fn table() -> &'static WireTable;
}

/// Sorted lookup tables for one wire enum type.
///
/// Built once per type and never mutated; reads are lock-free.
#[derive(Debug)]
pub struct WireTable {
    /// (resolved name, value), sorted by name for binary search.
    by_name: Vec<(&'static str, u32)>,
    /// (value, resolved name), sorted ascending by value.
    by_value: Vec<(u32, &'static str)>,
    composable: bool,
    type_name: &'static str,
}

impl WireTable {
    /// Build the table for `T` from its declared entries.
    pub fn build<T: WireEnum>() -> WireTable {
        let mut by_name: Vec<(&'static str, u32)> =
            T::ENTRIES.iter().map(|e| (e.name, e.value)).collect();
        by_name.sort_unstable_by(|a, b| a.0.cmp(b.0));
        let mut by_value: Vec<(u32, &'static str)> =
            T::ENTRIES.iter().map(|e| (e.value, e.name)).collect();
        by_value.sort_unstable_by_key(|&(value, _)| value);
        WireTable {
            by_name,
            by_value,
            composable: T::COMPOSABLE,
            type_name: T::TYPE_NAME,
        }
    }

    fn lookup_name(&self, name: &str) -> Option<u32> {
        self.by_name
            .binary_search_by(|&(n, _)| n.cmp(name))
            .ok()
            .map(|i| self.by_name[i].1)
    }

    fn zero_name(&self) -> Option<&'static str> {
        match self.by_value.first() {
            Some(&(0, name)) => Some(name),
            _ => None,
        }
    }
}

/// Resolve a wire string into a variant of `T`.
///
/// Tries an exact match against resolved names, then a raw numeric parse
/// against declared values, and finally falls back to `T::fallback()`.
/// Unknown wire strings are expected during decoding and are never an error.
pub fn resolve<T: WireEnum>(wire: &str) -> T {
    let table = T::table();
    if let Some(value) = table.lookup_name(wire) {
        if let Some(variant) = T::from_value(value) {
            return variant;
        }
    }
    if let Ok(value) = wire.trim().parse::<u32>() {
        if let Some(variant) = T::from_value(value) {
            return variant;
        }
    }
    T::fallback()
}

/// Decompose a numeric flag union into its `", "`-joined flag names.
///
/// Zero maps to the zero-variant's name when one is declared. Any bits left
/// over after matching every known flag fail the whole decomposition; there
/// is no partial result.
pub fn decompose<T: WireEnum>(value: u32) -> Result<String, EnumCodecError> {
    let table = T::table();
    if !table.composable {
        return Err(EnumCodecError::NotComposable {
            type_name: table.type_name,
        });
    }
    if value == 0 {
        return match table.zero_name() {
            Some(name) => Ok(name.to_string()),
            None => Err(EnumCodecError::UnmatchedBits {
                type_name: table.type_name,
                value,
            }),
        };
    }
    let mut remaining = value;
    let mut matched: Vec<&'static str> = Vec::new();
    for &(flag, name) in table.by_value.iter().rev() {
        if flag == 0 {
            continue;
        }
        if remaining & flag == flag {
            matched.push(name);
            remaining &= !flag;
        }
    }
    if remaining != 0 {
        return Err(EnumCodecError::UnmatchedBits {
            type_name: table.type_name,
            value,
        });
    }
    matched.reverse();
    Ok(matched.join(", "))
}

/// Compose a flag string into a numeric union.
///
/// Accepts a single flag name, a single numeric literal, or a
/// comma-separated list of flag names. In list form every element must
/// match; one bad element fails the whole parse.
pub fn compose<T: WireEnum>(wire: &str) -> Result<u32, EnumCodecError> {
    let table = T::table();
    if !table.composable {
        return Err(EnumCodecError::NotComposable {
            type_name: table.type_name,
        });
    }
    let wire = wire.trim();
    if let Some(value) = table.lookup_name(wire) {
        return Ok(value);
    }
    if let Ok(value) = wire.parse::<u32>() {
        return Ok(value);
    }
    if wire.contains(',') {
        let mut union = 0u32;
        for part in wire.split(',') {
            let part = part.trim();
            match table.lookup_name(part) {
                Some(value) => union |= value,
                None => {
                    return Err(EnumCodecError::UnknownFlag {
                        type_name: table.type_name,
                        name: part.to_string(),
                    })
                }
            }
        }
        return Ok(union);
    }
    Err(EnumCodecError::UnknownFlag {
        type_name: table.type_name,
        name: wire.to_string(),
    })
}

/// A set of flags of a composable wire enum.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags<T: WireEnum> {
    bits: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    _marker: PhantomData<T>,
}

impl<T: WireEnum> Flags<T> {
    /// The empty set.
    pub const fn empty() -> Flags<T> {
        Flags {
            bits: 0,
            _marker: PhantomData,
        }
    }

    /// A set from a raw bit union.
    pub const fn from_bits(bits: u32) -> Flags<T> {
        Flags {
            bits,
            _marker: PhantomData,
        }
    }

    /// Add one flag.
    pub fn insert(&mut self, flag: T) {
        self.bits |= flag.value();
    }

    /// Whether the flag is set.
    pub fn contains(&self, flag: T) -> bool {
        let bits = flag.value();
        self.bits & bits == bits && bits != 0
    }

    /// Whether no flags are set.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The raw bit union.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The `", "`-joined flag names; fails on bits no flag covers.
    pub fn names(&self) -> Result<String, EnumCodecError> {
        decompose::<T>(self.bits)
    }
}

impl<T: WireEnum> Default for Flags<T> {
    fn default() -> Self {
        Flags::empty()
    }
}

impl<T: WireEnum> PartialEq for Flags<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: WireEnum> Eq for Flags<T> {}

impl<T: WireEnum> fmt::Debug for Flags<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match decompose::<T>(self.bits) {
            Ok(names) => write!(f, "Flags<{}>({})", T::TYPE_NAME, names),
            Err(_) => write!(f, "Flags<{}>({:#x})", T::TYPE_NAME, self.bits),
        }
    }
}

/// Declare a wire enum: variants with numeric values and optional wire-name
/// overrides, a fallback variant, and an optional composable marker.
///
/// Without an override the resolved wire name is the symbolic variant name.
macro_rules! wire_enum {
    (@name $variant:ident) => {
        stringify!($variant)
    };
    (@name $variant:ident, $wire:literal) => {
        $wire
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: fallback = $fallback:ident $(, composable = $composable:literal)? {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal $(=> $wire:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[non_exhaustive]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Resolve a wire string, falling back on no match.
            pub fn from_wire(wire: &str) -> Self {
                $crate::wire::resolve(wire)
            }

            /// The variant's resolved wire name.
            pub fn wire_name(self) -> &'static str {
                match self {
                    $( Self::$variant => wire_enum!(@name $variant $(, $wire)?), )+
                }
            }
        }

        impl $crate::wire::WireEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const COMPOSABLE: bool = false $(|| $composable)?;
            const ENTRIES: &'static [$crate::wire::WireEntry] = &[
                $(
                    $crate::wire::WireEntry {
                        value: $value,
                        name: wire_enum!(@name $variant $(, $wire)?),
                    },
                )+
            ];

            fn fallback() -> Self {
                Self::$fallback
            }

            fn value(self) -> u32 {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            fn from_value(value: u32) -> Option<Self> {
                match value {
                    $( v if v == $value => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn table() -> &'static $crate::wire::WireTable {
                static TABLE: std::sync::OnceLock<$crate::wire::WireTable> =
                    std::sync::OnceLock::new();
                TABLE.get_or_init($crate::wire::WireTable::build::<$name>)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$fallback
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.wire_name())
            }
        }
    };
}

pub(crate) use wire_enum;
