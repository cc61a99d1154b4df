//! Error types for type definition and value conversion.
//!
//! Two classes of failure exist:
//!
//! - [`DefinitionError`] is raised while a type is being built. It is fatal to
//!   that type: no partially built table is ever returned.
//! - [`InvalidValueError`] is raised at runtime when a raw integer is not a
//!   valid value of an already-built type. Invalid values are always rejected,
//!   never clamped or truncated.
//!
//! [`DecodeError`] wraps the second class for byte-level decoding, adding the
//! one failure that only exists there (a buffer of the wrong length).

use thiserror::Error;

/// Construction-time failure while building an enumeration or flag set.
///
/// Every variant carries the name of the type being defined so that the
/// message stands on its own when several types are built from one schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// The type name is not a legal identifier.
    #[error("type name `{name}` is not a valid identifier")]
    InvalidTypeName { name: String },

    /// The declaration has no members.
    #[error("`{type_name}` must declare at least one member")]
    EmptyMemberList { type_name: String },

    /// An entry is neither a bare name nor `name = value`.
    #[error("`{type_name}`: malformed member entry `{entry}`")]
    MalformedEntry { type_name: String, entry: String },

    /// A member name is not a legal identifier.
    #[error("`{type_name}`: member name `{name}` is not a valid identifier")]
    InvalidMemberName { type_name: String, name: String },

    /// The same member name appears twice.
    #[error("`{type_name}`: member `{name}` is declared more than once")]
    DuplicateMember { type_name: String, name: String },

    /// An explicit value could not be resolved to an integer.
    #[error("`{type_name}.{member}`: value `{expr}` is not an integer constant ({reason})")]
    NonIntegerValue {
        type_name: String,
        member: String,
        expr: String,
        reason: String,
    },

    /// An explicit value does not fit the type's representation.
    #[error("`{type_name}.{member}`: value {value} does not fit in {repr}")]
    ValueOutOfRange {
        type_name: String,
        member: String,
        value: i128,
        repr: &'static str,
    },

    /// Two members of an enumeration share a value.
    #[error("`{type_name}.{member}`: value {value} is already used by `{previous}`")]
    DuplicateValue {
        type_name: String,
        member: String,
        previous: String,
        value: i128,
    },

    /// Auto-increment would move past the largest representable value.
    #[error("`{type_name}.{member}`: auto-assigned value overflows {repr}")]
    CursorOverflow {
        type_name: String,
        member: String,
        repr: &'static str,
    },

    /// The requested flag-set base type is not an unsigned integer width.
    #[error("`{type_name}`: base type `{base}` is not an unsigned integer type")]
    InvalidBaseType { type_name: String, base: String },

    /// An explicit flag value does not have exactly one bit set.
    #[error("`{type_name}.{member}`: flag value {value:#x} must have exactly one bit set")]
    NotSingleBit {
        type_name: String,
        member: String,
        value: u64,
    },

    /// An explicit flag value reuses a bit already taken by an earlier member.
    #[error("`{type_name}.{member}`: flag value {value:#x} overlaps earlier flags {mask:#x}")]
    BitOverlap {
        type_name: String,
        member: String,
        value: u64,
        mask: u64,
    },

    /// The next auto-assigned bit does not fit in the base width.
    #[error("`{type_name}.{member}`: no free bit left in a {bits}-bit base")]
    BitCursorOverflow {
        type_name: String,
        member: String,
        bits: u32,
    },
}

impl DefinitionError {
    /// Name of the type whose definition failed.
    pub fn type_name(&self) -> &str {
        match self {
            Self::InvalidTypeName { name } => name,
            Self::EmptyMemberList { type_name }
            | Self::MalformedEntry { type_name, .. }
            | Self::InvalidMemberName { type_name, .. }
            | Self::DuplicateMember { type_name, .. }
            | Self::NonIntegerValue { type_name, .. }
            | Self::ValueOutOfRange { type_name, .. }
            | Self::DuplicateValue { type_name, .. }
            | Self::CursorOverflow { type_name, .. }
            | Self::InvalidBaseType { type_name, .. }
            | Self::NotSingleBit { type_name, .. }
            | Self::BitOverlap { type_name, .. }
            | Self::BitCursorOverflow { type_name, .. } => type_name,
        }
    }
}

/// A raw integer that is not a valid value of the named type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value} is not a valid `{type_name}`")]
pub struct InvalidValueError {
    pub type_name: String,
    pub value: i128,
}

impl InvalidValueError {
    pub fn new(type_name: impl Into<String>, value: impl Into<i128>) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.into(),
        }
    }
}

/// Failure decoding a value from its fixed-width byte representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer is not exactly the encoded width of the type.
    #[error("`{type_name}` is encoded in {expected} bytes, got {found}")]
    Length {
        type_name: String,
        expected: usize,
        found: usize,
    },

    /// The decoded integer failed validation.
    #[error(transparent)]
    Invalid(#[from] InvalidValueError),
}
