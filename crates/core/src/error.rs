//! Decoder and registry error types.

use thiserror::Error;

/// A per-field conversion failure.
///
/// In lenient mode these are collected in a
/// [`DecodeReport`](crate::decode::DecodeReport) while the raw value stays
/// in place and siblings keep decoding; in strict mode the first one aborts
/// the decode. Paths are `$`-rooted dotted paths with `[i]` array indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A date field held a string that is not RFC 3339 or a number that is
    /// not a representable epoch-millisecond timestamp.
    #[error("{path}: cannot parse {raw:?} as a date")]
    BadDate { path: String, raw: String },

    /// An enum field held a string with no case-insensitive match in the
    /// enum's member table.
    #[error("{path}: {member:?} is not a member of enum {enum_name}")]
    UnknownEnumMember {
        path: String,
        enum_name: String,
        member: String,
    },

    /// Metadata referenced a type name missing from the registry.
    #[error("{path}: metadata references unregistered type {type_name:?}")]
    UnresolvedType { path: String, type_name: String },

    /// Metadata referenced an enum name missing from the registry.
    #[error("{path}: metadata references unregistered enum {enum_name:?}")]
    UnresolvedEnum { path: String, enum_name: String },

    /// Input nested deeper than [`MAX_DEPTH`](crate::decode::MAX_DEPTH).
    /// The metadata graph may be cyclic, so the depth guard is what bounds
    /// recursion on adversarially deep data.
    #[error("{path}: value nests deeper than {max} levels")]
    TooDeep { path: String, max: usize },
}

impl ConversionError {
    /// Path of the field the failure occurred at.
    pub fn path(&self) -> &str {
        match self {
            ConversionError::BadDate { path, .. }
            | ConversionError::UnknownEnumMember { path, .. }
            | ConversionError::UnresolvedType { path, .. }
            | ConversionError::UnresolvedEnum { path, .. }
            | ConversionError::TooDeep { path, .. } => path,
        }
    }
}

/// A shape conflict between metadata and data, e.g. metadata says array but
/// the value is an object.
///
/// Never fatal in either mode: the value passes through unchanged and the
/// mismatch is recorded, keeping the client usable across server-side
/// schema drift.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: expected {expected}, found {found}; value passed through")]
pub struct SchemaMismatch {
    pub path: String,
    pub expected: &'static str,
    pub found: &'static str,
}

/// Registry construction failure. Duplicate names are generator bugs and
/// surface when the registry is frozen, not at first use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("type {0:?} declared twice")]
    DuplicateType(&'static str),
    #[error("enum {0:?} declared twice")]
    DuplicateEnum(&'static str),
}
