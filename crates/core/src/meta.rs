//! Conversion metadata for generated contract types.
//!
//! The platform's contract generator emits one table per REST type listing
//! only the fields that need conversion; everything else passes through
//! untouched. Cross-references between tables are by name and resolve
//! lazily through the [`MetaRegistry`](crate::registry::MetaRegistry), so
//! mutually recursive types (a container item referencing its container)
//! construct without any declaration-order constraint.

use std::collections::BTreeMap;
use std::ops::{BitAnd, BitOr};

use serde::{Deserialize, Serialize};

/// How one field of a raw JSON value is upgraded to typed form.
///
/// The tag is decided once, at metadata construction time; the decoder
/// switches on it rather than inspecting the runtime shape of the data.
/// `Array` and `Dictionary` wrap exactly one inner rule, and `Enum` /
/// `Nested` are mutually exclusive per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    /// RFC 3339 string or epoch-millisecond number; canonicalized to an
    /// RFC 3339 string.
    Date,
    /// Integer (passed through, flag combinations included) or member name
    /// of the named enum table (converted to its numeric value).
    Enum(&'static str),
    /// Nested object decoded field-by-field as the named type.
    Nested(&'static str),
    /// Sequence whose elements each decode under the inner rule, order and
    /// length preserved.
    Array(Box<FieldRule>),
    /// Mapping whose keys pass through unchanged and whose values decode
    /// under the inner rule.
    Dictionary(Box<FieldRule>),
}

impl FieldRule {
    pub fn array(inner: FieldRule) -> FieldRule {
        FieldRule::Array(Box::new(inner))
    }

    pub fn dictionary(inner: FieldRule) -> FieldRule {
        FieldRule::Dictionary(Box::new(inner))
    }

    /// Human-readable rule description for listings.
    pub fn describe(&self) -> String {
        match self {
            FieldRule::Date => "date".to_string(),
            FieldRule::Enum(name) => format!("enum {name}"),
            FieldRule::Nested(name) => format!("nested {name}"),
            FieldRule::Array(inner) => format!("array of {}", inner.describe()),
            FieldRule::Dictionary(inner) => format!("dictionary of {}", inner.describe()),
        }
    }
}

/// Conversion table for one contract type: the fields that need conversion
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMeta {
    name: &'static str,
    fields: BTreeMap<&'static str, FieldRule>,
}

impl TypeMeta {
    pub fn new(
        name: &'static str,
        fields: impl IntoIterator<Item = (&'static str, FieldRule)>,
    ) -> Self {
        TypeMeta {
            name,
            fields: fields.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    /// Converted fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldRule)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }
}

/// Name table for one enum: lower-cased member name → numeric value.
///
/// Used in both directions: name → number while decoding, number → name for
/// display. Several of the platform's enums are bit flags (inherit levels
/// 0/1/2/4/7), so values outside the table are legal combinations and are
/// never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMeta {
    name: &'static str,
    values: BTreeMap<&'static str, i64>,
}

impl EnumMeta {
    /// Build a table. Member names are expected lower-cased, as emitted by
    /// the contract generator.
    pub fn new(name: &'static str, values: &[(&'static str, i64)]) -> Self {
        debug_assert!(
            values.iter().all(|(n, _)| *n == n.to_ascii_lowercase()),
            "enum {name}: member names must be lower-cased"
        );
        EnumMeta {
            name,
            values: values.iter().copied().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Case-insensitive member lookup.
    pub fn by_name(&self, raw: &str) -> Option<i64> {
        self.values.get(raw.to_ascii_lowercase().as_str()).copied()
    }

    /// Exact-value reverse lookup. Flag combinations not present in the
    /// table return `None`; see [`EnumMeta::describe`].
    pub fn name_of(&self, value: i64) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(_, v)| **v == value)
            .map(|(n, _)| *n)
    }

    /// Human-readable rendering of a value: the exact member name if there
    /// is one, otherwise the `|`-joined flag members that compose it,
    /// otherwise the bare number.
    pub fn describe(&self, value: i64) -> String {
        if let Some(name) = self.name_of(value) {
            return name.to_string();
        }
        let mut covered = 0i64;
        let mut parts = Vec::new();
        for (name, v) in &self.values {
            if *v != 0 && value & v == *v {
                covered |= v;
                parts.push(*name);
            }
        }
        if covered == value && !parts.is_empty() {
            parts.join(" | ")
        } else {
            value.to_string()
        }
    }

    /// Members in name order.
    pub fn members(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

/// A decoded enum value: a plain integer with meaning supplied by an
/// [`EnumMeta`] table. Deliberately not a closed sum type — valid values
/// include bitwise combinations of the named constants.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EnumValue(pub i64);

impl EnumValue {
    /// True when every bit of `flag` is set in `self`.
    pub fn contains(self, flag: EnumValue) -> bool {
        self.0 & flag.0 == flag.0
    }
}

impl From<i64> for EnumValue {
    fn from(v: i64) -> Self {
        EnumValue(v)
    }
}

impl BitOr for EnumValue {
    type Output = EnumValue;
    fn bitor(self, rhs: EnumValue) -> EnumValue {
        EnumValue(self.0 | rhs.0)
    }
}

impl BitAnd for EnumValue {
    type Output = EnumValue;
    fn bitand(self, rhs: EnumValue) -> EnumValue {
        EnumValue(self.0 & rhs.0)
    }
}
