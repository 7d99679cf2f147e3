//! The metadata-driven decoder.
//!
//! Rewrites a raw `serde_json::Value` in place: dates become canonical
//! RFC 3339 strings, enum member names become their numeric values, and
//! nested types recurse per their conversion tables. Fields without
//! metadata pass through untouched, as does anything whose shape conflicts
//! with its metadata.
//!
//! The main entry points are [`MetaRegistry::decode_as`] for a single
//! object response and [`MetaRegistry::decode_collection_as`] for list
//! responses; `*_strict` variants abort on the first conversion failure
//! instead of degrading to pass-through.

use serde_json::Value;

use crate::date;
use crate::error::{ConversionError, SchemaMismatch};
use crate::meta::{FieldRule, TypeMeta};
use crate::registry::MetaRegistry;

/// Upper bound on value nesting.
///
/// Recursion terminates because JSON data is acyclic even though the
/// metadata graph may not be; the guard turns adversarially deep input
/// into a reported error instead of a stack overflow.
pub const MAX_DEPTH: usize = 64;

/// What a decode left behind besides the rewritten value.
#[derive(Debug, Default)]
pub struct DecodeReport {
    /// Per-field conversion failures. The raw values are still in place.
    pub errors: Vec<ConversionError>,
    /// Shape conflicts where the value passed through unchanged.
    pub mismatches: Vec<SchemaMismatch>,
}

impl DecodeReport {
    /// True when every conversion the metadata asked for applied cleanly.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.mismatches.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Lenient,
    Strict,
}

impl MetaRegistry {
    /// Decode `value` under an explicit field rule, collecting failures.
    ///
    /// With no rule this is the identity: untyped fields pass through.
    pub fn decode_value(&self, value: &mut Value, rule: Option<&FieldRule>) -> DecodeReport {
        let mut w = Walker::new(self, Mode::Lenient);
        if let Some(rule) = rule {
            // Lenient walks never return Err.
            let _ = w.apply(value, rule, "$", 0);
        }
        w.report
    }

    /// Like [`MetaRegistry::decode_value`] but the first conversion failure
    /// aborts. Shape mismatches still pass through and are reported.
    pub fn decode_value_strict(
        &self,
        value: &mut Value,
        rule: Option<&FieldRule>,
    ) -> Result<DecodeReport, ConversionError> {
        let mut w = Walker::new(self, Mode::Strict);
        if let Some(rule) = rule {
            w.apply(value, rule, "$", 0)?;
        }
        Ok(w.report)
    }

    /// Decode an object response as the named registered type.
    pub fn decode_as(&self, value: &mut Value, type_name: &str) -> DecodeReport {
        let mut w = Walker::new(self, Mode::Lenient);
        let _ = w.apply_named(value, type_name, "$", 0);
        w.report
    }

    /// Strict variant of [`MetaRegistry::decode_as`].
    pub fn decode_as_strict(
        &self,
        value: &mut Value,
        type_name: &str,
    ) -> Result<DecodeReport, ConversionError> {
        let mut w = Walker::new(self, Mode::Strict);
        w.apply_named(value, type_name, "$", 0)?;
        Ok(w.report)
    }

    /// Decode a list response as a sequence of the named type. This is the
    /// shape every generated list endpoint produces.
    pub fn decode_collection_as(&self, value: &mut Value, type_name: &str) -> DecodeReport {
        let mut w = Walker::new(self, Mode::Lenient);
        let _ = w.apply_named_collection(value, type_name);
        w.report
    }

    /// Strict variant of [`MetaRegistry::decode_collection_as`].
    pub fn decode_collection_as_strict(
        &self,
        value: &mut Value,
        type_name: &str,
    ) -> Result<DecodeReport, ConversionError> {
        let mut w = Walker::new(self, Mode::Strict);
        w.apply_named_collection(value, type_name)?;
        Ok(w.report)
    }
}

struct Walker<'a> {
    registry: &'a MetaRegistry,
    mode: Mode,
    report: DecodeReport,
}

impl<'a> Walker<'a> {
    fn new(registry: &'a MetaRegistry, mode: Mode) -> Self {
        Walker {
            registry,
            mode,
            report: DecodeReport::default(),
        }
    }

    /// Record a conversion failure. Strict mode aborts; lenient mode leaves
    /// the raw value in place and keeps walking siblings.
    fn failed(&mut self, err: ConversionError) -> Result<(), ConversionError> {
        match self.mode {
            Mode::Strict => Err(err),
            Mode::Lenient => {
                tracing::warn!(error = %err, "field left unconverted");
                self.report.errors.push(err);
                Ok(())
            }
        }
    }

    /// Record a shape conflict; the value passes through in both modes.
    fn mismatched(&mut self, path: &str, expected: &'static str, found: &Value) {
        let mismatch = SchemaMismatch {
            path: path.to_string(),
            expected,
            found: json_kind(found),
        };
        tracing::debug!(mismatch = %mismatch, "schema drift, passing value through");
        self.report.mismatches.push(mismatch);
    }

    fn apply(
        &mut self,
        value: &mut Value,
        rule: &FieldRule,
        path: &str,
        depth: usize,
    ) -> Result<(), ConversionError> {
        // Absent data converts to nothing, whatever the metadata says.
        if value.is_null() {
            return Ok(());
        }
        if depth >= MAX_DEPTH {
            return self.failed(ConversionError::TooDeep {
                path: path.to_string(),
                max: MAX_DEPTH,
            });
        }
        match rule {
            FieldRule::Date => self.apply_date(value, path),
            FieldRule::Enum(enum_name) => self.apply_enum(value, enum_name, path),
            FieldRule::Nested(type_name) => self.apply_named(value, type_name, path, depth),
            FieldRule::Array(inner) => match value {
                Value::Array(items) => {
                    for (i, item) in items.iter_mut().enumerate() {
                        self.apply(item, inner, &format!("{path}[{i}]"), depth + 1)?;
                    }
                    Ok(())
                }
                other => {
                    self.mismatched(path, "array", other);
                    Ok(())
                }
            },
            FieldRule::Dictionary(inner) => match value {
                Value::Object(entries) => {
                    // Keys pass through untouched.
                    for (key, entry) in entries.iter_mut() {
                        self.apply(entry, inner, &format!("{path}.{key}"), depth + 1)?;
                    }
                    Ok(())
                }
                other => {
                    self.mismatched(path, "object", other);
                    Ok(())
                }
            },
        }
    }

    /// Decode an object field-by-field under the named type's table.
    fn apply_named(
        &mut self,
        value: &mut Value,
        type_name: &str,
        path: &str,
        depth: usize,
    ) -> Result<(), ConversionError> {
        if value.is_null() {
            return Ok(());
        }
        let Some(meta) = self.registry.type_meta(type_name) else {
            return self.failed(ConversionError::UnresolvedType {
                path: path.to_string(),
                type_name: type_name.to_string(),
            });
        };
        self.apply_type(value, meta, path, depth)
    }

    fn apply_type(
        &mut self,
        value: &mut Value,
        meta: &TypeMeta,
        path: &str,
        depth: usize,
    ) -> Result<(), ConversionError> {
        match value {
            Value::Object(entries) => {
                for (field, rule) in meta.fields() {
                    // Listed fields missing from the payload are skipped;
                    // unlisted fields are never touched.
                    if let Some(entry) = entries.get_mut(field) {
                        self.apply(entry, rule, &format!("{path}.{field}"), depth + 1)?;
                    }
                }
                Ok(())
            }
            other => {
                self.mismatched(path, "object", other);
                Ok(())
            }
        }
    }

    fn apply_named_collection(
        &mut self,
        value: &mut Value,
        type_name: &str,
    ) -> Result<(), ConversionError> {
        if value.is_null() {
            return Ok(());
        }
        match value {
            Value::Array(items) => {
                for (i, item) in items.iter_mut().enumerate() {
                    self.apply_named(item, type_name, &format!("$[{i}]"), 1)?;
                }
                Ok(())
            }
            other => {
                self.mismatched("$", "array", other);
                Ok(())
            }
        }
    }

    fn apply_date(&mut self, value: &mut Value, path: &str) -> Result<(), ConversionError> {
        match value {
            Value::String(s) => match date::canonicalize(s) {
                Some(canonical) => {
                    *s = canonical;
                    Ok(())
                }
                None => {
                    let raw = s.clone();
                    self.failed(ConversionError::BadDate {
                        path: path.to_string(),
                        raw,
                    })
                }
            },
            Value::Number(n) => {
                let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64));
                match millis.and_then(date::from_epoch_millis) {
                    Some(canonical) => {
                        *value = Value::String(canonical);
                        Ok(())
                    }
                    None => {
                        let raw = n.to_string();
                        self.failed(ConversionError::BadDate {
                            path: path.to_string(),
                            raw,
                        })
                    }
                }
            }
            other => {
                self.mismatched(path, "RFC 3339 string or epoch milliseconds", other);
                Ok(())
            }
        }
    }

    fn apply_enum(
        &mut self,
        value: &mut Value,
        enum_name: &str,
        path: &str,
    ) -> Result<(), ConversionError> {
        let Some(meta) = self.registry.enum_meta(enum_name) else {
            return self.failed(ConversionError::UnresolvedEnum {
                path: path.to_string(),
                enum_name: enum_name.to_string(),
            });
        };
        match value {
            // Numbers pass through as-is: flag enums combine bitwise, so
            // values outside the member table are legal. This also makes
            // re-decoding already-decoded data a no-op.
            Value::Number(_) => Ok(()),
            Value::String(member) => match meta.by_name(member) {
                Some(n) => {
                    *value = Value::Number(n.into());
                    Ok(())
                }
                None => {
                    let member = member.clone();
                    self.failed(ConversionError::UnknownEnumMember {
                        path: path.to_string(),
                        enum_name: enum_name.to_string(),
                        member,
                    })
                }
            },
            other => {
                self.mismatched(path, "enum number or member name", other);
                Ok(())
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
