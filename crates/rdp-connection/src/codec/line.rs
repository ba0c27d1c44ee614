//! The `.rdp` line format: one `key:type-sign:value` record per line.
//!
//! Serialization walks the schema in declaration order and lazily yields one
//! line per present, non-default field. Deserialization parses each line,
//! resolves its key against the schema and decodes the value by the line's
//! type sign. Later lines for the same key overwrite earlier ones.

use std::iter::FusedIterator;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::codec::value::{decode_value, encode_value};
use crate::error::{CodecError, MarshalError, SchemaError};
use crate::model::{FieldDescriptor, PropertySet, PropertySetKind, Schema, ValueKind, schema_of};
use crate::validate::validate_value;

// =============================================================================
// GRAMMAR
// =============================================================================

/// Unanchored: the first `key:sign:` run found in the line is used.
const LINE_PATTERN: &str = r"(?P<key>[^:]+):(?P<sign>[^:]+):(?P<value>[^\r\n]*)";

/// The compiled line pattern.
///
/// Built once by whoever owns it (usually a [`Marshaller`](crate::Marshaller))
/// and only read afterwards.
#[derive(Debug, Clone)]
pub struct LineGrammar {
    pattern: Regex,
}

/// The three parts of a parsed line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub key: &'a str,
    pub type_sign: &'a str,
    /// Everything after the second separator, up to any CR/LF.
    pub value: &'a str,
}

impl LineGrammar {
    pub fn new() -> Self {
        // LINE_PATTERN is a fixed, valid expression
        let pattern = Regex::new(LINE_PATTERN).expect("line pattern compiles");
        Self { pattern }
    }

    /// Splits a line into key, type sign and value.
    pub fn parse<'a>(&self, line: &'a str) -> Option<RawLine<'a>> {
        let caps = self.pattern.captures(line)?;
        Some(RawLine {
            key: caps.name("key")?.as_str(),
            type_sign: caps.name("sign")?.as_str(),
            value: caps.name("value")?.as_str(),
        })
    }
}

impl Default for LineGrammar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SHARED FIELD PIPELINE
// =============================================================================

/// One field ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EncodedField {
    pub key: &'static str,
    pub type_sign: &'static str,
    pub text: String,
}

/// Surfaces `err` in strict mode; logs it and carries on in lenient mode.
pub(crate) fn recover(strict: bool, err: MarshalError) -> Result<(), MarshalError> {
    if strict {
        return Err(err);
    }
    log::warn!("skipping: {}", err);
    Ok(())
}

/// Resolves the schema of `K`.
///
/// A type that is not a property set yields `None` in lenient mode. Every
/// other schema error is fatal regardless of mode.
pub(crate) fn resolve_schema<K: PropertySetKind>(
    strict: bool,
) -> Result<Option<&'static Schema>, MarshalError> {
    match schema_of::<K>() {
        Ok(schema) => Ok(Some(schema)),
        Err(err @ SchemaError::NotAPropertySet { .. }) if !strict => {
            log::warn!("{}; nothing to marshal", err);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Runs one field through the write pipeline shared by the line and URI
/// serializers: skip ignored, require a key, skip absent, suppress default,
/// validate (advisory in lenient mode), encode.
///
/// `Ok(None)` means the field produces no output.
pub(crate) fn encode_field<K>(
    field: &FieldDescriptor,
    set: &PropertySet<K>,
    type_name: &'static str,
    strict: bool,
    allow_bytes: bool,
) -> Result<Option<EncodedField>, MarshalError> {
    if field.ignored {
        return Ok(None);
    }

    let Some(key) = field.key else {
        let err = SchemaError::MissingKey {
            type_name,
            field: field.source_name,
        };
        return recover(strict, err.into()).map(|()| None);
    };

    let Some(value) = set.get(field.source_name) else {
        return Ok(None);
    };

    if field.is_default(value) {
        return Ok(None);
    }

    if let Err(err) = validate_value(value, field) {
        if strict {
            return Err(err.into());
        }
        log::warn!("writing despite validation failure: {}", err);
    }

    if !allow_bytes && field.kind == ValueKind::ByteArray {
        let err = MarshalError::UnsupportedValue {
            field: field.source_name,
            source: CodecError::NoUriForm { kind: field.kind },
        };
        return recover(strict, err).map(|()| None);
    }

    match encode_value(value, field.kind) {
        Ok((type_sign, text)) => Ok(Some(EncodedField {
            key,
            type_sign,
            text,
        })),
        Err(source) => {
            let err = MarshalError::UnsupportedValue {
                field: field.source_name,
                source,
            };
            recover(strict, err).map(|()| None)
        }
    }
}

// =============================================================================
// SERIALIZATION
// =============================================================================

/// Lazy sequence of serialized lines.
///
/// In strict mode the first error is yielded and the sequence ends.
pub struct Lines<'a, K> {
    fields: std::slice::Iter<'static, FieldDescriptor>,
    set: &'a PropertySet<K>,
    type_name: &'static str,
    strict: bool,
    failed: bool,
}

impl<K> Iterator for Lines<'_, K> {
    type Item = Result<String, MarshalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for field in self.fields.by_ref() {
            match encode_field(field, self.set, self.type_name, self.strict, true) {
                Ok(Some(f)) => return Some(Ok(format!("{}:{}:{}", f.key, f.type_sign, f.text))),
                Ok(None) => {}
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}

impl<K> FusedIterator for Lines<'_, K> {}

/// Starts serializing `set` as lines.
///
/// Schema problems are reported here, before any line is produced.
pub fn encode_lines<K: PropertySetKind>(
    set: &PropertySet<K>,
    strict: bool,
) -> Result<Lines<'_, K>, MarshalError> {
    let fields: &'static [FieldDescriptor] = match resolve_schema::<K>(strict)? {
        Some(schema) => schema.fields(),
        None => &[],
    };
    Ok(Lines {
        fields: fields.iter(),
        set,
        type_name: K::NAME,
        strict,
        failed: false,
    })
}

// =============================================================================
// DESERIALIZATION
// =============================================================================

/// Builds the wire key → descriptor index. Keys are unique by construction
/// (see [`Schema::build`]).
fn key_index(
    schema: &'static Schema,
    strict: bool,
) -> Result<FxHashMap<&'static str, &'static FieldDescriptor>, MarshalError> {
    let mut index =
        FxHashMap::with_capacity_and_hasher(schema.fields().len(), Default::default());
    for field in schema.fields().iter().filter(|f| !f.ignored) {
        match field.key {
            Some(key) => {
                index.insert(key, field);
            }
            None => {
                let err = SchemaError::MissingKey {
                    type_name: schema.name(),
                    field: field.source_name,
                };
                recover(strict, err.into())?;
            }
        }
    }
    Ok(index)
}

/// Parses lines into a fresh property set.
pub fn decode_lines<K, I, S>(
    grammar: &LineGrammar,
    lines: I,
    strict: bool,
) -> Result<PropertySet<K>, MarshalError>
where
    K: PropertySetKind,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = PropertySet::new();
    let Some(schema) = resolve_schema::<K>(strict)? else {
        return Ok(set);
    };
    let index = key_index(schema, strict)?;

    for (line_index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();

        let Some(raw) = grammar.parse(line) else {
            recover(strict, MarshalError::InvalidLineSyntax { line_index })?;
            continue;
        };

        let Some(field) = index.get(raw.key).copied() else {
            let err = MarshalError::UnknownKey {
                key: raw.key.to_string(),
                line_index,
            };
            recover(strict, err)?;
            continue;
        };

        let value = match decode_value(raw.type_sign, raw.value) {
            Ok(value) => value,
            Err(source) => {
                let err = MarshalError::Decode {
                    key: raw.key.to_string(),
                    line_index,
                    source,
                };
                recover(strict, err)?;
                continue;
            }
        };

        if let Err(source) = validate_value(&value, field) {
            recover(strict, MarshalError::InvalidValueAtLine { line_index, source })?;
            continue;
        }

        set.insert(field, value);
    }

    Ok(set)
}
