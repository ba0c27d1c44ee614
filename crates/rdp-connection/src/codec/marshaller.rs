//! Marshaller entry points and options.

use crate::codec::line::{LineGrammar, Lines, decode_lines, encode_lines};
use crate::codec::uri::encode_uri;
use crate::error::MarshalError;
use crate::limits::LINE_TERMINATOR;
use crate::model::{PropertySet, PropertySetKind};

/// Options controlling error policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarshalOptions {
    /// Fail on the first problem.
    ///
    /// When disabled (lenient mode):
    /// - Unparsable, unknown or invalid lines are skipped
    /// - Fields that cannot be written are skipped
    /// - Validation failures on write are logged and the value is written
    ///   anyway
    ///
    /// Every recovery is reported through `log::warn!`.
    pub strict: bool,
}

impl MarshalOptions {
    /// Creates default (strict) options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

impl Default for MarshalOptions {
    fn default() -> Self {
        Self::strict()
    }
}

/// Converts property sets to and from the `.rdp` line and `rdp://` URI
/// formats.
///
/// Holds the compiled line grammar; build one and reuse it across calls.
#[derive(Debug, Clone)]
pub struct Marshaller {
    grammar: LineGrammar,
    options: MarshalOptions,
}

impl Marshaller {
    pub fn new(options: MarshalOptions) -> Self {
        Self {
            grammar: LineGrammar::new(),
            options,
        }
    }

    pub fn options(&self) -> MarshalOptions {
        self.options
    }

    /// Serializes `set` lazily, one line per present, non-default field in
    /// schema order.
    pub fn serialize<'a, K: PropertySetKind>(
        &self,
        set: &'a PropertySet<K>,
    ) -> Result<Lines<'a, K>, MarshalError> {
        encode_lines(set, self.options.strict)
    }

    /// Serializes `set` as `.rdp` file text, each line CRLF-terminated.
    pub fn serialize_to_string<K: PropertySetKind>(
        &self,
        set: &PropertySet<K>,
    ) -> Result<String, MarshalError> {
        let mut out = String::new();
        for line in self.serialize(set)? {
            out.push_str(&line?);
            out.push_str(LINE_TERMINATOR);
        }
        Ok(out)
    }

    /// Deserializes lines into a new property set.
    pub fn deserialize<K, I, S>(&self, lines: I) -> Result<PropertySet<K>, MarshalError>
    where
        K: PropertySetKind,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        decode_lines(&self.grammar, lines, self.options.strict)
    }

    /// Deserializes `.rdp` file text. Both LF and CRLF line endings are
    /// accepted.
    pub fn deserialize_str<K: PropertySetKind>(
        &self,
        text: &str,
    ) -> Result<PropertySet<K>, MarshalError> {
        self.deserialize(text.lines())
    }

    /// Serializes `set` as an `rdp://` URI.
    pub fn serialize_uri<K: PropertySetKind>(
        &self,
        set: &PropertySet<K>,
    ) -> Result<String, MarshalError> {
        encode_uri(set, self.options.strict)
    }
}

impl Default for Marshaller {
    fn default() -> Self {
        Self::new(MarshalOptions::default())
    }
}

/// Serializes `set` into a vector of lines.
pub fn serialize_lines<K: PropertySetKind>(
    set: &PropertySet<K>,
    options: MarshalOptions,
) -> Result<Vec<String>, MarshalError> {
    Marshaller::new(options).serialize(set)?.collect()
}

/// Deserializes lines into a new property set.
pub fn deserialize_lines<K, I, S>(
    lines: I,
    options: MarshalOptions,
) -> Result<PropertySet<K>, MarshalError>
where
    K: PropertySetKind,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Marshaller::new(options).deserialize(lines)
}

/// Serializes `set` as an `rdp://` URI.
pub fn serialize_uri<K: PropertySetKind>(
    set: &PropertySet<K>,
    options: MarshalOptions,
) -> Result<String, MarshalError> {
    Marshaller::new(options).serialize_uri(set)
}
