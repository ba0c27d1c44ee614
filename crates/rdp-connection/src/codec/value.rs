//! Value text encoding/decoding.
//!
//! Maps typed values to and from the `<type-sign>:<value>` part of a line:
//! - `i`: base-10 signed integer
//! - `s`: text, verbatim
//! - `b`: bytes as uppercase hex pairs, no separators

use crate::error::CodecError;
use crate::model::{Value, ValueKind};

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a value as a field of `kind`, returning `(type sign, text)`.
///
/// Text fields accept any value with a natural string form, so an integer
/// stored in a text field encodes as its decimal digits. Every other
/// mismatch between value and kind is a [`CodecError::KindMismatch`].
pub fn encode_value(value: &Value, kind: ValueKind) -> Result<(&'static str, String), CodecError> {
    let mismatch = || CodecError::KindMismatch {
        expected: kind,
        found: value.kind(),
    };
    let text = match (kind, value) {
        (ValueKind::Integer, Value::Integer(v)) => v.to_string(),
        (ValueKind::Text, v) => v.to_text().ok_or_else(mismatch)?.into_owned(),
        (ValueKind::ByteArray, Value::Bytes(bytes)) => encode_hex(bytes),
        _ => return Err(mismatch()),
    };
    Ok((kind.type_sign(), text))
}

/// Renders bytes as uppercase hex, two digits per byte, in array order.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes value text, choosing the branch by the line's type sign.
///
/// The field's declared kind takes no part: a line is decoded as whatever
/// its type sign says.
pub fn decode_value(type_sign: &str, text: &str) -> Result<Value, CodecError> {
    match ValueKind::from_type_sign(type_sign) {
        Some(ValueKind::Integer) => decode_integer(text).map(Value::Integer),
        Some(ValueKind::Text) => Ok(Value::Text(text.to_string())),
        Some(ValueKind::ByteArray) => decode_hex(text).map(Value::Bytes),
        None => Err(CodecError::UnknownTypeSign {
            sign: type_sign.to_string(),
        }),
    }
}

/// Parses a base-10 signed integer. Surrounding whitespace is ignored.
pub fn decode_integer(text: &str) -> Result<i64, CodecError> {
    text.trim()
        .parse()
        .map_err(|_| CodecError::MalformedInteger {
            text: text.to_string(),
        })
}

/// Parses hex pairs into bytes. Either letter case is accepted.
///
/// Length is counted in characters, so odd length is reported before any
/// non-hex character, including non-ASCII ones.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, CodecError> {
    let len = text.chars().count();
    if len % 2 != 0 {
        return Err(CodecError::OddLengthByteText { len });
    }
    hex::decode(text).map_err(|_| CodecError::MalformedHex {
        text: text.to_string(),
    })
}
