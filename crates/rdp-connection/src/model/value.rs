//! Value types for RDP connection properties.
//!
//! Every property holds one of three kinds of value. The kind decides the
//! type sign written on the wire.

use std::borrow::Cow;
use std::fmt;

use crate::limits::{TYPE_SIGN_BYTES, TYPE_SIGN_INTEGER, TYPE_SIGN_TEXT};

/// The closed set of representable value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Text,
    ByteArray,
}

impl ValueKind {
    /// Returns the type sign written for this kind.
    pub fn type_sign(self) -> &'static str {
        match self {
            ValueKind::Integer => TYPE_SIGN_INTEGER,
            ValueKind::Text => TYPE_SIGN_TEXT,
            ValueKind::ByteArray => TYPE_SIGN_BYTES,
        }
    }

    /// Resolves a type sign to the kind it selects.
    pub fn from_type_sign(sign: &str) -> Option<ValueKind> {
        match sign {
            TYPE_SIGN_INTEGER => Some(ValueKind::Integer),
            TYPE_SIGN_TEXT => Some(ValueKind::Text),
            TYPE_SIGN_BYTES => Some(ValueKind::ByteArray),
            _ => None,
        }
    }
}

/// A runtime property value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Signed integer, written in base 10.
    Integer(i64),

    /// Text, written verbatim.
    Text(String),

    /// Raw bytes, written as uppercase hex pairs.
    Bytes(Vec<u8>),
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Text(_) => ValueKind::Text,
            Value::Bytes(_) => ValueKind::ByteArray,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the natural string form of the value, if it has one.
    ///
    /// Integers and text have one; byte arrays do not.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Integer(v) => Some(Cow::Owned(v.to_string())),
            Value::Text(v) => Some(Cow::Borrowed(v)),
            Value::Bytes(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
            Value::Bytes(v) => f.write_str(&hex::encode_upper(v)),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

/// A constant value usable in static field tables.
///
/// Used for allowed-value sets and declared defaults. A literal only equals
/// a value of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    Integer(i64),
    Text(&'static str),
}

impl Literal {
    /// Returns true if `value` is the same kind and equal to this literal.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Integer(a), Value::Integer(b)) => a == b,
            (Literal::Text(a), Value::Text(b)) => *a == b.as_str(),
            _ => false,
        }
    }
}

impl From<Literal> for Value {
    fn from(v: Literal) -> Self {
        match v {
            Literal::Integer(i) => Value::Integer(i),
            Literal::Text(s) => Value::Text(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_signs() {
        assert_eq!(ValueKind::Integer.type_sign(), "i");
        assert_eq!(ValueKind::Text.type_sign(), "s");
        assert_eq!(ValueKind::ByteArray.type_sign(), "b");
        assert_eq!(ValueKind::from_type_sign("s"), Some(ValueKind::Text));
        assert_eq!(ValueKind::from_type_sign("x"), None);
        assert_eq!(ValueKind::from_type_sign("I"), None);
    }

    #[test]
    fn test_literal_matches_same_kind_only() {
        assert!(Literal::Integer(1).matches(&Value::Integer(1)));
        assert!(!Literal::Integer(1).matches(&Value::Integer(2)));
        assert!(!Literal::Integer(1).matches(&Value::Text("1".to_string())));
        assert!(Literal::Text("*").matches(&Value::Text("*".to_string())));
        assert!(!Literal::Text("*").matches(&Value::Bytes(b"*".to_vec())));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::from("host").to_string(), "host");
        assert_eq!(Value::Bytes(vec![0x0a, 0xff]).to_string(), "0AFF");
    }

    #[test]
    fn test_natural_text_form() {
        assert_eq!(Value::Integer(3389).to_text().as_deref(), Some("3389"));
        assert_eq!(Value::from("a:b").to_text().as_deref(), Some("a:b"));
        assert!(Value::Bytes(vec![1]).to_text().is_none());
    }
}
