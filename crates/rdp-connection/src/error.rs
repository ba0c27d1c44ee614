//! Error types for RDP property marshalling and validation.

use thiserror::Error;

use crate::model::ValueKind;

/// Coarse error categories, one per failure kind the marshaller can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The property-set type has no usable schema.
    Schema,
    /// A line does not match `key:type-sign:value`.
    InvalidLineSyntax,
    /// A key has no matching field descriptor.
    UnknownKey,
    /// A type-sign other than `i`, `s` or `b`.
    UnknownTypeSign,
    /// Value text cannot be decoded for its type-sign.
    MalformedValue,
    /// A decoded or runtime value violates a field constraint.
    ConstraintViolation,
    /// The value cannot be represented in the requested output.
    UnsupportedValue,
}

impl ErrorKind {
    /// Returns a short stable name for the kind (e.g., "unknown-key").
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Schema => "schema",
            ErrorKind::InvalidLineSyntax => "invalid-line-syntax",
            ErrorKind::UnknownKey => "unknown-key",
            ErrorKind::UnknownTypeSign => "unknown-type-sign",
            ErrorKind::MalformedValue => "malformed-value",
            ErrorKind::ConstraintViolation => "constraint-violation",
            ErrorKind::UnsupportedValue => "unsupported-value",
        }
    }
}

/// Error while resolving the schema of a property-set type.
///
/// These are configuration bugs, never transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("type '{type_name}' is not declared as a property set")]
    NotAPropertySet { type_name: &'static str },

    #[error("field '{field}' of '{type_name}' has no serialized key")]
    MissingKey {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("serialized key {key:?} is declared more than once in '{type_name}'")]
    DuplicateKey {
        type_name: &'static str,
        key: &'static str,
    },

    #[error("field '{field}' is declared more than once in '{type_name}'")]
    DuplicateField {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("'{type_name}' marks both '{first}' and '{second}' as the primary field")]
    MultiplePrimaryFields {
        type_name: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

/// Error while encoding or decoding value text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("{found:?} value cannot be written as {expected:?}")]
    KindMismatch { expected: ValueKind, found: ValueKind },

    #[error("{kind:?} values have no URI form")]
    NoUriForm { kind: ValueKind },

    #[error("unknown type sign {sign:?}")]
    UnknownTypeSign { sign: String },

    #[error("malformed integer {text:?}")]
    MalformedInteger { text: String },

    #[error("byte array text has odd length {len}")]
    OddLengthByteText { len: usize },

    #[error("malformed hex in byte array text {text:?}")]
    MalformedHex { text: String },
}

/// A value that violates a field descriptor constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("property '{field}' has an unsupported value: {value}")]
    ValueNotAllowed { field: &'static str, value: String },

    #[error("property '{field}' has an out-of-range value: {value} (expected {min}..={max})")]
    ValueOutOfRange {
        field: &'static str,
        value: String,
        min: i64,
        max: i64,
    },
}

/// Error returned by the line and URI marshallers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("invalid data at line index {line_index}")]
    InvalidLineSyntax { line_index: usize },

    #[error("unknown property name {key:?} at line index {line_index}")]
    UnknownKey { key: String, line_index: usize },

    #[error("property {key:?} at line index {line_index}: {source}")]
    Decode {
        key: String,
        line_index: usize,
        source: CodecError,
    },

    #[error("{source} at line index {line_index}")]
    InvalidValueAtLine {
        line_index: usize,
        source: ValidationError,
    },

    #[error(transparent)]
    InvalidValue(#[from] ValidationError),

    #[error("property '{field}' cannot be written: {source}")]
    UnsupportedValue {
        field: &'static str,
        source: CodecError,
    },

    #[error("no property named '{field}'")]
    UnknownField { field: String },
}

impl MarshalError {
    /// Returns the error kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarshalError::Schema(_) => ErrorKind::Schema,
            MarshalError::InvalidLineSyntax { .. } => ErrorKind::InvalidLineSyntax,
            MarshalError::UnknownKey { .. } | MarshalError::UnknownField { .. } => {
                ErrorKind::UnknownKey
            }
            MarshalError::Decode {
                source: CodecError::UnknownTypeSign { .. },
                ..
            } => ErrorKind::UnknownTypeSign,
            MarshalError::Decode { .. } => ErrorKind::MalformedValue,
            MarshalError::InvalidValueAtLine { .. } | MarshalError::InvalidValue(_) => {
                ErrorKind::ConstraintViolation
            }
            MarshalError::UnsupportedValue { .. } => ErrorKind::UnsupportedValue,
        }
    }

    /// Returns the zero-based input line index, for deserialization errors.
    pub fn line_index(&self) -> Option<usize> {
        match self {
            MarshalError::InvalidLineSyntax { line_index }
            | MarshalError::UnknownKey { line_index, .. }
            | MarshalError::Decode { line_index, .. }
            | MarshalError::InvalidValueAtLine { line_index, .. } => Some(*line_index),
            _ => None,
        }
    }
}

/// Error from the protected password helpers.
#[derive(Debug, Error)]
pub enum ProtectionError {
    #[error("data protection failed: {0}")]
    Protector(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("no protected password is set")]
    Missing,

    #[error("unprotected password is not valid UTF-16LE")]
    InvalidUtf16,
}
