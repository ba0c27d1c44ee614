//! Field descriptors: static metadata for one property.
//!
//! Descriptors are declared as `const` tables with the builder methods below:
//!
//! ```rust
//! use rdp_connection::model::{FieldDescriptor, Literal, BINARY_FLAG};
//!
//! const FIELDS: &[FieldDescriptor] = &[
//!     FieldDescriptor::text("FullAddress", "full address").primary(),
//!     FieldDescriptor::integer("ServerPort", "server port").range(0, 65535),
//!     FieldDescriptor::integer("Compression", "compression").allowed(BINARY_FLAG),
//!     FieldDescriptor::integer("ScreenModeId", "screen mode id")
//!         .allowed(&[Literal::Integer(1), Literal::Integer(2)])
//!         .default_value(Literal::Integer(2)),
//! ];
//! assert_eq!(FIELDS[1].key, Some("server port"));
//! ```

use crate::model::{Literal, Value, ValueKind};

/// Allowed values of an on/off property.
pub const BINARY_FLAG: &[Literal] = &[Literal::Integer(0), Literal::Integer(1)];

/// Inclusive integer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Immutable metadata for one property of a property set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field identity; used in diagnostics and as the property-set key.
    pub source_name: &'static str,
    /// Wire key. Case-sensitive, may contain spaces.
    pub key: Option<&'static str>,
    pub kind: ValueKind,
    pub allowed: Option<&'static [Literal]>,
    /// Only meaningful for `Integer` fields.
    pub range: Option<IntRange>,
    /// A value equal to this is not written.
    pub default: Option<Literal>,
    /// Excluded from both directions.
    pub ignored: bool,
    /// Moved to the front of URI output.
    pub primary: bool,
}

impl FieldDescriptor {
    /// Creates a descriptor of the given kind.
    pub const fn new(source_name: &'static str, key: &'static str, kind: ValueKind) -> Self {
        Self {
            source_name,
            key: Some(key),
            kind,
            allowed: None,
            range: None,
            default: None,
            ignored: false,
            primary: false,
        }
    }

    pub const fn integer(source_name: &'static str, key: &'static str) -> Self {
        Self::new(source_name, key, ValueKind::Integer)
    }

    pub const fn text(source_name: &'static str, key: &'static str) -> Self {
        Self::new(source_name, key, ValueKind::Text)
    }

    pub const fn bytes(source_name: &'static str, key: &'static str) -> Self {
        Self::new(source_name, key, ValueKind::ByteArray)
    }

    /// Creates a descriptor with no wire key.
    ///
    /// Unless also marked [`ignored`](Self::ignored), such a field is a
    /// schema error when marshalled.
    pub const fn unkeyed(source_name: &'static str, kind: ValueKind) -> Self {
        Self {
            key: None,
            ..Self::new(source_name, "", kind)
        }
    }

    pub const fn allowed(self, values: &'static [Literal]) -> Self {
        Self {
            allowed: Some(values),
            ..self
        }
    }

    pub const fn range(self, min: i64, max: i64) -> Self {
        Self {
            range: Some(IntRange::new(min, max)),
            ..self
        }
    }

    pub const fn default_value(self, value: Literal) -> Self {
        Self {
            default: Some(value),
            ..self
        }
    }

    pub const fn ignored(self) -> Self {
        Self {
            ignored: true,
            ..self
        }
    }

    pub const fn primary(self) -> Self {
        Self {
            primary: true,
            ..self
        }
    }

    /// Returns true if `value` equals the declared default.
    pub fn is_default(&self, value: &Value) -> bool {
        self.default.is_some_and(|d| d.matches(value))
    }
}
