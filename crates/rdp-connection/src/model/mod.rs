//! Data model types for RDP connection properties.
//!
//! This module contains the types the marshallers work on:
//! - Values (typed property contents) and literals (constants in tables)
//! - Field descriptors (per-property metadata)
//! - Schemas (ordered descriptor tables, published once per type)
//! - Property sets (runtime values of one connection)

pub mod field;
pub mod property_set;
pub mod schema;
pub mod value;
pub mod window_position;

pub use field::{BINARY_FLAG, FieldDescriptor, IntRange};
pub use property_set::PropertySet;
pub use schema::{PropertySetKind, Schema, schema_of};
pub use value::{Literal, Value, ValueKind};
pub use window_position::WindowPosition;
