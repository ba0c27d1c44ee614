//! Constraint validation for property values.
//!
//! Checks a typed value against the allowed-value set and integer range of
//! its field descriptor. Validation always runs on the typed value, never on
//! wire text: before encoding when serializing, after decoding when
//! deserializing.
//!
//! **Note:** Range bounds compare integers. A text value is compared by its
//! base-10 integer reading; text that is not an integer, and byte arrays,
//! are out of range.

use crate::error::ValidationError;
use crate::model::{FieldDescriptor, Value};

/// Validates a value against a field's constraints.
///
/// The allowed-value set is checked first, then the range.
pub fn validate_value(value: &Value, field: &FieldDescriptor) -> Result<(), ValidationError> {
    if let Some(allowed) = field.allowed {
        if !allowed.iter().any(|lit| lit.matches(value)) {
            return Err(ValidationError::ValueNotAllowed {
                field: field.source_name,
                value: value.to_string(),
            });
        }
    }

    if let Some(range) = field.range {
        let in_range = range_operand(value).is_some_and(|v| range.contains(v));
        if !in_range {
            return Err(ValidationError::ValueOutOfRange {
                field: field.source_name,
                value: value.to_string(),
                min: range.min,
                max: range.max,
            });
        }
    }

    Ok(())
}

/// Returns the integer a range check compares, if the value has one.
fn range_operand(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(v) => Some(*v),
        Value::Text(s) => s.trim().parse().ok(),
        Value::Bytes(_) => None,
    }
}
