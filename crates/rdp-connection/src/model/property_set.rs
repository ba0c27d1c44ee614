//! Property-set instances: runtime values keyed by field.

use std::fmt;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::error::MarshalError;
use crate::model::{FieldDescriptor, PropertySetKind, Value, schema_of};

/// The runtime values of one property set of kind `K`.
///
/// Each field is either absent or holds a [`Value`]. Absent is distinct from
/// a value equal to the field's default. Values are keyed by the field's
/// source name.
pub struct PropertySet<K> {
    values: FxHashMap<&'static str, Value>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: PropertySetKind> PropertySet<K> {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Self {
            values: FxHashMap::default(),
            _kind: PhantomData,
        }
    }

    /// Sets a field by source name (e.g., `"FullAddress"`).
    ///
    /// Returns the previous value.
    pub fn set(
        &mut self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, MarshalError> {
        let descriptor = Self::descriptor(field)?;
        Ok(self.insert(descriptor, value.into()))
    }

    /// Sets a field by wire key (e.g., `"full address"`).
    pub fn set_key(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, MarshalError> {
        let schema = schema_of::<K>()?;
        let descriptor = schema
            .field_by_key(key)
            .ok_or_else(|| MarshalError::UnknownField {
                field: key.to_string(),
            })?;
        Ok(self.insert(descriptor, value.into()))
    }

    /// Clears a field by source name, returning its value.
    pub fn unset(&mut self, field: &str) -> Result<Option<Value>, MarshalError> {
        let descriptor = Self::descriptor(field)?;
        Ok(self.values.remove(descriptor.source_name))
    }

    /// Returns a field's value by wire key.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        let descriptor = schema_of::<K>().ok()?.field_by_key(key)?;
        self.values.get(descriptor.source_name)
    }

    fn descriptor(field: &str) -> Result<&'static FieldDescriptor, MarshalError> {
        schema_of::<K>()?
            .field(field)
            .ok_or_else(|| MarshalError::UnknownField {
                field: field.to_string(),
            })
    }
}

impl<K> PropertySet<K> {
    /// Returns a field's value by source name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn get_integer(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_integer)
    }

    pub fn get_text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_text)
    }

    pub fn get_bytes(&self, field: &str) -> Option<&[u8]> {
        self.get(field).and_then(Value::as_bytes)
    }

    /// Returns true if the field holds a value.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Returns the number of fields holding a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(source name, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Stores a value under the descriptor's identity, replacing any previous
    /// value.
    pub(crate) fn insert(&mut self, descriptor: &FieldDescriptor, value: Value) -> Option<Value> {
        self.values.insert(descriptor.source_name, value)
    }

    /// Stores or clears a value under a known field name.
    pub(crate) fn put(&mut self, field: &'static str, value: Option<Value>) {
        match value {
            Some(value) => {
                self.values.insert(field, value);
            }
            None => {
                self.values.remove(field);
            }
        }
    }
}

impl<K: PropertySetKind> Default for PropertySet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for PropertySet<K> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K> PartialEq for PropertySet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<K> Eq for PropertySet<K> {}

impl<K: PropertySetKind> fmt::Debug for PropertySet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.values.iter().collect();
        entries.sort_by_key(|(k, _)| **k);
        f.debug_struct(K::NAME)
            .field("values", &entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    struct Conn;

    impl PropertySetKind for Conn {
        const NAME: &'static str = "Conn";

        fn fields() -> Vec<FieldDescriptor> {
            vec![
                FieldDescriptor::text("FullAddress", "full address"),
                FieldDescriptor::integer("ServerPort", "server port"),
            ]
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut set = PropertySet::<Conn>::new();
        assert!(set.is_empty());

        assert_eq!(set.set("ServerPort", 3389).unwrap(), None);
        assert_eq!(set.get_integer("ServerPort"), Some(3389));
        assert_eq!(set.set("ServerPort", 3390).unwrap(), Some(Value::Integer(3389)));

        set.set_key("full address", "host.example.com").unwrap();
        assert_eq!(set.get_text("FullAddress"), Some("host.example.com"));
        assert_eq!(
            set.get_key("full address"),
            Some(&Value::from("host.example.com"))
        );
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unknown_field() {
        let mut set = PropertySet::<Conn>::new();
        let err = set.set("Bogus", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownKey);
        assert!(set.set_key("FullAddress", "x").is_err());
    }

    #[test]
    fn test_unset_and_equality() {
        let mut a = PropertySet::<Conn>::new();
        let b = PropertySet::<Conn>::new();
        a.set("ServerPort", 1).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.unset("ServerPort").unwrap(), Some(Value::Integer(1)));
        assert_eq!(a, b);
    }
}
