//! Schemas: the ordered field tables of property-set types.
//!
//! A property-set type implements [`PropertySetKind`] by returning its field
//! descriptors. [`schema_of`] builds and validates the table the first time a
//! type is used and publishes it process-wide. Published schemas are never
//! mutated, so concurrent callers see either no entry or a complete one.

use std::any::TypeId;
use std::sync::{PoisonError, RwLock};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::SchemaError;
use crate::model::FieldDescriptor;

/// A type describing one kind of property set.
pub trait PropertySetKind: 'static {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Whether the type is declared as a marshallable property set.
    ///
    /// Resolving the schema of a type with `false` here fails with
    /// [`SchemaError::NotAPropertySet`].
    const DATA_CONTRACT: bool = true;

    /// Returns the field descriptors in declaration order.
    fn fields() -> Vec<FieldDescriptor>;
}

/// Ordered, validated field table of one property-set type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Builds a schema from descriptors, checking internal consistency.
    ///
    /// Rejects duplicate source names, duplicate wire keys and more than one
    /// primary field. Ignored fields take no part in the key checks. Missing
    /// keys are reported by the marshallers, which decide per call whether
    /// they are fatal.
    pub fn build(name: &'static str, fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        let mut names = FxHashSet::with_capacity_and_hasher(fields.len(), Default::default());
        let mut keys = FxHashSet::with_capacity_and_hasher(fields.len(), Default::default());
        let mut primary: Option<&'static str> = None;

        for field in &fields {
            if !names.insert(field.source_name) {
                return Err(SchemaError::DuplicateField {
                    type_name: name,
                    field: field.source_name,
                });
            }
            if field.ignored {
                continue;
            }
            if let Some(key) = field.key {
                if !keys.insert(key) {
                    return Err(SchemaError::DuplicateKey {
                        type_name: name,
                        key,
                    });
                }
            }
            if field.primary {
                if let Some(first) = primary {
                    return Err(SchemaError::MultiplePrimaryFields {
                        type_name: name,
                        first,
                        second: field.source_name,
                    });
                }
                primary = Some(field.source_name);
            }
        }

        Ok(Self { name, fields })
    }

    /// Returns the type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks up a descriptor by source name.
    pub fn field(&self, source_name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.source_name == source_name)
    }

    /// Looks up a non-ignored descriptor by wire key.
    pub fn field_by_key(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|f| !f.ignored && f.key == Some(key))
    }

    /// Returns the primary (front-of-URI) field, if any.
    pub fn primary_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.primary && !f.ignored)
    }
}

lazy_static::lazy_static! {
    /// Published schemas, keyed by property-set type.
    static ref SCHEMAS: RwLock<FxHashMap<TypeId, &'static Schema>> =
        RwLock::new(FxHashMap::default());
}

/// Returns the schema of `K`, building and publishing it on first use.
///
/// Every later call returns the same `&'static Schema`. If two threads race
/// on the first build, both build, the first to publish wins and the other
/// result is dropped.
pub fn schema_of<K: PropertySetKind>() -> Result<&'static Schema, SchemaError> {
    if !K::DATA_CONTRACT {
        return Err(SchemaError::NotAPropertySet { type_name: K::NAME });
    }

    let id = TypeId::of::<K>();
    if let Some(schema) = SCHEMAS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
    {
        return Ok(*schema);
    }

    let built = Schema::build(K::NAME, K::fields())?;
    log::debug!("built schema for '{}' with {} fields", K::NAME, built.fields.len());

    let mut schemas = SCHEMAS.write().unwrap_or_else(PoisonError::into_inner);
    let schema = *schemas
        .entry(id)
        .or_insert_with(|| &*Box::leak(Box::new(built)));
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Literal, ValueKind};

    struct Small;

    impl PropertySetKind for Small {
        const NAME: &'static str = "Small";

        fn fields() -> Vec<FieldDescriptor> {
            vec![
                FieldDescriptor::text("Username", "username"),
                FieldDescriptor::text("FullAddress", "full address").primary(),
                FieldDescriptor::integer("ScreenModeId", "screen mode id")
                    .default_value(Literal::Integer(2)),
            ]
        }
    }

    struct NotDeclared;

    impl PropertySetKind for NotDeclared {
        const NAME: &'static str = "NotDeclared";
        const DATA_CONTRACT: bool = false;

        fn fields() -> Vec<FieldDescriptor> {
            vec![FieldDescriptor::text("Username", "username")]
        }
    }

    #[test]
    fn test_schema_is_cached() {
        let a = schema_of::<Small>().unwrap();
        let b = schema_of::<Small>().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.name(), "Small");
        assert_eq!(a.fields().len(), 3);
        assert_eq!(a.primary_field().unwrap().source_name, "FullAddress");
    }

    #[test]
    fn test_schema_cached_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| schema_of::<Small>().unwrap() as *const Schema as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_not_a_property_set() {
        assert_eq!(
            schema_of::<NotDeclared>(),
            Err(SchemaError::NotAPropertySet {
                type_name: "NotDeclared"
            })
        );
    }

    #[test]
    fn test_lookup() {
        let schema = schema_of::<Small>().unwrap();
        assert_eq!(schema.field_by_key("username").unwrap().source_name, "Username");
        assert!(schema.field_by_key("Username").is_none());
        assert_eq!(schema.field("ScreenModeId").unwrap().key, Some("screen mode id"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = Schema::build(
            "Dup",
            vec![
                FieldDescriptor::text("A", "same"),
                FieldDescriptor::integer("B", "same"),
            ],
        );
        assert_eq!(
            result,
            Err(SchemaError::DuplicateKey {
                type_name: "Dup",
                key: "same"
            })
        );
    }

    #[test]
    fn test_duplicate_key_on_ignored_field_allowed() {
        let result = Schema::build(
            "Dup",
            vec![
                FieldDescriptor::text("A", "same"),
                FieldDescriptor::integer("B", "same").ignored(),
            ],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = Schema::build(
            "Dup",
            vec![
                FieldDescriptor::text("A", "a"),
                FieldDescriptor::text("A", "b"),
            ],
        );
        assert!(matches!(result, Err(SchemaError::DuplicateField { field: "A", .. })));
    }

    #[test]
    fn test_multiple_primary_rejected() {
        let result = Schema::build(
            "Two",
            vec![
                FieldDescriptor::text("A", "a").primary(),
                FieldDescriptor::text("B", "b").primary(),
            ],
        );
        assert!(matches!(
            result,
            Err(SchemaError::MultiplePrimaryFields { first: "A", second: "B", .. })
        ));
    }

    #[test]
    fn test_unkeyed_field_builds() {
        let schema = Schema::build(
            "Unkeyed",
            vec![FieldDescriptor::unkeyed("Orphan", ValueKind::Text)],
        )
        .unwrap();
        assert_eq!(schema.fields()[0].key, None);
    }
}
