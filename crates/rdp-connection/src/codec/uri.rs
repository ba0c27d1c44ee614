//! The `rdp://` URI variant.
//!
//! Same field pipeline as the line format, rendered as
//! `rdp://key=sign%3Avalue&...` with both sides percent-encoded. The primary
//! field's fragment is always first. Byte arrays have no URI form.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::codec::line::{EncodedField, encode_field, resolve_schema};
use crate::error::MarshalError;
use crate::limits::{FIELD_SEPARATOR, RDP_URI_SCHEME, URI_FRAGMENT_SEPARATOR};
use crate::model::{PropertySet, PropertySetKind};

/// URI component escaping: everything except `A-Z a-z 0-9 - . _ ~`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn fragment(field: &EncodedField) -> String {
    let value = format!("{}{}{}", field.type_sign, FIELD_SEPARATOR, field.text);
    format!(
        "{}={}",
        utf8_percent_encode(field.key, URI_COMPONENT),
        utf8_percent_encode(&value, URI_COMPONENT)
    )
}

/// Serializes a property set as an `rdp://` URI.
///
/// A type that is not a property set yields the bare scheme in lenient mode.
pub fn encode_uri<K: PropertySetKind>(
    set: &PropertySet<K>,
    strict: bool,
) -> Result<String, MarshalError> {
    let Some(schema) = resolve_schema::<K>(strict)? else {
        return Ok(RDP_URI_SCHEME.to_string());
    };

    let mut fragments = Vec::with_capacity(set.len());
    let mut primary_at = None;
    for field in schema.fields() {
        let Some(encoded) = encode_field(field, set, K::NAME, strict, false)? else {
            continue;
        };
        if field.primary {
            primary_at = Some(fragments.len());
        }
        fragments.push(fragment(&encoded));
    }

    if let Some(at) = primary_at {
        fragments[..=at].rotate_right(1);
    }

    let mut uri = String::from(RDP_URI_SCHEME);
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            uri.push(URI_FRAGMENT_SEPARATOR);
        }
        uri.push_str(fragment);
    }
    Ok(uri)
}
