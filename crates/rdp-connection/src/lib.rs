//! RDP connection files: typed property sets and their `.rdp` / `rdp://`
//! text forms.
//!
//! This crate marshals remote desktop connection settings between a typed,
//! schema-described property set and two text formats:
//! - `.rdp` files: one `key:type-sign:value` line per property
//! - `rdp://` URIs: percent-encoded `key=type-sign:value` fragments
//!
//! # Quick Start
//!
//! ```rust
//! use rdp_connection::{MarshalOptions, Marshaller, PropertySet, RemoteDesktopClient};
//!
//! let mut set = PropertySet::<RemoteDesktopClient>::new();
//! set.set("FullAddress", "host.example.com").unwrap();
//! set.set("ServerPort", 3389).unwrap();
//!
//! let marshaller = Marshaller::new(MarshalOptions::strict());
//! let text = marshaller.serialize_to_string(&set).unwrap();
//! assert_eq!(text, "full address:s:host.example.com\r\nserver port:i:3389\r\n");
//!
//! let decoded: PropertySet<RemoteDesktopClient> = marshaller.deserialize_str(&text).unwrap();
//! assert_eq!(decoded, set);
//!
//! let uri = marshaller.serialize_uri(&set).unwrap();
//! assert_eq!(uri, "rdp://full%20address=s%3Ahost.example.com&server%20port=i%3A3389");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Values, field descriptors, schemas and property sets
//! - [`codec`]: Line and URI marshalling
//! - [`validate`]: Allowed-value and range checks
//! - [`catalog`]: Built-in property-set kinds
//! - [`error`]: Error types
//! - [`limits`]: Wire-format constants
//!
//! # Strict and lenient mode
//!
//! Strict mode (the default) fails on the first unparsable line, unknown
//! key, malformed value or constraint violation. Lenient mode skips the
//! offending line or field, logs it with `log::warn!` and carries on.
//! Validation failures while writing are advisory in lenient mode: the value
//! is logged and written anyway.

pub mod catalog;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use catalog::{
    AzureVirtualDesktop, ClientFields, DataProtector, DeviceSetupClass, RemoteDesktopClient,
    RemoteDesktopService, RemoteDesktopSession, RemoteDesktopUri, SessionFields,
    TerminalServiceClient,
};
pub use codec::{
    LineGrammar, Lines, MarshalOptions, Marshaller, deserialize_lines, serialize_lines,
    serialize_uri,
};
pub use error::{
    CodecError, ErrorKind, MarshalError, ProtectionError, SchemaError, ValidationError,
};
pub use model::{
    BINARY_FLAG, FieldDescriptor, IntRange, Literal, PropertySet, PropertySetKind, Schema, Value,
    ValueKind, WindowPosition, schema_of,
};
pub use validate::validate_value;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
