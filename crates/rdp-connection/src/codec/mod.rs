//! Text encoding/decoding for RDP connection properties.
//!
//! Two wire formats share one per-field pipeline:
//! - `.rdp` lines: `key:type-sign:value`, one property per line
//! - `rdp://` URIs: `key=type-sign:value` fragments joined with `&`

pub mod line;
pub mod marshaller;
pub mod uri;
pub mod value;

pub use line::{LineGrammar, Lines, RawLine, decode_lines, encode_lines};
pub use marshaller::{
    MarshalOptions, Marshaller, deserialize_lines, serialize_lines, serialize_uri,
};
pub use uri::encode_uri;
pub use value::{decode_hex, decode_integer, decode_value, encode_hex, encode_value};
