//! Simple inspector for `.rdp` files.
//!
//! Reads the file leniently, lists every recognized property, then prints
//! the normalized file text and its `rdp://` form.

use std::fs;

use rdp_connection::{MarshalOptions, Marshaller, PropertySet, TerminalServiceClient, Value};

fn format_value(v: &Value) -> String {
    match v {
        Value::Integer(n) => format!("{}", n),
        Value::Text(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        Value::Bytes(b) => format!("BYTES[{}]", b.len()),
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "connection.rdp".to_string());

    println!("Reading: {}", path);

    let text = fs::read_to_string(&path).expect("Failed to read file");
    println!("File size: {} bytes, {} lines", text.len(), text.lines().count());

    let marshaller = Marshaller::new(MarshalOptions::lenient());
    let set: PropertySet<TerminalServiceClient> =
        marshaller.deserialize_str(&text).expect("Failed to decode");

    println!("\n=== Properties ({}) ===", set.len());
    let mut entries: Vec<_> = set.iter().collect();
    entries.sort_by_key(|(name, _)| *name);
    for (name, value) in entries {
        println!("  {} = {}", name, format_value(value));
    }

    if let Some(pos) = set.window_position() {
        println!("\nWindow: {}x{} at ({}, {})", pos.width(), pos.height(), pos.left, pos.top);
    }
    let drives: Vec<_> = set.drives_to_redirect().collect();
    if !drives.is_empty() {
        println!("Drives: {}", drives.join(", "));
    }

    println!("\n=== Normalized ===");
    print!("{}", marshaller.serialize_to_string(&set).expect("Failed to encode"));

    println!("\n=== URI ===");
    println!("{}", marshaller.serialize_uri(&set).expect("Failed to encode URI"));
}
