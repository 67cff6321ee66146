//! Registry listings.
//!
//! Two formats are produced for a set of types:
//!
//! - text, one line per type: `12=Mode_XEGS_32K <32.0 KiB> "32K XEGS"`
//! - compact JSON keyed by name:
//!   `{"Mode_8K":{"mode":1,"size":8192,"description":"8K"},...}`

use crate::error::Result;
use crate::registry::CartType;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt::Write as FmtWrite;

#[derive(serde::Serialize)]
struct TypeEntry {
    mode: i32,
    size: u32,
    description: &'static str,
}

/// Name-keyed map that keeps the order of the input slice
struct TypeTable<'a>(&'a [&'static CartType]);

impl Serialize for TypeTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for cart in self.0 {
            let entry = TypeEntry {
                mode: cart.id,
                size: cart.size,
                description: cart.description,
            };
            map.serialize_entry(cart.name, &entry)?;
        }
        map.end()
    }
}

/// Formats a byte count with binary units, e.g. `"32.0 KiB"`
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

    if bytes == 1 {
        return "1 Byte".to_string();
    }
    if bytes < 1024 {
        return format!("{} Bytes", bytes);
    }

    let mut scaled = bytes as f64 / 1024.0;
    for unit in &UNITS[..UNITS.len() - 1] {
        if scaled < 1024.0 {
            return format!("{:.1} {}", scaled, unit);
        }
        scaled /= 1024.0;
    }
    format!("{:.1} {}", scaled, UNITS[UNITS.len() - 1])
}

/// Formats one listing line
pub fn text_line(cart: &CartType) -> String {
    format!(
        "{}={} <{}> \"{}\"",
        cart.id,
        cart.name,
        human_size(cart.size.into()),
        cart.description
    )
}

/// Formats the text listing, one newline-terminated line per type
pub fn to_text(types: &[&'static CartType]) -> String {
    let mut out = String::new();
    for cart in types {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", text_line(cart));
    }
    out
}

/// Formats the compact JSON listing
pub fn to_json(types: &[&'static CartType]) -> Result<String> {
    Ok(serde_json::to_string(&TypeTable(types))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0 Bytes");
        assert_eq!(human_size(1), "1 Byte");
        assert_eq!(human_size(1023), "1023 Bytes");
        assert_eq!(human_size(0x2000), "8.0 KiB");
        assert_eq!(human_size(0x2800), "10.0 KiB");
        assert_eq!(human_size(0x10_0000), "1.0 MiB");
        assert_eq!(human_size(0x800_0000), "128.0 MiB");
    }

    #[test]
    fn test_text_line() {
        let xegs = registry::resolve_strict(12).unwrap();
        assert_eq!(text_line(xegs), "12=Mode_XEGS_32K <32.0 KiB> \"32K XEGS\"");
    }

    #[test]
    fn test_to_text_lists_real_types() {
        let real = registry::list_real();
        let text = to_text(&real);
        assert_eq!(text.lines().count(), real.len());
        assert!(text.starts_with("1=Mode_8K <8.0 KiB> \"8K\"\n"));
        assert!(!text.contains("Mode_Unknown"));
        assert!(!text.contains("Mode_None"));
    }

    #[test]
    fn test_to_json() {
        let types = [
            registry::resolve_strict(1).unwrap(),
            registry::resolve_strict(12).unwrap(),
        ];
        assert_eq!(
            to_json(&types).unwrap(),
            r#"{"Mode_8K":{"mode":1,"size":8192,"description":"8K"},"Mode_XEGS_32K":{"mode":12,"size":32768,"description":"32K XEGS"}}"#
        );
    }

    #[test]
    fn test_to_json_full_registry_parses() {
        let real = registry::list_real();
        let json = to_json(&real).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), real.len());
        assert_eq!(map["Mode_TelelinkII"]["size"], 0x2100);
    }
}
