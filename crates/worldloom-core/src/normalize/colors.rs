//! Symbol color normalization pipeline
//!
//! Accepts every shape the editor has ever persisted for `symbolColors`:
//! absent, a single object, an array of hex strings, an array of objects with
//! `hex`/`color` and `name`/`label` field generations, or any mix of those.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::error::{WorldloomError, WorldloomResult};
use crate::types::SymbolColor;

use super::{coerce_truthy_string, is_truthy};

/// Raw persisted shapes a single color entry can take
///
/// Decoded once at this boundary; the exhaustive match below is the only
/// place that knows about the legacy generations.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawColorEntry {
    /// Bare hex string, the oldest shape
    Hex(String),
    /// Object shape, any field generation
    Object(RawColorObject),
    /// Anything else; dropped
    Other(Value),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawColorObject {
    id: Value,
    hex: Value,
    color: Value,
    name: Value,
    label: Value,
}

/// Tolerant parse of a raw `symbolColors` value into canonical records
///
/// Total over any input: absent/null yields an empty list, a single object
/// carrying a `hex` field is treated as a one-element sequence, falsy array
/// entries are dropped without leaving holes. Never panics.
pub fn normalize_symbol_colors(raw: &Value) -> Vec<SymbolColor> {
    match raw {
        Value::Null => Vec::new(),
        Value::Object(map) if map.get("hex").is_some_and(is_truthy) => {
            normalize_entry(raw, 0).into_iter().collect()
        }
        Value::Array(entries) => entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| is_truthy(entry))
            .filter_map(|(index, entry)| normalize_entry(entry, index))
            .collect(),
        _ => Vec::new(),
    }
}

fn normalize_entry(entry: &Value, index: usize) -> Option<SymbolColor> {
    let decoded = serde_json::from_value(entry.clone())
        .unwrap_or_else(|_| RawColorEntry::Other(Value::Null));
    match decoded {
        RawColorEntry::Hex(hex) => {
            let hex = canonical_hex(Some(hex));
            Some(SymbolColor {
                id: synthesized_id(&hex, index),
                name: String::new(),
                hex,
            })
        }
        RawColorEntry::Object(obj) => {
            let hex = canonical_hex(
                coerce_truthy_string(&obj.hex).or_else(|| coerce_truthy_string(&obj.color)),
            );
            let id = coerce_truthy_string(&obj.id)
                .unwrap_or_else(|| synthesized_id(&hex, index));
            let name = coerce_truthy_string(&obj.name)
                .or_else(|| coerce_truthy_string(&obj.label))
                .unwrap_or_default();
            Some(SymbolColor { id, name, hex })
        }
        RawColorEntry::Other(_) => {
            trace!(index, "dropping unusable symbol color entry");
            None
        }
    }
}

/// Normalize plus field-level canonicalization; the save-path entry point
///
/// Idempotent over its own serialized output.
pub fn sanitize_symbol_colors(raw: &Value) -> Vec<SymbolColor> {
    normalize_symbol_colors(raw)
        .into_iter()
        .map(canonical_color)
        .collect()
}

fn canonical_color(color: SymbolColor) -> SymbolColor {
    SymbolColor {
        id: color.id,
        name: color.name,
        hex: canonical_hex(Some(color.hex).filter(|h| !h.is_empty())),
    }
}

fn canonical_hex(hex: Option<String>) -> String {
    match hex {
        Some(h) => h.to_uppercase(),
        None => SymbolColor::DEFAULT_HEX.to_string(),
    }
}

fn synthesized_id(hex: &str, index: usize) -> String {
    format!("sc-{}-{}", hex, index)
}

/// Strict hex validation for picker input: `#` plus six hex digits
///
/// Returns the canonical upper-cased form on success.
pub fn validate_hex(raw: &str) -> WorldloomResult<String> {
    let digits = raw
        .strip_prefix('#')
        .ok_or_else(|| WorldloomError::InvalidHex(raw.to_string()))?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WorldloomError::InvalidHex(raw.to_string()));
    }
    Ok(raw.to_uppercase())
}

/// Element-wise equality over canonical color lists
///
/// Pointer equality short-circuits; hex comparison ignores case so records
/// persisted before canonicalization never read as dirty.
pub fn symbol_colors_equal(a: &[SymbolColor], b: &[SymbolColor]) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(x, y)| {
            x.id == y.id && x.name == y.name && x.hex.eq_ignore_ascii_case(&y.hex)
        })
}
