//! Entity Schema Normalizer - tolerant parsing of legacy persisted records
//!
//! Records written by earlier generations of the editor arrive in mixed
//! shapes: bare strings where objects are expected now, alternate field names
//! (`color` for `hex`, `label` for `name`, `url` for `image`, `caption` for
//! `summary`), missing fields, and junk entries. Each pipeline here follows
//! the same discipline:
//!
//! 1. **normalize** - tolerant parse of an arbitrary [`serde_json::Value`]
//!    into a canonical `Vec<T>`; total, never panics, never mutates input.
//! 2. **sanitize** - normalize plus field-level canonicalization, run again
//!    before every save. Idempotent: sanitizing sanitized output is
//!    field-wise identical.
//!
//! Equality helpers over the canonical shape let callers skip redundant
//! persistence writes without false negatives from case or coercion drift.

pub mod colors;
pub mod sub_images;

pub use colors::{normalize_symbol_colors, sanitize_symbol_colors, symbol_colors_equal, validate_hex};
pub use sub_images::{normalize_sub_images, sanitize_sub_images, sub_images_equal};

use serde_json::Value;

/// JavaScript-style truthiness over raw JSON values
///
/// Legacy records were filtered with `Boolean(x)` semantics before this code
/// existed; dropped entries must stay dropped.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerce a raw value to its string form, `None` when falsy
///
/// Strings pass through, numbers and `true` stringify, everything falsy
/// yields `None` so `a || b || ""` fallback chains port over directly.
pub(crate) fn coerce_truthy_string(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_matches_legacy_filter() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_coerce_truthy_string() {
        assert_eq!(coerce_truthy_string(&json!("abc")), Some("abc".to_string()));
        assert_eq!(coerce_truthy_string(&json!(7)), Some("7".to_string()));
        assert_eq!(coerce_truthy_string(&json!("")), None);
        assert_eq!(coerce_truthy_string(&Value::Null), None);
        assert_eq!(coerce_truthy_string(&json!({})), None);
    }
}
