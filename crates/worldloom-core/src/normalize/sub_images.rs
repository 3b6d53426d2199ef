//! Sub-image normalization pipeline
//!
//! Accepts every shape the editor has ever persisted for `subImages`: absent,
//! an array of bare source strings, or an array of objects with
//! `image`/`url` and `summary`/`caption` field generations.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::types::SubImage;

use super::{coerce_truthy_string, is_truthy};

/// Raw persisted shapes a single sub-image entry can take
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSubImageEntry {
    /// Bare source string, the oldest shape
    Source(String),
    /// Object shape, any field generation
    Object(RawSubImageObject),
    /// Anything else; dropped
    Other(Value),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSubImageObject {
    image: Value,
    url: Value,
    summary: Value,
    caption: Value,
    description: Value,
}

/// Tolerant parse of a raw `subImages` value into canonical records
///
/// Total over any input: absent/null or any non-array yields an empty list;
/// falsy array entries are dropped. Never panics.
pub fn normalize_sub_images(raw: &Value) -> Vec<SubImage> {
    let Value::Array(entries) = raw else {
        return Vec::new();
    };
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| is_truthy(entry))
        .filter_map(|(index, entry)| normalize_entry(entry, index))
        .collect()
}

fn normalize_entry(entry: &Value, index: usize) -> Option<SubImage> {
    let decoded = serde_json::from_value(entry.clone())
        .unwrap_or_else(|_| RawSubImageEntry::Other(Value::Null));
    match decoded {
        RawSubImageEntry::Source(image) => Some(SubImage::from_source(image)),
        RawSubImageEntry::Object(obj) => Some(SubImage {
            image: coerce_truthy_string(&obj.image)
                .or_else(|| coerce_truthy_string(&obj.url))
                .unwrap_or_default(),
            summary: coerce_truthy_string(&obj.summary)
                .or_else(|| coerce_truthy_string(&obj.caption))
                .unwrap_or_default(),
            description: coerce_truthy_string(&obj.description).unwrap_or_default(),
        }),
        RawSubImageEntry::Other(_) => {
            trace!(index, "dropping unusable sub-image entry");
            None
        }
    }
}

/// Normalize plus field-level canonicalization; the save-path entry point
///
/// Sub-image fields are already plain strings after normalization, so this is
/// the same parse re-run; it exists so load and save paths stay symmetrical
/// with the color pipeline.
pub fn sanitize_sub_images(raw: &Value) -> Vec<SubImage> {
    normalize_sub_images(raw)
}

/// Element-wise equality over canonical sub-image lists
pub fn sub_images_equal(a: &[SubImage], b: &[SubImage]) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(x, y)| {
            x.image == y.image && x.summary == y.summary && x.description == y.description
        })
}
