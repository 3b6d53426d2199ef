//! Sub-Image Type - captioned gallery images attached to an entity
//!
//! Canonical form of the legacy `subImages` records. The tolerant loader
//! lives in [`crate::normalize::sub_images`].

use serde::{Deserialize, Serialize};

/// A gallery image with caption text
///
/// `image` is an opaque URL or blob-store key; the core never interprets its
/// loading semantics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubImage {
    /// URL or storage key of the image
    pub image: String,
    /// Short caption shown under the thumbnail
    pub summary: String,
    /// Longer description shown in the detail view
    pub description: String,
}

impl SubImage {
    /// Create a sub-image from a bare source string
    pub fn from_source(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            summary: String::new(),
            description: String::new(),
        }
    }
}
