//! Entity Record Type - canonical model for worlds, characters, and creatures
//!
//! The editor persists entities as JSON blobs written by several generations
//! of the UI. `EntityRecord::from_value` is the single tolerant entry point:
//! it accepts any raw value, routes the legacy-shaped `symbolColors` and
//! `subImages` fields through the normalizer pipelines, and parses frame
//! settings leniently. Loading never fails; missing fields degrade to
//! defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ulid::Ulid;

use crate::normalize::{
    normalize_sub_images, normalize_symbol_colors, sanitize_sub_images, sanitize_symbol_colors,
    sub_images_equal, symbol_colors_equal,
};
use crate::types::{EntityMenuFrameSettings, SubImage, SymbolColor};

/// Unique identifier for an entity record
///
/// ULIDs sort lexicographically by creation time, so gallery listings come
/// out in creation order without a separate sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Ulid);

impl EntityId {
    /// Mint the id for a newly created record
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Raw ULID text, the form embedded in storage keys
    pub fn to_string_repr(&self) -> String {
        self.0.to_string()
    }

    /// Parse the raw ULID text form
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity_{}", self.0)
    }
}

/// What kind of thing an entity record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A world/setting page
    #[default]
    World,
    /// A character page
    Character,
    /// A creature page
    Creature,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::World => write!(f, "world"),
            Self::Character => write!(f, "character"),
            Self::Creature => write!(f, "creature"),
        }
    }
}

impl EntityKind {
    fn from_raw(s: &str) -> Self {
        match s {
            "character" => Self::Character,
            "creature" => Self::Creature,
            _ => Self::World,
        }
    }
}

/// Canonical entity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityRecord {
    /// Unique identifier
    pub id: EntityId,
    /// Record kind
    pub kind: EntityKind,
    /// Display name
    pub name: String,
    /// Short summary shown on cards
    pub summary: String,
    /// Primary image URL or storage key
    pub image: String,
    /// Category tags for the filter bar
    pub categories: Vec<String>,
    /// Accent colors, canonical form
    pub symbol_colors: Vec<SymbolColor>,
    /// Gallery images, canonical form
    pub sub_images: Vec<SubImage>,
    /// Layered decoration settings, absent when never customized
    pub frame: Option<EntityMenuFrameSettings>,
    /// Unix timestamp when the record was created
    pub created_at: i64,
    /// Unix timestamp of last update
    pub updated_at: i64,
}

impl Default for EntityRecord {
    fn default() -> Self {
        Self {
            id: EntityId::new(),
            kind: EntityKind::World,
            name: String::new(),
            summary: String::new(),
            image: String::new(),
            categories: vec![],
            symbol_colors: vec![],
            sub_images: vec![],
            frame: None,
            created_at: 0,
            updated_at: 0,
        }
    }
}

impl EntityRecord {
    /// Create a new record with just kind and name
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            kind,
            name: name.into(),
            created_at: now,
            updated_at: now,
            ..Default::default()
        }
    }

    /// Update the record's timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp();
    }

    /// Tolerant load from a raw persisted value
    ///
    /// Accepts both current camelCase and older snake_case keys, routes color
    /// and sub-image fields through the normalizers, and drops malformed
    /// frame settings instead of failing. Total over any input.
    pub fn from_value(raw: &Value) -> Self {
        let field = |keys: &[&str]| -> Value {
            for key in keys {
                if let Some(v) = raw.get(key) {
                    if !v.is_null() {
                        return v.clone();
                    }
                }
            }
            Value::Null
        };

        let id = field(&["id"])
            .as_str()
            .and_then(|s| EntityId::from_string(s).ok())
            .unwrap_or_default();
        let kind = field(&["kind"])
            .as_str()
            .map(EntityKind::from_raw)
            .unwrap_or_default();

        let string_of = |v: Value| v.as_str().map(str::to_string).unwrap_or_default();
        let categories = field(&["categories", "tags"])
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let frame_raw = field(&["frame", "frameSettings", "frame_settings"]);
        let frame = if frame_raw.is_null() {
            None
        } else {
            EntityMenuFrameSettings::from_value(&frame_raw)
        };

        let timestamp = |keys: &[&str]| field(keys).as_i64().unwrap_or(0);

        Self {
            id,
            kind,
            name: string_of(field(&["name"])),
            summary: string_of(field(&["summary"])),
            image: string_of(field(&["image", "url"])),
            categories,
            symbol_colors: normalize_symbol_colors(&field(&["symbolColors", "symbol_colors"])),
            sub_images: normalize_sub_images(&field(&["subImages", "sub_images"])),
            frame,
            created_at: timestamp(&["createdAt", "created_at"]),
            updated_at: timestamp(&["updatedAt", "updated_at"]),
        }
    }

    /// Re-derive the canonical form before writing back
    ///
    /// Colors and sub-images go through the sanitize pipelines again so a
    /// record edited in memory can never persist a non-canonical field.
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        let colors_raw = serde_json::to_value(&self.symbol_colors).unwrap_or(Value::Null);
        let images_raw = serde_json::to_value(&self.sub_images).unwrap_or(Value::Null);
        out.symbol_colors = sanitize_symbol_colors(&colors_raw);
        out.sub_images = sanitize_sub_images(&images_raw);
        out
    }

    /// Content equality for change detection
    ///
    /// Ignores timestamps and the record id: identity lives in the storage
    /// key, and records persisted before ids existed mint a fresh one on
    /// every load. Uses the normalizer equality helpers so hex case drift
    /// never reads as a change.
    pub fn content_equals(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.name == other.name
            && self.summary == other.summary
            && self.image == other.image
            && self.categories == other.categories
            && symbol_colors_equal(&self.symbol_colors, &other.symbol_colors)
            && sub_images_equal(&self.sub_images, &other.sub_images)
            && self.frame == other.frame
    }
}
