//! Frame Preset Identifiers - the vocabulary of decoration styles
//!
//! One authoritative enumeration backs every picker in the editor. Each member
//! carries a capability flag (`in_basic_picker`) instead of pickers keeping
//! their own partially-overlapping literal lists. Identifiers found in
//! persisted data that we don't recognize pass through as opaque `Custom`
//! tokens so old records keep rendering after a preset is retired.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{WorldloomError, WorldloomResult};

/// Identifier for a decoration style drawn as a layer around an entity's image
///
/// `None` is the "no decoration" sentinel and is mutually exclusive with every
/// other member inside a resolved stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FramePresetId {
    /// No decoration at all
    None,
    /// Plain solid border
    Border,
    /// Diffuse outer glow
    GlowSoft,
    /// Saturated outer glow
    GlowStrong,
    /// Corner-bracket targeting reticle
    Targeting,
    /// Animated scanline sweep
    ScanSweep,
    /// Frosted-glass surface overlay
    GlassSurface,
    /// Brushed-steel surface overlay
    SteelSurface,
    /// Electric arc effect (full picker only)
    Electric,
    /// Flame lick effect (full picker only)
    Flame,
    /// Unrecognized id carried through verbatim
    Custom(String),
}

impl FramePresetId {
    /// Every recognized member, in picker display order
    pub const KNOWN: [FramePresetId; 10] = [
        FramePresetId::None,
        FramePresetId::Border,
        FramePresetId::GlowSoft,
        FramePresetId::GlowStrong,
        FramePresetId::Targeting,
        FramePresetId::ScanSweep,
        FramePresetId::GlassSurface,
        FramePresetId::SteelSurface,
        FramePresetId::Electric,
        FramePresetId::Flame,
    ];

    /// The persisted string form of this preset id
    pub fn as_str(&self) -> &str {
        match self {
            FramePresetId::None => "none",
            FramePresetId::Border => "border",
            FramePresetId::GlowSoft => "glow-soft",
            FramePresetId::GlowStrong => "glow-strong",
            FramePresetId::Targeting => "targeting",
            FramePresetId::ScanSweep => "scan-sweep",
            FramePresetId::GlassSurface => "glass-surface",
            FramePresetId::SteelSurface => "steel-surface",
            FramePresetId::Electric => "electric",
            FramePresetId::Flame => "flame",
            FramePresetId::Custom(s) => s,
        }
    }

    /// Strict lookup for picker input: rejects ids outside [`Self::KNOWN`]
    pub fn from_known(s: &str) -> WorldloomResult<Self> {
        match Self::from(s) {
            FramePresetId::Custom(raw) => Err(WorldloomError::UnknownPreset(raw)),
            known => Ok(known),
        }
    }

    /// Whether this is the "no decoration" sentinel
    pub fn is_none(&self) -> bool {
        matches!(self, FramePresetId::None)
    }

    /// Whether this entry carries no usable id (filtered during resolution)
    pub fn is_empty_token(&self) -> bool {
        matches!(self, FramePresetId::Custom(s) if s.is_empty())
    }

    /// Whether the basic picker offers this preset
    ///
    /// `Electric` and `Flame` only appear in the full picker; unknown tokens
    /// appear in neither.
    pub fn in_basic_picker(&self) -> bool {
        !matches!(
            self,
            FramePresetId::Electric | FramePresetId::Flame | FramePresetId::Custom(_)
        )
    }
}

impl From<&str> for FramePresetId {
    fn from(s: &str) -> Self {
        match s {
            "none" => FramePresetId::None,
            "border" => FramePresetId::Border,
            "glow-soft" => FramePresetId::GlowSoft,
            "glow-strong" => FramePresetId::GlowStrong,
            "targeting" => FramePresetId::Targeting,
            "scan-sweep" => FramePresetId::ScanSweep,
            "glass-surface" => FramePresetId::GlassSurface,
            "steel-surface" => FramePresetId::SteelSurface,
            "electric" => FramePresetId::Electric,
            "flame" => FramePresetId::Flame,
            other => FramePresetId::Custom(other.to_string()),
        }
    }
}

impl From<String> for FramePresetId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl std::fmt::Display for FramePresetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FramePresetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FramePresetId {
    /// Tolerant of `null` entries in legacy preset arrays: they decode to an
    /// empty `Custom` token and get filtered during resolution.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            Some(s) => Self::from(s),
            None => FramePresetId::Custom(String::new()),
        })
    }
}
