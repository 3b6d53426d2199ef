//! Frame Configuration Types - layered decoration settings for entity menus
//!
//! An entity's decoration is configured in three tiers: a base stack, per-rank
//! overrides, and a selection-time override. The resolver in [`crate::frame`]
//! merges the tiers into a final [`FrameStack`].
//!
//! `SelectedExtra` exists in two persisted generations. The legacy shape is a
//! bare preset array; the current shape names an outer and an inner slot. Both
//! are accepted here, at the deserialization boundary, as an explicit tagged
//! union so the resolver never has to probe raw JSON.

use serde::{Deserialize, Serialize};

use crate::types::preset::FramePresetId;

/// Default border thickness when no tier specifies one
pub const DEFAULT_THICKNESS: f64 = 2.0;

/// Default effect intensity when no tier specifies one
pub const DEFAULT_INTENSITY: f64 = 0.9;

/// A fully resolved decoration stack, ready for rendering
///
/// Invariants (guaranteed by the resolver): `presets` is never empty; when
/// nothing applies it is exactly `["none"]`; with more than one entry,
/// `none` never appears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStack {
    /// Decoration layers in display order
    pub presets: Vec<FramePresetId>,
    /// Shared border thickness, nominal domain [1, 10]
    pub thickness: f64,
    /// Shared effect intensity, nominal domain [0, 1]
    pub intensity: f64,
}

impl FrameStack {
    /// The undecorated stack with default parameters
    pub fn undecorated() -> Self {
        Self {
            presets: vec![FramePresetId::None],
            thickness: DEFAULT_THICKNESS,
            intensity: DEFAULT_INTENSITY,
        }
    }
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::undecorated()
    }
}

/// One tier's worth of configuration
///
/// Unlike [`FrameStack`], the numeric parameters are optional: an absent value
/// means "keep whatever the previous tier decided", not "use the default".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameLayer {
    /// Preset list contributed by this tier
    pub presets: Vec<FramePresetId>,
    /// Thickness override, if this tier sets one
    pub thickness: Option<f64>,
    /// Intensity override, if this tier sets one
    pub intensity: Option<f64>,
}

/// How a rank override combines with the tier below it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideMode {
    /// The override's preset list fully replaces the running list
    Replace,
    /// The override's presets are unioned onto the running list
    Append,
}

/// Decoration override attached to a specific rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankOverride {
    /// Rank this override applies to
    #[serde(rename = "rankId")]
    pub rank_id: String,
    /// Combination mode against the base tier
    pub mode: OverrideMode,
    /// The override's own configuration
    #[serde(default)]
    pub stack: FrameLayer,
}

/// Selection-time override, highest precedence tier
///
/// Untagged: an object carrying `presets` decodes as `Legacy`, anything else
/// as `Current`. Discriminated once here so downstream code matches variants
/// instead of duck-typing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectedExtra {
    /// Legacy persisted shape: a bare preset array
    Legacy {
        /// Presets used verbatim (empty tokens filtered during resolution)
        presets: Vec<FramePresetId>,
        #[serde(default)]
        thickness: Option<f64>,
        #[serde(default)]
        intensity: Option<f64>,
    },
    /// Current persisted shape: named outer and inner slots
    Current {
        #[serde(default)]
        outer: Option<FramePresetId>,
        #[serde(default)]
        inner: Option<FramePresetId>,
        #[serde(default)]
        thickness: Option<f64>,
        #[serde(default)]
        intensity: Option<f64>,
    },
}

impl SelectedExtra {
    /// The preset list this override contributes, outer before inner
    pub fn presets(&self) -> Vec<FramePresetId> {
        match self {
            SelectedExtra::Legacy { presets, .. } => presets
                .iter()
                .filter(|p| !p.is_empty_token())
                .cloned()
                .collect(),
            SelectedExtra::Current { outer, inner, .. } => [outer, inner]
                .into_iter()
                .filter_map(|slot| slot.clone())
                .filter(|p| !p.is_empty_token())
                .collect(),
        }
    }

    /// Thickness override, if any
    pub fn thickness(&self) -> Option<f64> {
        match self {
            SelectedExtra::Legacy { thickness, .. } => *thickness,
            SelectedExtra::Current { thickness, .. } => *thickness,
        }
    }

    /// Intensity override, if any
    pub fn intensity(&self) -> Option<f64> {
        match self {
            SelectedExtra::Legacy { intensity, .. } => *intensity,
            SelectedExtra::Current { intensity, .. } => *intensity,
        }
    }
}

/// Layered decoration settings stored on an entity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityMenuFrameSettings {
    /// Base tier, applies to every rank
    pub base: Option<FrameLayer>,
    /// Per-rank overrides; first entry matching a rank wins
    #[serde(rename = "byRank")]
    pub by_rank: Vec<RankOverride>,
    /// Selection-time override, active only while the entity is selected
    #[serde(rename = "selectedExtra")]
    pub selected_extra: Option<SelectedExtra>,
}

impl EntityMenuFrameSettings {
    /// Lenient parse from a raw persisted value; malformed input yields `None`
    pub fn from_value(raw: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(raw.clone()).ok()
    }
}
