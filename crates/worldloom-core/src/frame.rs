//! Frame Stack Resolver - merges layered decoration settings into one stack
//!
//! Resolution runs three precedence tiers, each fully overridable by the next:
//!
//! 1. **Base**: the entity's standing configuration, defaulting to the
//!    undecorated stack.
//! 2. **Rank**: the first `byRank` entry matching the supplied rank id. Its
//!    preset list either replaces or unions onto the running list; its numeric
//!    parameters, when present, replace the running values.
//! 3. **Selection**: only while the entity is selected. A non-empty selection
//!    preset list always wins outright over whatever the lower tiers built.
//!
//! The result is re-normalized on every call, so callers can hand in any
//! persisted settings without pre-validation. Range clamping of thickness and
//! intensity stays with the input widgets; the resolver passes values through.

use tracing::trace;

use crate::error::{WorldloomError, WorldloomResult};
use crate::types::{
    EntityMenuFrameSettings, FramePresetId, FrameStack, OverrideMode, RankOverride,
    DEFAULT_INTENSITY, DEFAULT_THICKNESS,
};

/// Resolve the decoration stack for one entity in one UI state
///
/// Total function: any input, including `settings = None`, yields a stack
/// satisfying the [`FrameStack`] invariants.
pub fn resolve_frame_stack(
    settings: Option<&EntityMenuFrameSettings>,
    rank_id: &str,
    selected: bool,
) -> FrameStack {
    let mut presets: Vec<FramePresetId> = vec![FramePresetId::None];
    let mut thickness = DEFAULT_THICKNESS;
    let mut intensity = DEFAULT_INTENSITY;

    let Some(settings) = settings else {
        return FrameStack {
            presets: normalize_presets(presets),
            thickness,
            intensity,
        };
    };

    // Base tier
    if let Some(base) = &settings.base {
        if !base.presets.is_empty() {
            presets = base.presets.clone();
        }
        if let Some(t) = base.thickness {
            thickness = t;
        }
        if let Some(i) = base.intensity {
            intensity = i;
        }
    }

    // Rank tier: first match wins, later duplicates are ignored
    if let Some(overlay) = settings.by_rank.iter().find(|o| o.rank_id == rank_id) {
        trace!(rank_id, mode = ?overlay.mode, "applying rank override");
        match overlay.mode {
            OverrideMode::Replace => presets = overlay.stack.presets.clone(),
            OverrideMode::Append => union_append(&mut presets, &overlay.stack.presets),
        }
        if let Some(t) = overlay.stack.thickness {
            thickness = t;
        }
        if let Some(i) = overlay.stack.intensity {
            intensity = i;
        }
    }

    // Selection tier: a non-empty selection list replaces everything below it
    if selected {
        if let Some(extra) = &settings.selected_extra {
            let chosen = extra.presets();
            if !chosen.is_empty() {
                trace!(count = chosen.len(), "selection override wins");
                presets = chosen;
                if let Some(t) = extra.thickness() {
                    thickness = t;
                }
                if let Some(i) = extra.intensity() {
                    intensity = i;
                }
            }
        }
    }

    FrameStack {
        presets: normalize_presets(presets),
        thickness,
        intensity,
    }
}

/// Strict first-match lookup used by the rank editor
pub fn rank_override<'a>(
    settings: &'a EntityMenuFrameSettings,
    rank_id: &str,
) -> WorldloomResult<&'a RankOverride> {
    settings
        .by_rank
        .iter()
        .find(|o| o.rank_id == rank_id)
        .ok_or_else(|| WorldloomError::RankNotFound(rank_id.to_string()))
}

/// Set union: keeps the running order, appends entries not already present
fn union_append(running: &mut Vec<FramePresetId>, extra: &[FramePresetId]) {
    for preset in extra {
        if !running.contains(preset) {
            running.push(preset.clone());
        }
    }
}

/// Enforce the stack invariants on a raw preset list
///
/// Empty tokens are dropped, an empty list becomes `["none"]`, `none` never
/// coexists with real presets, and duplicates collapse to first occurrence.
fn normalize_presets(raw: Vec<FramePresetId>) -> Vec<FramePresetId> {
    let mut out: Vec<FramePresetId> = Vec::with_capacity(raw.len());
    for preset in raw {
        if preset.is_empty_token() || out.contains(&preset) {
            continue;
        }
        out.push(preset);
    }
    if out.is_empty() {
        return vec![FramePresetId::None];
    }
    if out.len() > 1 {
        out.retain(|p| !p.is_none());
    }
    out
}
