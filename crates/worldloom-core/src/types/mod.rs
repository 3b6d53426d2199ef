//! Core types for Worldloom
//!
//! Canonical data model shared by the resolver, the normalizer pipelines,
//! and the UI shell.

pub mod color;
pub mod entity;
pub mod frame;
pub mod preset;
pub mod sub_image;

pub use color::SymbolColor;
pub use entity::{EntityId, EntityKind, EntityRecord};
pub use frame::{
    EntityMenuFrameSettings, FrameLayer, FrameStack, OverrideMode, RankOverride, SelectedExtra,
    DEFAULT_INTENSITY, DEFAULT_THICKNESS,
};
pub use preset::FramePresetId;
pub use sub_image::SubImage;
