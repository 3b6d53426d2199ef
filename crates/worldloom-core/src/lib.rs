//! Worldloom Core Library
//!
//! Pure logic behind the Worldloom portfolio/world-building editor: frame
//! decoration resolution and tolerant normalization of persisted entity
//! records.
//!
//! ## Overview
//!
//! The editor UI manages worlds, characters, and creatures with image
//! galleries, category tags, and decorative frame presets. This crate owns
//! the two pieces with real invariants:
//!
//! - **Frame Stack Resolver**: merges layered decoration configuration
//!   (base tier, per-rank overrides, selection override) into one final
//!   preset stack with shared thickness and intensity.
//! - **Entity Schema Normalizer**: parses legacy-shaped persisted records
//!   into canonical form and compares canonical records for change
//!   detection.
//!
//! Both are total, synchronous, allocation-fresh functions: they never fail,
//! never mutate their inputs, and are safe to call from anywhere. I/O lives
//! behind the [`store`] capability traits implemented by the UI shell.
//!
//! ## Quick Start
//!
//! ```
//! use worldloom_core::frame::resolve_frame_stack;
//! use worldloom_core::types::{EntityMenuFrameSettings, FramePresetId};
//!
//! let settings = EntityMenuFrameSettings::from_value(&serde_json::json!({
//!     "base": { "presets": ["border"] },
//!     "selectedExtra": { "outer": "glow-soft" }
//! }));
//!
//! let stack = resolve_frame_stack(settings.as_ref(), "elite", true);
//! assert_eq!(stack.presets, vec![FramePresetId::GlowSoft]);
//! ```

pub mod error;
pub mod frame;
pub mod normalize;
pub mod store;
pub mod types;

// Re-exports
pub use error::{WorldloomError, WorldloomResult};
pub use frame::{rank_override, resolve_frame_stack};
pub use normalize::{
    normalize_sub_images, normalize_symbol_colors, sanitize_sub_images, sanitize_symbol_colors,
    sub_images_equal, symbol_colors_equal, validate_hex,
};
pub use store::{load_entity, save_entity, BlobStore, ImageSource, MemoryStore, PassthroughImages};
pub use types::*;
