//! globelens: interactive picking and resource caching for a globe viewer.
//!
//! The engine resolves pointer positions to stable entity ids (countries
//! and oceans baked into identifier rasters), drives hover and selection
//! fade transitions, plans floating-label visibility, and bounds the set
//! of GPU-resident streamed tile surfaces with an LRU cache.
//!
//! # Quick Start
//!
//! ```no_run
//! use globelens::{CountryTable, FrameInput, GlobeEngine, Mat4, OceanTable, Options, Vec2};
//!
//! let mut engine = GlobeEngine::new(
//!     Options::default(),
//!     CountryTable::default(),
//!     OceanTable::default(),
//! );
//!
//! // Once the identifier raster fetches complete:
//! // engine.install_country_raster(raster);
//!
//! // Every animation frame:
//! let output = engine.update(&FrameInput {
//!     pointer_ndc: Vec2::ZERO,
//!     inv_view_proj: Mat4::IDENTITY,
//!     globe_rotation: 0.0,
//!     delta_seconds: 0.016,
//!     now_ms: 16.0,
//!     pointer_moved: true,
//!     pointer_active: true,
//! });
//!
//! for label in &output.labels.countries {
//!     // position and fade the floating label for `label.id`
//! }
//! ```
//!
//! # Architecture
//!
//! - [`GlobeEngine`] owns all per-frame state and runs the fixed
//!   pick → hover → uniforms → selection → labels sequence.
//! - [`TileSurfaceCache`] runs on its own trigger (tile stream requests)
//!   and is independent of picking.
//! - The scene graph, camera, shaders and UI panels are external
//!   collaborators reached through narrow seams ([`TileSurface`],
//!   [`FrameInput`], [`ClickOutcome`]).

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]

mod click;
mod engine;
mod labels;

pub use click::ClickOutcome;
pub use engine::{FrameInput, FrameOutput, GlobeEngine};
pub use labels::{CountryLabel, LabelPlan, OceanLabel};

// Re-export the core and render surface so hosts depend on one crate.
pub use globelens_core::{
    color_to_index, CountryInfo, CountryTable, Entity, GlobelensError, HoverState, IdEncoding,
    IdMap, IdRaster, OceanInfo, OceanTable, Options, Result, SelectionSet, OCEAN_ID_BASE,
};
pub use globelens_render::{
    HighlightUniforms, PickOutput, PointerPicker, Ray, SelectionTexture, TileFormat, TileKey,
    TileSurface, TileSurfaceCache, DEFAULT_CACHE_SIZE,
};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3};
