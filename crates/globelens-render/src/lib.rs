//! Render-facing side of the globelens engine.
//!
//! This crate owns everything that touches GPU-resident resources or is
//! consumed directly by the renderer:
//! - [`TileSurfaceCache`], the bounded LRU cache of streamed tile surfaces
//! - [`PointerPicker`], the dual-rate pointer raycast pipeline
//! - [`HighlightUniforms`], the typed hover/cursor uniform block
//! - [`SelectionTexture`], byte-packed per-domain selection fades
//!
//! The actual graphics backend and scene graph stay behind the
//! [`TileSurface`] trait; nothing here links against a GPU API.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod cache;
pub mod pick;
pub mod selection_texture;
pub mod uniforms;

pub use cache::{TileFormat, TileKey, TileSurface, TileSurfaceCache, DEFAULT_CACHE_SIZE};
pub use pick::{PickOutput, PointerPicker, Ray};
pub use selection_texture::SelectionTexture;
pub use uniforms::HighlightUniforms;
