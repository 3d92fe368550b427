//! Core state for the globelens interactive globe engine.
//!
//! This crate provides the pieces of the picking engine that carry no GPU
//! or scene-graph dependency:
//! - [`Entity`] and the partitioned id space
//! - [`IdRaster`]/[`IdMap`] for decoding baked identifier images
//! - [`HoverState`], the per-frame hover/fade machine
//! - [`SelectionSet`], per-domain selection flags and fade scalars
//! - [`Options`] and the country/ocean descriptor tables

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Raw ids cross the i32/u32 boundary at the wire seam by design
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

pub mod entity;
pub mod error;
pub mod hover;
pub mod meta;
pub mod options;
pub mod raster;
pub mod selection;

pub use entity::{color_to_index, Entity, OCEAN_ID_BASE};
pub use error::{GlobelensError, Result};
pub use hover::{HoverSample, HoverState};
pub use meta::{CountryInfo, CountryTable, OceanInfo, OceanTable};
pub use options::Options;
pub use raster::{IdEncoding, IdMap, IdRaster};
pub use selection::SelectionSet;

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3};
