//! Baked identifier rasters and UV-space id lookup.
//!
//! Region ids are baked offline into equirectangular images: the country
//! map encodes the id in the red channel, the ocean map packs a 24-bit id
//! (pre-offset by [`OCEAN_ID_BASE`](crate::entity::OCEAN_ID_BASE)) across
//! RGB. At runtime the image is decoded once into a flat RGBA8 buffer and
//! every lookup is a single pixel read.

use crate::entity::{color_to_index, Entity};
use crate::error::{GlobelensError, Result};

/// How a raster pixel encodes its entity id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdEncoding {
    /// Single-channel id in the red channel (country map).
    Red,
    /// 24-bit id packed `(R<<16)|(G<<8)|B` (ocean map).
    Rgb,
}

/// A decoded identifier raster.
///
/// Stateless after construction; lookups never fail, they return `-1` for
/// out-of-range coordinates.
#[derive(Debug, Clone)]
pub struct IdRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
    encoding: IdEncoding,
}

impl IdRaster {
    /// Decodes an identifier raster from encoded image bytes (PNG etc.).
    pub fn from_bytes(bytes: &[u8], encoding: IdEncoding) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_image(&image, encoding))
    }

    /// Builds a raster from an already decoded image.
    #[must_use]
    pub fn from_image(image: &image::DynamicImage, encoding: IdEncoding) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = (rgba.width(), rgba.height());
        Self {
            width,
            height,
            data: rgba.into_raw(),
            encoding,
        }
    }

    /// Builds a raster from a raw RGBA8 pixel buffer.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>, encoding: IdEncoding) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(GlobelensError::RasterSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
            encoding,
        })
    }

    /// Raster width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reads the entity id under a normalized surface coordinate.
    ///
    /// `v` is flipped before sampling because raster row 0 is the top of
    /// the image while `v = 0` is the bottom of the globe. Coordinates
    /// that land outside the pixel grid return `-1`.
    #[must_use]
    pub fn id_at_uv(&self, u: f32, v: f32) -> i32 {
        let x = (u.clamp(0.0, 1.0) * self.width as f32).floor() as i64;
        let y = ((1.0 - v).clamp(0.0, 1.0) * self.height as f32).floor() as i64;

        if x < 0 || x >= i64::from(self.width) || y < 0 || y >= i64::from(self.height) {
            return -1;
        }

        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let r = self.data[idx];
        let g = self.data[idx + 1];
        let b = self.data[idx + 2];

        match self.encoding {
            IdEncoding::Red => i32::from(r),
            IdEncoding::Rgb => color_to_index(r, g, b) as i32,
        }
    }
}

/// Holder for a raster that is loaded asynchronously at startup.
///
/// Starts empty; the loader collaborator installs the decoded raster when
/// the fetch completes. Until then every resolve returns the `-1`
/// sentinel, never an error.
#[derive(Debug, Default)]
pub struct IdMap {
    raster: Option<IdRaster>,
}

impl IdMap {
    /// Creates an empty, not-yet-loaded map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the decoded raster, making the map ready.
    pub fn install(&mut self, raster: IdRaster) {
        self.raster = Some(raster);
    }

    /// Returns whether the backing raster has finished loading.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.raster.is_some()
    }

    /// Resolves the raw entity id at a normalized surface coordinate, or
    /// `-1` while the raster is still loading.
    #[must_use]
    pub fn resolve(&self, u: f32, v: f32) -> i32 {
        self.raster.as_ref().map_or(-1, |r| r.id_at_uv(u, v))
    }

    /// Resolves the entity at a normalized surface coordinate.
    #[must_use]
    pub fn resolve_entity(&self, u: f32, v: f32) -> Entity {
        Entity::from_raw(self.resolve(u, v))
    }
}

#[cfg(test)]
mod tests {
    use super::{IdEncoding, IdMap, IdRaster};
    use crate::entity::Entity;

    /// Builds a raster with one RGB triple painted at the given pixel.
    fn raster_with_pixel(
        width: u32,
        height: u32,
        x: u32,
        y: u32,
        rgb: [u8; 3],
        encoding: IdEncoding,
    ) -> IdRaster {
        let mut data = vec![0u8; width as usize * height as usize * 4];
        let idx = (y as usize * width as usize + x as usize) * 4;
        data[idx] = rgb[0];
        data[idx + 1] = rgb[1];
        data[idx + 2] = rgb[2];
        data[idx + 3] = 255;
        IdRaster::from_rgba8(width, height, data, encoding).unwrap()
    }

    #[test]
    fn center_pixel_resolves_red_id() {
        // The pixel at (w/2, h/2) corresponds to uv (0.5, 0.5) after the
        // vertical flip.
        let raster = raster_with_pixel(8, 4, 4, 2, [7, 0, 0], IdEncoding::Red);
        assert_eq!(raster.id_at_uv(0.5, 0.5), 7);
    }

    #[test]
    fn rgb_encoding_packs_24_bits() {
        let raster = raster_with_pixel(8, 4, 4, 2, [0, 39, 26], IdEncoding::Rgb);
        assert_eq!(raster.id_at_uv(0.5, 0.5), 10_010);
    }

    #[test]
    fn out_of_range_uv_is_no_entity() {
        let raster = raster_with_pixel(8, 4, 0, 0, [1, 0, 0], IdEncoding::Red);
        // u = 1.0 floors onto the column past the last; treated as a miss.
        assert_eq!(raster.id_at_uv(1.0, 0.5), -1);
        assert_eq!(raster.id_at_uv(0.5, 0.0), -1);
    }

    #[test]
    fn unloaded_map_returns_sentinel() {
        let map = IdMap::new();
        assert!(!map.is_loaded());
        assert_eq!(map.resolve(0.5, 0.5), -1);
        assert_eq!(map.resolve_entity(0.5, 0.5), Entity::None);
    }

    #[test]
    fn installed_map_resolves() {
        let mut map = IdMap::new();
        map.install(raster_with_pixel(8, 4, 4, 2, [42, 0, 0], IdEncoding::Red));
        assert!(map.is_loaded());
        assert_eq!(map.resolve_entity(0.5, 0.5), Entity::Country(42));
    }
}
