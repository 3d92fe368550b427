//! Configuration options for the globe engine.

use serde::{Deserialize, Serialize};

/// Tuning knobs for picking, fading and caching. Defaults match the
/// shipped globe viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Speed at which hover highlights fade in and out, per second.
    pub highlight_fade_rate: f32,

    /// Speed at which selection fades move toward their flag, per second.
    pub selection_fade_rate: f32,

    /// Minimum delay between identification raycasts, in milliseconds.
    pub raycast_interval_ms: f64,

    /// Minimum time between accepted clicks, in milliseconds.
    pub click_debounce_ms: f64,

    /// Number of dense country selection slots.
    pub max_countries: usize,

    /// Number of dense ocean selection slots.
    pub max_oceans: usize,

    /// Largest byte value written into the selection textures.
    pub selection_fade_max: u8,

    /// Capacity of the tile surface cache.
    pub tile_cache_size: usize,

    /// Radius of the pickable globe sphere in world units.
    pub globe_radius: f32,

    /// Whether country hover/click resolution is enabled.
    pub country_interactivity: bool,

    /// Whether ocean hover/click resolution is enabled.
    pub ocean_interactivity: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            highlight_fade_rate: 2.5,
            selection_fade_rate: 3.5,
            raycast_interval_ms: 100.0,
            click_debounce_ms: 200.0,
            max_countries: 2048,
            max_oceans: 512,
            selection_fade_max: 255,
            tile_cache_size: 256,
            globe_radius: 1.0,
            country_interactivity: true,
            ocean_interactivity: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Options;

    #[test]
    fn defaults_round_trip_through_json() {
        let options = Options::default();
        let json = serde_json::to_string(&options).unwrap();
        let back: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_countries, options.max_countries);
        assert_eq!(back.raycast_interval_ms, options.raycast_interval_ms);
    }
}
