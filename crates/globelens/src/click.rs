//! Click selection handling.
//!
//! Clicks are the sole mutator of selection membership; the per-frame
//! synchronizer only moves fades. A country click additionally resolves
//! the ISO code that keys the external news panel. The engine never
//! opens panels itself; it reports the outcome and the host reacts.

use glam::Vec2;

use globelens_core::OCEAN_ID_BASE;

use crate::engine::GlobeEngine;

/// What a click did to the selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Debounced, off-entity, or interactivity disabled.
    Ignored,
    /// A country was added to the selection. `iso` keys the news panel;
    /// `None` means the metadata table has no code for this id (logged,
    /// not fatal).
    CountrySelected { id: u32, iso: Option<String> },
    /// A previously selected country was deselected; the host should
    /// close its panel.
    CountryDeselected { id: u32 },
    /// An ocean was added to the selection.
    OceanSelected { id: u32 },
    /// An ocean was deselected.
    OceanDeselected { id: u32 },
}

impl GlobeEngine {
    /// Handles a click that the host raycast resolved to a surface
    /// coordinate. Clicks inside the debounce window are dropped.
    pub fn handle_click(&mut self, uv: Vec2, now_ms: f64) -> ClickOutcome {
        if now_ms - self.last_click_ms < self.options.click_debounce_ms {
            return ClickOutcome::Ignored;
        }
        self.last_click_ms = now_ms;

        if self.options.country_interactivity {
            let country = self.country_ids.resolve(uv.x, uv.y);
            if country > 0 && country as usize <= self.options.max_countries {
                let id = country as u32;
                if self.selected_countries.contains(id) {
                    self.selected_countries.remove(id);
                    return ClickOutcome::CountryDeselected { id };
                }
                self.selected_countries.insert(id);
                return ClickOutcome::CountrySelected {
                    id,
                    iso: self.lookup_iso(id),
                };
            }
        }

        if self.options.ocean_interactivity {
            let ocean = self.ocean_ids.resolve(uv.x, uv.y);
            if ocean >= OCEAN_ID_BASE as i32 {
                let id = ocean as u32;
                if self.selected_oceans.contains(id) {
                    self.selected_oceans.remove(id);
                    return ClickOutcome::OceanDeselected { id };
                }
                if self.selected_oceans.insert(id) {
                    return ClickOutcome::OceanSelected { id };
                }
            }
        }

        ClickOutcome::Ignored
    }

    /// Selects a single country exclusively, clearing any other country
    /// selection. Used by search and deep links rather than clicks; the
    /// fade snaps to fully visible. Returns the ISO code for the news
    /// panel.
    pub fn select_country(&mut self, id: u32) -> Option<String> {
        if id == 0 || !self.countries.contains(id) || self.selected_countries.contains(id) {
            log::warn!("invalid country selection: {id}");
            return None;
        }

        self.selected_countries.clear();
        self.selected_countries.insert(id);
        self.selected_countries.snap_fade(id, 1.0);
        self.lookup_iso(id)
    }

    /// Deselects everything in both domains.
    pub fn clear_selections(&mut self) {
        self.selected_countries.clear();
        self.selected_oceans.clear();
    }

    fn lookup_iso(&self, id: u32) -> Option<String> {
        let iso = self.countries.iso(id).map(str::to_owned);
        if iso.is_none() {
            log::warn!("no ISO code for country id {id}");
        }
        iso
    }
}
