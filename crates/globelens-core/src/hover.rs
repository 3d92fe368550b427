//! Hover tracking and highlight fade transitions.
//!
//! Country and ocean hover are independent tracks even though they share
//! one raw id stream: a single "current id" cannot express "no country
//! hovered, but ocean X hovered". Each track keeps its own previous id so
//! the outgoing highlight can fade while the incoming one fades in.

use crate::entity::OCEAN_ID_BASE;

/// A new identification sample for one frame.
///
/// `None` means the throttled identification raycast did not run this
/// frame; the machine keeps the previous hover ids and only advances the
/// fades.
pub type HoverSample = Option<(i32, i32)>;

/// Per-frame hover state, owned by the caller and threaded through the
/// frame update explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    /// Raw id of the entity under the cursor (country or ocean), `-1` if
    /// none.
    pub current_id: i32,
    /// Country id that is fading out, `0`/`-1` if none.
    pub previous_id: i32,
    /// Highlight fade-in progress for the hovered country, in `[0, 1]`.
    pub fade_in: f32,
    /// Highlight fade-out progress for the previous country, in `[0, 1]`.
    pub fade_out: f32,
    /// Ocean id under the cursor, `-1` if none.
    pub current_ocean_id: i32,
    /// Ocean id that is fading out, `0`/`-1` if none.
    pub previous_ocean_id: i32,
    /// Fade-in progress for the hovered ocean, in `[0, 1]`.
    pub fade_in_ocean: f32,
    /// Fade-out progress for the previous ocean, in `[0, 1]`.
    pub fade_out_ocean: f32,
}

impl Default for HoverState {
    fn default() -> Self {
        Self::idle()
    }
}

impl HoverState {
    /// The idle state: nothing hovered, all fades at zero.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            current_id: -1,
            previous_id: -1,
            fade_in: 0.0,
            fade_out: 0.0,
            current_ocean_id: -1,
            previous_ocean_id: -1,
            fade_in_ocean: 0.0,
            fade_out_ocean: 0.0,
        }
    }

    /// Forces the idle state. Used when hover is disabled or the pointer
    /// leaves the globe: an immediate reset, not a fade.
    pub fn reset(&mut self) {
        *self = Self::idle();
    }

    /// Returns true if the current id is in the country range.
    #[must_use]
    pub fn hovering_country(&self) -> bool {
        self.current_id > 0 && (self.current_id as u32) < OCEAN_ID_BASE
    }

    /// Returns true if the current id is in the ocean range.
    #[must_use]
    pub fn hovering_ocean(&self) -> bool {
        self.current_id > 0 && self.current_id as u32 >= OCEAN_ID_BASE
    }

    /// Advances the machine by one frame.
    ///
    /// `sample` carries the freshly resolved `(id, ocean_id)` pair when the
    /// identification raycast ran this frame. `hover_active` is false when
    /// interaction is disabled or the pointer is off the globe; the state
    /// snaps back to idle in that case.
    ///
    /// Fade-in rises toward 1 for the hovered entity, fade-out falls
    /// toward 0 for the previous one, both at `delta * fade_rate` and
    /// clamped to `[0, 1]`. Fade-out only advances while the previous id
    /// differs from the current one, so re-entering an entity mid-fade
    /// cannot overshoot.
    pub fn advance(&mut self, sample: HoverSample, hover_active: bool, delta: f32, fade_rate: f32) {
        if !hover_active {
            self.reset();
            return;
        }

        if let Some((new_id, new_ocean_id)) = sample {
            if new_id != self.current_id {
                if self.hovering_country() {
                    // Outgoing country: seed its fade-out from wherever the
                    // fade-in had reached.
                    self.previous_id = self.current_id;
                    self.fade_out = self.fade_in;
                    self.fade_in = 0.0;
                    self.previous_ocean_id = 0;
                    self.fade_out_ocean = 0.0;
                } else if self.hovering_ocean() {
                    self.previous_ocean_id = self.current_id;
                    self.fade_out_ocean = self.fade_in_ocean;
                    self.fade_in_ocean = 0.0;
                    self.previous_id = 0;
                    self.fade_out = 0.0;
                }
                self.current_id = new_id;
                self.current_ocean_id = new_ocean_id;
            }
        }

        let step = delta * fade_rate;

        if self.hovering_country() {
            self.fade_in = (self.fade_in + step).min(1.0);
        }
        if self.previous_id > 0 && self.previous_id != self.current_id {
            self.fade_out = (self.fade_out - step).max(0.0);
        }

        if self.hovering_ocean() {
            self.fade_in_ocean = (self.fade_in_ocean + step).min(1.0);
        }
        if self.previous_ocean_id > 0 && self.previous_ocean_id != self.current_ocean_id {
            self.fade_out_ocean = (self.fade_out_ocean - step).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HoverState;

    const RATE: f32 = 2.5;

    #[test]
    fn fade_in_rises_and_clamps() {
        let mut hover = HoverState::idle();
        hover.advance(Some((42, -1)), true, 0.1, RATE);
        assert_eq!(hover.current_id, 42);
        assert!(hover.fade_in > 0.0 && hover.fade_in <= 1.0);

        // A huge delta must still clamp at 1.
        hover.advance(None, true, 100.0, RATE);
        assert_eq!(hover.fade_in, 1.0);
    }

    #[test]
    fn country_change_shifts_previous() {
        let mut hover = HoverState::idle();
        hover.advance(Some((42, -1)), true, 0.2, RATE);
        let fade_before = hover.fade_in;

        hover.advance(Some((7, -1)), true, 0.0, RATE);
        assert_eq!(hover.current_id, 7);
        assert_eq!(hover.previous_id, 42);
        assert_eq!(hover.fade_out, fade_before);
        assert_eq!(hover.fade_in, 0.0);
    }

    #[test]
    fn ocean_and_country_tracks_are_independent() {
        let mut hover = HoverState::idle();
        hover.advance(Some((42, -1)), true, 0.2, RATE);
        hover.advance(Some((10_003, 10_003)), true, 0.1, RATE);

        assert_eq!(hover.current_id, 10_003);
        assert_eq!(hover.current_ocean_id, 10_003);
        // The country track keeps fading out on its own.
        assert_eq!(hover.previous_id, 42);
        assert!(hover.fade_out > 0.0);
        assert!(hover.fade_in_ocean > 0.0);
    }

    #[test]
    fn fade_out_stops_when_entity_becomes_current_again() {
        let mut hover = HoverState::idle();
        hover.advance(Some((42, -1)), true, 0.3, RATE);
        // Leave the country: 42 starts fading out.
        hover.advance(Some((-1, -1)), true, 0.1, RATE);
        assert_eq!(hover.previous_id, 42);
        let fade_out = hover.fade_out;
        assert!(fade_out > 0.0);

        // Hover back onto 42: previous == current, fade-out must freeze.
        hover.advance(Some((42, -1)), true, 0.1, RATE);
        assert_eq!(hover.previous_id, 42);
        assert_eq!(hover.fade_out, fade_out);
        hover.advance(None, true, 0.1, RATE);
        assert_eq!(hover.fade_out, fade_out);
    }

    #[test]
    fn inactive_hover_resets_immediately() {
        let mut hover = HoverState::idle();
        hover.advance(Some((42, -1)), true, 0.5, RATE);
        assert!(hover.fade_in > 0.0);

        hover.advance(None, false, 0.016, RATE);
        assert_eq!(hover, HoverState::idle());
    }

    #[test]
    fn fades_stay_bounded_for_any_delta() {
        let mut hover = HoverState::idle();
        for frame in 0..200 {
            let id = if frame % 3 == 0 { 42 } else { 10_001 };
            let ocean = if id >= 10_000 { id } else { -1 };
            hover.advance(Some((id, ocean)), true, 7.5, RATE);
            for fade in [
                hover.fade_in,
                hover.fade_out,
                hover.fade_in_ocean,
                hover.fade_out_ocean,
            ] {
                assert!((0.0..=1.0).contains(&fade));
            }
        }
    }
}
