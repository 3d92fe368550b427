//! Typed GPU parameter block for hover and cursor highlighting.
//!
//! One uniform struct per shader stage; the buffer layout is fixed and
//! checked by `bytemuck` at compile time.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use globelens_core::{HoverState, OCEAN_ID_BASE};

/// Highlight uniforms consumed by the globe shader.
///
/// Exactly one of `hovered_country_id`/`hovered_ocean_id` is non-zero at
/// a time; the fade pair is selected from the same domain.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct HighlightUniforms {
    /// Hovered country id, `0` when none or when an ocean is hovered.
    pub hovered_country_id: i32,
    /// Hovered ocean id, `0` when none or when a country is hovered.
    pub hovered_ocean_id: i32,
    /// Country id currently fading out, `0` when none.
    pub previous_hovered_id: i32,
    /// Ocean id currently fading out, `0` when none.
    pub previous_hovered_ocean_id: i32,
    /// Fade-in scalar for the hovered entity's domain.
    pub highlight_fade_in: f32,
    /// Fade-out scalar for the previous entity's domain.
    pub highlight_fade_out: f32,
    /// `1` while the cursor ray hits the globe.
    pub cursor_on_globe: u32,
    /// Padding to a 16-byte boundary.
    pub _padding0: u32,
    /// Last known cursor position on the unit sphere.
    pub cursor_world_pos: [f32; 3],
    /// Padding to a 16-byte boundary.
    pub _padding1: f32,
}

impl Default for HighlightUniforms {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl HighlightUniforms {
    /// Fresh block with everything idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the highlight fields to idle. The cursor fields are left
    /// alone; they have their own lifecycle.
    pub fn reset(&mut self) {
        self.hovered_country_id = 0;
        self.hovered_ocean_id = 0;
        self.previous_hovered_id = 0;
        self.previous_hovered_ocean_id = 0;
        self.highlight_fade_in = 0.0;
        self.highlight_fade_out = 0.0;
    }

    /// Projects hover state into the block, selecting the country or
    /// ocean track by the domain of the current id.
    pub fn apply_hover(&mut self, hover: &HoverState) {
        let is_ocean = hover.current_id > 0 && hover.current_id as u32 >= OCEAN_ID_BASE;

        self.hovered_country_id = if hover.current_id > 0 && !is_ocean {
            hover.current_id
        } else {
            0
        };
        self.hovered_ocean_id = if is_ocean { hover.current_id } else { 0 };
        self.previous_hovered_id = hover.previous_id.max(0);
        self.previous_hovered_ocean_id = hover.previous_ocean_id.max(0);
        self.highlight_fade_in = if is_ocean {
            hover.fade_in_ocean
        } else {
            hover.fade_in
        };
        self.highlight_fade_out = if is_ocean {
            hover.fade_out_ocean
        } else {
            hover.fade_out
        };
    }

    /// Publishes the glow raycast result. A `None` position keeps the
    /// last known cursor point so the glow does not flicker on misses.
    pub fn set_cursor(&mut self, world_pos: Option<Vec3>, on_globe: bool) {
        if let Some(pos) = world_pos {
            self.cursor_world_pos = pos.to_array();
        }
        self.cursor_on_globe = u32::from(on_globe);
    }
}

#[cfg(test)]
mod tests {
    use super::HighlightUniforms;
    use glam::Vec3;
    use globelens_core::HoverState;

    #[test]
    fn block_is_pod_and_aligned() {
        assert_eq!(std::mem::size_of::<HighlightUniforms>(), 48);
        let block = HighlightUniforms::new();
        let bytes: &[u8] = bytemuck::bytes_of(&block);
        assert_eq!(bytes.len(), 48);
    }

    #[test]
    fn country_and_ocean_ids_are_mutually_exclusive() {
        let mut block = HighlightUniforms::new();
        let mut hover = HoverState::idle();

        hover.advance(Some((42, -1)), true, 0.1, 2.5);
        block.apply_hover(&hover);
        assert_eq!(block.hovered_country_id, 42);
        assert_eq!(block.hovered_ocean_id, 0);

        hover.advance(Some((10_003, 10_003)), true, 0.1, 2.5);
        block.apply_hover(&hover);
        assert_eq!(block.hovered_country_id, 0);
        assert_eq!(block.hovered_ocean_id, 10_003);
        assert!(block.hovered_country_id == 0 || block.hovered_ocean_id == 0);
    }

    #[test]
    fn idle_previous_ids_are_clamped_to_zero() {
        let mut block = HighlightUniforms::new();
        block.apply_hover(&HoverState::idle());
        assert_eq!(block.previous_hovered_id, 0);
        assert_eq!(block.previous_hovered_ocean_id, 0);
    }

    #[test]
    fn cursor_miss_keeps_last_position() {
        let mut block = HighlightUniforms::new();
        block.set_cursor(Some(Vec3::new(0.0, 0.0, 1.0)), true);
        assert_eq!(block.cursor_on_globe, 1);

        block.set_cursor(None, false);
        assert_eq!(block.cursor_on_globe, 0);
        assert_eq!(block.cursor_world_pos, [0.0, 0.0, 1.0]);
    }
}
