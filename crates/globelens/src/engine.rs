//! Per-frame engine orchestration.
//!
//! Everything runs synchronously once per animation callback, in a fixed
//! order: pick, id resolve, hover update, uniform projection, selection
//! fade/texture update, label plan. The ordering guarantees that no stale
//! hover state is rendered in the frame it was computed.

use glam::{Mat4, Vec2};

use globelens_core::{
    CountryTable, Entity, HoverState, IdMap, IdRaster, OceanTable, Options, SelectionSet,
    OCEAN_ID_BASE,
};
use globelens_render::{HighlightUniforms, PointerPicker, SelectionTexture};

use crate::labels::{self, LabelPlan};

/// Inputs sampled by the host once per frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Pointer position in normalized device coordinates.
    pub pointer_ndc: Vec2,
    /// Inverse of the camera's view-projection matrix.
    pub inv_view_proj: Mat4,
    /// Current globe spin in radians.
    pub globe_rotation: f32,
    /// Seconds since the previous frame.
    pub delta_seconds: f32,
    /// Monotonic timestamp in milliseconds.
    pub now_ms: f64,
    /// False until the user moves the pointer for the first time.
    pub pointer_moved: bool,
    /// True while the pointer moved within the recency window.
    pub pointer_active: bool,
}

/// Per-frame results for the host.
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// Which floating labels are visible this frame, and how opaque.
    pub labels: LabelPlan,
    /// Whether the cursor is over the globe.
    pub on_globe: bool,
    /// The entity currently hovered.
    pub hovered: Entity,
}

/// The interactive globe engine.
///
/// Owns all picking, hover and selection state explicitly; the host
/// creates one instance at startup and calls [`update`](Self::update)
/// every frame.
pub struct GlobeEngine {
    pub(crate) options: Options,
    pub(crate) country_ids: IdMap,
    pub(crate) ocean_ids: IdMap,
    pub(crate) countries: CountryTable,
    pub(crate) oceans: OceanTable,
    pub(crate) picker: PointerPicker,
    pub(crate) hover: HoverState,
    pub(crate) selected_countries: SelectionSet,
    pub(crate) selected_oceans: SelectionSet,
    pub(crate) country_selection: SelectionTexture,
    pub(crate) ocean_selection: SelectionTexture,
    pub(crate) uniforms: HighlightUniforms,
    pub(crate) current_uv: Option<Vec2>,
    pub(crate) hover_ready: bool,
    pub(crate) last_click_ms: f64,
}

impl GlobeEngine {
    /// Creates an engine with empty identifier maps. The maps load
    /// asynchronously; install them via
    /// [`install_country_raster`](Self::install_country_raster) and
    /// [`install_ocean_raster`](Self::install_ocean_raster) when their
    /// fetches complete.
    #[must_use]
    pub fn new(options: Options, countries: CountryTable, oceans: OceanTable) -> Self {
        let picker = PointerPicker::new(options.raycast_interval_ms, options.globe_radius);
        let selected_countries = SelectionSet::countries(options.max_countries);
        let selected_oceans = SelectionSet::oceans(oceans.slot_table(), options.max_oceans);
        let country_selection = SelectionTexture::new(options.max_countries, options.selection_fade_max);
        let ocean_selection = SelectionTexture::new(options.max_oceans, options.selection_fade_max);

        Self {
            options,
            country_ids: IdMap::new(),
            ocean_ids: IdMap::new(),
            countries,
            oceans,
            picker,
            hover: HoverState::idle(),
            selected_countries,
            selected_oceans,
            country_selection,
            ocean_selection,
            uniforms: HighlightUniforms::new(),
            current_uv: None,
            hover_ready: true,
            last_click_ms: f64::NEG_INFINITY,
        }
    }

    /// Installs the decoded country identifier raster.
    pub fn install_country_raster(&mut self, raster: IdRaster) {
        self.country_ids.install(raster);
    }

    /// Installs the decoded ocean identifier raster.
    pub fn install_ocean_raster(&mut self, raster: IdRaster) {
        self.ocean_ids.install(raster);
    }

    /// Globally enables or disables hover interaction. Disabling resets
    /// hover state on the next frame.
    pub fn set_hover_ready(&mut self, ready: bool) {
        self.hover_ready = ready;
    }

    /// Advances the engine by one frame.
    pub fn update(&mut self, input: &FrameInput) -> FrameOutput {
        // 1. Pick. The glow lane runs every frame, identification is
        //    throttled inside the picker.
        let pick = self.picker.update(
            input.pointer_ndc,
            input.inv_view_proj,
            input.globe_rotation,
            input.pointer_moved,
            input.pointer_active,
            input.now_ms,
        );
        if pick.uv_updated {
            self.current_uv = pick.uv;
        }
        self.uniforms.set_cursor(pick.glow_position, pick.on_globe);

        let hover_active = self.hover_ready && input.pointer_moved && pick.on_globe;

        // 2. Resolve ids, only when a fresh identification sample exists.
        let sample = if hover_active && pick.uv_updated {
            self.current_uv.map(|uv| self.resolve_hovered(uv))
        } else {
            None
        };

        // 3. Hover transitions and highlight fades.
        self.hover.advance(
            sample,
            hover_active,
            input.delta_seconds,
            self.options.highlight_fade_rate,
        );

        // 4. Project into the GPU parameter block.
        if hover_active {
            self.uniforms.apply_hover(&self.hover);
        } else {
            self.uniforms.reset();
        }

        // 5. Selection fades and byte textures, both domains.
        self.country_selection.update(
            &mut self.selected_countries,
            input.delta_seconds,
            self.options.selection_fade_rate,
        );
        self.ocean_selection.update(
            &mut self.selected_oceans,
            input.delta_seconds,
            self.options.selection_fade_rate,
        );

        // 6. Label visibility.
        let labels = if hover_active {
            labels::plan(
                &self.hover,
                &self.selected_countries,
                &self.selected_oceans,
                &self.oceans,
            )
        } else {
            LabelPlan::hidden()
        };

        FrameOutput {
            labels,
            on_globe: pick.on_globe,
            hovered: Entity::from_raw(self.hover.current_id),
        }
    }

    /// Resolves the `(raw id, ocean id)` pair under a surface coordinate,
    /// honoring the per-domain interactivity toggles. An ocean hit
    /// overrides a country hit, matching the raster stacking order.
    fn resolve_hovered(&self, uv: Vec2) -> (i32, i32) {
        let mut id = -1;
        let mut ocean_id = -1;

        if self.options.country_interactivity {
            let country = self.country_ids.resolve(uv.x, uv.y);
            if country > 0 {
                id = country;
            }
        }
        if self.options.ocean_interactivity {
            let ocean = self.ocean_ids.resolve(uv.x, uv.y);
            if ocean >= OCEAN_ID_BASE as i32 {
                id = ocean;
                ocean_id = ocean;
            }
        }

        (id, ocean_id)
    }

    /// Engine configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current hover state.
    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// The highlight uniform block, re-uploaded by the renderer each
    /// frame.
    #[must_use]
    pub fn uniforms(&self) -> &HighlightUniforms {
        &self.uniforms
    }

    /// Country selection state.
    #[must_use]
    pub fn selected_countries(&self) -> &SelectionSet {
        &self.selected_countries
    }

    /// Ocean selection state.
    #[must_use]
    pub fn selected_oceans(&self) -> &SelectionSet {
        &self.selected_oceans
    }

    /// Byte-packed country selection texture.
    #[must_use]
    pub fn country_selection_texture(&mut self) -> &mut SelectionTexture {
        &mut self.country_selection
    }

    /// Byte-packed ocean selection texture.
    #[must_use]
    pub fn ocean_selection_texture(&mut self) -> &mut SelectionTexture {
        &mut self.ocean_selection
    }

    /// The ocean descriptor table.
    #[must_use]
    pub fn oceans(&self) -> &OceanTable {
        &self.oceans
    }

    /// The country descriptor table.
    #[must_use]
    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    /// The most recent identification UV, if any sample has been taken.
    #[must_use]
    pub fn current_uv(&self) -> Option<Vec2> {
        self.current_uv
    }
}
