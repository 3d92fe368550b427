//! Label visibility driver.
//!
//! Computes, per domain, which floating labels are visible this frame
//! and at what opacity. Anything absent from the plan is hidden. The
//! driver is a pure function of hover state, selection sets and the
//! ocean descriptor table.

use globelens_core::{HoverState, OceanTable, SelectionSet};

/// A visible country label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryLabel {
    pub id: u32,
    pub opacity: f32,
}

/// A visible ocean label, with its descriptor resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct OceanLabel {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub opacity: f32,
}

/// The set of labels to show this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelPlan {
    pub countries: Vec<CountryLabel>,
    pub oceans: Vec<OceanLabel>,
}

impl LabelPlan {
    /// The empty plan: every label hidden.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Returns true if no label is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.oceans.is_empty()
    }
}

/// Builds the label plan for one frame.
///
/// Visible set per domain: selected ids plus the hovered id. Selected
/// labels take the selected opacity path (full for countries, selection
/// fade for oceans); a hovered-but-unselected label fades with the hover
/// fade-in. A hovered id that is also selected is emitted once, through
/// the selected path. Oceans without a descriptor are skipped silently.
pub(crate) fn plan(
    hover: &HoverState,
    selected_countries: &SelectionSet,
    selected_oceans: &SelectionSet,
    oceans: &OceanTable,
) -> LabelPlan {
    let hovered_country = hover
        .hovering_country()
        .then(|| hover.current_id as u32);
    let hovered_ocean = hover.hovering_ocean().then(|| hover.current_id as u32);

    let mut countries = Vec::new();
    if let Some(id) = hovered_country {
        if !selected_countries.contains(id) {
            countries.push(CountryLabel {
                id,
                opacity: hover.fade_in,
            });
        }
    }
    for id in selected_countries.ids() {
        countries.push(CountryLabel { id, opacity: 1.0 });
    }

    let mut ocean_labels = Vec::new();
    if let Some(id) = hovered_ocean {
        if !selected_oceans.contains(id) {
            if let Some(info) = oceans.get(id) {
                ocean_labels.push(OceanLabel {
                    id,
                    name: info.name.clone(),
                    lat: info.lat,
                    lon: info.lon,
                    opacity: hover.fade_in_ocean,
                });
            }
        }
    }
    for id in selected_oceans.ids() {
        let Some(info) = oceans.get(id) else {
            continue;
        };
        ocean_labels.push(OceanLabel {
            id,
            name: info.name.clone(),
            lat: info.lat,
            lon: info.lon,
            opacity: selected_oceans.fade_of(id),
        });
    }

    LabelPlan {
        countries,
        oceans: ocean_labels,
    }
}
