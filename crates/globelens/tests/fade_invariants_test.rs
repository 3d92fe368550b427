//! Property tests for the fade invariants: every fade scalar stays in
//! `[0, 1]` no matter how large or irregular the frame deltas are.

use proptest::prelude::*;

use globelens::{HoverState, SelectionSet};

proptest! {
    #[test]
    fn hover_fades_stay_bounded(
        deltas in prop::collection::vec(0.0f32..20.0, 1..80),
        ids in prop::collection::vec(prop_oneof![
            Just(-1i32),
            1i32..100,
            10_000i32..10_020,
        ], 1..80),
    ) {
        let mut hover = HoverState::idle();
        for (delta, id) in deltas.iter().zip(ids.iter().cycle()) {
            let ocean = if *id >= 10_000 { *id } else { -1 };
            hover.advance(Some((*id, ocean)), true, *delta, 2.5);

            for fade in [
                hover.fade_in,
                hover.fade_out,
                hover.fade_in_ocean,
                hover.fade_out_ocean,
            ] {
                prop_assert!((0.0..=1.0).contains(&fade));
            }
        }
    }

    #[test]
    fn selection_fades_stay_bounded(
        deltas in prop::collection::vec(0.0f32..20.0, 1..60),
        toggles in prop::collection::vec(1u32..16, 0..40),
    ) {
        let mut selection = SelectionSet::countries(16);
        let mut toggles = toggles.into_iter();

        for delta in deltas {
            if let Some(id) = toggles.next() {
                selection.toggle(id);
            }
            selection.advance_fades(delta, 3.5);

            for fade in selection.fades() {
                prop_assert!((0.0..=1.0).contains(fade));
            }
        }
    }
}
