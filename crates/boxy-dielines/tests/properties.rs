//! Property tests shared by all three generators

mod common;

use boxy_dielines::{
    BoxParameters, DielineGenerator, LockingShoeBoxParameters, PatternError, PrismParameters,
    ShoeBoxParameters,
};
use proptest::prelude::*;

use common::assert_sound;

fn shoe_box() -> impl Strategy<Value = ShoeBoxParameters> {
    (
        (50.0f64..400.0, 40.0f64..300.0, 20.0f64..150.0),
        (0.0f64..150.0, 0.0f64..150.0),
        (0.0f64..60.0, 0.0f64..40.0),
        (0.0f64..200.0, 0.0f64..80.0),
    )
        .prop_map(
            |((length, width, height), (dust, outer), (tuck, round), (lid, lid_round))| {
                ShoeBoxParameters {
                    length,
                    width,
                    height,
                    dust_flap_pct: dust,
                    dust_outer_width_pct: outer,
                    tuck_flap: tuck,
                    tuck_round: round,
                    lid_flap_width: lid,
                    lid_tuck_radius: lid_round,
                }
            },
        )
}

fn locking_box() -> impl Strategy<Value = LockingShoeBoxParameters> {
    (
        shoe_box(),
        any::<bool>(),
        1u32..5,
        (5.0f64..40.0, 0.0f64..20.0, 0.0f64..30.0),
    )
        .prop_map(|(lid, enabled, count, (length, gap, slot))| LockingShoeBoxParameters {
            lid,
            lock_enabled: enabled,
            lock_count: count,
            lock_length: length,
            lock_gap: gap,
            slot_width: slot,
        })
}

fn prism() -> impl Strategy<Value = PrismParameters> {
    (
        (40.0f64..120.0, 80.0f64..400.0),
        (6.0f64..30.0, 0.0f64..10.0, 4.0f64..10.0),
        (1.0f64..8.0, 2.0f64..20.0),
        (1.0f64..20.0, 1.0f64..8.0, 5.0f64..20.0, 1u32..4),
    )
        .prop_map(
            |((side, depth), (tuck, round, end_tuck), (tab_w, tab_h), (lock_w, slit, lock_h, n))| {
                PrismParameters {
                    side,
                    depth,
                    tuck_width: tuck,
                    tuck_round: round,
                    end_tuck_width: end_tuck,
                    lock_tab_width: tab_w,
                    lock_tab_height: tab_h,
                    side_lock_width: lock_w,
                    side_lock_slit_width: slit,
                    side_lock_height: lock_h,
                    side_lock_count: n,
                }
            },
        )
}

/// Common contract: either a sound layout whose size `bounding_size` predicts, or the same
/// error from both entry points.
fn check_contract(params: BoxParameters) -> Result<(), TestCaseError> {
    match params.generate() {
        Ok(layout) => {
            prop_assert_eq!(params.bounding_size(), Ok(layout.size));
            prop_assert_eq!(params.clamped().generate(), Ok(layout.clone()));
            prop_assert_eq!(params.generate(), Ok(layout.clone()));
            assert_sound(&layout);
        }
        Err(err) => {
            prop_assert!(
                !matches!(err, PatternError::InvalidParameter { .. }),
                "generated parameters rejected as invalid: {}",
                err
            );
            prop_assert_eq!(params.bounding_size(), Err(err));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shoe_box_contract(params in shoe_box()) {
        check_contract(params.into())?;
    }

    #[test]
    fn shoe_box_always_generates(params in shoe_box()) {
        prop_assert!(params.generate().is_ok());
    }

    #[test]
    fn shoe_box_clamp_is_idempotent(params in shoe_box()) {
        prop_assert_eq!(params.clamped().clamped(), params.clamped());
    }

    #[test]
    fn locking_box_contract(params in locking_box()) {
        check_contract(params.into())?;
    }

    #[test]
    fn locking_clamp_is_idempotent(params in locking_box()) {
        prop_assert_eq!(params.clamped().clamped(), params.clamped());
    }

    #[test]
    fn prism_contract(params in prism()) {
        check_contract(params.into())?;
    }

    #[test]
    fn prism_clamp_is_idempotent(params in prism()) {
        prop_assert_eq!(params.clamped().clamped(), params.clamped());
    }
}
