//! Layout checks for the locking shoe box

mod common;

use boxy_core::{BoundingSize, Role};
use boxy_dielines::layout::Span;
use boxy_dielines::locking_lid::{generate, lock_spans};
use boxy_dielines::{LockingShoeBoxParameters, PatternError};

use common::{assert_sound, loose_ends, verticals_at, x_extent};

const LEFT_EDGE: f64 = 259.0;
const RIGHT_EDGE: f64 = 513.0;

#[test]
fn test_default_pattern() {
    let layout = generate(&LockingShoeBoxParameters::default()).unwrap();

    assert_eq!(layout.size, BoundingSize::new(772.0, 774.0));
    assert_sound(&layout);
    // Lock tabs are the outermost features
    assert_eq!(x_extent(&layout), (60.0, 712.0));
}

#[test]
fn test_slots_and_tabs_are_closed() {
    let layout = generate(&LockingShoeBoxParameters::default()).unwrap();
    assert!(loose_ends(&layout).is_empty());
}

#[test]
fn test_slots_overlapping_across_base_rejected() {
    let mut params = LockingShoeBoxParameters::default();
    params.lid.length = 50.0;
    params.slot_width = 30.0;
    assert!(matches!(
        generate(&params),
        Err(PatternError::GeometricInconsistency(_))
    ));
}

#[test]
fn test_tabs_mirror_each_other() {
    let layout = generate(&LockingShoeBoxParameters::default()).unwrap();
    let expected = vec![(474.0, 504.0), (524.0, 554.0)];

    assert_eq!(verticals_at(&layout, Role::Cut, 60.0), expected);
    assert_eq!(verticals_at(&layout, Role::Cut, 712.0), expected);
}

#[test]
fn test_base_fold_skips_slots() {
    let params = LockingShoeBoxParameters::default();
    let layout = generate(&params).unwrap();
    let spans = lock_spans(&params).unwrap();

    for edge in [LEFT_EDGE, RIGHT_EDGE] {
        let base_folds: Vec<(f64, f64)> = verticals_at(&layout, Role::Fold, edge)
            .into_iter()
            .filter(|(top, bottom)| *top >= 412.0 && *bottom <= 616.0)
            .collect();
        assert_eq!(
            base_folds,
            vec![(412.0, 474.0), (504.0, 524.0), (554.0, 616.0)]
        );

        for (top, bottom) in verticals_at(&layout, Role::Fold, edge) {
            let fold = Span::new(top, bottom);
            assert!(
                spans.iter().all(|s| !s.overlaps(&fold)),
                "fold {:?} runs through a slot",
                fold
            );
        }
    }
}

#[test]
fn test_slots_straddle_the_fold() {
    let layout = generate(&LockingShoeBoxParameters::default()).unwrap();
    let slot_sides = [LEFT_EDGE - 3.0, LEFT_EDGE + 3.0, RIGHT_EDGE - 3.0, RIGHT_EDGE + 3.0];
    for x in slot_sides {
        assert_eq!(
            verticals_at(&layout, Role::Cut, x),
            vec![(474.0, 504.0), (524.0, 554.0)],
            "slot side at x = {}",
            x
        );
    }
}

#[test]
fn test_locks_stay_centred() {
    let params = LockingShoeBoxParameters {
        lock_count: 3,
        lock_length: 40.0,
        lock_gap: 10.0,
        ..Default::default()
    };
    let spans = lock_spans(&params).unwrap();
    assert_eq!(spans.len(), 3);
    let (first, last) = (spans[0], spans[2]);
    assert!(((first.start - 412.0) - (616.0 - last.end)).abs() < 1e-9);
    assert_sound(&generate(&params).unwrap());
}

#[test]
fn test_touching_locks() {
    let params = LockingShoeBoxParameters {
        lock_count: 4,
        lock_length: 25.0,
        lock_gap: 0.0,
        ..Default::default()
    };
    assert_sound(&generate(&params).unwrap());
}

#[test]
fn test_oversized_span_reports_limits() {
    let params = LockingShoeBoxParameters {
        lock_count: 4,
        lock_length: 50.0,
        lock_gap: 10.0,
        ..Default::default()
    };
    match generate(&params) {
        Err(PatternError::ParameterOutOfRange { value, max, .. }) => {
            assert_eq!(value, 230.0);
            assert_eq!(max, 204.0);
        }
        other => panic!("expected out of range error, got {:?}", other),
    }
}
