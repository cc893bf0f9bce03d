//! Property tests for gesture debouncing and bounded buffers

use hand_gesture_tracking::{
    cursor::CursorTracker,
    landmarks::Position2D,
    stability::StabilityFilter,
    trail::TrailBuffer,
    GestureCategory,
};
use proptest::prelude::*;

fn gesture() -> impl Strategy<Value = GestureCategory> {
    prop::sample::select(GestureCategory::ALL.to_vec())
}

proptest! {
    #[test]
    fn history_never_exceeds_window(
        history_size in 1usize..10,
        fraction in 0.1f64..=1.0,
        raws in prop::collection::vec(gesture(), 0..60),
    ) {
        let mut filter = StabilityFilter::new(history_size, fraction);
        for raw in raws {
            filter.update(raw);
            prop_assert!(filter.history().len() <= history_size);
        }
    }

    #[test]
    fn stable_change_requires_consensus(raws in prop::collection::vec(gesture(), 1..60)) {
        let mut filter = StabilityFilter::new(5, 0.6);
        prop_assert_eq!(filter.consensus_threshold(), 3);

        for raw in raws {
            let before = filter.stable();
            let after = filter.update(raw);
            if after != before {
                let votes = filter.history().iter().filter(|g| **g == after).count();
                prop_assert!(votes >= 3, "{} adopted with {} votes", after, votes);
            }
        }
    }

    #[test]
    fn two_intruders_never_flip_stable(
        held in gesture(),
        intruder in gesture(),
        positions in prop::sample::subsequence(vec![0usize, 1, 2, 3, 4], 0..=2),
    ) {
        let mut filter = StabilityFilter::new(5, 0.6);
        for _ in 0..5 {
            filter.update(held);
        }
        prop_assert_eq!(filter.stable(), held);

        for i in 0..5 {
            let raw = if positions.contains(&i) { intruder } else { held };
            prop_assert_eq!(filter.update(raw), held);
        }
    }

    #[test]
    fn trail_never_exceeds_capacity(
        max_len in 1usize..30,
        xs in prop::collection::vec(0.0f64..1.0, 0..100),
    ) {
        let mut trail = TrailBuffer::new(max_len);
        for x in xs {
            trail.push(Position2D::new(x, 1.0 - x));
            prop_assert!(trail.len() <= max_len);
        }
    }

    #[test]
    fn cursor_stays_between_snap_and_target(
        start in (0.0f64..1.0, 0.0f64..1.0),
        target in (0.0f64..1.0, 0.0f64..1.0),
        ticks in 1usize..20,
    ) {
        let mut tracker = CursorTracker::with_smoothing(0.85);
        let start = Position2D::new(start.0, start.1);
        let target = Position2D::new(target.0, target.1);
        tracker.update(GestureCategory::Point, Some(start));

        let initial = start.distance_to(&target);
        let mut previous = initial;
        for _ in 0..ticks {
            tracker.update(GestureCategory::Point, Some(target));
            let residual = tracker.current().unwrap().distance_to(&target);
            prop_assert!(residual <= previous + 1e-12);
            previous = residual;
        }
        prop_assert!(previous <= initial * 0.15f64.powi(ticks as i32) + 1e-12);
    }
}

#[test]
fn test_no_majority_holds_previous_stable() {
    use GestureCategory::{Fist, OpenPalm, Pinch, Point};

    let mut filter = StabilityFilter::new(5, 0.6);
    for _ in 0..3 {
        filter.update(Point);
    }
    assert_eq!(filter.stable(), Point);

    // Window ends up [Point, OpenPalm, Pinch, Fist, OpenPalm]: no category has 3 votes.
    for raw in [OpenPalm, Pinch, Fist, OpenPalm] {
        assert_eq!(filter.update(raw), Point);
    }
}

#[test]
fn test_single_slot_window_follows_raw() {
    let mut filter = StabilityFilter::new(1, 0.6);
    for raw in GestureCategory::ALL {
        assert_eq!(filter.update(raw), raw);
    }
}

#[test]
fn test_unanimous_fraction() {
    let mut filter = StabilityFilter::new(4, 1.0);
    assert_eq!(filter.consensus_threshold(), 4);
    for _ in 0..3 {
        assert_eq!(filter.update(GestureCategory::Fist), GestureCategory::None);
    }
    assert_eq!(filter.update(GestureCategory::Fist), GestureCategory::Fist);
}
