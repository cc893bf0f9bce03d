//! End-to-end tests of the tick pipeline on synthetic hands


use hand_gesture_tracking::{
    classifier::GestureClassifier,
    config::Config,
    cursor::TrackerState,
    landmarks::{Finger, Position2D},
    GestureCategory, TrackingSession,
};
use test_helpers::*;

fn session() -> TrackingSession {
    TrackingSession::new(&Config::default()).expect("default config is valid")
}

#[test]
fn test_fist_stabilizes_on_third_tick() {
    let mut session = session();
    let hand = fist();

    let stable: Vec<GestureCategory> = (0..5)
        .map(|_| session.process_tick(Some(&hand)))
        .inspect(|out| assert_eq!(out.gesture.raw_gesture, GestureCategory::Fist))
        .map(|out| out.gesture.stable_gesture)
        .collect();

    assert_eq!(
        stable,
        vec![
            GestureCategory::None,
            GestureCategory::None,
            GestureCategory::Fist,
            GestureCategory::Fist,
            GestureCategory::Fist,
        ]
    );
}

#[test]
fn test_pinch_survives_widened_threshold() {
    let mut session = session();
    let tight = pinch();
    for _ in 0..3 {
        session.process_tick(Some(&tight));
    }
    assert_eq!(session.stable_gesture(), GestureCategory::Pinch);

    // 0.05 lies between 0.2 and 0.3 of the 0.2 hand scale.
    let loose = HandBuilder::new().extend(Finger::Index).thumb_near_index(0.05).build();
    let out = session.process_tick(Some(&loose));
    assert_eq!(out.gesture.raw_gesture, GestureCategory::Pinch);

    // The same frame without a held pinch is just a pointing hand.
    let classifier = GestureClassifier::default();
    assert_eq!(classifier.classify(Some(&loose), GestureCategory::Point), GestureCategory::Point);
}

#[test]
fn test_unmatched_hand_defaults_to_point() {
    let classifier = GestureClassifier::default();
    let two_fingers = HandBuilder::new().extend(Finger::Index).extend(Finger::Middle).build();
    assert_eq!(
        classifier.classify(Some(&two_fingers), GestureCategory::None),
        GestureCategory::Point
    );
}

#[test]
fn test_open_palm_classification() {
    let classifier = GestureClassifier::default();
    assert_eq!(
        classifier.classify(Some(&open_palm()), GestureCategory::None),
        GestureCategory::OpenPalm
    );

    let three = HandBuilder::new()
        .extend(Finger::Middle)
        .extend(Finger::Ring)
        .extend(Finger::Pinky)
        .build();
    assert_eq!(classifier.classify(Some(&three), GestureCategory::None), GestureCategory::OpenPalm);
}

#[test]
fn test_scrunched_index_is_not_a_pinch() {
    let classifier = GestureClassifier::default();
    // Thumb on a folded index tip; the extended middle finger keeps it out of Fist.
    let hand = HandBuilder::new()
        .extend(Finger::Middle)
        .scrunch_index()
        .thumb_near_index(0.0)
        .build();

    assert_eq!(classifier.classify(Some(&hand), GestureCategory::None), GestureCategory::Point);
}

#[test]
fn test_interrupted_tracking_resets_immediately() {
    let mut session = session();
    let hand = pointing();

    let mut last = None;
    for _ in 0..10 {
        last = session.process_tick(Some(&hand)).cursor.position;
    }
    let tip = hand.index_tip();
    let position = last.expect("cursor should be tracking");
    assert_close(position.x, tip.x, 1e-9);
    assert_close(position.y, tip.y, 1e-9);
    assert_eq!(session.cursor().state(), TrackerState::Tracking);

    // Fist votes accumulate; the tick on which Fist becomes stable drops
    // cursor and trail together.
    let closed = fist();
    let mut dropped_at = None;
    for tick in 1..=5 {
        let out = session.process_tick(Some(&closed));
        if out.gesture.stable_gesture == GestureCategory::Fist {
            assert_eq!(out.cursor.position, None);
            assert!(out.trail.positions.is_empty());
            dropped_at = Some(tick);
            break;
        }
        assert!(out.cursor.position.is_some());
    }
    assert_eq!(dropped_at, Some(3));
    assert_eq!(session.cursor().state(), TrackerState::Idle);
}

#[test]
fn test_cursor_snaps_then_converges() {
    let mut session = session();
    let start = pointing();
    let out = session.process_tick(Some(&start));
    // Stable is still None on the first tick, so no cursor yet.
    assert_eq!(out.cursor.position, None);

    session.process_tick(Some(&start));
    let out = session.process_tick(Some(&start));
    assert_eq!(out.gesture.stable_gesture, GestureCategory::Point);
    assert_eq!(out.cursor.position, Some(start.index_tip()));

    let moved = HandBuilder::new().extend(Finger::Index).shifted(0.2, 0.0).build();
    let initial = start.index_tip().distance_to(&moved.index_tip());
    let mut residual = initial;
    for _ in 0..10 {
        let out = session.process_tick(Some(&moved));
        residual = out.cursor.position.unwrap().distance_to(&moved.index_tip());
    }
    assert!(residual < initial * 1e-6, "residual {residual} after 10 ticks");
}

#[test]
fn test_missing_frames_drive_cursor_to_absent() {
    let mut session = session();
    let hand = pointing();
    for _ in 0..5 {
        session.process_tick(Some(&hand));
    }
    assert!(session.cursor().current().is_some());

    let outputs: Vec<_> = (0..5).map(|_| session.process_tick(None)).collect();
    // Two missing frames are outvoted; the third flips the stable gesture.
    assert!(outputs[0].cursor.position.is_some());
    assert!(outputs[1].cursor.position.is_some());
    assert_eq!(outputs[2].gesture.stable_gesture, GestureCategory::None);
    assert_eq!(outputs[2].cursor.position, None);
    assert!(outputs[2].trail.positions.is_empty());
}

#[test]
fn test_open_palm_freezes_cursor() {
    let mut session = session();
    let hand = pointing();
    for _ in 0..5 {
        session.process_tick(Some(&hand));
    }
    let held = session.cursor().current().unwrap();

    let palm = open_palm();
    for _ in 0..5 {
        let position = session.process_tick(Some(&palm)).cursor.position.unwrap();
        assert_close(position.x, held.x, 1e-9);
        assert_close(position.y, held.y, 1e-9);
    }
    assert_eq!(session.stable_gesture(), GestureCategory::OpenPalm);
    assert_eq!(session.cursor().state(), TrackerState::Frozen);
}

#[test]
fn test_trail_is_bounded_and_ordered() {
    let mut config = Config::default();
    config.trail.max_trail_len = 4;
    config.cursor.filter = "none".to_string();
    let mut session = TrackingSession::new(&config).unwrap();

    let mut last = None;
    for i in 0..12 {
        let hand = HandBuilder::new()
            .extend(Finger::Index)
            .shifted(0.01 * f64::from(i), 0.0)
            .build();
        last = Some(session.process_tick(Some(&hand)));
    }
    let trail = last.unwrap().trail.positions;
    assert_eq!(trail.len(), 4);
    assert!(trail.windows(2).all(|w| w[0].x < w[1].x));
    assert_eq!(trail.last().copied(), session.cursor().current());
}

#[test]
fn test_mirrored_cursor() {
    let mut config = Config::default();
    config.cursor.mirror_x = true;
    let mut session = TrackingSession::new(&config).unwrap();
    let hand = pointing();
    for _ in 0..3 {
        session.process_tick(Some(&hand));
    }
    let tip = hand.index_tip();
    assert_eq!(session.cursor().current(), Some(Position2D::new(1.0 - tip.x, tip.y)));
}

#[test]
fn test_session_reset() {
    let mut session = session();
    let hand = pointing();
    for _ in 0..5 {
        session.process_tick(Some(&hand));
    }
    session.reset();
    assert_eq!(session.stable_gesture(), GestureCategory::None);
    assert!(session.trail().is_empty());
    assert!(session.cursor().current().is_none());
    assert_eq!(session.ticks(), 0);
}
