// Host-side tests for the one-shot reveal engine and stagger delays.

use site_core::{parse_delay, stagger_delay, stagger_delays, MotionMode, RevealEngine, RevealState};

#[test]
fn motion_mode_strings() {
    assert_eq!(MotionMode::from_reduced(true).as_str(), "reduced");
    assert_eq!(MotionMode::from_reduced(false).as_str(), "full");
}

#[test]
fn parse_delay_defaults_to_zero() {
    assert_eq!(parse_delay(None), 0);
    assert_eq!(parse_delay(Some("")), 0);
    assert_eq!(parse_delay(Some("soon")), 0);
    assert_eq!(parse_delay(Some("-50")), 0);
    assert_eq!(parse_delay(Some("NaN")), 0);
    assert_eq!(parse_delay(Some("150")), 150);
    assert_eq!(parse_delay(Some(" 80 ")), 80);
    assert_eq!(parse_delay(Some("120.9")), 120);
}

#[test]
fn reveal_fires_once_with_its_delay() {
    let mut engine = RevealEngine::new(MotionMode::Full, [0, 200]);
    assert!(engine.should_observe());

    assert_eq!(engine.on_entry(1, false), None);
    assert_eq!(engine.on_entry(1, true), Some(200));
    assert_eq!(engine.state(1), Some(RevealState::Scheduled));
    // Re-intersection before or after the delay never re-fires.
    assert_eq!(engine.on_entry(1, true), None);
    assert!(engine.complete(1));
    assert!(engine.is_revealed(1));
    assert_eq!(engine.on_entry(1, true), None);
    assert!(!engine.complete(1));
}

#[test]
fn revealed_targets_stay_revealed() {
    let mut engine = RevealEngine::new(MotionMode::Full, vec![0; 4]);
    for i in 0..4 {
        assert_eq!(engine.on_entry(i, true), Some(0));
        assert!(engine.complete(i));
    }
    for _ in 0..3 {
        for i in 0..4 {
            engine.on_entry(i, false);
            engine.on_entry(i, true);
            assert!(engine.is_revealed(i));
        }
    }
    assert!((0..4).all(|i| !engine.complete(i)));
}

#[test]
fn complete_without_entry_is_refused() {
    let mut engine = RevealEngine::new(MotionMode::Full, [0]);
    assert!(!engine.complete(0));
    assert_eq!(engine.state(0), Some(RevealState::Hidden));
}

#[test]
fn reduced_motion_never_reveals() {
    let mut engine = RevealEngine::new(MotionMode::Reduced, [0, 0, 0]);
    assert_eq!(engine.mode().as_str(), "reduced");
    assert!(!engine.should_observe());
    for i in 0..3 {
        assert_eq!(engine.on_entry(i, true), None);
        assert!(!engine.complete(i));
        assert!(!engine.is_revealed(i));
    }
}

#[test]
fn no_targets_means_no_observer() {
    let engine = RevealEngine::new(MotionMode::Full, Vec::new());
    assert!(!engine.should_observe());
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut engine = RevealEngine::new(MotionMode::Full, [0]);
    assert_eq!(engine.on_entry(5, true), None);
    assert!(!engine.complete(5));
    assert_eq!(engine.state(5), None);
}

#[test]
fn stagger_three_children() {
    assert_eq!(stagger_delays(3, 100), vec!["0ms", "100ms", "200ms"]);
    assert_eq!(stagger_delay(7, 100), "700ms");
    assert!(stagger_delays(0, 100).is_empty());
}

#[test]
fn immediate_reveal_wins_over_late_timer() {
    // Without a timer the web layer completes straight after the entry; a
    // timer that still fires later must be a no-op.
    let mut engine = RevealEngine::new(MotionMode::Full, [300]);
    assert_eq!(engine.on_entry(0, true), Some(300));
    assert!(engine.complete(0));
    assert!(!engine.complete(0));
    assert_eq!(engine.state(0), Some(RevealState::Revealed));
}
