// Host-side tests for anchor resolution and the eased scroll animation.

use site_core::{
    anchor_id, ease_out_cubic, scroll_target, ScrollAnimation, ScrollMode, ScrollNavigator,
    ScrollSettings, ScrollTick,
};

/// Drive the navigator at 60 fps from `t0` until it finishes.
fn run_to_end(nav: &mut ScrollNavigator, t0: f64) -> (Vec<f64>, String) {
    let mut ys = Vec::new();
    let mut t = t0;
    loop {
        match nav.tick(t) {
            ScrollTick::Continue { y } => ys.push(y),
            ScrollTick::Finish { y, href } => {
                ys.push(y);
                return (ys, href);
            }
            ScrollTick::Idle => panic!("loop went idle before finishing"),
        }
        t += 16.0;
    }
}

#[test]
fn anchor_id_rejects_empty_and_bare_hash() {
    assert_eq!(anchor_id(""), None);
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("/about#team"), None);
    assert_eq!(anchor_id("#section2"), Some("section2"));
}

#[test]
fn ease_out_cubic_endpoints_and_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    // Ease-out front-loads the motion.
    assert!(ease_out_cubic(0.25) > 0.25);
}

#[test]
fn target_clears_header_offset() {
    // Element 500px below the viewport top while scrolled to 1000.
    assert_eq!(scroll_target(500.0, 1000.0, 80.0), 1420.0);
    assert_eq!(scroll_target(500.0, 1000.0, 0.0), 1500.0);
}

#[test]
fn animation_first_frame_sets_start_time() {
    let mut a = ScrollAnimation::new(0.0, 1000.0, 800.0);
    let f = a.sample(5_000.0);
    assert_eq!(f.y, 0.0);
    assert!(!f.finished);
    let f = a.sample(5_400.0);
    assert!((f.y - 875.0).abs() < 1e-9);
    assert!(!f.finished);
}

#[test]
fn animation_snaps_to_target_at_duration() {
    let mut a = ScrollAnimation::new(100.0, 733.3, 800.0);
    a.sample(0.0);
    let f = a.sample(800.0);
    assert!(f.finished);
    assert_eq!(f.y, 733.3);

    let mut late = ScrollAnimation::new(100.0, 733.3, 800.0);
    late.sample(0.0);
    let f = late.sample(2_000.0);
    assert!(f.finished);
    assert_eq!(f.y, 733.3);
}

#[test]
fn animation_moves_monotonically_towards_target() {
    let mut a = ScrollAnimation::new(2_000.0, 400.0, 800.0);
    let mut prev = f64::MAX;
    for i in 0..=50 {
        let f = a.sample(i as f64 * 16.0);
        assert!(f.y <= prev);
        prev = f.y;
    }
    assert_eq!(prev, 400.0);
}

#[test]
fn navigator_lands_element_at_offset_and_reports_href() {
    let mut nav = ScrollNavigator::new();
    // Element currently 1200px below the viewport top, page at the top.
    assert!(nav.begin("#section2", 0.0, 1200.0, 80.0, 800.0));

    let (ys, href) = run_to_end(&mut nav, 1_000.0);
    assert_eq!(href, "#section2");
    assert_eq!(*ys.last().unwrap(), 1120.0);
    // Element top relative to the viewport after scrolling: 1200 - 1120.
    assert_eq!(1200.0 - ys.last().unwrap(), 80.0);
    assert_eq!(nav.tick(10_000.0), ScrollTick::Idle);
}

#[test]
fn new_navigation_supersedes_running_one() {
    let mut nav = ScrollNavigator::new();
    assert!(nav.begin("#one", 0.0, 500.0, 80.0, 800.0));
    assert!(matches!(nav.tick(0.0), ScrollTick::Continue { .. }));
    assert!(matches!(nav.tick(16.0), ScrollTick::Continue { .. }));

    // The loop is already running, so no extra frame is requested.
    assert!(!nav.begin("#two", 40.0, 900.0, 80.0, 800.0));
    let (ys, href) = run_to_end(&mut nav, 32.0);
    assert_eq!(href, "#two");
    assert_eq!(*ys.last().unwrap(), 860.0);
}

#[test]
fn halt_drops_animation_and_allows_restart() {
    let mut nav = ScrollNavigator::new();
    assert!(nav.begin("#a", 0.0, 100.0, 80.0, 800.0));
    nav.halt();
    assert_eq!(nav.tick(0.0), ScrollTick::Idle);
    assert!(nav.begin("#a", 0.0, 100.0, 80.0, 800.0));
}

#[test]
fn settings_offset_depends_on_mode() {
    let eased = ScrollSettings::default();
    assert_eq!(eased.mode, ScrollMode::Eased);
    assert_eq!(eased.effective_offset(), 80.0);
    assert_eq!(eased.duration_ms, 800.0);

    let native = ScrollSettings {
        mode: ScrollMode::Native,
        ..eased
    };
    assert_eq!(native.effective_offset(), 0.0);
}

#[test]
fn scroll_mode_parse() {
    assert_eq!(ScrollMode::parse("native"), Some(ScrollMode::Native));
    assert_eq!(ScrollMode::parse("eased"), Some(ScrollMode::Eased));
    assert_eq!(ScrollMode::parse("smooth"), None);
}
