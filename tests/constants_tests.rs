// Host-side tests for the DOM hooks and tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use site_core::constants::*;

#[test]
fn dataset_keys_are_camel_case_without_prefix() {
    for key in [DATA_THEME, DATA_MOTION, DATA_TILT] {
        assert!(!key.starts_with("data-"), "{}", key);
        assert!(!key.contains('-'), "{}", key);
    }
}

#[test]
fn selectors_target_expected_hooks() {
    assert_eq!(SEL_THEME_TOGGLE, "[data-theme-toggle]");
    assert_eq!(SEL_REVEAL, "[data-reveal]");
    assert_eq!(SEL_YEAR, "[data-year]");
    assert!(SEL_ANCHORS.starts_with("a[href^="));
    assert!(ATTR_REVEAL_DELAY.starts_with("data-"));
    // Every glow card is also a tilt target.
    assert!(SEL_TILT_TARGETS.contains(".card"));
    assert!(SEL_GLOW_CARDS.contains(".card"));
}

#[test]
fn media_queries_are_parenthesised() {
    for q in [MQ_PREFERS_LIGHT, MQ_REDUCED_MOTION, MQ_FINE_POINTER, MQ_HOVER] {
        assert!(q.starts_with('(') && q.ends_with(')'), "{}", q);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_within_reasonable_bounds() {
    assert!(SCROLL_DURATION_MS > 0.0);
    assert!(SCROLL_HEADER_OFFSET_PX >= 0.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(TILT_MAX_DEG > 0.0 && TILT_MAX_DEG <= TILT_MAX_DEG_LIMIT);
    assert!(HEADER_SHADOW_THRESHOLD_PX > 0.0);
    assert!(STAGGER_STEP_MS > 0);
    assert_eq!(GLOW_CENTER_PCT, 50.0);
}

#[test]
fn css_custom_properties_use_double_dash() {
    for v in [VAR_SPOT_X, VAR_SPOT_Y, VAR_CX, VAR_CY, VAR_RX, VAR_RY] {
        assert!(v.starts_with("--"), "{}", v);
    }
}
