// DOM hooks the page exposes to this module.
//
// Selectors and attribute names are owned by the host page's markup; they
// are collected here so the wiring code never spells them inline.

// Theme
pub const SEL_THEME_TOGGLE: &str = "[data-theme-toggle]";
pub const DATA_THEME: &str = "theme"; // dataset key on <html>

// Anchor navigation
pub const SEL_ANCHORS: &str = "a[href^=\"#\"]";

// Footer year stamp
pub const SEL_YEAR: &str = "[data-year]";

// Reveal
pub const SEL_REVEAL: &str = "[data-reveal]";
pub const ATTR_REVEAL_DELAY: &str = "data-reveal-delay";
pub const DATA_MOTION: &str = "motion"; // dataset key on <html>

// Card groups and pointer effects
pub const SEL_STAGGER_GROUPS: &str = ".cards, .hero-points";
pub const SEL_GLOW_CARDS: &str = ".card, .hero-point";
pub const SEL_TILT_TARGETS: &str = ".card, .about-card, .kv--table";
pub const DATA_TILT: &str = "tilt";

// Header
pub const SEL_HEADER: &str = ".site-header";

// Media queries
pub const MQ_PREFERS_LIGHT: &str = "(prefers-color-scheme: light)";
pub const MQ_REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";
pub const MQ_FINE_POINTER: &str = "(pointer: fine)";
pub const MQ_HOVER: &str = "(hover: hover)";
