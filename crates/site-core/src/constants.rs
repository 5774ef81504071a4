// Tuning constants shared by the core and the web frontend.

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "theme";

// Anchor scrolling
pub const SCROLL_HEADER_OFFSET_PX: f64 = 80.0; // clears the fixed header
pub const SCROLL_DURATION_MS: f64 = 800.0;

// Reveal observer
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -8% 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Staggered card groups
pub const STAGGER_STEP_MS: u32 = 100;

// Tilt
pub const TILT_MAX_DEG: f64 = 8.0;
pub const TILT_MAX_DEG_LIMIT: f64 = 45.0; // upper bound accepted from config

// Header shadow
pub const HEADER_SHADOW_THRESHOLD_PX: f64 = 50.0;
pub const HEADER_SHADOW: &str = "0 1px 3px rgba(0, 0, 0, 0.08)";

// Neutral glow position (percent)
pub const GLOW_CENTER_PCT: f64 = 50.0;

// Published CSS custom properties
pub const VAR_SPOT_X: &str = "--spot-x";
pub const VAR_SPOT_Y: &str = "--spot-y";
pub const VAR_CX: &str = "--cx";
pub const VAR_CY: &str = "--cy";
pub const VAR_RX: &str = "--rx";
pub const VAR_RY: &str = "--ry";

// Visual state classes
pub const CLASS_REVEALED: &str = "is-revealed";
pub const CLASS_TILTING: &str = "is-tilting";
