//! Effect configuration: defaults from `constants.rs`, with optional
//! overrides read from the root element's dataset.

use crate::constants::*;
use crate::scroll::{ScrollMode, ScrollSettings};
use log::LevelFilter;

/// Dataset keys (camelCase, as exposed by `HTMLElement.dataset`).
pub const KEY_SCROLL: &str = "fxScroll";
pub const KEY_TILT: &str = "fxTilt";
pub const KEY_LOG: &str = "fxLog";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: unrecognised value {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("{key}: {value} is outside 0..={max}")]
    OutOfRange {
        key: &'static str,
        value: f64,
        max: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub scroll: ScrollSettings,
    pub tilt_max_deg: f64,
    pub header_shadow_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_threshold: f64,
    pub stagger_step_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollSettings::default(),
            tilt_max_deg: TILT_MAX_DEG,
            header_shadow_threshold: HEADER_SHADOW_THRESHOLD_PX,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
            reveal_threshold: REVEAL_THRESHOLD,
            stagger_step_ms: STAGGER_STEP_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl FxConfig {
    /// Build a config from defaults plus whatever `lookup` returns for the
    /// known keys. Rejected values keep their default and are reported.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (FxConfig, Vec<ConfigError>) {
        let mut cfg = FxConfig::default();
        let mut errors = Vec::new();

        if let Some(raw) = lookup(KEY_SCROLL) {
            match ScrollMode::parse(raw.trim()) {
                Some(mode) => cfg.scroll.mode = mode,
                None => errors.push(ConfigError::Invalid {
                    key: KEY_SCROLL,
                    value: raw,
                }),
            }
        }

        if let Some(raw) = lookup(KEY_TILT) {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && (0.0..=TILT_MAX_DEG_LIMIT).contains(&v) => {
                    cfg.tilt_max_deg = v
                }
                Ok(v) => errors.push(ConfigError::OutOfRange {
                    key: KEY_TILT,
                    value: v,
                    max: TILT_MAX_DEG_LIMIT,
                }),
                Err(_) => errors.push(ConfigError::Invalid {
                    key: KEY_TILT,
                    value: raw,
                }),
            }
        }

        if let Some(raw) = lookup(KEY_LOG) {
            match raw.trim().parse::<LevelFilter>() {
                Ok(level) => cfg.log_level = level,
                Err(_) => errors.push(ConfigError::Invalid {
                    key: KEY_LOG,
                    value: raw,
                }),
            }
        }

        (cfg, errors)
    }
}
