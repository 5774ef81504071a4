//! Light/dark theme model, persistence contract and controller.

use crate::constants::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Accepts exactly `"light"` or `"dark"`.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Key-value surface the theme flag is persisted to. Every call may fail.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// System-level signals the page can query but does not own.
///
/// Every field is `false` when the host cannot answer the query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ambient {
    pub prefers_light: bool,
    pub reduced_motion: bool,
    pub fine_pointer: bool,
    pub hover: bool,
}

impl Ambient {
    /// Page-global animation (spotlight, reveal, stagger) is allowed.
    pub fn motion_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// Element-local pointer effects (card glow, tilt) are allowed.
    pub fn element_effects_enabled(&self) -> bool {
        !self.reduced_motion && self.fine_pointer && self.hover
    }
}

type ThemeHook = Box<dyn FnMut(Theme)>;

/// Holder for the applied theme with change notification.
#[derive(Default)]
pub struct ThemeState {
    current: Option<Theme>,
    hooks: Vec<ThemeHook>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Theme> {
        self.current
    }

    /// Store `theme` and run every subscribed hook with it.
    pub fn set(&mut self, theme: Theme) {
        self.current = Some(theme);
        for hook in self.hooks.iter_mut() {
            hook(theme);
        }
    }

    pub fn subscribe(&mut self, hook: impl FnMut(Theme) + 'static) {
        self.hooks.push(Box::new(hook));
    }
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    state: ThemeState,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, state: ThemeState) -> Self {
        Self { store, state }
    }

    /// Persisted flag first, then the ambient color-scheme signal, then dark.
    pub fn resolve_initial(&self, ambient: &Ambient) -> Theme {
        let saved = match self.store.load(THEME_STORAGE_KEY) {
            Ok(v) => v,
            Err(e) => {
                log::debug!("[theme] read skipped: {}", e);
                None
            }
        };
        if let Some(theme) = saved.as_deref().and_then(Theme::parse) {
            return theme;
        }
        if ambient.prefers_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Publish `theme` and persist it best-effort.
    pub fn apply(&mut self, theme: Theme) {
        self.state.set(theme);
        if let Err(e) = self.store.save(THEME_STORAGE_KEY, theme.as_str()) {
            log::debug!("[theme] persist skipped: {}", e);
        }
    }

    /// Flip the value currently applied to the document.
    pub fn toggle(&mut self, applied: Option<&str>) -> Theme {
        let next = if applied == Some("light") {
            Theme::Dark
        } else {
            Theme::Light
        };
        self.apply(next);
        next
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }
}
