//! Same-page anchor scrolling: target resolution and the eased animation.

use crate::constants::{SCROLL_DURATION_MS, SCROLL_HEADER_OFFSET_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// Manual cubic ease-out driven by animation frames, offset for the header.
    #[default]
    Eased,
    /// Platform smooth scroll with top alignment and no offset.
    Native,
}

impl ScrollMode {
    pub fn parse(value: &str) -> Option<ScrollMode> {
        match value {
            "eased" => Some(ScrollMode::Eased),
            "native" => Some(ScrollMode::Native),
            _ => None,
        }
    }
}

/// Element id referenced by an in-page `href`. Empty and bare `#` hrefs
/// yield `None`.
#[inline]
pub fn anchor_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Absolute document offset that puts an element `offset` pixels below the
/// viewport top. `element_top` is relative to the viewport.
#[inline]
pub fn scroll_target(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
    element_top + scroll_y - offset
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub y: f64,
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct ScrollAnimation {
    start_y: f64,
    target_y: f64,
    duration_ms: f64,
    start_ts: Option<f64>,
}

impl ScrollAnimation {
    pub fn new(start_y: f64, target_y: f64, duration_ms: f64) -> Self {
        Self {
            start_y,
            target_y,
            duration_ms,
            start_ts: None,
        }
    }

    /// Position for the frame at `now_ms`. The first sample fixes the start
    /// timestamp.
    pub fn sample(&mut self, now_ms: f64) -> ScrollFrame {
        let start = *self.start_ts.get_or_insert(now_ms);
        let elapsed = now_ms - start;
        let progress = if self.duration_ms > 0.0 {
            (elapsed / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let finished = elapsed >= self.duration_ms;
        let y = if finished {
            self.target_y
        } else {
            self.start_y + (self.target_y - self.start_y) * ease_out_cubic(progress)
        };
        ScrollFrame { y, finished }
    }
}

/// What the frame callback should do after [`ScrollNavigator::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollTick {
    /// Nothing is animating; the loop stops.
    Idle,
    /// Scroll to `y` and request another frame.
    Continue { y: f64 },
    /// Scroll to `y`, then push `href` into history.
    Finish { y: f64, href: String },
}

/// Owns the running animation and the single frame loop driving it.
/// Starting a navigation replaces any animation in flight, so a superseded
/// navigation never reaches its history update.
#[derive(Debug, Default)]
pub struct ScrollNavigator {
    active: Option<(ScrollAnimation, String)>,
    ticking: bool,
}

impl ScrollNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating from `start_y` towards the element whose
    /// viewport-relative top is `element_top`. Returns `true` when the
    /// caller must request a frame.
    pub fn begin(
        &mut self,
        href: impl Into<String>,
        start_y: f64,
        element_top: f64,
        offset: f64,
        duration_ms: f64,
    ) -> bool {
        let target = scroll_target(element_top, start_y, offset);
        self.active = Some((ScrollAnimation::new(start_y, target, duration_ms), href.into()));
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Advance the animation for the frame at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> ScrollTick {
        self.ticking = false;
        let Some((anim, _)) = self.active.as_mut() else {
            return ScrollTick::Idle;
        };
        let frame = anim.sample(now_ms);
        if frame.finished {
            let href = self.active.take().map(|(_, h)| h).unwrap_or_default();
            return ScrollTick::Finish { y: frame.y, href };
        }
        self.ticking = true;
        ScrollTick::Continue { y: frame.y }
    }

    /// Drop the animation, e.g. when no frame could be scheduled.
    pub fn halt(&mut self) {
        self.active = None;
        self.ticking = false;
    }
}

/// Tunables for anchor navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSettings {
    pub mode: ScrollMode,
    pub offset_px: f64,
    pub duration_ms: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            mode: ScrollMode::Eased,
            offset_px: SCROLL_HEADER_OFFSET_PX,
            duration_ms: SCROLL_DURATION_MS,
        }
    }
}

impl ScrollSettings {
    /// Offset from the viewport top where the target lands.
    pub fn effective_offset(&self) -> f64 {
        match self.mode {
            ScrollMode::Eased => self.offset_px,
            ScrollMode::Native => 0.0,
        }
    }
}
