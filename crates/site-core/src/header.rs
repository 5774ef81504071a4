use crate::constants::HEADER_SHADOW;
use crate::frame::{FrameGate, FrameHandle};
use crate::style::StyleTarget;

/// `box-shadow` value for the header at vertical offset `scroll_y`.
#[inline]
pub fn header_shadow(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        HEADER_SHADOW
    } else {
        "none"
    }
}

/// Scroll-driven header shadow, evaluated at most once per frame.
pub struct HeaderShadow {
    threshold: f64,
    ticking: FrameGate<()>,
}

impl HeaderShadow {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ticking: FrameGate::new(),
        }
    }

    /// Returns `true` when a frame must be requested.
    pub fn on_scroll(&mut self) -> bool {
        self.ticking.record(())
    }

    pub fn arm(&mut self, handle: FrameHandle) {
        self.ticking.arm(handle);
    }

    pub fn abandon(&mut self) {
        _ = self.ticking.cancel();
    }

    pub fn on_frame(&mut self, header: &impl StyleTarget, scroll_y: f64) {
        _ = self.ticking.fire();
        self.apply(header, scroll_y);
    }

    pub fn apply(&self, header: &impl StyleTarget, scroll_y: f64) {
        header.set_property("box-shadow", header_shadow(scroll_y, self.threshold));
    }
}
