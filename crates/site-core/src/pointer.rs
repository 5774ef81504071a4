//! Pointer-driven effects: page spotlight, card hover glow and 3D tilt.

use crate::constants::*;
use crate::frame::{FrameGate, FrameHandle};
use crate::style::{fixed2, StyleTarget};
use glam::DVec2;

/// Client-space box of an element (`getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(left, top),
            size: DVec2::new(width, height),
        }
    }

    /// Pointer position as a percentage of the box, unclamped. Axes with no
    /// extent report the centre.
    pub fn percent_of(&self, client: DVec2) -> DVec2 {
        let local = client - self.origin;
        DVec2::new(
            axis_percent(local.x, self.size.x),
            axis_percent(local.y, self.size.y),
        )
    }

    /// Like [`Bounds::percent_of`], with the pointer first clamped to the box.
    pub fn clamped_percent_of(&self, client: DVec2) -> DVec2 {
        let extent = self.size.max(DVec2::ZERO);
        let local = (client - self.origin).clamp(DVec2::ZERO, extent);
        DVec2::new(
            axis_percent(local.x, extent.x),
            axis_percent(local.y, extent.y),
        )
    }
}

#[inline]
fn axis_percent(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        offset / extent * 100.0
    } else {
        GLOW_CENTER_PCT
    }
}

// ---------------- Card hover glow ----------------

/// Publish the glow position immediately; no frame throttling.
pub fn glow_move(card: &impl StyleTarget, bounds: Bounds, client: DVec2) {
    let pct = bounds.percent_of(client);
    card.set_property(VAR_CX, &format!("{}%", pct.x));
    card.set_property(VAR_CY, &format!("{}%", pct.y));
}

pub fn glow_leave(card: &impl StyleTarget) {
    let center = format!("{}%", GLOW_CENTER_PCT);
    card.set_property(VAR_CX, &center);
    card.set_property(VAR_CY, &center);
}

// ---------------- Spotlight ----------------

/// Page-global pointer position published in CSS pixels once per frame.
#[derive(Default)]
pub struct Spotlight {
    gate: FrameGate<DVec2>,
}

impl Spotlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when a frame must be requested.
    pub fn on_move(&mut self, client: DVec2) -> bool {
        self.gate.record(client)
    }

    pub fn arm(&mut self, handle: FrameHandle) {
        self.gate.arm(handle);
    }

    pub fn on_frame(&mut self, root: &impl StyleTarget) {
        if let Some(p) = self.gate.fire() {
            root.set_property(VAR_SPOT_X, &format!("{}px", p.x));
            root.set_property(VAR_SPOT_Y, &format!("{}px", p.y));
        }
    }

    /// Forget the pending frame when it could not be scheduled.
    pub fn abandon(&mut self) {
        _ = self.gate.cancel();
    }

    /// Clear both properties; returns the frame to cancel, if one was pending.
    pub fn on_leave(&mut self, root: &impl StyleTarget) -> Option<FrameHandle> {
        root.remove_property(VAR_SPOT_X);
        root.remove_property(VAR_SPOT_Y);
        self.gate.cancel()
    }
}

// ---------------- Tilt ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltSample {
    pub rx: f64,
    pub ry: f64,
    pub px: f64,
    pub py: f64,
}

impl TiltSample {
    /// Rotation and position for `client` over `bounds`, at most
    /// `max_deg / 2` degrees on each axis.
    pub fn compute(bounds: Bounds, client: DVec2, max_deg: f64) -> TiltSample {
        let pct = bounds.clamped_percent_of(client);
        let n = pct / 100.0 - DVec2::splat(0.5);
        TiltSample {
            rx: -n.y * max_deg,
            ry: n.x * max_deg,
            px: pct.x,
            py: pct.y,
        }
    }

    /// The four published properties, rounded to two decimals.
    pub fn style_vars(&self) -> [(&'static str, String); 4] {
        [
            (VAR_RX, format!("{}deg", fixed2(self.rx))),
            (VAR_RY, format!("{}deg", fixed2(self.ry))),
            (VAR_CX, format!("{}%", fixed2(self.px))),
            (VAR_CY, format!("{}%", fixed2(self.py))),
        ]
    }
}

/// Per-element tilt state: latest pointer position and pending frame.
pub struct Tilt {
    max_deg: f64,
    gate: FrameGate<DVec2>,
}

impl Tilt {
    pub fn new(max_deg: f64) -> Self {
        Self {
            max_deg,
            gate: FrameGate::new(),
        }
    }

    pub fn on_enter(&mut self, el: &impl StyleTarget) {
        el.add_class(CLASS_TILTING);
    }

    /// Returns `true` when a frame must be requested.
    pub fn on_move(&mut self, client: DVec2) -> bool {
        self.gate.record(client)
    }

    pub fn arm(&mut self, handle: FrameHandle) {
        self.gate.arm(handle);
    }

    /// Frame callback: publish the sample for the latest pointer position.
    pub fn on_frame(&mut self, el: &impl StyleTarget, bounds: Bounds) -> Option<TiltSample> {
        let client = self.gate.fire()?;
        let sample = TiltSample::compute(bounds, client, self.max_deg);
        for (name, value) in sample.style_vars() {
            el.set_property(name, &value);
        }
        Some(sample)
    }

    /// Remove the marker class and every published property, discard the
    /// recorded position and return the frame to cancel.
    pub fn on_leave(&mut self, el: &impl StyleTarget) -> Option<FrameHandle> {
        el.remove_class(CLASS_TILTING);
        for name in [VAR_RX, VAR_RY, VAR_CX, VAR_CY] {
            el.remove_property(name);
        }
        self.gate.cancel()
    }

    pub fn abandon(&mut self) {
        _ = self.gate.cancel();
    }
}
