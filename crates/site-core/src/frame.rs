//! Per-frame coalescing of high-frequency input.
//!
//! A [`FrameGate`] holds the most recent input value and whether an
//! animation frame has already been requested for it. Callers request a
//! frame only when [`FrameGate::record`] returns `true`; any further input
//! before the frame fires just overwrites the stored value.

/// Handle returned by `requestAnimationFrame`.
pub type FrameHandle = i32;

#[derive(Debug)]
pub struct FrameGate<T> {
    latest: Option<T>,
    pending: bool,
    handle: Option<FrameHandle>,
}

impl<T> Default for FrameGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameGate<T> {
    pub const fn new() -> Self {
        Self {
            latest: None,
            pending: false,
            handle: None,
        }
    }

    /// Store `value` as the latest input. Returns `true` when no frame is
    /// pending yet and the caller must schedule one.
    pub fn record(&mut self, value: T) -> bool {
        self.latest = Some(value);
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Remember the handle of the frame scheduled after `record`.
    pub fn arm(&mut self, handle: FrameHandle) {
        if self.pending {
            self.handle = Some(handle);
        }
    }

    /// Called from the frame callback. Clears the pending state and hands
    /// back the latest input, if any survived.
    pub fn fire(&mut self) -> Option<T> {
        self.pending = false;
        self.handle = None;
        self.latest.take()
    }

    /// Drop the recorded input and the pending frame. Returns the handle the
    /// caller should pass to `cancelAnimationFrame`.
    pub fn cancel(&mut self) -> Option<FrameHandle> {
        self.latest = None;
        self.pending = false;
        self.handle.take()
    }
}
