//! One-shot reveal of marked elements and stagger delays for card groups.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionMode {
    Full,
    Reduced,
}

impl MotionMode {
    pub fn from_reduced(reduced: bool) -> MotionMode {
        if reduced {
            MotionMode::Reduced
        } else {
            MotionMode::Full
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MotionMode::Full => "full",
            MotionMode::Reduced => "reduced",
        }
    }
}

/// Parse a `data-reveal-delay` value in milliseconds. Missing, negative or
/// non-numeric values mean no delay.
pub fn parse_delay(attr: Option<&str>) -> u32 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    /// Intersected and unobserved; waiting for its delay to elapse.
    Scheduled,
    Revealed,
}

#[derive(Clone, Debug)]
struct RevealTarget {
    delay_ms: u32,
    state: RevealState,
}

pub struct RevealEngine {
    mode: MotionMode,
    targets: Vec<RevealTarget>,
}

impl RevealEngine {
    pub fn new(mode: MotionMode, delays: impl IntoIterator<Item = u32>) -> Self {
        let targets = delays
            .into_iter()
            .map(|delay_ms| RevealTarget {
                delay_ms,
                state: RevealState::Hidden,
            })
            .collect();
        Self { mode, targets }
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    /// An observer is only needed with full motion and at least one target.
    pub fn should_observe(&self) -> bool {
        self.mode == MotionMode::Full && !self.targets.is_empty()
    }

    /// Handle an intersection entry for target `index`. Returns the delay
    /// after which the target must be revealed, exactly once per target.
    pub fn on_entry(&mut self, index: usize, is_intersecting: bool) -> Option<u32> {
        if self.mode == MotionMode::Reduced || !is_intersecting {
            return None;
        }
        let target = self.targets.get_mut(index)?;
        if target.state != RevealState::Hidden {
            return None;
        }
        target.state = RevealState::Scheduled;
        Some(target.delay_ms)
    }

    /// Mark target `index` revealed. Returns `true` only on the transition.
    pub fn complete(&mut self, index: usize) -> bool {
        match self.targets.get_mut(index) {
            Some(t) if t.state == RevealState::Scheduled => {
                t.state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.targets.get(index).map(|t| t.state)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.state(index) == Some(RevealState::Revealed)
    }
}

/// `transition-delay` value for the child at `index` of a card group.
#[inline]
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u64 * step_ms as u64)
}

pub fn stagger_delays(count: usize, step_ms: u32) -> Vec<String> {
    (0..count).map(|i| stagger_delay(i, step_ms)).collect()
}
