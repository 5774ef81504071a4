//! Presentation sink used by the effects in this crate.
//!
//! The web frontend implements [`StyleTarget`] for DOM elements; host-side
//! tests implement it with a recording fake.

pub trait StyleTarget {
    fn set_property(&self, name: &str, value: &str);
    fn remove_property(&self, name: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// Format with two decimals. Ties round away from zero, and a result that
/// rounds to zero prints as `0.00` rather than `-0.00`.
#[inline]
pub fn fixed2(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{:.2}", rounded + 0.0)
}
