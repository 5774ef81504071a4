pub mod pointer;

pub use pointer::{wire_card_hover, wire_spotlight, wire_tilt};
