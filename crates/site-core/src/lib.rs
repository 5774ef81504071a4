pub mod config;
pub mod constants;
pub mod frame;
pub mod header;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod style;
pub mod theme;

pub use config::*;
pub use frame::*;
pub use header::*;
pub use pointer::*;
pub use reveal::*;
pub use scroll::*;
pub use style::*;
pub use theme::*;
