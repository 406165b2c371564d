#![forbid(unsafe_code)]

//! Runtime for folio: the program loop, scroll and section state, and
//! terminal-side effects.

pub mod clipboard;
pub mod program;
pub mod scroll;
pub mod tracker;
pub mod transient;

pub use clipboard::copy_osc52;
pub use program::{Cmd, Model, Program, ProgramConfig};
pub use scroll::{ChromeThresholds, ScrollAnimation, ScrollState};
pub use tracker::{SectionBounds, SectionId, SectionTracker, TrackerConfig, Viewport};
pub use transient::TransientFlag;
