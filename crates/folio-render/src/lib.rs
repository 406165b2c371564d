#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, styles, and ANSI presentation.

pub mod buffer;
pub mod cell;
pub mod frame;
pub mod presenter;
pub mod style;

pub use buffer::Buffer;
pub use cell::{Cell, PackedRgba, StyleFlags};
pub use frame::Frame;
pub use presenter::Presenter;
pub use style::Style;
