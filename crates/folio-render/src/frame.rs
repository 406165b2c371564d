#![forbid(unsafe_code)]

//! Frame: the render target for one view pass.
//!
//! A thin wrapper over [`Buffer`]; `Model::view` draws into it, the
//! presenter flushes it. Kept separate from `Buffer` so per-pass metadata
//! can ride along without widening the widget API.

use crate::buffer::Buffer;

/// The target of a single render pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid.
    pub buffer: Buffer,
}

impl Frame {
    /// Create a frame with an empty buffer.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
        }
    }

    /// Frame width in columns.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;

    #[test]
    fn frame_reports_buffer_size() {
        let frame = Frame::new(80, 24);
        assert_eq!(frame.width(), 80);
        assert_eq!(frame.height(), 24);
    }
}
