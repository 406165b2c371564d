#![forbid(unsafe_code)]

//! Presenter: state-tracked ANSI emission.
//!
//! Transforms a rendered [`Buffer`] into terminal output with two
//! economies: rows identical to the previously presented frame are skipped
//! entirely, and style sequences are only emitted when the paint actually
//! changes between cells. All output goes through one buffered writer and
//! is flushed once per frame.

use std::io::{self, BufWriter, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;
use crate::cell::{Cell, PackedRgba, StyleFlags};

/// Size of the internal write buffer (64KB).
const BUFFER_CAPACITY: usize = 64 * 1024;

/// Paint state for style-change elision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Paint {
    fg: PackedRgba,
    bg: PackedRgba,
    attrs: StyleFlags,
}

impl Paint {
    fn of(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

/// State-tracked ANSI presenter.
pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
    /// Previously presented frame, for row-level diffing.
    prev: Option<Buffer>,
    /// Current terminal paint (None = unknown/reset).
    paint: Option<Paint>,
}

impl<W: Write> Presenter<W> {
    /// Create a presenter over a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            prev: None,
            paint: None,
        }
    }

    /// Present a frame buffer. Unchanged rows are not re-emitted.
    pub fn present(&mut self, buffer: &Buffer) -> io::Result<()> {
        let full_repaint = match &self.prev {
            Some(prev) => prev.width() != buffer.width() || prev.height() != buffer.height(),
            None => true,
        };
        if full_repaint {
            self.prev = None;
            self.paint = None;
        }

        for y in 0..buffer.height() {
            let changed = match &self.prev {
                Some(prev) => prev.row(y) != buffer.row(y),
                None => true,
            };
            if changed {
                self.emit_row(buffer, y)?;
            }
        }

        queue!(self.writer, ResetColor, SetAttribute(Attribute::Reset))?;
        self.paint = None;
        self.writer.flush()?;
        self.prev = Some(buffer.clone());
        Ok(())
    }

    /// Forget the previously presented frame, forcing a full repaint.
    pub fn invalidate(&mut self) {
        self.prev = None;
        self.paint = None;
    }

    /// Direct access to the underlying writer, for out-of-band sequences
    /// (OSC 52 clipboard writes). Callers flush themselves.
    pub fn writer_mut(&mut self) -> &mut BufWriter<W> {
        &mut self.writer
    }

    fn emit_row(&mut self, buffer: &Buffer, y: u16) -> io::Result<()> {
        queue!(self.writer, MoveTo(0, y))?;
        let mut x = 0;
        while x < buffer.width() {
            let Some(cell) = buffer.get(x, y) else {
                break;
            };
            let paint = Paint::of(cell);
            if self.paint != Some(paint) {
                self.emit_paint(paint)?;
                self.paint = Some(paint);
            }
            queue!(self.writer, Print(cell.ch))?;
            // A wide glyph advances the cursor two columns; the buffer's
            // continuation cell must not be printed on top of it.
            let w = cell.ch.width().unwrap_or(1).max(1) as u16;
            x += w;
        }
        Ok(())
    }

    fn emit_paint(&mut self, paint: Paint) -> io::Result<()> {
        queue!(self.writer, SetAttribute(Attribute::Reset))?;
        if paint.fg.is_opaque() {
            queue!(
                self.writer,
                SetForegroundColor(Color::Rgb {
                    r: paint.fg.r(),
                    g: paint.fg.g(),
                    b: paint.fg.b(),
                })
            )?;
        } else {
            queue!(self.writer, SetForegroundColor(Color::Reset))?;
        }
        if paint.bg.is_opaque() {
            queue!(
                self.writer,
                SetBackgroundColor(Color::Rgb {
                    r: paint.bg.r(),
                    g: paint.bg.g(),
                    b: paint.bg.b(),
                })
            )?;
        } else {
            queue!(self.writer, SetBackgroundColor(Color::Reset))?;
        }
        if paint.attrs.contains(StyleFlags::BOLD) {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        if paint.attrs.contains(StyleFlags::DIM) {
            queue!(self.writer, SetAttribute(Attribute::Dim))?;
        }
        if paint.attrs.contains(StyleFlags::ITALIC) {
            queue!(self.writer, SetAttribute(Attribute::Italic))?;
        }
        if paint.attrs.contains(StyleFlags::UNDERLINE) {
            queue!(self.writer, SetAttribute(Attribute::Underlined))?;
        }
        if paint.attrs.contains(StyleFlags::REVERSE) {
            queue!(self.writer, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}
