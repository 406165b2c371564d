#![forbid(unsafe_code)]

//! Core widgets for folio.

pub mod barchart;
pub mod block;
pub mod navbar;
pub mod paragraph;
pub mod scrollbar;
pub mod text;

use folio_core::geometry::Rect;
use folio_render::buffer::Buffer;
use folio_render::style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Draw a text run at `(x, y)` clipped at `max_x`; returns the next column.
pub fn draw_text_span(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
    buf.set_string(x, y, text, style, max_x)
}

/// Apply a style over a whole area.
pub fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    buf.set_style(area, style);
}
