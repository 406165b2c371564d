#![forbid(unsafe_code)]

//! Vertical scrollbar drawn in the rightmost column of its area.

use folio_core::geometry::Rect;
use folio_render::buffer::Buffer;
use folio_render::style::Style;

use crate::Widget;

/// Scroll position for a viewport over taller content.
///
/// Hidden entirely when the content fits in the viewport.
#[derive(Debug, Clone, Copy)]
pub struct ScrollBar {
    content_len: u16,
    viewport_len: u16,
    offset: u16,
    track_style: Style,
    thumb_style: Style,
}

impl ScrollBar {
    #[must_use]
    pub fn new(content_len: u16, viewport_len: u16, offset: u16) -> Self {
        Self {
            content_len,
            viewport_len,
            offset,
            track_style: Style::default(),
            thumb_style: Style::default(),
        }
    }

    #[must_use]
    pub fn track_style(mut self, style: Style) -> Self {
        self.track_style = style;
        self
    }

    #[must_use]
    pub fn thumb_style(mut self, style: Style) -> Self {
        self.thumb_style = style;
        self
    }

    /// Thumb placement as `(start_row, len)` within a track of `track_len`
    /// rows, or `None` when no bar should be drawn.
    fn thumb(&self, track_len: u16) -> Option<(u16, u16)> {
        if track_len == 0 || self.content_len <= self.viewport_len {
            return None;
        }
        let content = u32::from(self.content_len);
        let track = u32::from(track_len);
        let len = ((u32::from(self.viewport_len) * track / content) as u16).max(1);

        let max_offset = self.content_len - self.viewport_len;
        let offset = self.offset.min(max_offset);
        let span = track - u32::from(len);
        let start = (u32::from(offset) * span / u32::from(max_offset)) as u16;
        Some((start, len))
    }
}

impl Widget for ScrollBar {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let Some((start, len)) = self.thumb(area.height) else {
            return;
        };
        let x = area.right() - 1;
        for row in 0..area.height {
            let (glyph, style) = if row >= start && row < start + len {
                ("█", self.thumb_style)
            } else {
                ("│", self.track_style)
            };
            buf.set_string(x, area.y + row, glyph, style, area.right());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(buf: &Buffer, x: u16, height: u16) -> String {
        (0..height)
            .filter_map(|y| buf.get(x, y).map(|c| c.ch))
            .collect()
    }

    #[test]
    fn hidden_when_content_fits() {
        let bar = ScrollBar::new(10, 20, 0);
        let mut buf = Buffer::new(5, 20);
        bar.render(Rect::from_size(5, 20), &mut buf);
        assert!(buf.get(4, 0).unwrap().is_empty());
    }

    #[test]
    fn thumb_at_top_when_offset_zero() {
        let bar = ScrollBar::new(40, 10, 0);
        let mut buf = Buffer::new(5, 10);
        bar.render(Rect::from_size(5, 10), &mut buf);
        let col = column(&buf, 4, 10);
        assert!(col.starts_with('█'));
        assert!(col.ends_with('│'));
    }

    #[test]
    fn thumb_at_bottom_when_fully_scrolled() {
        let bar = ScrollBar::new(40, 10, 30);
        let mut buf = Buffer::new(5, 10);
        bar.render(Rect::from_size(5, 10), &mut buf);
        let col = column(&buf, 4, 10);
        assert!(col.starts_with('│'));
        assert!(col.ends_with('█'));
    }

    #[test]
    fn thumb_never_shorter_than_one_row() {
        let bar = ScrollBar::new(u16::MAX, 3, 0);
        let mut buf = Buffer::new(2, 3);
        bar.render(Rect::from_size(2, 3), &mut buf);
        assert_eq!(column(&buf, 1, 3).matches('█').count(), 1);
    }

    #[test]
    fn offset_beyond_range_is_clamped() {
        let bar = ScrollBar::new(40, 10, 500);
        let mut buf = Buffer::new(5, 10);
        bar.render(Rect::from_size(5, 10), &mut buf);
        assert!(column(&buf, 4, 10).ends_with('█'));
    }
}
