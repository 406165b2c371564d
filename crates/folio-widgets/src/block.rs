#![forbid(unsafe_code)]

//! Block: bordered container with an optional title.

use bitflags::bitflags;
use folio_core::geometry::{Rect, Sides};
use folio_render::buffer::Buffer;
use folio_render::cell::Cell;
use folio_render::style::Style;

use crate::Widget;

bitflags! {
    /// Which edges of the block get a border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Borders: u8 {
        const TOP    = 1 << 0;
        const RIGHT  = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT   = 1 << 3;
        const ALL    = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

/// Border glyph family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    #[default]
    Plain,
    Rounded,
    Double,
    Thick,
}

impl BorderType {
    /// (horizontal, vertical, top-left, top-right, bottom-left, bottom-right)
    const fn glyphs(self) -> (char, char, char, char, char, char) {
        match self {
            Self::Plain => ('─', '│', '┌', '┐', '└', '┘'),
            Self::Rounded => ('─', '│', '╭', '╮', '╰', '╯'),
            Self::Double => ('═', '║', '╔', '╗', '╚', '╝'),
            Self::Thick => ('━', '┃', '┏', '┓', '┗', '┛'),
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A bordered container.
#[derive(Debug, Clone, Default)]
pub struct Block<'a> {
    borders: Borders,
    border_type: BorderType,
    title: Option<&'a str>,
    title_alignment: Alignment,
    style: Style,
}

impl Default for Borders {
    fn default() -> Self {
        Borders::empty()
    }
}

impl<'a> Block<'a> {
    /// Borderless, untitled block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select which edges carry a border.
    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Select the border glyph family.
    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Title drawn on the top border.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Title alignment on the top border.
    #[must_use]
    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    /// Style for borders and title.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The area remaining inside the borders.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        area.inner(Sides {
            top: u16::from(self.borders.contains(Borders::TOP)),
            right: u16::from(self.borders.contains(Borders::RIGHT)),
            bottom: u16::from(self.borders.contains(Borders::BOTTOM)),
            left: u16::from(self.borders.contains(Borders::LEFT)),
        })
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let (h, v, tl, tr, bl, br) = self.border_type.glyphs();
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        let mut put = |x: u16, y: u16, ch: char| {
            let mut cell = Cell::from_char(ch);
            self.style.apply(&mut cell);
            buf.set(x, y, cell);
        };

        if self.borders.contains(Borders::TOP) {
            for x in area.x..=right {
                put(x, area.y, h);
            }
        }
        if self.borders.contains(Borders::BOTTOM) && area.height > 1 {
            for x in area.x..=right {
                put(x, bottom, h);
            }
        }
        if self.borders.contains(Borders::LEFT) {
            for y in area.y..=bottom {
                put(area.x, y, v);
            }
        }
        if self.borders.contains(Borders::RIGHT) && area.width > 1 {
            for y in area.y..=bottom {
                put(right, y, v);
            }
        }
        if self.borders.contains(Borders::TOP | Borders::LEFT) {
            put(area.x, area.y, tl);
        }
        if self.borders.contains(Borders::TOP | Borders::RIGHT) {
            put(right, area.y, tr);
        }
        if self.borders.contains(Borders::BOTTOM | Borders::LEFT) {
            put(area.x, bottom, bl);
        }
        if self.borders.contains(Borders::BOTTOM | Borders::RIGHT) {
            put(right, bottom, br);
        }

        if let Some(title) = self.title {
            if self.borders.contains(Borders::TOP) && area.width > 4 {
                use unicode_width::UnicodeWidthStr;
                let avail = area.width - 4;
                let w = (title.width() as u16).min(avail);
                let x = match self.title_alignment {
                    Alignment::Left => area.x + 2,
                    Alignment::Center => area.x + (area.width - w) / 2,
                    Alignment::Right => right.saturating_sub(1 + w),
                };
                buf.set_string(x, area.y, title, self.style, x + w);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_shrinks_by_borders() {
        let block = Block::new().borders(Borders::ALL);
        assert_eq!(block.inner(Rect::new(0, 0, 10, 5)), Rect::new(1, 1, 8, 3));
    }

    #[test]
    fn inner_without_borders_is_identity() {
        let block = Block::new();
        assert_eq!(block.inner(Rect::new(2, 2, 5, 5)), Rect::new(2, 2, 5, 5));
    }

    #[test]
    fn renders_rounded_corners() {
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let mut buf = Buffer::new(4, 3);
        block.render(Rect::from_size(4, 3), &mut buf);
        assert_eq!(buf.get(0, 0).unwrap().ch, '╭');
        assert_eq!(buf.get(3, 0).unwrap().ch, '╮');
        assert_eq!(buf.get(0, 2).unwrap().ch, '╰');
        assert_eq!(buf.get(3, 2).unwrap().ch, '╯');
        assert_eq!(buf.get(1, 0).unwrap().ch, '─');
        assert_eq!(buf.get(0, 1).unwrap().ch, '│');
    }

    #[test]
    fn renders_title_on_top_border() {
        let block = Block::new().borders(Borders::ALL).title("Hi");
        let mut buf = Buffer::new(10, 3);
        block.render(Rect::from_size(10, 3), &mut buf);
        assert_eq!(buf.get(2, 0).unwrap().ch, 'H');
        assert_eq!(buf.get(3, 0).unwrap().ch, 'i');
    }

    #[test]
    fn empty_area_is_noop() {
        let block = Block::new().borders(Borders::ALL);
        let mut buf = Buffer::new(4, 4);
        block.render(Rect::new(0, 0, 0, 0), &mut buf);
        assert!(buf.get(0, 0).unwrap().is_empty());
    }

    #[test]
    fn partial_borders() {
        let block = Block::new().borders(Borders::BOTTOM);
        let mut buf = Buffer::new(4, 2);
        block.render(Rect::from_size(4, 2), &mut buf);
        assert!(buf.get(0, 0).unwrap().is_empty());
        assert_eq!(buf.get(0, 1).unwrap().ch, '─');
    }
}
