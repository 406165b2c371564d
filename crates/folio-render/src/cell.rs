#![forbid(unsafe_code)]

//! Cell and color primitives.
//!
//! A [`Cell`] is one terminal character slot: a `char`, a foreground and
//! background color, and attribute flags. Wide glyphs occupy their leading
//! cell; the buffer leaves the continuation cell blank.

use bitflags::bitflags;

/// Packed 8-bit-per-channel RGBA color.
///
/// Alpha is binary in practice: `0` means "unset, keep the terminal
/// default", `255` means opaque. No blending is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent (terminal default).
    pub const TRANSPARENT: Self = Self(0);

    /// Opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xFF)
    }

    /// Red component.
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green component.
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue component.
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Whether the color is set (non-transparent).
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        (self.0 & 0xFF) != 0
    }
}

impl Default for PackedRgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 1 << 0;
        const DIM       = 1 << 1;
        const ITALIC    = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE   = 1 << 4;
    }
}

/// One character slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The glyph. A space with transparent colors is an empty cell.
    pub ch: char,
    /// Foreground color.
    pub fg: PackedRgba,
    /// Background color.
    pub bg: PackedRgba,
    /// Attribute flags.
    pub attrs: StyleFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: PackedRgba::TRANSPARENT,
            bg: PackedRgba::TRANSPARENT,
            attrs: StyleFlags::empty(),
        }
    }
}

impl Cell {
    /// Cell holding a bare character.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            fg: PackedRgba::TRANSPARENT,
            bg: PackedRgba::TRANSPARENT,
            attrs: StyleFlags::empty(),
        }
    }

    /// Replace the foreground color.
    #[must_use]
    pub const fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    /// Replace the background color.
    #[must_use]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }

    /// Replace the attribute flags.
    #[must_use]
    pub const fn with_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// Whether the cell renders as nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ch == ' ' && !self.bg.is_opaque() && self.attrs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_roundtrip() {
        let c = PackedRgba::rgb(14, 165, 233);
        assert_eq!(c.r(), 14);
        assert_eq!(c.g(), 165);
        assert_eq!(c.b(), 233);
        assert!(c.is_opaque());
    }

    #[test]
    fn transparent_is_not_opaque() {
        assert!(!PackedRgba::TRANSPARENT.is_opaque());
    }

    #[test]
    fn default_cell_is_empty() {
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn styled_space_is_not_empty() {
        let cell = Cell::from_char(' ').with_bg(PackedRgba::rgb(1, 2, 3));
        assert!(!cell.is_empty());
    }

    #[test]
    fn builder_chain() {
        let cell = Cell::from_char('x')
            .with_fg(PackedRgba::rgb(1, 1, 1))
            .with_attrs(StyleFlags::BOLD | StyleFlags::UNDERLINE);
        assert_eq!(cell.ch, 'x');
        assert!(cell.attrs.contains(StyleFlags::BOLD));
        assert!(cell.attrs.contains(StyleFlags::UNDERLINE));
    }
}
