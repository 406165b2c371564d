#![forbid(unsafe_code)]

//! Style: optional fg/bg colors plus attribute flags.
//!
//! A `None` field means "leave whatever is already in the cell", which is
//! what lets widgets layer styles without clobbering each other.

use crate::cell::{Cell, PackedRgba, StyleFlags};

/// A partial cell style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Empty style (changes nothing).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Shorthand for adding the bold flag.
    #[must_use]
    pub fn bold(self) -> Self {
        let attrs = self.attrs.unwrap_or(StyleFlags::empty()) | StyleFlags::BOLD;
        self.attrs(attrs)
    }

    /// Shorthand for adding the dim flag.
    #[must_use]
    pub fn dim(self) -> Self {
        let attrs = self.attrs.unwrap_or(StyleFlags::empty()) | StyleFlags::DIM;
        self.attrs(attrs)
    }

    /// Shorthand for adding the underline flag.
    #[must_use]
    pub fn underline(self) -> Self {
        let attrs = self.attrs.unwrap_or(StyleFlags::empty()) | StyleFlags::UNDERLINE;
        self.attrs(attrs)
    }

    /// Merge with a fallback style; fields set on `self` win.
    #[must_use]
    pub fn merge(&self, fallback: &Style) -> Style {
        Style {
            fg: self.fg.or(fallback.fg),
            bg: self.bg.or(fallback.bg),
            attrs: self.attrs.or(fallback.attrs),
        }
    }

    /// Apply the set fields to a cell.
    pub fn apply(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs = attrs;
        }
    }
}
