#![forbid(unsafe_code)]

//! The cell grid widgets render into.

use crate::cell::Cell;
use crate::style::Style;
use folio_core::geometry::Rect;
use unicode_width::UnicodeWidthChar;

/// A rectangular grid of [`Cell`]s.
///
/// Out-of-bounds access is always a no-op (or `None`); widgets never need
/// bounds arithmetic to stay safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with empty cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Width in columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Whole-buffer area at the origin.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Cell at a position, `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable cell at a position, `None` out of bounds.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell; out of bounds is ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Apply a style to every cell in `area`.
    pub fn set_style(&mut self, area: Rect, style: Style) {
        let Some(area) = area.intersection(&self.area()) else {
            return;
        };
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    style.apply(cell);
                }
            }
        }
    }

    /// Draw a string at `(x, y)` clipped at `max_x` (exclusive).
    ///
    /// Wide glyphs occupy two columns; the continuation column is blanked.
    /// Returns the column after the last cell written.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        let mut cursor = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if cursor >= max_x || max_x - cursor < w {
                break;
            }
            let mut cell = Cell::from_char(ch);
            style.apply(&mut cell);
            self.set(cursor, y, cell);
            if w == 2 {
                let mut cont = Cell::default();
                style.apply(&mut cont);
                self.set(cursor + 1, y, cont);
            }
            cursor += w;
        }
        cursor
    }

    /// Copy `area.height` rows from `src` starting at `src_y` into `area`.
    ///
    /// Rows or columns that fall outside either buffer are skipped. This is
    /// how a viewport window of a tall document buffer lands on screen.
    pub fn blit(&mut self, src: &Buffer, src_y: u16, area: Rect) {
        let Some(area) = area.intersection(&self.area()) else {
            return;
        };
        for row in 0..area.height {
            let sy = src_y.saturating_add(row);
            if sy >= src.height {
                break;
            }
            for col in 0..area.width.min(src.width) {
                if let Some(&cell) = src.get(col, sy) {
                    self.set(area.x + col, area.y + row, cell);
                }
            }
        }
    }

    /// Render one row to plain text, trailing blanks trimmed.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        let mut text = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                text.push(cell.ch);
            }
        }
        text.truncate(text.trim_end().len());
        text
    }

    /// Raw row slice for diffing, `None` out of bounds.
    #[must_use]
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y < self.height {
            let start = y as usize * self.width as usize;
            Some(&self.cells[start..start + self.width as usize])
        } else {
            None
        }
    }
}
