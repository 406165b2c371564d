#![forbid(unsafe_code)]

//! Sticky navigation bar with an active-link highlight.
//!
//! The bar renders in two densities: regular (two rows, with a rule under
//! the bar and an accent segment under the active link) and compact (one
//! row, active link underlined). Hit testing shares the same layout
//! arithmetic as rendering, so clicks cannot drift from the drawn links.

use folio_core::geometry::Rect;
use folio_render::buffer::Buffer;
use folio_render::style::Style;
use unicode_width::UnicodeWidthStr;

use crate::{Widget, set_style_area};

/// One navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Target section identifier.
    pub id: &'static str,
    /// Link label.
    pub label: &'static str,
}

/// Column span `(start, end)` of one rendered element.
type ColSpan = (u16, u16);

#[derive(Debug, Default)]
struct NavLayout {
    brand: ColSpan,
    items: Vec<ColSpan>,
}

/// The navigation bar widget.
#[derive(Debug, Clone)]
pub struct NavBar<'a> {
    brand: &'a str,
    brand_id: &'static str,
    items: &'a [NavItem],
    active: &'static str,
    compact: bool,
    style: Style,
    item_style: Style,
    active_style: Style,
    brand_style: Style,
    hint: Option<&'a str>,
    hint_style: Style,
}

impl<'a> NavBar<'a> {
    /// Bar with a brand label (clicking it targets `brand_id`) and links.
    #[must_use]
    pub fn new(brand: &'a str, brand_id: &'static str, items: &'a [NavItem]) -> Self {
        Self {
            brand,
            brand_id,
            items,
            active: brand_id,
            compact: false,
            style: Style::default(),
            item_style: Style::default(),
            active_style: Style::default(),
            brand_style: Style::default(),
            hint: None,
            hint_style: Style::default(),
        }
    }

    /// Identifier of the currently active section.
    #[must_use]
    pub fn active(mut self, id: &'static str) -> Self {
        self.active = id;
        self
    }

    /// Render in compact (single-row) density.
    #[must_use]
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Base bar style (background fill).
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style for inactive links.
    #[must_use]
    pub fn item_style(mut self, style: Style) -> Self {
        self.item_style = style;
        self
    }

    /// Style for the active link.
    #[must_use]
    pub fn active_style(mut self, style: Style) -> Self {
        self.active_style = style;
        self
    }

    /// Style for the brand label.
    #[must_use]
    pub fn brand_style(mut self, style: Style) -> Self {
        self.brand_style = style;
        self
    }

    /// Right-aligned hint text (key help).
    #[must_use]
    pub fn hint(mut self, hint: &'a str, style: Style) -> Self {
        self.hint = Some(hint);
        self.hint_style = style;
        self
    }

    /// Rows this bar occupies in its current density.
    #[must_use]
    pub fn bar_height(&self) -> u16 {
        if self.compact { 1 } else { 2 }
    }

    fn layout(&self, area: Rect) -> NavLayout {
        let mut layout = NavLayout::default();
        let mut x = area.x + 1;
        let brand_w = self.brand.width() as u16;
        layout.brand = (x, x.saturating_add(brand_w).min(area.right()));
        x = layout.brand.1 + 3;

        for item in self.items {
            // One column of padding either side of the label.
            let w = item.label.width() as u16 + 2;
            let end = x.saturating_add(w).min(area.right());
            layout.items.push((x.min(area.right()), end));
            x = end + 1;
        }
        layout
    }

    /// Map a click at `(x, y)` to a navigation target.
    #[must_use]
    pub fn hit(&self, area: Rect, x: u16, y: u16) -> Option<&'static str> {
        if y != area.y {
            return None;
        }
        let layout = self.layout(area);
        if x >= layout.brand.0 && x < layout.brand.1 {
            return Some(self.brand_id);
        }
        for (item, &(start, end)) in self.items.iter().zip(&layout.items) {
            if x >= start && x < end {
                return Some(item.id);
            }
        }
        None
    }
}

impl Widget for NavBar<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let bar = Rect::new(area.x, area.y, area.width, 1);
        set_style_area(buf, bar, self.style);

        let layout = self.layout(area);
        buf.set_string(layout.brand.0, area.y, self.brand, self.brand_style, area.right());

        let mut active_span: Option<ColSpan> = None;
        for (item, &(start, end)) in self.items.iter().zip(&layout.items) {
            let is_active = item.id == self.active;
            let mut style = if is_active {
                self.active_style
            } else {
                self.item_style
            };
            if is_active && self.compact {
                style = style.underline();
            }
            if is_active {
                active_span = Some((start, end));
            }
            let label = format!(" {} ", item.label);
            buf.set_string(start, area.y, &label, style, end);
        }

        if let Some(hint) = self.hint {
            let w = hint.width() as u16;
            if area.width > w + 1 {
                let x = area.right() - 1 - w;
                buf.set_string(x, area.y, hint, self.hint_style, area.right());
            }
        }

        if !self.compact && area.height >= 2 {
            let rule_y = area.y + 1;
            for x in area.x..area.right() {
                buf.set_string(x, rule_y, "─", self.item_style, area.right());
            }
            if let Some((start, end)) = active_span {
                for x in start..end {
                    buf.set_string(x, rule_y, "━", self.active_style, area.right());
                }
            }
        }
    }
}
