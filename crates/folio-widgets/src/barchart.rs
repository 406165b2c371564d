#![forbid(unsafe_code)]

//! Horizontal bar chart for proficiency-style 0..=100 series.

use folio_core::geometry::Rect;
use folio_render::buffer::Buffer;
use folio_render::cell::PackedRgba;
use folio_render::style::Style;
use unicode_width::UnicodeWidthStr;

use crate::Widget;

/// One data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub label: &'static str,
    /// Clamped to `0..=100` at render time.
    pub value: u8,
    pub color: PackedRgba,
}

/// A horizontal bar chart. One row per bar plus `bar_gap` blank rows
/// between bars; a right-aligned numeric readout follows each bar.
#[derive(Debug, Clone)]
pub struct BarChart<'a> {
    bars: &'a [Bar],
    bar_gap: u16,
    label_style: Style,
    value_style: Style,
    track_style: Style,
}

impl<'a> BarChart<'a> {
    #[must_use]
    pub fn new(bars: &'a [Bar]) -> Self {
        Self {
            bars,
            bar_gap: 1,
            label_style: Style::default(),
            value_style: Style::default(),
            track_style: Style::default(),
        }
    }

    /// Blank rows between consecutive bars.
    #[must_use]
    pub fn bar_gap(mut self, gap: u16) -> Self {
        self.bar_gap = gap;
        self
    }

    /// Style for bar labels.
    #[must_use]
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    /// Style for the numeric readout.
    #[must_use]
    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }

    /// Style for the unfilled remainder of each track.
    #[must_use]
    pub fn track_style(mut self, style: Style) -> Self {
        self.track_style = style;
        self
    }

    /// Rows the chart occupies, for section height measurement.
    #[must_use]
    pub fn height(&self) -> u16 {
        if self.bars.is_empty() {
            return 0;
        }
        let n = u16::try_from(self.bars.len()).unwrap_or(u16::MAX);
        n + (n - 1) * self.bar_gap
    }

    fn label_column_width(&self) -> u16 {
        self.bars
            .iter()
            .map(|b| b.label.width() as u16)
            .max()
            .unwrap_or(0)
    }
}

impl Widget for BarChart<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.bars.is_empty() {
            return;
        }
        let label_w = self.label_column_width();
        // "<label>  <track>  <value>" with the readout fixed at 3 columns.
        let track_x = area.x + label_w + 2;
        let readout_w: u16 = 3;
        if area.width <= label_w + 2 + readout_w + 2 {
            return;
        }
        let track_w = area.right() - track_x - readout_w - 2;

        let mut y = area.y;
        for bar in self.bars {
            if y >= area.bottom() {
                break;
            }
            buf.set_string(area.x, y, bar.label, self.label_style, track_x);

            let value = bar.value.min(100);
            let filled = (u32::from(track_w) * u32::from(value) / 100) as u16;
            let bar_style = Style::new().fg(bar.color);
            for i in 0..track_w {
                let (glyph, style) = if i < filled {
                    ("█", bar_style)
                } else {
                    ("░", self.track_style)
                };
                buf.set_string(track_x + i, y, glyph, style, area.right());
            }

            let readout = format!("{value:>3}");
            buf.set_string(track_x + track_w + 2, y, &readout, self.value_style, area.right());

            y += 1 + self.bar_gap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> [Bar; 3] {
        [
            Bar {
                label: "Python",
                value: 95,
                color: PackedRgba::rgb(14, 165, 233),
            },
            Bar {
                label: "SQL",
                value: 85,
                color: PackedRgba::rgb(2, 132, 199),
            },
            Bar {
                label: "Java / C++",
                value: 80,
                color: PackedRgba::rgb(14, 165, 233),
            },
        ]
    }

    #[test]
    fn height_accounts_for_gaps() {
        let data = bars();
        assert_eq!(BarChart::new(&data).height(), 5);
        assert_eq!(BarChart::new(&data).bar_gap(0).height(), 3);
        assert_eq!(BarChart::new(&[]).height(), 0);
    }

    #[test]
    fn renders_labels_and_readouts() {
        let data = bars();
        let chart = BarChart::new(&data);
        let mut buf = Buffer::new(40, 5);
        chart.render(Rect::from_size(40, 5), &mut buf);
        assert!(buf.row_text(0).contains("Python"));
        assert!(buf.row_text(0).contains("95"));
        assert!(buf.row_text(2).contains("SQL"));
        assert!(buf.row_text(4).contains("80"));
    }

    #[test]
    fn fill_is_proportional_to_value() {
        let data = [
            Bar {
                label: "A",
                value: 100,
                color: PackedRgba::rgb(1, 1, 1),
            },
            Bar {
                label: "B",
                value: 50,
                color: PackedRgba::rgb(1, 1, 1),
            },
        ];
        let chart = BarChart::new(&data).bar_gap(0);
        let mut buf = Buffer::new(30, 2);
        chart.render(Rect::from_size(30, 2), &mut buf);
        let full: usize = buf.row_text(0).matches('█').count();
        let half: usize = buf.row_text(1).matches('█').count();
        assert!(full > 0);
        assert_eq!(half, full / 2);
    }

    #[test]
    fn bar_uses_its_own_color() {
        let data = bars();
        let chart = BarChart::new(&data);
        let mut buf = Buffer::new(40, 5);
        chart.render(Rect::from_size(40, 5), &mut buf);
        let row = buf.row_text(2);
        let col = row.find('█').unwrap() as u16;
        assert_eq!(buf.get(col, 2).unwrap().fg, PackedRgba::rgb(2, 132, 199));
    }

    #[test]
    fn values_above_scale_are_clamped() {
        let data = [Bar {
            label: "X",
            value: 250,
            color: PackedRgba::rgb(1, 1, 1),
        }];
        let chart = BarChart::new(&data);
        let mut buf = Buffer::new(30, 1);
        chart.render(Rect::from_size(30, 1), &mut buf);
        assert!(buf.row_text(0).contains("100"));
        assert!(!buf.row_text(0).contains('░'));
    }

    #[test]
    fn too_narrow_area_is_noop() {
        let data = bars();
        let chart = BarChart::new(&data);
        let mut buf = Buffer::new(12, 5);
        chart.render(Rect::from_size(12, 5), &mut buf);
        assert!(buf.row_text(0).is_empty());
    }
}
