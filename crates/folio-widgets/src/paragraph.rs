#![forbid(unsafe_code)]

use folio_core::geometry::Rect;
use folio_render::buffer::Buffer;
use folio_render::style::Style;
use unicode_width::UnicodeWidthStr;

use crate::block::Alignment;
use crate::text::{Text, wrap_text};
use crate::{Widget, draw_text_span, set_style_area};

/// A widget that renders multi-line styled text.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    text: Text,
    style: Style,
    wrap: bool,
    alignment: Alignment,
}

impl Paragraph {
    pub fn new(text: impl Into<Text>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            wrap: false,
            alignment: Alignment::Left,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Enable word wrapping. Wrapped lines lose per-span styling and
    /// render with the paragraph style.
    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Number of visual lines this paragraph occupies at `width`.
    ///
    /// Section height measurement uses this; it must agree with `render`.
    #[must_use]
    pub fn line_count(&self, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        let mut count = 0usize;
        for line in &self.text.lines {
            if self.wrap {
                let plain = line.to_plain_text();
                if plain.width() > width as usize {
                    count += wrap_text(&plain, width as usize).len();
                } else {
                    count += 1;
                }
            } else {
                count += 1;
            }
        }
        u16::try_from(count).unwrap_or(u16::MAX)
    }
}

impl Widget for Paragraph {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        set_style_area(buf, area, self.style);

        let mut y = area.y;
        for line in &self.text.lines {
            if y >= area.bottom() {
                break;
            }

            if self.wrap {
                let plain = line.to_plain_text();
                if plain.width() > area.width as usize {
                    for wrapped in wrap_text(&plain, area.width as usize) {
                        if y >= area.bottom() {
                            break;
                        }
                        let x = align_x(area, wrapped.width(), self.alignment);
                        draw_text_span(buf, x, y, &wrapped, self.style, area.right());
                        y += 1;
                    }
                    continue;
                }
            }

            let mut x = align_x(area, line.width(), self.alignment);
            for span in &line.spans {
                let span_style = match span.style {
                    Some(s) => s.merge(&self.style),
                    None => self.style,
                };
                x = draw_text_span(buf, x, y, &span.content, span_style, area.right());
                if x >= area.right() {
                    break;
                }
            }
            y += 1;
        }
    }
}

/// Starting x for a line of `line_width` under `alignment`.
fn align_x(area: Rect, line_width: usize, alignment: Alignment) -> u16 {
    let w = u16::try_from(line_width).unwrap_or(u16::MAX);
    match alignment {
        Alignment::Left => area.x,
        Alignment::Center => area.x + area.width.saturating_sub(w) / 2,
        Alignment::Right => area.x + area.width.saturating_sub(w),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{Line, Span};
    use folio_render::cell::PackedRgba;

    #[test]
    fn renders_simple_text() {
        let para = Paragraph::new("Hello");
        let mut buf = Buffer::new(10, 1);
        para.render(Rect::from_size(10, 1), &mut buf);
        assert_eq!(buf.get(0, 0).unwrap().ch, 'H');
        assert_eq!(buf.get(4, 0).unwrap().ch, 'o');
    }

    #[test]
    fn renders_multiline() {
        let para = Paragraph::new("AB\nCD");
        let mut buf = Buffer::new(5, 3);
        para.render(Rect::from_size(5, 3), &mut buf);
        assert_eq!(buf.get(0, 1).unwrap().ch, 'C');
    }

    #[test]
    fn centered_text() {
        let para = Paragraph::new("Hi").alignment(Alignment::Center);
        let mut buf = Buffer::new(10, 1);
        para.render(Rect::from_size(10, 1), &mut buf);
        assert_eq!(buf.get(4, 0).unwrap().ch, 'H');
    }

    #[test]
    fn wrapped_text_breaks_words() {
        let para = Paragraph::new("hello world").wrap();
        let mut buf = Buffer::new(6, 3);
        para.render(Rect::from_size(6, 3), &mut buf);
        assert_eq!(buf.get(0, 0).unwrap().ch, 'h');
        assert_eq!(buf.get(0, 1).unwrap().ch, 'w');
    }

    #[test]
    fn clips_at_area_height() {
        let para = Paragraph::new("A\nB\nC\nD");
        let mut buf = Buffer::new(5, 2);
        para.render(Rect::from_size(5, 2), &mut buf);
        assert_eq!(buf.get(0, 1).unwrap().ch, 'B');
        assert!(buf.get(0, 2).is_none());
    }

    #[test]
    fn span_styles_merge_with_paragraph_style() {
        let line = Line::from_spans(vec![Span::styled(
            "X",
            Style::new().fg(PackedRgba::rgb(1, 2, 3)),
        )]);
        let para = Paragraph::new(Text::from_lines(vec![line]))
            .style(Style::new().bg(PackedRgba::rgb(9, 9, 9)));
        let mut buf = Buffer::new(3, 1);
        para.render(Rect::from_size(3, 1), &mut buf);
        let cell = buf.get(0, 0).unwrap();
        assert_eq!(cell.fg, PackedRgba::rgb(1, 2, 3));
        assert_eq!(cell.bg, PackedRgba::rgb(9, 9, 9));
    }

    #[test]
    fn line_count_matches_render_for_wrapped_text() {
        let para = Paragraph::new("one two three four five six").wrap();
        let count = para.line_count(9);
        let mut buf = Buffer::new(9, 20);
        para.render(Rect::from_size(9, 20), &mut buf);
        // Row `count - 1` has content, row `count` does not.
        assert!(!buf.row_text(count - 1).is_empty());
        assert!(buf.row_text(count).is_empty());
    }

    #[test]
    fn line_count_at_zero_width() {
        let para = Paragraph::new("abc").wrap();
        assert_eq!(para.line_count(0), 0);
    }

    #[test]
    fn empty_area_is_noop() {
        let para = Paragraph::new("abc");
        let mut buf = Buffer::new(3, 1);
        para.render(Rect::new(0, 0, 0, 0), &mut buf);
        assert!(buf.get(0, 0).unwrap().is_empty());
    }
}
