#![forbid(unsafe_code)]

//! Document composition.
//!
//! The portfolio is one tall buffer the viewport scrolls over. Each
//! section is drawn onto its own scratch canvas first, so its height is
//! simply how far the cursor advanced; the canvases are then stacked into
//! the final buffer and the resulting [`SectionBounds`] drive both the
//! tracker registration and navigation targets. Heights are measured by
//! the same code that draws, so the two can never disagree.

use folio_core::geometry::Rect;
use folio_render::buffer::Buffer;
use folio_render::style::Style;
use folio_runtime::tracker::{SectionBounds, SectionId};
use folio_widgets::Widget;
use folio_widgets::barchart::{Bar, BarChart};
use folio_widgets::block::{Block, BorderType, Borders};
use folio_widgets::paragraph::Paragraph;
use folio_widgets::text::Span;

use crate::content;
use crate::theme;

/// Columns of breathing room at each side of the document.
const MARGIN: u16 = 2;

/// Initial scratch canvas height; a section that wraps past it (narrow
/// terminals wrap heavily) grows its canvas instead of truncating.
const SCRATCH_ROWS: u16 = 300;

/// Dynamic state the document renders differently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocContext {
    pub width: u16,
    pub email_copied: bool,
    pub form_submitted: bool,
}

/// The composed document: one buffer plus where each section sits in it.
#[derive(Debug, Clone)]
pub struct Document {
    pub buffer: Buffer,
    pub bounds: Vec<SectionBounds>,
}

impl Document {
    /// Total document height in rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }
}

/// A growing-downward drawing surface for one section.
struct Canvas {
    buf: Buffer,
    y: u16,
    width: u16,
}

impl Canvas {
    fn new(width: u16) -> Self {
        Self {
            buf: Buffer::new(width, SCRATCH_ROWS),
            y: 0,
            width,
        }
    }

    /// Content column range inside the margins.
    fn content(&self) -> (u16, u16) {
        (MARGIN, self.width.saturating_sub(MARGIN * 2))
    }

    /// Make room for `rows` more rows below the cursor, reallocating a
    /// taller buffer when the scratch space runs out.
    fn ensure(&mut self, rows: u16) {
        let needed = u32::from(self.y) + u32::from(rows);
        if needed <= u32::from(self.buf.height()) {
            return;
        }
        let doubled = self.buf.height().saturating_mul(2);
        let new_height = u16::try_from(needed).unwrap_or(u16::MAX).max(doubled);
        let mut grown = Buffer::new(self.width, new_height);
        grown.blit(
            &self.buf,
            0,
            Rect::new(0, 0, self.width, self.buf.height()),
        );
        self.buf = grown;
    }

    fn blank(&mut self, rows: u16) {
        self.y = self.y.saturating_add(rows);
    }

    fn widget(&mut self, widget: &impl Widget, height: u16) {
        self.ensure(height);
        let (x, w) = self.content();
        widget.render(Rect::new(x, self.y, w, height), &mut self.buf);
        self.y = self.y.saturating_add(height);
    }

    fn paragraph(&mut self, para: &Paragraph) {
        let (_, w) = self.content();
        let height = para.line_count(w);
        self.widget(para, height);
    }

    fn line(&mut self, text: &str, style: Style) {
        self.ensure(1);
        let (x, w) = self.content();
        self.buf.set_string(x, self.y, text, style, x + w);
        self.blank(1);
    }

    /// One row built from styled spans.
    fn spans(&mut self, spans: &[Span]) {
        self.ensure(1);
        let (x, w) = self.content();
        let mut cursor = x;
        for span in spans {
            let style = span.style.unwrap_or_default();
            cursor = self.buf.set_string(cursor, self.y, &span.content, style, x + w);
        }
        self.blank(1);
    }

    /// Section heading with an accent rule under it.
    fn title(&mut self, text: &str) {
        self.blank(1);
        self.line(text, Style::new().bold());
        self.line(&"─".repeat(16), Style::new().fg(theme::SKY_600));
        self.blank(1);
    }

    /// A wrapped bullet point.
    fn bullet(&mut self, text: &str, style: Style) {
        self.paragraph(&Paragraph::new(format!("• {text}")).style(style).wrap());
    }
}

fn hero(canvas: &mut Canvas, _ctx: &DocContext) {
    let profile = content::PROFILE;
    canvas.blank(1);
    canvas.line(
        "AVAILABLE FOR INTERNSHIPS",
        Style::new().fg(theme::SKY_700).bold(),
    );
    canvas.blank(1);
    canvas.spans(&[
        Span::raw("Hi, I'm "),
        Span::styled(profile.name, Style::new().fg(theme::SKY_500).bold()),
    ]);
    canvas.line(profile.role, Style::new().fg(theme::SLATE_400));
    canvas.blank(1);
    canvas.paragraph(
        &Paragraph::new(
            "A Data Analytics enthusiast & Software Developer turning complex data \
             into meaningful insights.",
        )
        .style(Style::new().fg(theme::SLATE_300))
        .wrap(),
    );
    canvas.blank(1);
    canvas.line(
        "[p] view work   [d] download resume   [c] copy email",
        Style::new().fg(theme::SLATE_500),
    );
    canvas.blank(1);
    canvas.spans(&[
        Span::styled("github   ", Style::new().fg(theme::SLATE_500)),
        Span::styled(profile.github, Style::new().fg(theme::SKY_600)),
    ]);
    canvas.spans(&[
        Span::styled("linkedin ", Style::new().fg(theme::SLATE_500)),
        Span::styled(profile.linkedin, Style::new().fg(theme::SKY_600)),
    ]);
    canvas.blank(2);
}

fn about(canvas: &mut Canvas, _ctx: &DocContext) {
    canvas.title("About Me");
    canvas.paragraph(&Paragraph::new(content::PROFILE.summary).wrap());
    canvas.blank(1);
    for strength in content::PROFILE.strengths {
        canvas.bullet(strength, Style::new().fg(theme::SLATE_300));
    }
    canvas.blank(1);
    canvas.line("Skills Proficiency", Style::new().fg(theme::SKY_400).bold());
    canvas.blank(1);
    let bars: Vec<Bar> = content::SKILL_LEVELS
        .iter()
        .map(|s| Bar {
            label: s.name,
            value: s.level,
            color: s.color,
        })
        .collect();
    let chart = BarChart::new(&bars)
        .label_style(Style::new().fg(theme::SLATE_300))
        .value_style(Style::new().fg(theme::SLATE_500))
        .track_style(Style::new().fg(theme::SLATE_700));
    canvas.widget(&chart, chart.height());
    canvas.blank(1);
    canvas.line(
        "Self-rated based on personal projects and academic performance.",
        Style::new().fg(theme::SLATE_500).dim(),
    );
    canvas.blank(1);
}

fn skills(canvas: &mut Canvas, _ctx: &DocContext) {
    canvas.title("Technical Arsenal");
    for category in content::SKILL_CATEGORIES {
        canvas.line(category.category, Style::new().fg(theme::SKY_400).bold());
        canvas.paragraph(
            &Paragraph::new(category.skills.join(" · "))
                .style(Style::new().fg(theme::SLATE_400))
                .wrap(),
        );
        canvas.blank(1);
    }
}

fn projects(canvas: &mut Canvas, _ctx: &DocContext) {
    canvas.title("Featured Projects");
    for project in content::PROJECTS {
        canvas.line(project.title, Style::new().bold());
        canvas.line(project.subtitle, Style::new().fg(theme::SLATE_500).dim());
        canvas.line(
            &project.tech.join(" · "),
            Style::new().fg(theme::SKY_600),
        );
        for point in project.points {
            canvas.bullet(point, Style::new().fg(theme::SLATE_300));
        }
        canvas.blank(1);
    }
}

fn education(canvas: &mut Canvas, _ctx: &DocContext) {
    let edu = content::EDUCATION;
    canvas.title("Education & Learning");
    canvas.spans(&[
        Span::styled(edu.degree, Style::new().bold()),
        Span::styled(format!("   {}", edu.years), Style::new().fg(theme::SLATE_500)),
    ]);
    canvas.line(edu.field, Style::new().fg(theme::SKY_600));
    canvas.line(
        &format!("{}, {}", edu.institution, edu.location),
        Style::new().fg(theme::SLATE_400),
    );
    canvas.line(edu.graduation, Style::new().fg(theme::SLATE_400));
    canvas.blank(1);
    canvas.line("Relevant Coursework", Style::new().fg(theme::SKY_400).bold());
    canvas.paragraph(
        &Paragraph::new(content::COURSEWORK.join(" · "))
            .style(Style::new().fg(theme::SLATE_400))
            .wrap(),
    );
    canvas.blank(1);
    canvas.line("Self-Learning", Style::new().fg(theme::SKY_400).bold());
    for item in content::SELF_LEARNING {
        canvas.bullet(item, Style::new().fg(theme::SLATE_300));
    }
    canvas.blank(1);
    canvas.line("Interests", Style::new().fg(theme::SKY_400).bold());
    canvas.line(
        &content::INTERESTS.join(" · "),
        Style::new().fg(theme::SLATE_500),
    );
    canvas.blank(1);
}

fn contact(canvas: &mut Canvas, ctx: &DocContext) {
    let profile = content::PROFILE;
    canvas.title("Get In Touch");
    canvas.line("Let's work together.", Style::new().bold());
    canvas.paragraph(
        &Paragraph::new(
            "Looking for a Data Analytics intern who is passionate about \
             problem-solving and modular development? Let's connect!",
        )
        .style(Style::new().fg(theme::SLATE_400))
        .wrap(),
    );
    canvas.blank(1);

    let mut email_row = vec![
        Span::styled("Email    ", Style::new().fg(theme::SLATE_500)),
        Span::styled(profile.email, Style::new().fg(theme::SKY_400)),
    ];
    if ctx.email_copied {
        email_row.push(Span::styled(
            "  ✓ Copied!",
            Style::new().fg(theme::EMERALD_500).bold(),
        ));
    } else {
        email_row.push(Span::styled(
            "  (c to copy)",
            Style::new().fg(theme::SLATE_500),
        ));
    }
    canvas.spans(&email_row);
    canvas.spans(&[
        Span::styled("Phone    ", Style::new().fg(theme::SLATE_500)),
        Span::raw(profile.phone),
    ]);
    canvas.spans(&[
        Span::styled("Location ", Style::new().fg(theme::SLATE_500)),
        Span::raw(profile.location),
    ]);
    canvas.blank(1);
    let form_rows: u16 = if ctx.form_submitted { 2 } else { 1 };
    let form = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Send a message")
        .style(Style::new().fg(theme::SLATE_500));
    canvas.ensure(form_rows + 2);
    let (x, w) = canvas.content();
    let area = Rect::new(x, canvas.y, w, form_rows + 2);
    let inner = form.inner(area);
    form.render(area, &mut canvas.buf);
    canvas.buf.set_string(
        inner.x + 1,
        inner.y,
        "[Enter] Send Message",
        Style::new().fg(theme::SKY_500),
        inner.right(),
    );
    if ctx.form_submitted {
        canvas.buf.set_string(
            inner.x + 1,
            inner.y + 1,
            "Thanks for reaching out! (Demo Only)",
            Style::new().fg(theme::EMERALD_500),
            inner.right(),
        );
    }
    canvas.blank(form_rows + 2);
    canvas.blank(1);
}

fn footer(canvas: &mut Canvas) {
    let (_, w) = canvas.content();
    canvas.line(
        &"─".repeat(w as usize),
        Style::new().fg(theme::SLATE_700),
    );
    canvas.line(
        &format!("© 2026 {}. Built with Rust.", content::PROFILE.name),
        Style::new().fg(theme::SLATE_500),
    );
    canvas.blank(1);
}

type SectionFn = fn(&mut Canvas, &DocContext);

const SECTIONS: [(SectionId, SectionFn); 6] = [
    ("home", hero),
    ("about", about),
    ("skills", skills),
    ("projects", projects),
    ("education", education),
    ("contact", contact),
];

/// Compose the full document for a context.
#[must_use]
pub fn compose(ctx: &DocContext) -> Document {
    let mut blocks = Vec::with_capacity(SECTIONS.len());
    for (id, build) in SECTIONS {
        let mut canvas = Canvas::new(ctx.width);
        build(&mut canvas, ctx);
        blocks.push((id, canvas));
    }
    let mut tail = Canvas::new(ctx.width);
    footer(&mut tail);

    let total = blocks
        .iter()
        .map(|(_, c)| u32::from(c.y))
        .sum::<u32>()
        + u32::from(tail.y);
    let mut buffer = Buffer::new(ctx.width, u16::try_from(total).unwrap_or(u16::MAX));

    let mut bounds = Vec::with_capacity(blocks.len());
    let mut top = 0u16;
    for (id, canvas) in &blocks {
        buffer.blit(&canvas.buf, 0, Rect::new(0, top, ctx.width, canvas.y));
        bounds.push(SectionBounds {
            id: *id,
            top,
            height: canvas.y,
        });
        top = top.saturating_add(canvas.y);
    }
    buffer.blit(&tail.buf, 0, Rect::new(0, top, ctx.width, tail.y));

    Document { buffer, bounds }
}
