#![forbid(unsafe_code)]

//! The viewer model: keyboard/mouse handling, scroll and section state,
//! and frame layout.

use std::path::Path;
use std::time::Instant;

use folio_core::event::{Event, KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use folio_core::geometry::Rect;
use folio_render::frame::Frame;
use folio_render::style::Style;
use folio_runtime::program::{Cmd, Model};
use folio_runtime::scroll::{ChromeThresholds, ScrollAnimation, ScrollState};
use folio_runtime::tracker::{SectionId, SectionTracker, TrackerConfig, Viewport};
use folio_runtime::transient::TransientFlag;
use folio_widgets::Widget;
use folio_widgets::navbar::{NavBar, NavItem};
use folio_widgets::scrollbar::ScrollBar;
use tracing::warn;

use crate::config::FolioConfig;
use crate::content;
use crate::doc::{self, DocContext, Document};
use crate::export;
use crate::theme;

/// Rows reserved for the navigation bar. The compact density uses one of
/// them; keeping the reservation fixed avoids re-measuring the document
/// every time the bar changes density.
const NAV_ROWS: u16 = 2;

/// Rows the wheel moves per notch.
const WHEEL_STEP: i32 = 3;

const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: "about",
        label: "About",
    },
    NavItem {
        id: "skills",
        label: "Skills",
    },
    NavItem {
        id: "projects",
        label: "Projects",
    },
    NavItem {
        id: "education",
        label: "Education",
    },
    NavItem {
        id: "contact",
        label: "Contact",
    },
];

/// Number-key navigation order.
const SECTION_ORDER: [SectionId; 6] = [
    "home",
    "about",
    "skills",
    "projects",
    "education",
    "contact",
];

const KEY_HINT: &str = "q quit";

pub struct Folio {
    config: FolioConfig,
    chrome: ChromeThresholds,
    width: u16,
    height: u16,
    doc: Document,
    scroll: ScrollState,
    tracker: SectionTracker,
    animation: Option<ScrollAnimation>,
    email_copied: TransientFlag,
    export_notice: TransientFlag,
    export_message: String,
    form_submitted: bool,
}

impl Folio {
    #[must_use]
    pub fn new(config: FolioConfig, width: u16, height: u16) -> Self {
        let doc = doc::compose(&DocContext {
            width,
            email_copied: false,
            form_submitted: false,
        });
        let mut tracker = SectionTracker::new(TrackerConfig {
            header_offset: NAV_ROWS + 1,
        });
        for bounds in &doc.bounds {
            tracker.register(*bounds);
        }
        let scroll = ScrollState::new(doc.height(), height.saturating_sub(NAV_ROWS));

        let mut folio = Self {
            chrome: config.chrome(),
            email_copied: TransientFlag::new(config.copied_feedback()),
            export_notice: TransientFlag::new(config.copied_feedback()),
            export_message: String::new(),
            config,
            width,
            height,
            doc,
            scroll,
            tracker,
            animation: None,
            form_submitted: false,
        };
        folio.tracker.observe(folio.viewport());
        folio
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            offset: self.scroll.offset(),
            height: self.height.saturating_sub(NAV_ROWS),
        }
    }

    /// The active section, defaulting to the top of the document before
    /// the first observation lands.
    fn active(&self) -> SectionId {
        self.tracker.current().unwrap_or("home")
    }

    fn navbar(&self) -> NavBar<'static> {
        NavBar::new("PJ.dev", "home", &NAV_ITEMS)
            .active(self.active())
            .compact(self.chrome.nav_compact(self.scroll.offset()))
            .brand_style(Style::new().fg(theme::SKY_500).bold())
            .item_style(Style::new().fg(theme::SLATE_400))
            .active_style(Style::new().fg(theme::SKY_500).bold())
            .hint(KEY_HINT, Style::new().fg(theme::SLATE_500).dim())
    }

    fn nav_area(&self) -> Rect {
        Rect::new(0, 0, self.width, NAV_ROWS)
    }

    /// Rebuild the document after feedback state changed. Bounds stay
    /// stable across feedback swaps, so tracker registrations hold.
    fn recompose(&mut self, now: Instant) {
        self.doc = doc::compose(&DocContext {
            width: self.width,
            email_copied: self.email_copied.is_set(now),
            form_submitted: self.form_submitted,
        });
        for bounds in &self.doc.bounds {
            self.tracker.register(*bounds);
        }
        self.scroll
            .resize(self.doc.height(), self.height.saturating_sub(NAV_ROWS));
    }

    /// Manual scrolling cancels any in-flight animated jump.
    fn nudge(&mut self, delta: i32) {
        self.animation = None;
        self.scroll.scroll_by(delta);
        self.tracker.observe(self.viewport());
    }

    fn animate_to(&mut self, target: u16, now: Instant) {
        let target = target.min(self.scroll.max_offset());
        match &mut self.animation {
            Some(animation) => animation.retarget(target, now),
            None => {
                self.animation = Some(
                    ScrollAnimation::new(self.scroll.offset(), target, now)
                        .duration(self.config.scroll_animation()),
                );
            }
        }
    }

    fn navigate(&mut self, id: SectionId) {
        if let Some(target) = self.tracker.navigate_to(id) {
            self.animate_to(target, Instant::now());
        }
    }

    fn page(&self) -> i32 {
        i32::from(self.height.saturating_sub(NAV_ROWS).max(1))
    }

    fn export_resume(&mut self, now: Instant) {
        match export::write_resume(Path::new(".")) {
            Ok(path) => {
                self.export_message = format!("Saved {}", path.display());
            }
            Err(err) => {
                warn!(%err, "resume export failed");
                self.export_message = format!("Export failed: {err}");
            }
        }
        self.export_notice.arm(now);
    }

    fn on_key(&mut self, key: KeyEvent) -> Cmd<Event> {
        if key.is_char('q') || key.code == KeyCode::Escape || (key.ctrl() && key.is_char('c')) {
            return Cmd::Quit;
        }
        let now = Instant::now();
        match key.code {
            KeyCode::Down => self.nudge(1),
            KeyCode::Up => self.nudge(-1),
            KeyCode::PageDown => self.nudge(self.page()),
            KeyCode::PageUp => self.nudge(-self.page()),
            KeyCode::Home => self.animate_to(0, now),
            KeyCode::End => self.animate_to(self.scroll.max_offset(), now),
            KeyCode::Enter => {
                self.form_submitted = true;
                self.recompose(now);
            }
            KeyCode::Char(c) => match c {
                'j' => self.nudge(1),
                'k' => self.nudge(-1),
                ' ' => self.nudge(self.page()),
                'g' => self.animate_to(0, now),
                'G' => self.animate_to(self.scroll.max_offset(), now),
                't' => self.animate_to(0, now),
                'p' => self.navigate("projects"),
                'c' => return Cmd::CopyToClipboard(content::PROFILE.email.to_string()),
                'd' => self.export_resume(now),
                '1'..='6' => {
                    let index = c as usize - '1' as usize;
                    self.navigate(SECTION_ORDER[index]);
                }
                _ => {}
            },
            _ => {}
        }
        Cmd::None
    }

    fn scroll_top_hit(&self, x: u16, y: u16) -> bool {
        self.chrome.scroll_top_visible(self.scroll.offset())
            && y == self.height.saturating_sub(1)
            && x >= self.width.saturating_sub(8)
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Cmd<Event> {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.nudge(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.nudge(WHEEL_STEP),
            MouseEventKind::Down => {
                if let Some(id) = self.navbar().hit(self.nav_area(), mouse.x, mouse.y) {
                    self.navigate(id);
                } else if self.scroll_top_hit(mouse.x, mouse.y) {
                    self.animate_to(0, Instant::now());
                }
            }
        }
        Cmd::None
    }

    fn on_tick(&mut self) -> Cmd<Event> {
        let now = Instant::now();
        if let Some(animation) = self.animation {
            self.scroll.scroll_to(animation.sample(now));
            if animation.is_finished(now) {
                self.animation = None;
            }
            self.tracker.observe(self.viewport());
        }
        if self.email_copied.expire(now) {
            self.recompose(now);
        }
        self.export_notice.expire(now);
        Cmd::None
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.animation = None;
        self.recompose(Instant::now());
        self.tracker.observe(self.viewport());
    }
}

impl Model for Folio {
    type Message = Event;

    fn update(&mut self, event: Event) -> Cmd<Event> {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            Event::Resize { width, height } => {
                self.resize(width, height);
                Cmd::None
            }
            Event::Tick => self.on_tick(),
            Event::Clipboard(ev) => {
                if ev.copied {
                    self.email_copied.arm(Instant::now());
                    self.recompose(Instant::now());
                }
                Cmd::None
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let width = frame.width();
        let height = frame.height();
        if width == 0 || height == 0 {
            return;
        }
        let content = Rect::new(0, NAV_ROWS, width, height.saturating_sub(NAV_ROWS));

        frame
            .buffer
            .blit(&self.doc.buffer, self.scroll.offset(), content);

        ScrollBar::new(
            self.doc.height(),
            content.height,
            self.scroll.offset(),
        )
        .track_style(Style::new().fg(theme::SLATE_700))
        .thumb_style(Style::new().fg(theme::SLATE_400))
        .render(content, &mut frame.buffer);

        self.navbar().render(self.nav_area(), &mut frame.buffer);

        if self.chrome.scroll_top_visible(self.scroll.offset()) {
            let label = " ↑ top ";
            let x = width.saturating_sub(8);
            frame.buffer.set_string(
                x,
                height - 1,
                label,
                Style::new().fg(theme::SLATE_100).bg(theme::SKY_600),
                width,
            );
        }

        if self.export_notice.is_set(Instant::now()) {
            frame.buffer.set_string(
                0,
                height - 1,
                &self.export_message,
                Style::new().fg(theme::EMERALD_500),
                width.saturating_sub(8),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::event::{ClipboardEvent, Modifiers};

    fn instant_config() -> FolioConfig {
        FolioConfig {
            scroll_animation_ms: 0,
            ..FolioConfig::default()
        }
    }

    fn folio() -> Folio {
        Folio::new(instant_config(), 80, 24)
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c)))
    }

    fn frame_text(folio: &Folio, width: u16, height: u16) -> Vec<String> {
        let mut frame = Frame::new(width, height);
        folio.view(&mut frame);
        (0..height).map(|y| frame.buffer.row_text(y)).collect()
    }

    #[test]
    fn starts_at_the_top_with_home_active() {
        let folio = folio();
        assert_eq!(folio.scroll.offset(), 0);
        assert_eq!(folio.active(), "home");
    }

    #[test]
    fn quit_keys() {
        assert_eq!(folio().update(key('q')), Cmd::Quit);
        assert_eq!(
            folio().update(Event::Key(KeyEvent::new(KeyCode::Escape))),
            Cmd::Quit
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL);
        assert_eq!(folio().update(Event::Key(ctrl_c)), Cmd::Quit);
    }

    #[test]
    fn wheel_and_keys_scroll_the_document() {
        let mut folio = folio();
        folio.update(Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            x: 0,
            y: 10,
        }));
        assert_eq!(folio.scroll.offset(), 3);
        folio.update(key('k'));
        assert_eq!(folio.scroll.offset(), 2);
    }

    #[test]
    fn copy_key_requests_a_clipboard_write() {
        let mut folio = folio();
        let cmd = folio.update(key('c'));
        assert_eq!(
            cmd,
            Cmd::CopyToClipboard("jayeshprajapati2701@gmail.com".to_string())
        );
    }

    #[test]
    fn clipboard_ack_shows_copied_feedback() {
        let mut folio = folio();
        folio.update(Event::Clipboard(ClipboardEvent { copied: true }));
        let found = (0..folio.doc.height())
            .any(|y| folio.doc.buffer.row_text(y).contains("Copied!"));
        assert!(found);
    }

    #[test]
    fn failed_clipboard_write_shows_nothing() {
        let mut folio = folio();
        folio.update(Event::Clipboard(ClipboardEvent { copied: false }));
        let found = (0..folio.doc.height())
            .any(|y| folio.doc.buffer.row_text(y).contains("Copied!"));
        assert!(!found);
    }

    #[test]
    fn navigation_key_highlights_immediately_and_lands_on_tick() {
        let mut folio = folio();
        folio.update(key('p'));
        // Optimistic highlight, before any scrolling happened.
        assert_eq!(folio.active(), "projects");
        assert_eq!(folio.scroll.offset(), 0);

        folio.update(Event::Tick);
        let projects = folio
            .doc
            .bounds
            .iter()
            .find(|b| b.id == "projects")
            .unwrap();
        assert_eq!(folio.scroll.offset(), projects.top - NAV_ROWS - 1);
        assert_eq!(folio.active(), "projects");
    }

    #[test]
    fn manual_scroll_cancels_animated_jump() {
        let mut folio = Folio::new(FolioConfig::default(), 80, 24);
        folio.update(key('p'));
        assert!(folio.animation.is_some());
        folio.update(key('j'));
        assert!(folio.animation.is_none());
    }

    #[test]
    fn form_submission_acknowledges() {
        let mut folio = folio();
        folio.update(Event::Key(KeyEvent::new(KeyCode::Enter)));
        let found = (0..folio.doc.height())
            .any(|y| folio.doc.buffer.row_text(y).contains("Thanks for reaching out!"));
        assert!(found);
    }

    #[test]
    fn resize_recomposes_for_the_new_width() {
        let mut folio = folio();
        let before = folio.doc.buffer.width();
        folio.update(Event::Resize {
            width: 60,
            height: 20,
        });
        assert_eq!(folio.doc.buffer.width(), 60);
        assert_ne!(folio.doc.buffer.width(), before);
        assert!(folio.scroll.offset() <= folio.scroll.max_offset());
    }

    #[test]
    fn view_draws_navbar_over_content() {
        let folio = folio();
        let rows = frame_text(&folio, 80, 24);
        assert!(rows[0].contains("PJ.dev"));
        assert!(rows[0].contains("Projects"));
        // Content begins below the bar.
        assert!(rows[2..].iter().any(|r| r.contains("AVAILABLE FOR INTERNSHIPS")));
    }

    #[test]
    fn deep_scroll_collapses_navbar_and_shows_top_hint() {
        // The document is around 130 rows at this width; bring the
        // back-to-top depth within reach of it.
        let config = FolioConfig {
            scroll_top_depth: 40,
            ..instant_config()
        };
        let mut folio = Folio::new(config, 80, 24);
        folio.nudge(500);
        assert!(folio.chrome.nav_compact(folio.scroll.offset()));
        assert!(folio.chrome.scroll_top_visible(folio.scroll.offset()));
        let rows = frame_text(&folio, 80, 24);
        assert!(rows[23].contains("↑ top"));
    }

    #[test]
    fn navbar_click_navigates() {
        let mut folio = folio();
        let rows = frame_text(&folio, 80, 24);
        let x = rows[0].find("Contact").unwrap() as u16;
        folio.update(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down,
            x,
            y: 0,
        }));
        assert_eq!(folio.active(), "contact");
    }
}
