#![forbid(unsafe_code)]

//! Active-section tracking over a scrolling document.
//!
//! The document is a vertical strip of registered sections; the tracker
//! answers "which section is the reader looking at". A section counts as
//! read when it overlaps the focus band, the middle 20% of the viewport.
//! When several sections overlap the band at once, the one latest in
//! document order wins, so scrolling downward hands the highlight to the
//! incoming section as soon as it reaches the band.
//!
//! Observation is edge-triggered: [`SectionTracker::observe`] only reports
//! a section when the winner differs from the currently active one, which
//! keeps redraws proportional to actual transitions rather than scroll
//! traffic.

use tracing::debug;

/// Identifier of a registered section.
pub type SectionId = &'static str;

/// Rows a navigation jump lands above the section top, leaving room for
/// sticky chrome. Callers with a measured header pass their own value.
pub const DEFAULT_HEADER_OFFSET: u16 = 3;

/// A section's vertical extent in document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub id: SectionId,
    /// First document row of the section.
    pub top: u16,
    /// Height in rows. Zero-height sections never become active.
    pub height: u16,
}

impl SectionBounds {
    /// One past the last row, widened to avoid overflow at the u16 edge.
    #[must_use]
    pub fn bottom(&self) -> u32 {
        u32::from(self.top) + u32::from(self.height)
    }
}

/// The visible window over the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible document row.
    pub offset: u16,
    /// Window height in rows.
    pub height: u16,
}

impl Viewport {
    /// The focus band: the middle 20% of the window, as half-open document
    /// rows `[top, bottom)`. For very short windows where 20% rounds to
    /// nothing the band is widened to a single row so tracking never goes
    /// blind; a zero-height window has no band at all.
    #[must_use]
    pub fn focus_band(&self) -> (u32, u32) {
        if self.height == 0 {
            return (0, 0);
        }
        let offset = u32::from(self.offset);
        let height = u32::from(self.height);
        let top = offset + height * 2 / 5;
        let bottom = (offset + height * 3 / 5).max(top + 1);
        (top, bottom)
    }
}

/// Tracker configuration.
#[derive(Debug, Clone, Copy)]
pub struct TrackerConfig {
    /// Rows to land above a section top when navigating to it.
    pub header_offset: u16,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            header_offset: DEFAULT_HEADER_OFFSET,
        }
    }
}

/// Tracks which registered section currently holds the reader's focus.
#[derive(Debug, Default)]
pub struct SectionTracker {
    /// Registration order is document order; winner selection depends on it.
    sections: Vec<SectionBounds>,
    current: Option<SectionId>,
    config: TrackerConfig,
}

impl SectionTracker {
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            sections: Vec::new(),
            current: None,
            config,
        }
    }

    /// Register a section. Registering an id that is already tracked
    /// replaces its bounds in place, so the document position it holds in
    /// the winner ordering is kept and no duplicate entry can fire twice.
    pub fn register(&mut self, bounds: SectionBounds) {
        if let Some(slot) = self.sections.iter_mut().find(|s| s.id == bounds.id) {
            *slot = bounds;
        } else {
            self.sections.push(bounds);
        }
    }

    /// Stop tracking every section. Safe to call repeatedly; with nothing
    /// registered, [`SectionTracker::observe`] reports nothing until
    /// sections are registered again. The active id is left untouched; it
    /// stays until another section takes the band.
    pub fn release(&mut self) {
        self.sections.clear();
    }

    /// Stop tracking one section. Unknown ids are ignored, so releasing
    /// twice is harmless. The active id is left untouched even when it
    /// names the released section.
    pub fn release_section(&mut self, id: SectionId) {
        self.sections.retain(|s| s.id != id);
    }

    /// The currently active section, if any has been determined.
    #[must_use]
    pub fn current(&self) -> Option<SectionId> {
        self.current
    }

    /// Registered sections in document order.
    #[must_use]
    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    /// Re-evaluate the focus band against `viewport`.
    ///
    /// Returns the newly active section when the winner changed, `None`
    /// when it did not (including when no section overlaps the band; the
    /// previous winner stays active then).
    pub fn observe(&mut self, viewport: Viewport) -> Option<SectionId> {
        let (band_top, band_bottom) = viewport.focus_band();
        if band_top == band_bottom {
            return None;
        }

        let winner = self
            .sections
            .iter()
            .filter(|s| u32::from(s.top) < band_bottom && s.bottom() > band_top)
            .last()
            .map(|s| s.id)?;

        if self.current == Some(winner) {
            return None;
        }
        debug!(section = winner, "active section changed");
        self.current = Some(winner);
        Some(winner)
    }

    /// Jump to a section: mark it active immediately (without waiting for
    /// the scroll to arrive) and return the document row the scroll should
    /// land on, `header_offset` rows above the section top. Unknown ids
    /// change nothing and return `None`.
    pub fn navigate_to(&mut self, id: SectionId) -> Option<u16> {
        let section = self.sections.iter().find(|s| s.id == id)?;
        let target = section.top.saturating_sub(self.config.header_offset);
        debug!(section = id, target, "navigating");
        self.current = Some(id);
        Some(target)
    }
}
