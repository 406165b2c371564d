#![forbid(unsafe_code)]

//! Scroll position, scroll-dependent chrome, and animated jumps.

use std::time::{Duration, Instant};

use folio_core::easing::{EasingFn, ease_in_out};

/// Depth at which the navigation bar collapses to its compact density.
pub const NAV_COMPACT_DEPTH: u16 = 50;

/// Depth at which the back-to-top affordance appears.
pub const SCROLL_TOP_DEPTH: u16 = 400;

/// How long an animated jump takes.
pub const SCROLL_ANIMATION_DURATION: Duration = Duration::from_millis(350);

/// Scroll depths at which chrome toggles. Both predicates are strict:
/// sitting exactly on a threshold leaves the chrome in its resting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeThresholds {
    pub nav_compact: u16,
    pub scroll_top: u16,
}

impl Default for ChromeThresholds {
    fn default() -> Self {
        Self {
            nav_compact: NAV_COMPACT_DEPTH,
            scroll_top: SCROLL_TOP_DEPTH,
        }
    }
}

impl ChromeThresholds {
    /// Whether the navigation bar should render compact at `offset`.
    #[must_use]
    pub fn nav_compact(&self, offset: u16) -> bool {
        offset > self.nav_compact
    }

    /// Whether the back-to-top affordance should show at `offset`.
    #[must_use]
    pub fn scroll_top_visible(&self, offset: u16) -> bool {
        offset > self.scroll_top
    }
}

/// Clamped scroll position over a document taller than the viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollState {
    #[must_use]
    pub fn new(content_height: u16, viewport_height: u16) -> Self {
        Self {
            offset: 0,
            content_height,
            viewport_height,
        }
    }

    /// First visible document row.
    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Largest reachable offset.
    #[must_use]
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Update dimensions after a resize or document recomposition; the
    /// offset is re-clamped so the viewport never hangs past the end.
    pub fn resize(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll by a signed number of rows, clamped at both ends.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = i64::from(self.offset) + i64::from(delta);
        self.offset = next.clamp(0, i64::from(self.max_offset())) as u16;
    }

    /// Jump to an absolute offset, clamped.
    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }
}

/// An in-flight animated scroll.
///
/// Samples a cubic ease-in-out curve between two offsets. Retargeting
/// mid-flight starts a fresh curve from the current sampled position, so
/// rapid navigation never snaps.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: EasingFn,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: u16, to: u16, start: Instant) -> Self {
        Self {
            from: f32::from(from),
            to: f32::from(to),
            start,
            duration: SCROLL_ANIMATION_DURATION,
            easing: ease_in_out,
        }
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Destination offset.
    #[must_use]
    pub fn target(&self) -> u16 {
        self.to.round() as u16
    }

    /// Offset at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target();
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = (self.easing)(t);
        (self.from + (self.to - self.from) * eased).round() as u16
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Redirect the animation toward a new target, starting from wherever
    /// the current curve has reached at `now`.
    pub fn retarget(&mut self, to: u16, now: Instant) {
        self.from = f32::from(self.sample(now));
        self.to = f32::from(to);
        self.start = now;
    }
}
