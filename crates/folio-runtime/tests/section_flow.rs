//! End-to-end behavior of a scroll journey: animated navigation, focus
//! tracking, chrome toggles, and copy feedback driven together the way
//! the application drives them.

use std::time::{Duration, Instant};

use folio_runtime::scroll::SCROLL_ANIMATION_DURATION;
use folio_runtime::{
    ChromeThresholds, ScrollAnimation, ScrollState, SectionBounds, SectionTracker, TrackerConfig,
    TransientFlag, Viewport,
};

const VIEWPORT_ROWS: u16 = 40;
const DOC_ROWS: u16 = 600;

fn portfolio_tracker() -> SectionTracker {
    let mut tracker = SectionTracker::new(TrackerConfig { header_offset: 3 });
    for (id, top, height) in [
        ("home", 0, 60),
        ("about", 60, 120),
        ("skills", 180, 100),
        ("projects", 280, 160),
        ("education", 440, 80),
        ("contact", 520, 80),
    ] {
        tracker.register(SectionBounds { id, top, height });
    }
    tracker
}

fn viewport(scroll: &ScrollState) -> Viewport {
    Viewport {
        offset: scroll.offset(),
        height: VIEWPORT_ROWS,
    }
}

#[test]
fn animated_navigation_lands_on_target_and_keeps_optimistic_highlight() {
    let mut tracker = portfolio_tracker();
    let mut scroll = ScrollState::new(DOC_ROWS, VIEWPORT_ROWS);
    let t0 = Instant::now();

    let target = tracker.navigate_to("projects").unwrap();
    assert_eq!(target, 277);
    assert_eq!(tracker.current(), Some("projects"));

    // Drive the animation through simulated 33ms ticks.
    let mut anim = ScrollAnimation::new(scroll.offset(), target, t0);
    let mut now = t0;
    while !anim.is_finished(now) {
        now += Duration::from_millis(33);
        scroll.scroll_to(anim.sample(now));
        tracker.observe(viewport(&scroll));
    }
    assert_eq!(scroll.offset(), target);
    // Band [293, 301) sits inside projects; intermediate sections crossed
    // the band during the flight, but the arrival restores the target.
    assert_eq!(tracker.current(), Some("projects"));
}

#[test]
fn manual_scroll_hands_highlight_to_each_section_in_order() {
    let mut tracker = portfolio_tracker();
    let mut scroll = ScrollState::new(DOC_ROWS, VIEWPORT_ROWS);

    let mut seen = Vec::new();
    while scroll.offset() < scroll.max_offset() {
        scroll.scroll_by(4);
        if let Some(id) = tracker.observe(viewport(&scroll)) {
            seen.push(id);
        }
    }
    assert_eq!(
        seen,
        ["home", "about", "skills", "projects", "education", "contact"]
    );
}

#[test]
fn retargeting_mid_flight_turns_around_smoothly() {
    let mut tracker = portfolio_tracker();
    let mut scroll = ScrollState::new(DOC_ROWS, VIEWPORT_ROWS);
    let t0 = Instant::now();

    let down = tracker.navigate_to("contact").unwrap();
    let mut anim = ScrollAnimation::new(scroll.offset(), down, t0);

    // Halfway there the reader clicks "about" instead.
    let mid = t0 + SCROLL_ANIMATION_DURATION / 2;
    let position_at_turn = anim.sample(mid);
    let up = tracker.navigate_to("about").unwrap();
    anim.retarget(up, mid);
    assert_eq!(anim.sample(mid), position_at_turn);
    assert_eq!(tracker.current(), Some("about"));

    let done = mid + SCROLL_ANIMATION_DURATION;
    scroll.scroll_to(anim.sample(done));
    assert_eq!(scroll.offset(), up);
    tracker.observe(viewport(&scroll));
    assert_eq!(tracker.current(), Some("about"));
}

#[test]
fn chrome_follows_scroll_depth_through_a_journey() {
    let chrome = ChromeThresholds::default();
    let mut scroll = ScrollState::new(DOC_ROWS, VIEWPORT_ROWS);

    assert!(!chrome.nav_compact(scroll.offset()));
    assert!(!chrome.scroll_top_visible(scroll.offset()));

    scroll.scroll_to(51);
    assert!(chrome.nav_compact(scroll.offset()));
    assert!(!chrome.scroll_top_visible(scroll.offset()));

    scroll.scroll_to(401);
    assert!(chrome.nav_compact(scroll.offset()));
    assert!(chrome.scroll_top_visible(scroll.offset()));

    // Back-to-top returns everything to resting state.
    scroll.scroll_to(0);
    assert!(!chrome.nav_compact(scroll.offset()));
    assert!(!chrome.scroll_top_visible(scroll.offset()));
}

#[test]
fn copy_feedback_survives_rapid_recopy() {
    let t0 = Instant::now();
    let mut copied = TransientFlag::default();

    copied.arm(t0);
    assert!(copied.is_set(t0 + Duration::from_millis(1999)));

    // Copying again at 1s extends the feedback to 3s total.
    copied.arm(t0 + Duration::from_millis(1000));
    assert!(copied.is_set(t0 + Duration::from_millis(2500)));
    assert!(!copied.is_set(t0 + Duration::from_millis(3000)));
}
