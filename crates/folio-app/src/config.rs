#![forbid(unsafe_code)]

//! Viewer configuration.
//!
//! All knobs have defaults matching the built-in behavior; a TOML file
//! (pointed at by `FOLIO_CONFIG`) can override any of them. A missing
//! file means defaults, a malformed one is an error.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use folio_core::session::SessionOptions;
use folio_runtime::program::{DEFAULT_TICK_RATE, ProgramConfig};
use folio_runtime::scroll::{NAV_COMPACT_DEPTH, SCROLL_ANIMATION_DURATION, SCROLL_TOP_DEPTH};
use folio_runtime::transient::DEFAULT_FEEDBACK_INTERVAL;
use folio_runtime::ChromeThresholds;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Input poll timeout in milliseconds.
    pub tick_rate_ms: u64,
    /// Scroll depth past which the navigation bar collapses.
    pub nav_compact_depth: u16,
    /// Scroll depth past which the back-to-top hint shows.
    pub scroll_top_depth: u16,
    /// How long "Copied!" feedback stays up, in milliseconds.
    pub copied_feedback_ms: u64,
    /// Animated jump duration in milliseconds.
    pub scroll_animation_ms: u64,
    /// Capture mouse clicks and wheel.
    pub mouse: bool,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE.as_millis() as u64,
            nav_compact_depth: NAV_COMPACT_DEPTH,
            scroll_top_depth: SCROLL_TOP_DEPTH,
            copied_feedback_ms: DEFAULT_FEEDBACK_INTERVAL.as_millis() as u64,
            scroll_animation_ms: SCROLL_ANIMATION_DURATION.as_millis() as u64,
            mouse: true,
        }
    }
}

impl FolioConfig {
    /// Load from `path`; `None` or a missing file yields defaults.
    pub fn load(path: Option<&Path>) -> io::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err),
        };
        let config =
            toml::from_str(&text).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    #[must_use]
    pub fn chrome(&self) -> ChromeThresholds {
        ChromeThresholds {
            nav_compact: self.nav_compact_depth,
            scroll_top: self.scroll_top_depth,
        }
    }

    #[must_use]
    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }

    #[must_use]
    pub fn scroll_animation(&self) -> Duration {
        Duration::from_millis(self.scroll_animation_ms)
    }

    #[must_use]
    pub fn program(&self) -> ProgramConfig {
        ProgramConfig {
            tick_rate: Duration::from_millis(self.tick_rate_ms),
            session: SessionOptions {
                mouse_capture: self.mouse,
                ..SessionOptions::default()
            },
        }
    }
}
