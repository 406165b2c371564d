#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! RAII-based terminal lifecycle management: raw mode, alternate screen,
//! mouse capture, and cursor visibility are enabled on construction and
//! restored in reverse order on [`Drop`]. Because cleanup lives in `Drop`
//! it also runs during panic unwinding, so no exit path leaks raw mode.

use std::io::{self, Write};

use crossterm::{cursor, event, execute, terminal};

/// Options controlling which terminal modes the session enables.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Switch to the alternate screen.
    pub alternate_screen: bool,
    /// Enable mouse capture (clicks and wheel).
    pub mouse_capture: bool,
    /// Hide the cursor while the session is live.
    pub hide_cursor: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            mouse_capture: true,
            hide_cursor: true,
        }
    }
}

/// Guard owning the terminal's interactive state.
///
/// Construction order: raw mode, alt screen, mouse capture, hide cursor.
/// Drop restores in reverse. Restoration errors are ignored; there is
/// nothing useful to do with them during teardown.
#[derive(Debug)]
pub struct TerminalSession {
    options: SessionOptions,
    restored: bool,
}

impl TerminalSession {
    /// Enter the configured terminal modes.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut out = io::stdout();
        if options.alternate_screen {
            execute!(out, terminal::EnterAlternateScreen)?;
        }
        if options.mouse_capture {
            execute!(out, event::EnableMouseCapture)?;
        }
        if options.hide_cursor {
            execute!(out, cursor::Hide)?;
        }

        Ok(Self {
            options,
            restored: false,
        })
    }

    /// Current terminal size in (columns, rows).
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Restore the terminal explicitly. Safe to call more than once;
    /// `Drop` becomes a no-op afterwards.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let mut out = io::stdout();
        if self.options.hide_cursor {
            execute!(out, cursor::Show)?;
        }
        if self.options.mouse_capture {
            execute!(out, event::DisableMouseCapture)?;
        }
        if self.options.alternate_screen {
            execute!(out, terminal::LeaveAlternateScreen)?;
        }
        terminal::disable_raw_mode()?;
        out.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::SessionOptions;

    #[test]
    fn default_options_enable_fullscreen_interaction() {
        let opts = SessionOptions::default();
        assert!(opts.alternate_screen);
        assert!(opts.mouse_capture);
        assert!(opts.hide_cursor);
    }
}
