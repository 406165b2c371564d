#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Every stimulus the runtime reacts to is an [`Event`]: keyboard, mouse,
//! resize, tick expiry, and clipboard-write completion. Converting from the
//! backend (crossterm) happens at the loop edge so the rest of the crate
//! stays backend-agnostic.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },
    /// A scheduled tick fired.
    Tick,
    /// A clipboard write completed.
    Clipboard(ClipboardEvent),
}

/// Completion notification for an asynchronous clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardEvent {
    /// Whether the write reached the terminal.
    pub copied: bool,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
}

bitflags! {
    /// Modifier keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE  = 0;
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
    }
}

/// A mouse event in 0-indexed terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: u16,
    pub y: u16,
}

/// Kinds of mouse events folio reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Left button pressed.
    Down,
    /// Wheel scrolled up.
    ScrollUp,
    /// Wheel scrolled down.
    ScrollDown,
}

impl Event {
    /// Convert a crossterm event, dropping kinds folio does not handle
    /// (key releases, drags, focus, paste).
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event as ct;

        match event {
            ct::Event::Key(key) if key.kind != ct::KeyEventKind::Release => {
                let code = match key.code {
                    ct::KeyCode::Char(c) => KeyCode::Char(c),
                    ct::KeyCode::Enter => KeyCode::Enter,
                    ct::KeyCode::Esc => KeyCode::Escape,
                    ct::KeyCode::Backspace => KeyCode::Backspace,
                    ct::KeyCode::Tab => KeyCode::Tab,
                    ct::KeyCode::Up => KeyCode::Up,
                    ct::KeyCode::Down => KeyCode::Down,
                    ct::KeyCode::Left => KeyCode::Left,
                    ct::KeyCode::Right => KeyCode::Right,
                    ct::KeyCode::PageUp => KeyCode::PageUp,
                    ct::KeyCode::PageDown => KeyCode::PageDown,
                    ct::KeyCode::Home => KeyCode::Home,
                    ct::KeyCode::End => KeyCode::End,
                    _ => return None,
                };
                let mut modifiers = Modifiers::NONE;
                if key.modifiers.contains(ct::KeyModifiers::SHIFT) {
                    modifiers |= Modifiers::SHIFT;
                }
                if key.modifiers.contains(ct::KeyModifiers::CONTROL) {
                    modifiers |= Modifiers::CTRL;
                }
                if key.modifiers.contains(ct::KeyModifiers::ALT) {
                    modifiers |= Modifiers::ALT;
                }
                Some(Event::Key(KeyEvent { code, modifiers }))
            }
            ct::Event::Mouse(mouse) => {
                let kind = match mouse.kind {
                    ct::MouseEventKind::Down(ct::MouseButton::Left) => MouseEventKind::Down,
                    ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
                    ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
                    _ => return None,
                };
                Some(Event::Mouse(MouseEvent {
                    kind,
                    x: mouse.column,
                    y: mouse.row,
                }))
            }
            ct::Event::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}
