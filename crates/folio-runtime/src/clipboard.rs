#![forbid(unsafe_code)]

//! Clipboard writes over OSC 52.
//!
//! OSC 52 sets the system clipboard through the terminal itself, so it
//! works over SSH and inside multiplexers that pass the sequence through.
//! The terminal gives no acknowledgement; success here means the bytes
//! reached the writer.

use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

/// Largest text accepted for a clipboard write. Terminals commonly cap
/// the OSC 52 payload around 100KB of base64; this stays well under.
pub const MAX_CLIPBOARD_TEXT: usize = 64 * 1024;

/// Write `text` to the system clipboard via OSC 52 and flush.
pub fn copy_osc52<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    if text.len() > MAX_CLIPBOARD_TEXT {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "clipboard text exceeds OSC 52 payload limit",
        ));
    }
    let encoded = STANDARD.encode(text.as_bytes());
    debug!(len = text.len(), "clipboard write");
    write!(writer, "\x1b]52;c;{encoded}\x07")?;
    writer.flush()
}
