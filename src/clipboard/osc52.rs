//! OSC 52 clipboard backend
//!
//! Asks the terminal to set the clipboard through an escape sequence, which
//! also works over SSH and inside tmux. The sequence goes to stderr so a
//! report piped from stdout stays clean.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    write_sequence(&mut io::stderr().lock(), text)
}

/// Write the OSC 52 sequence for `text` to `out` and flush it
pub fn write_sequence<W: Write>(out: &mut W, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|_| ClipboardError::WriteError)
}

/// Encode text as `ESC ] 52 ; c ; <base64> BEL`
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
