//! Clipboard module for tally
//!
//! Copies the plain-text statistics export with support for:
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (for remote terminals)
//! - Auto mode (system with OSC 52 fallback)

mod backend;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
pub use osc52::encode_osc52;
