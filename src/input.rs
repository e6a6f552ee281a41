//! Reading text to analyze from a file or stdin

mod reader;

pub use reader::{InputReader, utf16_len};
