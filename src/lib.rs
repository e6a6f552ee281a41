//! tally library - word, letter and character statistics for text
//!
//! The core is [`analyze`], a pure function from a string to a
//! [`TextReport`]. The remaining modules back the `tally` command-line tool:
//! reading input, rendering and exporting reports, configuration and
//! clipboard access.

pub mod analyzer;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod render;

// Re-export commonly used types for convenience
pub use analyzer::{
    AnalyzerOptions, CharClass, CharacterCounts, TextAnalyzer, TextReport, WordCount, analyze,
};
pub use config::Config;
pub use error::TallyError;
pub use export::View;
