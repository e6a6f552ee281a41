//! Text analysis engine
//!
//! Turns a string into a [`TextReport`]: character counts by class, word,
//! sentence and paragraph counts, letter and word frequency tables, and
//! reading/speaking time estimates.
//!
//! Analysis is a pure function of its input. It is cheap enough to rerun on
//! every edit; callers that want to debounce do so on their side.

mod classify;
mod frequency;
mod segment;
mod types;

pub use classify::classify;
pub use frequency::clean_word;
pub use types::{CharClass, CharacterCounts, TextReport, WordCount};

use classify::CharacterScan;

/// Average silent reading speed, words per minute
pub const DEFAULT_READING_WPM: usize = 225;
/// Average speaking speed, words per minute
pub const DEFAULT_SPEAKING_WPM: usize = 150;
/// Rows in the most-frequent-words table
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Tunables for [`TextAnalyzer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub reading_wpm: usize,
    pub speaking_wpm: usize,
    pub top_words: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            reading_wpm: DEFAULT_READING_WPM,
            speaking_wpm: DEFAULT_SPEAKING_WPM,
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

/// Analyzer carrying its options; holds no state between calls
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    options: AnalyzerOptions,
}

impl TextAnalyzer {
    pub fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    pub fn analyze(&self, text: &str) -> TextReport {
        #[cfg(debug_assertions)]
        log::debug!("Analyzing {} bytes of text", text.len());

        let scan = CharacterScan::scan(text);
        let words = segment::count_words(text);

        TextReport {
            total_characters: scan.total,
            characters_no_spaces: scan.total - scan.counts.spaces,
            characters: scan.counts,
            uppercase: scan.uppercase,
            lowercase: scan.lowercase,
            letter_frequency: scan.letter_frequency,
            words,
            sentences: segment::count_sentences(text),
            paragraphs: segment::count_paragraphs(text),
            reading_time_minutes: minutes_at(words, self.options.reading_wpm),
            speaking_time_minutes: minutes_at(words, self.options.speaking_wpm),
            word_frequency: frequency::top_words(text, self.options.top_words),
            alphanumeric_frequency: frequency::alphanumeric_frequency(text),
        }
    }
}

/// Analyze `text` with the default options
pub fn analyze(text: &str) -> TextReport {
    TextAnalyzer::default().analyze(text)
}

/// Whole minutes needed for `words` at `wpm`, rounded up
///
/// A rate of zero yields zero rather than dividing by it.
pub fn minutes_at(words: usize, wpm: usize) -> usize {
    if wpm == 0 {
        return 0;
    }
    words.div_ceil(wpm)
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod analyzer_tests;
