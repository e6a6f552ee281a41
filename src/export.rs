//! Plain-text statistics export
//!
//! These are the summaries put on the clipboard by `--copy`. The layout
//! is fixed so anything pasted elsewhere reads the same every time.

use crate::analyzer::{CharClass, TextReport};

/// Which part of the report to show and export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    /// Word and letter statistics
    #[default]
    All,
    /// Word, sentence and paragraph counts, reading time, top words
    Words,
    /// Character classes, case split, letter frequency
    Letters,
}

/// Share of `part` in `whole` as a percentage; 0.0 when `whole` is 0
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// One row of a percentage breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub label: String,
    pub count: usize,
    pub percent: f64,
}

/// Each character class as a share of all characters
pub fn class_breakdown(report: &TextReport) -> Vec<Share> {
    CharClass::ALL
        .iter()
        .map(|&class| {
            let count = report.characters.get(class);
            Share {
                label: class.to_string(),
                count,
                percent: percent(count, report.total_characters),
            }
        })
        .collect()
}

/// Uppercase and lowercase as shares of all letters
pub fn case_breakdown(report: &TextReport) -> [Share; 2] {
    let letters = report.characters.letters;
    [
        Share {
            label: "Uppercase".to_string(),
            count: report.uppercase,
            percent: percent(report.uppercase, letters),
        },
        Share {
            label: "Lowercase".to_string(),
            count: report.lowercase,
            percent: percent(report.lowercase, letters),
        },
    ]
}

pub fn word_summary(report: &TextReport) -> String {
    format!(
        "Word Count: {}\n\
         Character Count: {}\n\
         Character Count (no spaces): {}\n\
         Sentence Count: {}\n\
         Paragraph Count: {}\n\
         Estimated Reading Time: {} minute(s)\n\
         Estimated Speaking Time: {} minute(s)",
        report.words,
        report.total_characters,
        report.characters_no_spaces,
        report.sentences,
        report.paragraphs,
        report.reading_time_minutes,
        report.speaking_time_minutes,
    )
}

pub fn letter_summary(report: &TextReport) -> String {
    let c = &report.characters;
    format!(
        "Letter Analysis Results:\n\
         Total Characters: {}\n\
         Letters: {} ({} uppercase, {} lowercase)\n\
         Digits: {}\n\
         Spaces: {}\n\
         Punctuation: {}\n\
         Special Characters: {}",
        report.total_characters,
        c.letters,
        report.uppercase,
        report.lowercase,
        c.digits,
        c.spaces,
        c.punctuation,
        c.special_chars,
    )
}

/// Export text for `view`
pub fn summary(report: &TextReport, view: View) -> String {
    match view {
        View::Words => word_summary(report),
        View::Letters => letter_summary(report),
        View::All => format!("{}\n\n{}", word_summary(report), letter_summary(report)),
    }
}
