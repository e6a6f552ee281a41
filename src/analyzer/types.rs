//! Type definitions for text reports

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Character class assigned by the classification pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter `a-z` / `A-Z`
    Letter,
    /// ASCII digit `0-9`
    Digit,
    /// Any whitespace character
    Space,
    /// One of `. , ! ? ; : ' " ( ) [ ] { }`
    Punctuation,
    /// Everything else
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 5] = [
        CharClass::Letter,
        CharClass::Digit,
        CharClass::Space,
        CharClass::Punctuation,
        CharClass::Special,
    ];
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Letter => write!(f, "Letters"),
            CharClass::Digit => write!(f, "Digits"),
            CharClass::Space => write!(f, "Spaces"),
            CharClass::Punctuation => write!(f, "Punctuation"),
            CharClass::Special => write!(f, "Special Characters"),
        }
    }
}

/// Per-class character counts, in UTF-16 code units
///
/// The five fields partition the input: their sum is always the report's
/// `total_characters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterCounts {
    pub letters: usize,
    pub digits: usize,
    pub spaces: usize,
    pub punctuation: usize,
    pub special_chars: usize,
}

impl CharacterCounts {
    pub fn get(&self, class: CharClass) -> usize {
        match class {
            CharClass::Letter => self.letters,
            CharClass::Digit => self.digits,
            CharClass::Space => self.spaces,
            CharClass::Punctuation => self.punctuation,
            CharClass::Special => self.special_chars,
        }
    }

    pub(crate) fn add(&mut self, class: CharClass, units: usize) {
        match class {
            CharClass::Letter => self.letters += units,
            CharClass::Digit => self.digits += units,
            CharClass::Space => self.spaces += units,
            CharClass::Punctuation => self.punctuation += units,
            CharClass::Special => self.special_chars += units,
        }
    }

    pub fn total(&self) -> usize {
        self.letters + self.digits + self.spaces + self.punctuation + self.special_chars
    }
}

/// One row of the most-frequent-words table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Statistics for a piece of text
///
/// Always built from scratch by [`crate::analyze`] or
/// [`crate::TextAnalyzer::analyze`]; nothing carries over between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextReport {
    /// Length in UTF-16 code units
    pub total_characters: usize,
    pub characters: CharacterCounts,
    pub uppercase: usize,
    pub lowercase: usize,
    /// ASCII letters only, case-folded
    pub letter_frequency: BTreeMap<char, usize>,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub characters_no_spaces: usize,
    pub reading_time_minutes: usize,
    pub speaking_time_minutes: usize,
    /// Most frequent words, count descending, ties in first-seen order
    pub word_frequency: Vec<WordCount>,
    /// `[a-z0-9]` over the lower-cased text
    pub alphanumeric_frequency: BTreeMap<char, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_class_display() {
        assert_eq!(CharClass::Letter.to_string(), "Letters");
        assert_eq!(CharClass::Digit.to_string(), "Digits");
        assert_eq!(CharClass::Space.to_string(), "Spaces");
        assert_eq!(CharClass::Punctuation.to_string(), "Punctuation");
        assert_eq!(CharClass::Special.to_string(), "Special Characters");
    }

    #[test]
    fn test_counts_add_and_get() {
        let mut counts = CharacterCounts::default();
        counts.add(CharClass::Letter, 3);
        counts.add(CharClass::Special, 2);
        counts.add(CharClass::Letter, 1);

        assert_eq!(counts.get(CharClass::Letter), 4);
        assert_eq!(counts.get(CharClass::Special), 2);
        assert_eq!(counts.get(CharClass::Digit), 0);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let mut report = TextReport {
            total_characters: 2,
            words: 1,
            ..Default::default()
        };
        report.characters.letters = 2;
        report.letter_frequency.insert('a', 2);
        report.word_frequency.push(WordCount::new("aa", 1));

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["totalCharacters"], 2);
        assert_eq!(json["characters"]["letters"], 2);
        assert_eq!(json["characters"]["specialChars"], 0);
        assert_eq!(json["letterFrequency"]["a"], 2);
        assert_eq!(json["wordFrequency"][0]["word"], "aa");
        assert_eq!(json["readingTimeMinutes"], 0);
        assert_eq!(json["charactersNoSpaces"], 0);
    }
}
