//! Single-pass character classification
//!
//! Every character lands in exactly one [`CharClass`]. Counts are kept in
//! UTF-16 code units so a character outside the Basic Multilingual Plane
//! weighs two, the same as a browser text field reports its length.

use std::collections::BTreeMap;

use super::types::{CharClass, CharacterCounts};

const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}',
];

/// Classify a character, first matching rule wins
pub fn classify(ch: char) -> CharClass {
    if ch.is_ascii_alphabetic() {
        CharClass::Letter
    } else if ch.is_ascii_digit() {
        CharClass::Digit
    } else if ch.is_whitespace() {
        CharClass::Space
    } else if PUNCTUATION.contains(&ch) {
        CharClass::Punctuation
    } else {
        CharClass::Special
    }
}

/// Accumulated result of the classification pass
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CharacterScan {
    pub total: usize,
    pub counts: CharacterCounts,
    pub uppercase: usize,
    pub lowercase: usize,
    pub letter_frequency: BTreeMap<char, usize>,
}

impl CharacterScan {
    pub fn scan(text: &str) -> Self {
        let mut scan = Self::default();
        for ch in text.chars() {
            scan.push(ch);
        }
        scan
    }

    fn push(&mut self, ch: char) {
        let units = ch.len_utf16();
        self.total += units;

        let class = classify(ch);
        self.counts.add(class, units);

        if class == CharClass::Letter {
            if ch.is_ascii_uppercase() {
                self.uppercase += 1;
            } else {
                self.lowercase += 1;
            }
            *self
                .letter_frequency
                .entry(ch.to_ascii_lowercase())
                .or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify('a'), CharClass::Letter);
        assert_eq!(classify('Z'), CharClass::Letter);
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify(' '), CharClass::Space);
        assert_eq!(classify('\t'), CharClass::Space);
        assert_eq!(classify('\n'), CharClass::Space);
        assert_eq!(classify('\u{00a0}'), CharClass::Space);
        assert_eq!(classify('"'), CharClass::Punctuation);
        assert_eq!(classify('}'), CharClass::Punctuation);
        assert_eq!(classify('-'), CharClass::Special);
        assert_eq!(classify('_'), CharClass::Special);
        assert_eq!(classify('@'), CharClass::Special);
    }

    #[test]
    fn test_non_ascii_letters_are_special() {
        assert_eq!(classify('é'), CharClass::Special);
        assert_eq!(classify('ß'), CharClass::Special);
        assert_eq!(classify('日'), CharClass::Special);
        // Non-ASCII digits do not count as digits
        assert_eq!(classify('٣'), CharClass::Special);
    }

    #[test]
    fn test_scan_counts_case_and_frequency() {
        let scan = CharacterScan::scan("AbBa");
        assert_eq!(scan.counts.letters, 4);
        assert_eq!(scan.uppercase, 2);
        assert_eq!(scan.lowercase, 2);
        assert_eq!(scan.letter_frequency.get(&'a'), Some(&2));
        assert_eq!(scan.letter_frequency.get(&'b'), Some(&2));
        assert_eq!(scan.letter_frequency.len(), 2);
    }

    #[test]
    fn test_scan_astral_char_weighs_two_units() {
        let scan = CharacterScan::scan("a🎉");
        assert_eq!(scan.total, 3);
        assert_eq!(scan.counts.letters, 1);
        assert_eq!(scan.counts.special_chars, 2);
        assert_eq!(scan.counts.total(), scan.total);
    }

    #[test]
    fn test_scan_empty() {
        assert_eq!(CharacterScan::scan(""), CharacterScan::default());
    }
}
