//! Word, sentence and paragraph segmentation

fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Count whitespace-delimited tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count segments between runs of `.`, `!` or `?` that contain a letter
///
/// A fragment holding only digits, symbols or whitespace (the `" 123"` after
/// `"Hello, World!"`) is not a sentence.
pub fn count_sentences(text: &str) -> usize {
    text.split(is_sentence_terminator)
        .filter(|s| s.chars().any(char::is_alphabetic))
        .count()
}

/// Count segments between runs of newlines that hold more than whitespace
pub fn count_paragraphs(text: &str) -> usize {
    count_non_blank(text.split('\n'))
}

// Runs of separators only produce empty pieces, which are dropped here, so
// splitting on single separators gives the same count as splitting on runs.
fn count_non_blank<'a>(segments: impl Iterator<Item = &'a str>) -> usize {
    segments.filter(|s| !s.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \t\n"), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("  one   two\tthree\n\nfour  "), 4);
        assert_eq!(count_words("don't stop-me now"), 3);
    }

    #[test]
    fn test_count_sentences() {
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("..."), 0);
        assert_eq!(count_sentences("No terminator"), 1);
        assert_eq!(count_sentences("One. Two! Three?"), 3);
        assert_eq!(count_sentences("Wait...what?!"), 2);
        assert_eq!(count_sentences("Trailing space.   "), 1);
        assert_eq!(count_sentences("Hello, World! 123"), 1);
        assert_eq!(count_sentences("Done. 42!"), 1);
        assert_eq!(count_sentences("Café? Ja."), 2);
    }

    #[test]
    fn test_count_paragraphs() {
        assert_eq!(count_paragraphs(""), 0);
        assert_eq!(count_paragraphs("\n\n\n"), 0);
        assert_eq!(count_paragraphs("single"), 1);
        assert_eq!(count_paragraphs("first\n\n\nsecond"), 2);
        assert_eq!(count_paragraphs("first\n   \nsecond\n"), 2);
        assert_eq!(count_paragraphs("windows\r\nline endings\r\n"), 2);
    }
}
