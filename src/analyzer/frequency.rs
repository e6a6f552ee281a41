//! Word and character frequency tables

use std::collections::{BTreeMap, HashMap};

use super::types::WordCount;

/// Strip a lower-cased token down to its ASCII letters and digits
///
/// Underscore and every other symbol are removed, so `"don't"` becomes
/// `"dont"` and `"snake_case"` becomes `"snakecase"`.
pub fn clean_word(token: &str) -> String {
    token.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Most frequent words, case-insensitive
///
/// Sorted by count descending. Words with equal counts keep the order in
/// which they first appeared. At most `limit` entries are returned.
pub fn top_words(text: &str, limit: usize) -> Vec<WordCount> {
    let lowered = text.to_lowercase();

    let mut counts: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in lowered.split_whitespace() {
        let word = clean_word(token);
        if word.is_empty() {
            continue;
        }
        match index.get(&word) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push(WordCount::new(word, 1));
            }
        }
    }

    // sort_by is stable, which keeps first-seen order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Count `[a-z0-9]` over the lower-cased text
pub fn alphanumeric_frequency(text: &str) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            *freq.entry(ch).or_insert(0) += 1;
        }
    }
    freq
}
