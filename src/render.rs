//! Terminal and JSON rendering of a report

use std::io::{self, Write};

use crate::analyzer::TextReport;
use crate::export::{View, case_breakdown, class_breakdown};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 28;

/// Write the report as pretty-printed JSON
///
/// JSON output always carries the full report, whatever the view.
pub fn write_json<W: Write>(out: &mut W, report: &TextReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Write the human-readable sections for `view`
pub fn write_text<W: Write>(out: &mut W, report: &TextReport, view: View) -> io::Result<()> {
    match view {
        View::Words => write_word_sections(out, report),
        View::Letters => write_letter_sections(out, report),
        View::All => {
            write_word_sections(out, report)?;
            writeln!(out)?;
            write_letter_sections(out, report)
        }
    }
}

fn write_row<W: Write>(out: &mut W, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "  {:<width$}{:>8}", label, value, width = LABEL_WIDTH)
}

fn write_word_sections<W: Write>(out: &mut W, report: &TextReport) -> io::Result<()> {
    writeln!(out, "Basic Statistics")?;
    write_row(out, "Words", report.words)?;
    write_row(out, "Characters (with spaces)", report.total_characters)?;
    write_row(out, "Characters (no spaces)", report.characters_no_spaces)?;
    write_row(out, "Sentences", report.sentences)?;
    write_row(out, "Paragraphs", report.paragraphs)?;
    write_row(
        out,
        "Reading time",
        format!("{} min", report.reading_time_minutes),
    )?;
    write_row(
        out,
        "Speaking time",
        format!("{} min", report.speaking_time_minutes),
    )?;

    if !report.word_frequency.is_empty() {
        writeln!(out)?;
        writeln!(out, "Most Frequent Words")?;
        let width = report
            .word_frequency
            .iter()
            .map(|w| w.word.len())
            .max()
            .unwrap_or(0);
        for (rank, entry) in report.word_frequency.iter().enumerate() {
            writeln!(
                out,
                "  {:>2}. {:<width$}  {}",
                rank + 1,
                entry.word,
                entry.count,
                width = width
            )?;
        }
    }

    if !report.alphanumeric_frequency.is_empty() {
        writeln!(out)?;
        writeln!(out, "Letter Frequency")?;
        let mut entries: Vec<(char, usize)> = report
            .alphanumeric_frequency
            .iter()
            .map(|(&ch, &count)| (ch, count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        let line = entries
            .iter()
            .map(|(ch, count)| format!("{}:{}", ch, count))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "  {}", line)?;
    }

    Ok(())
}

fn write_letter_sections<W: Write>(out: &mut W, report: &TextReport) -> io::Result<()> {
    writeln!(out, "Character Types")?;
    write_row(out, "Total Characters", report.total_characters)?;
    let classes = class_breakdown(report);
    let cases = case_breakdown(report);
    for share in classes.iter().chain(cases.iter()) {
        writeln!(
            out,
            "  {:<width$}{:>8}  ({:.1}%)",
            share.label,
            share.count,
            share.percent,
            width = LABEL_WIDTH
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Alphabet")?;
    let max = report.letter_frequency.values().copied().max().unwrap_or(0);
    for letter in 'a'..='z' {
        let count = report.letter_frequency.get(&letter).copied().unwrap_or(0);
        let bar = "█".repeat(bar_len(count, max));
        writeln!(out, "  {}  {:<width$} {}", letter, bar, count, width = BAR_WIDTH)?;
    }

    Ok(())
}

/// Bar length scaled to the most frequent letter; any non-zero count shows
pub fn bar_len(count: usize, max: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * BAR_WIDTH / max).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    fn render(text: &str, view: View) -> String {
        let mut buffer = Vec::new();
        write_text(&mut buffer, &analyze(text), view).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_bar_len() {
        assert_eq!(bar_len(0, 0), 0);
        assert_eq!(bar_len(0, 10), 0);
        assert_eq!(bar_len(10, 10), BAR_WIDTH);
        assert_eq!(bar_len(5, 10), BAR_WIDTH / 2);
        assert_eq!(bar_len(1, 1000), 1);
    }

    #[test]
    fn test_words_view_sections() {
        let output = render("The the THE. Cat!", View::Words);
        assert!(output.starts_with("Basic Statistics\n"));
        assert!(output.contains("Most Frequent Words"));
        assert!(output.contains("   1. the  3"));
        assert!(output.contains("   2. cat  1"));
        assert!(output.contains("Letter Frequency"));
        assert!(!output.contains("Alphabet"));
    }

    #[test]
    fn test_letters_view_lists_whole_alphabet() {
        let output = render("aab", View::Letters);
        assert!(output.starts_with("Character Types\n"));
        assert!(!output.contains("Basic Statistics"));
        let alphabet_rows = output
            .lines()
            .skip_while(|l| *l != "Alphabet")
            .skip(1)
            .count();
        assert_eq!(alphabet_rows, 26);
        assert!(output.contains("(100.0%)"));
    }

    #[test]
    fn test_empty_text_renders_without_frequency_tables() {
        let output = render("", View::Words);
        assert!(!output.contains("Most Frequent Words"));
        assert!(!output.contains("Letter Frequency"));

        let output = render("", View::Letters);
        assert!(output.contains("(0.0%)"));
    }

    #[test]
    fn test_all_view_contains_both() {
        let output = render("Hi there.", View::All);
        assert!(output.contains("Basic Statistics"));
        assert!(output.contains("Character Types"));
    }

    #[test]
    fn test_write_json_uses_camel_case_fields() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &analyze("Hello, World! 123")).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["totalCharacters"], 17);
        assert_eq!(value["characters"]["letters"], 10);
        assert_eq!(value["words"], 3);
        assert_eq!(value["wordFrequency"][0]["word"], "hello");
        assert_eq!(value["alphanumericFrequency"]["1"], 1);
    }
}
