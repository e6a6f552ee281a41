// Configuration type definitions

use serde::Deserialize;

use crate::analyzer::{
    AnalyzerOptions, DEFAULT_READING_WPM, DEFAULT_SPEAKING_WPM, DEFAULT_TOP_WORDS,
};

/// Largest accepted input, in UTF-16 code units
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1_000_000;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// How the report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Analysis configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_reading_wpm")]
    pub reading_wpm: usize,
    #[serde(default = "default_speaking_wpm")]
    pub speaking_wpm: usize,
    #[serde(default = "default_top_words")]
    pub top_words: usize,
    /// 0 disables the limit
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

fn default_reading_wpm() -> usize {
    DEFAULT_READING_WPM
}

fn default_speaking_wpm() -> usize {
    DEFAULT_SPEAKING_WPM
}

fn default_top_words() -> usize {
    DEFAULT_TOP_WORDS
}

fn default_max_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            reading_wpm: DEFAULT_READING_WPM,
            speaking_wpm: DEFAULT_SPEAKING_WPM,
            top_words: DEFAULT_TOP_WORDS,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl AnalysisConfig {
    /// Replace zero rates with their defaults, returning a warning per fix
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.reading_wpm == 0 {
            self.reading_wpm = DEFAULT_READING_WPM;
            warnings.push(format!(
                "analysis.reading_wpm must be positive, using {}",
                DEFAULT_READING_WPM
            ));
        }
        if self.speaking_wpm == 0 {
            self.speaking_wpm = DEFAULT_SPEAKING_WPM;
            warnings.push(format!(
                "analysis.speaking_wpm must be positive, using {}",
                DEFAULT_SPEAKING_WPM
            ));
        }
        warnings
    }

    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            reading_wpm: self.reading_wpm,
            speaking_wpm: self.speaking_wpm,
            top_words: self.top_words,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
