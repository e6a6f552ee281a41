use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::TallyError;

/// Length of `text` in UTF-16 code units, the unit the input limit is given in
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Read text from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read text from stdin or file path
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    /// * `max_chars` - Largest accepted input in UTF-16 code units, 0 for no limit
    ///
    /// # Returns
    /// * `Ok(String)` - The text
    /// * `Err(TallyError)` - On IO errors, invalid UTF-8 or input over the limit
    pub fn read_text(path: Option<&Path>, max_chars: usize) -> Result<String, TallyError> {
        match path {
            Some(file_path) => {
                #[cfg(debug_assertions)]
                log::debug!("Reading input from {:?}", file_path);
                Self::read_from(File::open(file_path)?, max_chars)
            }
            None => {
                #[cfg(debug_assertions)]
                log::debug!("Reading input from stdin");
                Self::read_from(io::stdin().lock(), max_chars)
            }
        }
    }

    /// Read all of `source` and validate it
    pub fn read_from<R: Read>(mut source: R, max_chars: usize) -> Result<String, TallyError> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;

        let text =
            String::from_utf8(bytes).map_err(|source| TallyError::InvalidUtf8 { source })?;

        Self::check_limit(&text, max_chars)?;

        #[cfg(debug_assertions)]
        log::debug!("Input read, {} bytes", text.len());

        Ok(text)
    }

    fn check_limit(text: &str, max_chars: usize) -> Result<(), TallyError> {
        // A UTF-16 length never exceeds the UTF-8 byte length
        if max_chars == 0 || text.len() <= max_chars {
            return Ok(());
        }
        let len = utf16_len(text);
        if len > max_chars {
            return Err(TallyError::InputTooLarge {
                len,
                max: max_chars,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
