use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Input is {len} characters long, the limit is {max}.\n\nRaise `max_input_chars` in the [analysis] section of the config, or set it to 0 to disable the limit.")]
    InputTooLarge { len: usize, max: usize },

    #[error("Input is not valid UTF-8 text")]
    InvalidUtf8 {
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
