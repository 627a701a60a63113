use thiserror::Error;

#[derive(Error, Debug)]
pub enum StriplabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid board format: {0}")]
    InvalidFormat(String),

    #[error("Frame order is empty: mount at least one strip before ciphering")]
    EmptyFrameOrder,

    #[error("Mounting count {requested} exceeds the {available} strips in the set")]
    CountExceedsStrips { requested: usize, available: usize },

    #[error("Keyword {0:?} contains no usable letters")]
    EmptyKeyword(String),

    #[error("No valid strip indices in manual frame order input")]
    NoValidIndices,

    #[error("Invalid gap: {0}. Must be between 1 and 25")]
    InvalidGap(usize),

    #[error("Swap position {position} is out of range for a frame order of length {len}")]
    SwapOutOfRange { position: usize, len: usize },

    #[error("Frame order references strip #{index} but the set holds {available} strips")]
    StripIndexOutOfRange { index: usize, available: usize },

    #[error("Letter '{letter}' not found in strip #{strip}")]
    LetterNotFound { letter: char, strip: usize },

    #[error("Strip #{strip} has no row {row}: not a full 26-letter strip")]
    StripRowMissing { strip: usize, row: usize },
}

pub type Result<T> = std::result::Result<T, StriplabError>;
