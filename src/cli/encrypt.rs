use crate::board::read_board_file;
use crate::error::Result;
use log::warn;
use std::path::Path;

/// Options for the encrypt command
#[derive(Debug, Clone, Default)]
pub struct EncryptOptions {
    /// One-shot gap override; the board's stored gap otherwise
    pub gap: Option<usize>,
}

/// Encrypt text against a board file.
pub fn encrypt_text(board_path: &Path, text: &str, options: &EncryptOptions) -> Result<String> {
    let board = read_board_file(board_path)?;
    let dropped = text.chars().filter(|c| !c.is_ascii_alphabetic()).count();
    if dropped > 0 {
        warn!(
            "{} non-letter character(s) in the plaintext will be dropped",
            dropped
        );
    }
    match options.gap {
        Some(gap) => board.encrypt_with_gap(text, gap),
        None => board.encrypt(text),
    }
}
