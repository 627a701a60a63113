use crate::board::read_board_file;
use crate::error::Result;
use std::path::Path;

/// Options for the decrypt command
#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    /// One-shot gap override; the board's stored gap otherwise
    pub gap: Option<usize>,
}

/// Decrypt text against a board file. Non-letters in the ciphertext are
/// ignored, so grouped or punctuated ciphertext reads fine.
pub fn decrypt_text(board_path: &Path, text: &str, options: &DecryptOptions) -> Result<String> {
    let board = read_board_file(board_path)?;
    match options.gap {
        Some(gap) => board.decrypt_with_gap(text, gap),
        None => board.decrypt(text),
    }
}
