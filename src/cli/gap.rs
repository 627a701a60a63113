use crate::board::{read_board_file, write_board_file};
use crate::error::Result;
use log::info;
use std::path::Path;

/// Options for the gap command
#[derive(Debug, Clone, Default)]
pub struct GapOptions {
    /// New encryption gap (rows below the baseline)
    pub encrypt: Option<usize>,
    /// New decryption gap (rows above the baseline)
    pub decrypt: Option<usize>,
}

/// Update the board's stored gaps. Unset directions are left alone.
/// Returns the stored (encrypt, decrypt) pair after the update.
pub fn set_gaps(board_path: &Path, options: &GapOptions) -> Result<(usize, usize)> {
    let mut board = read_board_file(board_path)?;
    if let Some(gap) = options.encrypt {
        board.set_gap_enc(gap)?;
    }
    if let Some(gap) = options.decrypt {
        board.set_gap_dec(gap)?;
    }
    write_board_file(board_path, &board)?;
    info!(
        "gaps stored: encrypt +{}, decrypt -{}",
        board.gap_enc, board.gap_dec
    );
    Ok((board.gap_enc, board.gap_dec))
}
