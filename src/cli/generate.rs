use crate::board::{read_board_file, write_board_file, CipherBoard};
use crate::error::Result;
use crate::frame::FrameOrder;
use crate::strip::StripSet;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Number of strips to generate (ignored when applying a file)
    pub count: usize,
    /// Derive strips from a keyword instead of random permutations
    pub keyword: Option<String>,
    /// Apply explicit strips from a text file, one per line
    pub strips_file: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: 10,
            keyword: None,
            strips_file: None,
        }
    }
}

/// Replace the board's strip set.
///
/// Random permutations by default, keyed-alphabet rotations with a
/// keyword, or explicit lines applied leniently from a file. A fresh
/// board and a file application are mounted sequentially over every
/// strip; otherwise the existing mounting order is kept as-is, and any
/// entry the new set no longer covers surfaces as an error when
/// ciphering. Returns the number of strips in the new set.
pub fn generate_strips(board_path: &Path, options: &GenerateOptions) -> Result<usize> {
    let mut board = if board_path.exists() {
        read_board_file(board_path)?
    } else {
        CipherBoard::new()
    };
    let fresh = board.strips.is_empty() && board.frame_order.is_empty();

    let strips = if let Some(path) = &options.strips_file {
        let text = fs::read_to_string(path)?;
        StripSet::from_lines(&text)
    } else if let Some(keyword) = &options.keyword {
        StripSet::keyed(keyword, options.count)
    } else {
        StripSet::random(options.count)
    };

    let count = strips.len();
    let remount = fresh || options.strips_file.is_some();
    board.strips = strips;
    if remount {
        board.frame_order = FrameOrder::from((0..count).collect::<Vec<_>>());
    }

    write_board_file(board_path, &board)?;
    info!(
        "strip set replaced: {} strips written to {}",
        count,
        board_path.display()
    );
    Ok(count)
}
