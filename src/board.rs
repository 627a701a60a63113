//! The cipher board: one explicit object holding the whole working
//! configuration, plus the JSON board-file format the CLI persists it
//! in. The transforms never consult hidden state; everything an
//! embedder needs flows through a [`CipherBoard`].

use crate::cipher;
use crate::error::{Result, StriplabError};
use crate::frame::FrameOrder;
use crate::strip::StripSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current board file format version.
pub const BOARD_VERSION: u32 = 1;

/// Strip set, mounting order, and the stored row gaps for each
/// direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherBoard {
    /// Format version of the serialized board.
    pub version: u32,
    /// All strips available for mounting.
    pub strips: StripSet,
    /// Mounting order over the strip set.
    pub frame_order: FrameOrder,
    /// Stored gap for encryption (rows below the baseline).
    pub gap_enc: usize,
    /// Stored gap for decryption (rows above the baseline).
    pub gap_dec: usize,
}

impl Default for CipherBoard {
    fn default() -> Self {
        Self {
            version: BOARD_VERSION,
            strips: StripSet::new(),
            frame_order: FrameOrder::default(),
            gap_enc: 1,
            gap_dec: 1,
        }
    }
}

impl CipherBoard {
    /// Empty board: no strips, no mounting order, both gaps at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ready-to-use board: `count` random strips mounted sequentially.
    pub fn with_random_strips(count: usize) -> Self {
        Self {
            strips: StripSet::random(count),
            frame_order: FrameOrder::from((0..count).collect::<Vec<_>>()),
            ..Self::default()
        }
    }

    /// Replace the strip set and mounting order wholesale.
    pub fn configure(&mut self, strips: StripSet, frame_order: FrameOrder) {
        self.strips = strips;
        self.frame_order = frame_order;
    }

    /// Set the stored encryption gap (1..=25).
    pub fn set_gap_enc(&mut self, gap: usize) -> Result<()> {
        cipher::check_gap(gap)?;
        self.gap_enc = gap;
        Ok(())
    }

    /// Set the stored decryption gap (1..=25).
    pub fn set_gap_dec(&mut self, gap: usize) -> Result<()> {
        cipher::check_gap(gap)?;
        self.gap_dec = gap;
        Ok(())
    }

    /// Encrypt with the stored encryption gap.
    pub fn encrypt(&self, text: &str) -> Result<String> {
        cipher::encrypt(text, &self.frame_order, &self.strips, self.gap_enc)
    }

    /// Encrypt with a one-shot gap, leaving the stored one alone.
    pub fn encrypt_with_gap(&self, text: &str, gap: usize) -> Result<String> {
        cipher::encrypt(text, &self.frame_order, &self.strips, gap)
    }

    /// Decrypt with the stored decryption gap.
    pub fn decrypt(&self, text: &str) -> Result<String> {
        cipher::decrypt(text, &self.frame_order, &self.strips, self.gap_dec)
    }

    /// Decrypt with a one-shot gap, leaving the stored one alone.
    pub fn decrypt_with_gap(&self, text: &str, gap: usize) -> Result<String> {
        cipher::decrypt(text, &self.frame_order, &self.strips, gap)
    }
}

/// Read a board file from disk, checking the format version.
pub fn read_board_file(path: &Path) -> Result<CipherBoard> {
    let text = fs::read_to_string(path)?;
    let board: CipherBoard = serde_json::from_str(&text)?;
    if board.version != BOARD_VERSION {
        return Err(StriplabError::InvalidFormat(format!(
            "unsupported board version {} (expected {})",
            board.version, BOARD_VERSION
        )));
    }
    Ok(board)
}

/// Write a board file to disk (creates new file or overwrites).
pub fn write_board_file(path: &Path, board: &CipherBoard) -> Result<()> {
    let text = serde_json::to_string_pretty(board)?;
    fs::write(path, text)?;
    Ok(())
}
