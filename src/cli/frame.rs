use crate::board::{read_board_file, write_board_file};
use crate::error::{Result, StriplabError};
use crate::frame::FrameOrder;
use log::info;
use std::path::Path;

/// Mount the first `count` strips in set order.
pub fn frame_sequential(board_path: &Path, count: usize) -> Result<FrameOrder> {
    let mut board = read_board_file(board_path)?;
    let order = FrameOrder::sequential(count, board.strips.len())?;
    board.frame_order = order.clone();
    write_board_file(board_path, &board)?;
    info!("frame order set sequentially over {} strips", count);
    Ok(order)
}

/// Derive the mounting order from a key phrase.
///
/// With `count` the order is truncated or padded to that length; the
/// count may not exceed the number of strips in the set. Entries deeper
/// than the set can still appear when a long keyword is truncated, and
/// surface as errors when ciphering.
pub fn frame_keyword(board_path: &Path, key: &str, count: Option<usize>) -> Result<FrameOrder> {
    let mut board = read_board_file(board_path)?;
    if let Some(requested) = count {
        if requested > board.strips.len() {
            return Err(StriplabError::CountExceedsStrips {
                requested,
                available: board.strips.len(),
            });
        }
    }
    let order = FrameOrder::from_keyword(key, count)?;
    board.frame_order = order.clone();
    write_board_file(board_path, &board)?;
    info!("frame order set from key phrase: {}", order);
    Ok(order)
}

/// Set the mounting order explicitly from comma-separated strip
/// indices. Tokens that are not integers and indices outside the strip
/// set are dropped.
pub fn frame_manual(board_path: &Path, order: &str) -> Result<FrameOrder> {
    let mut board = read_board_file(board_path)?;
    let entries: Vec<i64> = order
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect();
    let resolved = FrameOrder::from_manual(&entries, board.strips.len())?;
    board.frame_order = resolved.clone();
    write_board_file(board_path, &board)?;
    info!("frame order set manually: {}", resolved);
    Ok(resolved)
}

/// Exchange the strips mounted at slots `a` and `b`.
pub fn frame_swap(board_path: &Path, a: usize, b: usize) -> Result<FrameOrder> {
    let mut board = read_board_file(board_path)?;
    board.frame_order.swap(a, b)?;
    let order = board.frame_order.clone();
    write_board_file(board_path, &board)?;
    info!("swapped frame slots {} and {}: {}", a, b, order);
    Ok(order)
}
