//! The row-offset transforms.
//!
//! Mounting a message assigns strips to its letters cyclically in frame
//! order. Encrypting letter k slides its strip so the plaintext letter
//! sits on the baseline row and reads the letter `gap` rows further
//! down; decrypting reads `gap` rows back up. Position arithmetic modulo
//! 26 is the discrete form of that slide, which makes the two directions
//! exact inverses for the same strips, frame order, and gap.

use crate::alphabet::{letters_only, to_letter, ALPHABET_LEN};
use crate::error::{Result, StriplabError};
use crate::frame::FrameOrder;
use crate::strip::StripSet;

/// Encrypt `text` against the mounted strips.
///
/// Non-letters are dropped outright: they produce no output and do not
/// advance the mounting cycle. Fails atomically; a bad gap, an empty
/// frame order, or an unreadable strip aborts the whole message with no
/// partial output.
pub fn encrypt(text: &str, frame: &FrameOrder, strips: &StripSet, gap: usize) -> Result<String> {
    check_gap(gap)?;
    if frame.is_empty() {
        return Err(StriplabError::EmptyFrameOrder);
    }
    let mut output = String::new();
    let mut k = 0usize;
    for raw in text.chars() {
        let Some(letter) = to_letter(raw) else {
            continue;
        };
        output.push(read_offset_row(strips, frame.strip_at(k), letter, gap)?);
        k += 1;
    }
    Ok(output)
}

/// Decrypt `text` against the mounted strips.
///
/// The inverse of [`encrypt`] for the same configuration: reads `gap`
/// rows above the baseline instead of below. Non-letters in the input
/// are dropped the same way.
pub fn decrypt(text: &str, frame: &FrameOrder, strips: &StripSet, gap: usize) -> Result<String> {
    check_gap(gap)?;
    if frame.is_empty() {
        return Err(StriplabError::EmptyFrameOrder);
    }
    let src = letters_only(text);
    let mut output = String::with_capacity(src.len());
    for (k, letter) in src.chars().enumerate() {
        // Reading gap rows up is reading 26-gap rows down
        output.push(read_offset_row(
            strips,
            frame.strip_at(k),
            letter,
            ALPHABET_LEN - gap,
        )?);
    }
    Ok(output)
}

/// Find `letter` on the strip and read the row `offset` below, wrapping
/// past the bottom.
fn read_offset_row(strips: &StripSet, index: usize, letter: char, offset: usize) -> Result<char> {
    let strip = strips
        .get(index)
        .ok_or(StriplabError::StripIndexOutOfRange {
            index,
            available: strips.len(),
        })?;
    let position = strip
        .position_of(letter)
        .ok_or(StriplabError::LetterNotFound {
            letter,
            strip: index,
        })?;
    let row = (position + offset) % ALPHABET_LEN;
    strip
        .letter_at(row)
        .ok_or(StriplabError::StripRowMissing { strip: index, row })
}

/// Gaps are rows of offset on a 26-row strip: 1 through 25. Zero would
/// map every letter to itself and 26 wraps back to zero.
pub(crate) fn check_gap(gap: usize) -> Result<()> {
    if gap == 0 || gap > ALPHABET_LEN - 1 {
        return Err(StriplabError::InvalidGap(gap));
    }
    Ok(())
}
