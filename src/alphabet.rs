//! A-Z normalization and letter/index mapping.
//!
//! Every strip, keyword, and message in the engine is reduced to the
//! 26-letter uppercase Latin alphabet before use. Letters map to indices
//! 0..26 (A=0, Z=25) so row arithmetic can work modulo 26.

/// The canonical alphabet, in row order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Rows on a full strip.
pub const ALPHABET_LEN: usize = 26;

/// Uppercase `text` without touching non-letters.
pub fn normalize(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Uppercase `text` and keep only A-Z, preserving relative order.
pub fn letters_only(text: &str) -> String {
    text.chars().filter_map(to_letter).collect()
}

/// The uppercase letter for `c`, or None for anything outside A-Z.
pub fn to_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase())
    } else {
        None
    }
}

/// Alphabet index of an uppercase letter (A=0 .. Z=25).
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some(c as usize - 'A' as usize)
    } else {
        None
    }
}

/// Letter at alphabet index `i`, wrapping modulo 26.
pub fn index_letter(i: usize) -> char {
    (b'A' + (i % ALPHABET_LEN) as u8) as char
}
