//! Mounting order resolution.
//!
//! The frame order decides which strip from the set sits in each slot of
//! the frame. Slots repeat cyclically over the letters of a message, so
//! an order of length N assigns strip `slots[k % N]` to letter k.

use crate::alphabet::{letters_only, ALPHABET};
use crate::error::{Result, StriplabError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot assignments for the frame, left to right.
///
/// Entries index into the current [`StripSet`](crate::StripSet) and may
/// repeat. Nothing here pins entries to the set's size; a stale entry
/// surfaces as an error when a transform tries to use it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameOrder {
    slots: Vec<usize>,
}

impl FrameOrder {
    /// The first `count` strips in set order: 0, 1, .., count-1.
    pub fn sequential(count: usize, strip_count: usize) -> Result<Self> {
        if count > strip_count {
            return Err(StriplabError::CountExceedsStrips {
                requested: count,
                available: strip_count,
            });
        }
        Ok(Self {
            slots: (0..count).collect(),
        })
    }

    /// Classical keyword numbering: rank the keyword's letters by
    /// scanning the alphabet A-Z, ties broken left to right, and mount
    /// strips in rank order. "BAD" ranks B second, A first, D third,
    /// giving slots [1, 0, 2].
    ///
    /// With `length_needed` the ranked slots are truncated to that
    /// length, or padded by cycling plain strip indices 0, 1, .. modulo
    /// the keyword's letter count.
    pub fn from_keyword(keyword: &str, length_needed: Option<usize>) -> Result<Self> {
        let cleaned = letters_only(keyword);
        if cleaned.is_empty() {
            return Err(StriplabError::EmptyKeyword(keyword.to_string()));
        }
        let n = cleaned.len();
        let mut slots = vec![0usize; n];
        let mut rank = 0usize;
        for letter in ALPHABET.chars() {
            for (pos, c) in cleaned.chars().enumerate() {
                if c == letter {
                    slots[pos] = rank;
                    rank += 1;
                }
            }
        }
        if let Some(needed) = length_needed {
            slots.truncate(needed);
            let mut p = 0usize;
            while slots.len() < needed {
                slots.push(p % n);
                p += 1;
            }
        }
        Ok(Self { slots })
    }

    /// Explicit order. Entries that do not index into a set of
    /// `strip_count` strips are dropped; fails when nothing valid
    /// remains.
    pub fn from_manual(entries: &[i64], strip_count: usize) -> Result<Self> {
        let slots: Vec<usize> = entries
            .iter()
            .filter(|&&entry| entry >= 0 && (entry as usize) < strip_count)
            .map(|&entry| entry as usize)
            .collect();
        if slots.is_empty() {
            return Err(StriplabError::NoValidIndices);
        }
        Ok(Self { slots })
    }

    /// Exchange the strips mounted at slots `a` and `b`. The order's
    /// length never changes.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.slots.len();
        for position in [a, b] {
            if position >= len {
                return Err(StriplabError::SwapOutOfRange { position, len });
            }
        }
        self.slots.swap(a, b);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot assignments, left to right.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Strip index assigned to the k-th letter of a message.
    ///
    /// Panics if the order is empty; transforms reject an empty order
    /// before ever indexing it.
    pub fn strip_at(&self, k: usize) -> usize {
        self.slots[k % self.slots.len()]
    }
}

impl From<Vec<usize>> for FrameOrder {
    fn from(slots: Vec<usize>) -> Self {
        Self { slots }
    }
}

impl fmt::Display for FrameOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.slots.iter().map(|slot| slot.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
