//! Cipher strips and strip sets.
//!
//! A strip is one column of letters on the physical device. Generated
//! strips are always full 26-letter permutations of A-Z; explicitly
//! applied strips are normalized to uppercase letters but otherwise kept
//! as given, so [`validate_strip_lines`] can report exactly what is wrong
//! with them and the transforms can refuse rows they cannot read.

use crate::alphabet::{index_letter, letters_only, ALPHABET, ALPHABET_LEN};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cipher strip, top row first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Strip {
    // Always ASCII uppercase letters; every constructor normalizes.
    letters: String,
}

impl Strip {
    /// Uniformly random permutation of the alphabet.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Random permutation drawn from a caller-supplied source.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters: Vec<char> = ALPHABET.chars().collect();
        letters.shuffle(rng);
        Self {
            letters: letters.into_iter().collect(),
        }
    }

    /// Keyed alphabet: the keyword's letters deduplicated (first
    /// occurrence wins) followed by the unused letters in A-Z order.
    /// A keyword with no usable letters yields the plain alphabet.
    pub fn keyed(keyword: &str) -> Self {
        let mut seen = [false; ALPHABET_LEN];
        let mut letters = String::with_capacity(ALPHABET_LEN);
        for c in letters_only(keyword).chars() {
            let i = (c as u8 - b'A') as usize;
            if !seen[i] {
                seen[i] = true;
                letters.push(c);
            }
        }
        for c in ALPHABET.chars() {
            let i = (c as u8 - b'A') as usize;
            if !seen[i] {
                letters.push(c);
            }
        }
        Self { letters }
    }

    /// Rotation with wraparound: rows r.. followed by rows 0..r.
    pub fn rotated_left(&self, r: usize) -> Self {
        if self.letters.is_empty() {
            return self.clone();
        }
        let r = r % self.letters.len();
        let (head, tail) = self.letters.split_at(r);
        Self {
            letters: format!("{}{}", tail, head),
        }
    }

    /// Rows on the strip.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// First row holding `letter`, if the strip has it at all.
    pub fn position_of(&self, letter: char) -> Option<usize> {
        self.letters.chars().position(|c| c == letter)
    }

    /// Letter at `row`, if the strip extends that far.
    pub fn letter_at(&self, row: usize) -> Option<char> {
        self.letters.chars().nth(row)
    }

    /// Raw letters, top row first.
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Whether this strip is a full 26-letter permutation of the alphabet.
    pub fn is_permutation(&self) -> bool {
        self.problems().is_empty()
    }

    /// Everything wrong with this strip as an alphabet permutation:
    /// length first, then duplicated letters, then missing letters,
    /// each group in A-Z order.
    pub fn problems(&self) -> Vec<StripProblem> {
        let mut problems = Vec::new();
        if self.letters.len() != ALPHABET_LEN {
            problems.push(StripProblem::WrongLength(self.letters.len()));
        }
        let mut counts = [0usize; ALPHABET_LEN];
        for c in self.letters.chars() {
            counts[(c as u8 - b'A') as usize] += 1;
        }
        for (i, &n) in counts.iter().enumerate() {
            if n > 1 {
                problems.push(StripProblem::DuplicateLetter(index_letter(i)));
            }
        }
        for (i, &n) in counts.iter().enumerate() {
            if n == 0 {
                problems.push(StripProblem::MissingLetter(index_letter(i)));
            }
        }
        problems
    }
}

impl From<String> for Strip {
    fn from(s: String) -> Self {
        Self {
            letters: letters_only(&s),
        }
    }
}

impl From<&str> for Strip {
    fn from(s: &str) -> Self {
        Self {
            letters: letters_only(s),
        }
    }
}

impl From<Strip> for String {
    fn from(strip: Strip) -> Self {
        strip.letters
    }
}

impl fmt::Display for Strip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}

/// A single problem found on one strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripProblem {
    /// The strip does not hold exactly 26 letters.
    WrongLength(usize),
    /// A letter appears more than once.
    DuplicateLetter(char),
    /// A letter of the alphabet is absent.
    MissingLetter(char),
}

impl fmt::Display for StripProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(found) => write!(f, "length {} (expected 26)", found),
            Self::DuplicateLetter(c) => write!(f, "duplicate letter {}", c),
            Self::MissingLetter(c) => write!(f, "missing letter {}", c),
        }
    }
}

/// One validation finding, tied to the input line it was found on.
///
/// Line numbers count the non-empty trimmed lines, starting at 0, the
/// same way [`StripSet::from_lines`] consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripDiagnostic {
    pub line: usize,
    pub problem: StripProblem,
}

impl fmt::Display for StripDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.problem)
    }
}

/// The full collection of strips available for mounting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StripSet {
    strips: Vec<Strip>,
}

impl StripSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` independent random permutations. Strips may collide with
    /// each other; nothing deduplicates across the set.
    pub fn random(count: usize) -> Self {
        Self::random_with(count, &mut rand::thread_rng())
    }

    /// Random set drawn from a caller-supplied source.
    pub fn random_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            strips: (0..count).map(|_| Strip::random_with(rng)).collect(),
        }
    }

    /// Keyed-alphabet rotations: strip 0 is the keyed alphabet itself,
    /// strip i is that base rotated left by i mod 26.
    pub fn keyed(keyword: &str, count: usize) -> Self {
        let base = Strip::keyed(keyword);
        Self {
            strips: (0..count)
                .map(|i| base.rotated_left(i % ALPHABET_LEN))
                .collect(),
        }
    }

    /// Explicit strips, one per line. Lines are trimmed, empty lines
    /// dropped, and each remaining line normalized to uppercase letters.
    /// No 26-letter contract is enforced here; run the lines through
    /// [`validate_strip_lines`] to see what a strict device would reject.
    pub fn from_lines(text: &str) -> Self {
        Self {
            strips: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(Strip::from)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.strips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Strip> {
        self.strips.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Strip> {
        self.strips.iter()
    }
}

impl From<Vec<Strip>> for StripSet {
    fn from(strips: Vec<Strip>) -> Self {
        Self { strips }
    }
}

/// Validate explicit strip input without applying it.
///
/// Each line accumulates every independent problem found, so a 25-letter
/// line missing Q reports both the wrong length and the missing letter.
/// An empty report means every line is a clean permutation.
pub fn validate_strip_lines(text: &str) -> Vec<StripDiagnostic> {
    let mut report = Vec::new();
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate();
    for (line, raw) in lines {
        let strip = Strip::from(raw);
        report.extend(
            strip
                .problems()
                .into_iter()
                .map(|problem| StripDiagnostic { line, problem }),
        );
    }
    report
}
