//! Striplab - Jefferson/Bazeries strip cipher laboratory
//!
//! An educational model of the classical strip cipher devices: a set of
//! alphabet-permutation strips is mounted in a frame in a chosen order,
//! the letters of a message are assigned to strips cyclically, and each
//! ciphertext letter is read a fixed number of rows (the "gap") below
//! the row holding its plaintext letter. Decryption reads the same
//! number of rows back up.
//!
//! ## Engine Layout
//!
//! ```text
//! StripSet (random | keyed rotations | explicit lines)
//!     + FrameOrder (sequential | keyword numbering | manual | swap)
//!     + gap (1..=25)
//!     → encrypt / decrypt
//! ```
//!
//! - **alphabet**: A-Z normalization and letter/index mapping
//! - **strip**: permutation strips, generation, validation diagnostics
//! - **frame**: mounting order resolution
//! - **cipher**: the row-offset transforms
//! - **board**: the explicit configuration object and JSON board files
//!
//! ## Example
//!
//! ```
//! use striplab::{CipherBoard, FrameOrder, StripSet};
//!
//! let mut board = CipherBoard::new();
//! board.configure(
//!     StripSet::keyed("PAPERCLIP", 5),
//!     FrameOrder::from_keyword("LEMON", Some(5))?,
//! );
//!
//! let cipher = board.encrypt("ATTACK AT DAWN")?;
//! let plain = board.decrypt(&cipher)?;
//! assert_eq!(plain, "ATTACKATDAWN");
//! # Ok::<(), striplab::StriplabError>(())
//! ```

pub mod alphabet;
pub mod board;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod frame;
pub mod strip;

pub use board::{read_board_file, write_board_file, CipherBoard, BOARD_VERSION};
pub use cipher::{decrypt, encrypt};
pub use error::{Result, StriplabError};
pub use frame::FrameOrder;
pub use strip::{validate_strip_lines, Strip, StripDiagnostic, StripProblem, StripSet};
