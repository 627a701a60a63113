use crate::board::read_board_file;
use crate::error::Result;
use std::path::Path;

/// Display information about a board file
pub fn show_info(path: &Path) -> Result<String> {
    let board = read_board_file(path)?;

    let mut output = String::new();

    output.push_str("Striplab Board\n");
    output.push_str("==============\n\n");

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Version: {}\n", board.version));
    output.push('\n');

    let malformed = board.strips.iter().filter(|s| !s.is_permutation()).count();
    output.push_str(&format!("Strips: {}\n", board.strips.len()));
    for (i, strip) in board.strips.iter().enumerate() {
        let marker = if strip.is_permutation() {
            ""
        } else {
            "  [malformed]"
        };
        output.push_str(&format!("  #{:<2} {}{}\n", i, strip, marker));
    }
    if malformed > 0 {
        output.push_str(&format!(
            "  ({} strip(s) are not clean 26-letter permutations)\n",
            malformed
        ));
    }
    output.push('\n');

    output.push_str(&format!("Frame order: {}\n", board.frame_order));
    output.push_str(&format!("  Mounted slots: {}\n", board.frame_order.len()));
    let stale = board
        .frame_order
        .slots()
        .iter()
        .filter(|&&slot| slot >= board.strips.len())
        .count();
    if stale > 0 {
        output.push_str(&format!(
            "  ({} slot(s) reference strips outside the set)\n",
            stale
        ));
    }
    output.push('\n');

    output.push_str("Gaps:\n");
    output.push_str(&format!("  Encrypt: +{}\n", board.gap_enc));
    output.push_str(&format!("  Decrypt: -{}\n", board.gap_dec));

    Ok(output)
}
