use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn striplab_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_striplab"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(striplab_command().args(args).output()?)
}

#[test]
fn cli_end_to_end_flow() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let board = dir.path().join("board.json");
    let board_arg = board.to_str().unwrap();

    // Keyword strips so the whole flow is deterministic
    let generate = run(&[
        "generate",
        board_arg,
        "--count",
        "8",
        "--keyword",
        "PAPERCLIP",
    ])?;
    assert!(
        generate.status.success(),
        "generate command failed: {}",
        String::from_utf8_lossy(&generate.stderr)
    );
    assert!(
        String::from_utf8(generate.stdout.clone())?.contains("8 strips"),
        "generate output missing strip count"
    );
    assert!(board.exists(), "board file should exist after generate");

    // Keyword frame order: LEMON ranks to [1, 0, 2, 4, 3]
    let frame = run(&[
        "frame",
        board_arg,
        "keyword",
        "--key",
        "LEMON",
        "--count",
        "5",
    ])?;
    assert!(
        frame.status.success(),
        "frame command failed: {}",
        String::from_utf8_lossy(&frame.stderr)
    );
    assert!(String::from_utf8(frame.stdout)?.contains("[1, 0, 2, 4, 3]"));

    // Store matching gaps for both directions
    let gap = run(&["gap", board_arg, "--encrypt", "7", "--decrypt", "7"])?;
    assert!(
        gap.status.success(),
        "gap command failed: {}",
        String::from_utf8_lossy(&gap.stderr)
    );
    assert!(String::from_utf8(gap.stdout)?.contains("encrypt +7"));

    // Encrypt, then decrypt back
    let encrypt = run(&["encrypt", board_arg, "ATTACK AT DAWN"])?;
    assert!(
        encrypt.status.success(),
        "encrypt command failed: {}",
        String::from_utf8_lossy(&encrypt.stderr)
    );
    let cipher = String::from_utf8(encrypt.stdout)?.trim().to_string();
    assert_eq!(cipher.len(), 12, "non-letters must be dropped");
    assert!(cipher.chars().all(|c| c.is_ascii_uppercase()));

    let decrypt = run(&["decrypt", board_arg, &cipher])?;
    assert!(
        decrypt.status.success(),
        "decrypt command failed: {}",
        String::from_utf8_lossy(&decrypt.stderr)
    );
    assert_eq!(String::from_utf8(decrypt.stdout)?.trim(), "ATTACKATDAWN");

    // Info reflects the stored configuration
    let info = run(&["info", board_arg])?;
    let info_stdout = String::from_utf8(info.stdout)?;
    assert!(info_stdout.contains("Strips: 8"));
    assert!(info_stdout.contains("Frame order: [1, 0, 2, 4, 3]"));
    assert!(info_stdout.contains("Encrypt: +7"));

    Ok(())
}

#[test]
fn frame_swap_changes_ciphertext() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let board = dir.path().join("board.json");
    let board_arg = board.to_str().unwrap();

    // Three plain alphabets and one CAB-keyed strip; applying the file
    // mounts them as [0, 1, 2, 3]
    let strips = dir.path().join("strips.txt");
    fs::write(
        &strips,
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ\n\
         ABCDEFGHIJKLMNOPQRSTUVWXYZ\n\
         ABCDEFGHIJKLMNOPQRSTUVWXYZ\n\
         CABDEFGHIJKLMNOPQRSTUVWXYZ\n",
    )?;
    run(&["generate", board_arg, "--strips-file", strips.to_str().unwrap()])?;

    // Gap 1: below B sits C on a plain alphabet, D on the CAB strip
    let before = run(&["encrypt", board_arg, "BBBB"])?;
    assert_eq!(String::from_utf8(before.stdout)?.trim(), "CCCD");

    let swap = run(&["frame", board_arg, "swap", "--a", "0", "--b", "3"])?;
    assert!(swap.status.success());

    let after = run(&["encrypt", board_arg, "BBBB"])?;
    assert_eq!(String::from_utf8(after.stdout)?.trim(), "DCCC");

    Ok(())
}

#[test]
fn gap_out_of_range_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let board = dir.path().join("board.json");
    let board_arg = board.to_str().unwrap();

    run(&["generate", board_arg])?;

    let gap = run(&["gap", board_arg, "--encrypt", "0"])?;
    assert!(!gap.status.success(), "gap 0 must be rejected");
    assert!(String::from_utf8_lossy(&gap.stderr).contains("Invalid gap"));

    let gap = run(&["gap", board_arg, "--decrypt", "26"])?;
    assert!(!gap.status.success(), "gap 26 must be rejected");

    Ok(())
}

#[test]
fn validate_reports_problem_lines() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let strips = dir.path().join("strips.txt");

    fs::write(
        &strips,
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ\nABCDEFGHIJKLMNOPRSTUVWXYZ\n",
    )?;

    let validate = run(&["validate", strips.to_str().unwrap()])?;
    assert!(validate.status.success());
    let stdout = String::from_utf8(validate.stdout)?;
    assert!(stdout.contains("line 1: length 25 (expected 26)"));
    assert!(stdout.contains("line 1: missing letter Q"));

    // A clean file reports OK
    fs::write(&strips, "ABCDEFGHIJKLMNOPQRSTUVWXYZ\n")?;
    let validate = run(&["validate", strips.to_str().unwrap()])?;
    assert!(String::from_utf8(validate.stdout)?.starts_with("OK:"));

    Ok(())
}

#[test]
fn encrypt_with_empty_frame_order_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let board = dir.path().join("board.json");
    let board_arg = board.to_str().unwrap();

    // An applied file with no usable lines leaves nothing mounted
    let strips = dir.path().join("strips.txt");
    fs::write(&strips, "\n\n")?;
    run(&["generate", board_arg, "--strips-file", strips.to_str().unwrap()])?;

    let encrypt = run(&["encrypt", board_arg, "HELLO"])?;
    assert!(!encrypt.status.success());
    assert!(String::from_utf8_lossy(&encrypt.stderr).contains("Frame order is empty"));

    Ok(())
}

#[test]
fn stats_reports_letter_analysis() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let board = dir.path().join("board.json");
    let board_arg = board.to_str().unwrap();

    run(&["generate", board_arg, "--count", "6", "--keyword", "VICTOR"])?;

    let stats = run(&["stats", board_arg, "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG"])?;
    assert!(
        stats.status.success(),
        "stats command failed: {}",
        String::from_utf8_lossy(&stats.stderr)
    );
    let stdout = String::from_utf8(stats.stdout)?;
    assert!(stdout.contains("Letters analyzed: 35"));
    assert!(stdout.contains("Chi-Square:"));
    assert!(stdout.contains("Index of Coincidence:"));

    Ok(())
}

#[test]
fn missing_board_file_fails_cleanly() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let absent = dir.path().join("absent.json");

    let encrypt = run(&["encrypt", absent.to_str().unwrap(), "HELLO"])?;
    assert!(!encrypt.status.success());
    assert!(String::from_utf8_lossy(&encrypt.stderr).starts_with("Error:"));

    Ok(())
}

#[test]
fn version_flag_prints_build_info() -> Result<(), Box<dyn Error>> {
    let version = run(&["--version"])?;
    assert!(version.status.success());
    assert!(String::from_utf8(version.stdout)?.starts_with("striplab "));

    Ok(())
}

#[test]
fn no_arguments_shows_help() -> Result<(), Box<dyn Error>> {
    let help = run(&[])?;
    assert!(help.status.success());
    assert!(String::from_utf8(help.stdout)?.contains("Usage"));

    Ok(())
}
