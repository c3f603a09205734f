use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_passphrase-bitcoin"))
        .args(args)
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("PASSPHRASE_BINARY_FILE")
        .env_remove("PASSPHRASE_WORDLIST")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_no_flags_prints_help() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, &[]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("Examples:"));
    assert!(!dir.path().join("binary.txt").exists());
}

#[test]
fn test_missing_bit_file_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, &["-p"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("generate it first with -b"));
}

#[test]
fn test_unknown_token_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, &["-i", "zzz"]);

    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("neither a valid word nor valid binary"));
}

#[test]
fn test_generate_then_print_passphrase() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, &["-b", "-p"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let phrase = stdout.lines().last().unwrap();
    assert_eq!(phrase.split_whitespace().count(), 24);
    assert!(dir.path().join("binary.txt").exists());
}

#[test]
fn test_bad_strength_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, &["-b", "--strength", "100"]);

    assert!(!out.status.success());
    assert!(!dir.path().join("binary.txt").exists());
}
