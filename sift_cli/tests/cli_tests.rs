use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path.to_str().unwrap().to_string())
}

fn sift() -> Command {
    Command::cargo_bin("sift").unwrap()
}

#[test]
fn test_single_file_has_no_file_name_prefix() -> Result<()> {
    let dir = tempdir()?;
    let f = create_test_file(&dir, "f.txt", "abc\nxyz\n")?;

    sift()
        .args(["b", &f])
        .assert()
        .success()
        .stdout("abc\n");
    Ok(())
}

#[test]
fn test_multiple_files_prefix_and_order() -> Result<()> {
    let dir = tempdir()?;
    let f1 = create_test_file(&dir, "f1.txt", "x\n")?;
    let f2 = create_test_file(&dir, "f2.txt", "x\n")?;

    sift()
        .args(["x", &f1, &f2])
        .assert()
        .success()
        .stdout(format!("{f1}:x\n{f2}:x\n"));
    Ok(())
}

#[test]
fn test_line_numbers_skip_blank_lines() -> Result<()> {
    let dir = tempdir()?;
    let f = create_test_file(&dir, "f.txt", "a\nb\n\nc")?;

    sift()
        .args(["-n", "c", &f])
        .assert()
        .success()
        .stdout("4:c\n");
    Ok(())
}

#[test]
fn test_flags_may_follow_positionals() -> Result<()> {
    let dir = tempdir()?;
    let f = create_test_file(&dir, "f.txt", "a\nb\n")?;

    sift()
        .args(["b", &f, "-n"])
        .assert()
        .success()
        .stdout("2:b\n");
    Ok(())
}

#[test]
fn test_invert_match() -> Result<()> {
    let dir = tempdir()?;
    let f = create_test_file(&dir, "f.txt", "abc\nxyz\n")?;

    sift()
        .args(["-v", "b", &f])
        .assert()
        .success()
        .stdout("xyz\n");
    Ok(())
}

#[test]
fn test_match_entire_line() -> Result<()> {
    let dir = tempdir()?;
    let f = create_test_file(&dir, "f.txt", "abcd\nabc\n")?;

    sift()
        .args(["-x", "abc", &f])
        .assert()
        .success()
        .stdout("abc\n");
    Ok(())
}

#[test]
fn test_ignore_case() -> Result<()> {
    let dir = tempdir()?;
    let f = create_test_file(&dir, "f.txt", "Hello\nbye\n")?;

    sift()
        .args(["-i", "hello", &f])
        .assert()
        .success()
        .stdout("Hello\n");
    Ok(())
}

#[test]
fn test_file_names_only() -> Result<()> {
    let dir = tempdir()?;
    let f1 = create_test_file(&dir, "f1.txt", "x\nxx\n")?;
    let f2 = create_test_file(&dir, "f2.txt", "x\n")?;

    sift()
        .args(["-l", "x", &f1, &f2])
        .assert()
        .success()
        .stdout(format!("{f1}\n{f2}\n"));
    Ok(())
}

#[test]
fn test_missing_file_aborts_run() -> Result<()> {
    let dir = tempdir()?;
    let f1 = create_test_file(&dir, "f1.txt", "first\n")?;
    let missing = dir.path().join("missing.txt");
    let f3 = create_test_file(&dir, "f3.txt", "third\n")?;

    sift()
        .args(["ir", &f1, missing.to_str().unwrap(), &f3])
        .assert()
        .failure()
        .stdout(predicate::str::contains("first"))
        .stdout(predicate::str::contains("third").not())
        .stderr(predicate::str::contains("file not found"));
    Ok(())
}

#[test]
fn test_no_arguments_reports_every_problem() -> Result<()> {
    sift()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("no pattern supplied"))
        .stderr(predicate::str::contains("no file names supplied"));
    Ok(())
}

#[test]
fn test_logging_stays_on_stderr() -> Result<()> {
    let dir = tempdir()?;
    let f = create_test_file(&dir, "f.txt", "abc\nxyz\n")?;
    let missing = dir.path().join("missing.txt");

    // Match output on stdout is byte-exact even with logging enabled
    sift()
        .env("RUST_LOG", "debug")
        .args(["b", &f])
        .assert()
        .success()
        .stdout("abc\n");

    // The failure path logs through the subscriber as well as reporting
    sift()
        .env("RUST_LOG", "error")
        .args(["b", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("run failed"))
        .stderr(predicate::str::contains("file not found"));
    Ok(())
}

#[test]
fn test_invalid_pattern_reported() -> Result<()> {
    let dir = tempdir()?;
    let f = create_test_file(&dir, "f.txt", "a\n")?;

    sift()
        .args(["[unclosed", &f])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("invalid pattern"));
    Ok(())
}
