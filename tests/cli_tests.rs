use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Binary pointed at an empty config so the user's settings never leak in
fn omnibox(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("omnibox").unwrap();
    cmd.arg("--config").arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_classify_calculator() {
    let dir = TempDir::new().unwrap();
    omnibox(&dir)
        .args(["--classify", "2+2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("calculator\n"))
        .stdout(predicate::str::contains("Result: 4"));
}

#[test]
fn test_classify_weather() {
    let dir = TempDir::new().unwrap();
    omnibox(&dir)
        .args(["--classify", "weather in paris"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("weather\n"))
        .stdout(predicate::str::contains("Location: Current Location"));
}

#[test]
fn test_classify_general() {
    let dir = TempDir::new().unwrap();
    omnibox(&dir)
        .args(["--classify", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("general\n"));
}

#[test]
fn test_suggest_offline_uses_builtin_corpus() {
    let dir = TempDir::new().unwrap();
    omnibox(&dir)
        .args(["--offline", "--suggest", "java"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("javascript tutorial\n"));
}

#[test]
fn test_suggest_with_custom_corpus() {
    let dir = TempDir::new().unwrap();
    let corpus = dir.path().join("corpus.txt");
    fs::write(&corpus, "# editors\nvim motions\nneovim lua\n\nemacs org mode\n").unwrap();

    let output = omnibox(&dir)
        .args(["--offline", "--suggest", "vim", "--corpus"])
        .arg(&corpus)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "vim motions");
    assert_eq!(lines[1], "neovim lua");
    assert!(!lines.contains(&"emacs org mode"));
}

#[test]
fn test_suggest_blank_prints_nothing() {
    let dir = TempDir::new().unwrap();
    omnibox(&dir)
        .args(["--offline", "--suggest", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_corpus_fails() {
    let dir = TempDir::new().unwrap();
    omnibox(&dir)
        .args(["--offline", "--suggest", "vim", "--corpus"])
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read corpus"));
}

#[test]
fn test_suggest_and_classify_conflict() {
    let dir = TempDir::new().unwrap();
    omnibox(&dir)
        .args(["--suggest", "a", "--classify", "b"])
        .assert()
        .failure();
}

#[test]
fn test_help_lists_flags() {
    Command::cargo_bin("omnibox")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--offline"))
        .stdout(predicate::str::contains("--debounce-ms"));
}
