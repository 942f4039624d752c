//! Command-line behavior of the `hivenote` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NOTES: &str = "\
Inspection date: 2026-02-15
- Queen seen: yes
Frames of bees: 8
Temp: 72F
saw a few small hive beetles
check feeder next week
";

fn hivenote(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hivenote").unwrap();
    // Keep every run on an explicit config file
    cmd.arg("--config").arg(config_dir.path().join("config.json"));
    cmd
}

fn write_config(dir: &TempDir, json: &str) {
    fs::write(dir.path().join("config.json"), json).unwrap();
}

fn write_notes(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_parse_file_to_json() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "{}");
    write_notes(dir.path(), "notes.txt", NOTES);

    hivenote(&dir)
        .arg("parse")
        .arg(dir.path().join("notes.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""queen_seen""#))
        .stdout(predicate::str::contains(r#""value": "2026-02-15""#))
        .stdout(predicate::str::contains(r#""value": 22.0"#))
        .stdout(predicate::str::contains("hive_beetle"))
        .stdout(predicate::str::contains("check feeder next week"));
}

#[test]
fn test_parse_stdin_with_count() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "{}");

    hivenote(&dir)
        .args(["parse", "-", "--show-count"])
        .write_stdin(NOTES)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 fields found"));
}

#[test]
fn test_parse_prefill_text() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "{}");

    hivenote(&dir)
        .args(["parse", "-", "--prefill", "--format", "text"])
        .write_stdin(NOTES)
        .assert()
        .success()
        .stdout(predicate::str::contains("experience_template: intermediate"))
        .stdout(predicate::str::contains("observations.queen_seen: true"))
        .stdout(predicate::str::contains("weather.temp_c: 22.0"));
}

#[test]
fn test_parse_csv_from_config() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, r#"{"output": {"format": "csv"}}"#);

    hivenote(&dir)
        .args(["parse", "-"])
        .write_stdin("Honey: plenty\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("field,value,confidence,source"))
        .stdout(predicate::str::contains("honey_stores,abundant,high,Honey: plenty"));
}

#[test]
fn test_parse_without_prose_scan() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "{}");

    hivenote(&dir)
        .args(["parse", "-", "--no-prose"])
        .write_stdin("wax moth on the bottom board\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("pest_signs").not())
        .stdout(predicate::str::contains("wax moth on the bottom board"));
}

#[test]
fn test_parse_missing_input() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "{}");

    hivenote(&dir)
        .args(["parse", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_invalid_config_rejected() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, r#"{"parser": {"fahrenheit_threshold": -5}}"#);

    hivenote(&dir)
        .args(["parse", "-"])
        .write_stdin("Queen: yes\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fahrenheit_threshold"));
}

#[test]
fn test_batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "{}");
    let input = dir.path().join("in");
    let output = dir.path().join("out");
    fs::create_dir(&input).unwrap();
    write_notes(&input, "hive1.txt", NOTES);
    write_notes(&input, "hive2.txt", "Supers: 3\n");
    write_notes(&input, "ignored.md", "Supers: 1\n");

    hivenote(&dir)
        .arg("batch")
        .arg(format!("{}/*", input.display()))
        .arg("--output-dir")
        .arg(&output)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    assert!(output.join("hive1.json").exists());
    assert!(output.join("hive2.json").exists());
    assert!(!output.join("ignored.json").exists());

    let summary = fs::read_to_string(output.join("summary.csv")).unwrap();
    assert!(summary.contains("hive2.txt,success,1,advanced"));
}

#[test]
fn test_batch_no_matches() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "{}");

    hivenote(&dir)
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn test_config_init_get_set() {
    let dir = TempDir::new().unwrap();

    hivenote(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    hivenote(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    hivenote(&dir)
        .args(["config", "set", "parser.reference_year", "2024"])
        .assert()
        .success();

    hivenote(&dir)
        .args(["config", "get", "parser.reference_year"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024"));

    hivenote(&dir)
        .args(["config", "set", "parser.no_such_key", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
