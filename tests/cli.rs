//! CLI integration tests for base1000
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn base1000() -> Command {
    Command::cargo_bin("base1000").unwrap()
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    base1000()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thousand Character Classic"));
}

#[test]
fn test_version() {
    base1000()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base1000"));
}

#[test]
fn test_list_corpora() {
    base1000()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("qianziwen"));
}

#[test]
fn test_list_corpora_json() {
    let output = base1000().args(["--list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();
    assert!(names.contains(&"qianziwen"));
}

#[test]
fn test_mode_is_required() {
    base1000().arg("114514").assert().failure();
}

#[test]
fn test_modes_are_exclusive() {
    base1000().args(["-e", "-d", "114514"]).assert().failure();
}

// ============================================================================
// Encoding and Decoding
// ============================================================================

#[test]
fn test_encode_known_vector() {
    base1000()
        .args(["-e", "114514"])
        .assert()
        .success()
        .stdout("夜裳移柰梧\n");
}

#[test]
fn test_encode_stdin() {
    base1000()
        .arg("-e")
        .write_stdin("114514\n")
        .assert()
        .success()
        .stdout("夜裳移柰梧\n");
}

#[test]
fn test_decode_known_vector() {
    base1000()
        .args(["-d", "夜裳移柰梧"])
        .assert()
        .success()
        .stdout(predicate::str::contains("114514"));
}

#[test]
fn test_roundtrip_stdin() {
    let encoded = base1000()
        .args(["-e", "--seed", "7"])
        .write_stdin("Hello, 世界!")
        .output()
        .unwrap();
    assert!(encoded.status.success());

    base1000()
        .arg("-d")
        .write_stdin(encoded.stdout)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, 世界!"));
}

#[test]
fn test_encode_seed_is_reproducible() {
    let run = || {
        base1000()
            .args(["-e", "--seed", "42", "reproducible"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_encode_empty_fails() {
    base1000()
        .arg("-e")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_decode_unknown_chars_is_empty() {
    base1000()
        .args(["-d", "ABC"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_decode_json() {
    let output = base1000()
        .args(["-d", "--json", "夜裳移柰梧"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let found: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(found.contains(&"114514".to_string()));
}

#[test]
fn test_decode_first() {
    base1000()
        .args(["-d", "--first", "夜裳移柰梧"])
        .assert()
        .success()
        .stdout("114514\n");
}

#[test]
fn test_first_conflicts_with_max_results() {
    base1000()
        .args(["-d", "--first", "--max-results", "2", "夜裳移柰梧"])
        .assert()
        .failure();
}

#[test]
fn test_max_combinations_cap() {
    // Zero lifts the cap
    base1000()
        .args(["-d", "--max-combinations", "0", "夜裳移柰梧"])
        .assert()
        .success()
        .stdout(predicate::str::contains("114514"));
}

// ============================================================================
// Corpus Selection
// ============================================================================

#[test]
fn test_corpus_file_roundtrip() {
    // U+4E41 sits at offset 65 of the fixture
    base1000()
        .args(["-e", "A", "--corpus-file", &fixture("distinct.txt")])
        .assert()
        .success()
        .stdout("乁\n");

    base1000()
        .args(["-d", "乁", "--corpus-file", &fixture("distinct.txt")])
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn test_missing_corpus_file() {
    base1000()
        .args(["-e", "A", "--corpus-file", "/nonexistent/corpus.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corpus.txt"));
}

#[test]
fn test_unknown_corpus_suggests() {
    base1000()
        .args(["-e", "A", "--corpus", "qianziwn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("qianziwen"));
}

#[test]
fn test_max_size_limit() {
    base1000()
        .args(["-e", "--max-size", "4", "too long"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_truncated_search_warns() {
    // '云' stands for 032 and 622; "} " is the first of four assignments
    base1000()
        .env_remove("RUST_LOG")
        .args(["-d", "--max-combinations", "1", "云云"])
        .assert()
        .success()
        .stdout("} \n")
        .stderr(predicate::str::contains("truncated"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_quiet_suppresses_warning() {
    base1000()
        .env_remove("RUST_LOG")
        .args(["-d", "-q", "--max-combinations", "1", "云云"])
        .assert()
        .success()
        .stdout("} \n")
        .stderr("");
}

#[test]
fn test_exhausted_search_is_silent() {
    base1000()
        .env_remove("RUST_LOG")
        .args(["-d", "云云"])
        .assert()
        .success()
        .stderr(predicate::str::contains("truncated").not());
}

#[test]
fn test_verbose_logs_search() {
    base1000()
        .env_remove("RUST_LOG")
        .args(["-d", "-v", "夜裳移柰梧"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search finished"));
}

#[test]
fn test_rust_log_overrides_verbosity() {
    base1000()
        .env("RUST_LOG", "base1000=debug")
        .args(["-d", "-q", "夜裳移柰梧"])
        .assert()
        .success()
        .stderr(predicate::str::contains("starting candidate search"));
}

#[test]
fn test_empty_decode_input_is_not_unknown_chars() {
    base1000()
        .env_remove("RUST_LOG")
        .args(["-d", "-v"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("nothing to decode"))
        .stderr(predicate::str::contains("outside the corpus").not());
}

#[test]
fn test_unknown_chars_are_reported() {
    base1000()
        .env_remove("RUST_LOG")
        .args(["-d", "-v", "ABC"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("outside the corpus"));
}
