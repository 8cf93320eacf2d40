//! Integration tests for the akshara CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const AUSTRALIA: &str = "అమెరికాఆస్ట్రేలియా";

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn akshara() -> Command {
    Command::cargo_bin("akshara").unwrap()
}

fn run_json(args: &[&str]) -> Value {
    let output = akshara()
        .arg("run")
        .args(args)
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_word_strength() {
    akshara()
        .args(["run", "word-strength", "-s", AUSTRALIA])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_json_envelope() {
    let envelope = run_json(&["word-level", "-s", AUSTRALIA, "-l", "telugu"]);
    assert_eq!(envelope["response_code"], 200);
    assert_eq!(envelope["string"], AUSTRALIA);
    assert_eq!(envelope["language"], "telugu");
    assert_eq!(envelope["data"], 10);
}

#[test]
fn test_logical_chars_json() {
    let envelope = run_json(&["logical", "-s", AUSTRALIA]);
    let units: Vec<&str> = envelope["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(units, ["అ", "మె", "రి", "కా", "ఆ", "స్ట్రే", "లి", "యా"]);
}

#[test]
fn test_unknown_operation() {
    akshara()
        .args(["run", "no-such-operation", "-s", AUSTRALIA])
        .assert()
        .failure()
        .stderr(predicate::str::contains("404"));
}

#[test]
fn test_unknown_operation_json() {
    let envelope = run_json(&["no-such-operation", "-s", AUSTRALIA]);
    assert_eq!(envelope["response_code"], 404);
}

#[test]
fn test_missing_operand() {
    akshara()
        .args(["run", "is-anagram", "-s", AUSTRALIA])
        .assert()
        .failure()
        .stderr(predicate::str::contains("400"))
        .stderr(predicate::str::contains("input2"));
}

#[test]
fn test_missing_string() {
    let envelope = run_json(&["length"]);
    assert_eq!(envelope["response_code"], 400);
}

#[test]
fn test_reverse() {
    akshara()
        .args(["run", "reverse", "-s", AUSTRALIA])
        .assert()
        .success()
        .stdout("యాలిస్ట్రేఆకారిమెఅ\n");
}

#[test]
fn test_add_at() {
    akshara()
        .args(["run", "add-at", "-s", AUSTRALIA, "--input2", "3", "--input3", "క్క"])
        .assert()
        .success()
        .stdout("అమెరిక్కకాఆస్ట్రేలియా\n");
}

#[test]
fn test_add_at_invalid_index() {
    akshara()
        .args(["run", "add-at", "-s", AUSTRALIA, "--input2", "three"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("400"));
}

#[test]
fn test_match_id_string() {
    akshara()
        .args(["run", "get-match-id-string", "-s", "అమ", "--input2", "అఅ"])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn test_filler_without_string() {
    let envelope = run_json(&["filler", "--count", "4", "--kind", "vowel", "--seed", "7"]);
    assert_eq!(envelope["response_code"], 200);
    assert_eq!(envelope["string"], "4 vowel");
    assert_eq!(envelope["data"].as_array().unwrap().len(), 4);
}

#[test]
fn test_seeded_randomize_is_reproducible() {
    let first = akshara()
        .args(["run", "randomize", "-s", AUSTRALIA, "--seed", "42"])
        .output()
        .unwrap();
    let second = akshara()
        .args(["run", "randomize", "-s", AUSTRALIA, "--seed", "42"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_english_palindrome() {
    akshara()
        .args(["run", "is-palindrome", "-s", "level", "-l", "english"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_segment_file() {
    akshara()
        .arg("segment")
        .arg("-i")
        .arg(fixture_path("telugu-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("అ మె రి కా"))
        .stdout(predicate::str::contains("ఆ స్ట్రే లి యా"));
}

#[test]
fn test_segment_json_output() {
    let output = akshara()
        .arg("segment")
        .arg("-i")
        .arg(fixture_path("telugu-sample.txt"))
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Value = serde_json::from_slice(&output.stdout).unwrap();
    let lines = lines.as_array().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2]["line"], 3);
    assert_eq!(lines[2]["logical_chars"][1], "మ్మ");
}

#[test]
fn test_segment_with_delimiter_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");

    akshara()
        .arg("segment")
        .arg("-i")
        .arg(fixture_path("telugu-sample.txt"))
        .arg("-d")
        .arg("|")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let content = std::fs::read_to_string(output).unwrap();
    assert!(content.starts_with("అ|మె|రి|కా\n"));
}

#[test]
fn test_segment_parallel() {
    akshara()
        .arg("segment")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("--parallel")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("l e v e l"));
}

#[test]
fn test_segment_missing_file() {
    akshara()
        .arg("segment")
        .arg("-i")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_list_languages() {
    akshara()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Telugu (default)"))
        .stdout(predicate::str::contains("English"));
}

#[test]
fn test_list_operations() {
    akshara()
        .args(["list", "operations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("word-strength"))
        .stdout(predicate::str::contains("get-match-id-string"));
}

#[test]
fn test_external_profile() {
    akshara()
        .args(["run", "logical", "-s", "ಕನ್ನಡ", "--language-config"])
        .arg(fixture_path("kannada.toml"))
        .assert()
        .success()
        .stdout("ಕ ನ್ನ ಡ\n");
}

#[test]
fn test_validate_fixture() {
    akshara()
        .arg("validate")
        .arg("-c")
        .arg(fixture_path("kannada.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Language code: kn"));
}

#[test]
fn test_generate_then_validate() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("custom.toml");

    akshara()
        .args(["generate-config", "-l", "xx", "-o"])
        .arg(&output)
        .assert()
        .success();

    akshara()
        .arg("validate")
        .arg("-c")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Language code: xx"));
}
