//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lingo(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("lingo").unwrap();
    cmd.current_dir(dir.path())
        .env("LINGO_DATA_DIR", dir.path().join("data"))
        .env_remove("LINGO_HISTORY_LIMIT")
        .env_remove("LINGO_VARIANTS_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_accepts_spelling_variant() {
    let dir = TempDir::new().unwrap();
    lingo(&dir)
        .args(["check", "--expected", "color", "--answer", "colour"])
        .assert()
        .success()
        .stdout("correct\n");
}

#[test]
fn check_rejects_other_word() {
    let dir = TempDir::new().unwrap();
    lingo(&dir)
        .args(["check", "--expected", "flavour", "--answer", "colour"])
        .assert()
        .success()
        .stdout("incorrect\n");
}

#[test]
fn score_prints_word_diff() {
    let dir = TempDir::new().unwrap();
    lingo(&dir)
        .args([
            "score",
            "--expected",
            "I like to eat pizza on Fridays",
            "--answer",
            "I like too eat pizza on Friday",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("close (score 0.80)"))
        .stdout(predicate::str::contains("[~] too -> to"))
        .stdout(predicate::str::contains("[~] friday -> fridays"));
}

#[test]
fn score_json_output() {
    let dir = TempDir::new().unwrap();
    let output = lingo(&dir)
        .args(["score", "--expected", "I like pizza", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["kind"], "incorrect");
    assert_eq!(outcome["word_diff"].as_array().unwrap().len(), 3);
    assert_eq!(outcome["word_diff"][0]["status"], "missing");
}

#[test]
fn quiz_then_history_then_clear() {
    let dir = TempDir::new().unwrap();

    lingo(&dir)
        .args(["quiz", "--type", "vocabulary"])
        .write_stdin("color\nCRASHED\ncenter\norganize\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 4.0/4 (100%) 4 correct"));

    lingo(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("vocabulary"))
        .stdout(predicate::str::contains("100%"));

    lingo(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout("Progress cleared.\n");

    lingo(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout("No results yet.\n");
}

#[test]
fn quiz_reads_json_bank() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("bank.json");
    std::fs::write(
        &bank,
        r#"{"dictation": [{"prompt": "Listen", "expected": "See you tomorrow"}]}"#,
    )
    .unwrap();

    lingo(&dir)
        .args(["quiz", "--type", "dictation", "--bank"])
        .arg(&bank)
        .write_stdin("see you tomorrow!\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("perfect (score 1.00)"))
        .stdout(predicate::str::contains("Score: 1.0/1 (100%) 1 perfect"));

    let output = lingo(&dir).args(["history", "--json"]).output().unwrap();
    let history: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(history[0]["quiz_type"], "dictation");
    assert_eq!(history[0]["answers"][0]["user_answer"], "see you tomorrow!");
}

#[test]
fn history_limit_keeps_latest_results() {
    let dir = TempDir::new().unwrap();
    for answer in ["pizza\n", "nope\n"] {
        lingo(&dir)
            .env("LINGO_HISTORY_LIMIT", "1")
            .args(["quiz", "--type", "word_game"])
            .write_stdin(answer)
            .assert()
            .success();
    }

    let output = lingo(&dir).args(["history", "--json"]).output().unwrap();
    let history: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["answers"][0]["user_answer"], "nope");
}

#[test]
fn unknown_quiz_type_fails() {
    let dir = TempDir::new().unwrap();
    lingo(&dir)
        .args(["quiz", "--type", "grammar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown quiz type 'grammar'"));
}

#[test]
fn invalid_history_limit_fails() {
    let dir = TempDir::new().unwrap();
    lingo(&dir)
        .env("LINGO_HISTORY_LIMIT", "many")
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("LINGO_HISTORY_LIMIT"));
}
