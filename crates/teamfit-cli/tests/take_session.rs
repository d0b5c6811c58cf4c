//! Interactive quiz tests driving `teamfit take` through stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn teamfit(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("teamfit").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("TEAMFIT_QUESTION_BANK")
        .env_remove("RUST_LOG");
    cmd
}

/// Pick `choice` (1-based) on every question of the built-in bank, then continue.
fn answer_all(choice: usize) -> String {
    let counts = [4, 4, 4, 4, 2, 2, 2, 4, 4, 4, 2, 3, 2, 2, 4];
    counts
        .iter()
        .map(|&n| format!("{}\n\n", choice.min(n)))
        .collect()
}

#[test]
fn full_quiz_prints_result() {
    let dir = TempDir::new().unwrap();
    teamfit(&dir)
        .arg("take")
        .write_stdin(answer_all(1))
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 15"))
        .stdout(predicate::str::contains("Question 15 of 15"))
        .stdout(predicate::str::contains("Your best fit:"))
        .stdout(predicate::str::contains("Blue Team (blue)"))
        .stdout(predicate::str::contains("15 of 15 questions answered"));
}

#[test]
fn skipping_everything_still_completes() {
    let dir = TempDir::new().unwrap();
    teamfit(&dir)
        .arg("take")
        .write_stdin("\n".repeat(15))
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 15 questions answered"));
}

#[test]
fn quitting_early_gives_no_result() {
    let dir = TempDir::new().unwrap();
    teamfit(&dir)
        .arg("take")
        .write_stdin("1\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 2 of 15"))
        .stdout(predicate::str::contains("Quiz not finished"))
        .stdout(predicate::str::contains("Your best fit").not());
}

#[test]
fn save_writes_json_and_html() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("teamfit.toml"), "output_dir = \"out\"\n").unwrap();

    teamfit(&dir)
        .args(["take", "--save", "--html"])
        .write_stdin(answer_all(2))
        .assert()
        .success()
        .stderr(predicate::str::contains("Result saved to:"))
        .stderr(predicate::str::contains("HTML result:"));

    let files: Vec<_> = std::fs::read_dir(dir.path().join("out"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    let json_path = files
        .iter()
        .find(|p| p.extension().is_some_and(|e| e == "json"))
        .expect("json result written");
    assert!(files
        .iter()
        .any(|p| p.extension().is_some_and(|e| e == "html")));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(json["best"], "red");
    assert_eq!(json["bank"]["question_count"], 15);
}
