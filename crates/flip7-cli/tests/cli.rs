use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flip7(state: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flip7").expect("binary builds");
    cmd.arg("--state").arg(state);
    cmd
}

#[test]
fn fresh_sessions_report_the_full_deck() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("left 94 / 94"))
        .stdout(predicate::str::contains("advice: You can draw"));
}

#[test]
fn bare_invocations_default_to_the_report() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("left 94 / 94"));
}

#[test]
fn draws_persist_between_invocations() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state)
        .args(["draw", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("left 93 / 94"))
        .stdout(predicate::str::contains("hand: 7"));

    flip7(&state)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("left 93 / 94"))
        .stdout(predicate::str::contains("hand: 7"));
}

#[test]
fn undo_restores_the_previous_deck() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state).args(["draw", "7"]).assert().success();
    flip7(&state)
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("left 94 / 94"))
        .stdout(predicate::str::contains("hand: (empty)"));

    flip7(&state)
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to undo."));
}

#[test]
fn refused_draws_report_and_exit_cleanly() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state).args(["set", "x2", "0"]).assert().success();
    flip7(&state)
        .args(["draw", "x2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No copies of x2 left to draw."))
        .stdout(predicate::str::contains("left 93 / 94"));
}

#[test]
fn negative_set_counts_are_floored_at_zero() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state)
        .args(["set", "freeze", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"freeze\s+0\s").unwrap())
        .stdout(predicate::str::contains("left 91 / 94"));
}

#[test]
fn sort_preference_persists() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state).args(["sort", "catalog"]).assert().success();
    flip7(&state)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"chance\n0\s+1\s").unwrap());
}

#[test]
fn corrupt_state_files_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");
    std::fs::write(&state, "{ not json").unwrap();

    flip7(&state)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("left 94 / 94"));
}

#[test]
fn state_path_can_come_from_the_environment() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("env-state.json");

    let mut cmd = Command::cargo_bin("flip7").expect("binary builds");
    cmd.env("FLIP7_STATE", &state)
        .args(["draw", "12"])
        .assert()
        .success();
    assert!(state.exists());
}

#[test]
fn invalid_card_labels_are_usage_errors() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state)
        .args(["play", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized card label"));
}

#[test]
fn advise_lists_the_most_likely_numbers() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state)
        .arg("advise")
        .assert()
        .success()
        .stdout(predicate::str::contains("top draw chances:"))
        .stdout(predicate::str::contains("12: 12.77%"));
}

#[test]
fn return_puts_the_hand_back() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state).args(["draw", "9"]).assert().success();
    flip7(&state).args(["draw", "9"]).assert().success();
    flip7(&state)
        .arg("return")
        .assert()
        .success()
        .stdout(predicate::str::contains("left 94 / 94"))
        .stdout(predicate::str::contains("hand: (empty)"));
}

#[test]
fn reset_wipes_the_whole_session() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    flip7(&state).args(["draw", "9"]).assert().success();
    flip7(&state).args(["set", "12", "0"]).assert().success();
    flip7(&state)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("left 94 / 94"))
        .stdout(predicate::str::contains("hand: (empty)"));
}
