use assert_cmd::Command;
use predicates::prelude::*;

const UNREACHABLE: &str = "http://127.0.0.1:1";

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("caramel").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Caramel dog-photo gallery"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("caramel").unwrap();
    cmd.arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("port").and(predicate::str::contains("7071")));
}

#[test]
fn test_cli_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("caramel").unwrap();
    cmd.arg("fetch").assert().failure();
}

#[test]
fn test_visitors_unreachable_shows_error() {
    let mut cmd = Command::cargo_bin("caramel").unwrap();
    cmd.args(["--api-url", UNREACHABLE, "visitors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visitors: Error"));
}

#[test]
fn test_images_unreachable_names_endpoint() {
    let mut cmd = Command::cargo_bin("caramel").unwrap();
    cmd.args(["--api-url", UNREACHABLE, "images"]).assert().success().stdout(
        predicate::str::contains("Failed to load images")
            .and(predicate::str::contains("http://127.0.0.1:1/api/list-images")),
    );
}

#[test]
fn test_chat_unreachable_answers_sleepy() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");
    let mut cmd = Command::cargo_bin("caramel").unwrap();
    cmd.args(["--api-url", UNREACHABLE, "--state"])
        .arg(&state)
        .args(["chat", "hello Caramel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"error\": true"));
}

#[test]
fn test_play_headless_round() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");
    let mut cmd = Command::cargo_bin("caramel").unwrap();
    cmd.arg("--state")
        .arg(&state)
        .args(["play", "--seed", "7", "--frames", "600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"treatsSpawned\"").and(predicate::str::contains("\"score\"")));
}
