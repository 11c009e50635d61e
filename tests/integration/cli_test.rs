//! Binary-level tests for the command line surface

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn playbar(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("playbar").unwrap();
    cmd.env("PLAYBAR_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    playbar(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_requires_a_source() {
    let dir = TempDir::new().unwrap();
    playbar(&dir)
        .arg("play")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<SOURCE>"));
}

#[test]
fn play_rejects_bad_duration() {
    let dir = TempDir::new().unwrap();
    playbar(&dir)
        .args(["play", "clip.mp4", "--duration", "soon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    playbar(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    playbar(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    playbar(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tick_ms = 250"));

    playbar(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    playbar(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    playbar(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("playbar"));
}

#[test]
fn play_rejects_non_finite_volume() {
    let dir = TempDir::new().unwrap();
    playbar(&dir)
        .args(["play", "clip.mp4", "--volume", "inf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("finite"));
}
