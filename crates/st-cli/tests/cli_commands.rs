//! Integration tests for the `st` command-line interface.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a small two-room game definition into a temp directory.
fn test_game() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.json");
    fs::write(
        &path,
        r#"{
    "start": "cell",
    "rooms": [
        {
            "id": "cell",
            "description": "A damp cell. A corridor leads east.",
            "exits": { "east": "corridor" },
            "items": ["spoon"]
        },
        {
            "id": "corridor",
            "description": "A long corridor. The cell is west.",
            "exits": { "west": "cell" }
        }
    ],
    "dialogues": { "guard": ["Halt!", "Back to your cell."] },
    "end_marker": "The guard ignores you."
}"#,
    )
    .unwrap();
    (dir, path)
}

fn stranded() -> Command {
    Command::cargo_bin("stranded").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_builtin_world() {
    stranded()
        .arg("play")
        .env("NO_COLOR", "1")
        .write_stdin("take wrench\ngo north\ngo west\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are at the crash site")
                .and(predicate::str::contains("You take the wrench."))
                .and(predicate::str::contains("Inventory: wrench"))
                .and(predicate::str::contains("You are in a dense forest."))
                .and(predicate::str::contains("You can't go west from here.")),
        );
}

#[test]
fn play_unknown_command() {
    stranded()
        .arg("play")
        .env("NO_COLOR", "1")
        .write_stdin("dance\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "I don't understand the command \"dance\".",
        ));
}

#[test]
fn play_scene_events() {
    stranded()
        .arg("play")
        .env("NO_COLOR", "1")
        .write_stdin(":select npc1\n:next\n:next\n:next\n:release\n:click keycard\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hello, traveler!")
                .and(predicate::str::contains("[End of conversation]"))
                .and(predicate::str::contains("You pick up the keycard."))
                .and(predicate::str::contains("Inventory: keycard")),
        );
}

#[test]
fn play_custom_world() {
    let (_dir, path) = test_game();
    stranded()
        .args(["play", "--world", path.to_str().unwrap()])
        .env("NO_COLOR", "1")
        .write_stdin("talk guard\n:next\n:next\ngo east\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A damp cell.")
                .and(predicate::str::contains("Halt!"))
                .and(predicate::str::contains("The guard ignores you."))
                .and(predicate::str::contains("A long corridor.")),
        );
}

#[test]
fn play_stops_at_quit() {
    stranded()
        .arg("play")
        .env("NO_COLOR", "1")
        .write_stdin("quit\ntake wrench\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You take the wrench.").not());
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_valid_game() {
    let (_dir, path) = test_game();
    stranded()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("2 rooms, 1 NPCs")),
        );
}

#[test]
fn check_rejects_dangling_exit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{ "start": "a", "rooms": [ { "id": "a", "description": "", "exits": { "up": "attic" } } ] }"#,
    )
    .unwrap();

    stranded()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined room \"attic\""));
}

#[test]
fn check_missing_file() {
    stranded()
        .args(["check", "/nonexistent/game.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// rooms / dump
// ---------------------------------------------------------------------------

#[test]
fn rooms_lists_builtin() {
    stranded()
        .arg("rooms")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("crashSite (start)")
                .and(predicate::str::contains("spaceBar"))
                .and(predicate::str::contains("3 rooms")),
        );
}

#[test]
fn dump_round_trips_through_check() {
    let output = stranded().arg("dump").assert().success().get_output().stdout.clone();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("builtin.json");
    fs::write(&path, output).unwrap();

    stranded()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 rooms, 1 NPCs, 1 pickups, starting in crashSite"));
}
