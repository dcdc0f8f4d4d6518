// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `migstage config` and settings layering.

#![allow(clippy::unwrap_used)]

#[path = "common.rs"]
mod common;

use common::*;

#[test]
fn shows_defaults() {
    let temp = empty_project();

    migstage(&temp)
        .arg("config")
        .env("MIGSTAGE_CLIPBOARD", "pbcopy")
        .assert()
        .success()
        .stdout(predicate::str::contains("project_id: fjxbuyxephlfoivcpckd"))
        .stdout(predicate::str::contains(format!("migration:  {MIGRATION}")))
        .stdout(predicate::str::contains("clipboard:  pbcopy"))
        .stdout(predicate::str::contains("  - wallet_balances table"));
}

#[test]
fn project_config_is_applied() {
    let temp = empty_project();
    write_file(
        temp.path(),
        "migstage.toml",
        "project_id = \"fromfile\"\ntitle = \"Users Migration\"\ncreates = [\"users table\"]\n",
    );

    migstage(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("project_id: fromfile"))
        .stdout(predicate::str::contains("title:      Users Migration"))
        .stdout(predicate::str::contains("wallet_balances").not());
}

#[test]
fn user_config_is_applied_below_project_config() {
    let temp = empty_project();
    write_file(
        temp.path(),
        ".user-config/migstage/config.toml",
        "project_id = \"fromuser\"\nclipboard = \"wl-copy\"\n",
    );
    write_file(temp.path(), "migstage.toml", "project_id = \"fromproject\"\n");

    migstage(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("project_id: fromproject"))
        .stdout(predicate::str::contains("clipboard:  wl-copy"));
}

#[test]
fn env_wins_over_config_files() {
    let temp = empty_project();
    write_file(temp.path(), "migstage.toml", "project_id = \"fromfile\"\n");

    migstage(&temp)
        .arg("config")
        .env("MIGSTAGE_PROJECT_ID", "fromenv")
        .assert()
        .success()
        .stdout(predicate::str::contains("project_id: fromenv"));
}

#[test]
fn json_output() {
    let temp = empty_project();

    let output = migstage(&temp)
        .args(["config", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["migration"], MIGRATION);
    assert_eq!(value["creates"].as_array().unwrap().len(), 7);
}

#[test]
fn toml_output() {
    let temp = empty_project();

    migstage(&temp)
        .args(["config", "-o", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project_id = \"fjxbuyxephlfoivcpckd\""));
}

#[test]
fn malformed_config_fails() {
    let temp = empty_project();
    write_file(temp.path(), "migstage.toml", "project_id = [");

    migstage(&temp)
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config error"))
        .stderr(predicate::str::contains("migstage.toml"));
}

#[test]
fn empty_clipboard_command_fails() {
    let temp = project_with(SQL);

    migstage(&temp)
        .env("MIGSTAGE_CLIPBOARD", "")
        .write_stdin("y\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("clipboard command cannot be empty"));
}
