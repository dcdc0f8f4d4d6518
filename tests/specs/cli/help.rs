// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for help, version, and completion output.

#![allow(clippy::unwrap_used)]

#[path = "common.rs"]
mod common;

use common::*;
use yare::parameterized;

#[test]
fn help_lists_commands() {
    let temp = empty_project();

    migstage(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("print"))
        .stdout(predicate::str::contains("completion"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn apply_help_shows_examples() {
    let temp = empty_project();

    migstage(&temp)
        .args(["apply", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"))
        .stdout(predicate::str::contains("Examples:"));
}

#[parameterized(
    long_version = { "--version" },
    short_v = { "-v" },
    silent_v = { "-V" },
)]
fn version_flag_outputs_version(flag: &str) {
    let temp = empty_project();

    migstage(&temp)
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains("migstage"))
        .stdout(predicate::str::is_match(r"[0-9]+\.[0-9]+\.[0-9]+").unwrap());
}

#[parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_script(shell: &str) {
    let temp = empty_project();

    migstage(&temp)
        .args(["completion", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains("migstage"));
}

#[test]
fn unknown_command_fails() {
    let temp = empty_project();

    migstage(&temp).arg("migrate").assert().failure();
}
