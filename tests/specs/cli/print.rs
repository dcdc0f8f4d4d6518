// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `migstage print`.

#![allow(clippy::unwrap_used)]

#[path = "common.rs"]
mod common;

use common::*;

#[test]
fn prints_sql_verbatim() {
    let sql = "CREATE TABLE wallet_nfts (\n  id uuid\n);\n";
    let temp = project_with(sql);

    migstage(&temp)
        .arg("print")
        .assert()
        .success()
        .stdout(sql);
}

#[test]
fn print_does_not_prompt() {
    let temp = project_with(SQL);

    migstage(&temp)
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copy SQL to clipboard").not());
}

#[test]
fn print_missing_migration_fails() {
    let temp = empty_project();

    migstage(&temp)
        .arg("print")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(MIGRATION));
}

#[test]
fn print_file_flag() {
    let temp = empty_project();
    write_file(temp.path(), "db/002.sql", "SELECT 2;");

    migstage(&temp)
        .args(["print", "--file", "db/002.sql"])
        .assert()
        .success()
        .stdout("SELECT 2;");
}

#[test]
fn print_migration_from_env() {
    let temp = empty_project();
    write_file(temp.path(), "db/003.sql", "SELECT 3;");

    migstage(&temp)
        .arg("print")
        .env("MIGSTAGE_MIGRATION", "db/003.sql")
        .assert()
        .success()
        .stdout("SELECT 3;");
}
