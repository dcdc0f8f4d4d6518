// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const MIGRATION: &str = "supabase/migrations/20251117234118_create_wallet_tracking_tables.sql";
pub const SQL: &str = "CREATE TABLE wallet_balances (...);";

/// Clipboard stand-in that writes whatever it receives to a file in the project.
pub const FILE_CLIPBOARD: &str = "cat > clipboard.txt";

/// A `migstage` command isolated from the caller's environment and config.
pub fn migstage(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("migstage");
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("MIGSTAGE_LOG")
        .env_remove("MIGSTAGE_PROJECT_ID")
        .env_remove("MIGSTAGE_MIGRATION")
        .env_remove("MIGSTAGE_CLIPBOARD")
        .env("MIGSTAGE_CONFIG_DIR", temp.path().join(".user-config"));
    cmd
}

/// Temp project with the default migration containing `sql`.
pub fn project_with(sql: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), MIGRATION, sql);
    temp
}

/// Temp project without any migration.
pub fn empty_project() -> TempDir {
    TempDir::new().unwrap()
}

pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// What the file clipboard received, if it ran.
pub fn clipboard_contents(temp: &TempDir) -> Option<String> {
    fs::read_to_string(temp.path().join("clipboard.txt")).ok()
}
