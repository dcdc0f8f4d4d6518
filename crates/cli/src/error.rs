// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur while staging a migration.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("migration file not found: {0}\n  hint: run from the project root, or pass --file <path>")]
    MigrationNotFound(String),

    #[error("clipboard utility could not be started: '{command}': {source}\n  hint: set MIGSTAGE_CLIPBOARD or `clipboard` in migstage.toml")]
    ClipboardUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard command cannot be empty")]
    EmptyClipboardCommand,

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for migstage operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
