// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Migration file lookup.
//!
//! The SQL is an opaque blob: it is read once and handed on unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A migration file that has been located and read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// Path as configured, used in everything shown to the operator.
    pub display_path: String,
    /// Absolute or work-dir-joined path that was read.
    pub path: PathBuf,
    /// Full file contents.
    pub sql: String,
}

impl Migration {
    /// Locate and read the migration at `relative` under `work_dir`.
    pub fn load(work_dir: &Path, relative: &str) -> Result<Migration> {
        let path = locate(work_dir, relative)?;
        let sql = fs::read_to_string(&path)?;
        tracing::debug!("read {} bytes from {}", sql.len(), path.display());
        Ok(Migration {
            display_path: relative.to_string(),
            path,
            sql,
        })
    }
}

/// Resolve `relative` against `work_dir`, failing if nothing is there.
///
/// Only the one location is checked.
pub fn locate(work_dir: &Path, relative: &str) -> Result<PathBuf> {
    let path = work_dir.join(relative);
    if !path.exists() {
        return Err(Error::MigrationNotFound(relative.to_string()));
    }
    Ok(path)
}

#[cfg(test)]
#[path = "migration_tests.rs"]
mod tests;
