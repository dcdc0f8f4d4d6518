// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use crate::config::{Overrides, Settings};
use crate::error::Result;
use crate::migration::Migration;

/// Run `migstage print`: write the migration SQL to stdout unchanged.
///
/// Lets the SQL be piped to another tool where no clipboard utility exists.
pub fn run(work_dir: &Path, file: Option<String>) -> Result<()> {
    let settings = Settings::load(
        work_dir,
        Overrides {
            migration: file,
            ..Overrides::default()
        },
    )?;
    let migration = Migration::load(work_dir, &settings.migration)?;
    write_sql(&mut io::stdout().lock(), &migration)
}

pub(crate) fn write_sql<W: Write>(out: &mut W, migration: &Migration) -> Result<()> {
    out.write_all(migration.sql.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "print_tests.rs"]
mod tests;
