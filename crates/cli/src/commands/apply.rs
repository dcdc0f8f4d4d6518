// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::ApplyArgs;
use crate::clipboard::{Clipboard, ShellClipboard};
use crate::colors::Palette;
use crate::config::{Overrides, Settings};
use crate::error::Result;
use crate::instructions::{self, Briefing};
use crate::migration::Migration;
use crate::prompt;

/// Whether the SQL goes to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDecision {
    /// Ask the operator.
    Ask,
    /// Copy without asking (`--yes`).
    Always,
    /// Never copy (`--no`).
    Never,
}

impl ApplyArgs {
    pub fn decision(&self) -> CopyDecision {
        if self.yes {
            CopyDecision::Always
        } else if self.no {
            CopyDecision::Never
        } else {
            CopyDecision::Ask
        }
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            project_id: self.project.clone(),
            migration: self.file.clone(),
            clipboard: None,
        }
    }
}

/// Run `migstage apply` against the real terminal and clipboard.
pub fn run(work_dir: &Path, args: ApplyArgs) -> Result<()> {
    let settings = Settings::load(work_dir, args.overrides())?;
    tracing::debug!("resolved settings: {:?}", settings);

    let mut clipboard = ShellClipboard::new(settings.clipboard.clone(), work_dir);
    let stdin = io::stdin();
    let stdout = io::stdout();
    stage(
        work_dir,
        &settings,
        args.decision(),
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut clipboard,
        Palette::detect(),
    )
}

/// Locate the migration, print the instructions and settle the clipboard step.
///
/// A missing migration fails before anything is printed or asked.
pub fn stage<R: BufRead, W: Write, C: Clipboard>(
    work_dir: &Path,
    settings: &Settings,
    decision: CopyDecision,
    input: &mut R,
    out: &mut W,
    clipboard: &mut C,
    palette: Palette,
) -> Result<()> {
    let migration = Migration::load(work_dir, &settings.migration)?;

    instructions::render(out, &Briefing::new(settings, &migration), palette)?;

    let copy = match decision {
        CopyDecision::Always => true,
        CopyDecision::Never => false,
        CopyDecision::Ask => prompt::confirm(input, out, instructions::COPY_PROMPT)?,
    };

    if copy {
        clipboard.copy(&migration.sql)?;
        instructions::render_copied(out)?;
    } else {
        instructions::render_fallback(out, &migration.display_path, palette)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
