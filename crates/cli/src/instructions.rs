// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-facing instruction text.
//!
//! Output is fully determined by the [`Briefing`] and [`Palette`]; nothing here
//! touches the filesystem or the environment.

use std::io::{self, Write};

use crate::colors::Palette;
use crate::config::Settings;
use crate::migration::Migration;

const RULE_WIDTH: usize = 50;

/// Confirmation printed after the SQL reached the clipboard.
pub const COPIED: &str = "✅ SQL copied to clipboard!";
/// Follow-up printed after [`COPIED`].
pub const PASTE_HINT: &str = "Now paste it into the Supabase SQL Editor and run it.";
/// Question asked before copying.
pub const COPY_PROMPT: &str = "📋 Copy SQL to clipboard now? (y/n): ";

/// Everything the instructions mention.
#[derive(Debug, Clone, Copy)]
pub struct Briefing<'a> {
    pub title: &'a str,
    pub creates: &'a [String],
    pub project_id: &'a str,
    pub path: &'a str,
    pub clipboard: &'a str,
}

impl<'a> Briefing<'a> {
    pub fn new(settings: &'a Settings, migration: &'a Migration) -> Self {
        Briefing {
            title: &settings.title,
            creates: &settings.creates,
            project_id: &settings.project_id,
            path: &migration.display_path,
            clipboard: &settings.clipboard,
        }
    }
}

/// SQL editor URL for a dashboard project.
pub fn dashboard_url(project_id: &str) -> String {
    format!("https://supabase.com/dashboard/project/{project_id}/sql/new")
}

/// Shell one-liner that copies the migration by hand.
pub fn clipboard_template(path: &str, clipboard: &str) -> String {
    format!("cat {path} | {clipboard}")
}

/// Write the full instruction block.
pub fn render<W: Write>(out: &mut W, briefing: &Briefing<'_>, palette: Palette) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(out, "{}", palette.header(&format!("🔧 {}", briefing.title)))?;
    writeln!(out, "{heavy}")?;
    writeln!(out)?;

    writeln!(out, "{}", palette.header("📋 This migration will create:"))?;
    for item in briefing.creates {
        writeln!(out, "  ✓ {item}")?;
    }
    writeln!(out)?;

    writeln!(out, "{}", palette.header("⚠️  MANUAL APPLICATION REQUIRED:"))?;
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        palette.header("Option 1: Supabase Dashboard (Recommended)")
    )?;
    writeln!(out, "{light}")?;
    writeln!(
        out,
        "1. Go to: {}",
        palette.literal(&dashboard_url(briefing.project_id))
    )?;
    writeln!(
        out,
        "2. Copy the contents of: {}",
        palette.context(briefing.path)
    )?;
    writeln!(out, "3. Paste into SQL Editor")?;
    writeln!(out, "4. Click 'Run' (or press Cmd/Ctrl + Enter)")?;
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        palette.header("Option 2: Copy SQL to clipboard from a shell")
    )?;
    writeln!(out, "{light}")?;
    writeln!(
        out,
        "{}",
        palette.literal(&clipboard_template(briefing.path, briefing.clipboard))
    )?;
    writeln!(out)?;

    writeln!(out, "✅ Migration file ready!")?;
    writeln!(out)?;
    Ok(())
}

/// Write the confirmation shown after a copy.
pub fn render_copied<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{COPIED}")?;
    writeln!(out, "{PASTE_HINT}")
}

/// Write the fallback shown when nothing was copied.
pub fn render_fallback<W: Write>(out: &mut W, path: &str, palette: Palette) -> io::Result<()> {
    writeln!(out, "📄 Migration SQL available at: {}", palette.context(path))
}

#[cfg(test)]
#[path = "instructions_tests.rs"]
mod tests;
