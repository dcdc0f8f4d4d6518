// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! migstage - stage a SQL migration for manual application.
//!
//! This crate provides the functionality behind the `migstage` CLI: it finds a
//! migration file, prints instructions for running it in the Supabase SQL editor,
//! and optionally copies the SQL to the system clipboard.
//!
//! # Main Components
//!
//! - [`Settings`] - Layered configuration (defaults, config files, env, flags)
//! - [`Migration`] - The located migration file and its contents
//! - [`instructions`] - Operator-facing instruction text
//! - [`Clipboard`] - Seam for the clipboard utility ([`ShellClipboard`] in production)
//! - [`Error`] - Error types for all operations
//!
//! # Staging a migration
//!
//! ```rust,ignore
//! use migstage::{commands::apply::{stage, CopyDecision}, Settings, ShellClipboard};
//!
//! let settings = Settings::load(&work_dir, Default::default())?;
//! let mut clipboard = ShellClipboard::new(settings.clipboard.clone(), &work_dir);
//! stage(&work_dir, &settings, CopyDecision::Ask, &mut input, &mut out, &mut clipboard, palette)?;
//! ```

mod cli;
pub mod clipboard;
pub mod colors;
pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod help;
pub mod instructions;
pub mod logging;
pub mod migration;
pub mod prompt;

pub use cli::{ApplyArgs, Cli, Command, OutputFormat};
pub use clipboard::{Clipboard, ShellClipboard};
pub use config::Settings;
pub use error::{Error, Result};
pub use migration::Migration;

use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let work_dir = match cli.directory {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    tracing::debug!("working directory: {}", work_dir.display());

    match cli.command.unwrap_or_default() {
        Command::Apply(args) => commands::apply::run(&work_dir, args),
        Command::Print { file } => commands::print::run(&work_dir, file),
        Command::Config { output } => commands::config::run(&work_dir, output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "migstage", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
