// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! System clipboard access through an external utility.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::env;
use crate::error::{Error, Result};

/// Destination for the migration SQL.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Clipboard command for the running platform.
pub fn default_command() -> &'static str {
    default_command_for(std::env::consts::OS, env::wayland())
}

/// Clipboard command for `os` (as in [`std::env::consts::OS`]).
pub fn default_command_for(os: &str, wayland: bool) -> &'static str {
    match os {
        "macos" => "pbcopy",
        "windows" => "clip",
        _ if wayland => "wl-copy",
        _ => "xclip -selection clipboard",
    }
}

/// Runs a shell command with the text on its stdin.
///
/// The command is waited on but its exit status is only logged.
#[derive(Debug, Clone)]
pub struct ShellClipboard {
    command: String,
    work_dir: PathBuf,
}

impl ShellClipboard {
    pub fn new(command: impl Into<String>, work_dir: impl Into<PathBuf>) -> Self {
        ShellClipboard {
            command: command.into(),
            work_dir: work_dir.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

impl Clipboard for ShellClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        tracing::debug!(
            "starting clipboard utility '{}' with {} bytes",
            self.command,
            text.len()
        );

        let mut child = shell(&self.command)
            .current_dir(&self.work_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| Error::ClipboardUnavailable {
                command: self.command.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A utility that exits early closes the pipe; that is not our failure to report
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                tracing::warn!("clipboard utility did not take all input: {}", e);
            }
        }

        match child.wait() {
            Ok(status) if status.success() => tracing::debug!("clipboard utility finished"),
            Ok(status) => tracing::warn!("clipboard utility exited with {}", status),
            Err(e) => tracing::warn!("failed to wait for clipboard utility: {}", e),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "clipboard_tests.rs"]
mod tests;
