// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::help;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for `migstage config`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml,
}

#[derive(Parser)]
#[command(name = "migstage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Stage a SQL migration for manual application in the Supabase dashboard")]
#[command(
    long_about = "Stage a SQL migration for manual application in the Supabase dashboard.\n\n\
    Prints step-by-step instructions for the SQL editor and offers to copy the migration to the clipboard."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if migstage was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    // `apply` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options for `migstage apply`.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyArgs {
    /// Migration file, relative to the working directory
    #[arg(long, short = 'f', value_name = "path")]
    pub file: Option<String>,

    /// Dashboard project ID
    #[arg(long, short = 'p', value_name = "id")]
    pub project: Option<String>,

    /// Copy to the clipboard without asking
    #[arg(long, short = 'y', conflicts_with = "no")]
    pub yes: bool,

    /// Never copy to the clipboard and don't ask
    #[arg(long, short = 'n')]
    pub no: bool,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print apply instructions and offer to copy the SQL
    #[command(after_help = "Examples:\n  \
        migstage apply                      Ask before copying\n  \
        migstage apply --yes                Copy without asking\n  \
        migstage apply --no                 Only print instructions\n  \
        migstage apply -f db/002_users.sql  Stage another migration")]
    Apply(ApplyArgs),

    /// Write the migration SQL to stdout
    #[command(after_help = "Examples:\n  \
        migstage print                      Print the configured migration\n  \
        migstage print | psql \"$DB_URL\"     Apply through psql instead")]
    Print {
        /// Migration file, relative to the working directory
        #[arg(long, short = 'f', value_name = "path")]
        file: Option<String>,
    },

    /// Show effective settings
    Config {
        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Apply(ApplyArgs::default())
    }
}

#[cfg(test)]
#[path = "cli_tests/mod.rs"]
mod tests;
