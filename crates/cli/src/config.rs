// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings resolution.
//!
//! Settings are layered, later layers winning:
//! - built-in defaults (the wallet tracking migration)
//! - user config at `<config dir>/migstage/config.toml`
//! - project config at `migstage.toml` in the working directory
//! - `MIGSTAGE_*` environment variables
//! - command-line flags

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::clipboard;
use crate::env;
use crate::error::{Error, Result};

/// Project config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "migstage.toml";
const USER_CONFIG_DIR_NAME: &str = "migstage";
const USER_CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_PROJECT_ID: &str = "fjxbuyxephlfoivcpckd";
pub const DEFAULT_MIGRATION: &str =
    "supabase/migrations/20251117234118_create_wallet_tracking_tables.sql";
pub const DEFAULT_TITLE: &str = "Wallet Tracking Migration";
pub const DEFAULT_CREATES: &[&str] = &[
    "wallet_balances table",
    "wallet_nfts table",
    "wallet_history table",
    "tracked_wallets table",
    "Indexes for performance",
    "RLS policies",
    "Helper functions",
];

/// One partial configuration layer as read from a TOML file.
///
/// Every field is optional; absent fields leave the lower layer untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Dashboard project ID used in the SQL editor URL.
    pub project_id: Option<String>,
    /// Migration path, relative to the working directory.
    pub migration: Option<String>,
    /// Shell command that reads the SQL from stdin into the clipboard.
    pub clipboard: Option<String>,
    /// Title printed at the top of the instructions.
    pub title: Option<String>,
    /// Summary of what the migration creates, one item per line.
    pub creates: Option<Vec<String>>,
}

impl ConfigFile {
    /// Load a config layer, returning `None` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<ConfigFile>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let file = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(Some(file))
    }
}

/// Scalar overrides coming from the environment or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub project_id: Option<String>,
    pub migration: Option<String>,
    pub clipboard: Option<String>,
}

impl Overrides {
    /// Read the `MIGSTAGE_*` overrides from the process environment.
    pub fn from_env() -> Self {
        Overrides {
            project_id: env::project_id(),
            migration: env::migration(),
            clipboard: env::clipboard(),
        }
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub project_id: String,
    pub migration: String,
    pub clipboard: String,
    pub title: String,
    pub creates: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            migration: DEFAULT_MIGRATION.to_string(),
            clipboard: clipboard::default_command().to_string(),
            title: DEFAULT_TITLE.to_string(),
            creates: DEFAULT_CREATES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Resolve settings for `work_dir` from every layer.
    pub fn load(work_dir: &Path, cli: Overrides) -> Result<Settings> {
        Self::resolve(
            work_dir,
            user_config_path().as_deref(),
            Overrides::from_env(),
            cli,
        )
    }

    /// Resolve settings from explicit layers.
    pub fn resolve(
        work_dir: &Path,
        user_config: Option<&Path>,
        env: Overrides,
        cli: Overrides,
    ) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = user_config {
            if let Some(file) = ConfigFile::load(path)? {
                tracing::debug!("loaded user config from {}", path.display());
                settings.merge_file(file);
            }
        }

        let project_path = work_dir.join(PROJECT_CONFIG_FILE);
        if let Some(file) = ConfigFile::load(&project_path)? {
            tracing::debug!("loaded project config from {}", project_path.display());
            settings.merge_file(file);
        }

        settings.merge_overrides(env);
        settings.merge_overrides(cli);
        settings.validate()?;
        Ok(settings)
    }

    fn merge_file(&mut self, file: ConfigFile) {
        if let Some(v) = file.project_id {
            self.project_id = v;
        }
        if let Some(v) = file.migration {
            self.migration = v;
        }
        if let Some(v) = file.clipboard {
            self.clipboard = v;
        }
        if let Some(v) = file.title {
            self.title = v;
        }
        if let Some(v) = file.creates {
            self.creates = v;
        }
    }

    fn merge_overrides(&mut self, overrides: Overrides) {
        if let Some(v) = overrides.project_id {
            self.project_id = v;
        }
        if let Some(v) = overrides.migration {
            self.migration = v;
        }
        if let Some(v) = overrides.clipboard {
            self.clipboard = v;
        }
    }

    /// Reject settings that cannot produce usable instructions.
    pub fn validate(&self) -> Result<()> {
        if self.project_id.trim().is_empty() {
            return Err(Error::FieldEmpty {
                field: "project_id",
            });
        }
        if self.migration.trim().is_empty() {
            return Err(Error::FieldEmpty { field: "migration" });
        }
        if self.clipboard.trim().is_empty() {
            return Err(Error::EmptyClipboardCommand);
        }
        Ok(())
    }
}

/// Location of the user-level config file, if a config directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    env::config_dir()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join(USER_CONFIG_DIR_NAME).join(USER_CONFIG_FILE))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
