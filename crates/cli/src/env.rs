// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by migstage are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the log filter directive from `MIGSTAGE_LOG`, if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::MIGSTAGE_LOG).ok()
}

/// Returns the value of `MIGSTAGE_CONFIG_DIR` if set.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var(vars::MIGSTAGE_CONFIG_DIR)
        .ok()
        .map(PathBuf::from)
}

/// Returns the dashboard project ID override from `MIGSTAGE_PROJECT_ID`.
pub fn project_id() -> Option<String> {
    std::env::var(vars::MIGSTAGE_PROJECT_ID).ok()
}

/// Returns the migration path override from `MIGSTAGE_MIGRATION`.
pub fn migration() -> Option<String> {
    std::env::var(vars::MIGSTAGE_MIGRATION).ok()
}

/// Returns the clipboard command override from `MIGSTAGE_CLIPBOARD`.
pub fn clipboard() -> Option<String> {
    std::env::var(vars::MIGSTAGE_CLIPBOARD).ok()
}

/// Returns `true` if a Wayland session is advertised.
pub fn wayland() -> bool {
    std::env::var_os(vars::WAYLAND_DISPLAY).is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
