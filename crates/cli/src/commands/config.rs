// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::config::{Overrides, Settings};
use crate::error::{Error, Result};
use crate::instructions::dashboard_url;

/// Run `migstage config`: show the effective settings.
pub fn run(work_dir: &Path, output: OutputFormat) -> Result<()> {
    let settings = Settings::load(work_dir, Overrides::default())?;
    let rendered = render(&settings, output)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Render settings in the requested format, newline-terminated.
pub(crate) fn render(settings: &Settings, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => {
            let mut text = String::new();
            text.push_str(&format!("project_id: {}\n", settings.project_id));
            text.push_str(&format!("dashboard:  {}\n", dashboard_url(&settings.project_id)));
            text.push_str(&format!("migration:  {}\n", settings.migration));
            text.push_str(&format!("clipboard:  {}\n", settings.clipboard));
            text.push_str(&format!("title:      {}\n", settings.title));
            text.push_str("creates:\n");
            for item in &settings.creates {
                text.push_str(&format!("  - {}\n", item));
            }
            Ok(text)
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(settings)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Toml => toml::to_string(settings)
            .map_err(|e| Error::Config(format!("failed to serialize settings: {}", e))),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
