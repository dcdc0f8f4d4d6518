// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors::{self, Palette};
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with the command list ahead of the options.
pub fn template() -> String {
    template_with(Palette::detect())
}

fn template_with(palette: Palette) -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        palette.header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    commands_with(Palette::detect())
}

fn commands_with(palette: Palette) -> String {
    format!(
        "\
{header}
  {apply}       Print apply instructions and offer to copy the SQL (default)
  {print}       Write the migration SQL to stdout
  {config}      Show effective settings
  {completion}  Generate shell completions
",
        header = palette.header("Commands:"),
        apply = palette.literal("apply"),
        print = palette.literal("print"),
        config = palette.literal("config"),
        completion = palette.literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    quickstart_with(Palette::detect())
}

fn quickstart_with(palette: Palette) -> String {
    format!(
        "\
{header}
  {apply}                Walk through applying the migration
  {yes}       Copy the SQL without asking
  {print}   Pipe the SQL into another tool
  {project}  Point at another dashboard project",
        header = palette.header("Get started:"),
        apply = palette.literal("migstage"),
        yes = palette.literal("migstage apply -y"),
        print = palette.literal("migstage print | psql"),
        project = palette.literal("migstage apply -p <id>"),
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
