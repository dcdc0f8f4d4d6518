// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    let vars = [
        ("NO_COLOR", "NO_COLOR"),
        ("COLOR", "COLOR"),
        ("MIGSTAGE_LOG", "MIGSTAGE_LOG"),
        ("MIGSTAGE_CONFIG_DIR", "MIGSTAGE_CONFIG_DIR"),
        ("MIGSTAGE_PROJECT_ID", "MIGSTAGE_PROJECT_ID"),
        ("MIGSTAGE_MIGRATION", "MIGSTAGE_MIGRATION"),
        ("MIGSTAGE_CLIPBOARD", "MIGSTAGE_CLIPBOARD"),
        ("WAYLAND_DISPLAY", "WAYLAND_DISPLAY"),
    ];

    for (const_name, env_name) in &vars {
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";")?;
    }

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
