// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking yes/no prompt.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Only a lone `y`, ignoring case and surrounding whitespace, counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}

/// Ask `question` on `out` and block for one line from `input`.
///
/// End of input is answered as "no".
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // Keep the next message off the prompt line
        writeln!(out)?;
        tracing::debug!("end of input at prompt");
        return Ok(false);
    }
    Ok(is_affirmative(&line))
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
