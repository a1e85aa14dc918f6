//! CLI command handlers. Each handler reads its input, runs the library
//! operation and prints the result.

pub mod config;
pub mod preview;
pub mod truncate;
pub mod verb;

use anyhow::{Context, Result};
use std::io::Read;

/// Use `inline` when given, otherwise read all of stdin.
pub(crate) fn read_input(inline: Option<String>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}
