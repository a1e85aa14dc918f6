use anyhow::Result;
use colored::Colorize;

use crate::config::get_config;
use crate::preview::{truncate_header, truncate_lines, truncate_text, PreviewLimits};

/// Cap text read from stdin (or `inline`) at `limit` characters.
pub fn text(inline: Option<String>, limit: usize) -> Result<()> {
    let input = super::read_input(inline)?;
    println!("{}", truncate_text(input.trim_end_matches('\n'), limit));
    Ok(())
}

/// Cap a tool call summary line; defaults to the configured header cap.
pub fn header(inline: Option<String>, limit: Option<usize>) -> Result<()> {
    let limit = match limit {
        Some(limit) => limit,
        None => get_config()?.header_max_chars,
    };
    let input = super::read_input(inline)?;
    println!("{}", truncate_header(input.trim_end_matches('\n'), limit));
    Ok(())
}

/// Cap tool output line by line using the tool's limits unless overridden.
pub fn lines(
    tool: Option<String>,
    max_lines: Option<usize>,
    max_line_chars: Option<usize>,
) -> Result<()> {
    let config = get_config()?;
    let base = config.limits_for_tool(tool.as_deref().unwrap_or_default());
    let limits = PreviewLimits::new(
        max_lines.unwrap_or(base.max_lines),
        max_line_chars.unwrap_or(base.max_line_chars),
    )?;

    let input = super::read_input(None)?;
    let input_lines: Vec<&str> = input.lines().collect();
    let result = truncate_lines(&input_lines, limits);

    for line in &result.lines {
        println!("{}", line);
    }

    if result.was_truncated {
        eprintln!(
            "{} {} line(s) dropped, {} line(s) shortened",
            "…".yellow().bold(),
            result.truncated_line_count,
            result.truncated_by_char_count
        );
    }
    Ok(())
}
