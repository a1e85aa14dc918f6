//! Tool call preview blocks: a summary line followed by bounded output.

use colored::Colorize;

use super::truncate::{is_lines_marker, truncate_header, truncate_lines, TruncationResult};
use crate::types::PreviewConfig;

/// Shown in place of the body when a tool produced no output
pub const NO_OUTPUT_PLACEHOLDER: &str = "(no output)";

const FIRST_LINE_GUTTER: &str = "  ⎿  ";
const GUTTER: &str = "     ";

/// A single tool call to preview.
#[derive(Debug, Clone, Copy)]
pub struct ToolPreview<'a> {
    pub tool_name: &'a str,
    pub header: &'a str,
    pub output: &'a str,
}

/// A tool call after truncation, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPreview {
    pub tool_name: String,
    pub header: String,
    pub body: TruncationResult,
}

impl<'a> ToolPreview<'a> {
    pub fn new(tool_name: &'a str, header: &'a str, output: &'a str) -> Self {
        Self {
            tool_name,
            header,
            output,
        }
    }

    /// Apply the header cap and the tool's line caps.
    pub fn render(&self, config: &PreviewConfig) -> RenderedPreview {
        let output_lines: Vec<&str> = self.output.lines().collect();
        let body = truncate_lines(&output_lines, config.limits_for_tool(self.tool_name));

        RenderedPreview {
            tool_name: self.tool_name.to_string(),
            header: truncate_header(self.header, config.header_max_chars).into_owned(),
            body,
        }
    }
}

impl RenderedPreview {
    fn title(&self) -> String {
        if self.header.is_empty() {
            self.tool_name.clone()
        } else {
            format!("{}({})", self.tool_name, self.header)
        }
    }

    fn body_lines(&self) -> Vec<&str> {
        if self.body.lines.is_empty() {
            vec![NO_OUTPUT_PLACEHOLDER]
        } else {
            self.body.lines.iter().map(String::as_str).collect()
        }
    }

    /// Lines without terminal styling.
    pub fn to_plain_lines(&self) -> Vec<String> {
        let mut out = vec![self.title()];
        for (i, line) in self.body_lines().into_iter().enumerate() {
            out.push(format!("{}{}", gutter(i), line));
        }
        out
    }

    /// Lines styled for a terminal: bold tool name, dimmed markers.
    pub fn to_colored_lines(&self) -> Vec<String> {
        let title = if self.header.is_empty() {
            self.tool_name.bold().to_string()
        } else {
            format!("{}({})", self.tool_name.bold(), self.header)
        };

        let mut out = vec![title];
        for (i, line) in self.body_lines().into_iter().enumerate() {
            let styled = if line == NO_OUTPUT_PLACEHOLDER || is_lines_marker(line) {
                line.dimmed().to_string()
            } else {
                line.to_string()
            };
            out.push(format!("{}{}", gutter(i).bright_black(), styled));
        }
        out
    }
}

fn gutter(index: usize) -> &'static str {
    if index == 0 {
        FIRST_LINE_GUTTER
    } else {
        GUTTER
    }
}
