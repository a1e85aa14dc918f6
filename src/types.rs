use serde::{Deserialize, Serialize};

use crate::error::LimitsError;
use crate::preview::limits::{
    is_task_tool, PreviewLimits, DEFAULT_HEADER_MAX_CHARS, DEFAULT_MAX_LINES,
    DEFAULT_MAX_LINE_CHARS, TASK_MAX_LINES,
};

/// Resolved preview configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub max_lines: usize,
    pub max_line_chars: usize,
    pub task_max_lines: usize,
    pub header_max_chars: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_line_chars: DEFAULT_MAX_LINE_CHARS,
            task_max_lines: TASK_MAX_LINES,
            header_max_chars: DEFAULT_HEADER_MAX_CHARS,
        }
    }
}

impl PreviewConfig {
    /// Reject caps of zero.
    pub fn validate(&self) -> Result<(), LimitsError> {
        PreviewLimits::new(self.max_lines, self.max_line_chars)?;
        if self.task_max_lines == 0 {
            return Err(LimitsError::Zero {
                field: "task_max_lines",
            });
        }
        if self.header_max_chars == 0 {
            return Err(LimitsError::Zero {
                field: "header_max_chars",
            });
        }
        Ok(())
    }

    /// Limits for a tool's output, using the `Task` line cap where it applies.
    pub fn limits_for_tool(&self, tool_name: &str) -> PreviewLimits {
        let max_lines = if is_task_tool(tool_name) {
            self.task_max_lines
        } else {
            self.max_lines
        };
        PreviewLimits {
            max_lines,
            max_line_chars: self.max_line_chars,
        }
    }

    /// Overlay the fields set in `file`.
    pub fn merge(self, file: &ConfigFile) -> Self {
        Self {
            max_lines: file.max_lines.unwrap_or(self.max_lines),
            max_line_chars: file.max_line_chars.unwrap_or(self.max_line_chars),
            task_max_lines: file.task_max_lines.unwrap_or(self.task_max_lines),
            header_max_chars: file.header_max_chars.unwrap_or(self.header_max_chars),
        }
    }
}

/// Preview configuration file (global and local); every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_line_chars: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_max_lines: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_max_chars: Option<usize>,
}
