//! Preview size caps and the per-tool line cap lookup.

use serde::{Deserialize, Serialize};

use crate::error::LimitsError;

/// Default number of output lines shown under a tool call
pub const DEFAULT_MAX_LINES: usize = 10;

/// Default number of characters kept per output line
pub const DEFAULT_MAX_LINE_CHARS: usize = 120;

/// Line cap for `Task` tool output, which is a sub-agent transcript
pub const TASK_MAX_LINES: usize = 5;

/// Default character cap for a tool call's summary line
pub const DEFAULT_HEADER_MAX_CHARS: usize = 100;

/// Identifier of the tool that gets the stricter line cap
pub const TASK_TOOL_NAME: &str = "task";

/// Limits used for general tool output previews.
pub const DEFAULT_PREVIEW_LIMITS: PreviewLimits = PreviewLimits {
    max_lines: DEFAULT_MAX_LINES,
    max_line_chars: DEFAULT_MAX_LINE_CHARS,
};

/// Line and per-line character caps for a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewLimits {
    pub max_lines: usize,
    pub max_line_chars: usize,
}

impl PreviewLimits {
    /// Build limits, rejecting zero caps.
    pub fn new(max_lines: usize, max_line_chars: usize) -> Result<Self, LimitsError> {
        if max_lines == 0 {
            return Err(LimitsError::Zero { field: "max_lines" });
        }
        if max_line_chars == 0 {
            return Err(LimitsError::Zero {
                field: "max_line_chars",
            });
        }
        Ok(Self {
            max_lines,
            max_line_chars,
        })
    }

    /// Same limits with a different line cap.
    pub fn with_max_lines(self, max_lines: usize) -> Self {
        Self { max_lines, ..self }
    }
}

impl Default for PreviewLimits {
    fn default() -> Self {
        DEFAULT_PREVIEW_LIMITS
    }
}

/// Line cap for a tool's output preview.
///
/// `Task` (any case) gets [`TASK_MAX_LINES`]; every other tool gets
/// [`DEFAULT_MAX_LINES`].
pub fn max_lines_for_tool(tool_name: &str) -> usize {
    if is_task_tool(tool_name) {
        TASK_MAX_LINES
    } else {
        DEFAULT_MAX_LINES
    }
}

pub(crate) fn is_task_tool(tool_name: &str) -> bool {
    tool_name.eq_ignore_ascii_case(TASK_TOOL_NAME)
}
