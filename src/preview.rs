//! Size-bounded previews of tool output.
//!
//! `truncate` holds the pure truncation rules, `limits` the caps they are
//! driven by, and `render` puts both together for a single tool call.

pub mod limits;
pub mod render;
pub mod truncate;

pub use limits::{
    max_lines_for_tool, PreviewLimits, DEFAULT_HEADER_MAX_CHARS, DEFAULT_MAX_LINES,
    DEFAULT_MAX_LINE_CHARS, DEFAULT_PREVIEW_LIMITS, TASK_MAX_LINES,
};
pub use render::{RenderedPreview, ToolPreview, NO_OUTPUT_PLACEHOLDER};
pub use truncate::{
    is_lines_marker, truncate_header, truncate_lines, truncate_text, TruncationResult,
};
