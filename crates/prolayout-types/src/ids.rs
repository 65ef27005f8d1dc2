//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_LAYOUT_DIRECTORIES: &str = "layout.directories";
pub const CHECK_LAYOUT_FILES: &str = "layout.files";

// Codes: layout.directories
pub const CODE_DIRECTORY_NOT_ALLOWED: &str = "directory_not_allowed";

// Codes: layout.files
pub const CODE_FILE_NOT_ALLOWED: &str = "file_not_allowed";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
pub const CODE_INVALID_PATTERN: &str = "invalid_pattern";
