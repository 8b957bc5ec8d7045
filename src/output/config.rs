//! Output configuration types

const DEFAULT_INDENT_SIZE: usize = 2;
const DEFAULT_BULLET: &str = "- ";

/// Options for the indented text rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level.
    pub indent_size: usize,
    /// Printed before every path; include the trailing space yourself.
    pub bullet: String,
    /// Append the human-readable size to file and directory lines.
    pub show_size: bool,
}

impl RenderOptions {
    /// Default options with an explicitly empty bullet.
    pub fn without_bullet() -> Self {
        Self {
            bullet: String::new(),
            ..Default::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
            bullet: DEFAULT_BULLET.to_string(),
            show_size: false,
        }
    }
}
