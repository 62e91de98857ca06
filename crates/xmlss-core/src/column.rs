//! Column definitions

use crate::style::StyleId;

/// Formatting for one `<Column>` element
///
/// `span` is the user-facing total count of adjacent columns sharing this
/// formatting (`span = 2` means this column and one more). The generator
/// converts it to the format's "additional columns" count on output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnOptions {
    /// Explicit 1-based position (None = next column)
    pub index: Option<u32>,
    /// Total number of columns covered, including this one
    pub span: Option<u32>,
    /// Column-level style
    pub style: Option<StyleId>,
    /// Width in points (None = default)
    pub width: Option<f64>,
    /// Let the consumer size the column to its content
    pub auto_fit_width: Option<bool>,
    /// Column is hidden
    pub hidden: Option<bool>,
}

impl ColumnOptions {
    /// Create a column with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a column at an explicit 1-based position
    pub fn at(index: u32) -> Self {
        Self {
            index: Some(index),
            ..Self::default()
        }
    }

    /// Set the total number of columns covered
    pub fn with_span(mut self, span: u32) -> Self {
        self.span = Some(span);
        self
    }

    /// Set style
    pub fn with_style(mut self, style: &StyleId) -> Self {
        self.style = Some(style.clone());
        self
    }

    /// Set width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set auto-fit
    pub fn with_auto_fit_width(mut self, auto_fit: bool) -> Self {
        self.auto_fit_width = Some(auto_fit);
        self
    }

    /// Set hidden
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Number of additional columns covered beyond this one
    pub fn extra_span(&self) -> Option<u32> {
        self.span.filter(|s| *s > 1).map(|s| s - 1)
    }
}
