//! Row definitions

use crate::style::StyleId;

/// Formatting for one `<Row>` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowOptions {
    /// Caption shown by consumers that support it
    pub caption: Option<String>,
    /// Let the consumer size the row to its content
    pub auto_fit_height: Option<bool>,
    /// Height in points (None = default)
    pub height: Option<f64>,
    /// Row is hidden
    pub hidden: Option<bool>,
    /// Row-level style
    pub style: Option<StyleId>,
}

impl RowOptions {
    /// Create a row with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set caption
    pub fn with_caption<S: Into<String>>(mut self, caption: S) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set auto-fit
    pub fn with_auto_fit_height(mut self, auto_fit: bool) -> Self {
        self.auto_fit_height = Some(auto_fit);
        self
    }

    /// Set height
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set hidden
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Set style
    pub fn with_style(mut self, style: &StyleId) -> Self {
        self.style = Some(style.clone());
        self
    }

    /// Check if this row has any custom settings
    pub fn has_custom_settings(&self) -> bool {
        self.caption.is_some()
            || self.auto_fit_height.is_some()
            || self.height.is_some()
            || self.hidden.is_some()
            || self.style.is_some()
    }
}
