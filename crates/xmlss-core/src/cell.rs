//! Cell values and per-cell options

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::format::{format_bool, format_date, format_double};
use crate::style::StyleId;

/// A value written into a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text
    String(String),
    /// Number (five decimals at most on output)
    Number(f64),
    /// Naive timestamp
    DateTime(NaiveDateTime),
    /// Boolean
    Boolean(bool),
    /// Error literal such as `#N/A`
    Error(String),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Create a new error value
    pub fn error<S: Into<String>>(s: S) -> Self {
        CellValue::Error(s.into())
    }

    /// Get the declared data type for this value
    pub fn data_type(&self) -> DataType {
        match self {
            CellValue::String(_) => DataType::String,
            CellValue::Number(_) => DataType::Number,
            CellValue::DateTime(_) => DataType::DateTime,
            CellValue::Boolean(_) => DataType::Boolean,
            CellValue::Error(_) => DataType::Error,
        }
    }

    /// Render the value as cell text
    pub fn to_data_text(&self) -> String {
        match self {
            CellValue::String(s) | CellValue::Error(s) => s.clone(),
            CellValue::Number(n) => format_double(*n),
            CellValue::DateTime(d) => format_date(d),
            CellValue::Boolean(b) => format_bool(*b).to_string(),
        }
    }

    /// Check if the value is a date
    pub fn is_date(&self) -> bool {
        matches!(self, CellValue::DateTime(_))
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(d: NaiveDateTime) -> Self {
        CellValue::DateTime(d)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::DateTime(d.and_time(chrono::NaiveTime::MIN))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_data_text())
    }
}

/// Data types a cell's `<Data>` element can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Number,
    DateTime,
    Boolean,
    String,
    Error,
}

impl DataType {
    /// Get the `ss:Type` attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Number => "Number",
            DataType::DateTime => "DateTime",
            DataType::Boolean => "Boolean",
            DataType::String => "String",
            DataType::Error => "Error",
        }
    }
}

/// Options for a single cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellOptions {
    /// Style applied to the cell
    pub style: Option<StyleId>,
    /// Number of additional columns merged to the right
    pub merge_across: Option<u32>,
    /// Number of additional rows merged below
    pub merge_down: Option<u32>,
    /// Hyperlink target
    pub href: Option<String>,
}

impl CellOptions {
    /// Create options with no attributes set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style
    pub fn with_style(mut self, style: &StyleId) -> Self {
        self.style = Some(style.clone());
        self
    }

    /// Merge this cell with `count` additional columns
    pub fn with_merge_across(mut self, count: u32) -> Self {
        self.merge_across = Some(count);
        self
    }

    /// Merge this cell with `count` additional rows
    pub fn with_merge_down(mut self, count: u32) -> Self {
        self.merge_down = Some(count);
        self
    }

    /// Set a hyperlink target
    pub fn with_href<S: Into<String>>(mut self, href: S) -> Self {
        self.href = Some(href.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_types() {
        assert_eq!(CellValue::from("x").data_type(), DataType::String);
        assert_eq!(CellValue::from(1.5).data_type(), DataType::Number);
        assert_eq!(CellValue::from(7).data_type(), DataType::Number);
        assert_eq!(CellValue::from(true).data_type(), DataType::Boolean);
        assert_eq!(CellValue::error("#N/A").data_type(), DataType::Error);
        let day = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        assert_eq!(CellValue::from(day).data_type(), DataType::DateTime);
        assert_eq!(DataType::DateTime.as_str(), "DateTime");
    }

    #[test]
    fn test_data_text() {
        assert_eq!(CellValue::from(3.0).to_data_text(), "3");
        assert_eq!(CellValue::from(false).to_data_text(), "0");
        let day = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        assert_eq!(
            CellValue::from(day).to_data_text(),
            "2021-06-01T00:00:00.000"
        );
    }

    #[test]
    fn test_cell_options_builder() {
        let style = StyleId::new("ce4");
        let opts = CellOptions::new()
            .with_style(&style)
            .with_merge_across(2)
            .with_href("https://example.com");
        assert_eq!(opts.style, Some(style));
        assert_eq!(opts.merge_across, Some(2));
        assert_eq!(opts.merge_down, None);
    }
}
