//! Number format types

use crate::xml::XmlElement;

/// Number format for cell display
///
/// Holds either one of the named formats understood by consumers
/// (`"Long Date"`, `"Percent"`, ...) or a custom format string such as
/// `"0.00"`. A format built with [`NumberFormat::default`] writes no
/// `ss:Format` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NumberFormat {
    format: Option<String>,
}

impl NumberFormat {
    pub const GENERAL: &'static str = "General";
    pub const GENERAL_NUMBER: &'static str = "General Number";
    pub const GENERAL_DATE: &'static str = "General Date";
    pub const LONG_DATE: &'static str = "Long Date";
    pub const MEDIUM_DATE: &'static str = "Medium Date";
    pub const SHORT_DATE: &'static str = "Short Date";
    pub const LONG_TIME: &'static str = "Long Time";
    pub const MEDIUM_TIME: &'static str = "Medium Time";
    pub const SHORT_TIME: &'static str = "Short Time";
    pub const CURRENCY: &'static str = "Currency";
    pub const EURO_CURRENCY: &'static str = "Euro Currency";
    pub const FIXED: &'static str = "Fixed";
    pub const STANDARD: &'static str = "Standard";
    pub const PERCENT: &'static str = "Percent";
    pub const SCIENTIFIC: &'static str = "Scientific";
    pub const YES_NO: &'static str = "Yes/No";
    pub const TRUE_FALSE: &'static str = "True/False";
    pub const ON_OFF: &'static str = "On/Off";

    /// Create a number format from a format string
    pub fn new<S: Into<String>>(format: S) -> Self {
        Self {
            format: Some(format.into()),
        }
    }

    /// General format
    pub fn general() -> Self {
        Self::new(Self::GENERAL)
    }

    /// Long date, used for date cells written without a style
    pub fn long_date() -> Self {
        Self::new(Self::LONG_DATE)
    }

    /// Short date
    pub fn short_date() -> Self {
        Self::new(Self::SHORT_DATE)
    }

    /// Date and time
    pub fn general_date() -> Self {
        Self::new(Self::GENERAL_DATE)
    }

    /// Two decimals, no separator
    pub fn fixed() -> Self {
        Self::new(Self::FIXED)
    }

    /// Two decimals with thousands separator
    pub fn standard() -> Self {
        Self::new(Self::STANDARD)
    }

    /// Percentage
    pub fn percent() -> Self {
        Self::new(Self::PERCENT)
    }

    /// Scientific notation
    pub fn scientific() -> Self {
        Self::new(Self::SCIENTIFIC)
    }

    /// Get the format string
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Render as a `<NumberFormat>` element
    pub fn to_element(&self) -> XmlElement<'static> {
        XmlElement::new("NumberFormat").opt_attr("ss:Format", self.format.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(
            NumberFormat::long_date().to_element().render(),
            r#"<NumberFormat ss:Format="Long Date"/>"#
        );
        assert_eq!(
            NumberFormat::new("#,##0.00\"$\"").to_element().render(),
            r##"<NumberFormat ss:Format="#,##0.00&quot;$&quot;"/>"##
        );
        assert_eq!(
            NumberFormat::default().to_element().render(),
            "<NumberFormat/>"
        );
    }
}
