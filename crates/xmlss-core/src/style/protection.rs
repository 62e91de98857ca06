//! Cell protection

use crate::xml::XmlElement;

/// Cell protection settings
///
/// Only effective once the worksheet itself is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Protection {
    protected: Option<bool>,
    hide_formula: Option<bool>,
}

impl Protection {
    /// Start building protection settings
    pub fn builder() -> ProtectionBuilder {
        ProtectionBuilder::default()
    }

    /// Create unlocked protection
    pub fn unlocked() -> Self {
        Self {
            protected: Some(false),
            hide_formula: None,
        }
    }

    /// Cell is locked
    pub fn protected(&self) -> Option<bool> {
        self.protected
    }

    /// Formula is hidden
    pub fn hide_formula(&self) -> Option<bool> {
        self.hide_formula
    }

    /// Render as a `<Protection>` element
    pub fn to_element(&self) -> XmlElement<'static> {
        XmlElement::new("Protection")
            .opt_attr("ss:Protected", self.protected)
            .opt_attr("x:HideFormula", self.hide_formula)
    }
}

/// Builder for [`Protection`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtectionBuilder {
    inner: Protection,
}

impl ProtectionBuilder {
    /// Set locked
    pub fn with_protected(mut self, protected: bool) -> Self {
        self.inner.protected = Some(protected);
        self
    }

    /// Set hidden formula
    pub fn with_hide_formula(mut self, hide: bool) -> Self {
        self.inner.hide_formula = Some(hide);
        self
    }

    /// Finish the protection settings
    pub fn build(self) -> Protection {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(
            Protection::unlocked().to_element().render(),
            r#"<Protection ss:Protected="0"/>"#
        );
        let p = Protection::builder()
            .with_protected(true)
            .with_hide_formula(true)
            .build();
        assert_eq!(
            p.to_element().render(),
            r#"<Protection ss:Protected="1" x:HideFormula="1"/>"#
        );
    }
}
