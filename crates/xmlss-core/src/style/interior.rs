//! Interior (cell background) style types

use super::Color;
use crate::xml::XmlElement;

/// Cell background fill
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Interior {
    color: Option<Color>,
    pattern: Option<Pattern>,
    pattern_color: Option<Color>,
}

impl Interior {
    /// Start building an interior
    pub fn builder() -> InteriorBuilder {
        InteriorBuilder::default()
    }

    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        Self {
            color: Some(color),
            pattern: Some(Pattern::Solid),
            pattern_color: None,
        }
    }

    /// Fill color
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Fill pattern
    pub fn pattern(&self) -> Option<Pattern> {
        self.pattern
    }

    /// Pattern color
    pub fn pattern_color(&self) -> Option<Color> {
        self.pattern_color
    }

    /// Render as an `<Interior>` element
    pub fn to_element(&self) -> XmlElement<'static> {
        XmlElement::new("Interior")
            .opt_attr("ss:Color", self.color)
            .opt_attr("ss:Pattern", self.pattern.map(|p| p.as_str()))
            .opt_attr("ss:PatternColor", self.pattern_color)
    }
}

/// Builder for [`Interior`]
#[derive(Debug, Clone, Default)]
pub struct InteriorBuilder {
    inner: Interior,
}

impl InteriorBuilder {
    /// Set fill color
    pub fn with_color(mut self, color: Color) -> Self {
        self.inner.color = Some(color);
        self
    }

    /// Set fill pattern
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.inner.pattern = Some(pattern);
        self
    }

    /// Set pattern color
    pub fn with_pattern_color(mut self, color: Color) -> Self {
        self.inner.pattern_color = Some(color);
        self
    }

    /// Finish the interior
    pub fn build(self) -> Interior {
        self.inner
    }
}

/// Fill patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    None,
    /// 100% fill color
    Solid,
    Gray75,
    Gray50,
    Gray25,
    Gray125,
    Gray0625,
    HorzStripe,
    VertStripe,
    ReverseDiagStripe,
    DiagStripe,
    DiagCross,
    ThickDiagCross,
    ThinHorzStripe,
    ThinVertStripe,
    ThinReverseDiagStripe,
    ThinDiagStripe,
    ThinHorzCross,
    ThinDiagCross,
}

impl Pattern {
    /// Get the attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            Pattern::None => "None",
            Pattern::Solid => "Solid",
            Pattern::Gray75 => "Gray75",
            Pattern::Gray50 => "Gray50",
            Pattern::Gray25 => "Gray25",
            Pattern::Gray125 => "Gray125",
            Pattern::Gray0625 => "Gray0625",
            Pattern::HorzStripe => "HorzStripe",
            Pattern::VertStripe => "VertStripe",
            Pattern::ReverseDiagStripe => "ReverseDiagStripe",
            Pattern::DiagStripe => "DiagStripe",
            Pattern::DiagCross => "DiagCross",
            Pattern::ThickDiagCross => "ThickDiagCross",
            Pattern::ThinHorzStripe => "ThinHorzStripe",
            Pattern::ThinVertStripe => "ThinVertStripe",
            Pattern::ThinReverseDiagStripe => "ThinReverseDiagStripe",
            Pattern::ThinDiagStripe => "ThinDiagStripe",
            Pattern::ThinHorzCross => "ThinHorzCross",
            Pattern::ThinDiagCross => "ThinDiagCross",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid() {
        assert_eq!(
            Interior::solid(Color::YELLOW).to_element().render(),
            r##"<Interior ss:Color="#FFFF00" ss:Pattern="Solid"/>"##
        );
    }

    #[test]
    fn test_pattern_fill() {
        let interior = Interior::builder()
            .with_pattern(Pattern::Gray25)
            .with_pattern_color(Color::GRAY)
            .build();
        assert_eq!(interior.color(), None);
        assert_eq!(
            interior.to_element().render(),
            r##"<Interior ss:Pattern="Gray25" ss:PatternColor="#808080"/>"##
        );
    }
}
