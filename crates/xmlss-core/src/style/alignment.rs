//! Text alignment

use crate::xml::XmlElement;

/// Text alignment settings
///
/// Every attribute is optional; an unset attribute is not written and the
/// consumer falls back to its own default (or the parent style's value).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    horizontal: Option<HorizontalAlignment>,
    vertical: Option<VerticalAlignment>,
    indent: Option<u32>,
    rotate: Option<i32>,
    shrink_to_fit: Option<bool>,
    vertical_text: Option<bool>,
    wrap_text: Option<bool>,
    reading_order: Option<ReadingOrder>,
}

impl Alignment {
    /// Start building an alignment
    pub fn builder() -> AlignmentBuilder {
        AlignmentBuilder::default()
    }

    /// Horizontal alignment
    pub fn horizontal(&self) -> Option<HorizontalAlignment> {
        self.horizontal
    }

    /// Vertical alignment
    pub fn vertical(&self) -> Option<VerticalAlignment> {
        self.vertical
    }

    /// Indent level
    pub fn indent(&self) -> Option<u32> {
        self.indent
    }

    /// Text rotation in degrees
    pub fn rotate(&self) -> Option<i32> {
        self.rotate
    }

    /// Shrink to fit
    pub fn shrink_to_fit(&self) -> Option<bool> {
        self.shrink_to_fit
    }

    /// Stacked vertical text
    pub fn vertical_text(&self) -> Option<bool> {
        self.vertical_text
    }

    /// Wrap text
    pub fn wrap_text(&self) -> Option<bool> {
        self.wrap_text
    }

    /// Reading order
    pub fn reading_order(&self) -> Option<ReadingOrder> {
        self.reading_order
    }

    /// Render as an `<Alignment>` element
    pub fn to_element(&self) -> XmlElement<'static> {
        XmlElement::new("Alignment")
            .opt_attr("ss:Horizontal", self.horizontal.map(|h| h.as_str()))
            .opt_attr("ss:Vertical", self.vertical.map(|v| v.as_str()))
            .opt_attr("ss:Indent", self.indent)
            .opt_attr("ss:Rotate", self.rotate)
            .opt_attr("ss:ShrinkToFit", self.shrink_to_fit)
            .opt_attr("ss:VerticalText", self.vertical_text)
            .opt_attr("ss:WrapText", self.wrap_text)
            .opt_attr("ss:ReadingOrder", self.reading_order.map(|r| r.as_str()))
    }
}

/// Builder for [`Alignment`]
#[derive(Debug, Clone, Default)]
pub struct AlignmentBuilder {
    inner: Alignment,
}

impl AlignmentBuilder {
    /// Set horizontal alignment
    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.inner.horizontal = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.inner.vertical = Some(align);
        self
    }

    /// Set indent level
    pub fn with_indent(mut self, indent: u32) -> Self {
        self.inner.indent = Some(indent);
        self
    }

    /// Set rotation angle
    pub fn with_rotation(mut self, degrees: i32) -> Self {
        self.inner.rotate = Some(degrees.clamp(-90, 90));
        self
    }

    /// Enable shrink to fit
    pub fn with_shrink_to_fit(mut self, shrink: bool) -> Self {
        self.inner.shrink_to_fit = Some(shrink);
        self
    }

    /// Enable stacked vertical text
    pub fn with_vertical_text(mut self, vertical: bool) -> Self {
        self.inner.vertical_text = Some(vertical);
        self
    }

    /// Enable text wrapping
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.inner.wrap_text = Some(wrap);
        self
    }

    /// Set reading order
    pub fn with_reading_order(mut self, order: ReadingOrder) -> Self {
        self.inner.reading_order = Some(order);
        self
    }

    /// Finish the alignment
    pub fn build(self) -> Alignment {
        self.inner
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// General alignment (text left, numbers right)
    Automatic,
    Left,
    Center,
    Right,
    /// Repeat content to fill cell width
    Fill,
    Justify,
    CenterAcrossSelection,
    Distributed,
    JustifyDistributed,
}

impl HorizontalAlignment {
    /// Get the attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            HorizontalAlignment::Automatic => "Automatic",
            HorizontalAlignment::Left => "Left",
            HorizontalAlignment::Center => "Center",
            HorizontalAlignment::Right => "Right",
            HorizontalAlignment::Fill => "Fill",
            HorizontalAlignment::Justify => "Justify",
            HorizontalAlignment::CenterAcrossSelection => "CenterAcrossSelection",
            HorizontalAlignment::Distributed => "Distributed",
            HorizontalAlignment::JustifyDistributed => "JustifyDistributed",
        }
    }
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Automatic,
    Top,
    Bottom,
    Center,
    Justify,
    Distributed,
    JustifyDistributed,
}

impl VerticalAlignment {
    /// Get the attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            VerticalAlignment::Automatic => "Automatic",
            VerticalAlignment::Top => "Top",
            VerticalAlignment::Bottom => "Bottom",
            VerticalAlignment::Center => "Center",
            VerticalAlignment::Justify => "Justify",
            VerticalAlignment::Distributed => "Distributed",
            VerticalAlignment::JustifyDistributed => "JustifyDistributed",
        }
    }
}

/// Reading order for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingOrder {
    /// Context dependent
    Context,
    LeftToRight,
    RightToLeft,
}

impl ReadingOrder {
    /// Get the attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            ReadingOrder::Context => "Context",
            ReadingOrder::LeftToRight => "LeftToRight",
            ReadingOrder::RightToLeft => "RightToLeft",
        }
    }
}
