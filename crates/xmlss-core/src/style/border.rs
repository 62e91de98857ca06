//! Border style types

use super::Color;
use crate::error::{Error, Result};
use crate::xml::XmlElement;

/// The set of borders of a style, at most one per position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Borders {
    borders: Vec<Border>,
}

impl Borders {
    /// Start building a border set
    pub fn builder() -> BordersBuilder {
        BordersBuilder::default()
    }

    /// Get the border at a position
    pub fn get(&self, position: BorderPosition) -> Option<&Border> {
        self.borders.iter().find(|b| b.position == position)
    }

    /// Iterate over borders in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Border> {
        self.borders.iter()
    }

    /// Number of borders
    pub fn len(&self) -> usize {
        self.borders.len()
    }

    /// Check if no border is set
    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }

    /// Render as a `<Borders>` element with one `<Border>` child per position
    pub fn to_element(&self) -> XmlElement<'static> {
        if self.borders.is_empty() {
            return XmlElement::new("Borders");
        }
        let mut children = String::new();
        for border in &self.borders {
            border.to_element().write_to(&mut children);
        }
        XmlElement::new("Borders").raw(children)
    }
}

/// Builder for [`Borders`]
#[derive(Debug, Clone, Default)]
pub struct BordersBuilder {
    borders: Vec<Border>,
}

impl BordersBuilder {
    /// Add a border
    pub fn with_border(mut self, border: Border) -> Self {
        self.borders.push(border);
        self
    }

    /// Finish the border set
    ///
    /// Fails if two borders share a position.
    pub fn build(self) -> Result<Borders> {
        for (i, border) in self.borders.iter().enumerate() {
            if self.borders[..i].iter().any(|b| b.position == border.position) {
                return Err(Error::validation(format!(
                    "duplicate border at position {}",
                    border.position.as_str()
                )));
            }
        }
        Ok(Borders {
            borders: self.borders,
        })
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Border {
    position: BorderPosition,
    color: Option<Color>,
    line_style: Option<BorderLineStyle>,
    weight: Option<u8>,
}

impl Border {
    /// Start building a border at a position
    pub fn builder(position: BorderPosition) -> BorderBuilder {
        BorderBuilder {
            position,
            color: None,
            line_style: None,
            weight: None,
        }
    }

    /// Create a thin continuous black border
    pub fn thin(position: BorderPosition) -> Self {
        Self {
            position,
            color: Some(Color::BLACK),
            line_style: Some(BorderLineStyle::Continuous),
            weight: Some(1),
        }
    }

    /// Position of this border
    pub fn position(&self) -> BorderPosition {
        self.position
    }

    /// Line color
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Line style
    pub fn line_style(&self) -> Option<BorderLineStyle> {
        self.line_style
    }

    /// Line weight (0 = hairline, 3 = thick)
    pub fn weight(&self) -> Option<u8> {
        self.weight
    }

    /// Render as a `<Border>` element
    pub fn to_element(&self) -> XmlElement<'static> {
        XmlElement::new("Border")
            .attr("ss:Position", self.position.as_str())
            .opt_attr("ss:Color", self.color)
            .opt_attr("ss:LineStyle", self.line_style.map(|l| l.as_str()))
            .opt_attr("ss:Weight", self.weight)
    }
}

/// Builder for [`Border`]
#[derive(Debug, Clone)]
pub struct BorderBuilder {
    position: BorderPosition,
    color: Option<Color>,
    line_style: Option<BorderLineStyle>,
    weight: Option<u8>,
}

impl BorderBuilder {
    /// Set line color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set line style
    pub fn with_line_style(mut self, style: BorderLineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    /// Set line weight (0-3)
    pub fn with_weight(mut self, weight: u8) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Finish the border
    ///
    /// A border with a color or weight but no line style is drawn
    /// `Continuous`; otherwise consumers would not draw it at all.
    pub fn build(self) -> Result<Border> {
        if let Some(weight) = self.weight {
            if weight > 3 {
                return Err(Error::validation(format!(
                    "border weight must be between 0 and 3, got {}",
                    weight
                )));
            }
        }
        let line_style = match self.line_style {
            None if self.color.is_some() || self.weight.is_some() => {
                Some(BorderLineStyle::Continuous)
            }
            other => other,
        };
        Ok(Border {
            position: self.position,
            color: self.color,
            line_style,
            weight: self.weight,
        })
    }
}

/// The six border positions of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderPosition {
    Left,
    Top,
    Right,
    Bottom,
    /// Diagonal from top-left to bottom-right
    DiagonalLeft,
    /// Diagonal from bottom-left to top-right
    DiagonalRight,
}

impl BorderPosition {
    /// All positions
    pub const ALL: [BorderPosition; 6] = [
        BorderPosition::Left,
        BorderPosition::Top,
        BorderPosition::Right,
        BorderPosition::Bottom,
        BorderPosition::DiagonalLeft,
        BorderPosition::DiagonalRight,
    ];

    /// Get the attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            BorderPosition::Left => "Left",
            BorderPosition::Top => "Top",
            BorderPosition::Right => "Right",
            BorderPosition::Bottom => "Bottom",
            BorderPosition::DiagonalLeft => "DiagonalLeft",
            BorderPosition::DiagonalRight => "DiagonalRight",
        }
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderLineStyle {
    /// No border
    None,
    Continuous,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    SlantDashDot,
    Double,
}

impl BorderLineStyle {
    /// Get the attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            BorderLineStyle::None => "None",
            BorderLineStyle::Continuous => "Continuous",
            BorderLineStyle::Dash => "Dash",
            BorderLineStyle::Dot => "Dot",
            BorderLineStyle::DashDot => "DashDot",
            BorderLineStyle::DashDotDot => "DashDotDot",
            BorderLineStyle::SlantDashDot => "SlantDashDot",
            BorderLineStyle::Double => "Double",
        }
    }
}
