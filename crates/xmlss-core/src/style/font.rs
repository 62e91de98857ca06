//! Font style types

use super::Color;
use crate::error::{Error, Result};
use crate::xml::XmlElement;

/// Font settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Font {
    name: Option<String>,
    family: Option<FontFamily>,
    charset: Option<u32>,
    size: Option<f64>,
    color: Option<Color>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<Underline>,
    strike_through: Option<bool>,
    shadow: Option<bool>,
    outline: Option<bool>,
    vertical_align: Option<FontVerticalAlign>,
}

impl Font {
    /// Start building a font
    pub fn builder() -> FontBuilder {
        FontBuilder::default()
    }

    /// Font family name (e.g., "Arial")
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Generic family
    pub fn family(&self) -> Option<FontFamily> {
        self.family
    }

    /// Windows character set
    pub fn charset(&self) -> Option<u32> {
        self.charset
    }

    /// Size in points
    pub fn size(&self) -> Option<f64> {
        self.size
    }

    /// Color
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Bold
    pub fn bold(&self) -> Option<bool> {
        self.bold
    }

    /// Italic
    pub fn italic(&self) -> Option<bool> {
        self.italic
    }

    /// Underline style
    pub fn underline(&self) -> Option<Underline> {
        self.underline
    }

    /// Strikethrough
    pub fn strike_through(&self) -> Option<bool> {
        self.strike_through
    }

    /// Shadow
    pub fn shadow(&self) -> Option<bool> {
        self.shadow
    }

    /// Outline
    pub fn outline(&self) -> Option<bool> {
        self.outline
    }

    /// Superscript/subscript
    pub fn vertical_align(&self) -> Option<FontVerticalAlign> {
        self.vertical_align
    }

    /// Render as a `<Font>` element
    pub fn to_element(&self) -> XmlElement<'static> {
        XmlElement::new("Font")
            .opt_attr("ss:FontName", self.name.as_deref())
            .opt_attr("x:Family", self.family.map(|f| f.as_str()))
            .opt_attr("x:CharSet", self.charset)
            .opt_attr("ss:Size", self.size)
            .opt_attr("ss:Color", self.color)
            .opt_attr("ss:Bold", self.bold)
            .opt_attr("ss:Italic", self.italic)
            .opt_attr("ss:Underline", self.underline.map(|u| u.as_str()))
            .opt_attr("ss:StrikeThrough", self.strike_through)
            .opt_attr("ss:Shadow", self.shadow)
            .opt_attr("ss:Outline", self.outline)
            .opt_attr("ss:VerticalAlign", self.vertical_align.map(|v| v.as_str()))
    }
}

/// Builder for [`Font`]
#[derive(Debug, Clone, Default)]
pub struct FontBuilder {
    inner: Font,
}

impl FontBuilder {
    /// Set font name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    /// Set generic family
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.inner.family = Some(family);
        self
    }

    /// Set Windows character set
    pub fn with_charset(mut self, charset: u32) -> Self {
        self.inner.charset = Some(charset);
        self
    }

    /// Set size in points
    pub fn with_size(mut self, size: f64) -> Self {
        self.inner.size = Some(size);
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.inner.color = Some(color);
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.inner.bold = Some(bold);
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.inner.italic = Some(italic);
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.inner.underline = Some(underline);
        self
    }

    /// Set strikethrough
    pub fn with_strike_through(mut self, strike: bool) -> Self {
        self.inner.strike_through = Some(strike);
        self
    }

    /// Set shadow
    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.inner.shadow = Some(shadow);
        self
    }

    /// Set outline
    pub fn with_outline(mut self, outline: bool) -> Self {
        self.inner.outline = Some(outline);
        self
    }

    /// Set superscript/subscript
    pub fn with_vertical_align(mut self, align: FontVerticalAlign) -> Self {
        self.inner.vertical_align = Some(align);
        self
    }

    /// Finish the font
    ///
    /// Fails if the size is not a positive finite number.
    pub fn build(self) -> Result<Font> {
        if let Some(size) = self.inner.size {
            if !size.is_finite() || size <= 0.0 {
                return Err(Error::validation(format!(
                    "font size must be greater than 0, got {}",
                    size
                )));
            }
        }
        Ok(self.inner)
    }
}

/// Generic font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Automatic,
    Decorative,
    Modern,
    Roman,
    Script,
    Swiss,
}

impl FontFamily {
    /// Get the attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Automatic => "Automatic",
            FontFamily::Decorative => "Decorative",
            FontFamily::Modern => "Modern",
            FontFamily::Roman => "Roman",
            FontFamily::Script => "Script",
            FontFamily::Swiss => "Swiss",
        }
    }
}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Underline {
    /// No underline
    None,
    /// Single underline
    Single,
    /// Double underline
    Double,
    /// Single accounting underline (extends to cell width)
    SingleAccounting,
    /// Double accounting underline
    DoubleAccounting,
}

impl Underline {
    /// Get the attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            Underline::None => "None",
            Underline::Single => "Single",
            Underline::Double => "Double",
            Underline::SingleAccounting => "SingleAccounting",
            Underline::DoubleAccounting => "DoubleAccounting",
        }
    }
}

/// Font vertical alignment (superscript/subscript)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontVerticalAlign {
    /// Normal baseline
    None,
    Subscript,
    Superscript,
}

impl FontVerticalAlign {
    /// Get the attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            FontVerticalAlign::None => "None",
            FontVerticalAlign::Subscript => "Subscript",
            FontVerticalAlign::Superscript => "Superscript",
        }
    }
}
