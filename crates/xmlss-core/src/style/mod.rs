//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`Style`] - Complete, immutable cell style
//! - [`StyleBuilder`] - Builds a style and resolves inheritance from a parent
//! - [`StyleRegistry`] - Per-document style arena, referenced by [`StyleId`]
//! - [`Font`], [`Interior`], [`Borders`], [`Alignment`], [`NumberFormat`],
//!   [`Protection`] - The six components a style can carry
//! - [`Color`] - Color representation

mod alignment;
mod border;
mod color;
mod font;
mod interior;
mod number_format;
mod protection;
mod registry;

use std::fmt;

pub use alignment::{
    Alignment, AlignmentBuilder, HorizontalAlignment, ReadingOrder, VerticalAlignment,
};
pub use border::{Border, BorderBuilder, BorderLineStyle, BorderPosition, Borders, BordersBuilder};
pub use color::Color;
pub use font::{Font, FontBuilder, FontFamily, FontVerticalAlign, Underline};
pub use interior::{Interior, InteriorBuilder, Pattern};
pub use number_format::NumberFormat;
pub use protection::{Protection, ProtectionBuilder};
pub use registry::{StyleRegistry, DEFAULT_DATE_STYLE_ID, DEFAULT_STYLE_ID};

use crate::xml::{AttrValue, XmlElement};

/// Identifier of a style within one document
///
/// Rows, columns and cells reference styles by id, never by pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(String);

impl StyleId {
    /// Wrap an id string
    pub fn new<S: Into<String>>(id: S) -> Self {
        StyleId(id.into())
    }

    /// Get the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&StyleId> for AttrValue {
    fn from(id: &StyleId) -> Self {
        AttrValue::Text(id.0.clone())
    }
}

impl From<StyleId> for AttrValue {
    fn from(id: StyleId) -> Self {
        AttrValue::Text(id.0)
    }
}

/// Complete cell style
///
/// Components that are `None` are not written; consumers inherit them from
/// the parent or fall back to their own defaults. Components inherited from
/// a parent were copied when the style was built, so a style never changes
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    id: StyleId,
    name: Option<String>,
    parent: Option<StyleId>,
    alignment: Option<Alignment>,
    borders: Option<Borders>,
    font: Option<Font>,
    interior: Option<Interior>,
    number_format: Option<NumberFormat>,
    protection: Option<Protection>,
}

impl Style {
    /// Style id
    pub fn id(&self) -> &StyleId {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Parent style id
    pub fn parent(&self) -> Option<&StyleId> {
        self.parent.as_ref()
    }

    /// Alignment
    pub fn alignment(&self) -> Option<&Alignment> {
        self.alignment.as_ref()
    }

    /// Borders
    pub fn borders(&self) -> Option<&Borders> {
        self.borders.as_ref()
    }

    /// Font
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// Interior
    pub fn interior(&self) -> Option<&Interior> {
        self.interior.as_ref()
    }

    /// Number format
    pub fn number_format(&self) -> Option<&NumberFormat> {
        self.number_format.as_ref()
    }

    /// Protection
    pub fn protection(&self) -> Option<&Protection> {
        self.protection.as_ref()
    }

    /// Check if any component is set
    pub fn has_components(&self) -> bool {
        self.alignment.is_some()
            || self.borders.is_some()
            || self.font.is_some()
            || self.interior.is_some()
            || self.number_format.is_some()
            || self.protection.is_some()
    }

    /// Render as a `<Style>` element with its components as children
    pub fn to_element(&self) -> XmlElement<'static> {
        let element = XmlElement::new("Style")
            .attr("ss:ID", &self.id)
            .opt_attr("ss:Name", self.name.as_deref())
            .opt_attr("ss:Parent", self.parent.as_ref());

        let mut children = String::new();
        if let Some(alignment) = &self.alignment {
            alignment.to_element().write_to(&mut children);
        }
        if let Some(borders) = &self.borders {
            borders.to_element().write_to(&mut children);
        }
        if let Some(font) = &self.font {
            font.to_element().write_to(&mut children);
        }
        if let Some(interior) = &self.interior {
            interior.to_element().write_to(&mut children);
        }
        if let Some(number_format) = &self.number_format {
            number_format.to_element().write_to(&mut children);
        }
        if let Some(protection) = &self.protection {
            protection.to_element().write_to(&mut children);
        }

        if children.is_empty() {
            element
        } else {
            element.raw(children)
        }
    }
}

/// Builder returned by [`StyleRegistry::create_style`]
///
/// Each component set here overrides the parent's; components left unset
/// are copied from the parent when [`build`](StyleBuilder::build) runs.
#[derive(Debug)]
pub struct StyleBuilder<'a> {
    registry: &'a mut StyleRegistry,
    name: Option<String>,
    parent: Option<StyleId>,
    alignment: Option<Alignment>,
    borders: Option<Borders>,
    font: Option<Font>,
    interior: Option<Interior>,
    number_format: Option<NumberFormat>,
    protection: Option<Protection>,
}

impl<'a> StyleBuilder<'a> {
    pub(crate) fn new(
        registry: &'a mut StyleRegistry,
        name: Option<String>,
        parent: Option<StyleId>,
    ) -> Self {
        Self {
            registry,
            name,
            parent,
            alignment: None,
            borders: None,
            font: None,
            interior: None,
            number_format: None,
            protection: None,
        }
    }

    /// Set alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set borders
    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = Some(borders);
        self
    }

    /// Set font
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Set interior
    pub fn with_interior(mut self, interior: Interior) -> Self {
        self.interior = Some(interior);
        self
    }

    /// Set number format
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = Some(number_format);
        self
    }

    /// Set protection
    pub fn with_protection(mut self, protection: Protection) -> Self {
        self.protection = Some(protection);
        self
    }

    /// Resolve inheritance, register the style and return its id
    pub fn build(self) -> StyleId {
        let StyleBuilder {
            registry,
            name,
            parent,
            alignment,
            borders,
            font,
            interior,
            number_format,
            protection,
        } = self;

        // The parent is already resolved, so copying its components is
        // enough to inherit transitively.
        let resolved = parent.as_ref().and_then(|id| registry.get(id));
        let alignment = alignment.or_else(|| resolved.and_then(|p| p.alignment.clone()));
        let borders = borders.or_else(|| resolved.and_then(|p| p.borders.clone()));
        let font = font.or_else(|| resolved.and_then(|p| p.font.clone()));
        let interior = interior.or_else(|| resolved.and_then(|p| p.interior.clone()));
        let number_format =
            number_format.or_else(|| resolved.and_then(|p| p.number_format.clone()));
        let protection = protection.or_else(|| resolved.and_then(|p| p.protection));

        let id = registry.next_id();
        registry.insert(Style {
            id: id.clone(),
            name,
            parent,
            alignment,
            borders,
            font,
            interior,
            number_format,
            protection,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_component_overrides_parent() {
        let mut registry = StyleRegistry::new();
        let parent = registry
            .create_style(Some("Base"), None)
            .unwrap()
            .with_alignment(
                Alignment::builder()
                    .with_horizontal(HorizontalAlignment::Right)
                    .build(),
            )
            .with_font(Font::builder().with_name("Arial").build().unwrap())
            .build();

        let own_font = Font::builder().with_bold(true).build().unwrap();
        let child = registry
            .create_style(None, Some(&parent))
            .unwrap()
            .with_font(own_font.clone())
            .build();

        let child = registry.get(&child).unwrap();
        assert_eq!(child.font(), Some(&own_font));
        assert_eq!(
            child.alignment().and_then(|a| a.horizontal()),
            Some(HorizontalAlignment::Right)
        );
        assert_eq!(child.parent(), Some(&parent));
        assert!(child.interior().is_none());
    }

    #[test]
    fn test_inheritance_is_transitive() {
        let mut registry = StyleRegistry::new();
        let grandparent = registry
            .create_style(None, None)
            .unwrap()
            .with_interior(Interior::solid(Color::YELLOW))
            .build();
        let parent = registry
            .create_style(None, Some(&grandparent))
            .unwrap()
            .with_number_format(NumberFormat::percent())
            .build();
        let child = registry.create_style(None, Some(&parent)).unwrap().build();

        let child = registry.get(&child).unwrap();
        assert_eq!(child.interior(), Some(&Interior::solid(Color::YELLOW)));
        assert_eq!(child.number_format(), Some(&NumberFormat::percent()));
        assert_eq!(child.parent().map(|p| p.as_str()), Some("ce2"));
    }

    #[test]
    fn test_render_style() {
        let mut registry = StyleRegistry::new();
        let id = registry
            .create_style(Some("Header"), None)
            .unwrap()
            .with_font(Font::builder().with_bold(true).build().unwrap())
            .with_number_format(NumberFormat::new("0.00"))
            .build();
        assert_eq!(
            registry.get(&id).unwrap().to_element().render(),
            r#"<Style ss:ID="ce1" ss:Name="Header"><Font ss:Bold="1"/><NumberFormat ss:Format="0.00"/></Style>"#
        );
    }

    #[test]
    fn test_render_empty_style() {
        let mut registry = StyleRegistry::new();
        let base = registry.create_style(None, None).unwrap().build();
        let child = registry.create_style(None, Some(&base)).unwrap().build();
        assert_eq!(
            registry.get(&child).unwrap().to_element().render(),
            r#"<Style ss:ID="ce2" ss:Parent="ce1"/>"#
        );
    }
}
