//! Style registry for one document

use super::{NumberFormat, Style, StyleBuilder, StyleId};
use crate::error::{Error, Result};
use ahash::AHashMap;

/// Id of the built-in default style
pub const DEFAULT_STYLE_ID: &str = "Default";

/// Id of the built-in style applied to unstyled date cells
pub const DEFAULT_DATE_STYLE_ID: &str = "DefaultDate";

const GENERATED_ID_PREFIX: &str = "ce";

/// Style registry
///
/// Owns every style of a document in creation order. Styles are referenced
/// elsewhere by [`StyleId`]; ids of user styles are generated sequentially
/// (`ce1`, `ce2`, ...). The registry is frozen when the document starts,
/// after which no more styles can be created.
#[derive(Debug)]
pub struct StyleRegistry {
    /// All styles, built-ins first
    styles: Vec<Style>,
    /// Id to position in `styles`
    lookup: AHashMap<StyleId, usize>,
    next_seq: u32,
    frozen: bool,
}

impl StyleRegistry {
    /// Create a registry holding the two built-in styles
    pub fn new() -> Self {
        let mut registry = Self {
            styles: Vec::with_capacity(16),
            lookup: AHashMap::with_capacity(16),
            next_seq: 1,
            frozen: false,
        };

        registry.insert(Style {
            id: StyleId::new(DEFAULT_STYLE_ID),
            name: Some("Normal".to_string()),
            parent: None,
            alignment: None,
            borders: None,
            font: None,
            interior: None,
            number_format: None,
            protection: None,
        });
        registry.insert(Style {
            id: StyleId::new(DEFAULT_DATE_STYLE_ID),
            name: None,
            parent: None,
            alignment: None,
            borders: None,
            font: None,
            interior: None,
            number_format: Some(NumberFormat::long_date()),
            protection: None,
        });

        registry
    }

    /// Start a new style, optionally named and inheriting from `parent`
    ///
    /// Fails if the registry is frozen or `parent` is not registered here.
    pub fn create_style(
        &mut self,
        name: Option<&str>,
        parent: Option<&StyleId>,
    ) -> Result<StyleBuilder<'_>> {
        if self.frozen {
            return Err(Error::validation(
                "styles cannot be created once the document has started",
            ));
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(Error::validation(format!(
                    "unknown parent style '{}'",
                    parent
                )));
            }
        }
        Ok(StyleBuilder::new(
            self,
            name.map(str::to_string),
            parent.cloned(),
        ))
    }

    /// Get a style by id
    pub fn get(&self, id: &StyleId) -> Option<&Style> {
        self.lookup.get(id).map(|&idx| &self.styles[idx])
    }

    /// Check if a style id is registered
    pub fn contains(&self, id: &StyleId) -> bool {
        self.lookup.contains_key(id)
    }

    /// Fail with a validation error if `id` is not registered
    pub fn check(&self, id: &StyleId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::validation(format!("unknown style '{}'", id)))
        }
    }

    /// Id of the built-in default style
    pub fn default_style_id(&self) -> StyleId {
        StyleId::new(DEFAULT_STYLE_ID)
    }

    /// Id of the built-in date style
    pub fn default_date_style_id(&self) -> StyleId {
        StyleId::new(DEFAULT_DATE_STYLE_ID)
    }

    /// Reject further style creation
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Check if the registry is frozen
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Get the number of styles, built-ins included
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry holds no styles at all
    ///
    /// Never true for a registry built with [`StyleRegistry::new`], which
    /// always holds the built-ins.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Check if any style besides the built-ins was created
    pub fn has_user_styles(&self) -> bool {
        self.styles.len() > 2
    }

    /// Iterate over all styles in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    /// Render the `<Styles>` block, one style per line
    pub fn to_styles_xml(&self) -> String {
        let mut out = String::from("<Styles>\n");
        for style in &self.styles {
            style.to_element().write_to(&mut out);
            out.push('\n');
        }
        out.push_str("</Styles>");
        out
    }

    pub(super) fn next_id(&mut self) -> StyleId {
        let id = StyleId::new(format!("{}{}", GENERATED_ID_PREFIX, self.next_seq));
        self.next_seq += 1;
        id
    }

    pub(super) fn insert(&mut self, style: Style) {
        let idx = self.styles.len();
        self.lookup.insert(style.id.clone(), idx);
        self.styles.push(style);
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Alignment, Color, Font, Interior, VerticalAlignment};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_styles() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(!registry.has_user_styles());

        let default = registry.get(&registry.default_style_id()).unwrap();
        assert_eq!(default.name(), Some("Normal"));
        assert!(!default.has_components());

        let date = registry.get(&registry.default_date_style_id()).unwrap();
        assert_eq!(
            date.number_format().and_then(|f| f.format()),
            Some("Long Date")
        );
    }

    #[test]
    fn test_sequential_ids() {
        let mut registry = StyleRegistry::new();
        let a = registry.create_style(Some("Title"), None).unwrap().build();
        let b = registry.create_style(None, None).unwrap().build();
        assert_eq!(a.as_str(), "ce1");
        assert_eq!(b.as_str(), "ce2");
        assert_eq!(registry.get(&a).unwrap().name(), Some("Title"));
        assert_eq!(registry.len(), 4);
        assert!(registry.has_user_styles());
    }

    #[test]
    fn test_child_inherits_missing_components() {
        let mut registry = StyleRegistry::new();
        let alignment = Alignment::builder()
            .with_vertical(VerticalAlignment::Center)
            .build();
        let parent = registry
            .create_style(None, None)
            .unwrap()
            .with_alignment(alignment.clone())
            .with_interior(Interior::solid(Color::LIGHT_GRAY))
            .build();

        let font = Font::builder().with_size(14.0).build().unwrap();
        let child = registry
            .create_style(None, Some(&parent))
            .unwrap()
            .with_font(font.clone())
            .build();

        let child = registry.get(&child).unwrap();
        assert_eq!(child.font(), Some(&font));
        assert_eq!(child.alignment(), Some(&alignment));
        assert_eq!(child.interior(), Some(&Interior::solid(Color::LIGHT_GRAY)));
        assert!(child.borders().is_none());
    }

    #[test]
    fn test_parent_can_be_builtin() {
        let mut registry = StyleRegistry::new();
        let date = registry.default_date_style_id();
        let child = registry.create_style(None, Some(&date)).unwrap().build();
        assert_eq!(
            registry.get(&child).unwrap().number_format(),
            Some(&NumberFormat::long_date())
        );
    }

    #[test]
    fn test_unknown_parent() {
        let mut registry = StyleRegistry::new();
        let err = registry
            .create_style(None, Some(&StyleId::new("ce9")))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(registry.check(&StyleId::new("ce9")).is_err());
    }

    #[test]
    fn test_frozen_registry() {
        let mut registry = StyleRegistry::new();
        registry.freeze();
        assert!(registry.is_frozen());
        assert!(registry.create_style(None, None).is_err());
    }

    #[test]
    fn test_styles_xml() {
        let mut registry = StyleRegistry::new();
        registry
            .create_style(Some("Money"), None)
            .unwrap()
            .with_number_format(NumberFormat::new("0.00"))
            .build();
        assert_eq!(
            registry.to_styles_xml(),
            "<Styles>\n\
             <Style ss:ID=\"Default\" ss:Name=\"Normal\"/>\n\
             <Style ss:ID=\"DefaultDate\"><NumberFormat ss:Format=\"Long Date\"/></Style>\n\
             <Style ss:ID=\"ce1\" ss:Name=\"Money\"><NumberFormat ss:Format=\"0.00\"/></Style>\n\
             </Styles>"
        );
    }
}
