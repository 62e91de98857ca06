//! Generator options

use chrono::NaiveDateTime;
use encoding_rs::Encoding;
use xmlss_core::{Error, Result, XmlElement};

/// Options for generating a document
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Output codepage (default: windows-1252); must be single-byte
    pub encoding: &'static Encoding,
    /// Capacity of the output buffer in bytes (default: 8 KiB)
    pub buffer_capacity: usize,
    /// Document metadata written after the workbook header
    pub properties: Option<DocumentProperties>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::WINDOWS_1252,
            buffer_capacity: 8 * 1024,
            properties: None,
        }
    }
}

impl GeneratorOptions {
    /// Set the output codepage
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the output buffer capacity
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Set document metadata
    pub fn with_properties(mut self, properties: DocumentProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Check that the options can produce a valid document
    pub fn validate(&self) -> Result<()> {
        if !self.encoding.is_single_byte() {
            return Err(Error::validation(format!(
                "encoding '{}' is not a single-byte codepage",
                self.encoding.name()
            )));
        }
        Ok(())
    }
}

/// Workbook metadata (`<DocumentProperties>`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProperties {
    /// Document title (`<Title>`)
    pub title: Option<String>,
    /// Subject line (`<Subject>`)
    pub subject: Option<String>,
    /// Author name (`<Author>`)
    pub author: Option<String>,
    /// Company name (`<Company>`)
    pub company: Option<String>,
    /// Creation timestamp, written with a `Z` suffix
    pub created: Option<NaiveDateTime>,
}

impl DocumentProperties {
    /// Create empty properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subject
    pub fn with_subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the author
    pub fn with_author<S: Into<String>>(mut self, author: S) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the company
    pub fn with_company<S: Into<String>>(mut self, company: S) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the creation timestamp
    pub fn with_created(mut self, created: NaiveDateTime) -> Self {
        self.created = Some(created);
        self
    }

    /// Text properties that are set, with their element names
    pub fn texts(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Title", &self.title),
            ("Subject", &self.subject),
            ("Author", &self.author),
            ("Company", &self.company),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
    }

    /// Render the `<DocumentProperties>` block
    ///
    /// Each property is one child element; unset properties are skipped.
    pub fn to_xml(&self) -> String {
        let mut children = String::new();
        for (name, value) in self.texts() {
            XmlElement::new(name).cdata(value).write_to(&mut children);
        }
        if let Some(created) = &self.created {
            // Consumers expect a UTC marker on this one
            let stamp = format!("{}Z", created.format("%Y-%m-%dT%H:%M:%S"));
            XmlElement::new("Created").raw(stamp).write_to(&mut children);
        }

        let element = XmlElement::new("DocumentProperties")
            .attr("xmlns", "urn:schemas-microsoft-com:office:office");
        if children.is_empty() {
            element.render()
        } else {
            element.raw(children).render()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.encoding.name(), "windows-1252");
        assert_eq!(options.buffer_capacity, 8192);
        assert!(options.properties.is_none());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_multi_byte_encoding_rejected() {
        let options = GeneratorOptions::default().with_encoding(encoding_rs::UTF_8);
        assert!(options.validate().unwrap_err().is_validation());
        let options = GeneratorOptions::default().with_encoding(encoding_rs::SHIFT_JIS);
        assert!(options.validate().is_err());
        let options = GeneratorOptions::default().with_encoding(encoding_rs::WINDOWS_1251);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_properties_xml() {
        let created = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let props = DocumentProperties::new()
            .with_title("Q1 <draft>")
            .with_author("Finance")
            .with_created(created);
        assert_eq!(
            props.to_xml(),
            "<DocumentProperties xmlns=\"urn:schemas-microsoft-com:office:office\">\
             <Title><![CDATA[Q1 <draft>]]></Title>\
             <Author><![CDATA[Finance]]></Author>\
             <Created>2024-03-01T09:30:00Z</Created>\
             </DocumentProperties>"
        );
    }

    #[test]
    fn test_texts_skip_unset() {
        let props = DocumentProperties::new()
            .with_company("ACME")
            .with_subject("Sales");
        let texts: Vec<_> = props.texts().collect();
        assert_eq!(texts, vec![("Subject", "Sales"), ("Company", "ACME")]);
        assert_eq!(DocumentProperties::new().texts().count(), 0);
    }

    #[test]
    fn test_empty_properties() {
        assert_eq!(
            DocumentProperties::new().to_xml(),
            r#"<DocumentProperties xmlns="urn:schemas-microsoft-com:office:office"/>"#
        );
    }
}
