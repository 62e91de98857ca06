//! Single-element XML rendering
//!
//! [`XmlElement`] renders exactly one element: its tag, the attributes that
//! carry a value, and optionally some content. Children that are streamed
//! later are handled by rendering the element open and writing
//! [`closing_tag`] once they are done.

use std::fmt::{self, Write as _};

use chrono::NaiveDateTime;

use crate::format::{format_bool, format_date, format_double};

/// An attribute value, rendered through the value formatters
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Literal text (entity-escaped on output)
    Text(String),
    /// Double, five decimals at most
    Number(f64),
    /// Integer
    Integer(i64),
    /// Boolean, `1` / `0`
    Bool(bool),
    /// Naive timestamp
    DateTime(NaiveDateTime),
}

impl AttrValue {
    /// Fall back to `Display` for value kinds without a dedicated formatter
    pub fn display<T: fmt::Display>(value: T) -> Self {
        AttrValue::Text(value.to_string())
    }

    /// Render the value as attribute text (not yet escaped)
    pub fn render(&self) -> String {
        match self {
            AttrValue::Text(s) => s.clone(),
            AttrValue::Number(n) => format_double(*n),
            AttrValue::Integer(i) => i.to_string(),
            AttrValue::Bool(b) => format_bool(*b).to_string(),
            AttrValue::DateTime(d) => format_date(d),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        AttrValue::Text(s.clone())
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Integer(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Integer(i as i64)
    }
}

impl From<u32> for AttrValue {
    fn from(i: u32) -> Self {
        AttrValue::Integer(i as i64)
    }
}

impl From<u8> for AttrValue {
    fn from(i: u8) -> Self {
        AttrValue::Integer(i as i64)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<NaiveDateTime> for AttrValue {
    fn from(d: NaiveDateTime) -> Self {
        AttrValue::DateTime(d)
    }
}

/// Element content
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// User text, wrapped in a CDATA section instead of entity-escaped
    Cdata(String),
    /// Markup rendered elsewhere, written as-is
    Raw(String),
}

/// One XML element
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement<'a> {
    name: &'a str,
    attributes: Vec<(&'a str, Option<AttrValue>)>,
    content: Option<Content>,
    closed: bool,
}

impl<'a> XmlElement<'a> {
    /// Create a closed element with no attributes
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: None,
            closed: true,
        }
    }

    /// Add an attribute that always has a value
    pub fn attr<V: Into<AttrValue>>(mut self, name: &'a str, value: V) -> Self {
        self.attributes.push((name, Some(value.into())));
        self
    }

    /// Add an attribute that is skipped when `value` is `None`
    pub fn opt_attr<V: Into<AttrValue>>(mut self, name: &'a str, value: Option<V>) -> Self {
        self.attributes.push((name, value.map(Into::into)));
        self
    }

    /// Set text content, written inside a CDATA section
    pub fn cdata<S: Into<String>>(mut self, text: S) -> Self {
        self.content = Some(Content::Cdata(text.into()));
        self
    }

    /// Set pre-rendered content
    pub fn raw<S: Into<String>>(mut self, markup: S) -> Self {
        self.content = Some(Content::Raw(markup.into()));
        self
    }

    /// Leave the start tag open so children can be streamed after it
    pub fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    /// Get the element name
    pub fn name(&self) -> &str {
        self.name
    }

    /// Check whether any attribute carries a value
    pub fn has_attributes(&self) -> bool {
        self.attributes.iter().any(|(_, v)| v.is_some())
    }

    /// Render the element into `out`
    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attributes {
            if let Some(value) = value {
                // Writing into a String cannot fail
                let _ = write!(out, " {}=\"{}\"", name, escape_attr(&value.render()));
            }
        }

        match &self.content {
            Some(content) => {
                out.push('>');
                match content {
                    Content::Cdata(text) => write_cdata(out, text),
                    Content::Raw(markup) => out.push_str(markup),
                }
                out.push_str("</");
                out.push_str(self.name);
                out.push('>');
            }
            None if self.closed => out.push_str("/>"),
            None => out.push('>'),
        }
    }

    /// Render the element to a new string
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

impl fmt::Display for XmlElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Render the end tag for an element that was written open
pub fn closing_tag(name: &str) -> String {
    format!("</{}>", name)
}

/// Escape text for use inside a double-quoted attribute value
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write `text` as CDATA; `]]>` inside the text is split across sections
fn write_cdata(out: &mut String, text: &str) {
    out.push_str("<![CDATA[");
    out.push_str(&text.replace("]]>", "]]]]><![CDATA[>"));
    out.push_str("]]>");
}
