//! # xmlss-core
//!
//! Core data structures for the xmlss spreadsheet generator.
//!
//! This crate provides the types shared by the streaming writer:
//! - [`CellValue`] - Values written into cells (strings, numbers, dates, booleans, errors)
//! - [`ColumnOptions`], [`RowOptions`], [`CellOptions`] - Per-element formatting
//! - [`Style`] and [`StyleRegistry`] - Cell formatting with single-parent inheritance
//! - [`GeneratorState`] - The transition graph the writer enforces
//! - [`format`] - Value formatters shared by cell data and attributes
//!
//! ## Example
//!
//! ```rust
//! use xmlss_core::{Font, StyleRegistry};
//!
//! let mut styles = StyleRegistry::new();
//! let header = styles
//!     .create_style(Some("Header"), None)
//!     .unwrap()
//!     .with_font(Font::builder().with_bold(true).build().unwrap())
//!     .build();
//!
//! assert_eq!(header.as_str(), "ce1");
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod format;
pub mod row;
pub mod state;
pub mod style;
pub mod xml;

// Re-exports for convenience
pub use cell::{CellOptions, CellValue, DataType};
pub use column::ColumnOptions;
pub use error::{Error, Result};
pub use row::RowOptions;
pub use state::GeneratorState;
pub use xml::{AttrValue, XmlElement};

// Re-export all style types for convenience
pub use style::{
    Alignment, Border, BorderLineStyle, BorderPosition, Borders, Color, Font, FontFamily,
    HorizontalAlignment, Interior, NumberFormat, Pattern, Protection, Style, StyleBuilder,
    StyleId, StyleRegistry, Underline, VerticalAlignment,
};

/// Maximum number of columns in a worksheet
pub const MAX_COLUMNS: u32 = 16_384;
