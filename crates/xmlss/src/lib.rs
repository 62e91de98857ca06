//! # xmlss
//!
//! A Rust library for streaming XML Spreadsheet 2003 workbooks.
//!
//! The generator writes a workbook in a single pass and checks that calls
//! arrive in an order that produces a valid document.
//!
//! ## Features
//!
//! - Streaming output; nothing but the style table is held in memory
//! - Reusable cell styles with single-parent inheritance
//! - Column gap and span bookkeeping
//! - Legacy single-byte codepage output (windows-1252 by default)
//!
//! ## Example
//!
//! ```rust
//! use xmlss::prelude::*;
//!
//! let mut doc = DocumentGenerator::new(Vec::new());
//!
//! // Styles must be created before the document starts
//! let header = doc
//!     .create_style(Some("Header"), None)?
//!     .with_font(Font::builder().with_bold(true).build()?)
//!     .build();
//!
//! doc.start_document()?;
//! doc.start_sheet("Sales", false)?;
//!
//! doc.start_columns()?;
//! doc.column(&ColumnOptions::new().with_width(120.0))?;
//! doc.close_columns()?;
//!
//! doc.start_row(&RowOptions::new())?;
//! doc.write_cell(Some(&header), "Region")?;
//! doc.write_cell(Some(&header), "Total")?;
//! doc.close_row()?;
//!
//! doc.start_row(&RowOptions::new())?;
//! doc.write_cell(None, "North")?;
//! doc.write_cell(None, 1234.5)?;
//! doc.close_row()?;
//!
//! doc.close_sheet()?;
//! let bytes = doc.finish()?;
//! assert!(bytes.starts_with(b"<?xml"));
//! # Ok::<(), xmlss::Error>(())
//! ```

pub mod prelude;

// Re-export core types
pub use xmlss_core::{
    format,
    style,
    xml,
    Alignment,
    Border,
    BorderLineStyle,
    BorderPosition,
    Borders,
    CellOptions,
    // Cell types
    CellValue,
    Color,
    ColumnOptions,
    DataType,
    // Error types
    Error,
    Font,
    FontFamily,
    // State machine
    GeneratorState,
    HorizontalAlignment,
    Interior,
    NumberFormat,
    Pattern,
    Protection,
    Result,
    RowOptions,
    Style,
    StyleBuilder,
    StyleId,
    StyleRegistry,
    Underline,
    VerticalAlignment,
};

// Re-export the writer
pub use xmlss_writer::{DocumentGenerator, DocumentProperties, GeneratorOptions};
