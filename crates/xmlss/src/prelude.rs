//! Prelude module - common imports for xmlss users
//!
//! ```rust
//! use xmlss::prelude::*;
//! ```

pub use crate::{
    // Style types
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

    // Writer
    DocumentGenerator,
    DocumentProperties,
    // Error types
    Error,
    Font,
    GeneratorOptions,
    GeneratorState,
    HorizontalAlignment,
    Interior,
    NumberFormat,
    Pattern,
    Protection,
    Result,
    RowOptions,

    StyleId,
    VerticalAlignment,
};
