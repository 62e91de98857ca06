//! # xmlss-writer
//!
//! Streaming XML Spreadsheet 2003 writer for xmlss.

mod generator;
mod layout;
mod options;
mod sink;

pub use generator::DocumentGenerator;
pub use layout::{ColumnGap, SheetLayout};
pub use options::{DocumentProperties, GeneratorOptions};
pub use sink::EncodedSink;
