//! Streaming document generator

use std::fs::File;
use std::io::Write;
use std::path::Path;

use xmlss_core::xml::closing_tag;
use xmlss_core::{
    CellOptions, CellValue, ColumnOptions, Error, GeneratorState, Result, RowOptions,
    StyleBuilder, StyleId, StyleRegistry, XmlElement,
};

use crate::layout::SheetLayout;
use crate::options::{DocumentProperties, GeneratorOptions};
use crate::sink::EncodedSink;

const NS_SPREADSHEET: &str = "urn:schemas-microsoft-com:office:spreadsheet";
const NS_OFFICE: &str = "urn:schemas-microsoft-com:office:office";
const NS_EXCEL: &str = "urn:schemas-microsoft-com:office:excel";
const NS_HTML: &str = "http://www.w3.org/TR/REC-html40";

/// XML Spreadsheet 2003 document generator
///
/// Writes a workbook in a single pass. Every operation checks the call
/// order against [`GeneratorState`] before writing anything, and the
/// fragment it produces is streamed to the output immediately.
///
/// After any error the generator must be abandoned; the output is an
/// incomplete document.
///
/// # Example
///
/// ```rust
/// use xmlss_core::{CellValue, RowOptions};
/// use xmlss_writer::DocumentGenerator;
///
/// let mut doc = DocumentGenerator::new(Vec::new());
/// doc.start_document()?;
/// doc.start_sheet("Sheet1", false)?;
/// doc.start_row(&RowOptions::new())?;
/// doc.write_cell(None, "Hello")?;
/// doc.write_cell(None, 42.0)?;
/// doc.close_row()?;
/// doc.close_sheet()?;
/// let bytes = doc.finish()?;
/// assert!(bytes.ends_with(b"</Workbook>\n"));
/// # Ok::<(), xmlss_core::Error>(())
/// ```
#[derive(Debug)]
pub struct DocumentGenerator<W: Write> {
    /// Released by `close`
    sink: Option<EncodedSink<W>>,
    state: GeneratorState,
    styles: StyleRegistry,
    layout: SheetLayout,
    properties: Option<DocumentProperties>,
}

impl DocumentGenerator<File> {
    /// Create a generator writing to a new file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> DocumentGenerator<W> {
    /// Create a generator with default options (windows-1252 output)
    pub fn new(writer: W) -> Self {
        let options = GeneratorOptions::default();
        Self::from_parts(writer, options)
    }

    /// Create a generator with explicit options
    pub fn with_options(writer: W, options: GeneratorOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_parts(writer, options))
    }

    fn from_parts(writer: W, options: GeneratorOptions) -> Self {
        Self {
            sink: Some(EncodedSink::new(
                writer,
                options.encoding,
                options.buffer_capacity,
            )),
            state: GeneratorState::Initialization,
            styles: StyleRegistry::new(),
            layout: SheetLayout::new(),
            properties: options.properties,
        }
    }

    /// Current state
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Styles registered so far
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Last column position emitted in the current sheet
    pub fn column_count(&self) -> u32 {
        self.layout.column_count()
    }

    /// Start a new style
    ///
    /// Only legal before [`start_document`](Self::start_document).
    pub fn create_style(
        &mut self,
        name: Option<&str>,
        parent: Option<&StyleId>,
    ) -> Result<StyleBuilder<'_>> {
        self.state.require(GeneratorState::Initialization)?;
        self.styles.create_style(name, parent)
    }

    /// Write the document header and the style table
    ///
    /// Fails with a validation error, before anything is written, if a
    /// document property holds text the output codepage cannot represent.
    pub fn start_document(&mut self) -> Result<()> {
        let next = self.state.transition(GeneratorState::CleanDocument)?;
        if let Some(properties) = &self.properties {
            for (name, text) in properties.texts() {
                self.check_text(&format!("document property {}", name), text)?;
            }
        }
        self.state = next;
        self.styles.freeze();
        log::debug!("starting document with {} styles", self.styles.len());

        let encoding = self.encoding_name();
        self.emit(&format!(
            "<?xml version=\"1.0\" encoding=\"{}\"?>",
            encoding
        ))?;
        self.emit("<?mso-application progid=\"Excel.Sheet\"?>")?;

        let workbook = XmlElement::new("Workbook")
            .attr("xmlns", NS_SPREADSHEET)
            .attr("xmlns:o", NS_OFFICE)
            .attr("xmlns:x", NS_EXCEL)
            .attr("xmlns:ss", NS_SPREADSHEET)
            .attr("xmlns:html", NS_HTML)
            .open();
        self.emit(&workbook.render())?;

        if let Some(properties) = self.properties.as_ref().map(|p| p.to_xml()) {
            self.emit(&properties)?;
        }

        let styles = self.styles.to_styles_xml();
        self.emit(&styles)
    }

    /// Open a worksheet
    pub fn start_sheet(&mut self, name: &str, protected: bool) -> Result<()> {
        let next = self.state.transition(GeneratorState::WritingSheet)?;
        if name.is_empty() {
            return Err(Error::validation("sheet name must not be empty"));
        }
        self.state = next;
        self.layout = SheetLayout::new();
        log::debug!("starting sheet '{}'", name);

        let worksheet = XmlElement::new("Worksheet")
            .attr("ss:Name", name)
            .opt_attr("ss:Protected", protected.then_some(true))
            .open();
        self.emit(&worksheet.render())?;
        self.emit("<Table>")
    }

    /// Open the column section; only legal before the first row
    pub fn start_columns(&mut self) -> Result<()> {
        self.advance(GeneratorState::WritingColumns)
    }

    /// Define a column
    ///
    /// A column indexed past the next free position is preceded by one
    /// unstyled filler column covering the gap.
    pub fn column(&mut self, column: &ColumnOptions) -> Result<()> {
        self.state.require(GeneratorState::WritingColumns)?;
        self.check_style(column.style.as_ref())?;

        if let Some(gap) = self.layout.place_column(column)? {
            let filler = XmlElement::new("Column").opt_attr("ss:Span", gap.filler_span());
            self.emit(&filler.render())?;
        }

        let element = XmlElement::new("Column")
            .opt_attr("ss:Index", column.index)
            .opt_attr("ss:Span", column.extra_span())
            .opt_attr("ss:StyleID", column.style.as_ref())
            .opt_attr("ss:Width", column.width)
            .opt_attr("ss:AutoFitWidth", column.auto_fit_width)
            .opt_attr("ss:Hidden", column.hidden);
        self.emit(&element.render())
    }

    /// Close the column section
    pub fn close_columns(&mut self) -> Result<()> {
        self.advance(GeneratorState::WritingSheet)?;
        self.layout.close_columns();
        self.emit("<Column/>")
    }

    /// Open a row
    pub fn start_row(&mut self, row: &RowOptions) -> Result<()> {
        let next = self.row_start_state()?.transition(GeneratorState::WritingRow)?;
        self.check_style(row.style.as_ref())?;
        self.state = next;
        self.layout.start_row();

        let element = XmlElement::new("Row")
            .opt_attr("ss:Caption", row.caption.as_deref())
            .opt_attr("ss:AutoFitHeight", row.auto_fit_height)
            .opt_attr("ss:Height", row.height)
            .opt_attr("ss:Hidden", row.hidden)
            .opt_attr("ss:StyleID", row.style.as_ref())
            .open();
        self.emit(&element.render())
    }

    /// Write a cell with an optional style
    ///
    /// Date values written without a style use the built-in date style.
    pub fn write_cell<V: Into<CellValue>>(
        &mut self,
        style: Option<&StyleId>,
        value: V,
    ) -> Result<()> {
        let options = CellOptions {
            style: style.cloned(),
            ..CellOptions::default()
        };
        self.write_cell_with(&options, value)
    }

    /// Write a cell with full cell options
    ///
    /// Cell text is written as CDATA, where character references are not
    /// expanded, so text the output codepage cannot represent is rejected
    /// with a validation error.
    pub fn write_cell_with<V: Into<CellValue>>(
        &mut self,
        options: &CellOptions,
        value: V,
    ) -> Result<()> {
        let value = value.into();
        let next = self.state.transition(GeneratorState::WritingCell)?;
        self.check_style(options.style.as_ref())?;
        let text = value.to_data_text();
        self.check_text("cell text", &text)?;
        self.state = next;

        let style = match &options.style {
            Some(style) => Some(style.clone()),
            None if value.is_date() => Some(self.styles.default_date_style_id()),
            None => None,
        };
        let data = XmlElement::new("Data")
            .attr("ss:Type", value.data_type().as_str())
            .cdata(text);
        let cell = XmlElement::new("Cell")
            .opt_attr("ss:StyleID", style.as_ref())
            .opt_attr("ss:MergeAcross", options.merge_across)
            .opt_attr("ss:MergeDown", options.merge_down)
            .opt_attr("ss:HRef", options.href.as_deref())
            .raw(data.render());
        self.emit(&cell.render())?;

        self.layout.mark_cell();
        self.advance(GeneratorState::WritingRow)
    }

    /// Write a cell without data
    pub fn write_empty_cell(&mut self, style: Option<&StyleId>) -> Result<()> {
        let next = self.state.transition(GeneratorState::WritingCell)?;
        self.check_style(style)?;
        self.state = next;

        let cell = XmlElement::new("Cell").opt_attr("ss:StyleID", style);
        self.emit(&cell.render())?;

        self.layout.mark_cell();
        self.advance(GeneratorState::WritingRow)
    }

    /// Close the open row
    ///
    /// A row that received no cell gets one placeholder cell at index 1.
    pub fn close_row(&mut self) -> Result<()> {
        self.advance(GeneratorState::WritingSheetRows)?;
        if self.layout.row_is_empty() {
            self.emit(r#"<Cell ss:Index="1"/>"#)?;
        }
        self.emit(&closing_tag("Row"))
    }

    /// Write `count` rows holding one empty cell each (`None` writes one)
    ///
    /// Each row is written out in full rather than with the row index
    /// shorthand, which some consumers do not read back correctly.
    pub fn write_empty_rows(&mut self, count: Option<u32>, row: &RowOptions) -> Result<()> {
        self.row_start_state()?.transition(GeneratorState::WritingRow)?;
        self.check_style(row.style.as_ref())?;

        for _ in 0..count.unwrap_or(1) {
            self.start_row(row)?;
            self.write_empty_cell(None)?;
            self.close_row()?;
        }
        Ok(())
    }

    /// Close the open worksheet
    pub fn close_sheet(&mut self) -> Result<()> {
        let next = self
            .row_start_state()?
            .transition(GeneratorState::CleanDocument)?;
        self.state = next;
        log::debug!("closing sheet");

        self.emit(&closing_tag("Table"))?;
        self.emit(&closing_tag("Worksheet"))
    }

    /// Finish the document, flush and release the output
    ///
    /// Closing a closed generator does nothing.
    pub fn close(&mut self) -> Result<()> {
        if self.state == GeneratorState::Done {
            return Ok(());
        }
        self.end_document()?;
        if let Some(sink) = self.sink.take() {
            sink.into_inner()?;
        }
        Ok(())
    }

    /// Finish the document and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        if self.state != GeneratorState::Done {
            self.end_document()?;
        }
        let sink = self
            .sink
            .take()
            .ok_or_else(|| Error::validation("output was already released by close"))?;
        Ok(sink.into_inner()?)
    }

    fn end_document(&mut self) -> Result<()> {
        self.advance(GeneratorState::Done)?;
        log::debug!("closing document");
        self.emit(&closing_tag("Workbook"))?;
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Rows start from `WritingSheetRows`; a sheet without rows gets there
    /// implicitly.
    fn row_start_state(&self) -> Result<GeneratorState> {
        if self.state == GeneratorState::WritingSheet {
            self.state.transition(GeneratorState::WritingSheetRows)
        } else {
            Ok(self.state)
        }
    }

    fn advance(&mut self, to: GeneratorState) -> Result<()> {
        self.state = self.state.transition(to)?;
        Ok(())
    }

    fn check_style(&self, style: Option<&StyleId>) -> Result<()> {
        match style {
            Some(id) => self.styles.check(id),
            None => Ok(()),
        }
    }

    /// Text bound for CDATA must survive the codepage unchanged
    fn check_text(&self, what: &str, text: &str) -> Result<()> {
        match &self.sink {
            Some(sink) if !sink.is_representable(text) => Err(Error::validation(format!(
                "{} contains characters not representable in {}",
                what,
                sink.encoding().name()
            ))),
            _ => Ok(()),
        }
    }

    fn encoding_name(&self) -> &'static str {
        match &self.sink {
            Some(sink) => sink.encoding().name(),
            None => encoding_rs::WINDOWS_1252.name(),
        }
    }

    fn emit(&mut self, fragment: &str) -> Result<()> {
        let sink = self
            .sink
            .as_mut()
            .ok_or_else(|| Error::validation("output was already released by close"))?;
        sink.write_line(fragment)?;
        Ok(())
    }
}
