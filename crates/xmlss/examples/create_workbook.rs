//! Example: Stream a styled workbook to a file

use chrono::NaiveDate;
use xmlss::prelude::*;

fn main() -> Result<()> {
    let path = std::env::temp_dir().join("xmlss-example.xml");

    let options = GeneratorOptions::default().with_properties(
        DocumentProperties::new()
            .with_title("Monthly sales")
            .with_author("xmlss"),
    );
    let file = std::fs::File::create(&path)?;
    let mut doc = DocumentGenerator::with_options(file, options)?;

    // Styles
    let header = doc
        .create_style(Some("Header"), None)?
        .with_font(Font::builder().with_bold(true).with_color(Color::WHITE).build()?)
        .with_interior(Interior::solid(Color::rgb(0x1F, 0x4E, 0x79)))
        .with_alignment(
            Alignment::builder()
                .with_horizontal(HorizontalAlignment::Center)
                .build(),
        )
        .build();
    let amount = doc
        .create_style(None, None)?
        .with_number_format(NumberFormat::standard())
        .build();
    let total = doc
        .create_style(Some("Total"), Some(&amount))?
        .with_font(Font::builder().with_bold(true).build()?)
        .with_borders(
            Borders::builder()
                .with_border(
                    Border::builder(BorderPosition::Top)
                        .with_line_style(BorderLineStyle::Double)
                        .with_weight(3)
                        .build()?,
                )
                .build()?,
        )
        .build();

    doc.start_document()?;
    doc.start_sheet("Sales", false)?;

    // Column A is wide, B..C share one definition, E is hidden
    doc.start_columns()?;
    doc.column(&ColumnOptions::new().with_width(110.0))?;
    doc.column(&ColumnOptions::new().with_span(2).with_style(&amount))?;
    doc.column(&ColumnOptions::at(5).with_hidden(true))?;
    doc.close_columns()?;

    doc.start_row(&RowOptions::new().with_height(18.0))?;
    for title in ["Month", "Units", "Revenue"] {
        doc.write_cell(Some(&header), title)?;
    }
    doc.close_row()?;

    let rows = [(1, 120, 1530.25), (2, 98, 1204.0), (3, 143, 1811.5)];
    for (month, units, revenue) in rows {
        doc.start_row(&RowOptions::new())?;
        let first_day = NaiveDate::from_ymd_opt(2024, month, 1)
            .ok_or_else(|| Error::validation("invalid month"))?;
        doc.write_cell(None, first_day)?;
        doc.write_cell(Some(&amount), units)?;
        doc.write_cell(Some(&amount), revenue)?;
        doc.close_row()?;
    }

    doc.write_empty_rows(Some(1), &RowOptions::new())?;

    doc.start_row(&RowOptions::new())?;
    doc.write_cell(None, "Total")?;
    doc.write_cell(Some(&total), 361)?;
    doc.write_cell(Some(&total), 4545.75)?;
    doc.close_row()?;

    doc.close_sheet()?;
    doc.close()?;

    println!("Created {}", path.display());
    Ok(())
}
