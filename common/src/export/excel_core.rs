//! Excel generation (shared library)
//!
//! Writes a table as one worksheet using the grid column configuration:
//! header labels in the first row, one record per row, image columns as
//! hyperlinks.

use crate::error::{Error, Result};
use crate::layout::{grid_columns, ColumnKind};
use crate::types::Table;
use rust_xlsxwriter::*;

pub const SHEET_NAME: &str = "Puslespill";

const TEXT_COL_WIDTH: f64 = 18.0;
const IMAGE_COL_WIDTH: f64 = 40.0;

/// Generates the workbook into a buffer
pub fn generate_excel_buffer(table: &Table) -> Result<Vec<u8>> {
    let columns = grid_columns(table);
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    // Barcodes stay text so long EANs are not shown in scientific notation
    let text_format = Format::new().set_num_format("@");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_freeze_panes(1, 0)?;

    for (index, column) in columns.iter().enumerate() {
        let col = column_number(index)?;
        let width = match column.kind {
            ColumnKind::Text => TEXT_COL_WIDTH,
            ColumnKind::Image => IMAGE_COL_WIDTH,
        };
        worksheet.set_column_width(col, width)?;
        worksheet.write_string_with_format(0, col, &column.label, &header_format)?;
    }

    for (row_index, record) in table.iter().enumerate() {
        let row = row_number(row_index)?;

        for (index, column) in columns.iter().enumerate() {
            let col = column_number(index)?;
            let Some(value) = column.value(record) else {
                continue;
            };

            match column.kind {
                ColumnKind::Image if is_web_url(value) => {
                    // Over-long URLs are rejected as links; keep them as text
                    if worksheet.write_url(row, col, value).is_err() {
                        worksheet.write_string_with_format(row, col, value, &text_format)?;
                    }
                }
                _ => {
                    worksheet.write_string_with_format(row, col, value, &text_format)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Worksheet column for the n-th grid column
fn column_number(index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|_| Error::Parse(format!("too many columns: {}", index + 1)))
}

/// Worksheet row for the n-th record, below the header row
fn row_number(index: usize) -> Result<u32> {
    u32::try_from(index)
        .ok()
        .and_then(|row| row.checked_add(1))
        .ok_or_else(|| Error::Parse(format!("too many rows: {}", index)))
}

fn is_web_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;

    #[test]
    fn test_generate_excel_buffer_is_xlsx() {
        let table = Table::new(
            vec!["Barcode".to_string(), "Tittel".to_string(), "Bilde1".to_string()],
            vec![Record {
                barcode: "7045952001235".to_string(),
                title: Some("Puzzle A".to_string()),
                bilde1: Some("https://example.com/a.jpg".to_string()),
                ..Default::default()
            }],
        );

        let buffer = generate_excel_buffer(&table).expect("excel generation failed");
        // xlsx is a zip archive
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_excel_buffer_empty_table() {
        let buffer = generate_excel_buffer(&Table::default()).expect("excel generation failed");
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_is_web_url() {
        assert!(is_web_url("https://example.com/a.jpg"));
        assert!(!is_web_url("a.jpg"));
    }

    #[test]
    fn test_overlong_image_url_is_written_as_text() {
        let long_url = format!("https://example.com/{}", "a".repeat(2100));
        let table = Table::new(
            vec!["Barcode".to_string(), "Bilde1".to_string()],
            vec![
                Record {
                    barcode: "7045952001235".to_string(),
                    bilde1: Some(long_url),
                    ..Default::default()
                },
                Record {
                    barcode: "1234567890123".to_string(),
                    bilde1: Some("https://example.com/b.jpg".to_string()),
                    ..Default::default()
                },
            ],
        );

        let buffer = generate_excel_buffer(&table).expect("one long URL must not fail the export");
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_column_number_out_of_range() {
        assert_eq!(column_number(0).unwrap(), 0);
        assert_eq!(column_number(65_535).unwrap(), 65_535);
        assert!(matches!(column_number(70_000), Err(Error::Parse(_))));
    }

    #[test]
    fn test_row_number_skips_header() {
        assert_eq!(row_number(0).unwrap(), 1);
        assert!(matches!(row_number(u32::MAX as usize), Err(Error::Parse(_))));
    }
}
