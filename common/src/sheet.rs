//! Worksheet value interpretation
//!
//! Turns the raw `values` grid returned by the Sheets API into a [`Table`].
//! The first row is the header row, used verbatim; every following row is
//! one record.

use crate::error::{Error, Result};
use crate::types::{Record, Table, BARCODE};
use serde_json::Value;
use std::collections::HashSet;

/// Largest magnitude printed as an integer without losing digits
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Cell value as the string shown in the view
///
/// Numbers without a fractional part print without a decimal point, so a
/// numeric barcode cell reads `7045952001235`.
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER => {
                        format!("{}", f as i64)
                    }
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        other => other.to_string(),
    }
}

/// Builds a table from a worksheet's rows
///
/// - No rows at all: empty table without columns
/// - Short rows are padded with empty cells, cells past the header are dropped
pub fn table_from_values(rows: &[Vec<Value>]) -> Result<Table> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Ok(Table::default());
    };

    let columns: Vec<String> = header_row.iter().map(cell_to_string).collect();
    check_headers(&columns)?;

    let records = data_rows
        .iter()
        .map(|row| record_from_row(&columns, row))
        .collect();

    Ok(Table::new(columns, records))
}

fn check_headers(columns: &[String]) -> Result<()> {
    if !columns.iter().any(|c| c == BARCODE) {
        return Err(Error::MissingColumn(BARCODE.to_string()));
    }

    let mut seen = HashSet::new();
    for column in columns.iter().filter(|c| !c.is_empty()) {
        if !seen.insert(column.as_str()) {
            return Err(Error::Parse(format!("duplicate header '{}'", column)));
        }
    }

    Ok(())
}

fn record_from_row(columns: &[String], row: &[Value]) -> Record {
    let mut record = Record::default();

    for (index, column) in columns.iter().enumerate() {
        // Unnamed columns cannot be addressed by the view
        if column.is_empty() {
            continue;
        }
        let value = row.get(index).map(cell_to_string).unwrap_or_default();
        record.set_field(column, value);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<Vec<Value>> {
        serde_json::from_value(value).expect("rows must be an array of arrays")
    }

    #[test]
    fn test_cell_to_string_numbers() {
        assert_eq!(cell_to_string(&json!(7045952001235_i64)), "7045952001235");
        assert_eq!(cell_to_string(&json!(7045952001235.0)), "7045952001235");
        assert_eq!(cell_to_string(&json!(12.5)), "12.5");
        assert_eq!(cell_to_string(&json!(-3)), "-3");
    }

    #[test]
    fn test_cell_to_string_other_types() {
        assert_eq!(cell_to_string(&json!("  7045 ")), "  7045 ");
        assert_eq!(cell_to_string(&json!(true)), "TRUE");
        assert_eq!(cell_to_string(&json!(false)), "FALSE");
        assert_eq!(cell_to_string(&Value::Null), "");
    }

    #[test]
    fn test_table_from_values_basic() {
        let values = rows(json!([
            ["Barcode", "Tittel", "Bilde1", "Bilde2", "Bilde3"],
            [7045952001235_i64, "Puzzle A", "https://img/a1.jpg", "", ""],
            ["1234567890123", "Puzzle B"]
        ]));

        let table = table_from_values(&values).expect("parse failed");

        assert_eq!(table.columns, vec!["Barcode", "Tittel", "Bilde1", "Bilde2", "Bilde3"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].barcode, "7045952001235");
        assert_eq!(table.records[0].bilde1.as_deref(), Some("https://img/a1.jpg"));
        assert_eq!(table.records[0].bilde2, None);
        assert_eq!(table.records[1].title.as_deref(), Some("Puzzle B"));
        assert_eq!(table.records[1].bilde3, None);
    }

    #[test]
    fn test_table_from_values_keeps_extra_columns() {
        let values = rows(json!([
            ["Barcode", "Brikker", "Tittel"],
            ["111", 1000, "Fjord"],
        ]));

        let table = table_from_values(&values).expect("parse failed");
        assert_eq!(table.columns, vec!["Barcode", "Brikker", "Tittel"]);
        assert_eq!(table.records[0].field("Brikker"), Some("1000"));
    }

    #[test]
    fn test_table_from_values_ignores_cells_past_header() {
        let values = rows(json!([
            ["Barcode"],
            ["111", "stray", "cells"],
        ]));

        let table = table_from_values(&values).expect("parse failed");
        assert!(table.records[0].extra.is_empty());
    }

    #[test]
    fn test_table_from_values_empty_sheet() {
        let table = table_from_values(&[]).expect("parse failed");
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }

    #[test]
    fn test_table_from_values_header_only() {
        let values = rows(json!([["Barcode", "Tittel"]]));
        let table = table_from_values(&values).expect("parse failed");
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 2);
    }

    #[test]
    fn test_table_from_values_missing_barcode_column() {
        let values = rows(json!([["EAN", "Tittel"], ["111", "x"]]));
        let err = table_from_values(&values).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "Barcode"));
    }

    #[test]
    fn test_table_from_values_duplicate_header() {
        let values = rows(json!([["Barcode", "Tittel", "Tittel"]]));
        let err = table_from_values(&values).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_table_from_values_allows_blank_headers() {
        let values = rows(json!([["Barcode", "", ""], ["111", "a", "b"]]));
        let table = table_from_values(&values).expect("parse failed");
        assert_eq!(table.records[0].barcode, "111");
        assert!(table.records[0].extra.is_empty());
    }
}
