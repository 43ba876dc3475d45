//! Record and table types
//!
//! Shared between the native host and the web view:
//! - Record: one spreadsheet row
//! - Table: header row plus records, in sheet order

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const BARCODE: &str = "Barcode";
pub const TITLE: &str = "Tittel";
pub const IMAGE_1: &str = "Bilde1";
pub const IMAGE_2: &str = "Bilde2";
pub const IMAGE_3: &str = "Bilde3";

/// One spreadsheet row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Barcode")]
    pub barcode: String,

    #[serde(rename = "Tittel", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "Bilde1", default, skip_serializing_if = "Option::is_none")]
    pub bilde1: Option<String>,

    #[serde(rename = "Bilde2", default, skip_serializing_if = "Option::is_none")]
    pub bilde2: Option<String>,

    #[serde(rename = "Bilde3", default, skip_serializing_if = "Option::is_none")]
    pub bilde3: Option<String>,

    /// Columns without a dedicated field, keyed by their header
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Record {
    /// Cell value by header name. Empty optional cells read as `None`.
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            BARCODE => Some(self.barcode.as_str()),
            TITLE => self.title.as_deref(),
            IMAGE_1 => self.bilde1.as_deref(),
            IMAGE_2 => self.bilde2.as_deref(),
            IMAGE_3 => self.bilde3.as_deref(),
            _ => self.extra.get(key).map(String::as_str),
        }
    }

    /// Sets a cell by header name. Empty values clear optional fields.
    pub fn set_field(&mut self, key: &str, value: String) {
        let optional = if value.is_empty() { None } else { Some(value.clone()) };
        match key {
            BARCODE => self.barcode = value,
            TITLE => self.title = optional,
            IMAGE_1 => self.bilde1 = optional,
            IMAGE_2 => self.bilde2 = optional,
            IMAGE_3 => self.bilde3 = optional,
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    /// Image URLs in column order, skipping empty ones
    pub fn images(&self) -> impl Iterator<Item = &str> {
        [&self.bilde1, &self.bilde2, &self.bilde3]
            .into_iter()
            .filter_map(|url| url.as_deref())
    }
}

/// Ordered collection of records with the sheet's header row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Same columns, different rows
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        Self {
            columns: self.columns.clone(),
            records,
        }
    }

    /// Ascending by barcode string. Stable, so equal barcodes keep sheet order.
    pub fn sorted_by_barcode(mut self) -> Self {
        self.records.sort_by(|a, b| a.barcode.cmp(&b.barcode));
        self
    }
}
