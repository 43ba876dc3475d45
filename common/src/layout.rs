//! Presentation settings shared by the terminal and web views
//!
//! Labels, column configuration for the grid and field configuration for
//! the cards live here so both front ends render the same thing.

use crate::types::{Record, Table, BARCODE, IMAGE_1, IMAGE_2, IMAGE_3, TITLE};

pub const PAGE_TITLE: &str = "Puslespill View";
pub const SEARCH_LABEL: &str = "Søk etter strekkode (EAN)";
pub const SEARCH_PLACEHOLDER: &str = "e.g. 7045952001235";
pub const SEARCH_HELP: &str = "Skriv inn hele eller deler av EAN-nummeret (13 siffer)";
pub const DATA_CAPTION: &str = "Data lastet fra Google Sheets:";

/// Grid viewport height
pub const GRID_HEIGHT: u32 = 700;
/// Card thumbnail width
pub const CARD_THUMBNAIL_WIDTH: u32 = 120;
/// Shown in a card when the title is missing
pub const TITLE_PLACEHOLDER: &str = "–";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// Cell holds an image URL, rendered as the image
    Image,
}

/// Display settings for one known column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnConfig {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub help: Option<&'static str>,
}

pub const COLUMN_CONFIG: &[ColumnConfig] = &[
    ColumnConfig {
        key: BARCODE,
        label: "EAN / Strekkode",
        kind: ColumnKind::Text,
        help: None,
    },
    ColumnConfig {
        key: IMAGE_1,
        label: "Bilde 1",
        kind: ColumnKind::Image,
        help: Some("Første produktbilde"),
    },
    ColumnConfig {
        key: IMAGE_2,
        label: "Bilde 2",
        kind: ColumnKind::Image,
        help: None,
    },
    ColumnConfig {
        key: IMAGE_3,
        label: "Bilde 3",
        kind: ColumnKind::Image,
        help: None,
    },
];

pub fn column_config(key: &str) -> Option<&'static ColumnConfig> {
    COLUMN_CONFIG.iter().find(|c| c.key == key)
}

/// Resolved grid column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub key: String,
    pub label: String,
    pub kind: ColumnKind,
    pub help: Option<String>,
}

impl GridColumn {
    pub fn value<'a>(&self, record: &'a Record) -> Option<&'a str> {
        record.field(&self.key).filter(|v| !v.is_empty())
    }
}

/// Grid columns in sheet order. Unconfigured and unnamed columns keep
/// their header as a plain text column.
pub fn grid_columns(table: &Table) -> Vec<GridColumn> {
    table
        .columns
        .iter()
        .filter(|key| !key.is_empty())
        .map(|key| match column_config(key) {
            Some(config) => GridColumn {
                key: key.clone(),
                label: config.label.to_string(),
                kind: config.kind,
                help: config.help.map(str::to_string),
            },
            None => GridColumn {
                key: key.clone(),
                label: key.clone(),
                kind: ColumnKind::Text,
                help: None,
            },
        })
        .collect()
}

/// Label for the card field
pub fn field_label(key: &str) -> &str {
    match key {
        BARCODE => "Barcode",
        TITLE => "Tittel",
        other => other,
    }
}

/// What one card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub thumbnail: Option<&'a str>,
    pub barcode: &'a str,
    pub title: &'a str,
}

impl<'a> CardView<'a> {
    pub fn from_record(record: &'a Record) -> Self {
        Self {
            thumbnail: record.bilde1.as_deref().filter(|url| !url.is_empty()),
            barcode: &record.barcode,
            title: record
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(TITLE_PLACEHOLDER),
        }
    }
}
