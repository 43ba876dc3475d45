//! Puslespill View Common Library
//!
//! Types and rules shared by the native host and the web (WASM) view

pub mod types;
pub mod sheet;
pub mod search;
pub mod viewport;
pub mod layout;
pub mod cache;
pub mod error;
pub mod export;

pub use types::{Record, Table};
pub use sheet::{cell_to_string, table_from_values};
pub use search::{
    filter_table, search, RecordsResponse, SearchOutcome, SearchQuery, SearchStatus, StatusLevel, StatusMessage,
};
pub use viewport::{select_layout, LayoutMode, ViewportState};
pub use layout::{grid_columns, CardView, ColumnKind, GridColumn};
pub use cache::{Millis, TtlCache, CACHE_TTL};
pub use error::{Error, Result};
