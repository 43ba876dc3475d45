//! Barcode search
//!
//! Narrows a table to the records whose barcode starts with the query.
//! Matching is a case-sensitive prefix test on the raw barcode string; the
//! barcode is not normalized, so `" 704..."` does not match `704`.

use crate::types::{Record, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed search input. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(input: &str) -> Self {
        Self(input.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.barcode.starts_with(self.0.as_str())
    }
}

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    /// Load failures, never produced by a search
    Error,
}

impl StatusLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Success => "success",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

/// Result summary shown above the records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// Non-empty query, nothing matched
    NoMatches { query: String },
    /// Non-empty query with hits
    Found { count: usize },
    /// No query, whole table shown
    Total { count: usize },
}

impl SearchStatus {
    pub fn level(&self) -> StatusLevel {
        match self {
            SearchStatus::NoMatches { .. } => StatusLevel::Warning,
            SearchStatus::Found { .. } => StatusLevel::Success,
            SearchStatus::Total { .. } => StatusLevel::Info,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::NoMatches { query } => write!(f, "no matches for '{}'", query),
            SearchStatus::Found { count: 1 } => write!(f, "found 1 match"),
            SearchStatus::Found { count } => write!(f, "found {} matches", count),
            SearchStatus::Total { count: 1 } => write!(f, "total 1 record"),
            SearchStatus::Total { count } => write!(f, "total {} records", count),
        }
    }
}

/// Wire form of a status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub message: String,
}

impl From<&SearchStatus> for StatusMessage {
    fn from(status: &SearchStatus) -> Self {
        Self {
            level: status.level(),
            message: status.message(),
        }
    }
}

/// Filtered table plus its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: SearchQuery,
    pub table: Table,
    pub status: SearchStatus,
}

/// Records whose barcode starts with the query, in table order
pub fn filter_table(table: &Table, query: &SearchQuery) -> Table {
    if query.is_empty() {
        return table.clone();
    }

    let records = table
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect();

    table.with_records(records)
}

/// Runs one search from raw user input
pub fn search(table: &Table, input: &str) -> SearchOutcome {
    let query = SearchQuery::new(input);
    let filtered = filter_table(table, &query);

    let status = if query.is_empty() {
        SearchStatus::Total { count: filtered.len() }
    } else if filtered.is_empty() {
        SearchStatus::NoMatches {
            query: query.as_str().to_string(),
        }
    } else {
        SearchStatus::Found { count: filtered.len() }
    };

    SearchOutcome {
        query,
        table: filtered,
        status,
    }
}

/// Body of `GET /api/records`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
    pub status: StatusMessage,
}

impl RecordsResponse {
    pub fn into_table(self) -> Table {
        Table::new(self.columns, self.records)
    }
}

impl From<SearchOutcome> for RecordsResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            status: StatusMessage::from(&outcome.status),
            columns: outcome.table.columns,
            records: outcome.table.records,
        }
    }
}
