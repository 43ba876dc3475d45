//! Test doubles shared by the integration tests

#![allow(dead_code)]

use puslespill_common::{Millis, Record, Table};
use puslespill_view::error::{Result, ViewError};
use puslespill_view::sheets::{Clock, RecordSource};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

pub const T0: Millis = 1_760_000_000_000;

/// The two-row table used throughout the examples
pub fn sample_table() -> Table {
    Table::new(
        vec![
            "Barcode".to_string(),
            "Tittel".to_string(),
            "Bilde1".to_string(),
            "Bilde2".to_string(),
            "Bilde3".to_string(),
        ],
        vec![
            Record {
                barcode: "7045952001235".to_string(),
                title: Some("Puzzle A".to_string()),
                bilde1: Some("https://example.com/a1.jpg".to_string()),
                ..Default::default()
            },
            Record {
                barcode: "1234567890123".to_string(),
                title: Some("Puzzle B".to_string()),
                ..Default::default()
            },
        ],
    )
}

/// Source that counts fetches and can be switched to fail
pub struct FakeSource {
    table: Table,
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl FakeSource {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

impl RecordSource for FakeSource {
    async fn fetch_table(&self) -> Result<Table> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ViewError::Network("connection refused".to_string()));
        }
        Ok(self.table.clone())
    }
}

/// Source that always fails with the given error
pub struct FailingSource(pub fn() -> ViewError);

impl RecordSource for FailingSource {
    async fn fetch_table(&self) -> Result<Table> {
        Err((self.0)())
    }
}

/// Manually advanced clock
#[derive(Clone)]
pub struct FakeClock(Arc<AtomicI64>);

impl FakeClock {
    pub fn new(start: Millis) -> Self {
        Self(Arc::new(AtomicI64::new(start)))
    }

    pub fn advance(&self, millis: Millis) {
        self.0.fetch_add(millis, Ordering::SeqCst);
    }

    pub fn clock(&self) -> Clock {
        let now = Arc::clone(&self.0);
        Arc::new(move || now.load(Ordering::SeqCst))
    }
}
