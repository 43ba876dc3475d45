//! JSON export
//!
//! Same shape as `/api/records`: header row plus records keyed by header.

use crate::error::Result;
use puslespill_common::Table;
use std::path::Path;

pub fn write_json(table: &Table, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(table)?;
    std::fs::write(output_path, content)?;
    Ok(())
}
