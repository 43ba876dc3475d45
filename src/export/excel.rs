//! Excel export (CLI wrapper)

use crate::error::{Result, ViewError};
use puslespill_common::export::excel_core::generate_excel_buffer;
use puslespill_common::Table;
use std::path::Path;

pub fn write_excel(table: &Table, output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(table)
        .map_err(|e| ViewError::Export(format!("{}: {}", output_path.display(), e)))?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
