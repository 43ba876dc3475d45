pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use puslespill_common::Table;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_STEM: &str = "puslespill";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_FILE_STEM, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        (
            output.join(format!("{}.json", DEFAULT_FILE_STEM)),
            output.join(format!("{}.xlsx", DEFAULT_FILE_STEM)),
        )
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_FILE_STEM);
        (
            parent.join(format!("{}.json", stem)),
            parent.join(format!("{}.xlsx", stem)),
        )
    }
}

/// Writes the table and returns the files written
pub fn export_table(table: &Table, format: &ExportFormat, output: &Path) -> Result<Vec<PathBuf>> {
    let written = match format {
        ExportFormat::Json => {
            let path = output_path_for_format(output, "json");
            json::write_json(table, &path)?;
            vec![path]
        }
        ExportFormat::Excel => {
            let path = output_path_for_format(output, "xlsx");
            excel::write_excel(table, &path)?;
            vec![path]
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output);
            json::write_json(table, &json_path)?;
            excel::write_excel(table, &excel_path)?;
            vec![json_path, excel_path]
        }
    };

    Ok(written)
}
