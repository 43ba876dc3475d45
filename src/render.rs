//! Terminal rendering
//!
//! Text versions of the two layouts: an aligned grid for wide terminals and
//! bordered cards for narrow ones.

use console::style;
use puslespill_common::layout::{field_label, CardView, ColumnKind, DATA_CAPTION};
use puslespill_common::search::{SearchOutcome, SearchStatus, StatusLevel};
use puslespill_common::types::{BARCODE, TITLE};
use puslespill_common::{grid_columns, LayoutMode, Table, ViewportState};

/// Approximate pixel width of one terminal cell
pub const CELL_WIDTH_PX: u32 = 8;

const MAX_CELL_CHARS: usize = 40;
const CARD_WIDTH: usize = 48;

/// Width from `--width`, else from the terminal size. No terminal → failed.
pub fn terminal_viewport(width_override: Option<u32>) -> ViewportState {
    if let Some(px) = width_override {
        return ViewportState::Resolved(px);
    }

    console::Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| u32::from(cols) * CELL_WIDTH_PX)
        .into()
}

pub fn render_status(status: &SearchStatus) -> String {
    let icon = match status.level() {
        StatusLevel::Info => "ℹ",
        StatusLevel::Success => "✔",
        StatusLevel::Warning => "⚠",
        StatusLevel::Error => "✖",
    };
    format!("{} {}", icon, status)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

pub fn render_grid(table: &Table) -> String {
    let columns = grid_columns(table);
    if columns.is_empty() {
        return String::new();
    }

    let cells: Vec<Vec<String>> = table
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| truncate(column.value(record).unwrap_or(""), MAX_CELL_CHARS))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let label = truncate(&column.label, MAX_CELL_CHARS).chars().count();
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .fold(label, usize::max)
        })
        .collect();

    let mut out = String::new();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &w)| {
            let padded = format!("{:<w$}", truncate(&column.label, MAX_CELL_CHARS), w = w);
            style(padded).bold().to_string()
        })
        .collect();
    out.push_str(header.join(" │ ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|&w| "─".repeat(w)).collect();
    out.push_str(&rule.join("─┼─"));
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
            .collect();
        out.push_str(line.join(" │ ").trim_end());
        out.push('\n');
    }

    out
}

pub fn render_cards(table: &Table) -> String {
    let mut out = String::new();
    let border = "─".repeat(CARD_WIDTH);

    for record in table.iter() {
        let card = CardView::from_record(record);
        let inner = CARD_WIDTH - 2;

        out.push_str(&format!("┌{}\n", border));
        if let Some(url) = card.thumbnail {
            out.push_str(&format!("│ 🖼 {}\n", truncate(url, inner - 2)));
        }
        out.push_str(&format!(
            "│ {}: {}\n",
            style(field_label(BARCODE)).bold(),
            card.barcode
        ));
        out.push_str(&format!(
            "│ {}: {}\n",
            style(field_label(TITLE)).bold(),
            truncate(card.title, inner)
        ));
        out.push_str(&format!("└{}\n", border));
    }

    out
}

/// Status line, caption and the records in the chosen layout
pub fn render_outcome(outcome: &SearchOutcome, layout: LayoutMode) -> String {
    let body = match layout {
        LayoutMode::Grid => render_grid(&outcome.table),
        LayoutMode::Cards => render_cards(&outcome.table),
    };

    format!("{}\n{}\n{}", render_status(&outcome.status), DATA_CAPTION, body)
}
