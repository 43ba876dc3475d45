//! Desktop grid
//!
//! Fixed-height scrolling table, columns in sheet order, no index column.

use leptos::prelude::*;
use puslespill_common::layout::GRID_HEIGHT;
use puslespill_common::{grid_columns, ColumnKind, GridColumn, Record, Table};

fn cell(column: &GridColumn, record: &Record) -> impl IntoView {
    let value = column.value(record).map(str::to_string);
    match (column.kind, value) {
        (ColumnKind::Image, Some(url)) => view! {
            <td class="cell-image"><img src=url loading="lazy" alt="" /></td>
        }
        .into_any(),
        (_, value) => view! { <td>{value.unwrap_or_default()}</td> }.into_any(),
    }
}

#[component]
pub fn RecordGrid(table: Table) -> impl IntoView {
    let columns = grid_columns(&table);

    let header = columns
        .iter()
        .map(|column| {
            view! { <th title=column.help.clone()>{column.label.clone()}</th> }
        })
        .collect_view();

    let rows = table
        .records
        .iter()
        .map(|record| {
            let cells = columns.iter().map(|column| cell(column, record)).collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="grid" style=format!("height: {}px", GRID_HEIGHT)>
            <table>
                <thead><tr>{header}</tr></thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
