//! Mobile cards

use leptos::prelude::*;
use puslespill_common::layout::{field_label, CardView, CARD_THUMBNAIL_WIDTH};
use puslespill_common::types::{BARCODE, TITLE};
use puslespill_common::Table;

#[component]
pub fn RecordCards(table: Table) -> impl IntoView {
    let cards = table
        .records
        .iter()
        .map(|record| {
            let card = CardView::from_record(record);
            let thumbnail = card.thumbnail.map(|url| {
                view! { <img class="thumbnail" src=url.to_string() width=CARD_THUMBNAIL_WIDTH.to_string() alt="" /> }
            });

            view! {
                <div class="card">
                    {thumbnail}
                    <p><strong>{field_label(BARCODE).to_string()}": "</strong>{card.barcode.to_string()}</p>
                    <p><strong>{field_label(TITLE).to_string()}": "</strong>{card.title.to_string()}</p>
                </div>
            }
        })
        .collect_view();

    view! { <div class="cards">{cards}</div> }
}
