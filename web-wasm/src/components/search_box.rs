//! Barcode search input
//!
//! Every `input` event writes the raw text to the query signal; trimming
//! and matching happen in the search engine.

use leptos::prelude::*;
use puslespill_common::layout::{SEARCH_HELP, SEARCH_LABEL, SEARCH_PLACEHOLDER};

#[component]
pub fn SearchBox(query: ReadSignal<String>, set_query: WriteSignal<String>) -> impl IntoView {
    view! {
        <div class="search-box">
            <label for="ean-search" title=SEARCH_HELP>{SEARCH_LABEL}</label>
            <input
                id="ean-search"
                type="search"
                inputmode="numeric"
                autocomplete="off"
                placeholder=SEARCH_PLACEHOLDER
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <small class="help">{SEARCH_HELP}</small>
        </div>
    }
}
