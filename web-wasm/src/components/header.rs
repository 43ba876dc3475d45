//! Header component

use leptos::prelude::*;
use puslespill_common::layout::PAGE_TITLE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{PAGE_TITLE}</h1>
        </header>
    }
}
