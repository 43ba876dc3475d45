//! Main application component

use leptos::prelude::*;
use leptos::task::spawn_local;
use puslespill_common::layout::DATA_CAPTION;
use puslespill_common::viewport::LOADING_MESSAGE;
use puslespill_common::{search, LayoutMode, StatusLevel, Table, ViewportState};

use crate::api::fetch_table;
use crate::components::{
    header::Header,
    record_cards::RecordCards,
    record_grid::RecordGrid,
    search_box::SearchBox,
    status_banner::StatusBanner,
};
use crate::viewport::detect_viewport;

/// Where the table load stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Table),
    Failed(String),
}

#[component]
pub fn App() -> impl IntoView {
    let (load, set_load) = signal(LoadState::Loading);
    let (viewport, set_viewport) = signal(ViewportState::Pending);
    let (query, set_query) = signal(String::new());

    spawn_local(async move {
        set_load.set(match fetch_table().await {
            Ok(table) => LoadState::Ready(table),
            Err(message) => LoadState::Failed(message),
        });
    });

    spawn_local(async move {
        set_viewport.set(detect_viewport().await);
    });

    // Recomputed on every keystroke, never refetched
    let outcome = Memo::new(move |_| match load.get() {
        LoadState::Ready(table) => Some(query.with(|q| search(&table, q))),
        _ => None,
    });

    let body = move || {
        if let LoadState::Failed(message) = load.get() {
            return view! { <StatusBanner level=StatusLevel::Error message=message /> }.into_any();
        }

        let Some(outcome) = outcome.get() else {
            return view! { <p class="text-muted">"Laster data fra Google Sheets..."</p> }.into_any();
        };

        let records = match viewport.get().layout() {
            None => view! { <p class="text-muted">{LOADING_MESSAGE}</p> }.into_any(),
            Some(LayoutMode::Grid) => view! { <RecordGrid table=outcome.table.clone() /> }.into_any(),
            Some(LayoutMode::Cards) => view! { <RecordCards table=outcome.table.clone() /> }.into_any(),
        };

        view! {
            <StatusBanner level=outcome.status.level() message=outcome.status.message() />
            <p class="caption">{DATA_CAPTION}</p>
            {records}
        }
        .into_any()
    };

    view! {
        <div class="container">
            <Header />
            <SearchBox query=query set_query=set_query />
            {body}
        </div>
    }
}
