use leptos::prelude::*;
use puslespill_common::StatusLevel;

#[component]
pub fn StatusBanner(level: StatusLevel, message: String) -> impl IntoView {
    view! {
        <div class=format!("status status-{}", level.as_str()) role="status">
            {message}
        </div>
    }
}
