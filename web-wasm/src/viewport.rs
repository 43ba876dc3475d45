//! One-shot browser width query

use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use puslespill_common::viewport::DETECTION_TIMEOUT_MS;
use puslespill_common::ViewportState;

fn inner_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    (width.is_finite() && width >= 0.0).then(|| width as u32)
}

/// Reads `window.innerWidth` after the first tick, or gives up after the
/// detection timeout. Either failure renders the grid.
pub async fn detect_viewport() -> ViewportState {
    let measure = Box::pin(async {
        TimeoutFuture::new(0).await;
        inner_width()
    });
    let timeout = Box::pin(TimeoutFuture::new(DETECTION_TIMEOUT_MS));

    match select(measure, timeout).await {
        Either::Left((width, _)) => ViewportState::from(width),
        Either::Right(_) => ViewportState::Failed,
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn wasm_detect_viewport_resolves_in_browser() {
        let state = detect_viewport().await;
        assert!(matches!(state, ViewportState::Resolved(w) if w > 0));
        assert!(state.layout().is_some());
    }
}
