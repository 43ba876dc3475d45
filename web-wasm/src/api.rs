//! Host API client
//!
//! The host holds the service account key and the fetch cache; the browser
//! only ever sees `GET /api/records`.

use puslespill_common::{RecordsResponse, Table};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const RECORDS_PATH: &str = "/api/records";

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

async fn get_records() -> Result<RecordsResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(RECORDS_PATH, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        // The host answers errors with their text
        let body = JsFuture::from(resp.text()?).await?.as_string().unwrap_or_default();
        return Err(JsValue::from_str(&format!("{} ({})", body.trim(), resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: RecordsResponse = serde_wasm_bindgen::from_value(json)?;
    Ok(response)
}

/// Full, unfiltered table from the host
pub async fn fetch_table() -> Result<Table, String> {
    let response = get_records().await.map_err(js_error)?;
    web_sys::console::log_1(&JsValue::from_str(&response.status.message));
    Ok(response.into_table())
}
