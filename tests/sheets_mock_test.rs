//! SheetsSource against a local stand-in for the Google endpoints
//!
//! The stand-in checks the bearer token and answers token, Drive and
//! Sheets requests with canned bodies.

use axum::extract::{Form, Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use puslespill_view::error::ViewError;
use puslespill_view::sheets::{Endpoints, RecordSource, ServiceAccountKey, SheetsSource};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use tokio::net::TcpListener;

const TEST_KEY_PEM: &str = include_str!("fixtures/test_service_account.pem");
const TOKEN: &str = "ya29.test-token";
const SHEET_ID: &str = "1AbCdEf";

#[derive(Clone, Copy)]
enum Drive {
    One,
    Two,
    Empty,
    Forbidden,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn token(Form(form): Form<HashMap<String, String>>) -> Response {
    let grant_ok = form.get("grant_type").map(String::as_str)
        == Some("urn:ietf:params:oauth:grant-type:jwt-bearer");
    // header.payload.signature
    let assertion_ok = form.get("assertion").is_some_and(|a| a.split('.').count() == 3);

    if grant_ok && assertion_ok {
        Json(json!({ "access_token": TOKEN, "expires_in": 3599, "token_type": "Bearer" })).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant", "error_description": "bad assertion" })),
        )
            .into_response()
    }
}

fn drive_files(mode: Drive, headers: HeaderMap, params: HashMap<String, String>) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let query = params.get("q").cloned().unwrap_or_default();
    assert!(query.starts_with("name = 'Puslespill'"), "unexpected drive query {query}");

    match mode {
        Drive::One => Json(json!({ "files": [{ "id": SHEET_ID, "name": "Puslespill" }] })).into_response(),
        Drive::Two => Json(json!({ "files": [
            { "id": SHEET_ID, "name": "Puslespill" },
            { "id": "other", "name": "Puslespill" }
        ] }))
        .into_response(),
        Drive::Empty => Json(json!({ "files": [] })).into_response(),
        Drive::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "code": 403, "message": "The caller does not have permission" } })),
        )
            .into_response(),
    }
}

async fn spreadsheet(Path(id): Path<String>, headers: HeaderMap) -> Response {
    if !authorized(&headers) || id != SHEET_ID {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({ "sheets": [
        { "properties": { "title": "Arkiv", "index": 1 } },
        { "properties": { "title": "Ark 1", "index": 0 } }
    ] }))
    .into_response()
}

async fn values(Path((id, range)): Path<(String, String)>, headers: HeaderMap) -> Response {
    if !authorized(&headers) || id != SHEET_ID || range != "'Ark 1'" {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({
        "range": "'Ark 1'!A1:E3",
        "majorDimension": "ROWS",
        "values": [
            ["Barcode", "Tittel", "Bilde1", "Bilde2", "Bilde3"],
            [7045952001235_i64, "Puzzle A", "https://example.com/a1.jpg"],
            ["1234567890123", "Puzzle B"]
        ]
    }))
    .into_response()
}

/// Serves the stand-in and returns a source pointed at it
async fn mock_source(mode: Drive) -> SheetsSource {
    let app = Router::new()
        .route("/token", post(token))
        .route(
            "/drive/v3/files",
            get(move |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| async move {
                drive_files(mode, headers, params)
            }),
        )
        .route("/v4/spreadsheets/{id}", get(spreadsheet))
        .route("/v4/spreadsheets/{id}/values/{range}", get(values));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let key: ServiceAccountKey = serde_json::from_value(json!({
        "type": "service_account",
        "project_id": "puslespill-test",
        "private_key_id": "test-key-1",
        "private_key": TEST_KEY_PEM,
        "client_email": "viewer@puslespill-test.iam.gserviceaccount.com",
        "token_uri": format!("{base}/token"),
    }))
    .unwrap();

    SheetsSource::new(key, "Puslespill", Duration::from_secs(5))
        .unwrap()
        .with_endpoints(Endpoints {
            drive_files: format!("{base}/drive/v3/files"),
            sheets: format!("{base}/v4/spreadsheets"),
        })
}

#[tokio::test]
async fn test_fetch_table_reads_first_worksheet() {
    let source = mock_source(Drive::One).await;

    let table = source.fetch_table().await.expect("fetch failed");

    assert_eq!(table.columns, vec!["Barcode", "Tittel", "Bilde1", "Bilde2", "Bilde3"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0].barcode, "7045952001235");
    assert_eq!(table.records[0].bilde1.as_deref(), Some("https://example.com/a1.jpg"));
    assert_eq!(table.records[1].barcode, "1234567890123");
    assert_eq!(table.records[1].bilde1, None);
}

#[tokio::test]
async fn test_duplicate_names_use_first() {
    let source = mock_source(Drive::Two).await;

    let table = source.fetch_table().await.expect("fetch failed");
    assert_eq!(table.len(), 2);
}

#[tokio::test]
async fn test_missing_spreadsheet_is_not_found() {
    let source = mock_source(Drive::Empty).await;

    let err = source.fetch_table().await.unwrap_err();
    assert!(matches!(err, ViewError::NotFound(ref what) if what.contains("Puslespill")));
}

#[tokio::test]
async fn test_permission_denied_is_authentication_error() {
    let source = mock_source(Drive::Forbidden).await;

    let err = source.fetch_table().await.unwrap_err();
    match err {
        ViewError::Authentication(message) => {
            assert!(message.contains("The caller does not have permission"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let key: ServiceAccountKey = serde_json::from_value(json!({
        "private_key": TEST_KEY_PEM,
        "client_email": "viewer@puslespill-test.iam.gserviceaccount.com",
        "token_uri": format!("{base}/token"),
    }))
    .unwrap();
    let source = SheetsSource::new(key, "Puslespill", Duration::from_secs(5)).unwrap();

    let err = source.fetch_table().await.unwrap_err();
    assert!(matches!(err, ViewError::Network(_)), "unexpected error: {err:?}");
}

#[test]
fn test_fixture_key_parses() {
    let value: Value = json!({
        "type": "service_account",
        "private_key": TEST_KEY_PEM,
        "client_email": "viewer@puslespill-test.iam.gserviceaccount.com",
    });
    let key = ServiceAccountKey::from_json(&value.to_string()).expect("fixture key rejected");
    assert_eq!(key.token_uri, "https://oauth2.googleapis.com/token");
}
