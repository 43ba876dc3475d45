//! Google Drive / Sheets REST calls
//!
//! 1. Drive `files.list` finds the spreadsheet by name
//! 2. `spreadsheets.get` gives the first worksheet's title
//! 3. `spreadsheets.values.get` reads the whole worksheet

use super::auth::fetch_access_token;
use super::credentials::ServiceAccountKey;
use super::RecordSource;
use crate::error::{Result, ViewError};
use puslespill_common::{table_from_values, Table};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
pub const SHEETS_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";

/// API base URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub drive_files: String,
    pub sheets: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            drive_files: DRIVE_FILES_URL.to_string(),
            sheets: SHEETS_URL.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Deserialize)]
struct DriveFile {
    id: String,
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Deserialize)]
struct Sheet {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
    #[serde(default)]
    index: u32,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Drive search expression for a spreadsheet with exactly this name
pub fn drive_name_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        "name = '{}' and mimeType = '{}' and trashed = false",
        escaped, SPREADSHEET_MIME
    )
}

/// A1 range covering a whole worksheet
pub fn sheet_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// `{sheets}/{id}/values/{range}` with each part percent-encoded
pub fn values_url(sheets_base: &str, spreadsheet_id: &str, range: &str) -> Result<Url> {
    let mut url = Url::parse(sheets_base)
        .map_err(|e| ViewError::Config(format!("invalid Sheets URL {}: {}", sheets_base, e)))?;
    url.path_segments_mut()
        .map_err(|_| ViewError::Config(format!("invalid Sheets URL {}", sheets_base)))?
        .push(spreadsheet_id)
        .push("values")
        .push(range);
    Ok(url)
}

fn spreadsheet_url(sheets_base: &str, spreadsheet_id: &str) -> Result<Url> {
    let mut url = Url::parse(sheets_base)
        .map_err(|e| ViewError::Config(format!("invalid Sheets URL {}: {}", sheets_base, e)))?;
    url.path_segments_mut()
        .map_err(|_| ViewError::Config(format!("invalid Sheets URL {}", sheets_base)))?
        .push(spreadsheet_id);
    Ok(url)
}

/// Message from a Google error body, or the raw body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}

/// Non-success status → error kind
pub fn status_error(status: StatusCode, what: &str, body: &str) -> ViewError {
    let message = api_error_message(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ViewError::Authentication(format!("{}: {}", what, message))
        }
        StatusCode::NOT_FOUND => ViewError::NotFound(what.to_string()),
        _ => ViewError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

async fn check(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, what, &body))
}

/// Live spreadsheet reader
pub struct SheetsSource {
    http: reqwest::Client,
    key: ServiceAccountKey,
    spreadsheet: String,
    endpoints: Endpoints,
}

impl SheetsSource {
    pub fn new(key: ServiceAccountKey, spreadsheet: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            key,
            spreadsheet: spreadsheet.into(),
            endpoints: Endpoints::default(),
        })
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn spreadsheet(&self) -> &str {
        &self.spreadsheet
    }

    async fn find_spreadsheet_id(&self, token: &str) -> Result<String> {
        let query = drive_name_query(&self.spreadsheet);
        let response = self
            .http
            .get(&self.endpoints.drive_files)
            .bearer_auth(token)
            .query(&[
                ("q", query.as_str()),
                ("fields", "files(id,name)"),
                ("pageSize", "10"),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ])
            .send()
            .await?;

        let list: FileList = check(response, "Drive file list").await?.json().await?;

        if list.files.len() > 1 {
            warn!(
                spreadsheet = %self.spreadsheet,
                count = list.files.len(),
                "several spreadsheets share this name, using the first"
            );
        }

        list.files
            .into_iter()
            .next()
            .map(|file| {
                debug!(id = %file.id, name = %file.name, "spreadsheet found");
                file.id
            })
            .ok_or_else(|| ViewError::NotFound(format!("spreadsheet '{}'", self.spreadsheet)))
    }

    async fn first_sheet_title(&self, token: &str, spreadsheet_id: &str) -> Result<String> {
        let url = spreadsheet_url(&self.endpoints.sheets, spreadsheet_id)?;
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(&[("fields", "sheets.properties(title,index)")])
            .send()
            .await?;

        let what = format!("spreadsheet '{}'", self.spreadsheet);
        let spreadsheet: Spreadsheet = check(response, &what).await?.json().await?;

        spreadsheet
            .sheets
            .into_iter()
            .min_by_key(|sheet| sheet.properties.index)
            .map(|sheet| sheet.properties.title)
            .ok_or_else(|| ViewError::NotFound(format!("first worksheet of '{}'", self.spreadsheet)))
    }

    async fn fetch_values(&self, token: &str, spreadsheet_id: &str, title: &str) -> Result<Vec<Vec<Value>>> {
        let url = values_url(&self.endpoints.sheets, spreadsheet_id, &sheet_range(title))?;
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(&[
                ("majorDimension", "ROWS"),
                ("valueRenderOption", "UNFORMATTED_VALUE"),
                ("dateTimeRenderOption", "FORMATTED_STRING"),
            ])
            .send()
            .await?;

        let what = format!("worksheet '{}'", title);
        let range: ValueRange = check(response, &what).await?.json().await?;
        Ok(range.values)
    }
}

impl RecordSource for SheetsSource {
    async fn fetch_table(&self) -> Result<Table> {
        let token = fetch_access_token(&self.http, &self.key).await?;
        let spreadsheet_id = self.find_spreadsheet_id(&token).await?;
        let title = self.first_sheet_title(&token, &spreadsheet_id).await?;
        let values = self.fetch_values(&token, &spreadsheet_id, &title).await?;

        let table = table_from_values(&values)?;
        info!(
            spreadsheet = %self.spreadsheet,
            worksheet = %title,
            records = table.len(),
            "spreadsheet loaded"
        );
        Ok(table)
    }
}
