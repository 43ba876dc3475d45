use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use puslespill_common::{search, RecordsResponse};
use serde::Deserialize;
use tracing::debug;

use super::ServerState;
use crate::{
    error::ViewError,
    sheets::{load_table, RecordSource},
};

#[derive(Debug, Default, Deserialize)]
pub struct RecordsParams {
    #[serde(default)]
    pub q: String,
}

pub async fn records_handler<S: RecordSource>(
    State(state): State<Arc<ServerState<S>>>,
    Query(params): Query<RecordsParams>,
) -> Result<Json<RecordsResponse>, ViewError> {
    let table = load_table(&state.source, state.sort_on_load).await?;
    let outcome = search(&table, &params.q);

    debug!(query = %outcome.query.as_str(), status = %outcome.status, "records served");

    Ok(Json(RecordsResponse::from(outcome)))
}

pub async fn health_handler() -> &'static str {
    "ok"
}
