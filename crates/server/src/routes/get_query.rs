//! An api call to `GET /json` ends up here.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::{Map, Value};

use sqlbridge_inference::{parse_name_hints, parse_type_hints, ResultEnvelope};

use crate::error::ServerError;
use crate::state::ServerState;

/// The recognized query-string fields; anything else is ignored.
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    query: Option<String>,
    types: Option<String>,
    names: Option<String>,
}

pub async fn get_query(
    State(state): State<ServerState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Response, ServerError> {
    let Query(params) =
        params.map_err(|rejection| ServerError::Unhandled(rejection.status()))?;

    // Validation trims; execution passes the text through untouched.
    let sql = params.query.as_deref().unwrap_or_default();
    if sql.trim().is_empty() {
        return Err(ServerError::MissingQuery);
    }

    let type_hints = parse_type_hints(params.types.as_deref().unwrap_or_default());
    let name_hints = parse_name_hints(params.names.as_deref().unwrap_or_default());

    let result_set = state.executor.run(sql).await?;

    // Zero rows short-circuit to `{}`; schema inference never runs.
    if result_set.is_empty() {
        return Ok(Json(Value::Object(Map::new())).into_response());
    }

    let envelope = ResultEnvelope::shape(result_set, &type_hints, &name_hints);

    Ok(Json(envelope).into_response())
}
