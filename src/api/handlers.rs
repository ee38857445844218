//! Axum request handlers for the HTTP API.
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::routes::AppState;
use crate::models::{RoastRequest, RoastResponse, StatusCheck, StatusCheckCreate};
use crate::openrouter::Generation;
use crate::utils::names;

const STATUS_LIST_LIMIT: usize = 1000;
const DEFAULT_ROAST_LIMIT: usize = 50;

pub async fn root() -> Json<Value> {
    Json(json!({"message": "Hello World"}))
}

pub async fn generate_roast(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RoastRequest>, JsonRejection>,
) -> Result<Json<RoastResponse>, ApiError> {
    let Json(request) = payload?;
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Name is required".to_string()));
    }

    let generation = state.completion_client.generate(&request.name, &request.category).await?;
    if let Generation::Fallback { reason, .. } = &generation {
        tracing::warn!(category = %request.category, "Serving fallback roast: {}", reason);
    }

    let response = RoastResponse::new(generation.into_text(), request.name, request.category);

    // Analytics only; the caller gets the roast either way.
    if let Err(e) = state.store.insert_roast(&response).await {
        tracing::warn!("Failed to store roast in database: {}", e);
    }

    Ok(Json(response))
}

pub async fn random_names() -> Json<Value> {
    Json(json!({ "names": names::random_names() }))
}

pub async fn create_status_check(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StatusCheckCreate>, JsonRejection>,
) -> Result<Json<StatusCheck>, ApiError> {
    let Json(input) = payload?;
    let status = StatusCheck::from(input);
    state.store.insert_status(&status).await?;
    Ok(Json(status))
}

pub async fn list_status_checks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = state.store.list_status(STATUS_LIST_LIMIT).await?;
    Ok(Json(checks))
}

#[derive(Debug, Deserialize)]
pub struct RoastsQuery {
    limit: Option<usize>,
}

pub async fn recent_roasts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RoastsQuery>,
) -> Result<Json<Vec<RoastResponse>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_ROAST_LIMIT);
    let roasts = state.store.recent_roasts(limit).await?;
    Ok(Json(roasts))
}
