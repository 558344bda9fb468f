use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{CadenceDraft, IdList, UpdateInput};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cadence",
            get(get_list).post(create).put(update).delete(delete_array),
        )
        .route("/cadence/:id", get(get_by_id))
}

/// GET /cadence - list all cadences
async fn get_list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let cadences = state.cadences.get_list().await?;
    Ok(Json(json!({ "success": true, "data": cadences })))
}

/// GET /cadence/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let cadence = state.cadences.get_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": cadence })))
}

/// POST /cadence
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CadenceDraft>,
) -> Result<Json<Value>, ApiError> {
    let cadence = state.cadences.create(input).await?;
    Ok(Json(json!({ "success": true, "data": cadence })))
}

/// PUT /cadence - full replace, body carries the id
async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateInput<Uuid, CadenceDraft>>,
) -> Result<Json<Value>, ApiError> {
    let cadence = state.cadences.update(input.id, input.data).await?;
    Ok(Json(json!({ "success": true, "data": cadence })))
}

/// DELETE /cadence - bulk only
async fn delete_array(
    State(state): State<AppState>,
    Json(input): Json<IdList<Uuid>>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.cadences.delete(input.id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}
