use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{CommitteeDraft, IdList, UpdateInput};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/committee",
            get(get_list).post(create).put(update).delete(delete_array),
        )
        .route("/committee/:id", get(get_by_id).delete(delete_by_id))
}

/// GET /committee - list all committees
async fn get_list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let committees = state.committees.get_list().await?;
    Ok(Json(json!({ "success": true, "data": committees })))
}

/// GET /committee/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let committee = state.committees.get_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": committee })))
}

/// POST /committee
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CommitteeDraft>,
) -> Result<Json<Value>, ApiError> {
    let committee = state.committees.create(input).await?;
    Ok(Json(json!({ "success": true, "data": committee })))
}

/// PUT /committee - full replace, body carries the id
async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateInput<Uuid, CommitteeDraft>>,
) -> Result<Json<Value>, ApiError> {
    let committee = state.committees.update(input.id, input.data).await?;
    Ok(Json(json!({ "success": true, "data": committee })))
}

/// DELETE /committee/:id
async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let committee = state.committees.delete_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": committee })))
}

/// DELETE /committee - bulk
async fn delete_array(
    State(state): State<AppState>,
    Json(input): Json<IdList<Uuid>>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.committees.delete_array(input.id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}
