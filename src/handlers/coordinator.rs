use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{CoordinatorDraft, IdList, UpdateInput};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/coordinator",
            get(get_list).post(create).put(update).delete(delete_array),
        )
        .route("/coordinator/:id", get(get_by_id).delete(delete_by_id))
}

/// GET /coordinator - list all coordinators
async fn get_list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let coordinators = state.coordinators.get_list().await?;
    Ok(Json(json!({ "success": true, "data": coordinators })))
}

/// GET /coordinator/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let coordinator = state.coordinators.get_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": coordinator })))
}

/// POST /coordinator
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CoordinatorDraft>,
) -> Result<Json<Value>, ApiError> {
    let coordinator = state.coordinators.create(input).await?;
    Ok(Json(json!({ "success": true, "data": coordinator })))
}

/// PUT /coordinator - full replace, body carries the id
async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateInput<i64, CoordinatorDraft>>,
) -> Result<Json<Value>, ApiError> {
    let coordinator = state.coordinators.update(input.id, input.data).await?;
    Ok(Json(json!({ "success": true, "data": coordinator })))
}

/// DELETE /coordinator/:id
async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let coordinator = state.coordinators.delete_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": coordinator })))
}

/// DELETE /coordinator - bulk
async fn delete_array(
    State(state): State<AppState>,
    Json(input): Json<IdList<i64>>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.coordinators.delete_array(input.id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}
