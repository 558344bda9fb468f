use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{BoardDraft, IdList, UpdateInput};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/board",
            get(get_list).post(create).put(update).delete(delete_array),
        )
        .route("/board/:id", get(get_by_id).delete(delete_by_id))
}

/// GET /board - list all boards
async fn get_list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let boards = state.boards.get_list().await?;
    Ok(Json(json!({ "success": true, "data": boards })))
}

/// GET /board/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let board = state.boards.get_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": board })))
}

/// POST /board
async fn create(
    State(state): State<AppState>,
    Json(input): Json<BoardDraft>,
) -> Result<Json<Value>, ApiError> {
    let board = state.boards.create(input).await?;
    Ok(Json(json!({ "success": true, "data": board })))
}

/// PUT /board - full replace, body carries the id
async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateInput<i64, BoardDraft>>,
) -> Result<Json<Value>, ApiError> {
    let board = state.boards.update(input.id, input.data).await?;
    Ok(Json(json!({ "success": true, "data": board })))
}

/// DELETE /board/:id
async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let board = state.boards.delete_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": board })))
}

/// DELETE /board - bulk
async fn delete_array(
    State(state): State<AppState>,
    Json(input): Json<IdList<i64>>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.boards.delete_array(input.id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}
