use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{BoardToMemberDraft, IdList, UpdateInput};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/board-to-member",
            get(get_list).post(create).put(update).delete(delete_array),
        )
        .route("/board-to-member/:id", get(get_by_id).delete(delete_by_id))
        .route("/board-to-member/member/:member_id", get(get_by_member_id))
        .route("/board-to-member/board/:board_id", get(get_by_board_id))
        .route("/board-to-member/cadence/:cadence_id", get(get_by_cadence_id))
}

/// GET /board-to-member - list all links, projected
async fn get_list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let links = state.board_links.get_list().await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// GET /board-to-member/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let link = state.board_links.get_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": link })))
}

/// GET /board-to-member/member/:member_id
async fn get_by_member_id(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let links = state.board_links.get_by_member_id(member_id).await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// GET /board-to-member/board/:board_id
async fn get_by_board_id(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let links = state.board_links.get_by_board_id(board_id).await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// GET /board-to-member/cadence/:cadence_id
async fn get_by_cadence_id(
    State(state): State<AppState>,
    Path(cadence_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let links = state.board_links.get_by_cadence_id(cadence_id).await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// POST /board-to-member - returns only the generated id
async fn create(
    State(state): State<AppState>,
    Json(input): Json<BoardToMemberDraft>,
) -> Result<Json<Value>, ApiError> {
    let created = state.board_links.create(input).await?;
    Ok(Json(json!({ "success": true, "data": created })))
}

/// PUT /board-to-member - full replace, body carries the id
async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateInput<i64, BoardToMemberDraft>>,
) -> Result<Json<Value>, ApiError> {
    let updated = state.board_links.update(input.id, input.data).await?;
    Ok(Json(json!({ "success": true, "data": updated })))
}

/// DELETE /board-to-member/:id
async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.board_links.delete_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}

/// DELETE /board-to-member - bulk
async fn delete_array(
    State(state): State<AppState>,
    Json(input): Json<IdList<i64>>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.board_links.delete_array(input.id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}
