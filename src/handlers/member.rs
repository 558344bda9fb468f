use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{IdList, MemberDraft, UpdateInput};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/member",
            get(get_list).post(create).put(update).delete(delete_array),
        )
        .route("/member/:id", get(get_by_id).delete(delete_by_id))
}

/// GET /member - list all members
async fn get_list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let members = state.members.get_list().await?;
    Ok(Json(json!({ "success": true, "data": members })))
}

/// GET /member/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let member = state.members.get_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": member })))
}

/// POST /member
async fn create(
    State(state): State<AppState>,
    Json(input): Json<MemberDraft>,
) -> Result<Json<Value>, ApiError> {
    let member = state.members.create(input).await?;
    Ok(Json(json!({ "success": true, "data": member })))
}

/// PUT /member - full replace, body carries the id
async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateInput<Uuid, MemberDraft>>,
) -> Result<Json<Value>, ApiError> {
    let member = state.members.update(input.id, input.data).await?;
    Ok(Json(json!({ "success": true, "data": member })))
}

/// DELETE /member/:id
async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.members.delete_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}

/// DELETE /member - bulk, position-correlated reply
async fn delete_array(
    State(state): State<AppState>,
    Json(input): Json<IdList<Uuid>>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.members.delete_array_by_id(input.id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}
