use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{CoordinatorToMemberDraft, IdList, UpdateInput};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/coordinator-to-member",
            get(get_list).post(create).put(update).delete(delete_array),
        )
        .route(
            "/coordinator-to-member/:id",
            get(get_by_id).delete(delete_by_id),
        )
        .route(
            "/coordinator-to-member/member/:member_id",
            get(get_by_member_id),
        )
        .route(
            "/coordinator-to-member/coordinator/:coordinator_id",
            get(get_by_coordinator_id),
        )
        .route(
            "/coordinator-to-member/cadence/:cadence_id",
            get(get_by_cadence_id),
        )
}

/// GET /coordinator-to-member - list all links, projected
async fn get_list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let links = state.coordinator_links.get_list().await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// GET /coordinator-to-member/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let link = state.coordinator_links.get_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": link })))
}

/// GET /coordinator-to-member/member/:member_id
async fn get_by_member_id(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let links = state.coordinator_links.get_by_member_id(member_id).await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// GET /coordinator-to-member/coordinator/:coordinator_id
async fn get_by_coordinator_id(
    State(state): State<AppState>,
    Path(coordinator_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let links = state
        .coordinator_links
        .get_by_coordinator_id(coordinator_id)
        .await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// GET /coordinator-to-member/cadence/:cadence_id
async fn get_by_cadence_id(
    State(state): State<AppState>,
    Path(cadence_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let links = state.coordinator_links.get_by_cadence_id(cadence_id).await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// POST /coordinator-to-member - returns only the generated id
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CoordinatorToMemberDraft>,
) -> Result<Json<Value>, ApiError> {
    let created = state.coordinator_links.create(input).await?;
    Ok(Json(json!({ "success": true, "data": created })))
}

/// PUT /coordinator-to-member - full replace, body carries the id
async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateInput<i64, CoordinatorToMemberDraft>>,
) -> Result<Json<Value>, ApiError> {
    let updated = state.coordinator_links.update(input.id, input.data).await?;
    Ok(Json(json!({ "success": true, "data": updated })))
}

/// DELETE /coordinator-to-member/:id
async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.coordinator_links.delete_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}

/// DELETE /coordinator-to-member - bulk
async fn delete_array(
    State(state): State<AppState>,
    Json(input): Json<IdList<i64>>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.coordinator_links.delete_array(input.id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}
