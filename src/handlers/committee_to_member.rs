use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{CommitteeToMemberDraft, IdList, UpdateInput};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/committee-to-member",
            get(get_list).post(create).put(update).delete(delete_array),
        )
        .route(
            "/committee-to-member/:id",
            get(get_by_id).delete(delete_by_id),
        )
        .route(
            "/committee-to-member/member/:member_id",
            get(get_by_member_id),
        )
        .route(
            "/committee-to-member/committee/:committee_id",
            get(get_by_committee_id),
        )
        .route(
            "/committee-to-member/cadence/:cadence_id",
            get(get_by_cadence_id),
        )
}

/// GET /committee-to-member - list all links, projected
async fn get_list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let links = state.committee_links.get_list().await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// GET /committee-to-member/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let link = state.committee_links.get_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": link })))
}

/// GET /committee-to-member/member/:member_id
async fn get_by_member_id(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let links = state.committee_links.get_by_member_id(member_id).await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// GET /committee-to-member/committee/:committee_id
async fn get_by_committee_id(
    State(state): State<AppState>,
    Path(committee_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let links = state
        .committee_links
        .get_by_committee_id(committee_id)
        .await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// GET /committee-to-member/cadence/:cadence_id
async fn get_by_cadence_id(
    State(state): State<AppState>,
    Path(cadence_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let links = state.committee_links.get_by_cadence_id(cadence_id).await?;
    Ok(Json(json!({ "success": true, "data": links })))
}

/// POST /committee-to-member - returns only the generated id
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CommitteeToMemberDraft>,
) -> Result<Json<Value>, ApiError> {
    let created = state.committee_links.create(input).await?;
    Ok(Json(json!({ "success": true, "data": created })))
}

/// PUT /committee-to-member - full replace, body carries the id
async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateInput<Uuid, CommitteeToMemberDraft>>,
) -> Result<Json<Value>, ApiError> {
    let updated = state.committee_links.update(input.id, input.data).await?;
    Ok(Json(json!({ "success": true, "data": updated })))
}

/// DELETE /committee-to-member/:id
async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.committee_links.delete_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}

/// DELETE /committee-to-member - bulk
async fn delete_array(
    State(state): State<AppState>,
    Json(input): Json<IdList<Uuid>>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.committee_links.delete_array(input.id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}
