use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{IdList, TranslationDraft, UpdateInput};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/translation",
            get(get_list).post(create).put(update).delete(delete_array),
        )
        .route("/translation/:id", get(get_by_id).delete(delete_by_id))
}

/// GET /translation - list all translations
async fn get_list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let translations = state.translations.get_list().await?;
    Ok(Json(json!({ "success": true, "data": translations })))
}

/// GET /translation/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let translation = state.translations.get_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": translation })))
}

/// POST /translation
async fn create(
    State(state): State<AppState>,
    Json(input): Json<TranslationDraft>,
) -> Result<Json<Value>, ApiError> {
    let translation = state.translations.create(input).await?;
    Ok(Json(json!({ "success": true, "data": translation })))
}

/// PUT /translation - full replace, body carries the id
async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateInput<i64, TranslationDraft>>,
) -> Result<Json<Value>, ApiError> {
    let translation = state.translations.update(input.id, input.data).await?;
    Ok(Json(json!({ "success": true, "data": translation })))
}

/// DELETE /translation/:id
async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let translation = state.translations.delete_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": translation })))
}

/// DELETE /translation - bulk
async fn delete_array(
    State(state): State<AppState>,
    Json(input): Json<IdList<i64>>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.translations.delete_array(input.id).await?;
    Ok(Json(json!({ "success": true, "data": deleted })))
}
