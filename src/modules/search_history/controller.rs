use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::instrument;

use marquee_core::AppError;
use marquee_models::SaveSearchHistoryDto;

use crate::middleware::auth::CurrentUser;
use crate::modules::search_history::service::SearchHistoryService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn save_search_history(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<SaveSearchHistoryDto>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let entry = SearchHistoryService::save(&state.db, user.id(), dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "content": entry })),
    ))
}

#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn get_search_history(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Value>, AppError> {
    let entries = SearchHistoryService::list(&state.db, user.id()).await?;

    Ok(Json(json!({ "success": true, "content": entries })))
}

#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn remove_search_history_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = SearchHistoryService::remove(&state.db, user.id(), id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Item removed from search history",
        "deleted_count": deleted,
    })))
}

#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn clear_search_history(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Value>, AppError> {
    let deleted = SearchHistoryService::clear(&state.db, user.id()).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Search history cleared",
        "deleted_count": deleted,
    })))
}
