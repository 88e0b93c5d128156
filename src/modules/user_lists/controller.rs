use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::instrument;

use marquee_core::{ApiMessage, AppError};
use marquee_models::AddMediaDto;

use crate::middleware::auth::CurrentUser;
use crate::modules::user_lists::service::{MediaList, UserListService};
use crate::state::AppState;
use crate::validator::ValidatedJson;

async fn add(
    state: &AppState,
    list: MediaList,
    user: &CurrentUser,
    movie_id: i64,
    dto: AddMediaDto,
) -> Result<(StatusCode, Json<ApiMessage>), AppError> {
    UserListService::add_item(&state.db, list, user.id(), movie_id, dto.media_type).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::ok(format!("Added to {}", list.label()))),
    ))
}

async fn remove(
    state: &AppState,
    list: MediaList,
    user: &CurrentUser,
    movie_id: i64,
) -> Result<Json<ApiMessage>, AppError> {
    UserListService::remove_item(&state.db, list, user.id(), movie_id).await?;

    Ok(Json(ApiMessage::ok(format!("Removed from {}", list.label()))))
}

async fn list_all(
    state: &AppState,
    list: MediaList,
    user: &CurrentUser,
) -> Result<Json<Value>, AppError> {
    let items = UserListService::list_items(&state.db, list, user.id()).await?;

    Ok(Json(json!({
        "success": true,
        list.response_key(): items,
    })))
}

#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn add_to_watchlist(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(movie_id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<AddMediaDto>,
) -> Result<(StatusCode, Json<ApiMessage>), AppError> {
    add(&state, MediaList::Watchlist, &user, movie_id, dto).await
}

#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(movie_id): Path<i64>,
) -> Result<Json<ApiMessage>, AppError> {
    remove(&state, MediaList::Watchlist, &user, movie_id).await
}

#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn get_watchlist(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Value>, AppError> {
    list_all(&state, MediaList::Watchlist, &user).await
}

#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn add_to_likes(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(movie_id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<AddMediaDto>,
) -> Result<(StatusCode, Json<ApiMessage>), AppError> {
    add(&state, MediaList::Likes, &user, movie_id, dto).await
}

#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn remove_from_likes(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(movie_id): Path<i64>,
) -> Result<Json<ApiMessage>, AppError> {
    remove(&state, MediaList::Likes, &user, movie_id).await
}

#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn get_likes(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Value>, AppError> {
    list_all(&state, MediaList::Likes, &user).await
}

/// The caller's own profile, as resolved by the auth gate.
#[instrument(skip(user), fields(user_id = user.id()))]
pub async fn get_me(user: CurrentUser) -> Json<Value> {
    Json(json!({
        "success": true,
        "user": user.0,
    }))
}
