use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::instrument;

use marquee_core::AppError;

use crate::middleware::auth::CurrentUser;
use crate::modules::admin::service::AdminService;
use crate::state::AppState;

#[instrument(skip(state, admin), fields(admin_id = admin.id()))]
pub async fn list_users(
    State(state): State<AppState>,
    admin: CurrentUser,
) -> Result<Json<Value>, AppError> {
    let users = AdminService::list_users(&state.db).await?;

    Ok(Json(json!({ "success": true, "users": users })))
}
