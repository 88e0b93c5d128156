use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::list_users;

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}
