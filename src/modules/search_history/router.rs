use axum::{
    Router,
    routing::{delete, post},
};

use crate::state::AppState;

use super::controller::{
    clear_search_history, get_search_history, remove_search_history_item, save_search_history,
};

pub fn init_search_router() -> Router<AppState> {
    Router::new()
        .route("/history", post(save_search_history).get(get_search_history))
        .route("/history/clear-all", delete(clear_search_history))
        .route("/history/{id}", delete(remove_search_history_item))
}
