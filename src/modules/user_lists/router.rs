use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    add_to_likes, add_to_watchlist, get_likes, get_me, get_watchlist, remove_from_likes,
    remove_from_watchlist,
};

pub fn init_user_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/watchlist", get(get_watchlist))
        .route(
            "/watchlist/{movie_id}",
            post(add_to_watchlist).delete(remove_from_watchlist),
        )
        .route("/likes", get(get_likes))
        .route("/likes/{movie_id}", post(add_to_likes).delete(remove_from_likes))
}
