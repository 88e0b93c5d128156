use crate::logging::logging_middleware;
use crate::middleware::auth::require_auth;
use crate::middleware::role::AuthorizationPolicy;
use crate::modules::admin::init_admin_router;
use crate::modules::health::init_health_router;
use crate::modules::search_history::init_search_router;
use crate::modules::user_lists::init_user_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

pub fn init_router(state: AppState) -> Router {
    let any_user = state.auth.guard(AuthorizationPolicy::any());
    let admin_only = state.auth.guard(AuthorizationPolicy::admin());

    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(init_health_router())
                .nest(
                    "/user",
                    init_user_router().route_layer(middleware::from_fn_with_state(
                        any_user.clone(),
                        require_auth,
                    )),
                )
                .nest(
                    "/v1/search",
                    init_search_router()
                        .route_layer(middleware::from_fn_with_state(any_user, require_auth)),
                )
                .nest(
                    "/admin",
                    init_admin_router()
                        .route_layer(middleware::from_fn_with_state(admin_only, require_auth)),
                ),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
