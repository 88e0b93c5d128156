//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: the auth gate middleware and the [`CurrentUser`](auth::CurrentUser) extractor
//! - [`role`]: route authorization policies and the role check
//!
//! # Authentication Flow
//!
//! 1. Client sends the `jwt-netflix` cookie or an `Authorization: Bearer <token>` header
//! 2. `require_auth` verifies the token and loads the user it names
//! 3. The user's role is checked against the route group's policy
//! 4. Handler executes with the resolved identity available via `CurrentUser`
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware};
//! use crate::middleware::auth::{CurrentUser, require_auth};
//! use crate::middleware::role::AuthorizationPolicy;
//!
//! let admin_routes = Router::new()
//!     .route("/users", get(list_users))
//!     .route_layer(middleware::from_fn_with_state(
//!         state.auth.guard(AuthorizationPolicy::admin()),
//!         require_auth,
//!     ));
//!
//! async fn list_users(CurrentUser(identity): CurrentUser) -> impl IntoResponse {
//!     // Only executes for admins
//! }
//! ```

pub mod auth;
pub mod role;
