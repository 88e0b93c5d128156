use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;

use marquee_auth::{CredentialExtractor, TokenCodec};
use marquee_config::{CorsConfig, Environment, JwtConfig, ServerConfig};

use crate::identity::{IdentityResolver, PgUserStore, UserStore};
use crate::middleware::auth::AuthGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub auth: AuthGate,
    pub cors_config: CorsConfig,
    pub environment: Environment,
}

impl AppState {
    /// Builds state whose auth gate resolves users from `db`.
    pub fn new(
        db: PgPool,
        jwt_config: &JwtConfig,
        server_config: &ServerConfig,
        cors_config: CorsConfig,
    ) -> Self {
        let store = Arc::new(PgUserStore::new(db.clone()));
        Self::with_user_store(db, store, jwt_config, server_config, cors_config)
    }

    /// Builds state with an explicit user store behind the auth gate.
    pub fn with_user_store(
        db: PgPool,
        store: Arc<dyn UserStore>,
        jwt_config: &JwtConfig,
        server_config: &ServerConfig,
        cors_config: CorsConfig,
    ) -> Self {
        let auth = AuthGate::new(
            CredentialExtractor::new(jwt_config.cookie_name.clone()),
            TokenCodec::new(jwt_config),
            IdentityResolver::new(store, server_config.user_lookup_timeout),
            server_config.environment,
        );

        Self {
            db,
            auth,
            cors_config,
            environment: server_config.environment,
        }
    }
}

/// Loads configuration from the environment and connects the database.
pub async fn init_app_state(server_config: &ServerConfig) -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env(server_config.environment)?;
    let cors_config = CorsConfig::from_env();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let db = marquee_db::init_db_pool(&database_url).await?;

    Ok(AppState::new(db, &jwt_config, server_config, cors_config))
}
