use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use marquee_models::UserRow;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("user lookup query failed: {0}")]
    Query(#[from] sqlx::Error),
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to user records by primary key.
///
/// Implementations must not cache: every call reflects the store as it is
/// right now, so deleted or demoted users lose access on their next request.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_id(&self, id: i64) -> Result<Option<UserRow>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self))]
    async fn find_user_by_id(&self, id: i64) -> Result<Option<UserRow>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, role FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
