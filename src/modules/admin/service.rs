use sqlx::PgPool;
use tracing::instrument;

use marquee_core::AppError;
use marquee_models::UserSummary;

pub struct AdminService;

impl AdminService {
    #[instrument]
    pub async fn list_users(db: &PgPool) -> Result<Vec<UserSummary>, AppError> {
        let users = sqlx::query_as::<_, UserSummary>(
            "SELECT id, username, email, role, created_at FROM users ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        Ok(users)
    }
}
