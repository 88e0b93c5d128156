use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use marquee_core::AppError;
use marquee_models::{SaveSearchHistoryDto, SearchHistoryEntry};

pub struct SearchHistoryService;

impl SearchHistoryService {
    /// Records a search. Searching for the same item again moves it to the
    /// top instead of adding a duplicate.
    #[instrument]
    pub async fn save(
        db: &PgPool,
        user_id: i64,
        dto: SaveSearchHistoryDto,
    ) -> Result<SearchHistoryEntry, AppError> {
        let mut tx = db.begin().await?;

        sqlx::query(
            "DELETE FROM search_history WHERE user_id = $1 AND item_id = $2 AND search_type = $3",
        )
        .bind(user_id)
        .bind(dto.id)
        .bind(dto.search_type.as_str())
        .execute(&mut *tx)
        .await?;

        let entry = sqlx::query_as::<_, SearchHistoryEntry>(
            r#"INSERT INTO search_history (user_id, item_id, image, title, search_type)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING item_id, image, title, search_type, created_at"#,
        )
        .bind(user_id)
        .bind(dto.id)
        .bind(&dto.image)
        .bind(&dto.title)
        .bind(dto.search_type.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(entry)
    }

    /// Newest first.
    #[instrument]
    pub async fn list(db: &PgPool, user_id: i64) -> Result<Vec<SearchHistoryEntry>, AppError> {
        let entries = sqlx::query_as::<_, SearchHistoryEntry>(
            r#"SELECT item_id, image, title, search_type, created_at
               FROM search_history
               WHERE user_id = $1
               ORDER BY created_at DESC, id DESC"#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(entries)
    }

    #[instrument]
    pub async fn remove(db: &PgPool, user_id: i64, item_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM search_history WHERE user_id = $1 AND item_id = $2")
            .bind(user_id)
            .bind(item_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Item not found in search history")));
        }

        Ok(result.rows_affected())
    }

    #[instrument]
    pub async fn clear(db: &PgPool, user_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM search_history WHERE user_id = $1")
            .bind(user_id)
            .execute(db)
            .await?;

        Ok(result.rows_affected())
    }
}
